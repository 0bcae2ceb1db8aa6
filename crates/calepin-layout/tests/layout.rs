use calepin_base::Result;
use calepin_catalog::{BlockKind, COURSE_HEIGHT};
use calepin_layout::{BlockCount, Course, Pattern, compute_layout};

fn kinds(course: &Course) -> Vec<BlockKind> {
    course.blocks().iter().map(|block| block.kind).collect()
}

#[test]
fn single_standard_wall() -> Result<()> {
    let layout = compute_layout(29.5, 14.0, 19.0)?;
    let bottom = layout.course(0).expect("bottom course");
    let second = layout.course(1).expect("second course");

    assert_eq!(kinds(bottom), vec![BlockKind::Standard]);
    assert_eq!(bottom.gap(), 0.0);
    assert_eq!(kinds(second), vec![BlockKind::Half, BlockKind::Half]);
    assert_eq!(second.gap(), 1.5);

    let count = layout.block_count();
    assert_eq!(count.get(BlockKind::Standard), 1);
    assert_eq!(count.get(BlockKind::ThreeQuarter), 0);
    assert_eq!(count.get(BlockKind::Half), 2);
    Ok(())
}

#[test]
fn five_metre_wall_matches_independent_rows() -> Result<()> {
    let layout = compute_layout(500.0, 14.0, 30.0)?;
    assert_eq!(layout.course_count(), 4);

    let patterns: Vec<Pattern> = layout.courses().map(Course::pattern).collect();
    assert_eq!(patterns, vec![Pattern::A, Pattern::B, Pattern::A, Pattern::B]);

    let row_a = compute_layout(500.0, 14.0, COURSE_HEIGHT)?.block_count();
    let rows_ab = compute_layout(500.0, 14.0, 2.0 * COURSE_HEIGHT)?.block_count();
    let row_b = BlockCount {
        standard: rows_ab.standard - row_a.standard,
        three_quarter: rows_ab.three_quarter - row_a.three_quarter,
        half: rows_ab.half - row_a.half,
    };
    assert_eq!(layout.block_count(), row_a + row_a + row_b + row_b);

    // 500 = 16 * 29.5 + 28 -> 16 Standard, 1 ThreeQuarter, 6.25 gap
    assert_eq!(row_a.standard, 16);
    assert_eq!(row_a.three_quarter, 1);
    assert_eq!(row_a.half, 0);
    // 500 - 14 = 486 = 16 * 29.5 + 14 -> Half, 16 Standard, Half
    assert_eq!(row_b.standard, 16);
    assert_eq!(row_b.three_quarter, 0);
    assert_eq!(row_b.half, 2);
    Ok(())
}

#[test]
fn totals_equal_sum_of_counts() -> Result<()> {
    for length in [14.0, 29.5, 57.3, 120.0, 333.3, 1000.0] {
        for height in [9.5, 10.0, 95.0, 250.0] {
            let layout = compute_layout(length, 14.0, height)?;
            let summed: usize = layout.block_count().iter().map(|(_, n)| n).sum();
            assert_eq!(layout.total_blocks(), summed);
            assert_eq!(
                layout.course_count(),
                (height / COURSE_HEIGHT).ceil() as usize
            );
        }
    }
    Ok(())
}

#[test]
fn identical_inputs_give_identical_layouts() -> Result<()> {
    let first = compute_layout(412.7, 20.0, 243.0)?;
    let second = compute_layout(412.7, 20.0, 243.0)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn every_course_fits_the_wall() -> Result<()> {
    let layout = compute_layout(287.0, 14.0, 100.0)?;
    for course in layout.courses() {
        assert!(course.laid_length() <= layout.length());
        assert!(course.gap() < 14.0);
        assert_eq!(course.laid_length() + course.gap(), layout.length());
    }
    Ok(())
}

#[test]
fn narrow_wall_is_empty_not_an_error() -> Result<()> {
    let layout = compute_layout(10.0, 14.0, 30.0)?;
    assert_eq!(layout.course_count(), 4);
    assert_eq!(layout.total_blocks(), 0);
    Ok(())
}
