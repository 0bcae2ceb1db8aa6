use anyhow::{Context, Result};
use calepin_bim::{Assembly, WallElement, WallRole};
use calepin_catalog::BlockKind;
use calepin_layout::{BlockCount, WallLayout};
use std::io::Write;

fn glyph(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Standard => "[===========]",
        BlockKind::ThreeQuarter => "[========]",
        BlockKind::Half => "[=====]",
    }
}

pub fn write_course_diagram<W: Write>(out: &mut W, layout: &WallLayout) -> Result<()> {
    for course in layout.courses() {
        writeln!(
            out,
            "Course {} (pattern {:?}, gap {} cm):",
            course.index() + 1,
            course.pattern(),
            course.gap()
        )?;
        if course.is_empty() {
            writeln!(out, "  (no blocks)")?;
            writeln!(out)?;
            continue;
        }

        let mut glyphs = String::from("  ");
        let mut labels = String::from("  ");
        for block in course.blocks() {
            let shape = glyph(block.kind);
            glyphs.push_str(shape);
            labels.push_str(&format!("{:^width$}", block.kind.label(), width = shape.len()));
        }
        writeln!(out, "{glyphs}")?;
        writeln!(out, "{}", labels.trim_end())?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_bill_of_materials<W: Write>(out: &mut W, count: &BlockCount) -> Result<()> {
    writeln!(out, "Blocks required:")?;
    for (kind, n) in count.iter() {
        writeln!(out, "  - {}: {}", kind.variant(), n)?;
    }
    writeln!(out, "  - Total: {} blocks", count.total())?;
    Ok(())
}

pub fn write_wall<W: Write>(out: &mut W, wall: &WallElement) -> Result<()> {
    let dims = wall.layout.dimensions();
    writeln!(
        out,
        "{} ({} x {} x {} cm, {} courses, built height {} cm)",
        wall.name,
        dims.length,
        dims.width,
        dims.height,
        wall.layout.course_count(),
        wall.layout.built_height()
    )?;
    if let (WallRole::Return, Some(corner)) = (wall.role, wall.corner) {
        let origin = corner.origin();
        writeln!(
            out,
            "Placed at ({}, {}, {}) rotated {} degrees, from a first wall of {} cm",
            origin.x,
            origin.y,
            origin.z,
            corner.rotation().degrees(),
            corner.first_wall_length
        )?;
    }
    writeln!(out)?;
    write_course_diagram(out, &wall.layout)?;
    write_bill_of_materials(out, &wall.block_count())
}

pub fn render_text(assembly: &Assembly) -> Result<String> {
    let mut buffer = Vec::new();
    for (index, wall) in assembly.walls.iter().enumerate() {
        if index > 0 {
            writeln!(buffer)?;
        }
        write_wall(&mut buffer, wall)?;
    }
    if assembly.walls.len() > 1 {
        writeln!(buffer)?;
        writeln!(buffer, "Combined for {} walls:", assembly.walls.len())?;
        write_bill_of_materials(&mut buffer, &assembly.combined_count())?;
    }
    String::from_utf8(buffer).context("text report is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use calepin_layout::compute_layout;

    #[test]
    fn diagram_aligns_labels_with_glyphs() -> Result<()> {
        let layout = compute_layout(29.5, 14.0, 19.0)?;
        let mut out = Vec::new();
        write_course_diagram(&mut out, &layout)?;
        let text = String::from_utf8(out)?;
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Course 1 (pattern A, gap 0 cm):");
        assert_eq!(lines[1], "  [===========]");
        assert_eq!(lines[2], "    Standard");
        assert_eq!(lines[4], "Course 2 (pattern B, gap 1.5 cm):");
        assert_eq!(lines[5], "  [=====][=====]");
        assert_eq!(lines[6], "    1/2    1/2");
        Ok(())
    }

    #[test]
    fn empty_course_is_marked() -> Result<()> {
        let layout = compute_layout(10.0, 14.0, 9.5)?;
        let mut out = Vec::new();
        write_course_diagram(&mut out, &layout)?;
        assert!(String::from_utf8(out)?.contains("(no blocks)"));
        Ok(())
    }

    #[test]
    fn bill_lists_every_variant() -> Result<()> {
        let count = BlockCount {
            standard: 3,
            three_quarter: 0,
            half: 2,
        };
        let mut out = Vec::new();
        write_bill_of_materials(&mut out, &count)?;
        let text = String::from_utf8(out)?;
        assert!(text.contains("Standard (29.5 x 14 x 9.5 cm): 3"));
        assert!(text.contains("3/4 (21.75 x 14 x 9.5 cm): 0"));
        assert!(text.contains("1/2 (14 x 14 x 9.5 cm): 2"));
        assert!(text.contains("Total: 5 blocks"));
        Ok(())
    }
}
