use calepin_base::{Error, Result, ensure_positive};
use calepin_catalog::{COURSE_HEIGHT, HALF};
use serde::Serialize;
use tracing::debug;

use crate::count::BlockCount;
use crate::course::{Course, Pattern};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WallDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl WallDimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Result<Self> {
        ensure_positive("length", length)?;
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        Ok(Self {
            length,
            width,
            height,
        })
    }
}

pub const MAX_COURSES: usize = 100_000;
pub const MAX_LAYOUT_BLOCKS: usize = 10_000_000;

pub fn course_count_for(height: f64) -> Result<usize> {
    ensure_positive("height", height)?;
    let courses = (height / COURSE_HEIGHT).ceil();
    if courses > MAX_COURSES as f64 {
        return Err(Error::InvalidDimension(format!(
            "height {height} needs more than {MAX_COURSES} courses"
        )));
    }
    Ok(courses as usize)
}

// Upper bound on the blocks one course of `length` can hold.
fn blocks_per_course_bound(length: f64) -> f64 {
    (length / HALF.length).floor() + 1.0
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WallLayout {
    dimensions: WallDimensions,
    pattern_a: Vec<Course>,
    pattern_b: Vec<Course>,
    counts: BlockCount,
}

pub fn compute_layout(length: f64, width: f64, height: f64) -> Result<WallLayout> {
    WallLayout::new(WallDimensions::new(length, width, height)?)
}

impl WallLayout {
    pub fn new(dimensions: WallDimensions) -> Result<Self> {
        let dimensions =
            WallDimensions::new(dimensions.length, dimensions.width, dimensions.height)?;
        let WallDimensions {
            length,
            width,
            height,
        } = dimensions;

        let course_count = course_count_for(height)?;
        if course_count as f64 * blocks_per_course_bound(length) > MAX_LAYOUT_BLOCKS as f64 {
            return Err(Error::InvalidDimension(format!(
                "wall of {length} x {height} cm needs more than {MAX_LAYOUT_BLOCKS} blocks"
            )));
        }
        let mut pattern_a = Vec::with_capacity(course_count.div_ceil(2));
        let mut pattern_b = Vec::with_capacity(course_count / 2);

        for index in 0..course_count {
            let course = Course::fill(index, length);
            match course.pattern() {
                Pattern::A => pattern_a.push(course),
                Pattern::B => pattern_b.push(course),
            }
        }

        let counts: BlockCount = pattern_a.iter().chain(&pattern_b).map(Course::count).sum();

        let layout = Self {
            dimensions,
            pattern_a,
            pattern_b,
            counts,
        };
        debug!(
            length,
            width,
            height,
            courses = course_count,
            total = layout.total_blocks(),
            "wall layout computed"
        );
        Ok(layout)
    }

    pub fn dimensions(&self) -> WallDimensions {
        self.dimensions
    }

    pub fn length(&self) -> f64 {
        self.dimensions.length
    }

    pub fn width(&self) -> f64 {
        self.dimensions.width
    }

    pub fn height(&self) -> f64 {
        self.dimensions.height
    }

    pub fn course_count(&self) -> usize {
        self.pattern_a.len() + self.pattern_b.len()
    }

    pub fn built_height(&self) -> f64 {
        self.course_count() as f64 * COURSE_HEIGHT
    }

    pub fn pattern_a(&self) -> &[Course] {
        &self.pattern_a
    }

    pub fn pattern_b(&self) -> &[Course] {
        &self.pattern_b
    }

    pub fn course(&self, index: usize) -> Option<&Course> {
        match Pattern::for_index(index) {
            Pattern::A => self.pattern_a.get(index / 2),
            Pattern::B => self.pattern_b.get(index / 2),
        }
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> + '_ {
        (0..self.course_count()).filter_map(|index| self.course(index))
    }

    pub fn block_count(&self) -> BlockCount {
        self.counts
    }

    pub fn total_blocks(&self) -> usize {
        self.counts.total()
    }
}
