pub mod count;
pub mod course;
pub mod raster;
pub mod wall;

pub use count::BlockCount;
pub use course::{Course, Pattern, PlacedInCourse};
pub use raster::{DEFAULT_RESOLUTION_CM, MAX_RASTER_CELLS, RasterMatrix, to_raster_matrix};
pub use wall::{
    MAX_COURSES, MAX_LAYOUT_BLOCKS, WallDimensions, WallLayout, compute_layout, course_count_for,
};
