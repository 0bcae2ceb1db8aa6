pub mod json;
pub mod raster;
pub mod text;

pub use json::{AssemblyView, write_json};
pub use raster::write_raster;
pub use text::{render_text, write_bill_of_materials, write_course_diagram, write_wall};
