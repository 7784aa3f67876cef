pub mod color;
pub mod surface;
