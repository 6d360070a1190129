mod color;
mod marker_type;
mod point;
mod pose;
mod scale;
mod vector3;

pub use color::*;
pub use marker_type::*;
pub use point::*;
pub use pose::*;
pub use scale::*;
pub use vector3::*;
