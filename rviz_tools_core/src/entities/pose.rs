use nalgebra as na;

use crate::Point;

#[derive(Debug, Clone)]
pub struct Pose {
    pub position: Point,
    pub orientation: na::Quaternion<f64>,
}

impl Pose {
    /// Pose at `position` with no rotation.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            orientation: na::Quaternion::identity(),
        }
    }

    pub fn with_orientation(position: Point, orientation: na::Quaternion<f64>) -> Self {
        Self {
            position,
            orientation,
        }
    }
}
