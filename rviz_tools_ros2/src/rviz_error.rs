use thiserror::Error;

use crate::client::RosVersion;

/// Enumerates the different types of errors
#[derive(Clone, Debug, Error)]
#[non_exhaustive]
pub enum RvizError {
    /// The connected client does not speak ROS2.
    #[error("rviz_tools: UnsupportedRosVersion, client supports {:?}", .0)]
    UnsupportedRosVersion(Vec<RosVersion>),
    /// Plane corners must arrive in groups of four.
    #[error("rviz_tools: InvalidPlanePoints, {} points is not divisible by 4", .0)]
    InvalidPlanePoints(usize),
    /// Error of ros2-client
    #[error("rviz_tools: ros2-client error {:?}", .0)]
    Ros2(String),
}
