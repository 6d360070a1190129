//! Plain value types for describing RViz markers.
//!
//! Callers build positions, poses, named colors and sizes, and marker shape
//! kinds out of these; the `rviz_tools_ros2` crate converts them into
//! `visualization_msgs` wire messages and publishes them.

mod entities;

pub use entities::*;
