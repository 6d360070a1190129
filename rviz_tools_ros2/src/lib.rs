//! Publish RViz markers over ROS2.
//!
//! [`RvizTools`] converts plain [`rviz_tools_core`] entities into
//! `visualization_msgs/MarkerArray` messages and sends them on a topic that
//! an RViz `MarkerArray` display subscribes to. Each publish call waits until
//! the topic has at least one subscriber, so markers published right after
//! startup are not silently dropped.
//!
//! The DDS transport binding (`ros2-client` + `rustdds`) is behind the `ros2`
//! feature; everything else works against the [`client`] traits so tests and
//! other backends can plug in their own publishers.

pub mod client;
pub mod msg;
#[cfg(feature = "ros2")]
pub mod ros2;
mod rviz_error;
mod rviz_tools;
pub mod transforms;

pub use client::{MarkerPublisher, RosClient, RosVersion};
pub use rviz_error::RvizError;
pub use rviz_tools::RvizTools;
