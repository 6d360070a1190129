//! Seams to the underlying pub/sub stack. [`RvizTools`](crate::RvizTools)
//! only talks to these traits; the `ros2` feature provides the DDS-backed
//! implementations in the `ros2` module.

use async_trait::async_trait;

use crate::{msg::visualization_msgs::MarkerArray, rviz_error::RvizError};

/// ROS protocol generations a client can speak.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosVersion {
    Ros1,
    Ros2,
}

/// A connected ROS client that can bind publishers to topics.
#[async_trait]
pub trait RosClient {
    type Publisher: MarkerPublisher;

    /// Protocol versions the underlying connection supports.
    fn supported_ros_versions(&self) -> Vec<RosVersion>;

    /// Bind a `MarkerArray` publisher to `topic`.
    async fn advertise(&mut self, topic: &str) -> Result<Self::Publisher, RvizError>;
}

/// A topic-bound publisher for marker arrays.
#[async_trait]
pub trait MarkerPublisher {
    /// Number of subscribers currently matched to the topic.
    async fn subscriber_count(&self) -> Result<usize, RvizError>;

    /// Send one message to all current subscribers.
    async fn submit(&self, markers: MarkerArray) -> Result<(), RvizError>;

    /// Release the topic binding.
    async fn close(&mut self);
}
