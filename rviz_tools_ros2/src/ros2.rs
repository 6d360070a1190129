//! [`RosClient`] backed by `ros2-client`.

use async_trait::async_trait;

use crate::{
    client::{MarkerPublisher, RosClient, RosVersion},
    msg::{visualization_msgs::MarkerArray, MessageType},
    rviz_error::RvizError,
};

pub struct Ros2Client {
    node: ros2_client::Node,
}

impl Ros2Client {
    /// Wrap an existing node. The node is only used to create the marker
    /// topic and its publisher.
    pub fn new(node: ros2_client::Node) -> Self {
        Self { node }
    }
}

#[async_trait]
impl RosClient for Ros2Client {
    type Publisher = Ros2Publisher;

    fn supported_ros_versions(&self) -> Vec<RosVersion> {
        vec![RosVersion::Ros2]
    }

    async fn advertise(&mut self, topic: &str) -> Result<Ros2Publisher, RvizError> {
        // ros2-client names keep the namespace separate from the base name
        let name = ros2_client::Name::new("/", topic.trim_start_matches('/'))
            .map_err(|err| RvizError::Ros2(err.to_string()))?;
        let topic = self
            .node
            .create_topic(&name, MarkerArray::message_type_name(), &marker_qos())
            .map_err(|err| RvizError::Ros2(err.to_string()))?;
        let publisher = self
            .node
            .create_publisher(&topic, None)
            .map_err(|err| RvizError::Ros2(err.to_string()))?;
        Ok(Ros2Publisher { publisher })
    }
}

/// QoS matching the RViz MarkerArray display subscription.
fn marker_qos() -> rustdds::QosPolicies {
    rustdds::QosPolicies::builder()
        .reliability(rustdds::policy::Reliability::Reliable {
            max_blocking_time: rustdds::Duration::from_millis(100),
        })
        .history(rustdds::policy::History::KeepLast { depth: 10 })
        .build()
}

pub struct Ros2Publisher {
    publisher: ros2_client::Publisher<MarkerArray>,
}

#[async_trait]
impl MarkerPublisher for Ros2Publisher {
    async fn subscriber_count(&self) -> Result<usize, RvizError> {
        Ok(self.publisher.get_subscription_count())
    }

    async fn submit(&self, markers: MarkerArray) -> Result<(), RvizError> {
        self.publisher
            .async_publish(markers)
            .await
            .map_err(|err| RvizError::Ros2(err.to_string()))
    }

    async fn close(&mut self) {
        // nothing to flush, dropping the DDS writer withdraws the publication
    }
}
