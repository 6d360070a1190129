use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use tokio::sync::Mutex;

use rviz_tools_core::{Color, MarkerType, Point, Pose, Scale};

use crate::{
    client::{MarkerPublisher, RosClient, RosVersion},
    msg::{builtin_interfaces, std_msgs::Header, visualization_msgs::{Marker, MarkerArray}},
    rviz_error::RvizError,
};

/// How often a publish call polls for subscribers.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Distinguishes namespaces coming from different instances in one process.
static INSTANCE_SEQ: AtomicU64 = AtomicU64::new(0);

struct Inner<C: RosClient> {
    client: C,
    publisher: Option<C::Publisher>,
}

/// Publishes RViz markers built from plain entities.
///
/// The topic publisher is created on the first publish call and released by
/// [`RvizTools::close`]. Every marker gets a namespace no other marker from
/// this instance uses, so published markers accumulate in RViz instead of
/// replacing each other.
pub struct RvizTools<C: RosClient> {
    inner: Mutex<Inner<C>>,
    base_frame: String,
    topic: String,
    ns_prefix: u64,
    ns_seq: AtomicU64,
    poll_interval: Duration,
}

impl<C: RosClient> RvizTools<C> {
    /// Create a new RvizTools publishing on `topic`, with marker positions
    /// expressed in `base_frame`.
    ///
    /// Fails if `client` does not support ROS2.
    pub fn new(client: C, base_frame: &str, topic: &str) -> Result<Self, RvizError> {
        Self::new_with_poll_interval(client, base_frame, topic, DEFAULT_POLL_INTERVAL)
    }

    pub fn new_with_poll_interval(
        client: C,
        base_frame: &str,
        topic: &str,
        poll_interval: Duration,
    ) -> Result<Self, RvizError> {
        let versions = client.supported_ros_versions();
        if !versions.contains(&RosVersion::Ros2) {
            return Err(RvizError::UnsupportedRosVersion(versions));
        }
        Ok(Self {
            inner: Mutex::new(Inner {
                client,
                publisher: None,
            }),
            base_frame: base_frame.to_string(),
            topic: topic.to_string(),
            ns_prefix: INSTANCE_SEQ.fetch_add(1, Ordering::Relaxed),
            ns_seq: AtomicU64::new(0),
            poll_interval,
        })
    }

    /// Show `text` at the given pose.
    pub async fn publish_text(
        &self,
        color: Color,
        scale: Scale,
        pose: Pose,
        text: &str,
    ) -> Result<(), RvizError> {
        let marker = Marker {
            pose: pose.into(),
            text: text.to_string(),
            ..self.new_marker(MarkerType::TextViewFacing, color, scale)
        };
        self.publish(vec![marker]).await
    }

    /// Show one marker of `marker_type` at each point, as a single batch.
    pub async fn publish_markers(
        &self,
        color: Color,
        scale: Scale,
        marker_type: MarkerType,
        points: &[Point],
    ) -> Result<(), RvizError> {
        let markers = points
            .iter()
            .map(|point| Marker {
                pose: Pose::new(*point).into(),
                ..self.new_marker(marker_type, color, scale)
            })
            .collect();
        self.publish(markers).await
    }

    /// Show filled planes. `points` holds the plane corners, four per plane;
    /// each quad is drawn as a triangle list of two triangles, the way
    /// rviz_visual_tools draws planes (the RViz polygon display renders only
    /// a single polygon per topic).
    pub async fn publish_plane(
        &self,
        color: Color,
        scale: Scale,
        points: &[Point],
    ) -> Result<(), RvizError> {
        if points.len() % 4 != 0 {
            return Err(RvizError::InvalidPlanePoints(points.len()));
        }
        let markers = points
            .chunks_exact(4)
            .map(|corners| {
                let mut marker = self.new_marker(MarkerType::TriangleList, color, scale);
                for i in [0, 1, 2, 2, 3, 0] {
                    marker.points.push(corners[i].into());
                }
                marker
            })
            .collect();
        self.publish(markers).await
    }

    /// Release the topic publisher. Calling it again is a no-op; publishing
    /// again afterwards creates a fresh publisher.
    pub async fn close(&self) {
        let mut inner = self.inner.lock().await;
        if let Some(mut publisher) = inner.publisher.take() {
            publisher.close().await;
        }
    }

    fn new_marker(&self, marker_type: MarkerType, color: Color, scale: Scale) -> Marker {
        Marker {
            header: Header {
                stamp: stamp_now(),
                frame_id: self.base_frame.clone(),
            },
            ns: self.next_namespace(),
            // id stays 0, the namespace alone identifies a marker
            type_: marker_type.into(),
            action: Marker::ADD,
            color: color.into(),
            scale: scale.into(),
            lifetime: builtin_interfaces::Duration::UNLIMITED,
            ..Default::default()
        }
    }

    fn next_namespace(&self) -> String {
        format!(
            "@{}.{}",
            self.ns_prefix,
            self.ns_seq.fetch_add(1, Ordering::Relaxed)
        )
    }

    async fn publish(&self, markers: Vec<Marker>) -> Result<(), RvizError> {
        let mut guard = self.inner.lock().await;
        let inner = &mut *guard;
        if inner.publisher.is_none() {
            tracing::debug!("advertising markers on {}", self.topic);
            inner.publisher = Some(inner.client.advertise(&self.topic).await?);
        }
        let publisher = inner.publisher.as_ref().unwrap();
        while publisher.subscriber_count().await? == 0 {
            tracing::debug!("no subscribers on {}, waiting", self.topic);
            tokio::time::sleep(self.poll_interval).await;
        }
        tracing::debug!("publishing {} markers", markers.len());
        publisher.submit(MarkerArray { markers }).await
    }
}

fn stamp_now() -> builtin_interfaces::Time {
    use std::time::SystemTime;
    let since_epoch = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap();
    builtin_interfaces::Time {
        sec: since_epoch.as_secs() as i32,
        nanosec: since_epoch.subsec_nanos(),
    }
}
