use tracing::info;
use tracing_subscriber::EnvFilter;

use rviz_tools_core::{Color, MarkerType, Point, Pose, Scale};
use rviz_tools_ros2::{ros2::Ros2Client, RvizTools};

/// Publish a text banner and a couple of cubes, then keep the node alive so
/// RViz keeps rendering them. Start rviz2 with a MarkerArray display on
/// /visualization_marker_array, then:
/// hello_rviz

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("hello_rviz=info".parse()?))
        .init();

    let context = ros2_client::Context::new()?;
    let node = context.new_node(
        ros2_client::NodeName::new("/rviz_tools", "hello_rviz")?,
        ros2_client::NodeOptions::new(),
    )?;

    let tools = RvizTools::new(Ros2Client::new(node), "map", "visualization_marker_array")?;

    info!("waiting for an rviz2 subscriber on /visualization_marker_array");
    tools
        .publish_text(
            Color::Red,
            Scale::XLarge,
            Pose::new(Point {
                x: 0.0,
                y: 0.0,
                z: 1.0,
            }),
            "hello from rviz_tools",
        )
        .await?;
    tools
        .publish_markers(
            Color::Cyan,
            Scale::Large,
            MarkerType::Cube,
            &[
                Point {
                    x: 1.0,
                    y: 0.0,
                    z: 0.5,
                },
                Point {
                    x: 2.0,
                    y: 0.0,
                    z: 0.5,
                },
            ],
        )
        .await?;
    info!("markers published, ctrl-c to exit");

    tokio::signal::ctrl_c().await?;
    tools.close().await;
    Ok(())
}
