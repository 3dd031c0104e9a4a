mod bridge; // planar -> spatial conversion tasks
mod bus;    // broadcast topics
mod config;
mod error;

use bus::Topic;
use nav2d_conversions::{Pose2DStamped, PoseStamped, path_to_path_2d, twist_2d_to_twist};
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("nav2d bridge started.");

    let config = config::load_config(config::DEFAULT_CONFIG_PATH)?;
    if let Err(e) = config.validate() {
        error!("Rejecting configuration: {}", e);
        return Err(e.into());
    }

    let plan = bridge::plan_to_path(&config, bridge::stamp_now());
    info!(%plan, "Planned spatial path from configured waypoints");
    let projected = path_to_path_2d(&plan);
    info!(%projected, "Projected plan back onto the plane");

    let cmd_vel = twist_2d_to_twist(&config.cmd_vel);
    info!(planar = %config.cmd_vel, spatial = %cmd_vel, "Lifted velocity command");

    let planar_topic: Topic<Pose2DStamped> = Topic::new(16);
    let spatial_topic: Topic<PoseStamped> = Topic::new(16);
    let mut planar_rx = planar_topic.subscribe();
    let mut spatial_rx = spatial_topic.subscribe();

    let converter = tokio::spawn({
        let spatial_tx = spatial_topic.clone();
        async move { bridge::run_conversion_task(&mut planar_rx, spatial_tx).await }
    });
    // Only the converter may keep the spatial channel open.
    drop(spatial_topic);
    let collector = tokio::spawn(async move { bridge::collect_path(&mut spatial_rx).await });

    let published = bridge::replay_waypoints(&config, &planar_topic).await?;
    drop(planar_topic);

    let converted = converter.await??;
    let streamed = collector.await??;
    info!(
        published,
        converted,
        poses = streamed.poses.len(),
        frame_id = %streamed.header.frame_id,
        "Waypoint stream converted"
    );

    Ok(())
}
