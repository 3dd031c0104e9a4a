use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::sync::broadcast;
use tokio::time;
use tracing::{debug, info, warn};

use nav2d_conversions::{
    Header, Path, Pose2DStamped, PoseStamped, Time, pose_2d_stamped_to_pose_stamped,
    poses_2d_to_path, poses_to_path,
};

use crate::bus::Topic;
use crate::config::BridgeConfig;

/// Wall-clock time as a message stamp.
pub fn stamp_now() -> Time {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    stamp_from_epoch(since_epoch)
}

/// Seconds past `i32::MAX` saturate rather than wrap.
fn stamp_from_epoch(since_epoch: Duration) -> Time {
    let sec = i32::try_from(since_epoch.as_secs()).unwrap_or(i32::MAX);
    Time::new(sec, since_epoch.subsec_nanos())
}

/// The configured waypoints as one spatial path stamped with `stamp`.
pub fn plan_to_path(config: &BridgeConfig, stamp: Time) -> Path {
    poses_2d_to_path(&config.waypoints, &config.frame_id, stamp)
}

/// Publish every configured waypoint as a stamped planar pose at `publish_rate_hz`.
///
/// Returns the number of waypoints published.
pub async fn replay_waypoints(
    config: &BridgeConfig,
    planar_topic: &Topic<Pose2DStamped>,
) -> anyhow::Result<usize> {
    let period = config.publish_period()?;
    let mut ticker = time::interval(period);
    info!(waypoints = config.waypoints.len(), ?period, "Replaying waypoints");

    for pose in &config.waypoints {
        ticker.tick().await;
        let stamped = Pose2DStamped::new(Header::new(&config.frame_id, stamp_now()), *pose);
        debug!(%stamped, "Publishing planar pose");
        planar_topic.publish(stamped)?;
    }
    Ok(config.waypoints.len())
}

/// Convert every planar pose received on `planar_rx` and republish it on `spatial_tx`.
///
/// Runs until the planar channel closes, then returns how many poses were converted.
pub async fn run_conversion_task(
    planar_rx: &mut broadcast::Receiver<Arc<Pose2DStamped>>,
    spatial_tx: Topic<PoseStamped>,
) -> anyhow::Result<usize> {
    info!("Conversion task started.");
    let mut converted = 0;

    loop {
        match planar_rx.recv().await {
            Ok(planar) => {
                let spatial = pose_2d_stamped_to_pose_stamped(&planar);
                debug!(%planar, %spatial, "Converted pose");
                if let Err(e) = spatial_tx.publish(spatial) {
                    warn!("Failed to publish spatial pose: {}", e);
                }
                converted += 1;
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!("Planar receiver lagged by {} messages in conversion task.", n);
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => {
                info!(converted, "Planar channel closed, conversion task finished.");
                return Ok(converted);
            }
        }
    }
}

/// Gather stamped spatial poses until the channel closes and assemble them into a path.
///
/// The path takes the header of the first pose received.
pub async fn collect_path(
    spatial_rx: &mut broadcast::Receiver<Arc<PoseStamped>>,
) -> anyhow::Result<Path> {
    let mut poses = Vec::new();

    loop {
        match spatial_rx.recv().await {
            Ok(pose) => poses.push(PoseStamped::clone(&pose)),
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!("Spatial receiver lagged by {} messages, path will have gaps.", n);
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
    Ok(poses_to_path(&poses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav2d_conversions::{Pose2D, Twist2D, pose_2d_to_pose};

    fn config(waypoints: Vec<Pose2D>) -> BridgeConfig {
        BridgeConfig {
            frame_id: String::from("map"),
            publish_rate_hz: 1000.0,
            waypoints,
            cmd_vel: Twist2D::default(),
        }
    }

    #[test]
    fn test_plan_to_path_stamps_every_pose() {
        let cfg = config(vec![Pose2D::new(0.0, 0.0, 0.0), Pose2D::new(1.0, 1.0, 0.5)]);
        let stamp = Time::new(10, 0);
        let path = plan_to_path(&cfg, stamp);
        assert_eq!(path.header, Header::new("map", stamp));
        assert_eq!(path.poses.len(), 2);
        assert!(path.poses.iter().all(|p| p.header == path.header));
        assert_eq!(path.poses[1].pose, pose_2d_to_pose(&cfg.waypoints[1]));
    }

    #[tokio::test]
    async fn test_replay_publishes_all_waypoints() {
        let cfg = config(vec![Pose2D::new(0.0, 0.0, 0.0), Pose2D::new(1.0, 0.0, 0.1)]);
        let topic: Topic<Pose2DStamped> = Topic::new(8);
        let mut rx = topic.subscribe();

        let published = replay_waypoints(&cfg, &topic).await.unwrap();
        assert_eq!(published, 2);

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first.header.frame_id, "map");
        assert_eq!(first.pose, cfg.waypoints[0]);
        assert_eq!(second.pose, cfg.waypoints[1]);
    }

    #[tokio::test]
    async fn test_replay_without_subscribers_fails() {
        let cfg = config(vec![Pose2D::default()]);
        let topic: Topic<Pose2DStamped> = Topic::new(8);
        assert!(replay_waypoints(&cfg, &topic).await.is_err());
    }

    #[tokio::test]
    async fn test_replay_rejects_unrepresentable_rate() {
        let mut cfg = config(vec![Pose2D::default()]);
        cfg.publish_rate_hz = 1e-300;
        let topic: Topic<Pose2DStamped> = Topic::new(8);
        let mut rx = topic.subscribe();

        assert!(replay_waypoints(&cfg, &topic).await.is_err());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_stamp_saturates_past_i32_seconds() {
        let stamp = stamp_from_epoch(Duration::new(1_700_000_000, 42));
        assert_eq!(stamp, Time::new(1_700_000_000, 42));

        let stamp = stamp_from_epoch(Duration::new(u64::from(u32::MAX), 7));
        assert_eq!(stamp, Time::new(i32::MAX, 7));
    }

    #[tokio::test]
    async fn test_conversion_task_runs_until_closed() {
        let planar_topic: Topic<Pose2DStamped> = Topic::new(8);
        let spatial_topic: Topic<PoseStamped> = Topic::new(8);
        let mut planar_rx = planar_topic.subscribe();
        let mut spatial_rx = spatial_topic.subscribe();

        let header = Header::new("odom", Time::new(3, 0));
        planar_topic
            .publish(Pose2DStamped::new(header.clone(), Pose2D::new(1.0, 2.0, 0.3)))
            .unwrap();
        planar_topic
            .publish(Pose2DStamped::new(header.clone(), Pose2D::new(2.0, 2.0, 0.6)))
            .unwrap();
        drop(planar_topic);

        let converted = run_conversion_task(&mut planar_rx, spatial_topic)
            .await
            .unwrap();
        assert_eq!(converted, 2);

        let path = collect_path(&mut spatial_rx).await.unwrap();
        assert_eq!(path.header, header);
        assert_eq!(path.poses.len(), 2);
        assert_eq!(path.poses[1].pose, pose_2d_to_pose(&Pose2D::new(2.0, 2.0, 0.6)));
    }

    #[tokio::test]
    async fn test_collect_path_empty_stream() {
        let spatial_topic: Topic<PoseStamped> = Topic::new(8);
        let mut spatial_rx = spatial_topic.subscribe();
        drop(spatial_topic);

        let path = collect_path(&mut spatial_rx).await.unwrap();
        assert!(path.is_empty());
        assert_eq!(path.header, Header::default());
    }
}
