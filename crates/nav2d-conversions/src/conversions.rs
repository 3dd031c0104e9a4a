//! Conversions between the planar and spatial message types.
//!
//! Every function here is total and side-effect free. Headers are never
//! inspected: single messages copy theirs verbatim, sequence → path
//! conversions keep only the first element's header, and path → stamped-pose
//! conversions copy the one path header onto every element.

use tracing::trace;

use crate::angle::{orientation_from_yaw, yaw_from_orientation};
use crate::header::{Header, Time};
use crate::planar::{Path2D, Point2D, Pose2D, Pose2DStamped, Twist2D};
use crate::spatial::{Path, Point, Pose, PoseStamped, TransformStamped, Twist, Vector3};

/// Lift a planar point into 3D with `z = 0`.
pub fn point_2d_to_point(point: &Point2D) -> Point {
    Point::new(point.x, point.y, 0.0)
}

/// Drop the z coordinate of a point.
pub fn point_to_point_2d(point: &Point) -> Point2D {
    Point2D::new(point.x, point.y)
}

/// Embed a planar pose in 3D.
///
/// The position gets `z = 0` and the heading becomes a yaw-only orientation.
pub fn pose_2d_to_pose(pose: &Pose2D) -> Pose {
    Pose {
        position: Point::new(pose.x, pose.y, 0.0),
        orientation: orientation_from_yaw(pose.theta),
    }
}

/// Project a 3D pose onto the plane.
///
/// The z coordinate, roll and pitch are discarded; only the yaw survives as
/// `theta`.
pub fn pose_to_pose_2d(pose: &Pose) -> Pose2D {
    Pose2D {
        x: pose.position.x,
        y: pose.position.y,
        theta: yaw_from_orientation(&pose.orientation),
    }
}

/// Embed a stamped planar pose in 3D, keeping its header.
pub fn pose_2d_stamped_to_pose_stamped(pose: &Pose2DStamped) -> PoseStamped {
    PoseStamped {
        header: pose.header.clone(),
        pose: pose_2d_to_pose(&pose.pose),
    }
}

/// Project a stamped 3D pose onto the plane, keeping its header.
pub fn pose_stamped_to_pose_2d_stamped(pose: &PoseStamped) -> Pose2DStamped {
    Pose2DStamped {
        header: pose.header.clone(),
        pose: pose_to_pose_2d(&pose.pose),
    }
}

/// Embed a bare planar pose in 3D under an explicitly given frame and stamp.
///
/// # Arguments
///
/// * `pose`: The planar pose.
/// * `frame`: Frame id for the new header.
/// * `stamp`: Timestamp for the new header.
pub fn pose_2d_to_pose_stamped(pose: &Pose2D, frame: &str, stamp: Time) -> PoseStamped {
    PoseStamped {
        header: Header::new(frame, stamp),
        pose: pose_2d_to_pose(pose),
    }
}

/// Project a stamped transform onto the plane as a stamped planar pose.
///
/// The header is kept. Translation x/y become the position, the yaw of the
/// rotation becomes `theta`. `child_frame_id` and the z translation are dropped.
pub fn transform_stamped_to_pose_2d_stamped(transform: &TransformStamped) -> Pose2DStamped {
    let t = &transform.transform;
    Pose2DStamped {
        header: transform.header.clone(),
        pose: Pose2D {
            x: t.translation.x,
            y: t.translation.y,
            theta: yaw_from_orientation(&t.rotation),
        },
    }
}

/// Lift a planar velocity command into a 3D twist.
///
/// `linear = (x, y, 0)` and `angular = (0, 0, theta)`.
pub fn twist_2d_to_twist(twist: &Twist2D) -> Twist {
    Twist {
        linear: Vector3::new(twist.x, twist.y, 0.0),
        angular: Vector3::new(0.0, 0.0, twist.theta),
    }
}

/// Project a 3D twist onto the plane.
///
/// Keeps `linear.x`, `linear.y` and `angular.z`; everything else is dropped.
pub fn twist_to_twist_2d(twist: &Twist) -> Twist2D {
    Twist2D {
        x: twist.linear.x,
        y: twist.linear.y,
        theta: twist.angular.z,
    }
}

/// Header of the first element, or the default header for an empty slice.
fn first_header(poses: &[PoseStamped]) -> Header {
    poses.first().map(|p| p.header.clone()).unwrap_or_default()
}

/// Collect stamped poses into a path.
///
/// The path header is taken from the first pose; the headers of the other
/// poses are not consulted. An empty slice yields an empty path with a
/// default header.
pub fn poses_to_path(poses: &[PoseStamped]) -> Path {
    let header = first_header(poses);
    trace!(poses = poses.len(), frame_id = %header.frame_id, "poses_to_path");
    Path {
        header,
        poses: poses.to_vec(),
    }
}

/// Collect stamped poses into a planar path.
///
/// The path header is taken from the first pose. Each pose is projected onto
/// the plane and its own header is discarded. An empty slice yields an empty
/// path with a default header.
pub fn poses_to_path_2d(poses: &[PoseStamped]) -> Path2D {
    let header = first_header(poses);
    trace!(poses = poses.len(), frame_id = %header.frame_id, "poses_to_path_2d");
    Path2D {
        header,
        poses: poses
            .iter()
            .map(|p| pose_stamped_to_pose_2d_stamped(p).pose)
            .collect(),
    }
}

/// Build a 3D path from bare planar poses and an explicit frame and stamp.
///
/// The path header and every element's header are all `(frame, stamp)`.
pub fn poses_2d_to_path(poses: &[Pose2D], frame: &str, stamp: Time) -> Path {
    trace!(poses = poses.len(), frame_id = frame, "poses_2d_to_path");
    Path {
        header: Header::new(frame, stamp),
        poses: poses
            .iter()
            .map(|p| pose_2d_to_pose_stamped(p, frame, stamp))
            .collect(),
    }
}

/// Lift a planar path into 3D.
///
/// The path header is kept and also copied onto every element.
pub fn path_2d_to_path(path: &Path2D) -> Path {
    trace!(poses = path.poses.len(), frame_id = %path.header.frame_id, "path_2d_to_path");
    Path {
        header: path.header.clone(),
        poses: path
            .poses
            .iter()
            .map(|p| PoseStamped {
                header: path.header.clone(),
                pose: pose_2d_to_pose(p),
            })
            .collect(),
    }
}

/// Project a 3D path onto the plane.
///
/// The path header is kept, per-element headers are discarded.
pub fn path_to_path_2d(path: &Path) -> Path2D {
    trace!(poses = path.poses.len(), frame_id = %path.header.frame_id, "path_to_path_2d");
    Path2D {
        header: path.header.clone(),
        poses: path.poses.iter().map(|p| pose_to_pose_2d(&p.pose)).collect(),
    }
}

impl From<Point2D> for Point {
    fn from(point: Point2D) -> Self {
        point_2d_to_point(&point)
    }
}

impl From<Pose2D> for Pose {
    fn from(pose: Pose2D) -> Self {
        pose_2d_to_pose(&pose)
    }
}

impl From<&Pose> for Pose2D {
    fn from(pose: &Pose) -> Self {
        pose_to_pose_2d(pose)
    }
}

impl From<Twist2D> for Twist {
    fn from(twist: Twist2D) -> Self {
        twist_2d_to_twist(&twist)
    }
}

impl From<&Pose2DStamped> for PoseStamped {
    fn from(pose: &Pose2DStamped) -> Self {
        pose_2d_stamped_to_pose_stamped(pose)
    }
}

impl From<&PoseStamped> for Pose2DStamped {
    fn from(pose: &PoseStamped) -> Self {
        pose_stamped_to_pose_2d_stamped(pose)
    }
}

impl From<&Path2D> for Path {
    fn from(path: &Path2D) -> Self {
        path_2d_to_path(path)
    }
}

impl From<&Path> for Path2D {
    fn from(path: &Path) -> Self {
        path_to_path_2d(path)
    }
}
