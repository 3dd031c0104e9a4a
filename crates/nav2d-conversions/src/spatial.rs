//! Spatial (3D) message types consumed by the rest of the stack.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use libm::{cos, sin};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle;
use crate::header::Header;

/// A position in 3D space (m).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// x coordinate (m).
    pub x: f64,
    /// y coordinate (m).
    pub y: f64,
    /// z coordinate (m).
    pub z: f64,
}

impl Point {
    /// Construct a new point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {:.2}, y: {:.2}, z: {:.2})", self.x, self.y, self.z)
    }
}

/// A free vector in 3D space, used for velocities and translations.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    /// x component.
    pub x: f64,
    /// y component.
    pub y: f64,
    /// z component.
    pub z: f64,
}

impl Vector3 {
    /// Construct a new vector.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}, {:.2}]", self.x, self.y, self.z)
    }
}

/// An orientation quaternion `(x, y, z, w)` with `w` the scalar part.
///
/// The components are stored as given. Nothing here normalizes them, and the
/// conversions accept non-unit values without complaint.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    /// x component.
    pub x: f64,
    /// y component.
    pub y: f64,
    /// z component.
    pub z: f64,
    /// Scalar component.
    pub w: f64,
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    /// Construct a quaternion from raw components.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Quaternion { x, y, z, w }
    }

    /// Pure rotation of `yaw` radians about the z axis.
    pub fn from_yaw(yaw: f64) -> Self {
        angle::orientation_from_yaw(yaw)
    }

    /// Rotation built from roll, pitch and yaw (radians), applied in Z-Y-X order.
    pub fn from_rpy(roll: f64, pitch: f64, yaw: f64) -> Self {
        let (sr, cr) = (sin(roll * 0.5), cos(roll * 0.5));
        let (sp, cp) = (sin(pitch * 0.5), cos(pitch * 0.5));
        let (sy, cy) = (sin(yaw * 0.5), cos(yaw * 0.5));

        Quaternion {
            x: sr * cp * cy - cr * sp * sy,
            y: cr * sp * cy + sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
            w: cr * cp * cy + sr * sp * sy,
        }
    }

    /// Rotation about the z axis, in `(-PI, PI]`.
    pub fn yaw(&self) -> f64 {
        angle::yaw_from_orientation(self)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::IDENTITY
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x: {:.3}, y: {:.3}, z: {:.3}, w: {:.3})",
            self.x, self.y, self.z, self.w
        )
    }
}

/// A full 3D pose: position plus orientation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// Position (m).
    pub position: Point,
    /// Orientation.
    pub orientation: Quaternion,
}

impl Pose {
    /// Construct a new pose.
    pub const fn new(position: Point, orientation: Quaternion) -> Self {
        Pose { position, orientation }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position, self.orientation)
    }
}

/// A 3D pose with its frame and timestamp.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoseStamped {
    /// Frame and time the pose refers to.
    pub header: Header,
    /// The pose.
    pub pose: Pose,
}

impl PoseStamped {
    /// Construct a stamped pose.
    pub fn new(header: Header, pose: Pose) -> Self {
        PoseStamped { header, pose }
    }
}

impl fmt::Display for PoseStamped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.header, self.pose)
    }
}

/// A 3D velocity split into linear (m/s) and angular (rad/s) parts.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Twist {
    /// Linear velocity (m/s).
    pub linear: Vector3,
    /// Angular velocity (rad/s).
    pub angular: Vector3,
}

impl Twist {
    /// Construct a new twist.
    pub const fn new(linear: Vector3, angular: Vector3) -> Self {
        Twist { linear, angular }
    }
}

impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(linear: {}, angular: {})", self.linear, self.angular)
    }
}

/// An ordered 3D trajectory.
///
/// Each element carries its own header. Paths built from planar data give
/// every element a copy of the path header.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    /// Frame and time of the path as a whole.
    pub header: Header,
    /// Stamped poses in trajectory order.
    pub poses: Vec<PoseStamped>,
}

impl Path {
    /// Construct a path.
    pub fn new(header: Header, poses: Vec<PoseStamped>) -> Self {
        Path { header, poses }
    }

    /// Number of poses in the path.
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Returns `true` if the path holds no poses.
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path {} ({} poses)", self.header, self.poses.len())
    }
}

/// A rigid transform: translation followed by rotation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// Translation (m).
    pub translation: Vector3,
    /// Rotation.
    pub rotation: Quaternion,
}

impl Transform {
    /// Construct a new transform.
    pub const fn new(translation: Vector3, rotation: Quaternion) -> Self {
        Transform { translation, rotation }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.translation, self.rotation)
    }
}

/// A transform from `header.frame_id` to `child_frame_id` at `header.stamp`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformStamped {
    /// Parent frame and time.
    pub header: Header,
    /// Frame the transform points to.
    pub child_frame_id: String,
    /// The transform itself.
    pub transform: Transform,
}

impl fmt::Display for TransformStamped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: {}",
            self.header, self.child_frame_id, self.transform
        )
    }
}
