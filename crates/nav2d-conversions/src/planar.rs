//! Planar (2D) message types used by 2D navigation code.

use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::header::Header;

/// A 2‑D pose `(x, y, θ)` in meters and radians (θ measured counter‑clockwise
/// from the x‑axis of the reference frame).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose2D {
    /// x position (m).
    pub x: f64,
    /// y position (m).
    pub y: f64,
    /// Heading (rad). Not normalized.
    pub theta: f64,
}

impl Pose2D {
    /// Construct a new planar pose.
    ///
    /// # Arguments
    ///
    /// * `x`: x position in meters.
    /// * `y`: y position in meters.
    /// * `theta`: Heading in radians.
    pub const fn new(x: f64, y: f64, theta: f64) -> Self {
        Pose2D { x, y, theta }
    }
}

impl fmt::Display for Pose2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {:.2}, y: {:.2}, θ: {:.2} rad)", self.x, self.y, self.theta)
    }
}

/// A planar point `(x, y)` in meters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    /// x coordinate (m).
    pub x: f64,
    /// y coordinate (m).
    pub y: f64,
}

impl Point2D {
    /// Construct a new planar point.
    pub const fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {:.2}, y: {:.2})", self.x, self.y)
    }
}

/// A planar velocity command.
///
/// `x` and `y` are linear velocities (m/s) in the robot base frame and
/// `theta` is the angular rate about the vertical axis (rad/s).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Twist2D {
    /// Linear x velocity (m/s).
    pub x: f64,
    /// Linear y velocity (m/s).
    pub y: f64,
    /// Angular z velocity (rad/s).
    pub theta: f64,
}

impl Twist2D {
    /// Construct a new planar twist.
    ///
    /// # Arguments
    ///
    /// * `x`: Linear velocity along the base x-axis (m/s).
    /// * `y`: Linear velocity along the base y-axis (m/s).
    /// * `theta`: Angular velocity around the base z-axis (rad/s).
    pub const fn new(x: f64, y: f64, theta: f64) -> Self {
        Twist2D { x, y, theta }
    }
}

impl fmt::Display for Twist2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(vx: {:.2} m/s, vy: {:.2} m/s, ωz: {:.2} rad/s)",
            self.x, self.y, self.theta
        )
    }
}

/// A planar pose with its frame and timestamp.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pose2DStamped {
    /// Frame and time the pose refers to.
    pub header: Header,
    /// The planar pose.
    pub pose: Pose2D,
}

impl Pose2DStamped {
    /// Construct a stamped planar pose.
    pub fn new(header: Header, pose: Pose2D) -> Self {
        Pose2DStamped { header, pose }
    }
}

impl fmt::Display for Pose2DStamped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.header, self.pose)
    }
}

/// An ordered planar trajectory. All poses share the one header.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path2D {
    /// Frame and time shared by every pose of the path.
    pub header: Header,
    /// Poses in trajectory order.
    pub poses: Vec<Pose2D>,
}

impl Path2D {
    /// Construct a planar path.
    pub fn new(header: Header, poses: Vec<Pose2D>) -> Self {
        Path2D { header, poses }
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

impl fmt::Display for Path2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path2D {} ({} poses)", self.header, self.poses.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::Time;

    #[test]
    fn test_pose_2d_display() {
        let pose = Pose2D::new(1.0, -2.5, 0.25);
        assert_eq!(format!("{}", pose), "(x: 1.00, y: -2.50, θ: 0.25 rad)");
    }

    #[test]
    fn test_path_2d_len() {
        let path = Path2D::new(
            Header::new("odom", Time::new(1, 0)),
            vec![Pose2D::default(), Pose2D::new(1.0, 0.0, 0.0)],
        );
        assert_eq!(path.len(), 2);
        assert!(!path.is_empty());
        assert!(Path2D::default().is_empty());
    }
}
