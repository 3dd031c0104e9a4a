#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for converting between planar (2D) and spatial (3D) robot messages."]
#![doc = ""]
#![doc = "This crate provides the planar message types (`Pose2D`, `Twist2D`, `Path2D`, ...),"]
#![doc = "the spatial message types (`Pose`, `Twist`, `Path`, ...) and pure functions that map"]
#![doc = "between them. Frame ids and timestamps are carried through verbatim and never interpreted."]

extern crate alloc;

pub mod angle;
pub mod conversions;
pub mod header;
pub mod planar;
pub mod spatial;

pub use angle::{normalize_angle, orientation_from_yaw, yaw_from_orientation};
pub use conversions::*;
pub use header::{Header, Time};
pub use planar::{Path2D, Point2D, Pose2D, Pose2DStamped, Twist2D};
pub use spatial::{Path, Point, Pose, PoseStamped, Quaternion, Transform, TransformStamped, Twist, Vector3};
