//! Value module - the logical types a buffer can carry.
//!
//! - [`ValueKind`] - fieldless tag naming each logical type
//! - [`Vector3`] / [`Quaternion`] - composite float types
//! - [`Timestamp`] - milliseconds since the Unix epoch
//! - [`Value`] - tagged union over every kind, for schema-driven code

mod dynamic;
mod geometry;
mod kind;
mod timestamp;

pub use dynamic::Value;
pub use geometry::{Quaternion, Vector3};
pub use kind::ValueKind;
pub use timestamp::Timestamp;
