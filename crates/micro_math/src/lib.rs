//! # micro_math
//!
//! Math types for the micro ECS. Re-exports [`glam`] for linear algebra and
//! defines 2D spatial types that implement
//! [`Component`](micro_component::Component).

pub mod spatial;

// Re-export glam types for convenience.
pub use glam::Vec2;

pub use spatial::{Position, Velocity};
