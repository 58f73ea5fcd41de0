//! 2D spatial components.
//!
//! [`Position`] and [`Velocity`] are the two components almost every moving
//! entity carries.

use glam::Vec2;
use micro_component::Component;

/// A point in 2D world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec2);

impl Position {
    /// The world origin.
    pub const ORIGIN: Self = Self(Vec2::ZERO);

    /// Create a position from coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Move by `velocity` for `dt` seconds.
    pub fn advance(&mut self, velocity: Velocity, dt: f32) {
        self.0 += velocity.0 * dt;
    }

    /// Distance to another position.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        self.0.distance(other.0)
    }
}

impl Component for Position {
    fn type_name() -> &'static str {
        "Position"
    }
}

/// A 2D velocity in world units per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

impl Velocity {
    /// Zero velocity.
    pub const ZERO: Self = Self(Vec2::ZERO);

    /// Create a velocity from its components.
    #[must_use]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self(Vec2::new(dx, dy))
    }

    /// Speed, i.e. the velocity's length.
    #[must_use]
    pub fn speed(self) -> f32 {
        self.0.length()
    }
}

impl Component for Velocity {
    fn type_name() -> &'static str {
        "Velocity"
    }
}
