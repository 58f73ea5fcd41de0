//! The systems driven by the demo loop.

use micro_component::Entity;
use micro_math::{Position, Velocity};
use micro_system::{RequiredTypes, System};
use tracing::info;

/// Advances `Position` by `Velocity * dt`.
pub struct MoveSystem {
    required: RequiredTypes,
    dt: f32,
}

impl MoveSystem {
    pub fn new(dt: f32) -> Self {
        Self {
            required: RequiredTypes::of::<(Position, Velocity)>(),
            dt,
        }
    }
}

impl System for MoveSystem {
    fn required(&self) -> &RequiredTypes {
        &self.required
    }

    fn name(&self) -> &str {
        "move"
    }

    fn logic(&mut self, entity: &mut Entity) {
        let Some(&velocity) = entity.get::<Velocity>() else {
            return;
        };
        if let Some(position) = entity.get_mut::<Position>() {
            position.advance(velocity, self.dt);
        }
    }
}

/// Erases `Velocity` once an entity has travelled past `radius` from the
/// origin, so later ticks leave it in place.
pub struct BoundarySystem {
    required: RequiredTypes,
    radius: f32,
}

impl BoundarySystem {
    pub fn new(radius: f32) -> Self {
        Self {
            required: RequiredTypes::of::<(Position, Velocity)>(),
            radius,
        }
    }
}

impl System for BoundarySystem {
    fn required(&self) -> &RequiredTypes {
        &self.required
    }

    fn name(&self) -> &str {
        "boundary"
    }

    fn logic(&mut self, entity: &mut Entity) {
        let outside = entity
            .get::<Position>()
            .is_some_and(|p| p.distance(Position::ORIGIN) > self.radius);
        if outside {
            entity.erase::<Velocity>();
        }
    }
}

/// Logs every positioned entity.
///
/// `ordinal` counts reported entities within a pass; entities without a
/// `Position` are skipped and take no number.
pub struct ReportSystem {
    required: RequiredTypes,
    tick: u64,
    ordinal: usize,
}

impl ReportSystem {
    pub fn new() -> Self {
        Self {
            required: RequiredTypes::of::<(Position,)>(),
            tick: 0,
            ordinal: 0,
        }
    }

    /// Starts a new report pass for `tick`.
    pub fn begin(&mut self, tick: u64) {
        self.tick = tick;
        self.ordinal = 0;
    }
}

impl System for ReportSystem {
    fn required(&self) -> &RequiredTypes {
        &self.required
    }

    fn name(&self) -> &str {
        "report"
    }

    fn logic(&mut self, entity: &mut Entity) {
        if let Some(position) = entity.get::<Position>() {
            info!(
                tick = self.tick,
                ordinal = self.ordinal,
                x = position.0.x,
                y = position.0.y,
                moving = entity.contains::<Velocity>(),
                "position"
            );
        }
        self.ordinal += 1;
    }
}
