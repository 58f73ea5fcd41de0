//! The [`System`] trait: type-filtered logic over entities.
//!
//! A system declares the component types it needs through
//! [`System::required`] and implements [`System::logic`]. The provided
//! [`System::process`] and [`System::process_all`] check each entity against
//! the required set and call `logic` only on the ones that match.
//!
//! Systems never own entities. The caller keeps its entities wherever it
//! likes and lends them for the duration of one call; deciding when and in
//! what order systems run is up to the caller's loop.

use micro_component::Entity;
use tracing::trace;

use crate::required::RequiredTypes;

/// A unit of logic that runs on entities carrying a fixed set of components.
///
/// # Examples
///
/// ```rust
/// use micro_component::{Component, Entity};
/// use micro_system::{RequiredTypes, System};
///
/// #[derive(Clone, Copy)]
/// struct Position { x: f32 }
/// impl Component for Position {}
///
/// #[derive(Clone, Copy)]
/// struct Velocity { dx: f32 }
/// impl Component for Velocity {}
///
/// struct Move { required: RequiredTypes }
///
/// impl System for Move {
///     fn required(&self) -> &RequiredTypes { &self.required }
///
///     fn logic(&mut self, entity: &mut Entity) {
///         let Some(&Velocity { dx }) = entity.get::<Velocity>() else { return };
///         if let Some(p) = entity.get_mut::<Position>() {
///             p.x += dx;
///         }
///     }
/// }
///
/// let mut system = Move { required: RequiredTypes::of::<(Position, Velocity)>() };
/// let mut e = Entity::new();
/// e.emplace(Position { x: 0.0 });
/// e.emplace(Velocity { dx: 2.0 });
/// assert!(system.process(&mut e));
/// assert_eq!(e.get::<Position>().unwrap().x, 2.0);
/// ```
pub trait System {
    /// The component types an entity must carry for [`System::logic`] to run.
    ///
    /// Must return the same set for the lifetime of the system.
    fn required(&self) -> &RequiredTypes;

    /// Runs on one entity that carries every required type.
    ///
    /// The entity is fully accessible, including components outside the
    /// required set, which may be added or erased here.
    fn logic(&mut self, entity: &mut Entity);

    /// Name used in log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Returns `true` if `entity` carries every required type.
    fn matches(&self, entity: &Entity) -> bool {
        self.required().is_satisfied_by(entity)
    }

    /// Runs [`System::logic`] once on `entity` if it matches.
    ///
    /// Returns whether `logic` ran. A mismatch is not an error.
    fn process(&mut self, entity: &mut Entity) -> bool {
        if !self.matches(entity) {
            return false;
        }
        self.logic(entity);
        true
    }

    /// Runs [`System::process`] on every entity, in order.
    ///
    /// Each entity is handled independently and the pass never stops early.
    /// Returns the number of entities `logic` ran on.
    fn process_all<'e, I>(&mut self, entities: I) -> usize
    where
        I: IntoIterator<Item = &'e mut Entity>,
        Self: Sized,
    {
        let mut visited = 0usize;
        let mut matched = 0usize;
        for entity in entities {
            visited += 1;
            if self.process(entity) {
                matched += 1;
            }
        }
        trace!(system = self.name(), visited, matched, "processed entities");
        matched
    }
}

impl<S: System + ?Sized> System for Box<S> {
    fn required(&self) -> &RequiredTypes {
        (**self).required()
    }

    fn logic(&mut self, entity: &mut Entity) {
        (**self).logic(entity);
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn matches(&self, entity: &Entity) -> bool {
        (**self).matches(entity)
    }

    fn process(&mut self, entity: &mut Entity) -> bool {
        (**self).process(entity)
    }
}

#[cfg(test)]
mod tests {
    use micro_component::Component;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Position {
        x: i32,
        y: i32,
    }

    impl Component for Position {}

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Velocity {
        dx: i32,
        dy: i32,
    }

    impl Component for Velocity {}

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Marker(u32);

    impl Component for Marker {}

    /// Moves `Position` by `Velocity`.
    struct MoveSystem {
        required: RequiredTypes,
        calls: usize,
    }

    impl MoveSystem {
        fn new() -> Self {
            Self {
                required: RequiredTypes::of::<(Position, Velocity)>(),
                calls: 0,
            }
        }
    }

    impl System for MoveSystem {
        fn required(&self) -> &RequiredTypes {
            &self.required
        }

        fn logic(&mut self, entity: &mut Entity) {
            self.calls += 1;
            let Some(&Velocity { dx, dy }) = entity.get::<Velocity>() else {
                return;
            };
            if let Some(position) = entity.get_mut::<Position>() {
                position.x += dx;
                position.y += dy;
            }
        }
    }

    /// Tags every entity with a `Marker` holding its visit order.
    struct TagSystem {
        required: RequiredTypes,
        next: u32,
    }

    impl System for TagSystem {
        fn required(&self) -> &RequiredTypes {
            &self.required
        }

        fn name(&self) -> &str {
            "tag"
        }

        fn logic(&mut self, entity: &mut Entity) {
            entity.emplace(Marker(self.next));
            entity.erase::<Velocity>();
            self.next += 1;
        }
    }

    fn moving(x: i32, y: i32, dx: i32, dy: i32) -> Entity {
        let mut e = Entity::new();
        e.emplace(Position { x, y });
        e.emplace(Velocity { dx, dy });
        e
    }

    fn still(x: i32, y: i32) -> Entity {
        let mut e = Entity::new();
        e.emplace(Position { x, y });
        e
    }

    #[test]
    fn test_scenario_emplace_and_query() {
        let e = moving(0, 0, 1, 1);
        assert_eq!(e.get::<Position>().unwrap().x, 0);
        assert!(e.contains::<Velocity>());
    }

    #[test]
    fn test_scenario_move_system_moves_matching_entity() {
        let mut system = MoveSystem::new();
        let mut e = moving(0, 0, 1, 1);
        let mut only_position = still(0, 0);

        assert!(system.process(&mut e));
        assert!(!system.process(&mut only_position));

        assert_eq!(e.get::<Position>(), Some(&Position { x: 1, y: 1 }));
        assert_eq!(only_position.get::<Position>(), Some(&Position { x: 0, y: 0 }));
        assert_eq!(system.calls, 1);
    }

    #[test]
    fn test_scenario_duplicate_emplace_keeps_original() {
        let mut e = moving(0, 0, 1, 1);
        e.emplace(Position { x: 5, y: 5 });
        assert_eq!(e.get::<Position>().unwrap().x, 0);
    }

    #[test]
    fn test_scenario_replace_then_process_uses_new_value() {
        let mut system = MoveSystem::new();
        let mut e = moving(0, 0, 1, 1);
        e.replace(Position { x: 5, y: 5 });
        system.process(&mut e);
        assert_eq!(e.get::<Position>(), Some(&Position { x: 6, y: 6 }));
    }

    #[test]
    fn test_scenario_erase_stops_processing() {
        let mut system = MoveSystem::new();
        let mut e = moving(0, 0, 1, 1);
        e.erase::<Position>();

        assert!(e.get::<Position>().is_none());
        assert!(!system.process(&mut e));
        assert_eq!(system.calls, 0);
    }

    #[test]
    fn test_logic_runs_iff_all_required_present() {
        let system = MoveSystem::new();
        let mut e = Entity::new();
        assert!(!system.matches(&e));
        e.emplace(Velocity { dx: 1, dy: 0 });
        assert!(!system.matches(&e));
        e.emplace(Position { x: 0, y: 0 });
        assert!(system.matches(&e));
        e.emplace(Marker(0));
        assert!(system.matches(&e));
    }

    #[test]
    fn test_process_all_runs_on_matching_subset_once_each() {
        let mut system = MoveSystem::new();
        let mut entities = vec![
            moving(0, 0, 1, 0),
            still(10, 10),
            Entity::new(),
            moving(5, 5, 0, -1),
        ];

        let matched = system.process_all(&mut entities);

        assert_eq!(matched, 2);
        assert_eq!(system.calls, 2);
        assert_eq!(entities[0].get::<Position>(), Some(&Position { x: 1, y: 0 }));
        assert_eq!(entities[1].get::<Position>(), Some(&Position { x: 10, y: 10 }));
        assert!(entities[2].is_empty());
        assert_eq!(entities[3].get::<Position>(), Some(&Position { x: 5, y: 4 }));
    }

    #[test]
    fn test_process_all_on_empty_sequence() {
        let mut system = MoveSystem::new();
        let mut entities: Vec<Entity> = Vec::new();
        assert_eq!(system.process_all(&mut entities), 0);
        assert_eq!(system.calls, 0);
    }

    #[test]
    fn test_process_all_visits_in_sequence_order() {
        let mut system = TagSystem {
            required: RequiredTypes::of::<(Position,)>(),
            next: 0,
        };
        let mut entities = vec![still(0, 0), Entity::new(), moving(1, 1, 1, 1), still(2, 2)];

        assert_eq!(system.process_all(entities.iter_mut()), 3);

        let markers: Vec<_> = entities.iter().map(|e| e.get::<Marker>().copied()).collect();
        assert_eq!(markers, vec![Some(Marker(0)), None, Some(Marker(1)), Some(Marker(2))]);
    }

    #[test]
    fn test_logic_may_touch_types_outside_required_set() {
        let mut system = TagSystem {
            required: RequiredTypes::of::<(Position,)>(),
            next: 7,
        };
        let mut e = moving(0, 0, 1, 1);
        system.process(&mut e);
        assert_eq!(e.get::<Marker>(), Some(&Marker(7)));
        assert!(!e.contains::<Velocity>());
        assert_eq!(system.name(), "tag");
    }

    #[test]
    fn test_empty_requirement_runs_on_every_entity() {
        let mut system = TagSystem {
            required: RequiredTypes::default(),
            next: 0,
        };
        let mut entities = vec![Entity::new(), still(0, 0)];
        assert_eq!(system.process_all(&mut entities), 2);
    }

    #[test]
    fn test_boxed_systems_process_sequences() {
        let mut systems: Vec<Box<dyn System>> = vec![
            Box::new(MoveSystem::new()),
            Box::new(TagSystem {
                required: RequiredTypes::of::<(Position,)>(),
                next: 0,
            }),
        ];
        let mut entities = vec![moving(0, 0, 2, 3), still(1, 1), Entity::new()];

        let matched: Vec<usize> = systems
            .iter_mut()
            .map(|system| system.process_all(&mut entities))
            .collect();

        assert_eq!(matched, vec![1, 2]);
        assert_eq!(systems[1].name(), "tag");
        assert_eq!(entities[0].get::<Position>(), Some(&Position { x: 2, y: 3 }));
        assert_eq!(entities[0].get::<Marker>(), Some(&Marker(0)));
        assert_eq!(entities[1].get::<Marker>(), Some(&Marker(1)));
        assert!(entities[2].is_empty());
    }

    #[test]
    fn test_same_named_component_does_not_satisfy_requirement() {
        mod other {
            use micro_component::Component;

            pub struct Velocity;

            impl Component for Velocity {
                fn type_name() -> &'static str {
                    <super::Velocity as Component>::type_name()
                }
            }
        }

        assert_eq!(other::Velocity::type_name(), Velocity::type_name());

        let mut system = MoveSystem::new();
        let mut e = still(0, 0);
        assert!(e.emplace(other::Velocity));

        assert!(!e.contains::<Velocity>());
        assert!(!system.matches(&e));
        assert!(!system.process(&mut e));
        assert_eq!(system.calls, 0);
    }

    #[test]
    fn test_default_name_is_type_path() {
        assert!(MoveSystem::new().name().ends_with("MoveSystem"));
    }
}
