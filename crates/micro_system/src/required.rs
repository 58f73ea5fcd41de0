//! Required component sets for system filtering.
//!
//! A [`RequiredTypes`] lists the component types an entity must carry for a
//! system to run on it. It is built once, usually from a tuple of component
//! types through [`ComponentSet`], and never changes afterwards.

use std::collections::BTreeSet;

use micro_component::{Component, ComponentTypeId, Entity};

/// An immutable set of component types a system requires.
///
/// An entity satisfies the set when it contains **all** of them. The empty
/// set is satisfied by every entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredTypes {
    types: BTreeSet<ComponentTypeId>,
}

impl RequiredTypes {
    /// The set of component types in the tuple `S`.
    ///
    /// ```rust
    /// use micro_component::Component;
    /// use micro_system::RequiredTypes;
    ///
    /// struct Position;
    /// impl Component for Position {}
    /// struct Velocity;
    /// impl Component for Velocity {}
    ///
    /// let required = RequiredTypes::of::<(Position, Velocity)>();
    /// assert_eq!(required.len(), 2);
    /// ```
    #[must_use]
    pub fn of<S: ComponentSet>() -> Self {
        Self::from_ids(S::type_ids())
    }

    /// Build a set from raw identities. Duplicates collapse.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = ComponentTypeId>) -> Self {
        Self {
            types: ids.into_iter().collect(),
        }
    }

    /// Iterates the required identities in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ComponentTypeId> + '_ {
        self.types.iter().copied()
    }

    /// Number of distinct required types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if nothing is required.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns `true` if `type_id` is part of the set.
    #[must_use]
    pub fn contains(&self, type_id: ComponentTypeId) -> bool {
        self.types.contains(&type_id)
    }

    /// Returns `true` if `entity` contains every required type.
    #[must_use]
    pub fn is_satisfied_by(&self, entity: &Entity) -> bool {
        self.types.iter().all(|&id| entity.contains_id(id))
    }

    /// The required types `entity` lacks.
    #[must_use]
    pub fn missing_from(&self, entity: &Entity) -> Vec<ComponentTypeId> {
        self.types
            .iter()
            .copied()
            .filter(|&id| !entity.contains_id(id))
            .collect()
    }
}

impl<'a> IntoIterator for &'a RequiredTypes {
    type Item = ComponentTypeId;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, ComponentTypeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter().copied()
    }
}

/// A static list of component types, implemented for tuples of up to eight
/// [`Component`]s.
///
/// Naming a non-component type in the tuple is a compile error.
pub trait ComponentSet {
    /// Identities of every type in the set, in declaration order.
    fn type_ids() -> Vec<ComponentTypeId>;
}

impl ComponentSet for () {
    fn type_ids() -> Vec<ComponentTypeId> {
        Vec::new()
    }
}

macro_rules! impl_component_set {
    ($($T:ident),+) => {
        impl<$($T: Component),+> ComponentSet for ($($T,)+) {
            fn type_ids() -> Vec<ComponentTypeId> {
                vec![$($T::component_type_id()),+]
            }
        }
    };
}

impl_component_set!(A);
impl_component_set!(A, B);
impl_component_set!(A, B, C);
impl_component_set!(A, B, C, D);
impl_component_set!(A, B, C, D, E);
impl_component_set!(A, B, C, D, E, F);
impl_component_set!(A, B, C, D, E, F, G);
impl_component_set!(A, B, C, D, E, F, G, H);
