//! Component store error types.

use crate::component::{Component, ComponentTypeId};

/// Errors reported by the opt-in `require` accessors of
/// [`Entity`](crate::Entity).
///
/// The store's core operations never fail; absence is an `Option`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    /// The entity holds no component of the requested type.
    #[error("entity has no '{name}' component")]
    MissingComponent {
        /// Name of the requested component type.
        name: &'static str,
        /// Identity of the requested component type.
        type_id: ComponentTypeId,
    },
}

impl EntityError {
    pub(crate) fn missing<T: Component>() -> Self {
        let meta = T::meta();
        Self::MissingComponent {
            name: meta.name,
            type_id: meta.type_id,
        }
    }
}
