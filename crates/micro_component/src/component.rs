//! Core [`Component`] trait and associated metadata.
//!
//! Every piece of data attached to an [`Entity`](crate::Entity) must implement
//! [`Component`]. The trait carries no behaviour of its own; it only tags a
//! type as entity-attachable and gives it an identity.
//!
//! ## Type Identity
//!
//! [`ComponentTypeId`] wraps the compiler's [`TypeId`], so every concrete
//! type (each instantiation of a generic type included) gets its own ID no
//! matter what [`Component::type_name`] returns. The name is for display only.

use std::any::{Any, TypeId};

/// A unique identifier for a concrete component type.
///
/// This is the key space of the [`Entity`](crate::Entity) component store.
/// IDs are only meaningful within one build of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentTypeId(TypeId);

impl ComponentTypeId {
    /// Compute the [`ComponentTypeId`] for a Rust component type `T`.
    #[must_use]
    pub fn of<T: Component>() -> Self {
        Self(TypeId::of::<T>())
    }

    /// The underlying [`TypeId`].
    #[must_use]
    pub fn as_type_id(self) -> TypeId {
        self.0
    }
}

/// Metadata about a component type, kept alongside every stored instance so
/// type-erased views can report what they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentMeta {
    /// The unique type identifier.
    pub type_id: ComponentTypeId,
    /// The human-readable name of the component (e.g. `"Position"`).
    pub name: &'static str,
}

/// The core component trait.
///
/// Components are plain data. No thread-safety bound is imposed, so a
/// component may hold a `Cell` or an `Rc`.
///
/// # Examples
///
/// ```rust
/// use micro_component::Component;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Health {
///     current: f32,
///     max: f32,
/// }
///
/// impl Component for Health {
///     fn type_name() -> &'static str { "Health" }
/// }
/// ```
///
/// `type_name` may be omitted, in which case the full Rust type path is used.
pub trait Component: Any {
    /// A human-readable name for this component type.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Returns the [`ComponentTypeId`] for this component.
    fn component_type_id() -> ComponentTypeId
    where
        Self: Sized,
    {
        ComponentTypeId::of::<Self>()
    }

    /// Returns the [`ComponentMeta`] descriptor for this component type.
    fn meta() -> ComponentMeta
    where
        Self: Sized,
    {
        ComponentMeta {
            type_id: Self::component_type_id(),
            name: Self::type_name(),
        }
    }
}
