//! The [`Entity`] component store.
//!
//! An [`Entity`] is a bag of components: it owns at most one instance of each
//! component type, keyed by [`ComponentTypeId`]. It has no identity of its
//! own; callers hold entities however they like (a `Vec`, a map, a struct
//! field) and hand them to systems by reference.
//!
//! ## Duplicate insertion
//!
//! [`Entity::emplace`] and [`Entity::insert`] are **first-write-wins**: if a
//! component of the same type is already stored, the existing instance stays
//! and the new one is dropped. Use [`Entity::replace`] to overwrite.

use std::any::Any;
use std::collections::HashMap;
use std::collections::hash_map::{self, Entry};
use std::iter::FusedIterator;

use crate::component::{Component, ComponentMeta, ComponentTypeId};
use crate::error::EntityError;

/// A stored component viewed without its static type.
///
/// Owns the boxed value; dropping the erased component drops the value.
pub struct ErasedComponent {
    meta: ComponentMeta,
    value: Box<dyn Any>,
}

impl ErasedComponent {
    fn new<T: Component>(value: Box<T>) -> Self {
        Self {
            meta: T::meta(),
            value,
        }
    }

    /// Metadata of the stored component type.
    #[must_use]
    pub fn meta(&self) -> ComponentMeta {
        self.meta
    }

    /// The stored component's type identity.
    #[must_use]
    pub fn id(&self) -> ComponentTypeId {
        self.meta.type_id
    }

    /// The stored component's human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.meta.name
    }

    /// Returns `true` if the stored value is a `T`.
    #[must_use]
    pub fn is<T: Component>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrow the stored value as a `T`, or `None` if it is another type.
    #[must_use]
    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Mutably borrow the stored value as a `T`, or `None` if it is another type.
    #[must_use]
    pub fn downcast_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut::<T>()
    }

    fn into_inner<T: Component>(self) -> Option<T> {
        self.value.downcast::<T>().ok().map(|boxed| *boxed)
    }
}

impl std::fmt::Debug for ErasedComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErasedComponent")
            .field("name", &self.meta.name)
            .field("type_id", &self.meta.type_id)
            .finish_non_exhaustive()
    }
}

/// A container owning at most one component of each type.
#[derive(Default)]
pub struct Entity {
    components: HashMap<ComponentTypeId, ErasedComponent>,
}

impl Entity {
    /// Creates an entity with no components.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Lookup --

    /// Returns the stored `T`, or `None` if the entity has none.
    #[must_use]
    pub fn get<T: Component>(&self) -> Option<&T> {
        self.get_erased(T::component_type_id())?.downcast_ref::<T>()
    }

    /// Returns the stored `T` mutably, or `None` if the entity has none.
    #[must_use]
    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.get_erased_mut(T::component_type_id())?
            .downcast_mut::<T>()
    }

    /// Type-erased lookup by identity.
    #[must_use]
    pub fn get_erased(&self, type_id: ComponentTypeId) -> Option<&ErasedComponent> {
        self.components.get(&type_id)
    }

    /// Type-erased mutable lookup by identity.
    #[must_use]
    pub fn get_erased_mut(&mut self, type_id: ComponentTypeId) -> Option<&mut ErasedComponent> {
        self.components.get_mut(&type_id)
    }

    /// Like [`Entity::get`], but reports absence as an [`EntityError`] so
    /// system logic can use `?`.
    pub fn require<T: Component>(&self) -> Result<&T, EntityError> {
        self.get::<T>().ok_or_else(EntityError::missing::<T>)
    }

    /// Like [`Entity::get_mut`], but reports absence as an [`EntityError`].
    pub fn require_mut<T: Component>(&mut self) -> Result<&mut T, EntityError> {
        self.get_mut::<T>().ok_or_else(EntityError::missing::<T>)
    }

    // -- Membership --

    /// Returns `true` if a `T` is stored.
    #[must_use]
    pub fn contains<T: Component>(&self) -> bool {
        self.contains_id(T::component_type_id())
    }

    /// Returns `true` if a component with this identity is stored.
    #[must_use]
    pub fn contains_id(&self, type_id: ComponentTypeId) -> bool {
        self.components.contains_key(&type_id)
    }

    /// Number of stored components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if no component is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Identities of every stored component, in unspecified order.
    pub fn component_types(&self) -> impl Iterator<Item = ComponentTypeId> + '_ {
        self.components.keys().copied()
    }

    // -- Insertion --

    /// Stores `value` unless a `T` is already present.
    ///
    /// Returns `true` if `value` was stored. When a `T` already exists the
    /// existing instance is kept and `value` is dropped.
    pub fn emplace<T: Component>(&mut self, value: T) -> bool {
        self.insert(Box::new(value))
    }

    /// Moves an already boxed `T` into the store, first-write-wins like
    /// [`Entity::emplace`].
    pub fn insert<T: Component>(&mut self, value: Box<T>) -> bool {
        match self.components.entry(T::component_type_id()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(ErasedComponent::new(value));
                true
            }
        }
    }

    /// Stores `value`, overwriting any existing `T`, and returns the previous
    /// instance.
    pub fn replace<T: Component>(&mut self, value: T) -> Option<T> {
        self.components
            .insert(T::component_type_id(), ErasedComponent::new(Box::new(value)))
            .and_then(ErasedComponent::into_inner::<T>)
    }

    // -- Removal --

    /// Drops the stored `T`, if any.
    pub fn erase<T: Component>(&mut self) {
        self.erase_id(T::component_type_id());
    }

    /// Drops the component with this identity, if any.
    pub fn erase_id(&mut self, type_id: ComponentTypeId) {
        self.components.remove(&type_id);
    }

    /// Removes the stored `T` and hands ownership back to the caller.
    pub fn take<T: Component>(&mut self) -> Option<T> {
        self.components
            .remove(&T::component_type_id())
            .and_then(ErasedComponent::into_inner::<T>)
    }

    // -- Iteration --

    /// Iterates `(identity, component)` pairs over the current contents.
    ///
    /// The iterator borrows the entity, so the entity cannot be modified
    /// until it is dropped. Order is unspecified.
    pub fn iter(&self) -> Components<'_> {
        Components {
            inner: self.components.iter(),
        }
    }
}

impl std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(self.components.values().map(ErasedComponent::name))
            .finish()
    }
}

impl<'a> IntoIterator for &'a Entity {
    type Item = (ComponentTypeId, &'a ErasedComponent);
    type IntoIter = Components<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the components of an [`Entity`], see [`Entity::iter`].
#[derive(Debug, Clone)]
pub struct Components<'a> {
    inner: hash_map::Iter<'a, ComponentTypeId, ErasedComponent>,
}

impl<'a> Iterator for Components<'a> {
    type Item = (ComponentTypeId, &'a ErasedComponent);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&id, component)| (id, component))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Components<'_> {}

impl FusedIterator for Components<'_> {}
