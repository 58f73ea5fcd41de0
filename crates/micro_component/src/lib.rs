//! # micro_component
//!
//! The "C" and the "E" of the micro ECS: what a component is, and the
//! per-entity store that owns components by type.
//!
//! This crate provides:
//!
//! - [`Component`] trait — the capability every attachable type implements.
//! - [`ComponentTypeId`] — stable FNV-1a identity of a component type.
//! - [`Entity`] — a container holding at most one component per type.
//! - [`Components`] — the borrowing iterator over an entity's contents.
//! - [`EntityError`] — returned only by the `require` accessors.

pub mod component;
pub mod entity;
pub mod error;

pub use component::{Component, ComponentMeta, ComponentTypeId};
pub use entity::{Components, Entity, ErasedComponent};
pub use error::EntityError;
