//! # micro_system
//!
//! The "S" of the micro ECS: logic units that run on every entity carrying
//! a required combination of components.
//!
//! ## Usage
//!
//! ```rust
//! use micro_component::{Component, Entity};
//! use micro_system::{RequiredTypes, System};
//!
//! struct Health(u32);
//! impl Component for Health {}
//!
//! struct Regenerate {
//!     required: RequiredTypes,
//! }
//!
//! impl System for Regenerate {
//!     fn required(&self) -> &RequiredTypes {
//!         &self.required
//!     }
//!
//!     fn logic(&mut self, entity: &mut Entity) {
//!         if let Some(health) = entity.get_mut::<Health>() {
//!             health.0 += 1;
//!         }
//!     }
//! }
//!
//! let mut entities = vec![Entity::new(), Entity::new()];
//! entities[0].emplace(Health(9));
//!
//! let mut regen = Regenerate { required: RequiredTypes::of::<(Health,)>() };
//! assert_eq!(regen.process_all(&mut entities), 1);
//! assert_eq!(entities[0].get::<Health>().map(|h| h.0), Some(10));
//! ```

pub mod required;
pub mod system;

pub use required::{ComponentSet, RequiredTypes};
pub use system::System;
