//! Entity-Component-System implementation
//!
//! A flat entity store with a closed component set and an ordered,
//! single-threaded system pipeline driven once per simulation step.

pub mod component;
pub mod components;
pub mod entity;
pub mod system;
pub mod systems;
pub mod world;

pub use component::{Component, ComponentKind};
pub use entity::{Entity, EntityId};
pub use system::System;
pub use world::World;
