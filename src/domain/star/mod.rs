//! Star aggregate containing entities, gateway contract and value objects.

pub mod entities;
pub mod gateway;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
