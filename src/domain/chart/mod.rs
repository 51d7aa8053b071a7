//! Chart aggregate producing presentation-ready data for the simulation views.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
