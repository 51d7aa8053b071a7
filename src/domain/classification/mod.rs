//! Classification aggregate containing boundary tables, services and value objects.

pub mod bands;
pub mod services;
pub mod value_objects;

pub use bands::*;
pub use value_objects::*;
