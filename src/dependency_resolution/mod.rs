//! Domain layer: component descriptors, filtering policies and the filter service.

pub mod domain;
pub mod policies;
pub mod services;
