pub mod component_filter;

pub use component_filter::{ComponentFilter, FilterOutcome};
