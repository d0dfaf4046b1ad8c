use crate::application::dto::{FilterRequest, FilterResponse};

/// ComponentFilterPort - Inbound port for filtering dependency components
///
/// The interface driving adapters (CLI, host build integration) use to run
/// a filter request. Filtering never fails; omissions are reported in the
/// response and through the diagnostic sink.
pub trait ComponentFilterPort {
    fn filter_components(&self, request: FilterRequest) -> FilterResponse;
}
