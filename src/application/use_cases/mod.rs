/// Use cases module containing application business logic orchestration
mod filter_components;
mod resolve_versions;

pub use filter_components::FilterComponentsUseCase;
pub use resolve_versions::ResolveVersionsUseCase;
