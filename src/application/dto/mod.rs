/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod filter_request;
mod filter_response;
mod output_format;
mod resolve_request;

pub use filter_request::FilterRequest;
pub use filter_response::{FilterResponse, UnresolvedCandidate};
pub use output_format::OutputFormat;
pub use resolve_request::{ResolveResponse, ResolvedComponent, VersionedComponent};
