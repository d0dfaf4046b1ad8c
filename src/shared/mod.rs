pub mod error;
pub mod result;
pub mod security;

pub use error::{ExitCode, ResolutionError};
pub use result::Result;
