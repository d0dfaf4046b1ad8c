/// Type alias for Result with anyhow::Error as the error type.
/// Domain constructors return `ResolutionError` and convert into this with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
