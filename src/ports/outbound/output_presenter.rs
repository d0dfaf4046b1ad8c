use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the formatted filter result is presented.
pub trait OutputPresenter {
    /// Presents formatted content to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
