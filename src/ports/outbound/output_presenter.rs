use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the sink (stdout, file, etc.) that receives a
/// rendered tree or a resolution report.
pub trait OutputPresenter {
    /// Presents the rendered content to the output destination
    ///
    /// # Arguments
    /// * `content` - The rendered content to present
    ///
    /// # Returns
    /// Success or error if presentation fails
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
