/// Result alias used across the crate.
///
/// Typed failures are raised as [`crate::shared::error::MdepError`] and carried
/// inside `anyhow::Error`, so callers can still `downcast_ref` them.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
