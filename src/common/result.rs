use crate::common::error::ProgenError;

/// Result alias used throughout the crate.
///
/// # Examples
///
/// ```
/// use progen::common::result::ProgenResult;
/// use progen::common::error::ProgenError;
///
/// fn example_function() -> ProgenResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> ProgenResult<()> {
///     Err(ProgenError::internal_error("Something went wrong"))
/// }
/// ```
pub type ProgenResult<T> = Result<T, ProgenError>;

/// Helper for converting `Option` values into [`ProgenResult`]
pub trait OptionExt<T> {
    /// Convert `None` into a validation error for the given field
    fn ok_or_validation_error(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> ProgenResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_validation_error(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> ProgenResult<T> {
        self.ok_or_else(|| ProgenError::validation_error(field, message, None))
    }
}
