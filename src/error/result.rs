use super::context::ErrorContext;
use super::eav_error::EavError;

/// Result alias for operations that fail with [`EavError`].
pub type EavResult<T> = Result<T, EavError>;

/// Attach an [`ErrorContext`] to the error side of a result.
pub trait ResultExt<T> {
    fn context(self, ctx: ErrorContext) -> EavResult<T>;

    /// Like [`ResultExt::context`], building the context only on error.
    fn with_context<F>(self, f: F) -> EavResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<EavError>,
{
    fn context(self, ctx: ErrorContext) -> EavResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> EavResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}
