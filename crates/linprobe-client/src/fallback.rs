//! The "try one query, fall back to another once" combinator.

/// Runs `primary`; if it fails, runs `fallback` exactly once with the
/// primary error.
///
/// Returns the first success, or the fallback's failure. The fallback sees
/// the primary error so callers can report it before switching queries.
pub fn attempt<T, E>(
    primary: impl FnOnce() -> Result<T, E>,
    fallback: impl FnOnce(E) -> Result<T, E>,
) -> Result<T, E> {
    match primary() {
        Ok(value) => Ok(value),
        Err(err) => fallback(err),
    }
}
