//! Sensitive data marker
//!
//! Values of no-echo stack parameters must never reach a log line or a
//! rendered diff. Wrapping them in [`Sensitive`] makes `Debug` and `Display`
//! print the same mask the remote platform uses.

use std::fmt;

/// Placeholder the remote platform returns in place of a no-echo value
pub const MASK: &str = "****";

/// Wrapper that masks its value in `Debug` and `Display`
///
/// # Example
///
/// ```
/// use cfndiff_core_types::Sensitive;
///
/// let token = Sensitive::new("hunter2");
/// assert_eq!(format!("{}", token), "****");
/// assert_eq!(token.expose(), &"hunter2");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

/// True when `value` is the platform's masked placeholder
pub fn is_mask(value: &str) -> bool {
    value == MASK
}
