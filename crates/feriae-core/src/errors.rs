//! Error types for the feriae workspace.
//!
//! A single `thiserror`-derived enum covers the whole engine. The variants
//! mirror the failure classes of the evaluation contract: configuration
//! errors are fatal and surface at composition time, unknown enumerator
//! tokens fail fast with the offending value, and calendar-math range
//! errors stay distinguishable from an empty ("no occurrence") result.

use thiserror::Error;

/// The top-level error type used throughout feriae.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid configuration detected while composing a calendar tree
    /// (duplicate sibling ids, malformed rule data). Always fatal; never
    /// tolerated mid-evaluation.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A token did not name any variant of a closed enumeration.
    #[error("unknown {kind} value: {value:?}")]
    UnknownEnumerator {
        /// Which enumeration was being matched (e.g. `"year cycle"`).
        kind: &'static str,
        /// The offending token.
        value: String,
    },

    /// Gregorian date arithmetic left the representable range.
    #[error("date error: {0}")]
    Date(String),

    /// An alternate-calendar conversion produced a date outside the
    /// representable range. Semantically different from a rule simply having
    /// no occurrence in a year.
    #[error("calendar conversion error: {0}")]
    Conversion(String),
}

/// Shorthand `Result` type used throughout feriae.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Configuration(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use feriae_core::{ensure, errors::Result};
/// fn month(m: u8) -> Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(7).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Configuration(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Configuration(...))` immediately.
///
/// # Example
/// ```
/// use feriae_core::{fail, errors::Result};
/// fn always_err() -> Result<()> {
///     fail!("unreachable rule state");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Configuration(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offending_value() {
        let e = Error::UnknownEnumerator {
            kind: "islamic holiday",
            value: "EID_UNKNOWN".into(),
        };
        assert_eq!(e.to_string(), "unknown islamic holiday value: \"EID_UNKNOWN\"");
    }

    #[test]
    fn conversion_distinct_from_date() {
        let c = Error::Conversion("year 10241 beyond range".into());
        let d = Error::Date("year 10241 beyond range".into());
        assert_ne!(c, d);
    }
}
