//! Fallible construction traits for Voto types.
//!
//! This module provides the [`TryNew`] trait for types that require
//! validation during construction and may fail.
//!
//! # When to Use Which Pattern
//!
//! | Pattern | Use When |
//! |---------|----------|
//! | `new()` | Construction always succeeds (infallible) |
//! | [`TryNew`] | Construction requires validation (fallible) |
//! | `TryFrom<T>` | Converting from another type (fallible) |
//! | `Default` | Sensible default value exists |
//! | Builder | Complex multi-field initialization |
//! | Dependency Injection | External dependencies required |
//!
//! # Design Rationale
//!
//! Following Rust's naming conventions:
//!
//! - `new()` - Infallible, always returns `Self`
//! - `try_new()` - Fallible, returns `Result<Self, Error>`
//! - `TryFrom::try_from()` - Fallible conversion from another type
//!
//! This mirrors the standard library's `TryFrom`/`TryInto` pattern
//! but for constructors that don't convert from another type.
//!
//! # Example
//!
//! ```
//! use voto_types::TryNew;
//!
//! /// Non-empty contact handle wrapper.
//! #[derive(Debug)]
//! struct ContactHandle(String);
//!
//! #[derive(Debug, PartialEq)]
//! struct EmptyHandleError;
//!
//! impl TryNew for ContactHandle {
//!     type Error = EmptyHandleError;
//!     type Args = String;
//!
//!     fn try_new(value: String) -> Result<Self, Self::Error> {
//!         if value.trim().is_empty() {
//!             return Err(EmptyHandleError);
//!         }
//!         Ok(ContactHandle(value))
//!     }
//! }
//!
//! // Valid construction
//! let valid = ContactHandle::try_new("ana@campaign.example".to_string());
//! assert!(valid.is_ok());
//!
//! // Invalid construction
//! let invalid = ContactHandle::try_new(String::new());
//! assert_eq!(invalid.unwrap_err(), EmptyHandleError);
//! ```

/// Trait for fallible construction with validation.
///
/// Implement this trait when:
///
/// - Construction requires validation that may fail
/// - You are NOT converting from another type (use `TryFrom` instead)
/// - A plain `new()` cannot guarantee success
///
/// # Naming Convention
///
/// Types implementing `TryNew` should NOT have a plain `new()` method
/// that performs the same validation. The `try_` prefix makes fallibility
/// explicit at the call site.
///
/// # Associated Types
///
/// - `Error`: The error type returned when validation fails
/// - `Args`: The arguments required for construction (can be a tuple)
///
/// # Implementation Guidelines
///
/// 1. **Document invariants**: Explain what validation is performed
/// 2. **Use specific errors**: Return meaningful error types, not `String`
/// 3. **Keep validation pure**: Don't perform side effects in `try_new`
/// 4. **Consider `Args` type**: Use tuples for multiple arguments
///
/// # Example: Single Argument
///
/// ```
/// use voto_types::TryNew;
///
/// struct BallotCount(u32);
///
/// #[derive(Debug)]
/// struct ZeroBallotsError;
///
/// impl TryNew for BallotCount {
///     type Error = ZeroBallotsError;
///     type Args = u32;
///
///     fn try_new(value: u32) -> Result<Self, Self::Error> {
///         if value == 0 {
///             return Err(ZeroBallotsError);
///         }
///         Ok(BallotCount(value))
///     }
/// }
/// ```
///
/// # Example: Multiple Arguments (Tuple)
///
/// ```
/// use voto_types::TryNew;
///
/// struct VotingWindow {
///     opens_at: u64,
///     closes_at: u64,
/// }
///
/// #[derive(Debug)]
/// struct InvalidWindowError;
///
/// impl TryNew for VotingWindow {
///     type Error = InvalidWindowError;
///     type Args = (u64, u64);
///
///     fn try_new((opens_at, closes_at): (u64, u64)) -> Result<Self, Self::Error> {
///         if opens_at >= closes_at {
///             return Err(InvalidWindowError);
///         }
///         Ok(VotingWindow { opens_at, closes_at })
///     }
/// }
///
/// // Usage
/// let window = VotingWindow::try_new((100, 200));
/// assert!(window.is_ok());
/// ```
///
/// # Example: Config Struct Argument
///
/// ```
/// use voto_types::TryNew;
///
/// struct Endpoint {
///     base_url: String,
///     timeout_secs: u64,
/// }
///
/// struct EndpointConfig {
///     base_url: String,
///     timeout_secs: u64,
/// }
///
/// #[derive(Debug)]
/// enum EndpointError {
///     EmptyUrl,
///     ZeroTimeout,
/// }
///
/// impl TryNew for Endpoint {
///     type Error = EndpointError;
///     type Args = EndpointConfig;
///
///     fn try_new(config: EndpointConfig) -> Result<Self, Self::Error> {
///         if config.base_url.is_empty() {
///             return Err(EndpointError::EmptyUrl);
///         }
///         if config.timeout_secs == 0 {
///             return Err(EndpointError::ZeroTimeout);
///         }
///         Ok(Endpoint {
///             base_url: config.base_url,
///             timeout_secs: config.timeout_secs,
///         })
///     }
/// }
/// ```
pub trait TryNew {
    /// The error type returned when construction fails.
    ///
    /// Should be a specific error type that describes why validation failed.
    /// Avoid using `String` or generic error types.
    type Error;

    /// Arguments required for construction.
    ///
    /// Can be:
    /// - A single value: `type Args = String;`
    /// - A tuple: `type Args = (String, u32);`
    /// - A config struct: `type Args = MyConfig;`
    /// - Unit for no args: `type Args = ();` (rare, consider `Default`)
    type Args;

    /// Attempts to create a new instance.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if validation fails. The error should
    /// contain enough information to understand why construction failed.
    ///
    /// # Example
    ///
    /// ```
    /// use voto_types::TryNew;
    ///
    /// struct TurnoutPercent(u8);
    ///
    /// #[derive(Debug)]
    /// struct OutOfBounds;
    ///
    /// impl TryNew for TurnoutPercent {
    ///     type Error = OutOfBounds;
    ///     type Args = u8;
    ///
    ///     fn try_new(value: u8) -> Result<Self, Self::Error> {
    ///         if value > 100 {
    ///             return Err(OutOfBounds);
    ///         }
    ///         Ok(TurnoutPercent(value))
    ///     }
    /// }
    ///
    /// assert!(TurnoutPercent::try_new(50).is_ok());
    /// assert!(TurnoutPercent::try_new(150).is_err());
    /// ```
    fn try_new(args: Self::Args) -> Result<Self, Self::Error>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test: Single argument
    #[derive(Debug)]
    struct ContactHandle(String);

    #[derive(Debug, PartialEq)]
    struct EmptyHandleError;

    impl TryNew for ContactHandle {
        type Error = EmptyHandleError;
        type Args = String;

        fn try_new(value: String) -> Result<Self, Self::Error> {
            if value.trim().is_empty() {
                return Err(EmptyHandleError);
            }
            Ok(ContactHandle(value))
        }
    }

    #[test]
    fn try_new_single_arg_valid() {
        let result = ContactHandle::try_new("ana@campaign.example".to_string());
        assert!(result.is_ok());
        assert_eq!(result.unwrap().0, "ana@campaign.example");
    }

    #[test]
    fn try_new_single_arg_invalid() {
        let result = ContactHandle::try_new("   ".to_string());
        assert_eq!(result.unwrap_err(), EmptyHandleError);
    }

    // Test: Tuple arguments
    #[derive(Debug)]
    struct VotingWindow {
        opens_at: u64,
        closes_at: u64,
    }

    #[derive(Debug, PartialEq)]
    struct InvalidWindowError;

    impl TryNew for VotingWindow {
        type Error = InvalidWindowError;
        type Args = (u64, u64);

        fn try_new((opens_at, closes_at): (u64, u64)) -> Result<Self, Self::Error> {
            if opens_at >= closes_at {
                return Err(InvalidWindowError);
            }
            Ok(VotingWindow { opens_at, closes_at })
        }
    }

    #[test]
    fn try_new_tuple_args_valid() {
        let result = VotingWindow::try_new((100, 200));
        assert!(result.is_ok());
        let window = result
            .expect("VotingWindow::try_new((100, 200)) should succeed for an ascending window");
        assert_eq!(window.opens_at, 100);
        assert_eq!(window.closes_at, 200);
    }

    #[test]
    fn try_new_tuple_args_invalid_same() {
        let result = VotingWindow::try_new((150, 150));
        assert_eq!(result.unwrap_err(), InvalidWindowError);
    }

    #[test]
    fn try_new_tuple_args_invalid_reversed() {
        let result = VotingWindow::try_new((200, 100));
        assert_eq!(result.unwrap_err(), InvalidWindowError);
    }

    // Test: Config struct argument
    struct EndpointConfig {
        base_url: String,
        timeout_secs: u64,
    }

    #[derive(Debug)]
    #[allow(dead_code)]
    struct Endpoint {
        base_url: String,
        timeout_secs: u64,
    }

    #[derive(Debug, PartialEq)]
    enum EndpointError {
        EmptyUrl,
        ZeroTimeout,
    }

    impl TryNew for Endpoint {
        type Error = EndpointError;
        type Args = EndpointConfig;

        fn try_new(config: EndpointConfig) -> Result<Self, Self::Error> {
            if config.base_url.is_empty() {
                return Err(EndpointError::EmptyUrl);
            }
            if config.timeout_secs == 0 {
                return Err(EndpointError::ZeroTimeout);
            }
            Ok(Endpoint {
                base_url: config.base_url,
                timeout_secs: config.timeout_secs,
            })
        }
    }

    #[test]
    fn try_new_config_struct_valid() {
        let config = EndpointConfig {
            base_url: "https://auth.campaign.example".to_string(),
            timeout_secs: 15,
        };
        let result = Endpoint::try_new(config);
        assert!(result.is_ok());
    }

    #[test]
    fn try_new_config_struct_empty_url() {
        let config = EndpointConfig {
            base_url: String::new(),
            timeout_secs: 15,
        };
        let result = Endpoint::try_new(config);
        assert_eq!(result.unwrap_err(), EndpointError::EmptyUrl);
    }

    #[test]
    fn try_new_config_struct_zero_timeout() {
        let config = EndpointConfig {
            base_url: "https://auth.campaign.example".to_string(),
            timeout_secs: 0,
        };
        let result = Endpoint::try_new(config);
        assert_eq!(result.unwrap_err(), EndpointError::ZeroTimeout);
    }

    // Test: Boundary values
    #[derive(Debug)]
    #[allow(dead_code)]
    struct TurnoutPercent(u8);

    #[derive(Debug, PartialEq)]
    struct OutOfBoundsError {
        value: u8,
        max: u8,
    }

    impl TryNew for TurnoutPercent {
        type Error = OutOfBoundsError;
        type Args = u8;

        fn try_new(value: u8) -> Result<Self, Self::Error> {
            const MAX: u8 = 100;
            if value > MAX {
                return Err(OutOfBoundsError { value, max: MAX });
            }
            Ok(TurnoutPercent(value))
        }
    }

    #[test]
    fn try_new_boundary_at_max() {
        let result = TurnoutPercent::try_new(100);
        assert!(result.is_ok());
    }

    #[test]
    fn try_new_boundary_over_max() {
        let result = TurnoutPercent::try_new(101);
        let err = result.unwrap_err();
        assert_eq!(err.value, 101);
        assert_eq!(err.max, 100);
    }

    #[test]
    fn try_new_boundary_zero() {
        let result = TurnoutPercent::try_new(0);
        assert!(result.is_ok());
    }
}
