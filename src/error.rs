use thiserror::Error;

/// Represents errors that can occur when registering a route.
///
/// Every variant is a configuration mistake: registration fails before the
/// routing table is touched, so a rejected route never leaves partial state
/// behind.
///
/// ```
/// use routetrie::{Handler, InsertError, Router};
///
/// let mut router: Router<()> = Router::new();
/// let err = router.get("/:a:b", [Handler::plain(|| {})]).unwrap_err();
/// assert!(matches!(err, InsertError::AdjacentParams { .. }));
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq, Error)]
pub enum InsertError {
    /// Route patterns must begin with `/`.
    #[error("route pattern must begin with '/': {pattern:?}")]
    MissingLeadingSlash {
        /// The rejected pattern.
        pattern: String,
    },
    /// The method token is empty or contains disallowed bytes.
    #[error("HTTP method {method:?} is invalid")]
    InvalidMethod {
        /// The rejected method token.
        method: String,
    },
    /// A route needs at least one handler.
    #[error("there must be at least one handler")]
    EmptyChain,
    /// A bracketed capture was opened with `(` but never closed.
    #[error("unmatched '(' at byte {position}")]
    UnclosedBracket {
        /// Byte offset of the opening bracket.
        position: usize,
    },
    /// Parameters must be registered with a name.
    #[error("parameters must be registered with a name")]
    UnnamedParam,
    /// Parameter names may only contain ASCII letters, digits and `_`.
    #[error("invalid parameter name {name:?}")]
    InvalidParamName {
        /// The rejected name.
        name: String,
    },
    /// An inline regular expression failed to compile.
    #[error("invalid regular expression for parameter {name:?}: {message}")]
    InvalidRegex {
        /// The parameter the expression belongs to.
        name: String,
        /// The compiler's error message.
        message: String,
    },
    /// Two captures follow each other with no static text between them.
    #[error("parameters {first:?} and {second:?} must be separated by static text")]
    AdjacentParams {
        /// The first capture, as written in the pattern.
        first: String,
        /// The capture that immediately follows it.
        second: String,
    },
}
