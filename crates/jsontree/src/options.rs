/// Configuration options for the JSON parser.
///
/// # Examples
///
/// ```rust
/// use jsontree::{parse_with_options, ErrorKind, ParserOptions};
///
/// let options = ParserOptions {
///     max_depth: 2,
///     ..Default::default()
/// };
/// assert!(parse_with_options("[[1]]", options).is_ok());
/// let err = parse_with_options("[[[1]]]", options).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NestingTooDeep { limit: 2 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum nesting depth of arrays and objects.
    ///
    /// Recursion depth of the parser equals the nesting depth of the
    /// document, so this bounds stack usage on adversarial input. Opening a
    /// container one level deeper fails with
    /// [`ErrorKind::NestingTooDeep`](crate::ErrorKind::NestingTooDeep).
    /// A value of `0` accepts scalar documents only.
    ///
    /// # Default
    ///
    /// `512`
    pub max_depth: usize,

    /// Maximum input length in bytes, checked before parsing starts.
    ///
    /// # Default
    ///
    /// `None` (unlimited)
    pub max_input_len: Option<usize>,
}

impl ParserOptions {
    /// The default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 512;
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_input_len: None,
        }
    }
}
