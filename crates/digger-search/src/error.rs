/// Errors surfaced by the selector parser and the search executor.
///
/// Matching itself is total: malformed attribute paths and unrecognized
/// attribute operators degrade to failed checks instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The parent splitter (`<`) was requested. Parent-axis traversal is not
    /// implemented and must never silently degrade to descendants mode.
    #[error("the parent splitter '<' is not supported")]
    UnsupportedSplitter,

    /// The selector text could not be parsed.
    #[error("invalid selector: {0}")]
    Parse(String),

    /// A pseudo-modifier name that the engine does not know (e.g. `:frist`).
    #[error("unknown selector modifier ':{0}'")]
    UnknownModifier(String),
}
