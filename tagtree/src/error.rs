//! Error type for the few constructors that can reject their input.

/// Errors produced while building a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An alternating name/value list ended on a name.
    #[error("attribute `{name}` has no value (got {count} strings, expected an even number)")]
    UnpairedAttribute { name: String, count: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
