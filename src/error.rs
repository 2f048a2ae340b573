//! Decoration error types.

use thiserror::Error;

/// Errors raised while decorating a document.
///
/// Structural failures (`EntryArity`, `AgentArity`) only surface under
/// [`MalformedPolicy::Fail`](crate::config::MalformedPolicy); the default
/// policy logs and skips the offending entry instead.
#[derive(Debug, Error)]
pub enum DecorateError {
    #[error("HTML parsing failed: {0}")]
    Parse(String),

    #[error("no block element at the given path")]
    BlockNotFound,

    #[error("field entry has {found} cell(s), expected a label and a value")]
    EntryArity { found: usize },

    #[error("`{name}` value has {found} child element(s), expected a type and a name")]
    AgentArity { name: String, found: usize },

    #[error("document has no <head> element")]
    MissingHead,

    #[error("block is nested less than two levels deep, no container to remove")]
    ShallowBlock,

    #[error("JSON-LD serialization failed")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_carry_context() {
        let err = DecorateError::EntryArity { found: 1 };
        assert!(format!("{err}").contains("1 cell(s)"));

        let err = DecorateError::AgentArity {
            name: "creator".to_string(),
            found: 0,
        };
        let display = format!("{err}");
        assert!(display.contains("creator"));
        assert!(display.contains("0 child element(s)"));
    }
}
