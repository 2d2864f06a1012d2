//! Player name entry rules.

use derive_more::{Display, Error};
use tracing::instrument;

/// A rejected player name.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum NameError {
    /// Nothing left after trimming.
    #[display("Player name cannot be empty")]
    Empty,
}

/// Trims surrounding whitespace and rejects blank names.
#[instrument]
pub fn parse_name(raw: &str) -> Result<String, NameError> {
    let name = raw.trim();
    if name.is_empty() {
        Err(NameError::Empty)
    } else {
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(parse_name("  Ada \n"), Ok("Ada".to_string()));
    }

    #[test]
    fn test_keeps_inner_spaces() {
        assert_eq!(parse_name("Ada Lovelace"), Ok("Ada Lovelace".to_string()));
    }

    #[test]
    fn test_rejects_blank() {
        assert_eq!(parse_name(""), Err(NameError::Empty));
        assert_eq!(parse_name(" \t "), Err(NameError::Empty));
    }
}
