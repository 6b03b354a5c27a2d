//! Resolved or partially resolved symbol references.

use serde::{Deserialize, Serialize};

/// Symbol ID. SID 0 (`$0`) is reserved and never has text.
pub type SymbolId = usize;

/// A symbol reference: optional text plus optional SID.
///
/// Tokens returned by a successful intern always carry both. The fully
/// unknown token ([`SymbolToken::UNKNOWN`]) is what lookups return on a miss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SymbolToken {
    text: Option<String>,
    sid: Option<SymbolId>,
}

impl SymbolToken {
    pub const UNKNOWN: SymbolToken = SymbolToken {
        text: None,
        sid: None,
    };

    pub fn new(text: impl Into<String>, sid: SymbolId) -> Self {
        Self {
            text: Some(text.into()),
            sid: Some(sid),
        }
    }

    /// Token with text whose SID has not been assigned.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            sid: None,
        }
    }

    /// Token with a SID whose text is not known.
    pub fn with_sid(sid: SymbolId) -> Self {
        Self {
            text: None,
            sid: Some(sid),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn sid(&self) -> Option<SymbolId> {
        self.sid
    }

    /// Returns `true` when neither the text nor the SID is known.
    pub fn is_unknown(&self) -> bool {
        self.text.is_none() && self.sid.is_none()
    }
}

impl From<&str> for SymbolToken {
    fn from(text: &str) -> Self {
        Self::with_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_token_has_neither_field() {
        assert!(SymbolToken::UNKNOWN.is_unknown());
        assert_eq!(SymbolToken::default(), SymbolToken::UNKNOWN);
        assert!(!SymbolToken::with_sid(0).is_unknown());
        assert!(!SymbolToken::with_text("").is_unknown());
    }

    #[test]
    fn equality_compares_both_fields() {
        assert_eq!(SymbolToken::new("a", 10), SymbolToken::new("a", 10));
        assert_ne!(SymbolToken::new("a", 10), SymbolToken::new("a", 11));
        assert_ne!(SymbolToken::new("a", 10), SymbolToken::with_text("a"));
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_value(SymbolToken::new("foo", 12)).unwrap();
        assert_eq!(json, serde_json::json!({"text": "foo", "sid": 12}));
        let back: SymbolToken = serde_json::from_value(json).unwrap();
        assert_eq!(back.text(), Some("foo"));
    }
}
