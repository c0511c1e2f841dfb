//! The note entity.

use serde::Serialize;

/// A named unit of text stored as exactly one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    /// Note name, also the file stem on disk.
    pub name: String,

    /// Full note body.
    pub text: String,
}

impl Note {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_name_and_text() {
        let note = Note::new("todo", "buy milk");
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "todo", "text": "buy milk" }));
    }
}
