//! Question value object

use serde::{Deserialize, Serialize};

/// A question addressed to the legal-assistance gateway (Value Object)
///
/// Guarantees non-empty, non-whitespace content. Blank input is rejected
/// here, before any session state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        Self::try_new(content).expect("Question cannot be empty")
    }

    /// Try to create a new question, returning None for blank input
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("What is a will?");
        assert_eq!(q.content(), "What is a will?");
    }

    #[test]
    fn test_try_new_blank() {
        assert!(Question::try_new("").is_none());
        assert!(Question::try_new("   \n\t").is_none());
    }

    #[test]
    fn test_try_new_valid() {
        assert!(Question::try_new("How do I contest a trust?").is_some());
    }

    #[test]
    #[should_panic]
    fn test_empty_question_panics() {
        Question::new("");
    }
}
