//! Website idea submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SubmissionError;

/// Minimum idea length, in characters, after trimming.
pub const MIN_IDEA_CHARS: usize = 10;
/// Maximum idea length, in characters, after trimming.
pub const MAX_IDEA_CHARS: usize = 1000;

/// Author recorded with every idea (the form has no name field).
pub const PLACEHOLDER_AUTHOR: &str = "Anonymous";
/// Note recorded with every idea (the form has no wish field).
pub const PLACEHOLDER_NOTE: &str = "Happy birthday!";

/// A validated website idea.
///
/// Construction trims the raw input and enforces the length bounds, so a
/// value of this type always satisfies `MIN_IDEA_CHARS <= len <= MAX_IDEA_CHARS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaSubmission {
    text: String,
}

impl IdeaSubmission {
    /// Validate untrusted input.
    pub fn parse(raw: &str) -> Result<Self, SubmissionError> {
        let text = raw.trim();
        let len = text.chars().count();

        if len == 0 {
            return Err(SubmissionError::EmptyInput);
        }
        if len < MIN_IDEA_CHARS {
            return Err(SubmissionError::TooShort {
                len,
                min: MIN_IDEA_CHARS,
            });
        }
        if len > MAX_IDEA_CHARS {
            return Err(SubmissionError::TooLong {
                len,
                max: MAX_IDEA_CHARS,
            });
        }

        Ok(Self {
            text: text.to_string(),
        })
    }

    /// Length in characters.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Convert into the record shape the remote store accepts.
    pub fn into_record(self) -> IdeaRecord {
        IdeaRecord {
            author: PLACEHOLDER_AUTHOR.to_string(),
            note: PLACEHOLDER_NOTE.to_string(),
            idea: self.text,
        }
    }
}

/// Row inserted into the remote `wishes` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaRecord {
    #[serde(rename = "name")]
    pub author: String,
    #[serde(rename = "wish")]
    pub note: String,
    #[serde(rename = "site_idea")]
    pub idea: String,
}

/// Confirmation returned for an accepted idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    /// Length of the stored idea, in characters
    pub chars: usize,
    pub submitted_at: DateTime<Utc>,
}
