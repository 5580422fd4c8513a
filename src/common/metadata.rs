/// Document properties written into the package's core and extended parts.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Application name recorded in `docProps/app.xml` when none is set.
pub const DEFAULT_APPLICATION: &str = "deckwright";

/// Language tag put on text runs when none is set.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Document metadata for a deck.
///
/// Fields left as `None` are simply omitted from the written properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document author/creator
    pub author: Option<String>,
    /// Company/organization
    pub company: Option<String>,
    /// Revision number
    pub revision: Option<u32>,
    /// Creation date
    pub created: Option<DateTime<Utc>>,
    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
    /// Application that created the document
    pub application: Option<String>,
    /// BCP 47 language tag of the text (e.g. "ru-RU")
    pub language: Option<String>,
}

impl Metadata {
    /// Metadata with only the author set.
    pub fn with_author(author: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            ..Default::default()
        }
    }

    /// Application name, falling back to [`DEFAULT_APPLICATION`].
    pub fn application_name(&self) -> &str {
        self.application.as_deref().unwrap_or(DEFAULT_APPLICATION)
    }

    /// Language tag, falling back to [`DEFAULT_LANGUAGE`].
    pub fn language_tag(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Last-modified timestamp, falling back to the creation time.
    pub fn modified_or_created(&self) -> Option<DateTime<Utc>> {
        self.modified.or(self.created)
    }
}
