#![forbid(unsafe_code)]

//! Decoding of the dialogue content payload.
//!
//! The content provider serves a single JSON document:
//!
//! ```json
//! {
//!   "dialogue": [{ "name": "Bob", "text": "Hello {smile}" }],
//!   "emojies":  [{ "name": "smile", "url": "https://…/smile.png" }],
//!   "avatars":  [{ "name": "Bob", "url": "https://…/bob.png", "position": "left" }]
//! }
//! ```
//!
//! Every section is optional. `"emojis"` is accepted as an alias of the
//! provider's `"emojies"` key.

use std::fmt;
use std::io::Read;

use chatter_text::{ImageHandle, ImageTable};
use serde::Deserialize;

use crate::dialogue::DialogueEntry;

/// A named image reference as delivered by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRef {
    pub name: String,
    pub url: String,
    /// Preferred avatar side (`"left"` / `"right"`). Not used by layout.
    #[serde(default)]
    pub position: Option<String>,
}

/// Raw provider document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DialoguePayload {
    #[serde(default)]
    pub dialogue: Vec<DialogueEntry>,
    #[serde(default, alias = "emojis")]
    pub emojies: Vec<ImageRef>,
    #[serde(default)]
    pub avatars: Vec<ImageRef>,
}

/// Layout-ready content: entries plus the two image lookups.
#[derive(Debug, Clone, Default)]
pub struct DialogueContent {
    pub entries: Vec<DialogueEntry>,
    pub avatars: ImageTable,
    pub icons: ImageTable,
}

impl DialoguePayload {
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, PayloadError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self, PayloadError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Self::from_slice(&buf)
    }

    /// Split into entries and lookup tables.
    ///
    /// Later duplicates of a name replace earlier ones; refs with an empty
    /// name are dropped.
    #[must_use]
    pub fn into_parts(self) -> DialogueContent {
        DialogueContent {
            entries: self.dialogue,
            avatars: table(self.avatars),
            icons: table(self.emojies),
        }
    }
}

fn table(refs: Vec<ImageRef>) -> ImageTable {
    refs.into_iter()
        .filter(|r| !r.name.is_empty())
        .map(|r| (r.name, ImageHandle::new(r.url)))
        .collect()
}

/// Failure to obtain a [`DialoguePayload`].
#[derive(Debug)]
pub enum PayloadError {
    /// The document is not valid payload JSON.
    Decode(serde_json::Error),
    /// Reading the document failed.
    Io(std::io::Error),
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "invalid dialogue payload: {e}"),
            Self::Io(e) => write!(f, "failed to read dialogue payload: {e}"),
        }
    }
}

impl std::error::Error for PayloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }
}

impl From<std::io::Error> for PayloadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
