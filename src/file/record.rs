// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Candidate upload file held in memory before any persistence step.

/// In-memory file metadata and payload awaiting validation.
///
/// The size always matches the payload length. Records are never edited in
/// place; [`CandidateFile::renamed`] consumes the record and returns a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateFile {
    name: String,
    content_type: String,
    content: Vec<u8>,
}

impl CandidateFile {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            content: content.into(),
        }
    }

    /// Build a record whose content type is guessed from the file name.
    ///
    /// Unknown extensions map to `application/octet-stream`.
    pub fn with_guessed_type(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let name = name.into();
        let content_type = guess_mime(&name);
        Self::new(name, content_type, content)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// MIME type tag supplied by the caller (or guessed).
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Payload size in bytes.
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    /// Text after the last dot of the name, if any.
    pub fn extension(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(_, ext)| ext)
    }

    /// Replace the name, keeping content and content type.
    pub fn renamed(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn into_content(self) -> Vec<u8> {
        self.content
    }
}

fn guess_mime(name: &str) -> String {
    mime_guess::from_path(name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
