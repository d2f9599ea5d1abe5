// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reusable validation policies and the built-in image/document presets.
//! Policies can be loaded from JSON so hosts can tune limits without code.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::record::CandidateFile;
use super::validator::{
    DEFAULT_MAX_NAME_LENGTH, DEFAULT_MAX_SIZE, FileValidator, MessageCallback,
};

/// Limits applied in order: size, name length, extension, type.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FilePolicy {
    /// Maximum size in bytes.
    #[serde(default = "default_max_size")]
    pub max_size: u64,
    /// Maximum file name length in characters before renaming.
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    /// Case-insensitive extension allow-list.
    #[serde(default)]
    pub allowed_extensions: Vec<String>,
    /// Exact MIME type allow-list.
    #[serde(default)]
    pub allowed_types: Vec<String>,
}

fn default_max_size() -> u64 {
    DEFAULT_MAX_SIZE
}

fn default_max_name_length() -> usize {
    DEFAULT_MAX_NAME_LENGTH
}

impl Default for FilePolicy {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            allowed_extensions: Vec::new(),
            allowed_types: Vec::new(),
        }
    }
}

impl FilePolicy {
    /// Common raster images up to 0.5 MiB.
    pub fn image() -> Self {
        Self {
            max_size: 512 * 1024,
            max_name_length: 50,
            allowed_extensions: strings(&["jpg", "jpeg", "png", "gif", "webp"]),
            allowed_types: strings(&["image/jpeg", "image/png", "image/gif", "image/webp"]),
        }
    }

    /// PDF, Word and plain-text documents up to 5 MiB.
    pub fn document() -> Self {
        Self {
            max_size: 5 * 1024 * 1024,
            max_name_length: 100,
            allowed_extensions: strings(&["pdf", "doc", "docx", "txt"]),
            allowed_types: strings(&[
                "application/pdf",
                "application/msword",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                "text/plain",
            ]),
        }
    }

    /// Parse a policy from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or a field has the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse file policy JSON")
    }

    /// Read and parse a JSON policy file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or does not parse.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file policy: {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Invalid file policy in {}", path.display()))
    }

    /// Run the full chain over `file`, reporting through `callback`.
    pub fn validate(
        &self,
        file: CandidateFile,
        callback: MessageCallback<'_>,
    ) -> Option<CandidateFile> {
        FileValidator::with_callback(file, callback)
            .validate_size(self.max_size)
            .validate_name_length(self.max_name_length)
            .validate_extension(&self.allowed_extensions)
            .validate_type(&self.allowed_types)
            .into_result()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Validate an image upload with [`FilePolicy::image`].
pub fn validate_image_file(
    file: CandidateFile,
    callback: MessageCallback<'_>,
) -> Option<CandidateFile> {
    FilePolicy::image().validate(file, callback)
}

/// Validate a document upload with [`FilePolicy::document`].
pub fn validate_document_file(
    file: CandidateFile,
    callback: MessageCallback<'_>,
) -> Option<CandidateFile> {
    FilePolicy::document().validate(file, callback)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    // A conforming JPEG passes the image preset.
    #[test]
    fn image_preset_accepts_jpeg() {
        let file = CandidateFile::new("cow.jpg", "image/jpeg", vec![0u8; 1024]);
        let result = validate_image_file(file, MessageCallback::new());
        assert_eq!(result.map(|f| f.name().to_string()), Some("cow.jpg".into()));
    }

    // Matching extension but wrong type is rejected by the last check.
    #[test]
    fn image_preset_rejects_mismatched_type() {
        let mut errors = Vec::new();
        let file = CandidateFile::new("cow.png", "image/svg+xml", vec![0u8; 16]);
        let result = validate_image_file(
            file,
            MessageCallback::new().on_error(|msg| errors.push(msg.to_string())),
        );
        assert!(result.is_none());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("허용 타입: image/jpeg, image/png, image/gif, image/webp"));
    }

    // Documents get a 5 MiB budget and longer names.
    #[test]
    fn document_preset_limits() {
        let name = format!("{}.pdf", "r".repeat(80));
        let file = CandidateFile::new(name.clone(), "application/pdf", vec![0u8; 1024 * 1024]);
        let result = validate_document_file(file, MessageCallback::new());
        assert_eq!(result.map(|f| f.name().to_string()), Some(name));

        let mut errors = Vec::new();
        let big = CandidateFile::new("big.pdf", "application/pdf", vec![0u8; 6 * 1024 * 1024]);
        let result = validate_document_file(
            big,
            MessageCallback::new().on_error(|msg| errors.push(msg.to_string())),
        );
        assert!(result.is_none());
        assert!(errors[0].contains("5MB 이하로"));
    }

    // Missing JSON fields fall back to the defaults.
    #[test]
    fn from_json_str_applies_defaults() {
        let policy = FilePolicy::from_json_str(r#"{"allowed_extensions": ["png"]}"#).unwrap();
        assert_eq!(policy.max_size, DEFAULT_MAX_SIZE);
        assert_eq!(policy.max_name_length, DEFAULT_MAX_NAME_LENGTH);
        assert_eq!(policy.allowed_extensions, vec!["png".to_string()]);
        assert!(policy.allowed_types.is_empty());
    }

    // Malformed JSON is reported with context.
    #[test]
    fn from_json_str_rejects_malformed_input() {
        let err = FilePolicy::from_json_str(r#"{"max_size": "big"}"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse file policy JSON"));
    }

    // Policies load from disk.
    #[test]
    fn from_path_reads_policy_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"{{"max_size": 1024, "max_name_length": 10, "allowed_extensions": ["txt"], "allowed_types": ["text/plain"]}}"#
        )
        .unwrap();

        let policy = FilePolicy::from_path(tmp.path()).unwrap();
        assert_eq!(policy.max_size, 1024);
        assert_eq!(policy.max_name_length, 10);

        let file = CandidateFile::new("a-rather-long-note.txt", "text/plain", vec![0u8; 100]);
        let renamed = policy.validate(file, MessageCallback::new()).unwrap();
        assert!(renamed.name().starts_with("image-"));
        assert!(renamed.name().ends_with(".txt"));
    }

    // A missing file produces a read error.
    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FilePolicy::from_path(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file policy"));
    }
}
