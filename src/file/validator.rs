// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Chainable validation of a single candidate file.
//!
//! Each check takes the current [`Validation`] and returns the next one. A
//! rejected file stays rejected and every later check is a no-op, so only the
//! first failing check in a chain reports a message.
//!
//! ```
//! use kiwooso_utils::{CandidateFile, FileValidator, MessageCallback};
//!
//! let mut errors = Vec::new();
//! let file = CandidateFile::new("photo.jpg", "image/jpeg", vec![0u8; 1024]);
//! let result = FileValidator::with_callback(
//!     file,
//!     MessageCallback::new().on_error(|msg| errors.push(msg.to_string())),
//! )
//! .validate_size(512 * 1024)
//! .validate_name_length(50)
//! .validate_extension(&["jpg", "png"])
//! .validate_type(&["image/jpeg", "image/png"])
//! .into_result();
//!
//! assert!(result.is_some());
//! assert!(errors.is_empty());
//! ```

use rand::Rng;

use super::record::CandidateFile;

/// Default size limit: 0.5 MiB.
///
/// Limits are whole bytes. The rejection message shows the limit in MiB
/// rounded to six decimals, so `209_715` bytes reads as `0.2MB`.
pub const DEFAULT_MAX_SIZE: u64 = 512 * 1024;
/// Default file name length limit, in characters.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 50;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Outcome slot threaded through the checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    Accepted(CandidateFile),
    Rejected,
}

impl Validation {
    /// Apply `step` to an accepted file; identity on [`Validation::Rejected`].
    pub fn and_then<F>(self, step: F) -> Self
    where
        F: FnOnce(CandidateFile) -> Validation,
    {
        match self {
            Self::Accepted(file) => step(file),
            Self::Rejected => Self::Rejected,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    pub fn as_file(&self) -> Option<&CandidateFile> {
        match self {
            Self::Accepted(file) => Some(file),
            Self::Rejected => None,
        }
    }

    pub fn into_file(self) -> Option<CandidateFile> {
        match self {
            Self::Accepted(file) => Some(file),
            Self::Rejected => None,
        }
    }
}

type Sink<'a> = Box<dyn FnMut(&str) + 'a>;

/// Optional sinks for user-facing messages.
///
/// Sinks are called synchronously, at most once per check, and a missing
/// sink is simply skipped.
#[derive(Default)]
pub struct MessageCallback<'a> {
    on_error: Option<Sink<'a>>,
    on_info: Option<Sink<'a>>,
}

impl<'a> MessageCallback<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive rejection messages.
    pub fn on_error(mut self, sink: impl FnMut(&str) + 'a) -> Self {
        self.on_error = Some(Box::new(sink));
        self
    }

    /// Receive informational messages (renames).
    pub fn on_info(mut self, sink: impl FnMut(&str) + 'a) -> Self {
        self.on_info = Some(Box::new(sink));
        self
    }

    fn error(&mut self, message: &str) {
        if let Some(sink) = self.on_error.as_mut() {
            sink(message);
        }
    }

    fn info(&mut self, message: &str) {
        if let Some(sink) = self.on_info.as_mut() {
            sink(message);
        }
    }
}

impl std::fmt::Debug for MessageCallback<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageCallback")
            .field("on_error", &self.on_error.is_some())
            .field("on_info", &self.on_info.is_some())
            .finish()
    }
}

/// Fluent validator over one candidate file.
#[derive(Debug)]
pub struct FileValidator<'a> {
    validation: Validation,
    callback: MessageCallback<'a>,
}

impl<'a> FileValidator<'a> {
    /// Start a chain with no message sinks.
    pub fn new(file: CandidateFile) -> Self {
        Self::with_callback(file, MessageCallback::default())
    }

    pub fn with_callback(file: CandidateFile, callback: MessageCallback<'a>) -> Self {
        Self {
            validation: Validation::Accepted(file),
            callback,
        }
    }

    /// Reject files larger than `max_size` bytes.
    pub fn validate_size(mut self, max_size: u64) -> Self {
        let callback = &mut self.callback;
        self.validation = self.validation.and_then(|file| {
            if file.size() <= max_size {
                tracing::trace!(name = file.name(), size = file.size(), "Size check passed");
                return Validation::Accepted(file);
            }
            tracing::debug!(name = file.name(), size = file.size(), max_size, "File too large");
            callback.error(&format!(
                "{} 파일 크기가 너무 큽니다. {}MB 이하로 업로드해주세요.",
                file.name(),
                format_mib(max_size)
            ));
            Validation::Rejected
        });
        self
    }

    /// [`FileValidator::validate_size`] with the 0.5 MiB default.
    pub fn validate_size_default(self) -> Self {
        self.validate_size(DEFAULT_MAX_SIZE)
    }

    /// Rename files whose name exceeds `max_length` characters.
    ///
    /// The new name is `image-<0..=999999>.<ext>`, keeping the original
    /// extension. This check never rejects.
    pub fn validate_name_length(mut self, max_length: usize) -> Self {
        let callback = &mut self.callback;
        self.validation = self.validation.and_then(|file| {
            if file.name().chars().count() <= max_length {
                tracing::trace!(name = file.name(), "Name length check passed");
                return Validation::Accepted(file);
            }
            let new_name = random_image_name(file.extension());
            tracing::debug!(old = file.name(), new = %new_name, max_length, "Renaming long file name");
            callback.info(&format!(
                "파일명이 {max_length}자를 초과하여 {new_name}으로 변경하였습니다."
            ));
            Validation::Accepted(file.renamed(new_name))
        });
        self
    }

    /// [`FileValidator::validate_name_length`] with the 50 character default.
    pub fn validate_name_length_default(self) -> Self {
        self.validate_name_length(DEFAULT_MAX_NAME_LENGTH)
    }

    /// Reject files whose extension is not in `allowed` (case-insensitive).
    ///
    /// A name without a dot has no extension and is rejected.
    pub fn validate_extension<S: AsRef<str>>(mut self, allowed: &[S]) -> Self {
        let callback = &mut self.callback;
        self.validation = self.validation.and_then(|file| {
            let permitted = file.extension().is_some_and(|ext| {
                allowed
                    .iter()
                    .any(|candidate| candidate.as_ref().to_lowercase() == ext.to_lowercase())
            });
            if permitted {
                tracing::trace!(name = file.name(), "Extension check passed");
                return Validation::Accepted(file);
            }
            tracing::debug!(name = file.name(), "Extension not allowed");
            callback.error(&format!(
                "{} 파일 형식이 지원되지 않습니다. 허용 형식: {}",
                file.name(),
                join(allowed)
            ));
            Validation::Rejected
        });
        self
    }

    /// Reject files whose content type is not exactly one of `allowed`.
    pub fn validate_type<S: AsRef<str>>(mut self, allowed: &[S]) -> Self {
        let callback = &mut self.callback;
        self.validation = self.validation.and_then(|file| {
            if allowed.iter().any(|t| t.as_ref() == file.content_type()) {
                tracing::trace!(
                    name = file.name(),
                    content_type = file.content_type(),
                    "Content type check passed"
                );
                return Validation::Accepted(file);
            }
            tracing::debug!(
                name = file.name(),
                content_type = file.content_type(),
                "Content type not allowed"
            );
            callback.error(&format!(
                "{} 파일 타입이 지원되지 않습니다. 허용 타입: {}",
                file.name(),
                join(allowed)
            ));
            Validation::Rejected
        });
        self
    }

    /// Current outcome without ending the chain.
    pub fn validation(&self) -> &Validation {
        &self.validation
    }

    /// Accepted (possibly renamed) file, or `None` once any check rejected it.
    pub fn result(&self) -> Option<&CandidateFile> {
        self.validation.as_file()
    }

    /// Finish the chain and release the message sinks.
    pub fn into_result(self) -> Option<CandidateFile> {
        self.validation.into_file()
    }
}

/// Byte count as MiB with at most six decimals and no trailing zeros.
fn format_mib(bytes: u64) -> String {
    let rendered = format!("{:.6}", bytes as f64 / BYTES_PER_MIB);
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

fn random_image_name(extension: Option<&str>) -> String {
    let suffix: u32 = rand::rng().random_range(0..1_000_000);
    match extension {
        Some(ext) => format!("image-{suffix}.{ext}"),
        None => format!("image-{suffix}"),
    }
}

fn join<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}
