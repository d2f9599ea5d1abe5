// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Upload file validation: in-memory file records, the chainable validator,
//! and preset policies.

pub mod policy;
pub mod record;
pub mod validator;

/// Preset and configurable validation policies.
pub use policy::{FilePolicy, validate_document_file, validate_image_file};
/// In-memory candidate file.
pub use record::CandidateFile;
/// Chainable validator and its building blocks.
pub use validator::{
    DEFAULT_MAX_NAME_LENGTH, DEFAULT_MAX_SIZE, FileValidator, MessageCallback, Validation,
};
