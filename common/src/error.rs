//! Error types shared by the form controller, the persistence store and the
//! verifier encoder.

use thiserror::Error;

use crate::form::RequiredField;

/// Validation failures raised while filling or submitting the student form.
///
/// Each variant maps to one user-visible notification; none of them leave the
/// form in a partially updated state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// One or more required fields are empty. Fields are listed in form order.
    #[error("Please fill all required fields: {}", join_fields(.0))]
    MissingFields(Vec<RequiredField>),

    /// The selected photo file exceeds the upload cap.
    #[error("Photo must be less than {}MB ({size} bytes selected)", mebibytes(.limit))]
    PhotoTooLarge { size: u64, limit: u64 },

    /// The selected file is not a recognised image.
    #[error("The selected file is not a supported image")]
    NotAnImage,

    /// Reading the selected file failed in the host environment.
    #[error("Could not read the selected photo: {0}")]
    PhotoRead(String),
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn mebibytes(bytes: &u64) -> u64 {
    bytes / (1024 * 1024)
}

/// Failures of the underlying key-value backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage backend is reachable (e.g. local storage disabled).
    #[error("local storage is not available")]
    Unavailable,

    /// The backend refused the write (quota exceeded, private mode, ...).
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Errors returned by [`crate::store::CardStore`] write operations.
///
/// Reads never fail; see [`crate::store::CardStore::list`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to serialize saved cards: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The stored value is not a card array; it is left untouched.
    #[error("saved cards are unreadable and were not overwritten: {0}")]
    Corrupted(String),
}

/// Errors produced while building the verifier payload or its QR symbol.
#[derive(Error, Debug)]
pub enum VerifierError {
    #[error("failed to serialize card for verifier: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to encode verifier symbol: {0}")]
    Encode(String),
}
