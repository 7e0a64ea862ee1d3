//! Shared core of the student ID card generator.
//!
//! Everything in this crate is target independent: the frontend compiles it to
//! `wasm32-unknown-unknown` and the unit tests run it natively. Browser specifics
//! (local storage, canvas, file reading) live in the frontend crate and plug in
//! through [`store::KeyValueStorage`] and the [`render::CardScene`] primitives.

pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod model;
pub mod render;
pub mod store;
pub mod verifier;

pub use error::{FormError, StorageError, StoreError, VerifierError};
pub use model::card::{CardRecord, NewCard};
