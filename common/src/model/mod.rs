//! Data shapes shared by the form, the store and the renderer.

pub mod card;
pub mod catalog;
pub mod photo;
pub mod timestamp;

pub use card::{CardRecord, NewCard};
pub use catalog::{Allergy, BusRoute, ClassCode, format_allergies};
pub use photo::{PhotoData, check_photo_size};
