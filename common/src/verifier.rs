//! Machine-readable verifier printed on every card.
//!
//! The payload is the JSON of the displayed record, identical to what the
//! store persists, so a scanner recovers the whole card without a network
//! call. A QR symbol at level M holds at most 2331 bytes; records with an
//! embedded photo are usually larger, in which case the symbol carries the
//! record without its `photo` field and [`VerifierCode::is_complete`] says so.

use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};

use crate::error::VerifierError;
use crate::model::CardRecord;

/// Exact serialized form of `record`.
pub fn verifier_payload(record: &CardRecord) -> Result<String, VerifierError> {
    Ok(serde_json::to_string(record)?)
}

/// Module matrix of an encoded verifier, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierCode {
    width: usize,
    dark: Vec<bool>,
    complete: bool,
}

impl VerifierCode {
    pub fn encode(record: &CardRecord) -> Result<Self, VerifierError> {
        let payload = verifier_payload(record)?;
        match Self::from_payload(&payload) {
            Ok(code) => Ok(code),
            Err(QrError::DataTooLong) => {
                let mut value = serde_json::to_value(record)?;
                if let Some(fields) = value.as_object_mut() {
                    fields.remove("photo");
                }
                let compact = serde_json::to_string(&value)?;
                let mut code = Self::from_payload(&compact)
                    .map_err(|err| VerifierError::Encode(err.to_string()))?;
                code.complete = false;
                Ok(code)
            }
            Err(err) => Err(VerifierError::Encode(err.to_string())),
        }
    }

    fn from_payload(payload: &str) -> Result<Self, QrError> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)?;
        let dark = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();
        Ok(Self {
            width: code.width(),
            dark,
            complete: true,
        })
    }

    /// Number of modules per side.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.dark[y * self.width + x]
    }

    /// Whether the symbol carries the full payload, photo included.
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Allergy, BusRoute, ClassCode, PhotoData};
    use chrono::{TimeZone, Utc};

    fn record(photo: &str) -> CardRecord {
        CardRecord {
            id: "5f0c2a4e-0000-4000-8000-000000000001".to_string(),
            name: "Ann Lee".to_string(),
            roll_number: "12".to_string(),
            class: ClassCode::Class3A,
            allergies: vec![Allergy::Peanuts],
            photo: PhotoData::from_uri(photo),
            rack_number: "R5".to_string(),
            bus_route: BusRoute::Route2,
            created_at: Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap(),
        }
    }

    #[test]
    fn payload_is_the_record_json() {
        let card = record("data:image/png;base64,AA==");
        let payload = verifier_payload(&card).unwrap();
        let decoded: CardRecord = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, card);
        assert!(payload.contains(r#""rollNumber":"12""#));
    }

    #[test]
    fn small_records_encode_completely() {
        let code = VerifierCode::encode(&record("data:image/png;base64,AA==")).unwrap();
        assert!(code.is_complete());
        assert!(code.width() >= 21);
        // Finder pattern corners are always dark.
        assert!(code.is_dark(0, 0));
        assert!(code.is_dark(code.width() - 1, 0));
        assert!(!code.is_dark(code.width(), 0));
    }

    #[test]
    fn oversized_photo_falls_back_to_compact_payload() {
        let big = format!("data:image/png;base64,{}", "A".repeat(8_000));
        let code = VerifierCode::encode(&record(&big)).unwrap();
        assert!(!code.is_complete());
    }

    #[test]
    fn encoding_is_deterministic() {
        let card = record("data:image/png;base64,AA==");
        assert_eq!(
            VerifierCode::encode(&card).unwrap(),
            VerifierCode::encode(&card).unwrap()
        );
    }
}
