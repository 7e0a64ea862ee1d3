//! Compile-time settings shared by the frontend and the tests.

/// Local storage key holding the JSON array of saved cards.
pub const STORAGE_KEY: &str = "unity_student_cards";

/// Largest photo file accepted by the form, in bytes (2 MiB).
pub const MAX_PHOTO_BYTES: u64 = 2 * 1024 * 1024;

/// Supersampling factor between the logical card size and the exported PNG.
pub const EXPORT_SCALE: f64 = 2.0;

/// Suffix appended to the student's name when naming the exported file.
pub const EXPORT_FILE_SUFFIX: &str = "_ID_Card.png";

/// School branding printed on every card.
///
/// The frontend uses [`SchoolProfile::default`]; tests build their own to check
/// that the scene never hard-codes these strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolProfile {
    pub name: String,
    /// Subtitle under the school name on the classic template.
    pub card_title: String,
    pub academic_year: String,
    pub address: String,
}

impl Default for SchoolProfile {
    fn default() -> Self {
        Self {
            name: "UNITY SCHOOL".to_string(),
            card_title: "STUDENT IDENTIFICATION CARD".to_string(),
            academic_year: "2023-2024".to_string(),
            address: "123 Education Ave, Knowledge City".to_string(),
        }
    }
}

impl SchoolProfile {
    /// Line printed in card footers asking finders to return the card.
    pub fn return_notice(&self) -> String {
        format!("If found, please return to {}", title_case(&self.name))
    }
}

fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_notice_uses_title_case_school_name() {
        let profile = SchoolProfile::default();
        assert_eq!(profile.return_notice(), "If found, please return to Unity School");
    }

    #[test]
    fn photo_cap_is_two_mebibytes() {
        assert_eq!(MAX_PHOTO_BYTES, 2_097_152);
    }
}
