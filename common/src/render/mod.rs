//! Card layout for the two selectable templates.

use std::fmt;
use std::str::FromStr;

mod classic;
pub mod geometry;
mod modern;
pub mod scene;

pub use geometry::{Rect, cover_crop};
pub use scene::{CardScene, Fill, FontWeight, Shape, TextAlign, TextRun};

pub(crate) const PRIMARY: &str = "#3b82f6";
pub(crate) const SECONDARY: &str = "#10b981";
pub(crate) const BORDER: &str = "#d1d5db";

/// Visual layout of the card. Same data, different arrangement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Template {
    #[default]
    Classic,
    Modern,
}

impl Template {
    pub const ALL: [Template; 2] = [Template::Classic, Template::Modern];

    pub fn label(self) -> &'static str {
        match self {
            Template::Classic => "Classic",
            Template::Modern => "Modern",
        }
    }

    /// Value used by the template `<select>`.
    pub fn key(self) -> &'static str {
        match self {
            Template::Classic => "template1",
            Template::Modern => "template2",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Template {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| format!("unknown template: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::scene::{FIELD_PLACEHOLDER, NAME_PLACEHOLDER, PHOTO_PLACEHOLDER, VERIFIER_PLACEHOLDER};
    use super::*;
    use crate::config::SchoolProfile;
    use crate::model::{Allergy, BusRoute, CardRecord, ClassCode, PhotoData};
    use chrono::{TimeZone, Utc};

    fn record() -> CardRecord {
        CardRecord {
            id: "c0ffee".to_string(),
            name: "Ann Lee".to_string(),
            roll_number: "12".to_string(),
            class: ClassCode::Class3A,
            allergies: vec![Allergy::Peanuts, Allergy::Dairy],
            photo: PhotoData::from_uri("data:image/png;base64,AA=="),
            rack_number: "R5".to_string(),
            bus_route: BusRoute::Route2,
            created_at: Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap(),
        }
    }

    #[test]
    fn empty_card_shows_placeholders_in_both_templates() {
        for template in Template::ALL {
            let scene = CardScene::build(None, template, &SchoolProfile::default());
            let texts: Vec<_> = scene.texts().collect();
            assert!(texts.contains(&NAME_PLACEHOLDER), "{template}");
            assert!(texts.contains(&PHOTO_PLACEHOLDER), "{template}");
            assert!(texts.contains(&VERIFIER_PLACEHOLDER), "{template}");
            assert!(texts.iter().any(|t| t.ends_with(FIELD_PLACEHOLDER)), "{template}");
            assert!(texts.contains(&"None"), "{template}");
            assert!(scene.photo().is_none());
            assert!(scene.verifier().is_none());
        }
    }

    #[test]
    fn classic_card_prints_record_fields() {
        let card = record();
        let scene = CardScene::build(Some(&card), Template::Classic, &SchoolProfile::default());
        let texts: Vec<_> = scene.texts().collect();
        assert!(texts.contains(&"Ann Lee"));
        assert!(texts.contains(&"Class: 3A"));
        assert!(texts.contains(&"Roll No: 12"));
        assert!(texts.contains(&"Rack #: R5"));
        assert!(texts.contains(&"Bus Route: Route 2"));
        assert!(texts.contains(&"Peanuts, Dairy"));
        assert_eq!(scene.photo(), Some(&card.photo));
        assert!(scene.verifier().is_some());
    }

    #[test]
    fn modern_card_uses_its_own_layout() {
        let card = record();
        let school = SchoolProfile::default();
        let classic = CardScene::build(Some(&card), Template::Classic, &school);
        let modern = CardScene::build(Some(&card), Template::Modern, &school);

        assert_eq!(modern.template, Template::Modern);
        assert_ne!(classic.height, modern.height);
        let texts: Vec<_> = modern.texts().collect();
        assert!(texts.contains(&"RACK NUMBER"));
        assert!(texts.contains(&"R5"));
        assert!(texts.contains(&"STUDENT ID \u{2022} 2023-2024"));
        assert!(modern.shapes.iter().any(|s| matches!(
            s,
            Shape::Rect { fill: Fill::HorizontalGradient { .. }, .. }
        )));
    }

    #[test]
    fn scenes_are_deterministic() {
        let card = record();
        let school = SchoolProfile::default();
        assert_eq!(
            CardScene::build(Some(&card), Template::Modern, &school),
            CardScene::build(Some(&card), Template::Modern, &school)
        );
    }

    #[test]
    fn school_profile_drives_branding() {
        let school = SchoolProfile {
            name: "RIVERSIDE ACADEMY".to_string(),
            ..SchoolProfile::default()
        };
        let scene = CardScene::build(None, Template::Classic, &school);
        assert!(scene.texts().any(|t| t == "RIVERSIDE ACADEMY"));
        assert!(scene.texts().any(|t| t == "If found, please return to Riverside Academy"));
    }

    #[test]
    fn raster_is_twice_the_logical_size() {
        let scene = CardScene::build(None, Template::Classic, &SchoolProfile::default());
        assert_eq!(scene.raster_size(crate::config::EXPORT_SCALE), (768, 904));
    }

    #[test]
    fn template_keys_round_trip() {
        for template in Template::ALL {
            assert_eq!(template.key().parse::<Template>(), Ok(template));
        }
        assert!("template3".parse::<Template>().is_err());
    }

    #[test]
    fn text_runs_describe_css_fonts() {
        let run = TextRun::new("x", 0.0, 0.0, 14.0).weight(FontWeight::Bold);
        assert!(run.css_font().starts_with("700 14px "));
    }
}
