//! Drawing primitives for one card, independent of any graphics backend.
//!
//! A [`CardScene`] is rebuilt from scratch whenever the displayed record or the
//! template changes. The frontend paints it onto a canvas; tests inspect it
//! directly.

use log::warn;

use super::Template;
use super::geometry::Rect;
use super::{classic, modern};
use crate::config::SchoolProfile;
use crate::model::{CardRecord, PhotoData};
use crate::verifier::VerifierCode;

/// Logical width shared by both templates.
pub const CARD_WIDTH: f64 = 384.0;

/// Font stack used for every text run.
pub const FONT_FAMILY: &str = "Inter, 'Helvetica Neue', Arial, sans-serif";

pub const NAME_PLACEHOLDER: &str = "Student Name";
pub const FIELD_PLACEHOLDER: &str = "--";
pub const PHOTO_PLACEHOLDER: &str = "Photo";
pub const VERIFIER_PLACEHOLDER: &str = "QR Code";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Solid(&'static str),
    /// Left-to-right gradient across the filled rectangle.
    HorizontalGradient {
        from: &'static str,
        to: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Medium,
    Bold,
}

impl FontWeight {
    pub fn css(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// A single line of text. `y` is the vertical middle of the line.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub weight: FontWeight,
    pub color: &'static str,
    pub align: TextAlign,
    /// Runs wider than this are condensed to fit.
    pub max_width: Option<f64>,
}

impl TextRun {
    pub fn new(text: impl Into<String>, x: f64, y: f64, size: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size,
            weight: FontWeight::Regular,
            color: "#1f2937",
            align: TextAlign::Left,
            max_width: None,
        }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn color(mut self, color: &'static str) -> Self {
        self.color = color;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn max_width(mut self, width: f64) -> Self {
        self.max_width = Some(width);
        self
    }

    /// CSS `font` shorthand for this run.
    pub fn css_font(&self) -> String {
        format!("{} {}px {}", self.weight.css(), self.size, FONT_FAMILY)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        rect: Rect,
        radius: f64,
        fill: Fill,
    },
    Stroke {
        rect: Rect,
        radius: f64,
        color: &'static str,
        width: f64,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: &'static str,
        width: f64,
    },
    Text(TextRun),
    /// Student photo drawn with cover cropping into `rect`.
    Photo { rect: Rect, source: PhotoData },
    Verifier { rect: Rect, code: VerifierCode },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardScene {
    pub template: Template,
    pub width: f64,
    pub height: f64,
    /// Everything is clipped to the card's rounded outline.
    pub corner_radius: f64,
    pub shapes: Vec<Shape>,
}

impl CardScene {
    /// Lays out `record` (or placeholders when `None`) in `template`.
    pub fn build(record: Option<&CardRecord>, template: Template, school: &SchoolProfile) -> Self {
        let fields = CardFields::from_record(record);
        match template {
            Template::Classic => classic::layout(&fields, school),
            Template::Modern => modern::layout(&fields, school),
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Text(run) => Some(run.text.as_str()),
            _ => None,
        })
    }

    /// Photo that must be decoded before the scene can be painted.
    pub fn photo(&self) -> Option<&PhotoData> {
        self.shapes.iter().find_map(|shape| match shape {
            Shape::Photo { source, .. } => Some(source),
            _ => None,
        })
    }

    pub fn verifier(&self) -> Option<&VerifierCode> {
        self.shapes.iter().find_map(|shape| match shape {
            Shape::Verifier { code, .. } => Some(code),
            _ => None,
        })
    }

    /// Pixel size of the raster produced at `scale`.
    pub fn raster_size(&self, scale: f64) -> (u32, u32) {
        (
            (self.width * scale).round() as u32,
            (self.height * scale).round() as u32,
        )
    }
}

/// Display strings for one card, with placeholders already substituted.
pub(crate) struct CardFields {
    pub name: String,
    pub class: String,
    pub roll_number: String,
    pub rack_number: String,
    pub bus_route: String,
    pub allergies: String,
    pub photo: Option<PhotoData>,
    pub verifier: Option<VerifierCode>,
}

impl CardFields {
    fn from_record(record: Option<&CardRecord>) -> Self {
        let Some(record) = record else {
            return Self {
                name: NAME_PLACEHOLDER.to_string(),
                class: FIELD_PLACEHOLDER.to_string(),
                roll_number: FIELD_PLACEHOLDER.to_string(),
                rack_number: FIELD_PLACEHOLDER.to_string(),
                bus_route: FIELD_PLACEHOLDER.to_string(),
                allergies: "None".to_string(),
                photo: None,
                verifier: None,
            };
        };

        let verifier = match VerifierCode::encode(record) {
            Ok(code) => Some(code),
            Err(err) => {
                warn!("verifier for card {} not rendered: {err}", record.id);
                None
            }
        };

        Self {
            name: or_placeholder(&record.name, NAME_PLACEHOLDER),
            class: record.class.to_string(),
            roll_number: or_placeholder(&record.roll_number, FIELD_PLACEHOLDER),
            rack_number: or_placeholder(&record.rack_number, FIELD_PLACEHOLDER),
            bus_route: record.bus_route.to_string(),
            allergies: crate::model::format_allergies(&record.allergies),
            photo: Some(record.photo.clone()).filter(|photo| !photo.is_empty()),
            verifier,
        }
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Photo slot: the photo itself, or a grey box labelled "Photo".
pub(crate) fn photo_slot(shapes: &mut Vec<Shape>, rect: Rect, photo: Option<&PhotoData>, empty: Fill) {
    match photo {
        Some(source) => shapes.push(Shape::Photo {
            rect,
            source: source.clone(),
        }),
        None => {
            shapes.push(Shape::Rect {
                rect,
                radius: 0.0,
                fill: empty,
            });
            shapes.push(Shape::Text(
                TextRun::new(PHOTO_PLACEHOLDER, rect.center_x(), rect.center_y(), 12.0)
                    .color("#6b7280")
                    .align(TextAlign::Center),
            ));
        }
    }
}

/// Verifier slot: the QR symbol, or the "QR Code" label when there is nothing
/// to encode.
pub(crate) fn verifier_slot(shapes: &mut Vec<Shape>, rect: Rect, code: Option<&VerifierCode>) {
    match code {
        Some(code) => shapes.push(Shape::Verifier {
            rect,
            code: code.clone(),
        }),
        None => shapes.push(Shape::Text(
            TextRun::new(VERIFIER_PLACEHOLDER, rect.center_x(), rect.center_y(), 12.0)
                .color("#6b7280")
                .align(TextAlign::Center),
        )),
    }
}
