//! "Classic" template: solid header with a crest, photo on the left, details
//! on the right, allergies and verifier stacked below.

use super::geometry::Rect;
use super::scene::{
    CARD_WIDTH, CardFields, CardScene, Fill, FontWeight, Shape, TextAlign, TextRun, photo_slot,
    verifier_slot,
};
use super::{BORDER, PRIMARY, Template};
use crate::config::SchoolProfile;

const HEIGHT: f64 = 452.0;
const PAD: f64 = 16.0;
const INFO_X: f64 = 128.0;

pub(crate) fn layout(fields: &CardFields, school: &SchoolProfile) -> CardScene {
    let mut shapes = Vec::new();
    let center = CARD_WIDTH / 2.0;

    shapes.push(Shape::Rect {
        rect: Rect::new(0.0, 0.0, CARD_WIDTH, HEIGHT),
        radius: 0.0,
        fill: Fill::Solid("#ffffff"),
    });

    // Header
    shapes.push(Shape::Rect {
        rect: Rect::new(0.0, 0.0, CARD_WIDTH, 64.0),
        radius: 0.0,
        fill: Fill::Solid(PRIMARY),
    });
    crest(&mut shapes, 28.0, 32.0);
    shapes.push(Shape::Text(
        TextRun::new(&school.name, center, 26.0, 18.0)
            .weight(FontWeight::Bold)
            .color("#ffffff")
            .align(TextAlign::Center),
    ));
    shapes.push(Shape::Text(
        TextRun::new(&school.card_title, center, 46.0, 12.0)
            .color("#ffffff")
            .align(TextAlign::Center),
    ));

    // Photo and details
    let photo = Rect::new(PAD, 80.0, 96.0, 128.0);
    photo_slot(&mut shapes, photo, fields.photo.as_ref(), Fill::Solid("#e5e7eb"));
    shapes.push(Shape::Stroke {
        rect: photo,
        radius: 0.0,
        color: BORDER,
        width: 1.0,
    });

    let info_width = CARD_WIDTH - INFO_X - PAD;
    shapes.push(Shape::Text(
        TextRun::new(&fields.name, INFO_X, 92.0, 18.0)
            .weight(FontWeight::Bold)
            .max_width(info_width),
    ));
    for (label, value, y) in [
        ("Class", &fields.class, 118.0),
        ("Roll No", &fields.roll_number, 142.0),
        ("Rack #", &fields.rack_number, 174.0),
        ("Bus Route", &fields.bus_route, 196.0),
    ] {
        shapes.push(Shape::Text(
            TextRun::new(format!("{label}: {value}"), INFO_X, y, 14.0)
                .color("#4b5563")
                .max_width(info_width),
        ));
    }

    // Allergies
    divider(&mut shapes, 224.0);
    shapes.push(Shape::Text(
        TextRun::new("Allergies:", PAD, 240.0, 14.0)
            .weight(FontWeight::Medium)
            .color("#374151"),
    ));
    shapes.push(Shape::Text(
        TextRun::new(&fields.allergies, PAD, 260.0, 14.0)
            .color("#4b5563")
            .max_width(CARD_WIDTH - 2.0 * PAD),
    ));

    // Verifier
    divider(&mut shapes, 280.0);
    verifier_slot(
        &mut shapes,
        Rect::new(center - 48.0, 296.0, 96.0, 96.0),
        fields.verifier.as_ref(),
    );

    // Footer
    shapes.push(Shape::Rect {
        rect: Rect::new(0.0, 408.0, CARD_WIDTH, HEIGHT - 408.0),
        radius: 0.0,
        fill: Fill::Solid("#f3f4f6"),
    });
    shapes.push(Shape::Text(
        TextRun::new(school.return_notice(), center, 422.0, 12.0)
            .color("#4b5563")
            .align(TextAlign::Center),
    ));
    shapes.push(Shape::Text(
        TextRun::new(&school.address, center, 438.0, 12.0)
            .color("#4b5563")
            .align(TextAlign::Center)
            .max_width(CARD_WIDTH - 2.0 * PAD),
    ));

    shapes.push(Shape::Stroke {
        rect: Rect::new(1.0, 1.0, CARD_WIDTH - 2.0, HEIGHT - 2.0),
        radius: 8.0,
        color: BORDER,
        width: 2.0,
    });

    CardScene {
        template: Template::Classic,
        width: CARD_WIDTH,
        height: HEIGHT,
        corner_radius: 8.0,
        shapes,
    }
}

/// White plus sign centred on (`cx`, `cy`).
fn crest(shapes: &mut Vec<Shape>, cx: f64, cy: f64) {
    let arm = 22.4;
    let thickness = 3.2;
    for rect in [
        Rect::new(cx - thickness / 2.0, cy - arm / 2.0, thickness, arm),
        Rect::new(cx - arm / 2.0, cy - thickness / 2.0, arm, thickness),
    ] {
        shapes.push(Shape::Rect {
            rect,
            radius: thickness / 2.0,
            fill: Fill::Solid("#ffffff"),
        });
    }
}

fn divider(shapes: &mut Vec<Shape>, y: f64) {
    shapes.push(Shape::Line {
        from: (PAD, y),
        to: (CARD_WIDTH - PAD, y),
        color: "#e5e7eb",
        width: 1.0,
    });
}
