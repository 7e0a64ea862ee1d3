//! "Modern" template: gradient banner, elevated centred photo and white
//! detail panels.

use super::geometry::Rect;
use super::scene::{
    CARD_WIDTH, CardFields, CardScene, Fill, FontWeight, Shape, TextAlign, TextRun, photo_slot,
    verifier_slot,
};
use super::{BORDER, PRIMARY, SECONDARY, Template};
use crate::config::SchoolProfile;

const HEIGHT: f64 = 562.0;
const PAD: f64 = 16.0;
const PANEL_X: f64 = 28.0;
const LABEL: &str = "#6b7280";
const VALUE: &str = "#1f2937";

pub(crate) fn layout(fields: &CardFields, school: &SchoolProfile) -> CardScene {
    let mut shapes = Vec::new();
    let center = CARD_WIDTH / 2.0;
    let panel_width = CARD_WIDTH - 2.0 * PAD;

    shapes.push(Shape::Rect {
        rect: Rect::new(0.0, 0.0, CARD_WIDTH, HEIGHT),
        radius: 0.0,
        fill: Fill::HorizontalGradient {
            from: "#eff6ff",
            to: "#eef2ff",
        },
    });

    // Banner
    shapes.push(Shape::Rect {
        rect: Rect::new(0.0, 0.0, CARD_WIDTH, 112.0),
        radius: 0.0,
        fill: Fill::HorizontalGradient {
            from: SECONDARY,
            to: PRIMARY,
        },
    });
    shapes.push(Shape::Text(
        TextRun::new(&school.name, center, 36.0, 20.0)
            .weight(FontWeight::Bold)
            .color("#ffffff")
            .align(TextAlign::Center),
    ));
    shapes.push(Shape::Text(
        TextRun::new(
            format!("STUDENT ID \u{2022} {}", school.academic_year),
            center,
            58.0,
            12.0,
        )
        .color("#ffffff")
        .align(TextAlign::Center),
    ));

    // Elevated photo overlapping the banner
    let photo = Rect::new(center - 48.0, 64.0, 96.0, 128.0);
    shapes.push(Shape::Rect {
        rect: photo.inflate(2.0),
        radius: 6.0,
        fill: Fill::Solid("#ffffff"),
    });
    photo_slot(&mut shapes, photo, fields.photo.as_ref(), Fill::Solid("#ffffff"));

    shapes.push(Shape::Text(
        TextRun::new(&fields.name, center, 218.0, 20.0)
            .weight(FontWeight::Bold)
            .color(VALUE)
            .align(TextAlign::Center)
            .max_width(panel_width),
    ));
    shapes.push(Shape::Text(
        TextRun::new(format!("Class: {}", fields.class), center - 12.0, 244.0, 14.0)
            .color("#374151")
            .align(TextAlign::Right),
    ));
    shapes.push(Shape::Text(
        TextRun::new(format!("Roll No: {}", fields.roll_number), center + 12.0, 244.0, 14.0)
            .color("#374151")
            .align(TextAlign::Left)
            .max_width(center - PAD - 12.0),
    ));

    // Rack / route panel
    panel(&mut shapes, Rect::new(PAD, 262.0, panel_width, 60.0));
    let half = PAD + panel_width / 2.0;
    for (label, value, x) in [
        ("RACK NUMBER", &fields.rack_number, PANEL_X),
        ("BUS ROUTE", &fields.bus_route, half + 12.0),
    ] {
        shapes.push(Shape::Text(
            TextRun::new(label, x, 280.0, 11.0).color(LABEL),
        ));
        shapes.push(Shape::Text(
            TextRun::new(value, x, 302.0, 15.0)
                .weight(FontWeight::Medium)
                .color(VALUE)
                .max_width(panel_width / 2.0 - 24.0),
        ));
    }

    // Allergies panel
    panel(&mut shapes, Rect::new(PAD, 334.0, panel_width, 56.0));
    shapes.push(Shape::Text(
        TextRun::new("ALLERGIES", PANEL_X, 352.0, 11.0).color(LABEL),
    ));
    shapes.push(Shape::Text(
        TextRun::new(&fields.allergies, PANEL_X, 374.0, 14.0)
            .color(VALUE)
            .max_width(panel_width - 24.0),
    ));

    // Verifier
    let qr_panel = Rect::new(center - 56.0, 402.0, 112.0, 112.0);
    panel(&mut shapes, qr_panel);
    verifier_slot(&mut shapes, qr_panel.inflate(-8.0), fields.verifier.as_ref());

    // Footer
    shapes.push(Shape::Rect {
        rect: Rect::new(0.0, 530.0, CARD_WIDTH, HEIGHT - 530.0),
        radius: 0.0,
        fill: Fill::Solid("#1f2937"),
    });
    shapes.push(Shape::Text(
        TextRun::new(
            format!("{} \u{2022} {}", school.return_notice(), school.address),
            center,
            546.0,
            11.0,
        )
        .color("#d1d5db")
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
        template: Template::Modern,
        width: CARD_WIDTH,
        height: HEIGHT,
        corner_radius: 8.0,
        shapes,
    }
}

fn panel(shapes: &mut Vec<Shape>, rect: Rect) {
    shapes.push(Shape::Rect {
        rect,
        radius: 8.0,
        fill: Fill::Solid("#ffffff"),
    });
}
