//! Canvas 2D backend for [`CardScene`].

use common::render::{cover_crop, CardScene, Fill, Rect, Shape, TextRun};
use common::verifier::VerifierCode;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use common::model::PhotoData;

/// Decodes the photo into an image element ready for `drawImage`.
pub async fn load_photo(photo: &PhotoData) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(photo.as_str());
    JsFuture::from(image.decode()).await?;
    Ok(image)
}

/// Paints `scene` at `scale` device pixels per logical pixel. The canvas keeps
/// its logical width in CSS so the preview does not grow with the scale.
pub fn paint(
    canvas: &HtmlCanvasElement,
    scene: &CardScene,
    photo: Option<&HtmlImageElement>,
    scale: f64,
) -> Result<(), JsValue> {
    let (width, height) = scene.raster_size(scale);
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
        .style()
        .set_property("width", &format!("{}px", scene.width))?;

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, scene.width, scene.height);

    ctx.save();
    rounded_rect(&ctx, Rect::new(0.0, 0.0, scene.width, scene.height), scene.corner_radius)?;
    ctx.clip();
    let result = scene
        .shapes
        .iter()
        .try_for_each(|shape| draw_shape(&ctx, shape, photo));
    ctx.restore();
    result
}

fn draw_shape(
    ctx: &CanvasRenderingContext2d,
    shape: &Shape,
    photo: Option<&HtmlImageElement>,
) -> Result<(), JsValue> {
    match shape {
        Shape::Rect { rect, radius, fill } => {
            set_fill(ctx, *rect, *fill)?;
            if *radius > 0.0 {
                rounded_rect(ctx, *rect, *radius)?;
                ctx.fill();
            } else {
                ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
            }
        }
        Shape::Stroke {
            rect,
            radius,
            color,
            width,
        } => {
            ctx.set_stroke_style_str(color);
            ctx.set_line_width(*width);
            rounded_rect(ctx, *rect, *radius)?;
            ctx.stroke();
        }
        Shape::Line {
            from,
            to,
            color,
            width,
        } => {
            ctx.set_stroke_style_str(color);
            ctx.set_line_width(*width);
            ctx.begin_path();
            ctx.move_to(from.0, from.1);
            ctx.line_to(to.0, to.1);
            ctx.stroke();
        }
        Shape::Text(run) => draw_text(ctx, run)?,
        Shape::Photo { rect, .. } => match photo {
            Some(image) => {
                let crop = cover_crop(
                    f64::from(image.natural_width()),
                    f64::from(image.natural_height()),
                    rect.w,
                    rect.h,
                );
                ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                    image, crop.x, crop.y, crop.w, crop.h, rect.x, rect.y, rect.w, rect.h,
                )?;
            }
            // Undecodable photo: keep the slot visible.
            None => {
                ctx.set_fill_style_str("#e5e7eb");
                ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
            }
        },
        Shape::Verifier { rect, code } => draw_verifier(ctx, *rect, code),
    }
    Ok(())
}

fn set_fill(ctx: &CanvasRenderingContext2d, rect: Rect, fill: Fill) -> Result<(), JsValue> {
    match fill {
        Fill::Solid(color) => ctx.set_fill_style_str(color),
        Fill::HorizontalGradient { from, to } => {
            let gradient = ctx.create_linear_gradient(rect.x, rect.y, rect.x + rect.w, rect.y);
            gradient.add_color_stop(0.0, from)?;
            gradient.add_color_stop(1.0, to)?;
            ctx.set_fill_style_canvas_gradient(&gradient);
        }
    }
    Ok(())
}

fn draw_text(ctx: &CanvasRenderingContext2d, run: &TextRun) -> Result<(), JsValue> {
    ctx.set_font(&run.css_font());
    ctx.set_fill_style_str(run.color);
    ctx.set_text_align(run.align.css());
    ctx.set_text_baseline("middle");
    match run.max_width {
        Some(max_width) => ctx.fill_text_with_max_width(&run.text, run.x, run.y, max_width),
        None => ctx.fill_text(&run.text, run.x, run.y),
    }
}

/// White quiet zone plus one square per dark module.
fn draw_verifier(ctx: &CanvasRenderingContext2d, rect: Rect, code: &VerifierCode) {
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);

    let modules = code.width() + 8;
    let module = rect.w.min(rect.h) / modules as f64;
    let origin_x = rect.x + 4.0 * module;
    let origin_y = rect.y + 4.0 * module;

    ctx.set_fill_style_str("#000000");
    for y in 0..code.width() {
        for x in 0..code.width() {
            if code.is_dark(x, y) {
                // Slight overlap hides anti-aliasing seams between modules.
                ctx.fill_rect(
                    origin_x + x as f64 * module,
                    origin_y + y as f64 * module,
                    module + 0.1,
                    module + 0.1,
                );
            }
        }
    }
}

/// Starts a new path tracing `rect` with rounded corners.
fn rounded_rect(ctx: &CanvasRenderingContext2d, rect: Rect, radius: f64) -> Result<(), JsValue> {
    ctx.begin_path();
    if radius <= 0.0 {
        ctx.rect(rect.x, rect.y, rect.w, rect.h);
        return Ok(());
    }
    let r = radius.min(rect.w / 2.0).min(rect.h / 2.0);
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.x + rect.w, rect.y + rect.h);
    ctx.move_to(left + r, top);
    ctx.arc_to(right, top, right, bottom, r)?;
    ctx.arc_to(right, bottom, left, bottom, r)?;
    ctx.arc_to(left, bottom, left, top, r)?;
    ctx.arc_to(left, top, right, top, r)?;
    ctx.close_path();
    Ok(())
}
