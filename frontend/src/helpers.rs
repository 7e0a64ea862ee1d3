//! Small DOM helpers shared by the components.
//!
//! - **User feedback**: temporary toast notifications for generation, download
//!   and deletion outcomes.
//! - **Error text**: turning a thrown `JsValue` into something loggable.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

/// Visual flavour of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn background(self) -> &'static str {
        match self {
            ToastKind::Success => "rgba(0, 0, 0, 0.8)",
            ToastKind::Error => "rgba(185, 28, 28, 0.92)",
        }
    }
}

/// Displays a toast with a bold `title` and a `description` line at the bottom
/// of the page. It removes itself after three seconds.
///
/// Both strings are inserted as text nodes, so student names never reach the
/// HTML parser.
pub fn show_toast(title: &str, description: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(toast) = build_toast(&document, title, description, kind) else {
        return;
    };

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}

fn build_toast(
    document: &Document,
    title: &str,
    description: &str,
    kind: ToastKind,
) -> Result<HtmlElement, JsValue> {
    let toast: HtmlElement = document.create_element("div")?.unchecked_into();
    toast.set_class_name("toast");
    toast.set_attribute("role", "status")?;

    let heading = document.create_element("strong")?;
    heading.set_text_content(Some(title));
    toast.append_child(&heading)?;

    let body = document.create_element("div")?;
    body.set_text_content(Some(description));
    toast.append_child(&body)?;

    let style = toast.style();
    style.set_property("position", "fixed")?;
    style.set_property("bottom", "20px")?;
    style.set_property("left", "50%")?;
    style.set_property("transform", "translateX(-50%)")?;
    style.set_property("background", kind.background())?;
    style.set_property("color", "#fff")?;
    style.set_property("padding", "10px 20px")?;
    style.set_property("border-radius", "4px")?;
    style.set_property("z-index", "10000")?;
    style.set_property("font-family", "Arial, sans-serif")?;
    Ok(toast)
}

/// Best-effort message for a thrown JavaScript value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
