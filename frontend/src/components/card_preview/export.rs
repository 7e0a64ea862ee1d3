//! PNG download of the painted canvas.

use common::export::ExportRequest;
use log::{error, info};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlAnchorElement, HtmlCanvasElement};

use crate::helpers::{js_error_message, show_toast, ToastKind};

/// Encodes the canvas as PNG and hands it to the browser as a download named
/// after the student.
pub fn download_card(canvas: &HtmlCanvasElement, request: &ExportRequest) {
    match save_canvas(canvas, &request.file_name) {
        Ok(()) => {
            info!("exported card {} as {}", request.record_id, request.file_name);
            show_toast(
                "Success",
                "ID card has been downloaded successfully",
                ToastKind::Success,
            );
        }
        Err(err) => {
            error!("Error generating image: {}", js_error_message(&err));
            report_failure();
        }
    }
}

pub fn report_failure() {
    show_toast(
        "Download failed",
        "There was an error generating the image",
        ToastKind::Error,
    );
}

fn save_canvas(canvas: &HtmlCanvasElement, file_name: &str) -> Result<(), JsValue> {
    let data_url = canvas.to_data_url_with_type("image/png")?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let link = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    link.set_download(file_name);
    link.set_href(&data_url);
    link.click();
    Ok(())
}
