//! Message handling for the student form.

use common::model::{check_photo_size, PhotoData};
use common::FormError;
use gloo_file::futures::read_as_bytes;
use log::{debug, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::StudentFormComponent;
use crate::helpers::{show_toast, ToastKind};

pub fn update(component: &mut StudentFormComponent, ctx: &Context<StudentFormComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SetText(field, value) => {
            component.form.set_text(field, value);
            true
        }
        Msg::SetClass(class) => {
            component.form.set_class(class);
            true
        }
        Msg::SetBusRoute(route) => {
            component.form.set_bus_route(route);
            true
        }
        Msg::SetAllergy(allergy, checked) => {
            component.form.set_allergy(allergy, checked);
            true
        }
        Msg::PhotoChosen(file) => {
            if let Err(err) = check_photo_size(file.size() as u64) {
                warn!("rejected photo {}: {err}", file.name());
                show_toast("File too large", "Photo must be less than 2MB", ToastKind::Error);
                return false;
            }

            let ticket = component.photo_reads.begin();
            let link = ctx.link().clone();
            let file = gloo_file::File::from(file);
            spawn_local(async move {
                let msg = match read_as_bytes(&file).await {
                    Ok(bytes) => match PhotoData::from_image_bytes(&bytes) {
                        Ok(photo) => Msg::PhotoReady(ticket, photo),
                        Err(err) => Msg::PhotoFailed(ticket, err),
                    },
                    Err(err) => Msg::PhotoFailed(ticket, FormError::PhotoRead(err.to_string())),
                };
                link.send_message(msg);
            });
            true
        }
        Msg::PhotoReady(ticket, photo) => {
            debug!("photo accepted ({})", photo.mime_type().unwrap_or("unknown type"));
            component.photo_reads.finish(ticket);
            // Last resolved wins, even if an older read lands after a newer one.
            component.form.accept_photo(photo);
            true
        }
        Msg::PhotoFailed(ticket, err) => {
            warn!("photo could not be used: {err}");
            component.photo_reads.finish(ticket);
            show_toast("Invalid photo", &err.to_string(), ToastKind::Error);
            true
        }
        Msg::Submit => {
            match component.form.submit() {
                Ok(card) => ctx.props().on_submit.emit(card),
                Err(err) => {
                    debug!("submit rejected: {err}");
                    show_toast(
                        "Missing required fields",
                        "Please fill all required fields",
                        ToastKind::Error,
                    );
                }
            }
            false
        }
    }
}
