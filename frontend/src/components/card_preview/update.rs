use common::export::ExportRequest;
use log::debug;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CardPreviewComponent;

pub fn update(component: &mut CardPreviewComponent, ctx: &Context<CardPreviewComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SetTemplate(template) => {
            if component.template == template {
                return false;
            }
            component.template = template;
            component.repaint(ctx, None);
            true
        }
        Msg::Download => {
            let Some(request) = ExportRequest::for_record(ctx.props().record.as_deref()) else {
                debug!("download ignored: no card on display");
                return false;
            };
            component.repaint(ctx, Some(request));
            true
        }
        Msg::RenderComplete(generation) => {
            if generation != component.generation.get() {
                return false;
            }
            component.painting = false;
            true
        }
    }
}
