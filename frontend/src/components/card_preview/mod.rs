//! Card preview: paints the displayed record onto a canvas in the selected
//! template and exports it as a PNG.
//!
//! Every paint is tagged with a generation number. A paint whose photo finishes
//! decoding after a newer paint started is dropped, so the canvas always ends
//! up showing the latest record and template. An export runs in the same task
//! as the paint it belongs to, after that paint has completed.

use yew::prelude::*;

mod export;
mod messages;
mod painter;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CardPreviewProps;
pub use state::CardPreviewComponent;

impl Component for CardPreviewComponent {
    type Message = Msg;
    type Properties = CardPreviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardPreviewComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        let export_requested = props.export_ticket != old_props.export_ticket;
        if export_requested || props.record != old_props.record {
            let export = export_requested
                .then(|| common::export::ExportRequest::for_record(props.record.as_deref()))
                .flatten();
            self.repaint(ctx, export);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.repaint(ctx, None);
        }
    }
}
