//! Saved cards list. Reads the store on mount, whenever the window regains
//! focus and whenever the parent bumps `revision`.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod view;

pub use messages::Msg;
pub use props::SavedCardsProps;
pub use state::SavedCardsComponent;

impl Component for SavedCardsComponent {
    type Message = Msg;
    type Properties = SavedCardsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SavedCardsComponent::new()
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Reload => self.reload(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().revision != old_props.revision {
            self.reload();
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let link = ctx.link().clone();
        let listener = Closure::<dyn Fn()>::new(move || link.send_message(Msg::Reload));
        match window.add_event_listener_with_callback("focus", listener.as_ref().unchecked_ref()) {
            Ok(()) => self.focus_listener = Some(listener),
            Err(_) => warn!("could not watch window focus; saved cards refresh on changes only"),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(listener)) = (web_sys::window(), self.focus_listener.take()) {
            window
                .remove_event_listener_with_callback("focus", listener.as_ref().unchecked_ref())
                .ok();
        }
    }
}
