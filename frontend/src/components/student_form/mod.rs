//! Student details form: text inputs, class and route selectors, allergy
//! checkboxes and the photo picker with its preview.
//!
//! The component keeps a [`common::form::CardForm`] as its state and hands a
//! validated [`common::NewCard`] to the parent through `on_submit`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::StudentFormProps;
pub use state::StudentFormComponent;

impl Component for StudentFormComponent {
    type Message = Msg;
    type Properties = StudentFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StudentFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
