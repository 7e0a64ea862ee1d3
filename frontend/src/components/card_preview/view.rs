use common::render::Template;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CardPreviewComponent;

pub fn view(component: &CardPreviewComponent, ctx: &Context<CardPreviewComponent>) -> Html {
    let link = ctx.link();
    let record = ctx.props().record.as_deref();

    let on_template = link.batch_callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value().parse::<Template>().ok().map(Msg::SetTemplate)
    });

    let label = match record {
        Some(card) => format!("ID card for {}", card.name),
        None => "Empty ID card".to_string(),
    };

    html! {
        <div class="card panel">
            <div class="panel-header">
                <h2>{ "ID Card Preview" }</h2>
                <div class="template-switcher">
                    <label for="template">{ "Template:" }</label>
                    <select id="template" onchange={on_template}>
                        { for Template::ALL.iter().map(|t| html! {
                            <option value={t.key()} selected={*t == component.template}>{ t.label() }</option>
                        }) }
                    </select>
                </div>
            </div>

            <div class={classes!("id-card-template", component.painting.then_some("painting"))}>
                <canvas ref={component.canvas_ref.clone()} class="id-card-canvas" role="img" aria-label={label} />
            </div>

            <div class="actions">
                <button
                    class="btn secondary"
                    disabled={record.is_none()}
                    onclick={link.callback(|_| Msg::Download)}
                >
                    { "Download as PNG" }
                </button>
            </div>
        </div>
    }
}
