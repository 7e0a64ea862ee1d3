use chrono::Local;
use common::model::timestamp::format_card_date;
use common::CardRecord;
use yew::prelude::*;

use super::state::SavedCardsComponent;

pub fn view(component: &SavedCardsComponent, ctx: &Context<SavedCardsComponent>) -> Html {
    html! {
        <div class="card panel">
            <h2>{ "Saved ID Cards" }</h2>
            if component.cards.is_empty() {
                <p class="empty">{ "No saved cards yet. Generate your first ID card above." }</p>
            } else {
                <ul class="saved-cards">
                    { for component.cards.iter().map(|card| saved_card(ctx, card)) }
                </ul>
            }
        </div>
    }
}

fn saved_card(ctx: &Context<SavedCardsComponent>, card: &CardRecord) -> Html {
    let props = ctx.props();

    let on_view = emit_card(&props.on_view, card);
    let on_download = emit_card(&props.on_download, card);
    let on_delete = emit_card(&props.on_delete, card);

    html! {
        <li key={card.id.clone()} class="saved-card">
            <div class="saved-card-info">
                <span class="saved-card-name">{ card.name.clone() }</span>
                <span class="saved-card-meta">
                    { format!("Class {} \u{2022} Roll No: {}", card.class, card.roll_number) }
                </span>
                <span class="saved-card-date">{ format_card_date(&card.created_at, &Local) }</span>
            </div>
            <div class="saved-card-actions">
                <button class="btn ghost" onclick={on_view}>{ "View" }</button>
                <button class="btn ghost" onclick={on_download}>{ "Download" }</button>
                <button class="btn ghost danger" onclick={on_delete}>{ "Delete" }</button>
            </div>
        </li>
    }
}

fn emit_card(callback: &Callback<CardRecord>, card: &CardRecord) -> Callback<MouseEvent> {
    let callback = callback.clone();
    let card = card.clone();
    Callback::from(move |_: MouseEvent| callback.emit(card.clone()))
}
