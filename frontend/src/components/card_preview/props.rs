use std::rc::Rc;

use common::CardRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CardPreviewProps {
    /// Record to display; `None` paints the placeholder card.
    #[prop_or_default]
    pub record: Option<Rc<CardRecord>>,

    /// Each change asks for the card to be repainted and then downloaded.
    #[prop_or_default]
    pub export_ticket: u32,
}
