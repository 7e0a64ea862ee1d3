use common::CardRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SavedCardsProps {
    /// Changes whenever the parent wrote to the store.
    #[prop_or_default]
    pub revision: u32,
    pub on_view: Callback<CardRecord>,
    pub on_download: Callback<CardRecord>,
    pub on_delete: Callback<CardRecord>,
}
