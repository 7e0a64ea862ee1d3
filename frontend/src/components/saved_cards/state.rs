use common::CardRecord;
use log::debug;
use wasm_bindgen::closure::Closure;

use crate::storage::{card_store, BrowserCardStore};

pub struct SavedCardsComponent {
    pub store: BrowserCardStore,
    /// Snapshot of the store, oldest first.
    pub cards: Vec<CardRecord>,
    pub focus_listener: Option<Closure<dyn Fn()>>,
}

impl SavedCardsComponent {
    pub fn new() -> Self {
        let store = card_store();
        let cards = store.list();
        Self {
            store,
            cards,
            focus_listener: None,
        }
    }

    /// Returns whether the list changed.
    pub fn reload(&mut self) -> bool {
        let cards = self.store.list();
        if cards == self.cards {
            return false;
        }
        debug!("saved cards reloaded: {} entries", cards.len());
        self.cards = cards;
        true
    }
}
