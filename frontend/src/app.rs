//! Root component. Owns the record on display and the card store, and routes
//! events between the form, the preview and the saved-cards list.

use std::rc::Rc;

use common::{CardRecord, NewCard};
use log::{error, info};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::{html, Component, Context, Html};

use crate::components::card_preview::CardPreviewComponent;
use crate::components::saved_cards::SavedCardsComponent;
use crate::components::student_form::StudentFormComponent;
use crate::helpers::{show_toast, ToastKind};
use crate::storage::{card_store, BrowserCardStore};

const PREVIEW_ID: &str = "id-card-preview";

pub enum Msg {
    /// Validated form data, ready to be persisted and displayed.
    Submitted(NewCard),
    View(CardRecord),
    Download(CardRecord),
    Delete(CardRecord),
}

pub struct App {
    store: BrowserCardStore,
    current: Option<Rc<CardRecord>>,
    /// Bumped for every export request so the preview can tell repeated
    /// downloads of the same record apart.
    export_ticket: u32,
    /// Bumped after every write so the saved-cards list reloads.
    history_revision: u32,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            store: card_store(),
            current: None,
            export_ticket: 0,
            history_revision: 0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submitted(card) => match self.store.save(card) {
                Ok(record) => {
                    info!("generated card {} for {}", record.id, record.name);
                    self.current = Some(Rc::new(record));
                    self.history_revision = self.history_revision.wrapping_add(1);
                    show_toast(
                        "ID Card Generated",
                        "Student ID card has been generated successfully",
                        ToastKind::Success,
                    );
                    true
                }
                Err(err) => {
                    error!("could not save card: {err}");
                    show_toast("Could not save card", &err.to_string(), ToastKind::Error);
                    false
                }
            },
            Msg::View(record) => {
                self.current = Some(Rc::new(record));
                scroll_to_preview();
                true
            }
            Msg::Download(record) => {
                self.current = Some(Rc::new(record));
                self.export_ticket = self.export_ticket.wrapping_add(1);
                true
            }
            Msg::Delete(record) => match self.store.delete_by_id(&record.id) {
                Ok(_) => {
                    if self.current.as_ref().is_some_and(|c| c.id == record.id) {
                        self.current = None;
                    }
                    self.history_revision = self.history_revision.wrapping_add(1);
                    show_toast(
                        "Card deleted",
                        &format!("The card for {} was removed", record.name),
                        ToastKind::Success,
                    );
                    true
                }
                Err(err) => {
                    error!("could not delete card {}: {err}", record.id);
                    show_toast("Could not delete card", &err.to_string(), ToastKind::Error);
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="container">
                <header class="page-header">
                    <h1>{ "Unity Student ID Generator" }</h1>
                    <p>{ "Create, preview and download student identification cards." }</p>
                </header>
                <main class="layout">
                    <section class="column">
                        <StudentFormComponent on_submit={link.callback(Msg::Submitted)} />
                    </section>
                    <section class="column">
                        <div id={PREVIEW_ID}>
                            <CardPreviewComponent
                                record={self.current.clone()}
                                export_ticket={self.export_ticket}
                            />
                        </div>
                        <SavedCardsComponent
                            revision={self.history_revision}
                            on_view={link.callback(Msg::View)}
                            on_download={link.callback(Msg::Download)}
                            on_delete={link.callback(Msg::Delete)}
                        />
                    </section>
                </main>
            </div>
        }
    }
}

fn scroll_to_preview() {
    let Some(preview) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(PREVIEW_ID))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    preview.scroll_into_view_with_scroll_into_view_options(&options);
}
