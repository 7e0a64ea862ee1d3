//! Preview state and the paint scheduler.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::config::{SchoolProfile, EXPORT_SCALE};
use common::export::{ExportRequest, PendingExport};
use common::render::{CardScene, Template};
use log::{error, warn};
use web_sys::HtmlCanvasElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::{export, painter};
use crate::helpers::js_error_message;

pub struct CardPreviewComponent {
    pub template: Template,
    pub school: SchoolProfile,
    pub canvas_ref: NodeRef,
    /// Generation of the most recently scheduled paint. Shared with the
    /// in-flight paint tasks so stale ones can bail out.
    pub generation: Rc<Cell<u64>>,
    /// Download owed by the latest paint, shared with the paint tasks.
    pub pending_export: Rc<RefCell<PendingExport>>,
    pub painting: bool,
}

impl CardPreviewComponent {
    pub fn new() -> Self {
        Self {
            template: Template::default(),
            school: SchoolProfile::default(),
            canvas_ref: NodeRef::default(),
            generation: Rc::new(Cell::new(0)),
            pending_export: Rc::new(RefCell::new(PendingExport::new())),
            painting: false,
        }
    }

    /// Schedules a paint of the current record in the current template,
    /// optionally followed by a PNG download of the finished canvas. A
    /// download still owed by a superseded paint of the same record moves to
    /// this paint.
    pub fn repaint(&mut self, ctx: &Context<Self>, requested: Option<ExportRequest>) {
        let record = ctx.props().record.as_deref();
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            let owed = self.pending_export.borrow_mut().take();
            if let Some(request) = requested.or(owed) {
                warn!("export of {} skipped: preview not mounted", request.file_name);
                export::report_failure();
            }
            return;
        };

        let dropped = self.pending_export.borrow_mut().schedule(requested, record);
        if let Some(request) = dropped {
            warn!("export of {} dropped: card changed before rendering finished", request.file_name);
            export::report_failure();
        }

        let scene = CardScene::build(record, self.template, &self.school);
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        self.painting = true;

        let latest = Rc::clone(&self.generation);
        let pending = Rc::clone(&self.pending_export);
        let link = ctx.link().clone();
        spawn_local(async move {
            let photo = match scene.photo() {
                Some(source) => match painter::load_photo(source).await {
                    Ok(image) => Some(image),
                    Err(err) => {
                        warn!("photo could not be decoded: {}", js_error_message(&err));
                        None
                    }
                },
                None => None,
            };

            // A newer paint owns the canvas and any pending download.
            if latest.get() != generation {
                return;
            }

            let owed = pending.borrow_mut().take();
            match painter::paint(&canvas, &scene, photo.as_ref(), EXPORT_SCALE) {
                Ok(()) => {
                    if let Some(request) = owed {
                        export::download_card(&canvas, &request);
                    }
                }
                Err(err) => {
                    error!("card render failed: {}", js_error_message(&err));
                    if owed.is_some() {
                        export::report_failure();
                    }
                }
            }
            link.send_message(Msg::RenderComplete(generation));
        });
    }
}
