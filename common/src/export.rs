use std::sync::LazyLock;

use regex::Regex;

use crate::config::EXPORT_FILE_SUFFIX;
use crate::model::CardRecord;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Download name for a card: whitespace runs become `_`, then `_ID_Card.png`.
pub fn export_file_name(student_name: &str) -> String {
    format!(
        "{}{}",
        WHITESPACE_RUN.replace_all(student_name, "_"),
        EXPORT_FILE_SUFFIX
    )
}

/// A download the preview is allowed to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub record_id: String,
    pub file_name: String,
}

impl ExportRequest {
    /// `None` when nothing is displayed: exporting is then a no-op rather than
    /// an error.
    pub fn for_record(record: Option<&CardRecord>) -> Option<Self> {
        record.map(|record| Self {
            record_id: record.id.clone(),
            file_name: export_file_name(&record.name),
        })
    }
}

/// Download waiting for its paint to finish.
///
/// A paint can be superseded before it completes (template switch, photo
/// still decoding). The newer paint inherits the request as long as it shows
/// the same record; otherwise the request is handed back as dropped.
#[derive(Debug, Default)]
pub struct PendingExport {
    request: Option<ExportRequest>,
}

impl PendingExport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new paint of `displayed`, optionally with its own
    /// `requested` download. Returns the earlier request if it can no longer
    /// be honoured.
    pub fn schedule(
        &mut self,
        requested: Option<ExportRequest>,
        displayed: Option<&CardRecord>,
    ) -> Option<ExportRequest> {
        let carried = self.request.take();
        let (keep, dropped) = match (requested, carried) {
            (Some(new), Some(old)) if old.record_id != new.record_id => (Some(new), Some(old)),
            (Some(new), _) => (Some(new), None),
            (None, Some(old)) if displayed.is_some_and(|card| card.id == old.record_id) => {
                (Some(old), None)
            }
            (None, old) => (None, old),
        };
        self.request = keep;
        dropped
    }

    /// The download owed by the paint that just completed.
    pub fn take(&mut self) -> Option<ExportRequest> {
        self.request.take()
    }
}
