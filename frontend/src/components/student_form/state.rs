use common::form::{CardForm, PhotoReads};

pub struct StudentFormComponent {
    pub form: CardForm,
    /// In-flight photo reads. Submitting while one is running reports the
    /// photo as missing.
    pub photo_reads: PhotoReads,
}

impl StudentFormComponent {
    pub fn new() -> Self {
        Self {
            form: CardForm::new(),
            photo_reads: PhotoReads::new(),
        }
    }
}
