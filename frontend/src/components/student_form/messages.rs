use common::form::TextField;
use common::model::{Allergy, BusRoute, ClassCode, PhotoData};
use common::FormError;

pub enum Msg {
    SetText(TextField, String),
    SetClass(Option<ClassCode>),
    SetBusRoute(Option<BusRoute>),
    SetAllergy(Allergy, bool),
    /// A file was picked; it still has to pass the size check and be read.
    PhotoChosen(web_sys::File),
    /// Completion of the read with this ticket.
    PhotoReady(u64, PhotoData),
    PhotoFailed(u64, FormError),
    Submit,
}
