//! In-progress student form state and its submit validation.
//!
//! `CardForm` is owned by the form component. Every mutation is a plain
//! replacement; nothing here performs I/O, so a submit either returns a
//! complete [`NewCard`] or an error without touching anything else.

use std::fmt;

use crate::error::FormError;
use crate::model::{Allergy, BusRoute, ClassCode, NewCard, PhotoData};

/// Free-text inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    RollNumber,
    RackNumber,
}

/// Inputs that must be filled before a card can be generated, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Name,
    RollNumber,
    Class,
    Photo,
    RackNumber,
    BusRoute,
}

impl RequiredField {
    pub const ALL: [RequiredField; 6] = [
        RequiredField::Name,
        RequiredField::RollNumber,
        RequiredField::Class,
        RequiredField::Photo,
        RequiredField::RackNumber,
        RequiredField::BusRoute,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RequiredField::Name => "Full Name",
            RequiredField::RollNumber => "Roll Number",
            RequiredField::Class => "Class & Division",
            RequiredField::Photo => "Photo",
            RequiredField::RackNumber => "Rack Number",
            RequiredField::BusRoute => "Bus Route Number",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardForm {
    pub name: String,
    pub roll_number: String,
    pub class: Option<ClassCode>,
    /// Selected allergies in the order they were ticked.
    pub allergies: Vec<Allergy>,
    pub rack_number: String,
    pub bus_route: Option<BusRoute>,
    photo: Option<PhotoData>,
    preview: Option<PhotoData>,
}

impl CardForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::RollNumber => &self.roll_number,
            TextField::RackNumber => &self.rack_number,
        }
    }

    pub fn set_text(&mut self, field: TextField, value: String) {
        match field {
            TextField::Name => self.name = value,
            TextField::RollNumber => self.roll_number = value,
            TextField::RackNumber => self.rack_number = value,
        }
    }

    pub fn set_class(&mut self, class: Option<ClassCode>) {
        self.class = class;
    }

    pub fn set_bus_route(&mut self, route: Option<BusRoute>) {
        self.bus_route = route;
    }

    /// Sets whether `allergy` is selected. Repeating a call has no further
    /// effect.
    pub fn set_allergy(&mut self, allergy: Allergy, checked: bool) {
        let present = self.allergies.contains(&allergy);
        if checked && !present {
            self.allergies.push(allergy);
        } else if !checked && present {
            self.allergies.retain(|a| *a != allergy);
        }
    }

    /// Flips the selection of `allergy`.
    pub fn toggle_allergy(&mut self, allergy: Allergy) {
        let checked = !self.allergies.contains(&allergy);
        self.set_allergy(allergy, checked);
    }

    pub fn is_allergy_selected(&self, allergy: Allergy) -> bool {
        self.allergies.contains(&allergy)
    }

    /// Stores a converted photo as both the live preview and the pending
    /// submission payload.
    pub fn accept_photo(&mut self, photo: PhotoData) {
        self.preview = Some(photo.clone());
        self.photo = Some(photo);
    }

    pub fn preview(&self) -> Option<&PhotoData> {
        self.preview.as_ref()
    }

    pub fn photo(&self) -> Option<&PhotoData> {
        self.photo.as_ref()
    }

    /// Required fields that are currently empty, in form order.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        RequiredField::ALL
            .into_iter()
            .filter(|field| match field {
                RequiredField::Name => is_blank(&self.name),
                RequiredField::RollNumber => is_blank(&self.roll_number),
                RequiredField::Class => self.class.is_none(),
                RequiredField::Photo => self.photo.as_ref().is_none_or(PhotoData::is_empty),
                RequiredField::RackNumber => is_blank(&self.rack_number),
                RequiredField::BusRoute => self.bus_route.is_none(),
            })
            .collect()
    }

    /// Validates the current state and packages it as a [`NewCard`].
    ///
    /// Works on whatever is held right now: a photo whose conversion has not
    /// finished yet counts as missing.
    pub fn submit(&self) -> Result<NewCard, FormError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let (Some(class), Some(bus_route), Some(photo)) =
            (self.class, self.bus_route, self.photo.clone())
        else {
            return Err(FormError::MissingFields(RequiredField::ALL.to_vec()));
        };

        Ok(NewCard {
            name: self.name.trim().to_string(),
            roll_number: self.roll_number.trim().to_string(),
            class,
            allergies: self.allergies.clone(),
            photo,
            rack_number: self.rack_number.trim().to_string(),
            bus_route,
        })
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Tracks asynchronous photo reads. Every read gets a ticket; the form counts
/// as loading until the most recently started read finishes, whatever order
/// the reads complete in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhotoReads {
    latest: u64,
    loading: bool,
}

impl PhotoReads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a read and returns its ticket.
    pub fn begin(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.loading = true;
        self.latest
    }

    /// Marks the read holding `ticket` as done. Returns `true` if it was the
    /// latest one.
    pub fn finish(&mut self, ticket: u64) -> bool {
        let latest = ticket == self.latest;
        if latest {
            self.loading = false;
        }
        latest
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::photo::tests::PNG_MAGIC;

    fn filled() -> CardForm {
        let mut form = CardForm::new();
        form.set_text(TextField::Name, "Ann Lee".to_string());
        form.set_text(TextField::RollNumber, "12".to_string());
        form.set_class(Some(ClassCode::Class3A));
        form.set_text(TextField::RackNumber, "R5".to_string());
        form.set_bus_route(Some(BusRoute::Route2));
        form.accept_photo(PhotoData::from_image_bytes(PNG_MAGIC).unwrap());
        form
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let err = CardForm::new().submit().unwrap_err();
        assert_eq!(err, FormError::MissingFields(RequiredField::ALL.to_vec()));
    }

    #[test]
    fn filled_form_submits_trimmed_values() {
        let mut form = filled();
        form.set_text(TextField::Name, "  Ann Lee ".to_string());
        form.set_allergy(Allergy::Peanuts, true);

        let card = form.submit().unwrap();
        assert_eq!(card.name, "Ann Lee");
        assert_eq!(card.class, ClassCode::Class3A);
        assert_eq!(card.allergies, vec![Allergy::Peanuts]);
        assert_eq!(card.bus_route, BusRoute::Route2);
    }

    #[test]
    fn whitespace_only_text_counts_as_missing() {
        let mut form = filled();
        form.set_text(TextField::RackNumber, "   ".to_string());
        assert_eq!(
            form.submit().unwrap_err(),
            FormError::MissingFields(vec![RequiredField::RackNumber])
        );
    }

    #[test]
    fn photo_is_required() {
        let mut form = filled();
        form.photo = None;
        assert_eq!(form.missing_fields(), vec![RequiredField::Photo]);
    }

    #[test]
    fn last_write_wins_for_text_fields() {
        let mut form = CardForm::new();
        form.set_text(TextField::RollNumber, "1".to_string());
        form.set_text(TextField::RollNumber, "2".to_string());
        assert_eq!(form.text(TextField::RollNumber), "2");
    }

    #[test]
    fn set_allergy_is_idempotent_and_keeps_order() {
        let mut form = CardForm::new();
        form.set_allergy(Allergy::Soy, true);
        form.set_allergy(Allergy::Dairy, true);
        form.set_allergy(Allergy::Soy, true);
        assert_eq!(form.allergies, vec![Allergy::Soy, Allergy::Dairy]);

        form.set_allergy(Allergy::Soy, false);
        form.set_allergy(Allergy::Soy, false);
        assert_eq!(form.allergies, vec![Allergy::Dairy]);
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let mut form = CardForm::new();
        form.set_allergy(Allergy::Gluten, true);
        let before = form.allergies.clone();

        form.toggle_allergy(Allergy::Eggs);
        assert!(form.is_allergy_selected(Allergy::Eggs));
        form.toggle_allergy(Allergy::Eggs);
        assert_eq!(form.allergies, before);

        form.toggle_allergy(Allergy::Gluten);
        form.toggle_allergy(Allergy::Gluten);
        assert_eq!(form.allergies, before);
    }

    #[test]
    fn accepted_photo_feeds_preview_and_payload() {
        let mut form = CardForm::new();
        let photo = PhotoData::from_uri("data:image/gif;base64,R0lG");
        form.accept_photo(photo.clone());
        assert_eq!(form.preview(), Some(&photo));
        assert_eq!(form.photo(), Some(&photo));
    }

    #[test]
    fn only_the_latest_photo_read_ends_loading() {
        let mut reads = PhotoReads::new();
        assert!(!reads.is_loading());

        let first = reads.begin();
        let second = reads.begin();
        assert!(!reads.finish(first));
        assert!(reads.is_loading());

        assert!(reads.finish(second));
        assert!(!reads.is_loading());
    }

    #[test]
    fn latest_read_finishing_first_is_not_reopened() {
        let mut reads = PhotoReads::new();
        let first = reads.begin();
        let second = reads.begin();

        assert!(reads.finish(second));
        assert!(!reads.finish(first));
        assert!(!reads.is_loading());
    }
}
