use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{Allergy, BusRoute, ClassCode};
use super::photo::PhotoData;
use super::timestamp::iso_millis;

/// A validated form submission that has not been persisted yet.
///
/// Produced by [`crate::form::CardForm::submit`] and consumed by
/// [`crate::store::CardStore::save`], which is the only place identity and
/// creation time are attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    pub name: String,
    pub roll_number: String,
    pub class: ClassCode,
    pub allergies: Vec<Allergy>,
    pub photo: PhotoData,
    pub rack_number: String,
    pub bus_route: BusRoute,
}

/// One generated ID card, as persisted in local storage.
///
/// Field names serialize in camelCase so the stored JSON matches the layout
/// used by earlier versions of the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: String,
    pub name: String,
    pub roll_number: String,
    pub class: ClassCode,
    pub allergies: Vec<Allergy>,
    pub photo: PhotoData,
    pub rack_number: String,
    pub bus_route: BusRoute,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl NewCard {
    pub(crate) fn into_record(self, id: String, created_at: DateTime<Utc>) -> CardRecord {
        CardRecord {
            id,
            name: self.name,
            roll_number: self.roll_number,
            class: self.class,
            allergies: self.allergies,
            photo: self.photo,
            rack_number: self.rack_number,
            bus_route: self.bus_route,
            created_at,
        }
    }
}

impl CardRecord {
    pub fn has_allergy(&self, allergy: Allergy) -> bool {
        self.allergies.contains(&allergy)
    }

    /// Strips identity, giving back the submission this record was saved from.
    pub fn to_new_card(&self) -> NewCard {
        NewCard {
            name: self.name.clone(),
            roll_number: self.roll_number.clone(),
            class: self.class,
            allergies: self.allergies.clone(),
            photo: self.photo.clone(),
            rack_number: self.rack_number.clone(),
            bus_route: self.bus_route,
        }
    }
}
