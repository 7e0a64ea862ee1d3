//! End-to-end flows across the form, the store, the export guard and the
//! verifier, the way the frontend strings them together.

use common::config::{MAX_PHOTO_BYTES, STORAGE_KEY};
use common::export::ExportRequest;
use common::form::{CardForm, RequiredField, TextField};
use common::model::{Allergy, BusRoute, ClassCode, PhotoData, check_photo_size};
use common::render::{CardScene, Template};
use common::store::{CardStore, KeyValueStorage, MemoryStorage};
use common::verifier::verifier_payload;
use common::{CardRecord, FormError};

const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01";

/// Mirrors the photo handler: size check first, then conversion.
fn choose_photo(form: &mut CardForm, bytes: &[u8]) -> Result<(), FormError> {
    check_photo_size(bytes.len() as u64)?;
    form.accept_photo(PhotoData::from_image_bytes(bytes)?);
    Ok(())
}

fn ann_lee_form() -> CardForm {
    let mut form = CardForm::new();
    form.set_text(TextField::Name, "Ann Lee".to_string());
    form.set_text(TextField::RollNumber, "12".to_string());
    form.set_class("3A".parse().ok());
    form.set_text(TextField::RackNumber, "R5".to_string());
    form.set_bus_route("Route 2".parse().ok());
    form.set_allergy(Allergy::Peanuts, true);
    form
}

#[test]
fn valid_submission_is_stored_with_fresh_identity() {
    let store = CardStore::new(MemoryStorage::new());
    let mut form = ann_lee_form();
    choose_photo(&mut form, PNG_HEADER).unwrap();

    let before = store.list().len();
    let saved = store.save(form.submit().unwrap()).unwrap();
    let stored = store.list();

    assert_eq!(stored.len(), before + 1);
    assert_eq!(saved.class, ClassCode::Class3A);
    assert_eq!(saved.allergies, vec![Allergy::Peanuts]);
    assert_eq!(saved.bus_route, BusRoute::Route2);
    assert!(!saved.id.is_empty());
    assert_eq!(stored.iter().filter(|c| c.id == saved.id).count(), 1);
}

#[test]
fn ids_stay_unique_across_many_saves() {
    let store = CardStore::new(MemoryStorage::new());
    let mut form = ann_lee_form();
    choose_photo(&mut form, PNG_HEADER).unwrap();

    for _ in 0..25 {
        store.save(form.submit().unwrap()).unwrap();
    }
    let mut ids: Vec<_> = store.list().into_iter().map(|c| c.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 25);
}

#[test]
fn incomplete_submission_never_reaches_the_store() {
    let store = CardStore::new(MemoryStorage::new());
    let mut form = ann_lee_form();
    form.set_text(TextField::Name, String::new());

    let err = form.submit().unwrap_err();
    assert_eq!(
        err,
        FormError::MissingFields(vec![RequiredField::Name, RequiredField::Photo])
    );
    assert!(store.list().is_empty());
    assert!(store.storage().get_item(STORAGE_KEY).is_none());
}

#[test]
fn oversized_photo_is_rejected_before_anything_changes() {
    let store = CardStore::new(MemoryStorage::new());
    let mut form = ann_lee_form();
    let mut huge = PNG_HEADER.to_vec();
    huge.resize(3 * 1024 * 1024, 0);

    let err = choose_photo(&mut form, &huge).unwrap_err();
    assert!(matches!(err, FormError::PhotoTooLarge { limit: MAX_PHOTO_BYTES, .. }));
    assert!(form.preview().is_none());
    assert!(form.submit().is_err());
    assert_eq!(store.list().len(), 0);
}

#[test]
fn created_at_is_assigned_on_save() {
    let store = CardStore::new(MemoryStorage::new());
    let mut form = ann_lee_form();
    choose_photo(&mut form, PNG_HEADER).unwrap();

    let submitted = serde_json::to_value(form.submit().unwrap()).unwrap();
    assert!(submitted.get("createdAt").is_none());
    assert!(submitted.get("id").is_none());

    let saved = store.save(form.submit().unwrap()).unwrap();
    let stored = serde_json::to_value(&saved).unwrap();
    let created = stored["createdAt"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created).is_ok());
    assert!(created.ends_with('Z'));
}

#[test]
fn export_without_a_displayed_card_is_a_no_op() {
    assert!(ExportRequest::for_record(None).is_none());
}

#[test]
fn history_card_exports_under_its_own_name() {
    let store = CardStore::new(MemoryStorage::new());
    let mut form = ann_lee_form();
    choose_photo(&mut form, PNG_HEADER).unwrap();
    let saved = store.save(form.submit().unwrap()).unwrap();

    let picked = store.get_by_id(&saved.id).unwrap();
    let request = ExportRequest::for_record(Some(&picked)).unwrap();
    assert_eq!(request.file_name, "Ann_Lee_ID_Card.png");
    assert_eq!(request.record_id, saved.id);
}

#[test]
fn displayed_card_carries_its_full_record_in_the_verifier_payload() {
    let store = CardStore::new(MemoryStorage::new());
    let mut form = ann_lee_form();
    choose_photo(&mut form, PNG_HEADER).unwrap();
    let saved = store.save(form.submit().unwrap()).unwrap();

    let payload = verifier_payload(&saved).unwrap();
    let scanned: CardRecord = serde_json::from_str(&payload).unwrap();
    assert_eq!(scanned, saved);

    let scene = CardScene::build(Some(&saved), Template::Modern, &Default::default());
    let code = scene.verifier().unwrap();
    assert!(code.is_complete());
}
