pub mod card_preview;
pub mod saved_cards;
pub mod student_form;
