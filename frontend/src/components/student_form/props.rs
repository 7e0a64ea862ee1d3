use common::NewCard;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StudentFormProps {
    /// Receives the trimmed, validated form contents on a successful submit.
    pub on_submit: Callback<NewCard>,
}
