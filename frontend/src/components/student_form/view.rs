//! Markup for the student form.

use common::form::TextField;
use common::model::{Allergy, BusRoute, ClassCode};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::messages::Msg;
use super::state::StudentFormComponent;

pub fn view(component: &StudentFormComponent, ctx: &Context<StudentFormComponent>) -> Html {
    let link = ctx.link();
    let form = &component.form;

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    let on_class = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetClass(select.value().parse().ok())
    });

    let on_route = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetBusRoute(select.value().parse().ok())
    });

    let on_photo = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input
            .files()
            .and_then(|files| files.get(0))
            .map(Msg::PhotoChosen)
    });

    let class_value = form.class.map(ClassCode::as_str).unwrap_or_default();
    let route_value = form.bus_route.map(BusRoute::as_str).unwrap_or_default();

    html! {
        <div class="card panel">
            <h2>{ "Student Information" }</h2>
            <form class="student-form" {onsubmit} novalidate={true}>
                { text_input(ctx, TextField::Name, "name", "Full Name", "Enter student's full name", &form.name) }

                <div class="grid-2">
                    { text_input(ctx, TextField::RollNumber, "rollNumber", "Roll Number", "e.g. 12", &form.roll_number) }
                    <div class="field">
                        <label for="class">{ "Class & Division" }</label>
                        <select id="class" onchange={on_class}>
                            <option value="" selected={class_value.is_empty()}>{ "Select class" }</option>
                            { for ClassCode::ALL.iter().map(|class| html! {
                                <option value={class.as_str()} selected={class_value == class.as_str()}>
                                    { class.as_str() }
                                </option>
                            }) }
                        </select>
                    </div>
                </div>

                <div class="field">
                    <label>{ "Allergies" }</label>
                    <div class="allergy-grid">
                        { for Allergy::ALL.iter().map(|&allergy| allergy_checkbox(ctx, allergy, form.is_allergy_selected(allergy))) }
                    </div>
                </div>

                <div class="field">
                    <label for="photo">{ "Photo" }</label>
                    <div class="photo-picker">
                        <div class="photo-preview">
                            {
                                match form.preview() {
                                    Some(photo) => html! { <img src={photo.as_str().to_string()} alt="Student photo preview" /> },
                                    None if component.photo_reads.is_loading() => html! { <span>{ "Loading..." }</span> },
                                    None => html! { <span>{ "No photo" }</span> },
                                }
                            }
                        </div>
                        <input id="photo" type="file" accept="image/*" onchange={on_photo} />
                    </div>
                    <p class="hint">{ "Maximum file size: 2MB" }</p>
                </div>

                <div class="grid-2">
                    { text_input(ctx, TextField::RackNumber, "rackNumber", "Rack Number", "e.g. R5", &form.rack_number) }
                    <div class="field">
                        <label for="busRoute">{ "Bus Route Number" }</label>
                        <select id="busRoute" onchange={on_route}>
                            <option value="" selected={route_value.is_empty()}>{ "Select route" }</option>
                            { for BusRoute::ALL.iter().map(|route| html! {
                                <option value={route.as_str()} selected={route_value == route.as_str()}>
                                    { route.option_label() }
                                </option>
                            }) }
                        </select>
                    </div>
                </div>

                <button type="submit" class="btn primary">{ "Generate ID Card" }</button>
            </form>
        </div>
    }
}

fn text_input(
    ctx: &Context<StudentFormComponent>,
    field: TextField,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: &str,
) -> Html {
    let oninput = ctx.link().callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetText(field, input.value())
    });

    html! {
        <div class="field">
            <label for={id}>{ label }</label>
            <input id={id} type="text" {placeholder} value={value.to_string()} {oninput} />
        </div>
    }
}

fn allergy_checkbox(ctx: &Context<StudentFormComponent>, allergy: Allergy, checked: bool) -> Html {
    let onchange = ctx.link().callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetAllergy(allergy, input.checked())
    });
    let id = format!("allergy-{}", allergy.key());

    html! {
        <label class="checkbox" for={id.clone()}>
            <input {id} type="checkbox" {checked} {onchange} />
            { allergy.as_str() }
        </label>
    }
}
