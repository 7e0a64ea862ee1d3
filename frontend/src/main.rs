use crate::app::App;

mod app;
mod components;
mod helpers;
mod logging;
mod storage;

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
