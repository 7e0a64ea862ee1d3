use common::render::Template;

pub enum Msg {
    SetTemplate(Template),
    /// "Download as PNG" on the preview itself.
    Download,
    /// The paint tagged with this generation reached the canvas.
    RenderComplete(u64),
}
