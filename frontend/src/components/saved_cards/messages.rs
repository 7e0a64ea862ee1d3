pub enum Msg {
    /// Re-read the saved cards from storage.
    Reload,
}
