/// Side effects requested by the event handler and performed by the main loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Open an outbound link in a separate, detached browser.
    OpenLink { url: String },
    Quit,
}
