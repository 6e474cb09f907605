use crate::projects::project::Project;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Project data source finished loading
    ProjectsLoaded(Vec<Project>),
    ProjectsFailed(String),

    /// Display refresh
    Frame,
}
