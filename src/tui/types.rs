//! TUI type definitions for focus and actions.

use crate::types::ShowId;

/// Which panel receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Search bar, typing edits the active search text
    Search,
    /// Show selector in the sidebar
    Shows,
    /// Episode selector in the sidebar
    Episodes,
    /// Card list
    Cards,
}

/// Actions that can be returned from the TUI.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action, continue running
    None,
    /// Quit the application
    Quit,
    /// Replace the show search text
    SearchShows(String),
    /// Replace the episode search text
    SearchEpisodes(String),
    /// Select a show, or go back to all shows with `None`
    SelectShow(Option<ShowId>),
    /// Pin an episode by selector index
    SelectEpisode(Option<usize>),
    /// Leave the single-episode view
    Back,
    /// Re-run the failed fetch
    Retry,
    /// Close the error popup
    DismissError,
}
