//! Selection and search state driving what gets rendered.

use crate::types::ShowId;

/// Which view the browser is in, derived from the selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No show selected, the show cards are listed
    ShowsGallery,
    /// A show is selected and its episodes are listed
    EpisodeList,
    /// A single episode of the selected show is pinned
    SingleEpisode,
}

/// Operation to re-run when the user asks for a retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    LoadShows,
    LoadEpisodes(ShowId),
}

/// Network status shown alongside the current view.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Ready,
    Loading(String),
    Failed { message: String, retry: Pending },
}

impl Status {
    pub fn is_failed(&self) -> bool {
        matches!(self, Status::Failed { .. })
    }
}

/// Current selections and search texts.
///
/// An episode can only be pinned while a show is selected, and dropping the
/// show selection drops the pinned episode with it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    selected_show: Option<ShowId>,
    selected_episode: Option<u64>,
    show_search: String,
    episode_search: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        match (self.selected_show, self.selected_episode) {
            (None, _) => Mode::ShowsGallery,
            (Some(_), None) => Mode::EpisodeList,
            (Some(_), Some(_)) => Mode::SingleEpisode,
        }
    }

    pub fn selected_show(&self) -> Option<ShowId> {
        self.selected_show
    }

    /// Id of the pinned episode.
    pub fn selected_episode(&self) -> Option<u64> {
        self.selected_episode
    }

    pub fn show_search(&self) -> &str {
        &self.show_search
    }

    pub fn episode_search(&self) -> &str {
        &self.episode_search
    }

    pub(crate) fn set_show_search(&mut self, text: &str) {
        self.show_search = text.to_string();
    }

    pub(crate) fn set_episode_search(&mut self, text: &str) {
        self.episode_search = text.to_string();
    }

    /// Switch to the episode list of `show_id` with a fresh episode search.
    pub(crate) fn enter_show(&mut self, show_id: ShowId) {
        self.selected_show = Some(show_id);
        self.selected_episode = None;
        self.episode_search.clear();
    }

    /// Back to the gallery. The show search text is kept.
    pub(crate) fn clear_show(&mut self) {
        self.selected_show = None;
        self.selected_episode = None;
    }

    /// Pin an episode; ignored while no show is selected.
    pub(crate) fn pin_episode(&mut self, episode_id: u64) -> bool {
        if self.selected_show.is_none() {
            return false;
        }
        self.selected_episode = Some(episode_id);
        true
    }

    /// Drop the pinned episode, returning whether one was pinned.
    pub(crate) fn unpin_episode(&mut self) -> bool {
        self.selected_episode.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_is_gallery() {
        let state = ViewState::new();
        assert_eq!(state.mode(), Mode::ShowsGallery);
        assert!(state.selected_show().is_none());
        assert_eq!(state.show_search(), "");
        assert_eq!(state.episode_search(), "");
    }

    #[test]
    fn test_enter_show_resets_episode_search() {
        let mut state = ViewState::new();
        state.set_episode_search("stark");
        state.set_show_search("thrones");
        state.enter_show(82);

        assert_eq!(state.mode(), Mode::EpisodeList);
        assert_eq!(state.episode_search(), "");
        assert_eq!(state.show_search(), "thrones");
    }

    #[test]
    fn test_pin_requires_show() {
        let mut state = ViewState::new();
        assert!(!state.pin_episode(4952));
        assert_eq!(state.mode(), Mode::ShowsGallery);

        state.enter_show(82);
        assert!(state.pin_episode(4952));
        assert_eq!(state.mode(), Mode::SingleEpisode);
        assert_eq!(state.selected_episode(), Some(4952));
    }

    #[test]
    fn test_clear_show_clears_episode() {
        let mut state = ViewState::new();
        state.enter_show(82);
        state.pin_episode(4952);
        state.clear_show();

        assert_eq!(state.mode(), Mode::ShowsGallery);
        assert!(state.selected_episode().is_none());
    }

    #[test]
    fn test_unpin_keeps_search() {
        let mut state = ViewState::new();
        state.enter_show(82);
        state.set_episode_search("king");
        state.pin_episode(4953);

        assert!(state.unpin_episode());
        assert!(!state.unpin_episode());
        assert_eq!(state.mode(), Mode::EpisodeList);
        assert_eq!(state.episode_search(), "king");
    }

    #[test]
    fn test_status_failed() {
        assert!(!Status::Ready.is_failed());
        assert!(!Status::Loading("Loading shows...".to_string()).is_failed());
        assert!(
            Status::Failed {
                message: "HTTP error! status: 500".to_string(),
                retry: Pending::LoadShows,
            }
            .is_failed()
        );
    }
}
