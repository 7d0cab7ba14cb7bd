//! Terminal-local UI state and key handling.
//!
//! Only cursor positions and focus live here. Search texts and selections
//! belong to the browser; keys that change them come back as [`Action`]s.

use crate::state::{Mode, Status};
use crate::view::ViewModel;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

use super::types::{Action, Focus};

/// Cursor and focus state of the terminal UI.
pub struct UiState {
    /// Panel receiving key presses
    pub focus: Focus,
    /// Cursor in the show selector
    pub show_list_state: ListState,
    /// Cursor in the episode selector
    pub episode_list_state: ListState,
    /// Cursor in the card list
    pub card_list_state: ListState,
    /// Whether help modal is shown
    pub show_help: bool,
    /// Mode of the last rendered view, to reset cursors on transitions
    last_mode: Option<Mode>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Cards,
            show_list_state: ListState::default().with_selected(Some(0)),
            episode_list_state: ListState::default().with_selected(Some(0)),
            card_list_state: ListState::default().with_selected(Some(0)),
            show_help: false,
            last_mode: None,
        }
    }

    /// Bring cursors in line with a freshly rendered view.
    pub fn sync(&mut self, view: &ViewModel) {
        if self.last_mode != Some(view.mode) {
            self.card_list_state.select(Some(0));
            if view.mode != Mode::SingleEpisode {
                self.episode_list_state.select(Some(0));
            }
            if view.mode == Mode::ShowsGallery && self.focus == Focus::Episodes {
                self.focus = Focus::Shows;
            }
            self.last_mode = Some(view.mode);
        }

        let show_idx = view
            .show_options
            .iter()
            .position(|opt| opt.value.is_some() && opt.value == view.selected_show)
            .unwrap_or(0);
        self.show_list_state.select(Some(show_idx));

        clamp(&mut self.card_list_state, view.cards.len());
        clamp(&mut self.episode_list_state, view.episode_options.len());
    }

    /// Handle keyboard input and return an action.
    pub fn handle_input(&mut self, key: KeyEvent, view: &ViewModel) -> Action {
        // Global quit with Ctrl+C or Ctrl+Q
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => return Action::Quit,
                _ => {}
            }
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return Action::None;
        }

        match view.status {
            Status::Failed { .. } => return handle_error_input(key),
            Status::Loading(_) => {
                return match key.code {
                    KeyCode::Char('q') => Action::Quit,
                    _ => Action::None,
                };
            }
            Status::Ready => {}
        }

        if self.focus == Focus::Search {
            return self.handle_search_input(key, view);
        }

        match key.code {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('?') => {
                self.show_help = true;
                return Action::None;
            }
            KeyCode::Char('/') => {
                self.focus = Focus::Search;
                return Action::None;
            }
            KeyCode::Tab => {
                self.focus = self.next_focus(view.mode);
                return Action::None;
            }
            KeyCode::Esc | KeyCode::Backspace => {
                return match view.mode {
                    Mode::SingleEpisode => Action::Back,
                    Mode::EpisodeList => Action::SelectShow(None),
                    Mode::ShowsGallery => Action::None,
                };
            }
            _ => {}
        }

        match self.focus {
            Focus::Shows => self.handle_show_selector_input(key, view),
            Focus::Episodes => self.handle_episode_selector_input(key, view),
            Focus::Cards => self.handle_card_input(key, view),
            Focus::Search => Action::None,
        }
    }

    fn next_focus(&self, mode: Mode) -> Focus {
        match (self.focus, mode) {
            (Focus::Search, _) => Focus::Shows,
            (Focus::Shows, Mode::ShowsGallery) => Focus::Cards,
            (Focus::Shows, _) => Focus::Episodes,
            (Focus::Episodes, _) => Focus::Cards,
            (Focus::Cards, _) => Focus::Search,
        }
    }

    fn handle_search_input(&mut self, key: KeyEvent, view: &ViewModel) -> Action {
        let mut text = view.active_search().to_string();
        match key.code {
            KeyCode::Char(c) => text.push(c),
            KeyCode::Backspace => {
                if text.pop().is_none() {
                    return Action::None;
                }
            }
            KeyCode::Tab => {
                self.focus = self.next_focus(view.mode);
                return Action::None;
            }
            KeyCode::Enter | KeyCode::Esc => {
                self.focus = Focus::Cards;
                return Action::None;
            }
            _ => return Action::None,
        }

        self.card_list_state.select(Some(0));
        match view.mode {
            Mode::ShowsGallery => Action::SearchShows(text),
            _ => Action::SearchEpisodes(text),
        }
    }

    fn handle_show_selector_input(&mut self, key: KeyEvent, view: &ViewModel) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                move_up(&mut self.show_list_state);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                move_down(&mut self.show_list_state, view.show_options.len());
                Action::None
            }
            KeyCode::Enter => match self.show_list_state.selected() {
                Some(i) if i < view.show_options.len() => {
                    Action::SelectShow(view.show_options[i].value)
                }
                _ => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_episode_selector_input(&mut self, key: KeyEvent, view: &ViewModel) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                move_up(&mut self.episode_list_state);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                move_down(&mut self.episode_list_state, view.episode_options.len());
                Action::None
            }
            KeyCode::Enter => match self.episode_list_state.selected() {
                Some(i) if i < view.episode_options.len() => {
                    Action::SelectEpisode(view.episode_options[i].value)
                }
                _ => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_card_input(&mut self, key: KeyEvent, view: &ViewModel) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                move_up(&mut self.card_list_state);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                move_down(&mut self.card_list_state, view.cards.len());
                Action::None
            }
            KeyCode::Enter if view.mode == Mode::ShowsGallery => {
                match self.card_list_state.selected() {
                    Some(i) if i < view.cards.len() => Action::SelectShow(Some(view.cards[i].id)),
                    _ => Action::None,
                }
            }
            _ => Action::None,
        }
    }
}

fn handle_error_input(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('r') | KeyCode::Enter => Action::Retry,
        KeyCode::Esc => Action::DismissError,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}

fn move_up(state: &mut ListState) {
    let i = state.selected().unwrap_or(0);
    if i > 0 {
        state.select(Some(i - 1));
    }
}

fn move_down(state: &mut ListState, len: usize) {
    let i = state.selected().unwrap_or(0);
    if i < len.saturating_sub(1) {
        state.select(Some(i + 1));
    }
}

fn clamp(state: &mut ListState, len: usize) {
    let i = state.selected().unwrap_or(0);
    state.select(Some(i.min(len.saturating_sub(1))));
}
