//! Terminal User Interface for show-browser using ratatui.
//!
//! This module provides a full-screen TUI with a show selector, an episode
//! selector, a search bar and a card list with a detail pane.

mod render;
mod state;
mod types;

pub use render::draw;
pub use state::UiState;
pub use types::{Action, Focus};

use crate::view::{Renderer, ViewModel};
use crossterm::event::{self, Event, KeyEvent};
use ratatui::{Terminal, backend::Backend};
use std::io;
use std::time::Duration;

/// Poll for keyboard events with a timeout.
pub fn poll_event(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// A [`Renderer`] that draws into a ratatui terminal.
pub struct Tui<B: Backend> {
    terminal: Terminal<B>,
    ui: UiState,
    view: Option<ViewModel>,
}

impl<B: Backend> Tui<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            ui: UiState::new(),
            view: None,
        }
    }

    /// Translate a key press against the last rendered view.
    pub fn handle_input(&mut self, key: KeyEvent) -> Action {
        match &self.view {
            Some(view) => self.ui.handle_input(key, view),
            None => Action::None,
        }
    }

    /// Draw the last rendered view again, after cursor moves or a resize.
    pub fn redraw(&mut self) -> io::Result<()> {
        let Some(view) = &self.view else {
            return Ok(());
        };
        let ui = &mut self.ui;
        self.terminal.draw(|f| draw(f, ui, view))?;
        Ok(())
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }
}

impl<B: Backend> Renderer for Tui<B> {
    fn render(&mut self, view: &ViewModel) -> io::Result<()> {
        self.ui.sync(view);
        self.view = Some(view.clone());
        self.redraw()
    }
}
