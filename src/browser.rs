//! The browser controller.
//!
//! [`Browser`] owns the view state, the loaded collections and the episode
//! cache. Every operation finishes all of its mutations before handing a
//! fresh [`ViewModel`] to the renderer, and a failed fetch only changes the
//! status, never the selections or the cached data.

use crate::api::DataSource;
use crate::cache::EpisodeCache;
use crate::config::SelectorStyle;
use crate::error::AppError;
use crate::filter::filter;
use crate::state::{Pending, Status, ViewState};
use crate::types::{Episode, Show, ShowId};
use crate::view::{Renderer, ViewModel};
use log::{debug, info, warn};
use std::io;

/// Drives a [`DataSource`] and a [`Renderer`] from user operations.
pub struct Browser<S, R> {
    source: S,
    renderer: R,
    cache: EpisodeCache,
    state: ViewState,
    status: Status,
    shows: Vec<Show>,
    selector: SelectorStyle,
}

impl<S: DataSource, R: Renderer> Browser<S, R> {
    pub fn new(source: S, renderer: R, selector: SelectorStyle) -> Self {
        Self {
            source,
            renderer,
            cache: EpisodeCache::new(),
            state: ViewState::new(),
            status: Status::Ready,
            shows: Vec::new(),
            selector,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    /// Episodes of the selected show; empty in the gallery.
    pub fn episodes(&self) -> &[Episode] {
        self.state
            .selected_show()
            .and_then(|id| self.cache.get(id))
            .unwrap_or(&[])
    }

    pub fn cache(&self) -> &EpisodeCache {
        &self.cache
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_parts(self) -> (S, R) {
        (self.source, self.renderer)
    }

    pub fn view_model(&self) -> ViewModel {
        ViewModel::project(
            &self.state,
            &self.status,
            &self.shows,
            self.episodes(),
            self.selector,
        )
    }

    /// Draw the current state.
    pub fn render(&mut self) -> io::Result<()> {
        let view = self.view_model();
        self.renderer.render(&view)
    }

    fn set_loading(&mut self, message: String) -> io::Result<()> {
        self.status = Status::Loading(message);
        self.render()
    }

    fn fail(&mut self, error: AppError, retry: Pending) -> io::Result<()> {
        warn!("{}", error);
        self.status = Status::Failed {
            message: error.to_string(),
            retry,
        };
        self.render()
    }

    /// Fetch the show list.
    pub async fn load_shows(&mut self) -> io::Result<()> {
        self.set_loading("Loading shows...".to_string())?;

        match self.source.fetch_shows().await {
            Ok(shows) => {
                info!("Loaded {} shows", shows.len());
                self.shows = shows;
                self.status = Status::Ready;
                self.render()
            }
            Err(e) => self.fail(e, Pending::LoadShows),
        }
    }

    /// Open the episode list of a show, or return to the gallery with `None`.
    ///
    /// Episodes come from the cache when the show was opened before. Ids that
    /// are not in the loaded show list are ignored.
    pub async fn select_show(&mut self, show_id: Option<ShowId>) -> io::Result<()> {
        let Some(show_id) = show_id else {
            self.state.clear_show();
            self.status = Status::Ready;
            return self.render();
        };

        let Some(name) = self
            .shows
            .iter()
            .find(|s| s.id == show_id)
            .map(|s| s.name.clone())
        else {
            debug!("Ignoring selection of unknown show {}", show_id);
            return Ok(());
        };

        if self.cache.contains(show_id) {
            debug!("Episode cache hit for show {}", show_id);
        } else {
            debug!("Episode cache miss for show {}", show_id);
            self.set_loading(format!("Loading episodes for {}...", name))?;

            match self.source.fetch_episodes(show_id).await {
                Ok(episodes) => self.cache.put(show_id, episodes),
                Err(e) => return self.fail(e, Pending::LoadEpisodes(show_id)),
            }
        }

        self.state.enter_show(show_id);
        self.status = Status::Ready;
        self.render()
    }

    pub fn search_shows(&mut self, text: &str) -> io::Result<()> {
        self.state.set_show_search(text);
        self.render()
    }

    pub fn search_episodes(&mut self, text: &str) -> io::Result<()> {
        self.state.set_episode_search(text);
        self.render()
    }

    /// Episodes the episode selector lists, in selector order.
    pub fn selectable_episodes(&self) -> Vec<&Episode> {
        match self.selector {
            SelectorStyle::Full => self.episodes().iter().collect(),
            SelectorStyle::Filtered => filter(self.episodes(), self.state.episode_search()),
        }
    }

    /// Pin the episode at `index` of the selector's collection.
    ///
    /// `None` and indices that do not resolve leave everything unchanged.
    pub fn select_episode(&mut self, index: Option<usize>) -> io::Result<()> {
        let Some(index) = index else {
            return Ok(());
        };

        let Some(episode_id) = self.selectable_episodes().get(index).map(|e| e.id) else {
            debug!("Ignoring selection of episode index {}", index);
            return Ok(());
        };

        if self.state.pin_episode(episode_id) {
            self.render()
        } else {
            Ok(())
        }
    }

    /// Leave the single-episode view for the episode list.
    pub fn back(&mut self) -> io::Result<()> {
        if self.state.unpin_episode() {
            self.render()
        } else {
            Ok(())
        }
    }

    /// Re-run the operation that last failed.
    pub async fn retry(&mut self) -> io::Result<()> {
        match self.status {
            Status::Failed {
                retry: Pending::LoadShows,
                ..
            } => self.load_shows().await,
            Status::Failed {
                retry: Pending::LoadEpisodes(show_id),
                ..
            } => self.select_show(Some(show_id)).await,
            _ => Ok(()),
        }
    }

    /// Close the error without retrying.
    pub fn dismiss_error(&mut self) -> io::Result<()> {
        if self.status.is_failed() {
            self.status = Status::Ready;
            self.render()
        } else {
            Ok(())
        }
    }
}
