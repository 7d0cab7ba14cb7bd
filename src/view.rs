//! Projection of the browser state into something a renderer can draw.
//!
//! [`ViewModel::project`] holds no business logic beyond filtering and
//! formatting; renderers only ever see the resulting [`ViewModel`].

use crate::config::SelectorStyle;
use crate::filter::{filter, filter_indices};
use crate::state::{Mode, Status, ViewState};
use crate::types::{Episode, Show, ShowId};
use std::io;

/// Draws view models.
pub trait Renderer {
    fn render(&mut self, view: &ViewModel) -> io::Result<()>;
}

/// Extra slots shown on show cards.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowDetails {
    pub name: String,
    pub rating: String,
    pub genres: String,
    pub status: String,
    pub runtime: String,
}

/// One displayed show or episode.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Show or episode id.
    pub id: u64,
    pub title: String,
    pub episode_code: Option<String>,
    /// Artwork URL or the placeholder.
    pub image: String,
    /// Summary as plain text.
    pub summary: String,
    /// Only set on show cards.
    pub details: Option<ShowDetails>,
}

impl Card {
    fn from_show(show: &Show) -> Self {
        Self {
            id: show.id,
            title: show.name.clone(),
            episode_code: None,
            image: show.image_url().to_string(),
            summary: show.plain_summary(),
            details: Some(ShowDetails {
                name: show.name.clone(),
                rating: show.rating_display(),
                genres: show.genres_display(),
                status: show.status.clone().unwrap_or_else(|| "n/a".to_string()),
                runtime: show.runtime_display(),
            }),
        }
    }

    fn from_episode(episode: &Episode) -> Self {
        Self {
            id: episode.id,
            title: episode.title(),
            episode_code: Some(episode.code()),
            image: episode.image_url().to_string(),
            summary: episode.plain_summary(),
            details: None,
        }
    }
}

/// Selector entry. `value` is `None` for the leading "no selection" entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption<K> {
    pub value: Option<K>,
    pub label: String,
}

impl<K> SelectOption<K> {
    fn placeholder(label: &str) -> Self {
        Self {
            value: None,
            label: label.to_string(),
        }
    }
}

/// Why no cards are shown.
#[derive(Debug, Clone, PartialEq)]
pub enum EmptyReason {
    /// The collection itself is empty
    NothingLoaded,
    /// Items are loaded but none match the search text
    NothingMatched(String),
}

impl EmptyReason {
    pub fn message(&self) -> String {
        match self {
            EmptyReason::NothingLoaded => "Nothing loaded yet".to_string(),
            EmptyReason::NothingMatched(query) => format!("No results for \"{}\"", query),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub mode: Mode,
    pub status: Status,
    /// Name of the selected show, if any.
    pub heading: Option<String>,
    pub show_search: String,
    pub episode_search: String,
    pub cards: Vec<Card>,
    /// "displaying X/Y"
    pub count: String,
    pub show_options: Vec<SelectOption<ShowId>>,
    /// Option values are indices accepted by `Browser::select_episode`.
    pub episode_options: Vec<SelectOption<usize>>,
    pub selected_show: Option<ShowId>,
    pub empty: Option<EmptyReason>,
}

impl ViewModel {
    /// Build the view model for the given state and loaded collections.
    ///
    /// `episodes` is the loaded episode list of the selected show.
    pub fn project(
        state: &ViewState,
        status: &Status,
        shows: &[Show],
        episodes: &[Episode],
        selector: SelectorStyle,
    ) -> Self {
        let mode = state.mode();

        let (cards, total, empty): (Vec<Card>, usize, Option<EmptyReason>) = match mode {
            Mode::ShowsGallery => {
                let visible = filter(shows, state.show_search());
                let empty = empty_reason(shows.len(), visible.len(), state.show_search());
                (
                    visible.into_iter().map(Card::from_show).collect(),
                    shows.len(),
                    empty,
                )
            }
            Mode::EpisodeList => {
                let visible = filter(episodes, state.episode_search());
                let empty = empty_reason(episodes.len(), visible.len(), state.episode_search());
                (
                    visible.into_iter().map(Card::from_episode).collect(),
                    episodes.len(),
                    empty,
                )
            }
            Mode::SingleEpisode => {
                let pinned = episodes
                    .iter()
                    .filter(|e| Some(e.id) == state.selected_episode())
                    .map(Card::from_episode)
                    .collect();
                (pinned, episodes.len(), None)
            }
        };

        let episode_options = match mode {
            Mode::ShowsGallery => Vec::new(),
            _ => episode_options(episodes, state.episode_search(), selector),
        };

        let heading = state
            .selected_show()
            .and_then(|id| shows.iter().find(|s| s.id == id))
            .map(|s| s.name.clone());

        Self {
            mode,
            status: status.clone(),
            heading,
            show_search: state.show_search().to_string(),
            episode_search: state.episode_search().to_string(),
            count: count_line(cards.len(), total),
            cards,
            show_options: show_options(shows, state.show_search(), selector),
            episode_options,
            selected_show: state.selected_show(),
            empty,
        }
    }

    /// Search text of the collection currently listed.
    pub fn active_search(&self) -> &str {
        match self.mode {
            Mode::ShowsGallery => &self.show_search,
            _ => &self.episode_search,
        }
    }
}

/// "displaying X/Y"
///
/// # Examples
///
/// ```
/// assert_eq!(show_browser::view::count_line(2, 73), "displaying 2/73");
/// ```
pub fn count_line(visible: usize, total: usize) -> String {
    format!("displaying {}/{}", visible, total)
}

fn empty_reason(total: usize, visible: usize, query: &str) -> Option<EmptyReason> {
    if total == 0 {
        Some(EmptyReason::NothingLoaded)
    } else if visible == 0 {
        Some(EmptyReason::NothingMatched(query.to_string()))
    } else {
        None
    }
}

fn show_options(
    shows: &[Show],
    query: &str,
    selector: SelectorStyle,
) -> Vec<SelectOption<ShowId>> {
    let listed: Vec<&Show> = match selector {
        SelectorStyle::Full => shows.iter().collect(),
        SelectorStyle::Filtered => filter(shows, query),
    };

    std::iter::once(SelectOption::placeholder("Select a show"))
        .chain(listed.into_iter().map(|show| SelectOption {
            value: Some(show.id),
            label: show.name.clone(),
        }))
        .collect()
}

/// Episode options; values index into the listed collection itself.
fn episode_options(
    episodes: &[Episode],
    query: &str,
    selector: SelectorStyle,
) -> Vec<SelectOption<usize>> {
    let listed: Vec<usize> = match selector {
        SelectorStyle::Full => (0..episodes.len()).collect(),
        SelectorStyle::Filtered => filter_indices(episodes, query),
    };

    std::iter::once(SelectOption::placeholder("Select an episode"))
        .chain(
            listed
                .into_iter()
                .enumerate()
                .map(|(pos, i)| SelectOption {
                    value: Some(pos),
                    label: episodes[i].to_display(),
                }),
        )
        .collect()
}
