//! A terminal browser for TV shows and their episodes.
//!
//! show-browser loads the show list from a TVmaze-style HTTP API, lets you
//! filter it by name, summary or genre, and opens a show's episode list,
//! which is fetched once per show and then served from an in-memory cache.
//!
//! # Features
//!
//! - Case-insensitive search over shows and episodes
//! - Three views: show gallery, episode list, single episode
//! - Retry of failed requests without losing the current selection
//! - Full-screen TUI or plain-text output
//!
//! # Usage
//!
//! ```bash
//! # Interactive TUI
//! cargo run
//!
//! # Print the shows matching "thrones"
//! cargo run -- --print --query thrones
//!
//! # Print the episodes of show 82
//! cargo run -- --print --show 82
//! ```

pub mod api;
pub mod browser;
pub mod cache;
pub mod config;
pub mod error;
pub mod filter;
pub mod state;
pub mod tui;
pub mod types;
pub mod ui;
pub mod view;
