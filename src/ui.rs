//! Plain-text output for the non-interactive `--print` mode.
//!
//! The TUI lives in the tui module; this renderer writes the same view
//! models as lines of text to any writer.

use crate::state::{Mode, Status};
use crate::view::{Card, Renderer, ViewModel};
use std::io::{self, Write};

/// A [`Renderer`] that writes view models as plain text.
///
/// Loading messages are written as soon as they arrive. Other views only
/// replace the pending frame, which [`TextRenderer::finish`] writes out, so
/// a run of operations prints one final listing.
pub struct TextRenderer<W: Write> {
    out: W,
    last: Option<ViewModel>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    /// Write the last rendered view and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(view) = self.last.take() {
            write_view(&mut self.out, &view)?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &ViewModel) -> io::Result<()> {
        if let Status::Loading(message) = &view.status {
            writeln!(self.out, "{}", message)?;
        } else {
            self.last = Some(view.clone());
        }
        Ok(())
    }
}

fn write_view<W: Write>(out: &mut W, view: &ViewModel) -> io::Result<()> {
    if let Status::Failed { message, .. } = &view.status {
        writeln!(out, "Error: {}", message)?;
        return Ok(());
    }

    let heading = match view.mode {
        Mode::ShowsGallery => "All shows".to_string(),
        _ => view.heading.clone().unwrap_or_default(),
    };
    writeln!(out, "{}  ({})", heading, view.count)?;

    let search = view.active_search();
    if !search.is_empty() {
        writeln!(out, "Search: \"{}\"", search)?;
    }
    writeln!(out)?;

    if let Some(empty) = &view.empty {
        writeln!(out, "{}", empty.message())?;
        return Ok(());
    }

    for card in &view.cards {
        write_card(out, card)?;
    }
    Ok(())
}

fn write_card<W: Write>(out: &mut W, card: &Card) -> io::Result<()> {
    match &card.details {
        Some(details) => {
            writeln!(out, "[{}] {}", card.id, card.title)?;
            writeln!(
                out,
                "    Rating: {}  Status: {}  Runtime: {}",
                details.rating, details.status, details.runtime
            )?;
            writeln!(out, "    Genres: {}", details.genres)?;
        }
        None => writeln!(out, "{}", card.title)?,
    }
    writeln!(out, "    Image: {}", card.image)?;
    if !card.summary.is_empty() {
        writeln!(out, "    {}", card.summary)?;
    }
    writeln!(out)
}
