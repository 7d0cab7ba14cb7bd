//! UI rendering functions for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::state::UiState;
use super::types::Focus;
use crate::state::{Mode, Pending, Status};
use crate::view::{Card, SelectOption, ViewModel};

/// Draw the UI.
pub fn draw(frame: &mut Frame, ui: &mut UiState, view: &ViewModel) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // Content (sidebar + main)
            Constraint::Length(3), // Footer
        ])
        .split(size);

    draw_header(frame, view, chunks[0]);
    draw_search_bar(frame, ui, view, chunks[1]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(32), // Sidebar (fixed width)
            Constraint::Min(0),     // Main content
        ])
        .split(chunks[2]);

    draw_sidebar(frame, ui, view, content_chunks[0]);

    match &view.status {
        Status::Loading(message) => draw_loading(frame, message, content_chunks[1]),
        _ => draw_cards(frame, ui, view, content_chunks[1]),
    }

    draw_footer(frame, ui, view, chunks[3]);

    if let Status::Failed { message, retry } = &view.status {
        draw_error_popup(frame, message, *retry);
    }

    if ui.show_help {
        draw_help_modal(frame);
    }
}

fn breadcrumb(view: &ViewModel) -> String {
    let show = view.heading.as_deref().unwrap_or("All shows");
    match view.mode {
        Mode::ShowsGallery => "All shows".to_string(),
        Mode::EpisodeList => show.to_string(),
        Mode::SingleEpisode => {
            let code = view
                .cards
                .first()
                .and_then(|c| c.episode_code.as_deref())
                .unwrap_or("");
            format!("{} › {}", show, code)
        }
    }
}

fn draw_header(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "show-browser",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(breadcrumb(view), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", view.count),
            Style::default().fg(Color::Green),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_search_bar(frame: &mut Frame, ui: &UiState, view: &ViewModel, area: Rect) {
    let focused = ui.focus == Focus::Search;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = match view.mode {
        Mode::ShowsGallery => "Search shows",
        _ => "Search episodes",
    };

    let text = view.active_search();
    let search_text = if text.is_empty() && !focused {
        "Press '/' to search..."
    } else {
        text
    };

    let search = Paragraph::new(search_text)
        .style(if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        );

    frame.render_widget(search, area);

    if focused {
        // Keep the cursor inside the borders once the text overflows.
        let offset = u16::try_from(text.chars().count())
            .unwrap_or(u16::MAX)
            .min(area.width.saturating_sub(2));
        frame.set_cursor_position((
            area.x.saturating_add(offset).saturating_add(1),
            area.y.saturating_add(1),
        ));
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn option_items<K>(options: &[SelectOption<K>]) -> Vec<ListItem<'static>> {
    options
        .iter()
        .map(|opt| {
            let style = if opt.value.is_none() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(opt.label.clone()).style(style)
        })
        .collect()
}

fn selector_list<'a>(items: Vec<ListItem<'a>>, title: &'a str, focused: bool) -> List<'a> {
    List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(focus_style(focused)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ")
}

fn draw_sidebar(frame: &mut Frame, ui: &mut UiState, view: &ViewModel, area: Rect) {
    let chunks = if view.mode == Mode::ShowsGallery {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(100), Constraint::Length(0)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area)
    };

    let shows = selector_list(
        option_items(&view.show_options),
        "Shows",
        ui.focus == Focus::Shows,
    );
    frame.render_stateful_widget(shows, chunks[0], &mut ui.show_list_state);

    if view.mode != Mode::ShowsGallery {
        let episodes = selector_list(
            option_items(&view.episode_options),
            "Episodes",
            ui.focus == Focus::Episodes,
        );
        frame.render_stateful_widget(episodes, chunks[1], &mut ui.episode_list_state);
    }
}

fn draw_cards(frame: &mut Frame, ui: &mut UiState, view: &ViewModel, area: Rect) {
    if let Some(empty) = &view.empty {
        let message = Paragraph::new(empty.message())
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Results"))
            .wrap(Wrap { trim: true });
        frame.render_widget(message, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let items: Vec<ListItem> = view
        .cards
        .iter()
        .map(|card| ListItem::new(card.title.clone()))
        .collect();

    let title = match view.mode {
        Mode::SingleEpisode => "Episode".to_string(),
        _ => view.heading.clone().unwrap_or_else(|| "Shows".to_string()),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(focus_style(ui.focus == Focus::Cards)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, chunks[0], &mut ui.card_list_state);

    let selected = ui
        .card_list_state
        .selected()
        .and_then(|i| view.cards.get(i));

    let details = Paragraph::new(selected.map(card_lines).unwrap_or_default())
        .block(Block::default().borders(Borders::ALL).title("Details"))
        .wrap(Wrap { trim: true });

    frame.render_widget(details, chunks[1]);
}

fn card_lines(card: &Card) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![Line::from(Span::styled(
        card.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    if let Some(details) = &card.details {
        lines.push(Line::from(vec![
            Span::styled("Rating: ", label),
            Span::raw(details.rating.clone()),
            Span::styled("  Status: ", label),
            Span::raw(details.status.clone()),
            Span::styled("  Runtime: ", label),
            Span::raw(details.runtime.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Genres: ", label),
            Span::raw(details.genres.clone()),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled("Image: ", label),
        Span::raw(card.image.clone()),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(card.summary.clone()));
    lines
}

fn draw_footer(frame: &mut Frame, ui: &UiState, view: &ViewModel, area: Rect) {
    let help_text = if view.status.is_failed() {
        "[r] retry  [Esc] dismiss  [q] quit"
    } else if ui.focus == Focus::Search {
        "[type] filter  [Enter] done  [Tab] next panel"
    } else {
        match view.mode {
            Mode::ShowsGallery => "[/] search  [Tab] switch  [↑↓] navigate  [Enter] open  [?] help  [q] quit",
            Mode::EpisodeList => "[/] search  [Tab] switch  [↑↓] navigate  [Enter] select  [Esc] all shows  [?] help  [q] quit",
            Mode::SingleEpisode => "[Esc] back to list  [Tab] switch  [?] help  [q] quit",
        }
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

fn draw_loading(frame: &mut Frame, message: &str, area: Rect) {
    let loading = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Loading"));

    frame.render_widget(loading, area);
}

fn draw_error_popup(frame: &mut Frame, message: &str, retry: Pending) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);

    let heading = match retry {
        Pending::LoadShows => "Error loading shows",
        Pending::LoadEpisodes(_) => "Error loading episodes",
    };

    let popup = Paragraph::new(format!(
        "{}\n\n{}\n\n[r] Retry  [Esc] Dismiss",
        heading, message
    ))
    .style(Style::default().fg(Color::Red))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Error")
            .border_style(Style::default().fg(Color::Red)),
    )
    .wrap(Wrap { trim: true });

    frame.render_widget(popup, area);
}

fn draw_help_modal(frame: &mut Frame) {
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let content = "\
Global Commands
───────────────
  ?           Show/hide this help
  Ctrl+C      Force quit
  /           Focus search bar
  Tab         Switch panel focus
  q           Quit

Navigation
──────────
  j / ↓       Move down
  k / ↑       Move up
  Enter       Open show / select entry
  Esc         Back (episode → list → all shows)

Search
──────
  (Type)      Filter by name, summary or genre
  Backspace   Delete character
  Enter       Done

Errors
──────
  r           Retry the failed request
  Esc         Dismiss

Press ? to close";

    let help_text = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help_text, area);
}

/// Helper function to create a centered rect.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
