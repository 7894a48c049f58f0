use crate::app::{App, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

mod header;
mod listing;
mod popups;

use header::{draw_footer, draw_header, draw_status};
use listing::{draw_collections, draw_tag_index, draw_wallpapers};
use popups::{draw_help_popup, draw_preview_popup, draw_tag_picker};

pub fn draw(f: &mut Frame, app: &App) {
    let theme = &app.ui.theme;
    let area = f.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg).fg(theme.fg_primary));

    let inner = block.inner(area);
    f.render_widget(block, area);

    // Vertical layout: header, (optional status), listing, footer
    let has_status = app.ui.status_message.is_some();
    let constraints = if has_status {
        vec![
            Constraint::Length(2), // Header
            Constraint::Length(1), // Status
            Constraint::Min(3),    // Listing
            Constraint::Length(2), // Footer
        ]
    } else {
        vec![
            Constraint::Length(2), // Header
            Constraint::Min(3),    // Listing
            Constraint::Length(2), // Footer
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut chunk_idx = 0;

    draw_header(f, app, chunks[chunk_idx], theme);
    chunk_idx += 1;

    if has_status {
        draw_status(f, app, chunks[chunk_idx], theme);
        chunk_idx += 1;
    }

    match &app.view {
        View::Collections => draw_collections(f, app, chunks[chunk_idx], theme),
        View::Tags => draw_tag_index(f, app, chunks[chunk_idx], theme),
        _ => draw_wallpapers(f, app, chunks[chunk_idx], theme),
    }
    chunk_idx += 1;

    draw_footer(f, app, chunks[chunk_idx], theme);

    // Popups on top
    if app.ui.show_tag_picker {
        draw_tag_picker(f, app, area, theme);
    } else if app.ui.preview.is_some() {
        draw_preview_popup(f, app, area, theme);
    }
    if app.ui.show_help {
        draw_help_popup(f, app, area, theme);
    }
}

/// Centered rectangle of at most `width` x `height`, leaving a 2-cell margin.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Cut `text` to `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}
