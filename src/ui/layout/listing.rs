use super::truncate;
use crate::app::{App, View};
use crate::tags::tag_counts;
use crate::ui::theme::GalleryTheme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

fn listing_block<'a>(title: String, theme: &GalleryTheme) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(Style::default().fg(theme.accent_highlight))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border))
}

fn highlight_style(theme: &GalleryTheme) -> Style {
    Style::default()
        .fg(theme.accent_primary)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

fn draw_empty(f: &mut Frame, area: Rect, message: &str, theme: &GalleryTheme) {
    let text = Paragraph::new(message.to_string())
        .style(Style::default().fg(theme.fg_muted))
        .alignment(Alignment::Center);
    let y = area.y + area.height / 2;
    f.render_widget(text, Rect::new(area.x, y, area.width, 1.min(area.height)));
}

pub(super) fn draw_wallpapers(f: &mut Frame, app: &App, area: Rect, theme: &GalleryTheme) {
    let wallpapers = app.visible_wallpapers();

    let mut title = format!(" {} ", app.view.title());
    if let View::Collection(slug) = &app.view {
        if let Some(col) = app.catalog.collection_by_slug(slug) {
            title = format!(" {} · {} ", col.name, truncate(&col.description, 60));
        }
    }

    if wallpapers.is_empty() {
        f.render_widget(listing_block(title, theme), area);
        let message = match &app.view {
            View::Tag(tag) => format!("No wallpapers tagged '{}'", tag),
            _ if !app.filters.active_tags().is_empty() => {
                "No wallpapers match the selected tags (x clears them)".to_string()
            }
            _ => "No wallpapers in this listing".to_string(),
        };
        draw_empty(f, area, &message, theme);
        return;
    }

    let limit = app.config.display.card_tag_limit;
    let title_width = (area.width as usize / 3).max(12);

    let items: Vec<ListItem> = wallpapers
        .iter()
        .map(|wp| {
            let (shown, more) = wp.preview_tags(limit);
            let mut spans = vec![
                Span::styled(
                    format!("{:<width$}", truncate(&wp.title, title_width), width = title_width),
                    Style::default().fg(theme.fg_primary),
                ),
                Span::styled(
                    format!(" {:<11}", wp.resolution),
                    Style::default().fg(theme.fg_muted),
                ),
            ];
            if let Some(date) = wp.date_added {
                spans.push(Span::styled(
                    format!(" {}", date.format("%Y-%m-%d")),
                    Style::default().fg(theme.fg_muted),
                ));
            }
            for tag in shown {
                let style = if app.filters.active_tags().contains(tag) {
                    Style::default().fg(theme.tag_active)
                } else {
                    Style::default().fg(theme.tag)
                };
                spans.push(Span::styled(format!(" #{}", tag), style));
            }
            if more {
                spans.push(Span::styled(
                    format!(" +{}", wp.tags.len() - shown.len()),
                    Style::default().fg(theme.fg_muted),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(listing_block(title, theme))
        .highlight_style(highlight_style(theme))
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(app.selected_row());
    f.render_stateful_widget(list, area, &mut state);
}

pub(super) fn draw_collections(f: &mut Frame, app: &App, area: Rect, theme: &GalleryTheme) {
    let cards = app.visible_collections();
    let title = " Collections ".to_string();

    if cards.is_empty() {
        f.render_widget(listing_block(title, theme), area);
        draw_empty(f, area, "No collections match the selected tags", theme);
        return;
    }

    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| {
            let col = card.collection;
            let cover = match card.cover {
                Some(wp) => Span::styled(
                    format!("cover: {}", wp.title),
                    Style::default().fg(theme.fg_muted),
                ),
                None => Span::styled("cover: (none)", Style::default().fg(theme.warning)),
            };
            let header = Line::from(vec![
                Span::styled(
                    col.name.as_str(),
                    Style::default()
                        .fg(theme.fg_primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} wallpapers  ", col.wallpaper_ids.len()),
                    Style::default().fg(theme.accent_secondary),
                ),
                cover,
            ]);
            let description = Line::from(Span::styled(
                format!("  {}", truncate(&col.description, area.width.saturating_sub(6) as usize)),
                Style::default().fg(theme.fg_secondary),
            ));
            ListItem::new(vec![header, description])
        })
        .collect();

    let list = List::new(items)
        .block(listing_block(title, theme))
        .highlight_style(highlight_style(theme))
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(app.selected_row());
    f.render_stateful_widget(list, area, &mut state);
}

pub(super) fn draw_tag_index(f: &mut Frame, app: &App, area: Rect, theme: &GalleryTheme) {
    let index = app.tag_index();
    let title = format!(" Tags ({}) ", index.tag_count());

    if index.is_empty() {
        f.render_widget(listing_block(title, theme), area);
        draw_empty(f, area, "No tags in the catalog", theme);
        return;
    }

    let counts = tag_counts(app.catalog.wallpapers());
    let count_of = |tag: &str| {
        counts
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    };

    // Group headings are rendered as their own rows, so map the flat tag
    // selection onto list rows.
    let mut items = Vec::new();
    let mut selected_list_row = None;
    let mut tag_row = 0;
    for group in index.groups() {
        items.push(ListItem::new(Line::from(Span::styled(
            group.key.to_string(),
            Style::default()
                .fg(theme.accent_highlight)
                .add_modifier(Modifier::BOLD),
        ))));
        for tag in &group.tags {
            if tag_row == app.selection.tag_idx {
                selected_list_row = Some(items.len());
            }
            items.push(ListItem::new(Line::from(vec![
                Span::styled(format!("  #{}", tag), Style::default().fg(theme.tag)),
                Span::styled(
                    format!(" ({})", count_of(tag)),
                    Style::default().fg(theme.fg_muted),
                ),
            ])));
            tag_row += 1;
        }
    }

    let list = List::new(items)
        .block(listing_block(title, theme))
        .highlight_style(highlight_style(theme))
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(selected_list_row);
    f.render_stateful_widget(list, area, &mut state);
}
