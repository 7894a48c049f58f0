use super::centered_rect;
use crate::app::App;
use crate::navigation::{can_navigate, position};
use crate::ui::theme::GalleryTheme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

fn popup_block<'a>(title: String, theme: &GalleryTheme) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(theme.accent_highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_primary))
        .style(Style::default().bg(theme.bg_popup).fg(theme.fg_primary))
}

fn field<'a>(name: &'static str, value: String, theme: &GalleryTheme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<12}", name), Style::default().fg(theme.fg_muted)),
        Span::styled(value, Style::default().fg(theme.fg_secondary)),
    ])
}

pub(super) fn draw_preview_popup(f: &mut Frame, app: &App, area: Rect, theme: &GalleryTheme) {
    let Some(wp) = app.preview_wallpaper() else {
        return;
    };
    let context = app.preview_context();
    let counter = match position(&context, &wp.id) {
        Some(idx) => format!(" {}/{} ", idx + 1, context.len()),
        None => String::new(),
    };

    let popup_area = centered_rect(area, 76, 18);
    f.render_widget(Clear, popup_area);

    let block = popup_block(format!(" {} ", wp.title), theme).title_bottom(counter);
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let aspect = wp
        .aspect_category()
        .map(|a| format!(" ({})", a.display_name()))
        .unwrap_or_default();
    let date = wp
        .date_added
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let tag_spans: Vec<Span> = wp
        .tags
        .iter()
        .map(|tag| Span::styled(format!("#{} ", tag), Style::default().fg(theme.tag)))
        .collect();

    let mut lines = vec![
        field("Theme", wp.theme.clone(), theme),
        field("Resolution", format!("{}{}", wp.resolution, aspect), theme),
        field("Added", date, theme),
        Line::from(
            std::iter::once(Span::styled(
                format!("{:<12}", "Tags"),
                Style::default().fg(theme.fg_muted),
            ))
            .chain(tag_spans)
            .collect::<Vec<_>>(),
        ),
        Line::from(""),
        Line::from(Span::styled(
            wp.alt_text.clone(),
            Style::default()
                .fg(theme.fg_secondary)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        field("Full size", wp.full_url.clone(), theme),
        field("Save as", wp.download_filename(), theme),
        Line::from(""),
    ];

    let nav_hint = if can_navigate(context.len()) {
        "←/→ previous/next · Esc close"
    } else {
        "Esc close"
    };
    lines.push(Line::from(Span::styled(
        nav_hint,
        Style::default().fg(theme.accent_primary),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

pub(super) fn draw_tag_picker(f: &mut Frame, app: &App, area: Rect, theme: &GalleryTheme) {
    let tags = app.available_tags();
    let popup_area = centered_rect(area, 40, 24);
    f.render_widget(Clear, popup_area);

    let title = format!(" Filter by tag ({} active) ", app.filters.active_tags().len());
    let block = popup_block(title, theme)
        .title_bottom(" Enter toggle · x clear · Esc close ");

    let items: Vec<ListItem> = tags
        .iter()
        .map(|tag| {
            let active = app.filters.active_tags().contains(tag);
            let marker = if active { "[x] " } else { "[ ] " };
            let style = if active {
                Style::default().fg(theme.tag_active)
            } else {
                Style::default().fg(theme.tag)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.fg_muted)),
                Span::styled(tag.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::REVERSED),
        );

    let selected = (!tags.is_empty()).then_some(app.ui.tag_picker_idx);
    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, popup_area, &mut state);
}

pub(super) fn draw_help_popup(f: &mut Frame, app: &App, area: Rect, theme: &GalleryTheme) {
    let kb = &app.config.keybindings;
    let popup_area = centered_rect(area, 52, 22);
    f.render_widget(Clear, popup_area);

    let block = popup_block(" Artscapes Help ".to_string(), theme);
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(theme.accent_highlight)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let entry = |keys: String, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", keys), Style::default().fg(theme.accent_primary)),
            Span::styled(what, Style::default().fg(theme.fg_secondary)),
        ])
    };

    let lines = vec![
        heading("Navigation"),
        entry(format!("{}/↓", kb.next), "Next row"),
        entry(format!("{}/↑", kb.prev), "Previous row"),
        entry(kb.open.clone(), "Preview / open"),
        entry("Esc".into(), "Back"),
        entry("Tab".into(), "Next view"),
        entry("1 2 3".into(), "Home, collections, tags"),
        Line::from(""),
        heading("Preview"),
        entry("←/→".into(), "Previous / next (wraps)"),
        Line::from(""),
        heading("Filters"),
        entry(kb.tag_filter.clone(), "Tag filter (any tag matches)"),
        entry("x".into(), "Clear tag filters"),
        entry(kb.sort.clone(), "Cycle sort order"),
        Line::from(""),
        heading("Other"),
        entry(kb.random.clone(), "Surprise me"),
        entry(kb.theme.clone(), "Toggle light/dark"),
        entry(kb.quit.clone(), "Quit"),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}
