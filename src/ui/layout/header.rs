use crate::app::{App, View};
use crate::ui::theme::GalleryTheme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub(super) fn draw_status(f: &mut Frame, app: &App, area: Rect, theme: &GalleryTheme) {
    if let Some(message) = &app.ui.status_message {
        let line = Line::from(vec![
            Span::styled("! ", Style::default().fg(theme.warning)),
            Span::styled(message.as_str(), Style::default().fg(theme.warning)),
        ]);
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

pub(super) fn draw_header(f: &mut Frame, app: &App, area: Rect, theme: &GalleryTheme) {
    let (position, total) = match &app.view {
        View::Collections => (app.selected_row(), app.visible_collections().len()),
        View::Tags => (app.selected_row(), app.tag_rows().len()),
        _ => (app.selected_row(), app.visible_wallpapers().len()),
    };
    let count_info = match (position, total) {
        (_, 0) => "0/0".to_string(),
        (Some(idx), total) => format!("{}/{}", idx + 1, total),
        (None, total) => format!("-/{}", total),
    };

    let mut spans = vec![
        Span::styled(
            " Artscapes ",
            Style::default()
                .fg(theme.accent_highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(theme.fg_muted)),
        Span::styled(app.view.title(), Style::default().fg(theme.fg_secondary)),
        Span::styled(" │ ", Style::default().fg(theme.fg_muted)),
        Span::styled(count_info, Style::default().fg(theme.accent_primary)),
    ];

    if app.view == View::Home {
        spans.push(Span::styled(" │ ", Style::default().fg(theme.fg_muted)));
        spans.push(Span::styled(
            format!("[⇅{}]", app.filters.query.sort.display_name()),
            Style::default().fg(theme.accent_secondary),
        ));
    }

    if matches!(app.view, View::Home | View::Collections) {
        for tag in app.filters.active_tags().iter() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("[#{}]", tag),
                Style::default().fg(theme.tag_active),
            ));
        }
    }

    spans.push(Span::styled(" │ ", Style::default().fg(theme.fg_muted)));
    spans.push(Span::styled(
        format!("[{}]", app.theme_mode()),
        Style::default().fg(theme.fg_muted),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub(super) fn draw_footer(f: &mut Frame, app: &App, area: Rect, theme: &GalleryTheme) {
    let kb = &app.config.keybindings;
    let key = |k: &str| Span::styled(format!(" {} ", k), Style::default().fg(theme.accent_primary));
    let label = |l: &'static str| Span::styled(l, Style::default().fg(theme.fg_muted));

    let mut spans = vec![
        key(&format!("{}/{}", kb.prev, kb.next)),
        label("move"),
        key(&kb.open),
        label(if app.view.lists_wallpapers() { "preview" } else { "open" }),
        key("Tab"),
        label("views"),
        key(&kb.random),
        label("surprise"),
    ];
    if matches!(app.view, View::Home | View::Collections) {
        spans.push(key(&kb.tag_filter));
        spans.push(label("tags"));
    }
    if app.view == View::Home {
        spans.push(key(&kb.sort));
        spans.push(label("sort"));
    }
    spans.extend([
        key(&kb.theme),
        label("theme"),
        key("?"),
        label("help"),
        key(&kb.quit),
        label("quit"),
    ]);

    let mut lines = vec![Line::from(spans)];
    if let Some(hint) = app.download_hint() {
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(theme.fg_secondary),
        )));
    }

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
