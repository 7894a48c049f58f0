use super::{App, Config};
use crate::catalog::Catalog;
use crate::navigation::Direction;
use crate::preferences::PreferenceStore;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_tui(catalog: Catalog, config: Config, prefs: Box<dyn PreferenceStore>) -> Result<()> {
    let mut app = App::new(catalog, config, prefs);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut needs_redraw = true;

    loop {
        // A theme change repaints every cell, not just the diff.
        if app.poll_theme_changes() {
            terminal.clear()?;
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw(f, app))?;
            needs_redraw = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_key(app, key);
                needs_redraw = true;
            }
            Event::Resize(_, _) => needs_redraw = true,
            _ => {}
        }

        if app.ui.should_quit {
            break;
        }
    }

    Ok(())
}

/// Route one key press to whichever layer currently has focus.
pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    let code = key.code;

    // Any key dismisses the previous status line.
    app.ui.status_message = None;

    if app.ui.show_help {
        if matches!(code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter) {
            app.ui.show_help = false;
        }
        return;
    }

    if app.ui.show_tag_picker {
        handle_tag_picker_key(app, code);
        return;
    }

    if app.ui.preview.is_some() {
        handle_preview_key(app, code);
        return;
    }

    let kb = app.config.keybindings.clone();

    if kb.matches(code, &kb.quit) {
        app.ui.should_quit = true;
    } else if kb.matches(code, &kb.next) || code == KeyCode::Down {
        app.step_selection(Direction::Next);
    } else if kb.matches(code, &kb.prev) || code == KeyCode::Up {
        app.step_selection(Direction::Prev);
    } else if kb.matches(code, &kb.open) {
        app.open_selected();
    } else if kb.matches(code, &kb.random) {
        app.surprise_me();
    } else if kb.matches(code, &kb.sort) {
        app.toggle_sort_mode();
    } else if kb.matches(code, &kb.tag_filter) {
        app.toggle_tag_picker();
    } else if kb.matches(code, &kb.theme) {
        app.toggle_theme();
    } else {
        match code {
            KeyCode::Esc | KeyCode::Backspace => app.go_back(),
            KeyCode::Tab => app.next_view(),
            KeyCode::Char('1') => app.go_to(super::View::Home),
            KeyCode::Char('2') => app.go_to(super::View::Collections),
            KeyCode::Char('3') => app.go_to(super::View::Tags),
            KeyCode::Char('x') => app.clear_tag_filters(),
            KeyCode::Char('?') => app.toggle_help(),
            _ => {}
        }
    }
}

fn handle_preview_key(app: &mut App, code: KeyCode) {
    let kb = app.config.keybindings.clone();
    match code {
        KeyCode::Left => app.step_preview(Direction::Prev),
        KeyCode::Right => app.step_preview(Direction::Next),
        KeyCode::Esc | KeyCode::Enter => app.ui.preview = None,
        _ if kb.matches(code, &kb.prev) => app.step_preview(Direction::Prev),
        _ if kb.matches(code, &kb.next) => app.step_preview(Direction::Next),
        _ if kb.matches(code, &kb.random) => app.surprise_me(),
        _ if kb.matches(code, &kb.theme) => app.toggle_theme(),
        _ if kb.matches(code, &kb.quit) => app.ui.preview = None,
        _ => {}
    }
}

fn handle_tag_picker_key(app: &mut App, code: KeyCode) {
    let kb = app.config.keybindings.clone();
    match code {
        KeyCode::Esc => app.ui.show_tag_picker = false,
        KeyCode::Down => app.tag_picker_next(),
        KeyCode::Up => app.tag_picker_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => app.tag_picker_toggle(),
        KeyCode::Char('x') => app.clear_tag_filters(),
        _ if kb.matches(code, &kb.next) => app.tag_picker_next(),
        _ if kb.matches(code, &kb.prev) => app.tag_picker_prev(),
        _ if kb.matches(code, &kb.tag_filter) => app.ui.show_tag_picker = false,
        _ => {}
    }
}
