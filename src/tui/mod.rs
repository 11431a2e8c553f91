pub mod app;
pub mod components;
pub mod event;
pub mod screens;
pub mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tui_input::backend::crossterm::EventHandler as InputHandler;

use crate::config::Config;
use crate::error::Result;
use app::{App, Screen};
use event::{Event, EventHandler};

pub async fn run(config: Config) -> Result<()> {
    let mut app = App::new(config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::new(Duration::from_millis(250));

    let run_result = run_loop(&mut terminal, &mut app, &mut events).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render_ui(frame, app))?;

        match events.next().await {
            Some(Event::Key(key)) => handle_key(app, key),
            Some(Event::Tick) | Some(Event::Resize(_, _)) => {}
            None => break,
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.next_screen();
            return;
        }
        KeyCode::BackTab => {
            app.previous_screen();
            return;
        }
        _ => {}
    }

    match app.current_screen {
        Screen::Calculator => handle_calculator_key(app, key),
        Screen::Rates => match key.code {
            KeyCode::Up => app.previous_program(),
            KeyCode::Down => app.next_program(),
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        },
        Screen::Reviews => match key.code {
            KeyCode::Up => app.previous_review(),
            KeyCode::Down => app.next_review(),
            KeyCode::Char('d') => app.delete_selected_review(),
            KeyCode::Char('r') => {
                app.refresh_reviews();
                app.status_message = "Reviews refreshed".to_string();
            }
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        },
        Screen::Settings => {
            if key.code == KeyCode::Char('q') {
                app.should_quit = true;
            }
        }
    }
}

fn handle_calculator_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Currency changes recompute immediately.
        KeyCode::Left => app.previous_currency(),
        KeyCode::Right => app.next_currency(),
        KeyCode::Up => app.previous_program(),
        KeyCode::Down => app.next_program(),
        // Explicit calculate action; same path as the auto-trigger.
        KeyCode::Enter => app.recalculate(),
        // Everything else edits the quantity field.
        _ => {
            app.quantity
                .handle_event(&crossterm::event::Event::Key(key));
        }
    }
}
