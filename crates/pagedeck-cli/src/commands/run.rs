use std::io;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};

use pagedeck_core::{deck, AppConfig};
use pagedeck_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    keymap::Keymap,
    load_theme,
    widgets::{CarouselWidget, DotIndicatorWidget, HelpWidget, StatusBarWidget},
};

pub fn run(config: AppConfig, file: Option<PathBuf>) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Load the deck before touching the terminal
    let pages = match &file {
        Some(path) => deck::load(path)?,
        None => deck::builtin(),
    };
    tracing::debug!("Deck loaded: {} pages", pages.len());

    // Load theme from config
    let theme = load_theme(&config.ui.theme);

    // Create event handler with animation FPS support
    let event_handler = EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.transition.fps);

    // Create app state
    let mut app = App::new(config, theme, pages)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("pagedeck"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &event_handler, &keymap);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    keymap: &Keymap,
) -> Result<()> {
    // Indicator row of the last draw, for click hit-testing
    let mut indicator_area = Rect::default();

    loop {
        // Advance the slide animation before drawing
        app.update_transition();

        terminal.draw(|frame| {
            indicator_area = draw(frame, app);
        })?;

        // Poll faster while a slide is in flight
        let fast = app.needs_fast_update();

        match event_handler.next(fast)? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app, keymap);
                apply_action(app, action);
            }
            Some(AppEvent::Click { column, row }) => {
                if let Some(index) = DotIndicatorWidget::hit_test(indicator_area, app, column, row)
                {
                    app.go_to_page(index);
                }
            }
            Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn apply_action(app: &mut App, action: Action) {
    // A multi-key sequence survives only its own prefix
    if action != Action::PendingG {
        app.clear_pending_key();
    }
    if action != Action::None {
        app.clear_status();
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::NextPage => app.next_page(),
        Action::PrevPage => app.previous_page(),
        Action::FirstPage => app.first_page(),
        Action::LastPage => app.last_page(),
        Action::GoToPage(index) => app.go_to_page(index),
        Action::ToggleIndicator => app.toggle_indicator(),
        Action::Help => app.mode = Mode::Help,
        Action::PendingG => app.pending_key = Some('g'),
        Action::ExitMode => app.mode = Mode::Normal,
        Action::None => {}
    }
}

/// Draw the full UI and return the indicator row for click handling
fn draw(frame: &mut Frame, app: &App) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Carousel
            Constraint::Length(1), // Dot indicator
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    CarouselWidget::render(frame, chunks[0], app);
    DotIndicatorWidget::render(frame, chunks[1], app);
    StatusBarWidget::render(frame, chunks[2], app);

    if app.mode == Mode::Help {
        HelpWidget::render(frame, app);
    }

    chunks[1]
}
