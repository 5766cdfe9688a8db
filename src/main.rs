mod ui;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use neon_snake::achievements::daily;
use neon_snake::audio::{AudioSink, LogSink};
use neon_snake::core::constants::REALTIME_FRAME_MS;
use neon_snake::core::{GameConfig, GameLoop, Session};
use neon_snake::profile::{JsonFileStore, KeyValueStore, MemoryStore};
use neon_snake::utils::init_logging;
use rand::rngs::ThreadRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use ui::input::{map_key, InputAction};
use ui::layout::board_area;
use ui::overlays::{shop_row, ShopRow, SHOP_ROWS};
use ui::{Screen, UiState};

/// How often the calendar date is re-read for the daily challenge.
const DATE_CHECK_MS: u64 = 60_000;

type AppSession = Session<Box<dyn KeyValueStore>, LogSink>;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("neon-snake {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Neon Snake - Terminal Snake Arcade\n");
                println!("Usage: neon-snake\n");
                println!("Logs go to ~/.neon-snake/neon-snake.log.");
                println!("Set NEON_SNAKE_LOG (e.g. \"debug\") to change the log level.");
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'neon-snake --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let log_path = init_logging().ok();

    let store: Box<dyn KeyValueStore> = match JsonFileStore::open_default() {
        Ok(store) => {
            info!(path = %store.path().display(), "settings loaded");
            Box::new(store)
        }
        Err(e) => {
            warn!(error = %e, "no settings directory, progress will not be saved");
            Box::new(MemoryStore::new())
        }
    };

    let (width, height) = crossterm::terminal::size()?;
    let (board_w, board_h) = board_area(width, height);
    let config = GameConfig::for_terminal(board_w, board_h);
    let mut rng = rand::thread_rng();
    let mut session = Session::new(config, store, LogSink, &daily::today(), &mut rng)
        .map_err(io::Error::other)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session, &mut rng);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    if let Some(path) = log_path {
        info!(path = %path.display(), "exiting");
    }
    println!("Thanks for playing! High score: {}", session.profile().high_score);
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut AppSession,
    rng: &mut ThreadRng,
) -> io::Result<()> {
    let epoch = Instant::now();
    let mut ui_state = UiState::new();
    let mut last_date_check = 0;

    loop {
        let now = epoch.elapsed().as_millis() as u64;

        if now.saturating_sub(last_date_check) >= DATE_CHECK_MS {
            session.refresh_date(&daily::today(), rng);
            last_date_check = now;
        }

        let result = session.frame(now, rng);
        ui_state.absorb(&result, now);

        terminal.draw(|f| ui::draw(f, &*session, &ui_state, now))?;

        if event::poll(Duration::from_millis(REALTIME_FRAME_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = map_key(key, ui_state.screen) {
                    let now = epoch.elapsed().as_millis() as u64;
                    if !handle_action(action, session, &mut ui_state, now, rng) {
                        break;
                    }
                }
            }
        }
    }
    Ok(())
}

/// Apply one input action. Returns false when the player quits.
fn handle_action<S: KeyValueStore, A: AudioSink>(
    action: InputAction,
    session: &mut Session<S, A>,
    ui: &mut UiState,
    now: u64,
    rng: &mut ThreadRng,
) -> bool {
    match action {
        InputAction::Quit => return false,
        InputAction::Mute => session.toggle_mute(now),
        InputAction::Steer(input) => session.input(input),
        InputAction::Dash => session.request_dash(),
        InputAction::Pause => session.toggle_pause(now),
        InputAction::OpenShop => {
            ui.shop_cursor = 0;
            ui.open_shop();
        }
        InputAction::Back => ui.close_shop(),
        InputAction::CursorUp => {
            ui.shop_cursor = (ui.shop_cursor + SHOP_ROWS - 1) % SHOP_ROWS;
            ui.shop_notice = None;
        }
        InputAction::CursorDown => {
            ui.shop_cursor = (ui.shop_cursor + 1) % SHOP_ROWS;
            ui.shop_notice = None;
        }
        InputAction::Confirm => match ui.screen {
            Screen::Title | Screen::GameOver => {
                let high_score = session.profile().high_score;
                if session.start_run(now, rng) {
                    ui.begin_run(high_score);
                }
            }
            Screen::Shop => match shop_row(ui.shop_cursor) {
                ShopRow::Upgrade(id) => {
                    ui.shop_notice = session.buy_upgrade(id).err().map(|e| e.to_string());
                }
                ShopRow::Skin => {
                    let next = session.profile().skin.next();
                    session.select_skin(next);
                }
                ShopRow::Head => {
                    let next = session.profile().head.next();
                    session.select_head(next);
                }
            },
            Screen::Playing => {}
        },
    }
    true
}
