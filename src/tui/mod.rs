//! Terminal UI: rendering, input handling, and the deferred computer turn.

mod app;
mod computer;
mod input;
mod rate_limit;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{error, info};

use app::App;
use computer::GameEvent;
use rate_limit::RateLimiter;

use crate::cli::Cli;
use crate::session::COMPUTER_MARK;

/// Runs the game until the user quits.
pub async fn run(cli: &Cli) -> Result<()> {
    anyhow::ensure!(
        cli.think_ms_min <= cli.think_ms_max,
        "--think-ms-min must not exceed --think-ms-max"
    );

    // Log to a file while the TUI owns the terminal.
    let log_file = std::fs::File::create(&cli.log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(seed = ?cli.seed, "starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, cli).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "game loop error");
    }
    res
}

/// The event loop: draw, drain computer-move events, handle one key.
async fn run_game<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    cli: &Cli,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut app = App::new();
    let mut limiter = RateLimiter::new(Duration::from_millis(cli.tap_interval_ms));
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        while let Ok(game_event) = event_rx.try_recv() {
            app.handle_event(game_event);
        }

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    info!("user quit");
                    return Ok(());
                }
                KeyCode::Char('r') | KeyCode::Char('R') => app.reset(),
                KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                    app.move_cursor(key.code);
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let cursor = app.cursor();
                    place(&mut app, cursor, &mut limiter, &mut rng, cli, &event_tx);
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if let Some(digit) = c.to_digit(10) {
                        if (1..=9).contains(&digit) {
                            place(
                                &mut app,
                                digit as usize - 1,
                                &mut limiter,
                                &mut rng,
                                cli,
                                &event_tx,
                            );
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

/// Feeds one placement attempt through the rate limiter and, when the move
/// lands and the game goes on, schedules the computer's reply.
fn place(
    app: &mut App,
    index: usize,
    limiter: &mut RateLimiter,
    rng: &mut StdRng,
    cli: &Cli,
    event_tx: &mpsc::UnboundedSender<GameEvent>,
) {
    // Thinking guard first: a tap swallowed by it should not re-arm the
    // rate limiter.
    if app.thinking() || !limiter.accept() {
        return;
    }
    if app.human_place(index) {
        let think_time =
            Duration::from_millis(rng.gen_range(cli.think_ms_min..=cli.think_ms_max));
        computer::schedule_move(
            app.session().board().clone(),
            COMPUTER_MARK,
            think_time,
            rng.next_u64(),
            event_tx.clone(),
        );
    }
}
