//! Terminal Blocktris runner (default binary).
//!
//! crossterm for input, a framebuffer-based renderer for output. Gravity is
//! driven from here; the engine only sees `move_block_down` calls.

mod cli;

use std::fs::File;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use blocktris::core::{gravity_delay_ms, GameSnapshot, GameState};
use blocktris::input::{handle_key_event, should_quit};
use blocktris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blocktris::types::GameAction;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    // Reject a bad grid before touching the terminal.
    let game = new_game(&cli)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli, game);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        error!(error = %err, "failed to restore terminal");
    }
    if let Err(err) = &result {
        error!(error = %err, "game loop failed");
    }
    result
}

/// Log to a file; the terminal belongs to the renderer.
fn init_logging(cli: &Cli) -> Result<()> {
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn new_game(cli: &Cli) -> Result<GameState> {
    let config = cli.game_config();
    let game = GameState::with_config(config).context("invalid game configuration")?;
    info!(
        rows = config.rows,
        columns = config.columns,
        seed = config.seed,
        "new game"
    );
    Ok(game)
}

fn run(term: &mut TerminalRenderer, cli: &Cli, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next gravity step.
        let tick = Duration::from_millis(u64::from(gravity_delay_ms(game.score())));
        let timeout = tick.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(GameAction::Restart) => {
                            debug!(score = game.score(), "restart requested");
                            game = new_game(cli)?;
                            last_tick = Instant::now();
                        }
                        Some(action) => game.apply_action(action),
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            if !game.game_over() {
                game.move_block_down();
            }
        }
    }
}
