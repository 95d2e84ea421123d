//! Terminal Flappy Bird runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! The loop ticks the game at a fixed frame rate and polls input in between.

use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use tui_flappy::config::GameConfig;
use tui_flappy::core::{FrameSnapshot, Game};
use tui_flappy::input::InputHandler;
use tui_flappy::logging;
use tui_flappy::term::{FrameBuffer, FrameClock, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    if let Err(err) = logging::init(&config) {
        // The terminal is still in normal mode here.
        eprintln!("warning: logging disabled: {err:#}");
    }
    log::info!("starting ({} fps)", config.fps);

    let mut term = TerminalRenderer::new();
    if let Err(err) = term.enter() {
        let _ = term.exit();
        log::error!("terminal initialization failed: {err:#}");
        return Err(err.context("failed to initialize terminal"));
    }

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("game loop failed: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game = match config.seed {
        Some(seed) => Game::new(seed),
        None => Game::from_entropy(),
    };

    let view = GameView::default();
    let mut input = InputHandler::new().with_release_events(term.keyboard_enhanced());
    log::info!("key release events: {}", input.release_events());
    let mut clock = FrameClock::with_fps(config.fps);
    let mut snap = FrameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Tick and render.
        if clock.should_tick(Instant::now()) {
            game.tick(input.jump_held());
            game.snapshot_into(&mut snap);

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb).context("failed to present frame")?;
        }

        // Input with timeout until next frame.
        let timeout = clock.poll_timeout(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = input.handle_key(key) {
                        game.apply_action(action);
                    }
                    if game.quit_requested() {
                        return Ok(());
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
    }
}
