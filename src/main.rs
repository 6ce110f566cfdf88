//! Terminal gridfall runner.
//!
//! Owns the clock and the terminal; everything game-shaped happens inside
//! the pure [`Game`] value, folded over actions from the keyboard and a
//! fixed-interval tick.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::Game;
use gridfall::input::{map_key, should_quit};
use gridfall::term::TerminalRenderer;
use gridfall::types::{Action, TICK_INTERVAL_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = wall_clock_seed();
    let mut game = Game::new(seed);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_INTERVAL_MS as u64);

    loop {
        term.draw(&game.snapshot())?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(key) {
                        game = game.apply(action);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game = game.apply(Action::Tick);
        }
    }
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos())
        .unwrap_or(1)
}
