use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use minigames_core::Storage;
use minigames_core::SnakeSession;
use minigames_core::snake::{SnakeStatus, TickOutcome};
use minigames_protocol::{Feedback, GameKind, SnakeEvent};

use super::is_quit;
use crate::present::Presenter;

/// Forwards stdin lines to the game loop so ticks keep running while waiting for keys.
pub fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Drives the tick loop until the player quits or input closes.
pub fn run<S: Storage>(
    session: &mut SnakeSession<S>,
    input: Receiver<String>,
    presenter: &mut Presenter<impl Write>,
) -> anyhow::Result<()> {
    presenter.note("w/a/s/d steer, space or p pauses, r restarts after game over, q quits.")?;
    show(session, presenter, Feedback::default())?;
    let mut next_tick = Instant::now();

    loop {
        let line = if session.game().status().is_running() {
            let wait = next_tick.saturating_duration_since(Instant::now());
            match input.recv_timeout(wait) {
                Ok(line) => Some(line),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        } else {
            match input.recv() {
                Ok(line) => Some(line),
                Err(_) => break,
            }
        };

        let Some(line) = line else {
            let outcome = session.tick();
            next_tick = Instant::now() + Duration::from_millis(session.game().speed_ms().into());
            if outcome.has_update() {
                show(session, presenter, tick_feedback(outcome, session.game().score()))?;
            }
            continue;
        };

        if is_quit(&line) {
            break;
        }
        let was_running = session.game().status().is_running();
        let feedback = match line.parse() {
            Ok(event) => match apply(session, event) {
                Some(feedback) => feedback,
                None => continue,
            },
            Err(err) => Feedback::toast(err.to_string()),
        };
        if !was_running && session.game().status().is_running() {
            next_tick = Instant::now() + Duration::from_millis(session.game().speed_ms().into());
        }
        show(session, presenter, feedback)?;
    }
    Ok(())
}

/// Runs one event, `None` when nothing visible changed.
pub fn apply<S: Storage>(session: &mut SnakeSession<S>, event: SnakeEvent) -> Option<Feedback> {
    let result = match event {
        SnakeEvent::Steer { direction } => {
            if !session.set_direction(direction).has_update() {
                return None;
            }
            // steering from the title screen starts the game
            if session.game().status() == SnakeStatus::Idle {
                session.start()
            } else {
                return None;
            }
        }
        SnakeEvent::Start => session.start(),
        SnakeEvent::Pause => session.pause(),
        SnakeEvent::Resume => session.resume(),
        SnakeEvent::TogglePause => session.toggle_pause(),
        SnakeEvent::Restart => {
            if session.game().status() != SnakeStatus::GameOver {
                return None;
            }
            session.restart();
            Ok(())
        }
    };
    Some(match result {
        Ok(()) => Feedback::default(),
        Err(err) => Feedback::from_error(err),
    })
}

fn tick_feedback(outcome: TickOutcome, score: u32) -> Feedback {
    match outcome {
        TickOutcome::GameOver {
            new_high_score: true,
        } => Feedback::toast(format!("Game over! New high score {score}")),
        TickOutcome::GameOver { .. } => Feedback::toast(format!("Game over! Score {score}")),
        _ => Feedback::default(),
    }
}

fn show<S: Storage>(
    session: &SnakeSession<S>,
    presenter: &mut Presenter<impl Write>,
    feedback: Feedback,
) -> anyhow::Result<()> {
    presenter.show(GameKind::Snake, &session.game().snapshot(), feedback)
}
