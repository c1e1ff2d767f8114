use std::io::{BufRead, Write};

use minigames_core::connect_four::{ConnectFour, DropOutcome};
use minigames_protocol::{ConnectFourEvent, Feedback, GameKind};

use super::is_quit;
use crate::present::Presenter;

pub fn run(input: impl BufRead, presenter: &mut Presenter<impl Write>) -> anyhow::Result<()> {
    let mut game = ConnectFour::new();
    presenter.note("Columns 1-7 drop a piece, u undoes, r restarts, q quits.")?;
    presenter.show(GameKind::ConnectFour, &game.snapshot(), Feedback::default())?;

    for line in input.lines() {
        let line = line?;
        if is_quit(&line) {
            break;
        }
        let feedback = match line.parse() {
            Ok(event) => apply(&mut game, event),
            Err(err) => {
                log::debug!("Ignoring input {:?}: {}", line, err);
                Feedback::toast(err.to_string())
            }
        };
        presenter.show(GameKind::ConnectFour, &game.snapshot(), feedback)?;
    }
    Ok(())
}

/// Runs one event against the game, rejections only produce a toast.
pub fn apply(game: &mut ConnectFour, event: ConnectFourEvent) -> Feedback {
    let result = match event {
        ConnectFourEvent::Drop { column } => game.drop_piece(column).map(|outcome| match outcome {
            DropOutcome::Won(player) => Feedback {
                toast: Some(format!("{player:?} wins!")),
                bounce: true,
                ..Default::default()
            },
            DropOutcome::Draw => Feedback::toast("It's a draw!"),
            DropOutcome::Placed(_) => Feedback::default(),
        }),
        ConnectFourEvent::Undo => game.undo().map(|()| Feedback::default()),
        ConnectFourEvent::Restart => {
            game.restart();
            Ok(Feedback::default())
        }
    };
    result.unwrap_or_else(Feedback::from_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minigames_core::connect_four::Player;
    use std::io::Cursor;

    #[test]
    fn apply_reports_wins_and_rejections() {
        let mut game = ConnectFour::new();
        for column in [0, 1, 0, 1, 0, 1] {
            assert!(apply(&mut game, ConnectFourEvent::Drop { column }).is_empty());
        }

        let feedback = apply(&mut game, ConnectFourEvent::Drop { column: 0 });
        assert_eq!(feedback.toast.as_deref(), Some("Red wins!"));
        assert_eq!(game.winner(), Some(Player::Red));

        let feedback = apply(&mut game, ConnectFourEvent::Drop { column: 3 });
        assert_eq!(
            feedback.toast.as_deref(),
            Some("Game already ended, no new moves are accepted")
        );

        assert!(apply(&mut game, ConnectFourEvent::Undo).is_empty());
        assert_eq!(game.move_history().len(), 6);
    }

    #[test]
    fn session_emits_a_frame_per_line() {
        let input = Cursor::new("4\n4\nnope\nu\nq\n4\n");
        let mut presenter = Presenter::new(Vec::new(), true);

        run(input, &mut presenter).unwrap();

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        let frames: Vec<&str> = out.lines().collect();
        assert_eq!(frames.len(), 5);
        assert!(frames[3].contains(r#""toast":"Unknown input \"nope\"""#));
        assert!(frames[4].contains(r#""move_history":[3]"#));
    }
}
