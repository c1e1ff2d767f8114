use std::io::{BufRead, Write};

use minigames_core::wordle::{Statistics, WordleSnapshot, WordleStatus};
use minigames_core::{Storage, WordleSession};
use minigames_protocol::{Feedback, GameKind, WordleEvent};
use serde::Serialize;

use super::is_quit;
use crate::present::{Presenter, Render};

/// Board plus what is shown once the game is decided.
#[derive(Debug, Serialize)]
pub struct WordleView {
    #[serde(flatten)]
    pub game: WordleSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<String>,
}

impl WordleView {
    pub fn of<S: Storage>(session: &WordleSession<S>) -> Self {
        let decided = session.game().status().is_final();
        Self {
            game: session.game().snapshot(),
            statistics: decided.then(|| session.statistics().clone()),
            share: decided.then(|| session.game().share_text()),
        }
    }
}

impl Render for WordleView {
    fn render(&self) -> String {
        let mut text = self.game.render();
        if let Some(statistics) = &self.statistics {
            text.push('\n');
            text.push_str(&statistics.render());
        }
        if let Some(share) = &self.share {
            text.push('\n');
            text.push_str(share);
            text.push('\n');
        }
        text
    }
}

pub fn run<S: Storage>(
    session: &mut WordleSession<S>,
    input: impl BufRead,
    presenter: &mut Presenter<impl Write>,
) -> anyhow::Result<()> {
    presenter.note("Type a word and press enter, - deletes a letter, q quits.")?;
    presenter.show(GameKind::Wordle, &WordleView::of(session), Feedback::default())?;

    for line in input.lines() {
        let line = line?;
        if is_quit(&line) {
            break;
        }
        let feedback = match WordleEvent::parse_line(&line) {
            Ok(events) => events
                .into_iter()
                .map(|event| apply(session, event))
                .fold(Feedback::default(), |shown, next| if next.is_empty() { shown } else { next }),
            Err(err) => Feedback::toast(err.to_string()),
        };
        presenter.show(GameKind::Wordle, &WordleView::of(session), feedback)?;
    }
    Ok(())
}

/// Presses one key, rejected guesses come back as a toast with a shake.
pub fn apply<S: Storage>(session: &mut WordleSession<S>, event: WordleEvent) -> Feedback {
    match event {
        WordleEvent::Letter { letter } => match session.add_letter(letter) {
            Ok(_) => Feedback::default(),
            Err(err) => Feedback::from_error(err),
        },
        WordleEvent::Backspace => {
            session.delete_letter();
            Feedback::default()
        }
        WordleEvent::Enter if session.game().status() != WordleStatus::Playing => {
            Feedback::default()
        }
        WordleEvent::Enter => match session.submit_guess() {
            Ok(outcome) => Feedback::from_guess(&outcome),
            Err(err) => Feedback::from_error(err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use minigames_core::MemoryStorage;
    use minigames_core::wordle::WordList;
    use std::io::Cursor;

    fn session() -> WordleSession<MemoryStorage> {
        let words = WordList::new(["CRANE"], ["SLATE", "TRACE"]).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        WordleSession::new(words, MemoryStorage::new(), today)
    }

    #[test]
    fn unknown_word_shakes_and_keeps_the_letters() {
        let mut session = session();

        for letter in "ZZZZZ".chars() {
            apply(&mut session, WordleEvent::Letter { letter });
        }
        let feedback = apply(&mut session, WordleEvent::Enter);

        assert!(feedback.shake);
        assert_eq!(feedback.toast.as_deref(), Some("Not in word list"));
        assert_eq!(session.game().current_guess(), "ZZZZZ");
    }

    #[test]
    fn winning_line_shows_statistics_and_share_text() {
        let mut session = session();
        let input = Cursor::new("slate\ncrane\n");
        let mut presenter = Presenter::new(Vec::new(), false);

        run(&mut session, input, &mut presenter).unwrap();

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(out.contains("* Magnificent! *"));
        assert!(out.contains("Played 1  Win % 100"));
        assert!(out.contains("Wordle 2/6\n\n"));
        assert_eq!(session.statistics().games_won, 1);
    }

    #[test]
    fn view_hides_extras_while_playing() {
        let session = session();

        let view = WordleView::of(&session);

        assert!(view.statistics.is_none());
        assert!(view.share.is_none());
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains(r#""status":"Playing""#));
        assert!(!json.contains("share"));
    }
}
