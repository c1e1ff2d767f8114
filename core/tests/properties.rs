use chrono::NaiveDate;
use minigames_core::connect_four::{COLS, ConnectFour, DropOutcome};
use minigames_core::snake::{Direction, Snake, SnakeConfig, SnakeStatus, TickOutcome};
use minigames_core::wordle::{WordList, Wordle};
use minigames_core::{Coord, GameError};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn random_game(rng: &mut SmallRng) -> ConnectFour {
    let mut game = ConnectFour::new();
    let moves = rng.random_range(0..42);
    for _ in 0..moves {
        let col: Coord = rng.random_range(0..COLS);
        match game.drop_piece(col) {
            Ok(outcome) if outcome.is_final() => break,
            Ok(_) | Err(GameError::ColumnFull(_)) => {}
            Err(err) => panic!("unexpected rejection {:?}", err),
        }
    }
    game
}

#[test]
fn connect_four_undo_matches_replay() {
    let mut rng = SmallRng::seed_from_u64(2024);

    for _ in 0..200 {
        let game = random_game(&mut rng);
        let history = game.move_history().to_vec();
        let Some((_, kept)) = history.split_last() else {
            continue;
        };

        let mut undone = game.clone();
        undone.undo().unwrap();

        assert_eq!(undone, ConnectFour::replay(kept).unwrap());
    }
}

#[test]
fn connect_four_gravity_holds_after_every_drop() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut game = ConnectFour::new();

    while !game.status().is_final() {
        let col: Coord = rng.random_range(0..COLS);
        let before = game.clone();
        match game.drop_piece(col) {
            Ok(_) => assert_eq!(game.board().piece_count(), before.board().piece_count() + 1),
            Err(GameError::ColumnFull(_)) => assert_eq!(game, before),
            Err(err) => panic!("unexpected rejection {:?}", err),
        }
        assert!(game.board().respects_gravity());
    }
}

#[test]
fn connect_four_restart_equals_fresh() {
    let mut rng = SmallRng::seed_from_u64(99);

    for _ in 0..50 {
        let mut game = random_game(&mut rng);
        if !game.status().is_final() && game.board().drop_row(3).is_some() {
            game.begin_drop(3).unwrap();
        }

        game.restart();

        assert_eq!(game, ConnectFour::new());
    }
}

#[test]
fn connect_four_ended_game_rejects_drops() {
    let mut game = ConnectFour::new();
    for col in [0, 1, 0, 1, 0, 1] {
        game.drop_piece(col).unwrap();
    }
    assert!(matches!(game.drop_piece(0), Ok(DropOutcome::Won(_))));
    let ended = game.clone();

    assert_eq!(game.drop_piece(4), Err(GameError::AlreadyEnded));
    assert_eq!(game, ended);
}

#[test]
fn snake_invariants_hold_under_random_steering() {
    let config = SnakeConfig::new((8, 8), 150, 5, 50);

    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut snake = Snake::new(config, 0, seed);
        snake.start().unwrap();

        while snake.status() == SnakeStatus::Playing {
            snake.set_direction(DIRECTIONS[rng.random_range(0..DIRECTIONS.len())]);
            assert_ne!(snake.next_direction(), snake.direction().opposite());

            let (len, score, speed) = (snake.len(), snake.score(), snake.speed_ms());
            match snake.tick() {
                TickOutcome::Ate => {
                    assert_eq!(snake.len(), len + 1);
                    assert_eq!(snake.score(), score + 10);
                    assert!(snake.speed_ms() < speed || speed == config.min_speed_ms);
                    assert!(snake.speed_ms() >= config.min_speed_ms);
                }
                TickOutcome::Moved => assert_eq!(snake.len(), len),
                TickOutcome::GameOver { .. } => assert_eq!(snake.len(), len),
                TickOutcome::Skipped => unreachable!("tick skipped while playing"),
            }

            if let Some(food) = snake.food() {
                assert!(!snake.occupies(food));
            }
        }

        let frozen = snake.snapshot();
        assert_eq!(snake.tick(), TickOutcome::Skipped);
        assert_eq!(snake.snapshot(), frozen);
    }
}

#[test]
fn snake_restart_equals_fresh_except_food() {
    let config = SnakeConfig::default();
    let mut snake = Snake::new(config, 40, 3);
    snake.start().unwrap();
    snake.set_direction(Direction::Up);
    while snake.status() != SnakeStatus::GameOver {
        snake.tick();
    }

    snake.restart();

    let mut fresh = Snake::new(config, snake.high_score(), 3);
    fresh.start().unwrap();
    let (mut restarted, mut fresh) = (snake.snapshot(), fresh.snapshot());
    restarted.food = None;
    fresh.food = None;
    assert_eq!(restarted, fresh);
}

#[test]
fn wordle_restart_equals_fresh() {
    let words = WordList::builtin();
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut game = Wordle::daily(&words, date);
    for letter in "SLATE".chars() {
        game.add_letter(letter).unwrap();
    }
    game.submit_guess(&words).unwrap();
    game.add_letter('A').unwrap();

    game.restart();

    assert_eq!(game, Wordle::daily(&words, date));
}
