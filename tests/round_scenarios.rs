use std::time::Duration;

use trail_snake::body::BodySegment;
use trail_snake::config::{GRID, RestartPolicy};
use trail_snake::game::{GameEvent, GameState, GameStatus};
use trail_snake::grid::Position;
use trail_snake::input::{Direction, InputEvent, Key};
use trail_snake::snake::Snake;

const FRAME: Duration = Duration::from_millis(16);
const TURN_GAP: Duration = Duration::from_millis(50);

fn press(direction: Direction) -> [InputEvent; 1] {
    let key = match direction {
        Direction::Up => Key::Up,
        Direction::Down => Key::Down,
        Direction::Left => Key::Left,
        Direction::Right => Key::Right,
    };
    [InputEvent::KeyPress(key)]
}

/// Points a freshly spawned head right without letting it leave (10, 10).
fn steer_right(state: &mut GameState) {
    match state.snake.direction {
        Direction::Right => {}
        Direction::Up | Direction::Down => {
            state.frame(&press(Direction::Right), TURN_GAP);
        }
        Direction::Left => {
            state.frame(&press(Direction::Up), TURN_GAP);
            state.frame(&press(Direction::Right), TURN_GAP);
        }
    }
}

fn collide(state: &mut GameState) {
    let head = state.snake.position;
    let direction = state.snake.direction;
    let velocity = state.snake.velocity;
    let mut body = state.snake.body().to_vec();
    body.push(BodySegment::new(head, direction, velocity));

    state.snake = Snake::from_segments(head, direction, body);
    state.snake.velocity = velocity;
}

#[test]
fn head_reaching_apple_scores_and_grows() {
    for seed in 0..8 {
        let mut state = GameState::new_with_seed(RestartPolicy::KeepSnake, seed);
        assert_eq!(state.snake.position, Position::new(10, 10));

        steer_right(&mut state);
        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.snake.position, Position::new(10, 10));
        state.apple = Some(Position::new(12, 10));

        let mut snapshot = state.snapshot();
        for _ in 0..30 {
            snapshot = state.frame(&[], FRAME);
            if snapshot.head.x == 12 {
                break;
            }
        }

        assert_eq!(snapshot.head, Position::new(12, 10));
        assert_eq!(snapshot.score, 1);
        assert_eq!(snapshot.body, vec![Position::new(11, 10)]);
        assert_eq!(snapshot.apple, None);
        assert!(snapshot.events.contains(&GameEvent::AppleEaten { score: 1 }));
    }
}

#[test]
fn self_collision_ends_round_and_stops_apples() {
    let mut state = GameState::new_with_seed(RestartPolicy::KeepSnake, 17);
    state.snake.grow(GRID);
    collide(&mut state);

    let snapshot = state.frame(&[], FRAME);
    assert!(snapshot.game_over);
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(snapshot.overlay, Some("YOU LOST HAHA =)))"));

    for _ in 0..60 {
        let snapshot = state.frame(&[], FRAME);
        assert!(snapshot.game_over);
        assert_eq!(snapshot.apple, None);
    }
}

#[test]
fn death_animation_sheds_one_segment_per_interval() {
    let mut state = GameState::new_with_seed(RestartPolicy::KeepSnake, 23);
    for _ in 0..6 {
        state.snake.grow(GRID);
    }
    collide(&mut state);
    state.frame(&[], FRAME);
    assert_eq!(state.snake.body_len(), 7);

    for _ in 0..12 {
        state.frame(&[], Duration::from_millis(25));
    }
    assert_eq!(state.snake.body_len(), 4);
    assert!(state.is_death_animating());

    for _ in 0..10 {
        state.frame(&[], Duration::from_millis(100));
    }
    assert_eq!(state.snake.body_len(), 0);
    assert!(!state.is_death_animating());
    assert_eq!(state.status, GameStatus::GameOver);
}

#[test]
fn every_segment_turns_on_the_recorded_cell() {
    let corner = Position::new(5, 5);
    let mut snake = Snake::new(corner, Direction::Right);
    for _ in 0..4 {
        snake.grow(GRID);
    }
    assert!(snake.turn(Direction::Up));

    for _ in 0..40 {
        let before: Vec<Direction> = snake.body().iter().map(|s| s.direction).collect();
        snake.advance(GRID);

        for (segment, previous) in snake.body().iter().zip(before) {
            if segment.direction != previous {
                assert_eq!(segment.position, corner);
                assert_eq!(segment.direction, Direction::Up);
            }
            if segment.position.y == 5 && segment.position.x < 5 {
                assert_eq!(segment.direction, Direction::Right);
            }
        }
    }

    assert!(snake.body().iter().all(|s| s.direction == Direction::Up));
    assert!(snake.body().iter().all(|s| s.turns().is_empty()));
}

#[test]
fn snake_wraps_through_board_edge() {
    let mut snake = Snake::new(Position::new(19, 8), Direction::Right);
    snake.grow(GRID);
    snake.grow(GRID);

    for _ in 0..15 {
        snake.advance(GRID);
    }

    assert_eq!(snake.position, Position::new(2, 8));
    let cells: Vec<Position> = snake.body().iter().map(|s| s.position).collect();
    assert_eq!(cells, vec![Position::new(1, 8), Position::new(0, 8)]);
}

#[test]
fn restart_after_loss_resets_score_only_by_default() {
    let mut state = GameState::new_with_seed(RestartPolicy::KeepSnake, 31);
    state.score = 5;
    state.snake.grow(GRID);
    collide(&mut state);
    state.frame(&[], FRAME);
    for _ in 0..2 {
        state.frame(&[], Duration::from_millis(100));
    }
    assert_eq!(state.snake.body_len(), 0);

    let snapshot = state.frame(&[InputEvent::KeyPress(Key::Space)], Duration::ZERO);

    assert!(!snapshot.game_over);
    assert_eq!(snapshot.score, 0);
    assert!(snapshot.events.contains(&GameEvent::Restarted));
    assert_eq!(state.restart_policy(), RestartPolicy::KeepSnake);
}
