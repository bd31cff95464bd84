use flood_core::*;
use serde_json::json;

fn grid(value: serde_json::Value) -> Grid {
    serde_json::from_value(value).unwrap()
}

#[test]
fn move_absorbs_matching_neighbor() {
    let input = grid(json!([
        [{"color": "yellow", "included": false}, {"color": "yellow", "included": false}],
        [{"color": "red", "included": false}, {"color": "yellow", "included": false}],
    ]));

    let state = apply_move(Color::Red, input, ORIGIN).unwrap();

    assert_eq!(
        serde_json::to_value(&state).unwrap(),
        json!({
            "grid": [
                [{"color": "red", "included": true}, {"color": "yellow", "included": false}],
                [{"color": "red", "included": true}, {"color": "yellow", "included": false}],
            ],
            "gameWon": false,
            "color": "red",
        })
    );
}

#[test]
fn move_that_claims_every_tile_wins() {
    let input = grid(json!([
        [{"color": "red", "included": true}, {"color": "yellow", "included": false}],
        [{"color": "red", "included": true}, {"color": "yellow", "included": false}],
    ]));

    let state = play_move(input, Color::Yellow);

    assert_eq!(
        serde_json::to_value(&state).unwrap(),
        json!({
            "grid": [
                [{"color": "yellow", "included": true}, {"color": "yellow", "included": true}],
                [{"color": "yellow", "included": true}, {"color": "yellow", "included": true}],
            ],
            "gameWon": true,
            "color": "yellow",
        })
    );
    assert_eq!(state.status(), GameStatus::Won);
}

#[test]
fn move_with_region_color_leaves_grid_unchanged() {
    let input = grid(json!([
        [{"color": "green", "included": true}, {"color": "blue", "included": false}],
        [{"color": "red", "included": false}, {"color": "green", "included": false}],
    ]));

    let state = play_move(input.clone(), Color::Green);

    assert_eq!(state.grid, input);
    assert!(!state.game_won);
}

#[test]
fn won_detection_on_fixtures() {
    let claimed = grid(json!([
        [{"color": "red", "included": true}, {"color": "red", "included": true}, {"color": "red", "included": true}, {"color": "red", "included": true}],
        [{"color": "red", "included": true}, {"color": "red", "included": true}, {"color": "red", "included": true}, {"color": "red", "included": true}],
        [{"color": "red", "included": true}, {"color": "red", "included": true}, {"color": "red", "included": true}, {"color": "red", "included": true}],
        [{"color": "red", "included": true}, {"color": "red", "included": true}, {"color": "red", "included": true}, {"color": "red", "included": true}],
    ]));
    let unclaimed = grid(json!([
        [{"color": "red", "included": true}, {"color": "red", "included": true}, {"color": "red", "included": true}, {"color": "red", "included": true}],
        [{"color": "red", "included": true}, {"color": "red", "included": true}, {"color": "red", "included": true}, {"color": "red", "included": true}],
        [{"color": "red", "included": true}, {"color": "red", "included": true}, {"color": "red", "included": true}, {"color": "red", "included": true}],
        [{"color": "red", "included": false}, {"color": "red", "included": false}, {"color": "red", "included": false}, {"color": "red", "included": true}],
    ]));

    assert!(is_won(&claimed));
    assert!(!is_won(&unclaimed));
}

#[test]
fn history_entries_do_not_alias() {
    let mut rng = <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(4);
    let new_game = create_game(6, 3, &mut rng).unwrap();

    let first = play_move(new_game.initial.grid.clone(), Color::Yellow);
    let second = play_move(first.grid.clone(), Color::Green);

    assert_eq!(new_game.initial.grid.included_count(), 0);
    assert!(first.grid.included_count() <= second.grid.included_count());
    assert_eq!(first.color, Some(Color::Yellow));
    assert_eq!(second.color, Some(Color::Green));
}
