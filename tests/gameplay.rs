//! Whole-game scenarios played through the turn API.

use escape_beast::engine::{Ending, Script};
use escape_beast::world::Weight;
use escape_beast::{DEFAULT_PLAYER_NAME, Game, load_default_world, load_world_from_str};

fn new_game() -> Game {
    Game::new(load_default_world().unwrap(), DEFAULT_PLAYER_NAME)
}

fn room_of(game: &Game) -> &str {
    &game.world.room(game.player.current_room()).id
}

/// Two rooms joined east-west, a pen in the second, and the given `[rules]` body.
fn tiny_game(rules: &str) -> Game {
    let src = format!(
        r#"
        [world]
        name = "Tiny"
        start_room = "a"

        [rules]
        {rules}

        [[room]]
        id = "a"
        desc = "in a"
        exit = [{{ direction = "east", target = "b" }}]

        [[room]]
        id = "b"
        desc = "in b"
        exit = [{{ direction = "west", target = "a" }}]

        [[item]]
        name = "pen"
        description = "A black pen"
        weight = 0.2
        room = "b"
        "#
    );
    Game::new(load_world_from_str(&src).unwrap(), DEFAULT_PLAYER_NAME)
}

/// Plays each line, asserting the game is still running afterwards.
fn play(game: &mut Game, lines: &[&str]) {
    for line in lines {
        let (_, ending) = game.step_line(line);
        assert_eq!(ending, None, "game ended early on '{line}'");
    }
}

#[test]
fn go_back_and_drop() {
    let mut game = new_game();
    assert_eq!(room_of(&game), "entrance");
    assert_eq!(game.player.max_weight(), Weight::from_milli(1000));

    play(&mut game, &["go north"]);
    assert_eq!(room_of(&game), "hallway");
    assert_eq!(game.player.moves(), 1);

    play(&mut game, &["go west"]);
    assert_eq!(room_of(&game), "bathroom");
    assert_eq!(game.player.moves(), 2);

    let (out, _) = game.step_line("take string");
    assert_eq!(out.text(), "You picked up A piece of nylon string");

    play(&mut game, &["go east"]);
    assert_eq!(room_of(&game), "hallway");
    assert_eq!(game.player.moves(), 3);

    play(&mut game, &["back"]);
    assert_eq!(room_of(&game), "bathroom");
    assert_eq!(game.player.moves(), 4);

    play(&mut game, &["drop string"]);
    assert!(game.player.items().is_empty());
    assert!(game.world.room(game.player.current_room()).items.contains("string"));
}

#[test]
fn tablet_is_too_heavy_to_carry() {
    let mut game = new_game();
    play(&mut game, &["go north", "go west", "go north"]);
    assert_eq!(room_of(&game), "kitchen");

    let (out, _) = game.step_line("take tablet");
    assert!(out.text().contains("You can't pick up the item: tablet"));
    assert!(game.player.items().is_empty());
    assert!(game.world.room(game.player.current_room()).items.contains("tablet"));
}

#[test]
fn sixteenth_move_kills() {
    let mut game = new_game();
    for i in 0..15 {
        let dir = if i % 2 == 0 { "go north" } else { "go south" };
        play(&mut game, &[dir]);
    }
    assert_eq!(game.player.moves(), 15);

    let (out, ending) = game.step_line("go south");
    assert_eq!(game.player.moves(), 16);
    assert_eq!(ending, Some(Ending::Dead));
    let text = out.text();
    assert!(text.contains("You were caught by the beast and lost the game."));
    assert!(text.contains("You didn't collect all 6 items in order to escape."));
    assert!(text.ends_with("Thank you for playing.  Good bye."));
}

#[test]
fn failed_moves_are_free() {
    let mut game = new_game();
    for _ in 0..30 {
        let (out, ending) = game.step_line("go west");
        assert_eq!(out.text(), "There is no door!");
        assert_eq!(ending, None);
    }
    play(&mut game, &["go", "back north", "xyzzy", "look", "items", "help"]);
    assert_eq!(game.player.moves(), 0);
}

#[test]
fn six_items_win() {
    let mut game = new_game();
    play(
        &mut game,
        &[
            "go north",
            "go upstairs",
            "eat apple",
            "go up",
            "take key",
            "go down",
            "go downstairs",
            "go west",
            "take string",
            "go north",
            "take tablet",
            "go north",
            "take knife",
            "go south",
            "go east",
            "take bread",
            "go south",
            "go east",
            "take pen",
            "go east",
        ],
    );
    assert_eq!(game.player.max_weight(), Weight::from_milli(2000));
    assert_eq!(game.player.carried_count(), 5);
    assert_eq!(game.player.moves(), 13);

    let (out, ending) = game.step_line("take torch");
    assert_eq!(ending, Some(Ending::Won));
    assert_eq!(game.player.carried_count(), 6);
    assert!(out.text().contains("You escaped the beast and won the game!"));
    assert!(!out.text().contains("caught by the beast"));
}

#[test]
fn eating_the_apple_removes_it_from_the_house() {
    let mut game = new_game();
    play(&mut game, &["go north", "go upstairs", "take apple"]);
    assert!(game.player.items().contains("apple"));

    let (out, _) = game.step_line("eat apple");
    assert!(out.text().contains("You ate a magic apple"));
    assert!(!game.player.items().contains("apple"));

    let total: usize = game.world.rooms().map(|(_, r)| r.items.count()).sum();
    assert_eq!(total, 7);

    let (out, _) = game.step_line("eat apple");
    assert_eq!(out.text(), "You can't eat apple!");
    assert_eq!(game.player.max_weight(), Weight::from_milli(2000));
}

#[test]
fn scripted_session_ends_on_quit() {
    let mut game = new_game();
    let mut script = Script::from_lines(["go north", "quit please", "quit", "go south"]);
    let mut transcript = Vec::new();

    let ending = game
        .run(&mut script, |out| transcript.push(out.text()))
        .unwrap();

    assert_eq!(ending, Ending::Quit);
    // welcome, go north, refused quit, quit
    assert_eq!(transcript.len(), 4);
    assert_eq!(transcript[2], "Quit what?");
    assert_eq!(game.player.moves(), 1);
}

#[test]
fn death_beats_victory_in_the_same_turn() {
    let mut game = tiny_game("max_moves = 0\nitems_to_win = 0");

    let (out, ending) = game.step_line("go east");
    assert_eq!(ending, Some(Ending::Dead));
    assert_eq!(game.ending(), Some(Ending::Dead));

    let text = out.text();
    assert!(text.contains("You were caught by the beast and lost the game."));
    assert!(text.contains("You didn't collect all 0 items"));
    assert!(!text.contains("You escaped the beast"));
    assert!(!text.contains("Congratulations!"));
    assert_eq!(text.matches("Thank you for playing.").count(), 1);
}

#[test]
fn custom_rules_win_on_one_item() {
    let mut game = tiny_game("items_to_win = 1");
    play(&mut game, &["go east"]);

    let (out, ending) = game.step_line("take pen");
    assert_eq!(ending, Some(Ending::Won));
    assert!(out.text().contains("You escaped the beast and won the game!"));
}

#[test]
fn custom_rules_die_on_third_move() {
    let mut game = tiny_game("max_moves = 2");
    play(&mut game, &["go east", "go west"]);

    let (out, ending) = game.step_line("go east");
    assert_eq!(ending, Some(Ending::Dead));
    assert!(out.text().contains("You didn't collect all 6 items"));

    let (out, ending) = game.step_line("go west");
    assert!(out.is_empty());
    assert_eq!(ending, Some(Ending::Dead));
}
