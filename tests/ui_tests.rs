use broadside::{
    format_coord, parse_coord, render_own_board, render_tracking_board, Board, Game, Orientation,
    Outcome,
};

#[test]
fn test_parse_coord_accepts_letter_then_row() {
    assert_eq!(parse_coord("A1"), Some((0, 0)));
    assert_eq!(parse_coord("b4"), Some((3, 1)));
    assert_eq!(parse_coord("J10"), Some((9, 9)));
    assert_eq!(parse_coord("  C7  "), Some((6, 2)));
}

#[test]
fn test_parse_coord_rejects_off_board_and_garbage() {
    assert_eq!(parse_coord(""), None);
    assert_eq!(parse_coord("A"), None);
    assert_eq!(parse_coord("A0"), None);
    assert_eq!(parse_coord("A11"), None);
    assert_eq!(parse_coord("K1"), None);
    assert_eq!(parse_coord("4B"), None);
    assert_eq!(parse_coord("!3"), None);
    assert_eq!(parse_coord("B4x"), None);
}

#[test]
fn test_format_coord_roundtrips() {
    assert_eq!(format_coord(3, 1), "B4");
    assert_eq!(format_coord(0, 0), "A1");
    assert_eq!(format_coord(9, 9), "J10");
    for row in 0..10 {
        for col in 0..10 {
            assert_eq!(parse_coord(&format_coord(row, col)), Some((row, col)));
        }
    }
}

fn corner_destroyer_game() -> Game {
    let mut player = Board::new();
    player.place(4, 0, 0, Orientation::Horizontal).unwrap();
    let mut computer = Board::new();
    computer.place(4, 0, 0, Orientation::Horizontal).unwrap();
    Game::with_boards(player, computer)
}

#[test]
fn test_tracking_board_never_shows_ships() {
    let mut game = corner_destroyer_game();
    assert!(!render_tracking_board(&game).contains('S'));

    assert_eq!(game.player_fire(0, 0).unwrap(), Outcome::Hit);
    let rendered = render_tracking_board(&game);
    assert!(rendered.contains('X'));
    assert!(!rendered.contains('S'));
}

#[test]
fn test_own_board_reveals_ships_and_shots() {
    let game = corner_destroyer_game();
    let rendered = render_own_board(&game);
    // two destroyer cells visible to the owner
    assert_eq!(rendered.matches('S').count(), 2);
    // column header and first row label present
    assert!(rendered.starts_with("    A B C D E F G H I J\n"));
    assert!(rendered.contains("\n 1 "));
}
