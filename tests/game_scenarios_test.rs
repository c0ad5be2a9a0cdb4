//! Whole-game scenarios driven through the headless platform.

use memory_puzzle::core::{Board, GameConfig, TurnPhase};
use memory_puzzle::engine::{DrawOp, Flow, Game, HeadlessPlatform};
use memory_puzzle::types::{CellPos, Icon, InputEvent, Key, Point, Shape, BLUE, RED};

const DONUT_RED: Icon = Icon::new(Shape::Donut, RED);
const SQUARE_BLUE: Icon = Icon::new(Shape::Square, BLUE);

fn small_config() -> GameConfig {
    GameConfig {
        board_width: 2,
        board_height: 2,
        ..GameConfig::default()
    }
}

/// (0,0)=donut red, (0,1)=square blue, (1,0)=square blue, (1,1)=donut red
fn small_board() -> Board {
    Board::from_icons(2, 2, vec![DONUT_RED, SQUARE_BLUE, SQUARE_BLUE, DONUT_RED]).unwrap()
}

fn click_at(game: &Game<HeadlessPlatform>, cell: CellPos) -> Vec<InputEvent> {
    let p = game.layout().cell_to_pixel(cell);
    vec![InputEvent::PointerUp(Point::new(p.x + 3, p.y + 3))]
}

fn small_game(cells: &[CellPos]) -> Game<HeadlessPlatform> {
    // Build once to learn the layout, then again with the script.
    let probe = Game::with_board(small_config(), HeadlessPlatform::new(640, 480), small_board(), 1)
        .unwrap();
    let script: Vec<_> = cells.iter().map(|&c| click_at(&probe, c)).collect();
    let platform = HeadlessPlatform::new(640, 480)
        .with_script(script)
        .quit_when_script_ends();
    Game::with_board(small_config(), platform, small_board(), 1).unwrap()
}

fn fills(game: &Game<HeadlessPlatform>, color: memory_puzzle::types::Rgb) -> usize {
    game.platform()
        .canvas_ref()
        .ops()
        .iter()
        .filter(|op| **op == DrawOp::Fill(color))
        .count()
}

#[test]
fn same_cell_twice_reveals_once() {
    let a = CellPos::new(0, 0);
    let mut game = small_game(&[a, a]);

    game.step().unwrap();
    assert_eq!(game.platform().presents(), 8);

    game.step().unwrap();
    // Only the regular frame; no second reveal animation.
    assert_eq!(game.platform().presents(), 9);
    assert_eq!(game.phase(), TurnPhase::OneSelected(a));
    assert!(game.revealed().is_revealed(a));
    assert_eq!(game.revealed().revealed_count(), 1);
}

#[test]
fn mismatch_pauses_then_covers_both() {
    let (a, b) = (CellPos::new(0, 0), CellPos::new(1, 0));
    let mut game = small_game(&[a, b]);
    assert_eq!(game.board().icon(a), Some(DONUT_RED));
    assert_eq!(game.board().icon(b), Some(SQUARE_BLUE));

    game.step().unwrap();
    game.step().unwrap();

    assert_eq!(game.platform().waits(), &[1000]);
    assert!(!game.revealed().is_revealed(a));
    assert!(!game.revealed().is_revealed(b));
    assert_eq!(game.phase(), TurnPhase::Idle);
    // First pick: 7 + 1. Second: 7 reveal + 6 cover + 1.
    assert_eq!(game.platform().presents(), 8 + 14);
}

#[test]
fn match_stays_revealed_without_pause() {
    let (a, b) = (CellPos::new(0, 0), CellPos::new(1, 1));
    let mut game = small_game(&[a, b]);

    game.step().unwrap();
    game.step().unwrap();

    assert!(game.revealed().is_revealed(a));
    assert!(game.revealed().is_revealed(b));
    assert!(game.platform().waits().is_empty());
    assert_eq!(game.platform().presents(), 8 + 8);
    assert_eq!(game.phase(), TurnPhase::Idle);
    assert_eq!(game.rounds_won(), 0);
}

#[test]
fn clearing_the_board_flashes_resets_and_previews() {
    let cells = [
        CellPos::new(0, 0),
        CellPos::new(1, 1),
        CellPos::new(0, 1),
        CellPos::new(1, 0),
    ];
    let mut game = small_game(&cells);
    let theme = small_config().theme;

    for _ in 0..3 {
        assert_eq!(game.step().unwrap(), Flow::Continue);
    }
    let before = game.platform().presents();
    let light_before = fills(&game, theme.light_background);
    assert_eq!(light_before, 0);

    assert_eq!(game.step().unwrap(), Flow::Continue);

    assert_eq!(game.rounds_won(), 1);
    assert_eq!(game.revealed().revealed_count(), 0);
    assert_eq!(game.phase(), TurnPhase::Idle);

    // One flash: 13 cycles, the light color on every other one.
    assert_eq!(fills(&game, theme.light_background), 6);
    let mut expected_waits = vec![300; 13];
    expected_waits.extend([2000, 2000]);
    assert_eq!(game.platform().waits(), expected_waits.as_slice());

    // reveal 7 + flash 13 + fresh board 1 + preview (one group) 13 + frame 1
    assert_eq!(game.platform().presents() - before, 35);

    // The new board is still perfectly paired.
    let mut icons = game.board().icons().to_vec();
    icons.sort_by_key(|i| (i.shape.as_str(), i.color.r, i.color.g, i.color.b));
    assert_eq!(icons[0], icons[1]);
    assert_eq!(icons[2], icons[3]);

    assert_eq!(game.step().unwrap(), Flow::Quit);
}

#[test]
fn clicks_during_animation_are_dropped() {
    let a = CellPos::new(0, 0);
    let mut game = small_game(&[a]);
    let b = game.layout().cell_to_pixel(CellPos::new(1, 0));
    game.platform_mut()
        .push_during_sleep([InputEvent::PointerUp(Point::new(b.x + 1, b.y + 1))]);

    game.step().unwrap();
    game.step().unwrap();

    assert_eq!(game.revealed().revealed_count(), 1);
    assert_eq!(game.phase(), TurnPhase::OneSelected(a));
}

#[test]
fn hover_highlights_covered_tiles_only() {
    let a = CellPos::new(0, 0);
    let probe = small_game(&[]);
    let p = probe.layout().cell_to_pixel(a);
    let highlight = probe.layout().highlight_rect(a);

    let platform = HeadlessPlatform::new(640, 480)
        .with_script([
            vec![InputEvent::PointerMove(Point::new(p.x + 5, p.y + 5))],
            vec![InputEvent::PointerUp(Point::new(p.x + 5, p.y + 5))],
            vec![],
        ])
        .quit_when_script_ends();
    let mut game = Game::with_board(small_config(), platform, small_board(), 1).unwrap();
    let outline = DrawOp::RectOutline(BLUE, highlight, 4);
    let outlines = |g: &Game<HeadlessPlatform>| {
        g.platform()
            .canvas_ref()
            .ops()
            .iter()
            .filter(|op| **op == outline)
            .count()
    };

    game.step().unwrap();
    assert_eq!(outlines(&game), 1);
    game.step().unwrap();
    assert_eq!(outlines(&game), 2);
    // Now revealed: no more highlight.
    game.step().unwrap();
    assert_eq!(outlines(&game), 2);
}

#[test]
fn quit_during_preview_stops_immediately() {
    let platform = HeadlessPlatform::new(640, 480).quit_after_ticks(5);
    let mut game = Game::new(GameConfig::default(), platform, 3).unwrap();

    game.run().unwrap();
    assert_eq!(game.platform().ticks(), 5);
    assert_eq!(game.platform().presents(), 5);
}

#[test]
fn escape_during_preview_stops_immediately() {
    let platform = HeadlessPlatform::new(640, 480);
    let mut game = Game::new(GameConfig::default(), platform, 3).unwrap();
    game.platform_mut()
        .push_during_sleep([InputEvent::KeyUp(Key::Escape)]);

    assert_eq!(game.start().unwrap(), Flow::Quit);
    assert_eq!(game.platform().ticks(), 1);
    assert_eq!(game.platform().presents(), 1);
    assert_eq!(game.step().unwrap(), Flow::Quit);
}

#[test]
fn escape_during_mismatch_pause_skips_cover() {
    let (a, b) = (CellPos::new(0, 0), CellPos::new(1, 0));
    let mut game = small_game(&[a, b]);
    game.step().unwrap();

    // Seven reveal ticks pass, then Escape arrives during the pause.
    game.platform_mut()
        .push_after_sleeps(7, [InputEvent::KeyUp(Key::Escape)]);
    assert_eq!(game.step().unwrap(), Flow::Quit);
    assert_eq!(game.platform().waits(), &[1000]);
    assert_eq!(game.platform().presents(), 8 + 7);
}

#[test]
fn escape_during_win_flash_stops_the_sequence() {
    let cells = [
        CellPos::new(0, 0),
        CellPos::new(1, 1),
        CellPos::new(0, 1),
        CellPos::new(1, 0),
    ];
    let mut game = small_game(&cells);
    for _ in 0..3 {
        game.step().unwrap();
    }
    let before = game.platform().presents();

    // Arrives during the first flash hold, after the seven reveal ticks.
    game.platform_mut()
        .push_after_sleeps(7, [InputEvent::KeyUp(Key::Escape)]);
    assert_eq!(game.step().unwrap(), Flow::Quit);

    assert_eq!(game.rounds_won(), 1);
    assert_eq!(game.platform().waits(), &[300]);
    assert_eq!(game.platform().presents() - before, 7 + 1);
    // No fresh board, no preview.
    assert_eq!(game.board(), &small_board());
    assert_eq!(fills(&game, small_config().theme.light_background), 0);
}

#[test]
fn quit_during_second_reveal_skips_pause_and_cover() {
    let (a, b) = (CellPos::new(0, 0), CellPos::new(1, 0));
    let mut game = small_game(&[a, b]);
    game.step().unwrap();

    game.platform_mut().push_during_sleep([InputEvent::Quit]);
    assert_eq!(game.step().unwrap(), Flow::Quit);
    // Stopped after the first reveal frame of the second pick.
    assert_eq!(game.platform().presents(), 8 + 1);
    assert!(game.platform().waits().is_empty());
}

#[test]
fn mismatched_board_dimensions_are_rejected() {
    let platform = HeadlessPlatform::new(640, 480);
    assert!(Game::with_board(GameConfig::default(), platform, small_board(), 1).is_err());
}

#[test]
fn same_seed_same_session() {
    let a = Game::new(GameConfig::default(), HeadlessPlatform::new(640, 480), 42).unwrap();
    let b = Game::new(GameConfig::default(), HeadlessPlatform::new(640, 480), 42).unwrap();
    assert_eq!(a.board(), b.board());
}
