#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn delta_parses_signed_pairs() {
    assert_eq!(parse_delta("10,0"), Ok(Point::new(10.0, 0.0)));
    assert_eq!(parse_delta("-5, 5"), Ok(Point::new(-5.0, 5.0)));
}

#[test]
fn delta_rejects_garbage() {
    assert!(parse_delta("10").is_err());
    assert!(parse_delta("a,b").is_err());
}

#[test]
fn drag_command_collects_deltas() {
    let cli = Cli::try_parse_from([
        "stickerwall", "drag", "board.json", "--id", "7", "--delta", "10,0", "--delta", "10,0", "--delta", "-5,5",
    ])
    .unwrap();
    let Command::Drag { id, deltas, .. } = cli.command else {
        panic!("expected drag command");
    };
    assert_eq!(id, 7);
    let total = deltas.iter().fold(Point::default(), |acc, d| acc.offset(*d));
    assert_eq!(total, Point::new(15.0, 5.0));
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["stickerwall", "layout", "board.json", "--seed", "9", "--board-width", "640", "-v"])
        .unwrap();
    assert_eq!(cli.seed, Some(9));
    assert_eq!(cli.board_width, Some(640.0));
    assert!(cli.verbose);
}

#[test]
fn visible_defaults_scroll_to_top() {
    let cli = Cli::try_parse_from(["stickerwall", "visible", "board.json"]).unwrap();
    let Command::Visible(args) = cli.command else {
        panic!("expected visible command");
    };
    assert_eq!(args.scroll, 0.0);
    assert_eq!(args.viewport_width, None);
}

#[test]
fn viewport_falls_back_to_config() {
    let r = Resolved { params: LayoutParams::default(), config: WallConfig::default() };
    let args = ViewportArgs { board: PathBuf::from("b.json"), scroll: 300.0, viewport_width: Some(390.0), viewport_height: None };
    assert_eq!(r.viewport(&args), Viewport::new(300.0, 390.0, 800.0));
}
