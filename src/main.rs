mod board;
mod config;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;
use wall::consts::{VIRTUAL_PADDING, VIRTUAL_ROW_HEIGHT};
use wall::cull::{ItemBox, virtual_window, visible};
use wall::doc::ItemId;
use wall::engine::EngineCore;
use wall::geom::{Point, Viewport};
use wall::input::UiState;
use wall::layout::{LayoutParams, board_height, layout};
use wall::order::{dimmed_ids, draw_order};
use wall::scene::build_scene;

use crate::board::{BoardError, BoardFile};
use crate::config::{ConfigError, WallConfig};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("item {0} not found or cannot be dragged")]
    NotDraggable(ItemId),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "stickerwall", about = "Inspect sticker wall layouts from the command line")]
struct Cli {
    /// Layout seed (overrides WALL_SEED).
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Board width in pixels (overrides the board file and WALL_BOARD_WIDTH).
    #[arg(long, global = true)]
    board_width: Option<f64>,

    /// Log filter directive.
    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    log: String,

    /// Shorthand for `--log debug`.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolved position and rotation of every item.
    Layout { board: PathBuf },
    /// Ids of the items that survive viewport culling.
    Visible(ViewportArgs),
    /// Draw order, bottom first, with z and dimming.
    Order {
        board: PathBuf,
        #[arg(long)]
        focus: Option<ItemId>,
        #[arg(long)]
        hover: Option<ItemId>,
    },
    /// Replay a drag gesture and print the final stored position.
    Drag {
        board: PathBuf,
        #[arg(long)]
        id: ItemId,
        /// Relative move `dx,dy`; repeat for each pointer event.
        #[arg(long = "delta", value_parser = parse_delta, allow_hyphen_values = true)]
        deltas: Vec<Point>,
    },
    /// Full per-frame scene for a viewport.
    Scene(ViewportArgs),
}

#[derive(Args, Debug)]
struct ViewportArgs {
    board: PathBuf,
    #[arg(long, default_value_t = 0.0)]
    scroll: f64,
    #[arg(long)]
    viewport_width: Option<f64>,
    #[arg(long)]
    viewport_height: Option<f64>,
}

/// Settings after layering flags over the board file over the environment.
#[derive(Debug, Clone, Copy)]
struct Resolved {
    params: LayoutParams,
    config: WallConfig,
}

impl Resolved {
    fn viewport(&self, args: &ViewportArgs) -> Viewport {
        Viewport::new(
            args.scroll,
            args.viewport_width.unwrap_or(self.config.viewport_width),
            args.viewport_height.unwrap_or(self.config.viewport_height),
        )
    }
}

fn main() {
    let cli = Cli::parse();
    let filter = if cli.verbose { "debug".to_string() } else { cli.log.clone() };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = WallConfig::from_env()?;
    let seed = cli.seed.unwrap_or(config.seed);

    let resolve = |board: &BoardFile| Resolved {
        params: LayoutParams {
            seed,
            board_width: cli.board_width.or(board.board_width).unwrap_or(config.board_width),
        },
        config,
    };

    match cli.command {
        Command::Layout { board } => {
            let board = BoardFile::load(&board)?;
            let r = resolve(&board);
            print_json(&serde_json::to_value(layout(&board.items, &r.params))?)
        }
        Command::Visible(args) => {
            let board = BoardFile::load(&args.board)?;
            let r = resolve(&board);
            let viewport = r.viewport(&args);
            let boxes: Vec<ItemBox> = board
                .items
                .iter()
                .zip(layout(&board.items, &r.params))
                .map(|(item, placement)| ItemBox::new(item, &placement))
                .collect();
            let ids = visible(&boxes, &viewport, r.config.cull_buffer);
            let window = virtual_window(board.items.len(), &viewport, VIRTUAL_ROW_HEIGHT, VIRTUAL_PADDING);
            print_json(&json!({
                "visible": ids,
                "board_height": board_height(board.items.len()),
                "rows": { "start": window.start, "end": window.end, "offset_y": window.offset_y },
            }))
        }
        Command::Order { board, focus, hover } => {
            let board = BoardFile::load(&board)?;
            let dimmed = dimmed_ids(&board.items, focus);
            let interacting: Vec<ItemId> = hover.into_iter().collect();
            let entries: Vec<Value> = draw_order(&board.items, &interacting)
                .into_iter()
                .map(|e| json!({ "id": e.id, "z": e.z, "dimmed": dimmed.contains(&e.id) }))
                .collect();
            print_json(&Value::Array(entries))
        }
        Command::Drag { board, id, deltas } => {
            let board = BoardFile::load(&board)?;
            let r = resolve(&board);
            let mut engine = EngineCore::with_config(r.params.seed, r.params.board_width);
            engine.load_snapshot(board.items);
            if !engine.on_drag_start(0, id) {
                return Err(CliError::NotDraggable(id));
            }
            for delta in deltas {
                engine.on_drag_move(0, delta);
            }
            let actions = engine.on_drag_end(0);
            print_json(&serde_json::to_value(actions)?)
        }
        Command::Scene(args) => {
            let board = BoardFile::load(&args.board)?;
            let r = resolve(&board);
            let scene = build_scene(&board.items, &UiState::default(), &r.viewport(&args), &r.params, &[]);
            print_json(&serde_json::to_value(scene)?)
        }
    }
}

fn parse_delta(raw: &str) -> Result<Point, String> {
    let (dx, dy) = raw.split_once(',').ok_or_else(|| format!("expected dx,dy, got {raw:?}"))?;
    let parse = |s: &str| s.trim().parse::<f64>().map_err(|e| format!("{s:?}: {e}"));
    Ok(Point::new(parse(dx)?, parse(dy)?))
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
