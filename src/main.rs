use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_engine::ai::{Engine, MoveMode};
use connect_engine::config::EngineConfig;
use connect_engine::game::Player;

/// Recommend a column for a Connect-4-style position.
#[derive(Parser)]
#[command(
    name = "connect-engine",
    about = "Recommend a move for a Connect-4-style position"
)]
struct Cli {
    /// JSON file holding the grid as an array of rows (0 empty, 1 and 2
    /// pieces), or `-` for stdin
    #[arg(long, default_value = "-")]
    grid: PathBuf,

    /// Piece to move for: 1 or 2
    #[arg(long)]
    piece: Option<u8>,

    /// Override search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override run length needed to win
    #[arg(long)]
    connect: Option<usize>,

    /// Override the expected number of grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override the expected number of grid columns
    #[arg(long)]
    columns: Option<usize>,

    /// Override how the search produces child positions
    #[arg(long, value_enum)]
    mode: Option<MoveMode>,

    /// Fix the tie-breaking seed
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-engine.toml")]
    config: PathBuf,

    /// The first grid row is the top of the board (default: the bottom)
    #[arg(long)]
    top_first: bool,

    /// Print the board to stderr before answering
    #[arg(long)]
    show: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", EngineConfig::default_toml());
        return Ok(());
    }

    let Some(piece) = cli.piece else {
        bail!("--piece is required (1 or 2)");
    };
    let player = Player::from_piece(piece)?;

    // Load configuration
    let mut config = EngineConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(connect) = cli.connect {
        config.board.connect = connect;
    }
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.board.columns = columns;
    }
    if let Some(mode) = cli.mode {
        config.search.mode = mode;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let grid = read_grid(&cli.grid, cli.top_first)?;

    config.validate().context("invalid configuration")?;
    let board = config.board.board_from_grid(&grid).context("invalid grid")?;
    let mut engine = Engine::new(config);
    if cli.show {
        eprintln!("{board}");
    }

    let column = engine.recommend(&board, player);
    tracing::info!(?column, piece, "recommendation");
    println!("{}", column.map_or(-1, |col| col as i64));
    Ok(())
}

fn read_grid(path: &Path, top_first: bool) -> Result<Vec<Vec<u8>>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading grid from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading grid from {}", path.display()))?
    };
    parse_grid(&content, top_first)
}

/// Parse a JSON array of rows into bottom-row-first order.
fn parse_grid(content: &str, top_first: bool) -> Result<Vec<Vec<u8>>> {
    let mut grid: Vec<Vec<u8>> = serde_json::from_str(content)
        .context("grid must be a JSON array of rows of 0, 1 or 2")?;
    if top_first {
        grid.reverse();
    }
    Ok(grid)
}
