// Command line driver for the push-box engine.
// Usage: SokobanEngine [play|analyze] [level file] [config.toml]
// Level files are JSON (inline grid or legacy coordinate lists) or text maps:
// '#' wall, '.' floor, 'x' goal, '@' player, '+' player on goal, '$' box, '*' box on goal.

use std::io;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use SokobanEngine::console_interface::{render_board_to_string, run_session, SessionOutcome};
use SokobanEngine::core::{Board, EngineConfig, LogConfig};
use SokobanEngine::level::{load_level_file, parse_text_map, LevelDescription};
use SokobanEngine::state_graph::{
    explore, get_graph_info, get_json_data, solvability, trim_unwinnable, Solvability,
};

const DEFAULT_CONFIG_PATH: &str = "sokoban.toml";
const ANALYZE_NODE_LIMIT: usize = 2_000_000;
const EXPORT_PATH: &str = "exports/state_graph.json";

const BUILTIN_LEVEL: &str = r#"
#######
#.....#
#.$.$.#
#..x..#
#.@.x.#
#######
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let switch = args.next().unwrap_or("play".to_string());
    let level_path = args.next();
    let config_path = args.next();

    let config = match &config_path {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::load(DEFAULT_CONFIG_PATH).unwrap_or_default(),
    };
    init_logging(&config.log);

    let level = match &level_path {
        Some(path) => load_level_file(path)?,
        None => parse_text_map(BUILTIN_LEVEL)?,
    };

    match switch.as_str() {
        "play" => run_play(&level, &config)?,
        "analyze" => run_analyze(&level, &config)?,
        _ => {
            warn!(mode = switch.as_str(), "unknown mode, use 'play' or 'analyze'. defaulting to play");
            run_play(&level, &config)?;
        }
    }

    Ok(())
}

fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run_play(level: &LevelDescription, config: &EngineConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = Board::new(level, config.rules)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match run_session(&mut board, stdin.lock(), &mut stdout)? {
        SessionOutcome::Won { moves } => info!(moves, "session ended with a win"),
        SessionOutcome::Quit => info!("session ended by user"),
        SessionOutcome::EndOfInput => info!("session ended, no more input"),
    }
    Ok(())
}

fn run_analyze(level: &LevelDescription, config: &EngineConfig) -> Result<(), Box<dyn std::error::Error>> {
    let board = Board::new(level, config.rules)?;
    print!("{}", render_board_to_string(&board));

    let start_time = std::time::Instant::now();
    match solvability(&board, Some(ANALYZE_NODE_LIMIT)) {
        Solvability::Solvable(path) => {
            println!("Solvable in {} moves: {:?}", path.len(), path);
        }
        Solvability::Unsolvable => println!("No sequence of moves wins this level."),
        Solvability::Unknown => println!("Gave up after {} states.", ANALYZE_NODE_LIMIT),
    }

    let mut graph = explore(&board, Some(ANALYZE_NODE_LIMIT));
    println!("{}", get_graph_info(&graph));
    if graph.is_complete() {
        let trimmed = trim_unwinnable(&mut graph);
        println!("Trimmed {} nodes and {} edges", trimmed.nodes, trimmed.edges);
        println!("{}", get_graph_info(&graph));
    }
    info!(elapsed_ms = start_time.elapsed().as_millis() as u64, "analysis finished");

    let json_data = get_json_data(&graph)?;
    std::fs::create_dir_all("exports")?;
    std::fs::write(EXPORT_PATH, json_data)?;
    println!("State graph exported to {}", EXPORT_PATH);

    Ok(())
}
