use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::{Color, Stylize};
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use std::io::{self, BufRead, Write};

use wheel_flip_solver::render::{flips, Grid};
use wheel_flip_solver::{parse_puzzle, Alignment, Arrangement, PathNode, Progress, Search};

#[derive(Parser)]
#[command(name = "wheel-flip")]
#[command(about = "Find a flip sequence that solves the two-row wheel puzzle")]
struct Cli {
    /// Puzzle as `ddddd-ddddd` (top row, hyphen, bottom row). Read from
    /// stdin when omitted.
    puzzle: Option<String>,

    /// Scramble the solved puzzle with this many random flips instead
    #[arg(long, conflicts_with = "puzzle")]
    shuffle: Option<usize>,

    /// Seed for --shuffle
    #[arg(long, requires = "shuffle")]
    seed: Option<u64>,

    /// Print without terminal colours
    #[arg(long)]
    no_color: bool,

    /// Log search statistics
    #[arg(short, long)]
    verbose: bool,
}

struct Painter {
    enabled: bool,
}

impl Painter {
    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

fn read_puzzle(cli: &Cli) -> Result<Arrangement> {
    if let Some(flips) = cli.shuffle {
        let arrangement = match cli.seed {
            Some(seed) => Arrangement::scrambled(&mut StdRng::seed_from_u64(seed), flips),
            None => Arrangement::scrambled(&mut thread_rng(), flips),
        };
        println!("Shuffled puzzle: {}", arrangement);
        return Ok(arrangement);
    }

    let line = match &cli.puzzle {
        Some(puzzle) => puzzle.clone(),
        None => {
            print!("Initial puzzle [{}]: ", Arrangement::DEFAULT_SCRAMBLE);
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("failed to read puzzle from stdin")?;
            println!();
            line
        }
    };

    parse_puzzle(&line).context("Parse error")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let painter = Painter {
        enabled: !cli.no_color,
    };
    let initial = read_puzzle(&cli)?;

    let root = PathNode {
        arrangement: initial,
        alignment: Alignment::INITIAL,
    };
    print!(
        "{}",
        Grid {
            count: Some(0),
            node: &root,
        }
    );

    let mut first = true;
    let result = Search::new(initial).run(|progress| {
        match progress {
            Progress::Depth { depth, heuristic } => {
                if !first {
                    println!();
                }
                first = false;
                print!("searching depth = {}, dist = {}...", depth, heuristic);
            }
            Progress::Heuristic { heuristic } => print!("{}...", heuristic),
        }
        io::stdout().flush().ok();
    });

    match result {
        Ok(solution) => {
            println!("{}", painter.paint("solution found!!!", Color::Green));
            for flip in flips(solution.path()) {
                print!("{}", flip);
            }
            println!("{}", painter.paint("END solution", Color::Green));
            println!("Found solution with {} flips", solution.len());
            Ok(())
        }
        Err(err) => {
            println!();
            println!("{}", painter.paint("queue is empty", Color::Red));
            Err(err.into())
        }
    }
}
