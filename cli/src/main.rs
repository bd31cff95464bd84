use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use flood_core::{Color, FrontierStrategy, GameConfig, RandomStrategy, Strategy};
use flood_protocol::{Game, GameService, MemoryStore, MoveRequest, NewGameRequest, encode};
use rand::{SeedableRng, rngs::SmallRng};

mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Flood the board from its top-left corner", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Tiles per side of the board
    #[arg(long, default_value_t = 4, global = true)]
    size: usize,

    /// How many palette colors to play with
    #[arg(long, default_value_t = 4, global = true)]
    colors: usize,

    /// Print the finished game record as JSON instead of a summary
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick every color yourself
    Play,
    /// Let an automated player pick colors until the board is won
    Auto {
        #[arg(long, value_enum, default_value_t = StrategyKind::Frontier)]
        strategy: StrategyKind,

        #[arg(long, default_value_t = 1_000)]
        max_moves: usize,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyKind {
    /// Any palette color, even ones that change nothing
    Random,
    /// Only colors touching the region
    Frontier,
}

type Service = GameService<MemoryStore>;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.log_level_filter());

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let config = GameConfig::new(args.size, args.colors);
    let mut service = GameService::new(MemoryStore::new());
    let response = service
        .new_game(
            NewGameRequest {
                grid_size: config.size,
                number_of_colors: config.colors,
            },
            &mut rng,
        )
        .context("Could not start a game")?;
    let palette = response.chosen_colors;
    let id = response.game_state.id;

    let game = match args.command.unwrap_or(Command::Play) {
        Command::Play => play_interactive(&mut service, &id, &palette, &mut rng)?,
        Command::Auto {
            strategy,
            max_moves,
        } => {
            let mut strategy = build_strategy(strategy, &mut rng);
            play_automated(&mut service, &id, &palette, strategy.as_mut(), max_moves)?
        }
    };

    let mut out = io::stdout().lock();
    if args.json {
        writeln!(out, "{}", encode(&game)?)?;
    } else {
        writeln!(out, "{}", render::render_grid(game.latest_grid()))?;
        if game.is_won() {
            writeln!(out, "Won in {} steps (seed {})", game.steps(), seed)?;
        } else {
            writeln!(out, "Stopped after {} steps (seed {})", game.steps(), seed)?;
        }
        writeln!(out, "{}", render::render_history(&game))?;
    }
    Ok(())
}

fn init_logging(level: log::LevelFilter) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    // also installs the bridge that forwards `log` records
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn build_strategy(kind: StrategyKind, rng: &mut SmallRng) -> Box<dyn Strategy> {
    let strategy_rng = SmallRng::from_rng(rng);
    match kind {
        StrategyKind::Random => Box::new(RandomStrategy::new(strategy_rng)),
        StrategyKind::Frontier => Box::new(FrontierStrategy::new(strategy_rng)),
    }
}

fn play_automated(
    service: &mut Service,
    id: &str,
    palette: &[Color],
    strategy: &mut dyn Strategy,
    max_moves: usize,
) -> anyhow::Result<Game> {
    let mut game = service.game(id)?;
    while !game.is_won() {
        if game.steps() >= max_moves {
            bail!("Automated player gave up after {} moves", max_moves);
        }
        let color = strategy.choose(game.latest_grid(), palette)?;
        game = service.make_move(id, MoveRequest { color })?.game_state;
    }
    Ok(game)
}

fn play_interactive(
    service: &mut Service,
    id: &str,
    palette: &[Color],
    rng: &mut SmallRng,
) -> anyhow::Result<Game> {
    let mut game = service.game(id)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_won() {
        {
            let mut out = io::stdout().lock();
            writeln!(out, "\n{}\n", render::render_grid(game.latest_grid()))?;
            writeln!(out, "{}", render::render_palette(palette))?;
            write!(out, "step {} > color, 'auto' or 'quit': ", game.steps() + 1)?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Could not read from stdin")?;
        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "auto" => {
                let mut strategy = FrontierStrategy::new(SmallRng::from_rng(&mut *rng));
                return play_automated(service, id, palette, &mut strategy, usize::MAX);
            }
            input => match render::parse_color(input, palette) {
                Some(color) => game = service.make_move(id, MoveRequest { color })?.game_state,
                None => eprintln!("Unknown color {:?}", input),
            },
        }
    }
    Ok(game)
}
