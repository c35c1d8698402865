use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use judge::{load_decks, play_matchup, Command, RandomStrategy, Session, DEFAULT_OPPONENT_DELAY};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use triad::{visualize_board, visualize_hand, Decks, GameState, Greedy, Placement, Player, Strategy};

#[derive(Parser)]
struct Args {
    /// Path to a JSON file with the two starting decks
    #[arg(short, long)]
    decks: Option<PathBuf>,

    /// How long the opponent "thinks" before moving, in milliseconds
    #[arg(long, default_value_t = DEFAULT_OPPONENT_DELAY.as_millis() as u64)]
    opponent_delay_ms: u64,

    /// Don't play interactively; let this strategy play the human's cards
    #[arg(short, long)]
    autoplay: Option<StrategyKind>,

    /// How many games to play with --autoplay
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed for --autoplay
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyKind {
    Greedy,
    Random,
}

impl StrategyKind {
    fn build(self, rng: &mut StdRng) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Greedy => Box::new(Greedy),
            StrategyKind::Random => Box::new(RandomStrategy::new(rng.gen())),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let decks = match &args.decks {
        Some(path) => load_decks(path)?,
        None => Decks::starter(),
    };

    match args.autoplay {
        Some(kind) => autoplay(decks, kind, args.num_games, args.seed),
        None => play_interactively(decks, Duration::from_millis(args.opponent_delay_ms)),
    }
}

fn autoplay(
    decks: Decks,
    kind: StrategyKind,
    num_games: usize,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    // Get a random seed
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut state = GameState::new(decks)?;
    let mut human = kind.build(&mut rng);
    let match_score = play_matchup(&mut state, human.as_mut(), &mut Greedy, num_games)?;

    eprintln!(
        "End result:\n- {} wins by {:?} playing the human's cards\n- {} wins by the greedy AI\n- {} draws",
        match_score.wins[Player::Human as usize],
        kind,
        match_score.wins[Player::Ai as usize],
        match_score.draws
    );
    Ok(())
}

fn play_interactively(decks: Decks, delay: Duration) -> anyhow::Result<()> {
    let mut session = Session::new(decks, delay)?;
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let mut buf = String::new();

    print_state(&mut stdout, session.state())?;
    loop {
        // Let the opponent finish its move before reading more input
        if let Some(deadline) = session.opponent_deadline() {
            writeln!(stdout, "\n{}", session.state().status())?;
            stdout.flush()?;
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            }
            if let Some(placement) = session.poll(Instant::now()) {
                print_placement(&mut stdout, &placement)?;
                print_state(&mut stdout, session.state())?;
            }
            continue;
        }

        write!(stdout, "> ")?;
        stdout.flush()?;
        buf.clear(); // because stdin.read_line() appends to the buffer
        if stdin.read_line(&mut buf)? == 0 {
            // EOF
            break;
        }
        let command = match buf.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "{}", err)?;
                continue;
            }
        };
        debug!(?command);
        match command {
            Command::Quit => break,
            Command::NewGame => {
                session.new_game();
                print_state(&mut stdout, session.state())?;
            }
            Command::Place { card_id, cell } => {
                match session.human_move(&card_id, cell, Instant::now()) {
                    Ok(placement) => {
                        print_placement(&mut stdout, &placement)?;
                        print_state(&mut stdout, session.state())?;
                    }
                    Err(err) => writeln!(stdout, "Illegal move: {}", err)?,
                }
            }
        }
    }
    Ok(())
}

fn print_placement(out: &mut impl Write, placement: &Placement) -> std::io::Result<()> {
    let who = match placement.player {
        Player::Human => "You play",
        Player::Ai => "AI plays",
    };
    write!(out, "\n{} {} on {}", who, placement.card.name, placement.cell)?;
    if !placement.captured.is_empty() {
        let captured: Vec<String> = placement.captured.into_iter().map(|c| c.to_string()).collect();
        write!(out, ", capturing {}", captured.join(" "))?;
    }
    writeln!(out)
}

fn print_state(out: &mut impl Write, state: &GameState) -> std::io::Result<()> {
    writeln!(out, "{}", visualize_board(state.board()))?;
    writeln!(out, "Status: {}    Score: {}", state.status(), state.score())?;
    if !state.is_game_over() {
        writeln!(out, "Your hand:\n{}", visualize_hand(state.hand(Player::Human)))?;
    } else {
        writeln!(out, "Type 'new' for another game or 'quit' to leave.")?;
    }
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
