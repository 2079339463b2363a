#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use seabattle::{
    init_logging,
    ui::{self, Command},
    FileRecordStore, GameSession, RecordStore,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Hunt the hidden fleet on a 10x10 board.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "File holding the best score (defaults to $SEABATTLE_RECORD)")]
        record_file: Option<PathBuf>,
    },
    /// Show or clear the stored best score.
    Record {
        #[arg(long)]
        record_file: Option<PathBuf>,
        #[arg(long, help = "Forget the stored record")]
        reset: bool,
    },
}

#[cfg(feature = "std")]
fn record_store(path: Option<PathBuf>) -> FileRecordStore {
    path.map(FileRecordStore::new)
        .unwrap_or_else(FileRecordStore::from_env)
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, record_file } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (board will be reproducible)", s);
            }
            let mut store = record_store(record_file);
            let mut rng = make_rng(seed);
            play(&mut rng, &mut store)?;
        }
        Commands::Record { record_file, reset } => {
            let store = record_store(record_file);
            if reset {
                store.clear()?;
                println!("Record cleared ({})", store.path().display());
            } else {
                match store.load()? {
                    Some(best) => println!("Best game: {} shots", best),
                    None => println!("No record yet"),
                }
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play(rng: &mut SmallRng, store: &mut FileRecordStore) -> anyhow::Result<()> {
    let mut session = GameSession::standard(rng, store.load()?).map_err(|e| anyhow::anyhow!(e))?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Enter a target like B3, `click X Y` in pixels, `new` or `quit`.");
    ui::print_session(&session);
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        match ui::parse_command(&line) {
            Some(Command::Quit) => return Ok(()),
            Some(Command::NewGame) => {
                session = GameSession::standard(rng, store.load()?).map_err(|e| anyhow::anyhow!(e))?;
                ui::print_session(&session);
                continue;
            }
            Some(Command::Fire(col, row)) => {
                let Some(report) = session.fire(col, row) else {
                    println!("Nothing happens there.");
                    continue;
                };
                if let Some(id) = report.destroyed {
                    println!("Ship {} destroyed!", id);
                } else if report.hit {
                    println!("Hit!");
                } else {
                    println!("Miss.");
                }
                ui::print_session(&session);
                if let Some(outcome) = report.outcome {
                    println!("{}", ui::outcome_message(outcome, session.shots()));
                    session.commit_record(store)?;
                    println!("Type `new` for another game or `quit` to leave.");
                    if !wait_for_restart(&mut lines)? {
                        return Ok(());
                    }
                    session = GameSession::standard(rng, store.load()?).map_err(|e| anyhow::anyhow!(e))?;
                    ui::print_session(&session);
                }
            }
            None => println!("Could not understand {:?}", line.trim()),
        }
    }
}

/// After a win only `new` and `quit` make sense. Returns `true` to start over.
#[cfg(feature = "std")]
fn wait_for_restart<I>(lines: &mut I) -> anyhow::Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(false);
        };
        match ui::parse_command(&line?) {
            Some(Command::NewGame) => return Ok(true),
            Some(Command::Quit) => return Ok(false),
            _ => println!("The game is over."),
        }
    }
}
