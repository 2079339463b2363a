use clap::Parser;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::{
    init_logging, FleetConfig, GameSession, MemoryRecordStore, RecordStore, BOARD_SIZE,
    STANDARD_FLEET,
};
use serde_json::json;

/// Play one session by firing at random hidden cells and print a JSON summary.
#[derive(Parser)]
struct Args {
    seed: u64,
    #[arg(long, default_value_t = BOARD_SIZE)]
    board_size: usize,
    #[arg(long, help = "Best score to classify against")]
    best: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut store = MemoryRecordStore::new(args.best);

    let config = FleetConfig::new(args.board_size, &STANDARD_FLEET);
    let mut session =
        GameSession::new(config, &mut rng, store.load()?).map_err(|e| anyhow::anyhow!(e))?;

    while !session.is_over() {
        let hidden: Vec<_> = session
            .board()
            .cells()
            .filter(|(_, cell)| !cell.is_revealed())
            .map(|(coord, _)| coord)
            .collect();
        let target = hidden[rng.random_range(0..hidden.len())];
        session.fire(target.col as i64, target.row as i64);
    }
    session.commit_record(&mut store)?;

    let stats = session.stats();
    let result = json!({
        "seed": args.seed,
        "shots": stats.shots,
        "hits": stats.hits,
        "accuracy": stats.accuracy(),
        "outcome": session.outcome(),
        "best": store.load()?,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
