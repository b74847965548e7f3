use anyhow::{anyhow, Context};
use battlesoup_ai::cluster::cluster_sizes;
use battlesoup_ai::ui::{print_counts, print_probability_map, print_tiles};
use battlesoup_ai::{
    default_fleet, init_logging, play_solo, BattleInfo, Battlefield, CandidateSet, Coord, Grid,
    ProbabilityHunter, ProbabilityMap, Propagator, Strategy, Tile, DEFAULT_MAP_SIZE,
};
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
struct MapArgs {
    #[arg(long, default_value_t = DEFAULT_MAP_SIZE)]
    size: usize,
    #[arg(long, default_value_t = 0, help = "Number of stones scattered on the map")]
    stones: usize,
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide the default fleet and show where it went.
    Place {
        #[command(flatten)]
        map: MapArgs,
    },
    /// Fire a few shots at a hidden fleet, then print what the engine infers.
    Analyse {
        #[command(flatten)]
        map: MapArgs,
        #[arg(long, default_value_t = 10)]
        shots: usize,
    },
    /// Let the probability hunter sink hidden fleets and report the turn counts.
    Simulate {
        #[command(flatten)]
        map: MapArgs,
        #[arg(long, default_value_t = 10)]
        games: u64,
        #[arg(long, default_value_t = 200)]
        max_turns: usize,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Distinct random cells to use as stones.
fn random_stones(rng: &mut SmallRng, size: usize, count: usize) -> anyhow::Result<Vec<Coord>> {
    if count >= size * size {
        return Err(anyhow!("{} stones do not fit on a {}x{} map", count, size, size));
    }
    let mut stones = Vec::with_capacity(count);
    while stones.len() < count {
        let c = Coord::new(rng.random_range(0..size as i32), rng.random_range(0..size as i32));
        if !stones.contains(&c) {
            stones.push(c);
        }
    }
    Ok(stones)
}

fn hidden_fleet(rng: &mut SmallRng, map: MapArgs) -> anyhow::Result<Battlefield> {
    let stones = random_stones(rng, map.size, map.stones)?;
    let mut hunter = ProbabilityHunter::new();
    let ships = default_fleet()?;
    let positions = hunter.position_ships(rng, map.size, &ships, &stones)?;
    Ok(Battlefield::new(map.size, ships, &stones, positions)?)
}

fn place(map: MapArgs) -> anyhow::Result<()> {
    let mut rng = make_rng(map.seed);
    let field = hidden_fleet(&mut rng, map)?;
    let mut view: Grid<Tile> = field.observed().tiles.clone();
    for (ship, &pos) in field.observed().ships.iter().zip(field.positions()) {
        println!("{:<10} at {}", ship.name(), pos);
        for c in ship.cells(pos) {
            view.set(c, Tile::REVEALED_SHIP);
        }
    }
    print_tiles(&view);
    Ok(())
}

fn analyse(map: MapArgs, shots: usize) -> anyhow::Result<()> {
    let mut rng = make_rng(map.seed);
    let mut field = hidden_fleet(&mut rng, map)?;
    let mut own = BattleInfo::new(map.size, default_fleet()?);
    let mut hunter = ProbabilityHunter::new();
    let report = play_solo(&mut hunter, &mut rng, &mut own, &mut field, shots)?;
    println!("After {} turns: {} hits, {} misses", report.turns, report.hits, report.misses);

    let info = field.observed();
    print_tiles(&info.tiles);

    let mut set = CandidateSet::enumerate(info)?;
    set.drop_claimed(info);
    let stats = Propagator::new().propagate(info, &mut set)?;
    println!("\nPropagation removed {} candidates in {} passes", stats.removed(), stats.passes);
    let probabilities = ProbabilityMap::build(info, &set)?;
    for (i, ship) in info.ships.iter().enumerate() {
        if info.is_searchable(i) {
            println!("\n{} ({} candidates)", ship.name(), set.total(i));
            print_probability_map(&probabilities, i);
        }
    }

    println!("\nCluster sizes:");
    print_counts(&cluster_sizes(&info.tiles, Tile::HIT_SHIP));

    let next = hunter.analyse(&mut rng, &own, info, None);
    println!("\nNext move: {}", next);
    Ok(())
}

fn simulate(map: MapArgs, games: u64, max_turns: usize) -> anyhow::Result<()> {
    let base = map.seed.unwrap_or_else(|| rand::rng().random());
    let mut turns = Vec::new();
    for game in 0..games {
        let mut rng = SmallRng::seed_from_u64(base.wrapping_add(game));
        let mut field = hidden_fleet(&mut rng, map)?;
        let mut own = BattleInfo::new(map.size, default_fleet()?);
        let mut hunter = ProbabilityHunter::new();
        let report = play_solo(&mut hunter, &mut rng, &mut own, &mut field, max_turns)
            .with_context(|| format!("game {} (seed {})", game, base.wrapping_add(game)))?;
        println!(
            "game {:>3}: {:>3} turns, {:>2} hits, {:>2} abilities, finished: {}",
            game, report.turns, report.hits, report.abilities_used, report.finished
        );
        if report.finished {
            turns.push(report.turns);
        }
    }
    if !turns.is_empty() {
        let mean = turns.iter().sum::<usize>() as f64 / turns.len() as f64;
        let best = turns.iter().min().copied().unwrap_or_default();
        let worst = turns.iter().max().copied().unwrap_or_default();
        println!("{} finished, mean {:.1} turns (best {}, worst {})", turns.len(), mean, best, worst);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Place { map } => place(map),
        Commands::Analyse { map, shots } => analyse(map, shots),
        Commands::Simulate {
            map,
            games,
            max_turns,
        } => simulate(map, games, max_turns),
    }
}
