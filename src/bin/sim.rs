use battlesoup_ai::{
    default_fleet, init_logging, play_solo, BattleInfo, Battlefield, ProbabilityHunter, Strategy, DEFAULT_MAP_SIZE,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

const MAX_TURNS: usize = DEFAULT_MAP_SIZE * DEFAULT_MAP_SIZE;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <placement-seed> <hunter-seed>", args[0]);
        std::process::exit(1);
    }
    let placement_seed: u64 = args[1].parse()?;
    let hunter_seed: u64 = args[2].parse()?;

    let mut placement_rng = SmallRng::seed_from_u64(placement_seed);
    let mut hunter_rng = SmallRng::seed_from_u64(hunter_seed);

    let mut hunter = ProbabilityHunter::new();
    let ships = default_fleet()?;
    let positions = hunter.position_ships(&mut placement_rng, DEFAULT_MAP_SIZE, &ships, &[])?;
    let mut field = Battlefield::new(DEFAULT_MAP_SIZE, ships, &[], positions)?;
    let mut own = BattleInfo::new(DEFAULT_MAP_SIZE, default_fleet()?);

    let report = play_solo(&mut hunter, &mut hunter_rng, &mut own, &mut field, MAX_TURNS)?;

    let result = json!({
        "strategy": hunter.display_name(),
        "map_size": DEFAULT_MAP_SIZE,
        "positions": field.positions(),
        "report": report,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
