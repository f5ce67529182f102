mod prompt;

use std::{io, path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Parser;
use engine::{MatchController, MatchResult, MatchTemplate, RandomOracle, ValidatingOracle};
use models::TeamColor;
use prompt::ConsoleOracle;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "console",
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,
)]
struct Args {
    /// Match template (TOML)
    template: PathBuf,

    /// Overrides the template seed
    #[arg(long)]
    seed: Option<u64>,

    /// Let a seeded random player decide for every seat
    #[arg(long)]
    random: bool,

    /// Number of random matches to run, each with the next seed
    #[arg(long, default_value_t = 1, requires = "random")]
    runs: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut template = MatchTemplate::from_path(&args.template)
        .with_context(|| format!("loading {}", args.template.display()))?;
    if let Some(seed) = args.seed {
        template.seed = Some(seed);
    }

    if args.random {
        return run_random(template, args.runs);
    }

    let attempts = template.rules.max_reprompts;
    let names = template
        .combatant_templates
        .iter()
        .map(|c| c.name.clone())
        .collect();
    let oracle = ConsoleOracle::new(io::stdin().lock(), io::stdout(), names);
    let mut controller = MatchController::try_from(template)?
        .with_oracle(ValidatingOracle::new(oracle).with_attempts(attempts))
        .with_stdout();
    tracing::info!(seed = controller.seed, "match start");
    let result = controller.run()?;
    println!("{result}");
    Ok(())
}

fn run_random(template: MatchTemplate, runs: u64) -> anyhow::Result<()> {
    let base = template.seed.unwrap_or_else(rand::random::<u64>);
    let started = Instant::now();
    let (mut red, mut blue, mut turns) = (0u64, 0u64, 0usize);

    for run in 0..runs {
        let seed = base.wrapping_add(run);
        let mut template = template.clone();
        template.seed = Some(seed);
        let mut controller = MatchController::try_from(template)?
            .with_oracle(RandomOracle::seeded(seed.wrapping_add(1)));
        let result: MatchResult = controller
            .run()
            .with_context(|| format!("match with seed {seed}"))?;
        tracing::debug!(seed, result = %result.short_str(), turns = result.turns, "match finished");
        match result.winner() {
            TeamColor::Red => red += 1,
            TeamColor::Blue => blue += 1,
        }
        turns += result.turns;
        if runs == 1 {
            println!("{result}");
        }
    }

    println!(
        "{runs} matches in {:?}: red {red}, blue {blue}, {:.1} turns on average",
        started.elapsed(),
        turns as f64 / runs.max(1) as f64
    );
    Ok(())
}
