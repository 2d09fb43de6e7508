//! Planning-run entry point.
//!
//! Usage:
//! `workshop-allocator [GROUPS_CSV ART_CSV SCIENCE_CSV] [--seed N] [--json]`
//!
//! Paths default to `groups.csv`, `artworkshops.csv`, and
//! `scienceworkshops.csv` in the working directory. `--seed` makes the
//! session choices reproducible; `--json` emits the snapshot as JSON
//! instead of the plain-text report.

use std::path::PathBuf;
use std::process;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{error, info, warn};

use workshop_allocator::allocator::{AllocationProblem, Allocator};
use workshop_allocator::models::{Discipline, WorkshopRegistry};
use workshop_allocator::{loader, logging, report, validation};

struct Args {
    groups: PathBuf,
    art: PathBuf,
    science: PathBuf,
    seed: Option<u64>,
    json: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut paths = Vec::new();
    let mut seed = None;
    let mut json = false;

    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--seed" => {
                let value = argv.next().ok_or("--seed requires a value")?;
                seed = Some(value.parse().map_err(|_| format!("bad seed: {value}"))?);
            }
            _ if arg.starts_with("--") => return Err(format!("unknown flag: {arg}")),
            _ => paths.push(PathBuf::from(arg)),
        }
    }
    if !paths.is_empty() && paths.len() != 3 {
        return Err("expected either zero or three input paths".into());
    }

    let mut paths = paths.into_iter();
    Ok(Args {
        groups: paths.next().unwrap_or_else(|| "groups.csv".into()),
        art: paths.next().unwrap_or_else(|| "artworkshops.csv".into()),
        science: paths
            .next()
            .unwrap_or_else(|| "scienceworkshops.csv".into()),
        seed,
        json,
    })
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let groups = loader::load_groups(&args.groups)?;
    let mut registry = WorkshopRegistry::new();
    for workshop in loader::load_workshops(&args.art, Discipline::Art)? {
        registry.insert(workshop)?;
    }
    for workshop in loader::load_workshops(&args.science, Discipline::Science)? {
        registry.insert(workshop)?;
    }
    info!(
        groups = groups.len(),
        workshops = registry.len(),
        "inputs loaded"
    );

    if let Err(issues) = validation::validate_input(&groups, &registry) {
        let mut fatal = false;
        for issue in &issues {
            if issue.kind.is_fatal() {
                fatal = true;
                error!("{}", issue.message);
            } else {
                warn!("{}", issue.message);
            }
        }
        if fatal {
            return Err("input validation failed".into());
        }
    }

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut problem = AllocationProblem::new(groups, registry);
    let outcome = Allocator::new().run(&mut problem, &mut rng);
    for need in &outcome.unmet {
        warn!(
            group = %problem.groups[need.group].display_id(),
            discipline = %need.discipline,
            "unsatisfied session demand"
        );
    }

    let snapshot = problem.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", report::render(&snapshot));
    }
    Ok(())
}

fn main() {
    logging::init();
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };
    if let Err(err) = run(args) {
        error!("{err}");
        process::exit(1);
    }
}
