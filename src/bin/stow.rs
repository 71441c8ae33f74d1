use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use freightpack::{manifest, planner, ContainerKind, ProgressCallback, Strategy};

/// A cargo-stowage planner: packs a JSON manifest into shipping containers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a cargo manifest (JSON array of {name, qty, l, w, h, weight, unstackable}).
    #[arg(value_parser = clap::value_parser!(PathBuf))]
    manifest: PathBuf,

    /// Container sequencing strategy.
    #[arg(value_enum, short, long, default_value_t = StrategyArg::SmartMix)]
    strategy: StrategyArg,

    /// Container kind, only used by --strategy uniform.
    #[arg(value_enum, short, long, default_value_t = ContainerArg::Gp20)]
    container: ContainerArg,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum StrategyArg {
    SmartMix,
    Uniform,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum ContainerArg {
    #[value(name = "20gp")]
    Gp20,
    #[value(name = "40gp")]
    Gp40,
    #[value(name = "40hq")]
    Hq40,
}

impl From<ContainerArg> for ContainerKind {
    fn from(arg: ContainerArg) -> Self {
        match arg {
            ContainerArg::Gp20 => ContainerKind::Gp20,
            ContainerArg::Gp40 => ContainerKind::Gp40,
            ContainerArg::Hq40 => ContainerKind::Hq40,
        }
    }
}

fn main() {
    let cli = Args::parse();
    assert!(cli.manifest.exists() && cli.manifest.is_file(), "Invalid manifest path");

    let specs = match manifest::load_manifest(&cli.manifest) {
        Ok(specs) => specs,
        Err(err) => {
            eprintln!("Failed to load manifest: {err}");
            std::process::exit(1);
        }
    };

    let strategy = match cli.strategy {
        StrategyArg::SmartMix => Strategy::SmartMix,
        StrategyArg::Uniform => Strategy::Uniform(cli.container.into()),
    };

    let progress: ProgressCallback<'_> = Box::new(|stage: &str| println!("{stage}"));
    let shipment = planner::pack_shipment(&specs, strategy, Some(progress), None);

    for (idx, result) in shipment.results.iter().enumerate() {
        println!(
            "Container {}: {:?}\tplaced {}\tvolume {:.1}%\tweight {:.1}%",
            idx + 1,
            result.container_kind,
            result.placements.len(),
            result.volume_utilization * 100.0,
            result.weight_utilization * 100.0,
        );
    }

    let unplaced = shipment.unplaced();
    if unplaced.is_empty() {
        println!("All cargo placed.");
    } else {
        println!("{} item(s) could not be placed.", unplaced.len());
    }
}
