use clap::{Parser, ValueEnum};
use nalgebra::Vector3;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uav_cg::{CgAggregator, ComponentEdit, Material, VehicleConfig, VehicleSource};

#[derive(Parser)]
#[command(name = "uav_cg")]
#[command(about = "Estimate structural weights and the center of gravity of a UAV")]
struct Cli {
    /// Vehicle YAML file; the built-in survey UAV is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Structural material: a preset name or a density in kg/m^3
    #[arg(short, long)]
    material: Option<Material>,

    /// Add a payload component, NAME=GRAMS@X,Y,Z
    #[arg(long = "add", value_parser = parse_add)]
    adds: Vec<ComponentEdit>,

    /// Remove a payload component by name
    #[arg(long = "remove", value_parser = parse_remove)]
    removes: Vec<ComponentEdit>,

    /// Move a component, NAME=X,Y,Z
    #[arg(long = "move", value_parser = parse_move)]
    moves: Vec<ComponentEdit>,

    /// Change a payload weight, NAME=GRAMS
    #[arg(long = "weight", value_parser = parse_weight)]
    weights: Vec<ComponentEdit>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also write the report to this file (.json or .yaml)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Yaml,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
    );

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match cli.config {
        Some(path) => VehicleConfig::new(VehicleSource::File(path))?,
        None => VehicleConfig::default(),
    };
    if let Some(material) = cli.material {
        config = config.with_material(material);
    }
    tracing::info!("Estimating {} in {}", config.name, config.material);

    let mut aggregator = CgAggregator::from_config(&config)?;

    let edits = cli
        .adds
        .into_iter()
        .chain(cli.removes)
        .chain(cli.moves)
        .chain(cli.weights);
    for edit in edits {
        aggregator.apply_edit(edit)?;
    }

    let report = aggregator
        .report(config.name.clone())?
        .with_geometry(config.estimator.derived_geometry());

    match cli.format {
        Format::Text => println!("{}", report),
        Format::Json => println!("{}", report.to_json()?),
        Format::Yaml => print!("{}", report.to_yaml()?),
    }

    if let Some(path) = cli.output {
        report.save(&path)?;
        tracing::info!("Report written to {}", path.display());
    }

    Ok(())
}

fn split_assignment(arg: &str) -> Result<(&str, &str), String> {
    arg.rsplit_once('=')
        .map(|(name, value)| (name.trim(), value.trim()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", arg))
}

fn parse_number(value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid number '{}': {}", value, e))
}

fn parse_vector(value: &str) -> Result<Vector3<f64>, String> {
    let axes = value
        .split(',')
        .map(parse_number)
        .collect::<Result<Vec<f64>, String>>()?;
    match axes.as_slice() {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(format!("expected X,Y,Z, got '{}'", value)),
    }
}

fn parse_add(arg: &str) -> Result<ComponentEdit, String> {
    let (name, value) = split_assignment(arg)?;
    let (weight, position) = value
        .split_once('@')
        .ok_or_else(|| format!("expected GRAMS@X,Y,Z, got '{}'", value))?;
    Ok(ComponentEdit::Add {
        name: name.to_string(),
        weight_grams: parse_number(weight)?,
        position: parse_vector(position)?,
    })
}

fn parse_remove(arg: &str) -> Result<ComponentEdit, String> {
    Ok(ComponentEdit::Remove {
        name: arg.trim().to_string(),
    })
}

fn parse_move(arg: &str) -> Result<ComponentEdit, String> {
    let (name, value) = split_assignment(arg)?;
    Ok(ComponentEdit::Reposition {
        name: name.to_string(),
        position: parse_vector(value)?,
    })
}

fn parse_weight(arg: &str) -> Result<ComponentEdit, String> {
    let (name, value) = split_assignment(arg)?;
    Ok(ComponentEdit::Reweight {
        name: name.to_string(),
        weight_grams: parse_number(value)?,
    })
}
