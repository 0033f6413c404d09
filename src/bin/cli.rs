// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyhedra CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use polyhedra::catalog;
use polyhedra::cli::{Reporter, Runner};
use polyhedra::geometry::{analyze, Peak, Polyhedron};
use polyhedra::operations::{Alignment, AugmentOptions, CapKind, Operation};
use polyhedra::{io, Config};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "polyhedra")]
#[command(about = "Polyhedra - regular-faced solids and Johnson-solid operations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./polyhedra.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog solids
    List,

    /// Show counts and measurements of a solid
    Info {
        /// Catalog name or JSON snapshot path
        solid: String,

        /// Also list every face
        #[arg(long)]
        faces: bool,
    },

    /// List the peaks of a solid
    Peaks {
        /// Catalog name or JSON snapshot path
        solid: String,
    },

    /// Attach a pyramid, cupola or rotunda to a face
    Augment {
        /// Catalog name or JSON snapshot path
        solid: String,

        /// Face to augment
        #[arg(long)]
        face: usize,

        /// Alignment of a cupola or rotunda (ortho, gyro)
        #[arg(long)]
        gyrate: Option<Alignment>,

        /// Cap to attach to a decagon (cupola, rotunda)
        #[arg(long)]
        using: Option<CapKind>,

        /// Output file (.json or .obj)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove a peak
    Diminish {
        /// Catalog name or JSON snapshot path
        solid: String,

        /// Peak number, as listed by `peaks`
        #[arg(long)]
        peak: usize,

        /// Output file (.json or .obj)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rotate a cupola or rotunda peak
    Gyrate {
        /// Catalog name or JSON snapshot path
        solid: String,

        /// Peak number, as listed by `peaks`
        #[arg(long)]
        peak: usize,

        /// Output file (.json or .obj)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a solid
    Export {
        /// Catalog name or JSON snapshot path
        solid: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file (defaults to <name>.<format> in the output directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build and validate every catalog solid
    Check,

    /// Show version information
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Json,
    Obj,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Obj => "obj",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    config.verbose |= cli.verbose;
    init_logging(&config);

    let runner = Runner::with_parallelism(config.parallelism);

    match cli.command {
        Commands::List => list_command(),
        Commands::Info { solid, faces } => {
            let polyhedron = runner.load_solid(&solid)?;
            Reporter::report_solid("Solid", &polyhedron);
            if faces {
                Reporter::report_faces(&polyhedron);
            }
            if config.verbose {
                analyze(&polyhedron).print();
            }
        }
        Commands::Peaks { solid } => {
            let polyhedron = runner.load_solid(&solid)?;
            Reporter::report_peaks(&Peak::get_all(&polyhedron));
        }
        Commands::Augment {
            solid,
            face,
            gyrate,
            using,
            output,
        } => {
            let options = AugmentOptions {
                face_index: face,
                gyrate,
                using,
            };
            operation_command(&runner, &config, &solid, |_| Ok(Operation::Augment(options)), output)?;
        }
        Commands::Diminish {
            solid,
            peak,
            output,
        } => {
            operation_command(
                &runner,
                &config,
                &solid,
                |p| Ok(Operation::Diminish(select_peak(p, peak)?)),
                output,
            )?;
        }
        Commands::Gyrate {
            solid,
            peak,
            output,
        } => {
            operation_command(
                &runner,
                &config,
                &solid,
                |p| Ok(Operation::Gyrate(select_peak(p, peak)?)),
                output,
            )?;
        }
        Commands::Export {
            solid,
            format,
            output,
        } => {
            let polyhedron = runner.load_solid(&solid)?;
            let path = output.unwrap_or_else(|| {
                let stem = polyhedron.name().unwrap_or("polyhedron");
                config.output_path(&format!("{}.{}", stem, format.extension()))
            });
            match format {
                ExportFormat::Json => io::export_json(&polyhedron, &path, config.pretty_json)?,
                ExportFormat::Obj => io::export_obj(&polyhedron, &path)?,
            }
            Reporter::success(&format!("Exported {}", path.display()));
        }
        Commands::Check => check_command(&runner)?,
        Commands::Version => {
            println!("Polyhedra v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = if config.verbose {
        "polyhedra=debug".to_string()
    } else {
        config.log_filter.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn list_command() {
    let mut family = None;
    for entry in catalog::entries() {
        let group = match entry.family {
            catalog::Family::Johnson(_) => "Johnson".to_string(),
            other => other.to_string(),
        };
        if family.as_ref() != Some(&group) {
            println!("\n{}", group.bold());
            family = Some(group);
        }
        match entry.family {
            catalog::Family::Johnson(_) => {
                println!("  {:>4}  {}", entry.family.to_string().bright_black(), entry.name)
            }
            _ => println!("        {}", entry.name),
        }
    }
}

fn select_peak(polyhedron: &Polyhedron, index: usize) -> Result<Peak> {
    let peaks = Peak::get_all(polyhedron);
    let count = peaks.len();
    peaks
        .into_iter()
        .nth(index)
        .with_context(|| format!("Peak {} not found, the solid has {} peaks", index, count))
}

fn operation_command(
    runner: &Runner,
    config: &Config,
    solid: &str,
    build: impl FnOnce(&Polyhedron) -> Result<Operation>,
    output: Option<PathBuf>,
) -> Result<()> {
    let polyhedron = runner.load_solid(solid)?;
    let operation = build(&polyhedron)?;
    let result = runner.run(&polyhedron, &operation)?;

    Reporter::report_solid(&format!("{}", operation.kind()), &result.polyhedron);
    if config.verbose {
        Reporter::report_info(&format!(
            "Completed in {}",
            Reporter::format_duration(result.duration)
        ));
    }
    if let Some(path) = output {
        write_output(&result.polyhedron, &path, config)?;
        Reporter::success(&format!("Wrote {}", path.display()));
    }
    Ok(())
}

fn write_output(polyhedron: &Polyhedron, path: &Path, config: &Config) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("obj") => io::export_obj(polyhedron, path),
        _ => io::export_json(polyhedron, path, config.pretty_json),
    }
}

fn check_command(runner: &Runner) -> Result<()> {
    let start = Instant::now();
    let results = runner.check_catalog()?;
    let failures = Reporter::report_check(&results, start.elapsed());
    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}
