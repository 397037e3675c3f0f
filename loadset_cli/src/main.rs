//! # Loadset CLI
//!
//! Command-line front end for beam load drafts. Each command opens a `.lsf`
//! draft, applies one form action (add a row, change the span, ...) and saves
//! it back, or checks/submits the draft and reports the result.
//!
//! Set `RUST_LOG=debug` to see what the form model is doing.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use loadset_core::{LoadKind, SupportType};
use loadset_core::materials::Material;

#[derive(Parser)]
#[command(name = "loadset")]
#[command(version)]
#[command(about = "Prepare and check beam load input", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new draft with one default load row
    New {
        /// Draft file to create (.lsf)
        path: PathBuf,
        /// Label for the beam
        #[arg(long, default_value = "")]
        label: String,
        /// Who is preparing the input
        #[arg(long, default_value = "")]
        author: String,
        /// JSON settings file with form defaults
        #[arg(long, value_name = "FILE")]
        settings: Option<PathBuf>,
        /// Overwrite an existing draft
        #[arg(long)]
        force: bool,
    },
    /// Print the draft's beam fields and load rows
    Show {
        path: PathBuf,
        /// Print the raw draft JSON
        #[arg(long)]
        json: bool,
    },
    /// Append a load row
    AddLoad {
        path: PathBuf,
        #[command(flatten)]
        fields: LoadFields,
    },
    /// Remove a load row by its number (1-based)
    RemoveLoad {
        path: PathBuf,
        number: usize,
    },
    /// Change fields of an existing load row
    SetLoad {
        path: PathBuf,
        /// Row number (1-based)
        number: usize,
        #[command(flatten)]
        fields: LoadFields,
    },
    /// Change beam fields
    SetBeam {
        path: PathBuf,
        /// Span (m); positions above it are pulled back to it
        #[arg(long, allow_hyphen_values = true)]
        length: Option<String>,
        /// Young's modulus (Pa)
        #[arg(long, allow_hyphen_values = true)]
        young_modulus: Option<String>,
        /// Moment of inertia (m^4)
        #[arg(long, allow_hyphen_values = true)]
        moment_of_inertia: Option<String>,
        /// simply_supported or cantilever
        #[arg(long)]
        support: Option<SupportType>,
    },
    /// Fill Young's modulus from a material preset
    Material {
        path: PathBuf,
        /// steel, aluminum, concrete, wood or copper
        material: Material,
    },
    /// Fill the moment of inertia from a section shape
    Section {
        path: PathBuf,
        #[command(subcommand)]
        shape: SectionShape,
    },
    /// Check the draft without submitting it
    Validate {
        path: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check the draft and emit the analysis payload if it passes
    Submit {
        path: PathBuf,
        /// Print the submission as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Optional load row fields shared by add-load and set-load
#[derive(clap::Args)]
pub struct LoadFields {
    /// point or distributed
    #[arg(long)]
    pub kind: Option<LoadKind>,
    /// Magnitude (N, or N/m for distributed)
    #[arg(long, allow_hyphen_values = true)]
    pub magnitude: Option<String>,
    /// Position from the left end (m)
    #[arg(long, allow_hyphen_values = true)]
    pub position: Option<String>,
    /// Loaded length for distributed loads (m)
    #[arg(long, allow_hyphen_values = true)]
    pub length: Option<String>,
}

#[derive(Subcommand)]
pub enum SectionShape {
    /// Solid rectangle
    Rect {
        /// Width (m)
        width: f64,
        /// Height (m)
        height: f64,
    },
    /// Solid circle
    Circle {
        /// Diameter (m)
        diameter: f64,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let passed = match cli.command {
        Commands::New {
            path,
            label,
            author,
            settings,
            force,
        } => commands::cmd_new(&path, label, author, settings.as_deref(), force).map(|_| true),
        Commands::Show { path, json } => commands::cmd_show(&path, json).map(|_| true),
        Commands::AddLoad { path, fields } => commands::cmd_add_load(&path, fields).map(|_| true),
        Commands::RemoveLoad { path, number } => {
            commands::cmd_remove_load(&path, number).map(|_| true)
        }
        Commands::SetLoad {
            path,
            number,
            fields,
        } => commands::cmd_set_load(&path, number, fields).map(|_| true),
        Commands::SetBeam {
            path,
            length,
            young_modulus,
            moment_of_inertia,
            support,
        } => commands::cmd_set_beam(&path, length, young_modulus, moment_of_inertia, support)
            .map(|_| true),
        Commands::Material { path, material } => {
            commands::cmd_material(&path, material).map(|_| true)
        }
        Commands::Section { path, shape } => commands::cmd_section(&path, shape).map(|_| true),
        Commands::Validate { path, json } => commands::cmd_validate(&path, json),
        Commands::Submit { path, json } => commands::cmd_submit(&path, json),
    }?;

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
