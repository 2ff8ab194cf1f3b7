use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use sheetpr::{PatchSet, Workbook};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod formatter;

#[derive(Parser)]
#[command(name = "sheetcli")]
#[command(about = "Read and patch worksheet page margins and sheet properties", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a layout document with uncustomized sheets
    Init {
        /// Path to the layout document (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Sheet names
        #[arg(long = "sheet", num_args = 1.., value_name = "SHEET", required = true)]
        sheets: Vec<String>,

        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },

    /// Print margins and sheet properties, defaults included
    Get {
        /// Path to the layout document (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Only these sheets (default: all)
        #[arg(long = "sheet", num_args = 1.., value_name = "SHEET")]
        sheets: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Apply a TOML patch file
    Set {
        /// Path to the layout document (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Patch file (TOML)
        #[arg(short, long, value_name = "PATCH")]
        patch: PathBuf,

        /// Output file (default: overwrite FILE)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON output
    Json,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_workbook(file: &Path) -> Result<Workbook> {
    let workbook = Workbook::from_json_file(file)
        .with_context(|| format!("Failed to load layout from {}", file.display()))?;
    info!(path = %file.display(), sheets = workbook.sheets.len(), "loaded layout");
    Ok(workbook)
}

fn save_workbook(workbook: &Workbook, file: &Path) -> Result<()> {
    workbook
        .to_json_file(file)
        .with_context(|| format!("Failed to write {}", file.display()))?;
    info!(path = %file.display(), sheets = workbook.sheets.len(), "wrote layout");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Init { file, sheets, force } => {
            if file.exists() && !force {
                anyhow::bail!(
                    "{} already exists. Use --force to overwrite it.",
                    file.display()
                );
            }
            save_workbook(&Workbook::new_with_sheets(sheets), &file)?;
            println!("✓ Created {}", file.display());
        }

        Command::Get {
            file,
            sheets,
            format,
        } => {
            let workbook = load_workbook(&file)?;
            let names: Vec<String> = if sheets.is_empty() {
                workbook.sheet_names().into_iter().map(String::from).collect()
            } else {
                sheets
            };

            let mut snapshots = Vec::with_capacity(names.len());
            for name in names {
                snapshots.push(formatter::SheetSnapshot {
                    margins: workbook.get_page_margins(&name)?,
                    props: workbook.get_sheet_props(&name)?,
                    sheet: name,
                });
            }

            match format {
                OutputFormat::Human => formatter::print_human(&file, &snapshots)?,
                OutputFormat::Json => formatter::print_json(&file, &snapshots)?,
            }
        }

        Command::Set {
            file,
            patch,
            output,
            dry_run,
        } => {
            let patches = PatchSet::from_file(&patch)
                .with_context(|| format!("Failed to load patch from {}", patch.display()))?;
            if patches.is_empty() {
                println!("No sheets in patch file. Nothing to do.");
                return Ok(());
            }

            let mut workbook = load_workbook(&file)?;
            patches.validate(&workbook).context("Invalid patch")?;
            let output_path = output.unwrap_or_else(|| file.clone());

            if dry_run {
                println!("[DRY RUN] Operations on '{}':", file.display());
                formatter::print_patch_plan(&patches);
                println!("\nOutput would be: {}", output_path.display());
            } else {
                println!("Patching '{}'...", file.display());
                let written = workbook
                    .apply_patch_set(&patches)
                    .context("Failed to apply patch")?;
                save_workbook(&workbook, &output_path)?;

                println!("✓ Wrote {} field(s)", written);
                println!("Output: {}", output_path.display());
            }
        }
    }

    Ok(())
}
