use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use appxsweep::commands::{Config, list, remove, show};
use appxsweep::evaluate::RowFilter;

/// appxsweep - application package inventory and safe removal
///
/// Enumerates the Appx/MSIX packages installed on this machine,
/// reconstructs which packages depend on which (including curated
/// dependency edges the platform does not report), and removes only
/// packages that no other installed package requires.
///
/// Examples:
///   appxsweep list --hide-frameworks
///   appxsweep remove Vendor.App_2.0.0.0_x64__abcdef
#[derive(Parser, Debug)]
#[command(author, version = env!("APPXSWEEP_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read the package inventory from a JSON dump instead of querying
    /// the platform (also via APPXSWEEP_INPUT)
    #[arg(
        long = "input",
        short = 'i',
        env = "APPXSWEEP_INPUT",
        value_name = "PATH",
        global = true
    )]
    pub input: Option<PathBuf>,

    /// Manual dependency overrides file (defaults to
    /// <config_dir>/appxsweep/overrides.json; also via APPXSWEEP_OVERRIDES)
    #[arg(
        long = "overrides",
        env = "APPXSWEEP_OVERRIDES",
        value_name = "PATH",
        global = true
    )]
    pub overrides: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List installed packages with their removability verdicts
    List(ListArgs),

    /// Show one package in detail
    Show(ShowArgs),

    /// Remove packages that no other installed package requires
    Remove(RemoveArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Hide framework packages
    #[arg(long)]
    pub hide_frameworks: bool,

    /// Hide packages the platform marks non-removable
    #[arg(long)]
    pub hide_non_removable: bool,

    /// Only show packages whose name contains this text (case-insensitive)
    #[arg(long, short = 'f', value_name = "TEXT")]
    pub filter: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// The package identity (package full name)
    #[arg(value_name = "IDENTITY")]
    pub identity: String,
}

#[derive(clap::Args, Debug)]
pub struct RemoveArgs {
    /// Package identities to remove
    #[arg(
        value_name = "IDENTITY",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub identities: Vec<String>,

    /// Remove every removable package (honors the hide flags)
    #[arg(long)]
    pub all: bool,

    /// Hide framework packages from --all
    #[arg(long)]
    pub hide_frameworks: bool,

    /// Hide non-removable packages from --all
    #[arg(long)]
    pub hide_non_removable: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Print the removal plan without removing anything
    #[arg(long)]
    pub dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = appxsweep::runtime::RealRuntime;
    let config = Config {
        input: cli.input,
        overrides_path: cli.overrides,
    };

    match cli.command {
        Commands::List(args) => list(
            runtime,
            RowFilter {
                hide_frameworks: args.hide_frameworks,
                hide_non_removable: args.hide_non_removable,
            },
            args.filter,
            config,
        ),
        Commands::Show(args) => show(runtime, &args.identity, config),
        Commands::Remove(args) => remove(
            runtime,
            args.identities,
            args.all,
            RowFilter {
                hide_frameworks: args.hide_frameworks,
                hide_non_removable: args.hide_non_removable,
            },
            args.yes,
            args.dry_run,
            config,
        ),
    }
}
