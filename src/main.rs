use std::path::PathBuf;

use clap::{Parser, Subcommand};

use region_scope::cli::{self, CliContext};
use region_scope::{RegionCode, ScopeLevel};

#[derive(Parser)]
#[command(name = "region-scope", version, about = "Region trees and admin permission scopes")]
struct Cli {
    /// Config file (default: .region-scope/config.yml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full region tree
    Tree {
        #[arg(long)]
        json: bool,
    },
    /// Resolve region names to the most specific code
    Resolve {
        province: String,
        #[arg(default_value = "")]
        city: String,
        #[arg(default_value = "")]
        district: String,
    },
    /// Print the label of a region code
    Label { code: RegionCode },
    /// Print the subtree visible under a scope
    Scope {
        #[arg(long)]
        level: ScopeLevel,
        #[arg(long)]
        code: Option<RegionCode>,
        #[arg(long)]
        json: bool,
    },
    /// Check whether a code falls inside a scope
    Check {
        #[arg(long)]
        level: ScopeLevel,
        #[arg(long)]
        code: Option<RegionCode>,
        target: RegionCode,
    },
    /// Derive a session scope from an admin profile file
    Login {
        #[arg(long)]
        profile: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let ctx = CliContext::load(args.config.as_deref())?;

    match args.command {
        Commands::Tree { json } => cli::inspect::run_tree(&ctx, json)?,
        Commands::Resolve {
            province,
            city,
            district,
        } => cli::inspect::run_resolve(&ctx, &province, &city, &district)?,
        Commands::Label { code } => cli::inspect::run_label(&ctx, code)?,
        Commands::Scope { level, code, json } => cli::scope::run_scope(&ctx, level, code, json)?,
        Commands::Check {
            level,
            code,
            target,
        } => cli::scope::run_check(&ctx, level, code, target)?,
        Commands::Login { profile, json } => cli::login::run_login(&ctx, &profile, json)?,
    }

    Ok(())
}
