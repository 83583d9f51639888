use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use wiki_manifest::config::{self, IndexerConfig};
use wiki_manifest::{output, pipeline};

#[derive(Parser)]
#[command(name = "wiki-manifest")]
#[command(about = "Index a folder tree of Markdown documents into a JSON manifest")]
#[command(long_about = "\
Index a folder tree of Markdown documents into a JSON manifest

Run with no arguments from the site root. Folders become categories and
Markdown files become articles.

Content structure:

  Wiki/
  ├── STM32/                       # Category (id: stm32)
  │   ├── gpio-intro.md            # Article (id: stm32-gpio-intro)
  │   └── timers.md
  ├── Tool Chain/                  # Category (id: tool-chain)
  │   └── git-basics.md
  └── .drafts/                     # Hidden = skipped
  wiki_sections.json               # Optional section grouping
  wiki_manifest.json               # Output, rewritten every run

Metadata resolution (first available wins):
  Title: frontmatter title → first '# Heading' → filename
  Date:  frontmatter date  → file modification date
  Tags:  frontmatter tags, as [a, b] or a '- item' list

Run 'wiki-manifest gen-config' to print a documented wiki-manifest.toml.")]
#[command(version)]
struct Cli {
    /// Tool configuration file
    #[arg(long, default_value = config::CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Content directory (overrides content_root)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Manifest file to write (overrides manifest_file)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Section grouping file (overrides sections_file)
    #[arg(long, global = true)]
    sections: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory and write the manifest (default)
    Build,
    /// Scan and print the summary without writing anything
    Check,
    /// Print a stock wiki-manifest.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Some(Command::GenConfig) => {
            print!("{}", config::stock_config_toml());
        }
        Some(Command::Check) => {
            let config = resolve_config(&cli)?;
            let manifest = pipeline::build_manifest(&config)?;
            let label = format!("Checked {}", config.content_root.display());
            output::print_summary(&manifest, &label);
        }
        Some(Command::Build) | None => {
            let config = resolve_config(&cli)?;
            let manifest = pipeline::run(&config)?;
            let label = format!("Generated {}", config.manifest_file.display());
            output::print_summary(&manifest, &label);
        }
    }

    Ok(())
}

/// Load the tool config file, then apply command line overrides.
fn resolve_config(cli: &Cli) -> Result<IndexerConfig, config::ConfigError> {
    let mut config = config::load_config(&cli.config)?;
    if let Some(source) = &cli.source {
        config.content_root = source.clone();
    }
    if let Some(output) = &cli.output {
        config.manifest_file = output.clone();
    }
    if let Some(sections) = &cli.sections {
        config.sections_file = sections.clone();
    }
    config.validate()?;
    Ok(config)
}
