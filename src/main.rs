use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use variant_catalog::catalog::{self, BuildOptions, Catalog};
use variant_catalog::config::{self, SiteConfig};
use variant_catalog::imaging::RustBackend;
use variant_catalog::{output, render};

#[derive(Parser)]
#[command(name = "variant-catalog")]
#[command(about = "Static catalog generator for album packaging variants")]
#[command(long_about = "\
Static catalog generator for album packaging variants

Sheets and their variants are declared in catalog.toml. Photographs live in
one directory per sheet and are matched to variants by filename prefix.

Content structure:

  content/
  ├── catalog.toml                 # Sheets and variants, in display order
  ├── index.html                   # Generated page
  ├── 00_cover/
  │   ├── thumbs/                  # Generated thumbnails (<filename>.png)
  │   ├── clear_fr_01.jpg          # Variant 'clear', front side
  │   ├── clear_fr_01.txt          # Attribution for clear_fr_01.jpg
  │   └── clear_bk_01.jpg          # Variant 'clear', back side
  └── 01_branches_bones/
      └── blue_fr_01.jpg

Attribution files hold one 'key: value' pair per line.

Run 'variant-catalog gen-config' to generate a documented catalog.toml.")]
#[command(version)]
struct Cli {
    /// Content directory (sheet directories and output live here)
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Catalog config file [default: <source>/catalog.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan sheets, generate thumbnails, and render the catalog page
    Build {
        /// Regenerate every thumbnail, even ones already on disk
        #[arg(long)]
        force: bool,
    },
    /// Validate config and sheet directories without decoding or writing
    Check,
    /// Build the catalog and print it as JSON
    Manifest,
    /// Print a stock catalog.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { force } => {
            let site_config = load_site_config(&cli)?;
            println!("==> Building {}", cli.source.display());
            let catalog = build_catalog(&cli.source, &site_config, force)?;

            let output_path = cli.source.join(&site_config.output);
            render::write_page(
                &catalog,
                &site_config,
                &output_path,
                &render::current_date(),
            )?;
            output::print_build_output(&catalog, &site_config.output);
        }
        Command::Check => {
            let site_config = load_site_config(&cli)?;
            println!("==> Checking {}", cli.source.display());
            let plans = catalog::plan_catalog(&cli.source, &site_config)?;
            output::print_check_output(&plans);
        }
        Command::Manifest => {
            let site_config = load_site_config(&cli)?;
            let catalog = build_catalog(&cli.source, &site_config, false)?;
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn load_site_config(cli: &Cli) -> Result<SiteConfig, config::ConfigError> {
    match &cli.config {
        Some(path) => config::load_config_file(path),
        None => config::load_config(&cli.source),
    }
}

fn build_catalog(
    source: &Path,
    site_config: &SiteConfig,
    force: bool,
) -> Result<Catalog, catalog::CatalogError> {
    let options = BuildOptions::from_site_config(site_config, force);
    Catalog::build(source, site_config, &RustBackend::new(), &options)
}
