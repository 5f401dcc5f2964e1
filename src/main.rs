use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use showcase::content::{self, Collection};
use showcase::storage::FsStore;
use showcase::{config, merge, output};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Content tools for the modding community showcase")]
#[command(long_about = "\
Content tools for the modding community showcase

Projects are front matter files in the content directory. The file name is
the project's slug; the YAML header holds its display fields.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  └── projects/
      ├── example.mdx              # Contributor template (hidden from the gallery)
      └── skyblock-tools.mdx       # → /en/projects/skyblock-tools

Front matter (all optional):
  title, description, banner, logo, discord, github, website, twitter
  author: { name, avatar, bio, github, twitter, website }

Run 'showcase gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct OutputArgs {
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List projects shown in the gallery
    List {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show one project's detail view
    Show {
        /// Project slug (file name without extension)
        slug: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List every project page address for all project locales
    Routes {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Strictly load every project file and report failures
    Check {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Merge TOML or JSON files left to right and print the result
    Merge {
        /// Base file
        base: PathBuf,
        /// Files merged on top, in order
        #[arg(required = true)]
        overlays: Vec<PathBuf>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::List { output: out } => {
            let collection = load_collection(&cli.source)?;
            let projects = content::list_entries(&FsStore, &collection);
            if out.json {
                print_json(&projects)?;
            } else {
                output::print_project_list(&projects);
            }
        }
        Command::Show { slug, output: out } => {
            let collection = load_collection(&cli.source)?;
            let project = content::get_entry(&FsStore, &collection, &slug)
                .ok_or_else(|| format!("project '{slug}' not found"))?;
            if out.json {
                print_json(&project)?;
            } else {
                output::print_project(&project);
            }
        }
        Command::Routes { output: out } => {
            let site_config = config::load_config(&cli.source)?;
            let collection = Collection::from_config(&cli.source, &site_config.projects);
            let routes = content::static_params(
                &FsStore,
                &collection,
                site_config.i18n.project_locales(),
            );
            if out.json {
                print_json(&routes)?;
            } else {
                output::print_routes(&routes);
            }
        }
        Command::Check { output: out } => {
            let collection = load_collection(&cli.source)?;
            if !out.json {
                println!("==> Checking {}", collection.dir.display());
            }
            let results: Vec<(String, Result<(), String>)> =
                content::check_entries(&FsStore, &collection)?
                    .into_iter()
                    .map(|(slug, result)| (slug, result.map(|_| ()).map_err(|e| e.to_string())))
                    .collect();
            if out.json {
                print_json(&output::check_report(&results))?;
            } else {
                output::print_check(&results);
            }
            if results.iter().any(|(_, r)| r.is_err()) {
                return Err("content check failed".into());
            }
            if !out.json {
                println!("==> Content is valid");
            }
        }
        Command::Merge { base, overlays } => {
            print!("{}", merge::merge_files(&base, &overlays)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_collection(source: &Path) -> Result<Collection, config::ConfigError> {
    let site_config = config::load_config(source)?;
    Ok(Collection::from_config(source, &site_config.projects))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
