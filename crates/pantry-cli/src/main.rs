mod commands;
mod config;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::{read_config, LoadedConfig};
use pantry_core::{estimate_grams_saved, normalize_text, suggest_envelope};

#[derive(Parser)]
#[command(
    name = "pantry",
    version,
    about = "Pantry recipe finder — rank recipes by the ingredients you already have"
)]
struct Cli {
    /// Config file (defaults to ./pantry.config.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize an ingredient list and print the resulting tokens
    Normalize {
        /// Ingredients separated by commas, semicolons or newlines
        text: String,

        /// Output format: human (default) or json
        #[arg(long, default_value = "human")]
        format: String,
    },

    /// Suggest recipes for the ingredients on hand
    Suggest {
        /// Ingredients separated by commas, semicolons or newlines
        text: String,

        /// Recipe catalog file or directory (defaults to the bundled catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Number of suggestions to return
        #[arg(long)]
        top: Option<usize>,

        /// Output format: human (default) or json
        #[arg(long, default_value = "human")]
        format: String,
    },

    /// Answer a JSON suggestion request (read from stdin when omitted)
    Api {
        /// Request JSON: {"ingredients": "..." | [...], "topK"?: n}
        request: Option<String>,

        /// Recipe catalog file or directory (defaults to the bundled catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Estimate the food saved by cooking a recipe
    Cooked {
        /// Recipe name as it appears in the catalog
        name: String,

        /// Grams saved, if known
        #[arg(long)]
        grams: Option<u32>,

        /// Recipe catalog file or directory (defaults to the bundled catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Lint a recipe catalog for entries the matcher handles poorly
    Lint {
        /// Recipe catalog file or directory (defaults to the bundled catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format: human (default), json or sarif
        #[arg(long, default_value = "human")]
        format: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let loaded = match read_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Normalize { text, format } => match run_normalize(&text, &format) {
            Ok(output) => {
                println!("{output}");
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        Commands::Suggest {
            text,
            catalog,
            top,
            format,
        } => {
            let loader = loaded.catalog(catalog.as_deref());
            let top_k = loaded.top_k(top);
            match commands::suggest::run_suggest(&text, loader.as_ref(), top_k, &format) {
                Ok(output) => {
                    println!("{output}");
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
        Commands::Api { request, catalog } => {
            match run_api(request, &loaded, catalog.as_deref()) {
                Ok((output, success)) => {
                    println!("{output}");
                    if !success {
                        process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
        Commands::Cooked {
            name,
            grams,
            catalog,
        } => match run_cooked(&name, grams, &loaded, catalog.as_deref()) {
            Ok(output) => {
                println!("{output}");
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        Commands::Lint { catalog, format } => {
            let loader = loaded.catalog(catalog.as_deref());
            match commands::lint::run_lint(loader.as_ref(), &loaded.config.lint, &format) {
                Ok((output, error_count)) => {
                    println!("{output}");
                    if error_count > 0 {
                        process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
    }
}

/// Logs go to stderr so stdout stays parseable. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_normalize(text: &str, format: &str) -> Result<String, String> {
    let tokens: Vec<String> = normalize_text(text).into_iter().collect();

    if format == "json" {
        return serde_json::to_string_pretty(&tokens)
            .map_err(|e| format!("JSON serialization error: {e}"));
    }

    if tokens.is_empty() {
        return Ok("No ingredients recognized.".into());
    }
    Ok(tokens.join("\n"))
}

/// Returns the response envelope and whether it reports success.
fn run_api(
    request: Option<String>,
    loaded: &LoadedConfig,
    catalog: Option<&Path>,
) -> Result<(String, bool), String> {
    let request = match request {
        Some(r) => r,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("Failed to read request from stdin: {e}"))?;
            buf
        }
    };

    let loader = loaded.catalog(catalog);
    let response = suggest_envelope(&request, loader.as_ref());
    Ok((response.to_json(), response.success))
}

fn run_cooked(
    name: &str,
    grams: Option<u32>,
    loaded: &LoadedConfig,
    catalog: Option<&Path>,
) -> Result<String, String> {
    let recipes = loaded
        .catalog(catalog)
        .load()
        .map_err(|e| e.to_string())?;
    let saved = estimate_grams_saved(&recipes, name, grams);
    Ok(format!(
        "Recorded cooking of \"{name}\": estimated {saved}g saved from waste."
    ))
}
