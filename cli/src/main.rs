use clap::{Parser, Subcommand};
use std::path::PathBuf;

use jvpp_gen_compiler::classify::classify_all;
use jvpp_gen_compiler::{compile_api, GenError, GeneratorConfig, OutputLayout};
use jvpp_gen_schema::ApiDescription;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jvppgen")]
#[command(about = "Generate Java callbacks, DTOs and a future facade from VPP API descriptions", long_about = None)]
struct Cli {
    /// Log generated files (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java sources from a preparsed `.api.json` description
    Generate {
        /// Input API description (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Generator configuration (JSON); defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Root directory holding one directory per generated sub-package
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Create the output directories instead of requiring them
        #[arg(long)]
        create_dirs: bool,

        /// Override the framework base package
        #[arg(long)]
        base_package: Option<String>,

        /// Override the plugin package
        #[arg(long)]
        plugin_package: Option<String>,

        /// Override the plugin short name (`Core` -> `JVppCore`)
        #[arg(long)]
        plugin_name: Option<String>,
    },

    /// Print how every message of a description is classified, as JSON
    Classify {
        /// Input API description (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Generator configuration (JSON) supplying naming exceptions
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<GeneratorConfig, GenError> {
    match path {
        Some(path) => GeneratorConfig::from_path(path),
        None => Ok(GeneratorConfig::default()),
    }
}

fn main() -> Result<(), GenError> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Generate {
            input,
            config,
            output,
            create_dirs,
            base_package,
            plugin_package,
            plugin_name,
        } => {
            let mut config = load_config(config.as_ref())?;
            if let Some(p) = base_package {
                config.base_package = p.clone();
            }
            if let Some(p) = plugin_package {
                config.plugin_package = p.clone();
            }
            if let Some(n) = plugin_name {
                config.plugin_name = n.clone();
            }
            config.input_file = input.display().to_string();

            let api = ApiDescription::from_path(input)?;
            tracing::debug!("Loaded {} messages from {}", api.messages.len(), input.display());
            let layout = OutputLayout::from_root(output, &config);
            if *create_dirs {
                layout.create_all()?;
            }

            let report = compile_api(&api, &config, &layout)?;
            println!(
                "Generated {} files from {} → {}",
                report.total(),
                input.display(),
                output.display()
            );
            Ok(())
        }

        Commands::Classify { input, config } => {
            let config = load_config(config.as_ref())?;
            let api = ApiDescription::from_path(input)?;
            let rows: Vec<serde_json::Value> = classify_all(&api, &config.naming)
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "name":  m.name(),
                        "class": m.class_name,
                        "roles": m.class,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
            Ok(())
        }
    }
}
