mod cli;

use mediainform::{
    config::{self, Config, OutputFormat},
    display, inform,
};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use serde::Serialize;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "mediainform=trace,mediainform_core=trace".to_string()
        } else {
            "mediainform=info,mediainform_core=info".to_string()
        }
    });

    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Inform { file, json } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            inform_file(&file, &config, json)
        }
        Commands::Chapters { file, json } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            list_chapters(&file, &config, json)
        }
        Commands::CheckTools => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            check_tools(&config)
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("mediainform {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn wants_json(config: &Config, json_flag: bool) -> bool {
    json_flag || config.output.format == OutputFormat::Json
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json_str = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json_str);
    Ok(())
}

fn inform_file(file: &Path, config: &Config, json: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {:?}", file);
    }

    tracing::info!("Inspecting {:?}", file);
    let info = inform::inform_file(file, &config.tools)?;

    if wants_json(config, json) {
        print_json(&info, config.output.pretty)
    } else {
        print!("{}", display::render_info(&info));
        Ok(())
    }
}

fn list_chapters(file: &Path, config: &Config, json: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {:?}", file);
    }

    let info = inform::inform_file(file, &config.tools)?;

    if wants_json(config, json) {
        return print_json(&info.menu_tracks, config.output.pretty);
    }

    if info.chapters().is_empty() {
        println!("No chapters");
    } else {
        print!("{}", display::render_chapters(info.chapters()));
    }
    Ok(())
}

fn check_tools(config: &Config) -> Result<()> {
    println!("Checking external tools...\n");

    let provider = inform::provider(&config.tools);
    match provider.resolve() {
        Ok(path) => {
            print!("✓ mediainfo");
            if let Ok(version) = provider.version() {
                print!(" ({})", version);
            }
            println!(" - {}", path.display());
            println!("\nAll required tools are available!");
        }
        Err(e) => {
            println!("✗ mediainfo ({})", e);
            println!("\nmediainfo is missing. Install it to inspect media files.");
        }
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            print_summary(&config);
        }
        None => {
            println!("No config file specified, using defaults");
            println!("Default config:");
            print_summary(&Config::default());
        }
    }

    Ok(())
}

fn print_summary(config: &Config) {
    match config.tools.mediainfo_path {
        Some(ref p) => println!("  mediainfo: {}", p.display()),
        None => println!("  mediainfo: (from PATH)"),
    }
    println!("  Output format: {:?}", config.output.format);
    println!("  Pretty JSON: {}", config.output.pretty);
}
