use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use convpreset::engine::{OutputFormat, Preset, PresetDocument, SymbolicEnum};
use convpreset::{config, engine, logging};
use std::io::Read;
use std::path::Path;
use std::process;

pub fn run(cli: Cli) {
    let config = config::Config::load().unwrap_or_default();

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    if let Err(e) = logging::init(level) {
        eprintln!("Error: {:#}", e);
        process::exit(2);
    }

    let result = match cli.command {
        Commands::New {
            name,
            format,
            inputs,
            settings,
        } => handle_new(&config, name, format, inputs, settings),
        Commands::Check { file, siblings } => handle_check(&file, &siblings),
        Commands::Formats => {
            handle_formats();
            Ok(())
        }
        Commands::InitConfig => {
            handle_init_config();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn parse_format(symbol: &str) -> Result<OutputFormat> {
    match OutputFormat::from_symbol(symbol) {
        Some(format) => Ok(format),
        None => {
            let known: Vec<_> = OutputFormat::ALL.iter().map(|f| f.symbol()).collect();
            bail!(
                "Unknown output format '{}' (expected one of: {})",
                symbol,
                known.join(", ")
            )
        }
    }
}

fn handle_new(
    config: &config::Config,
    name: Option<String>,
    format: Option<String>,
    inputs: Vec<String>,
    settings: Vec<String>,
) -> Result<()> {
    let mut preset = config.defaults.new_preset(name.as_deref());

    if let Some(symbol) = format {
        preset.set_output_format(parse_format(&symbol)?);
    }
    if !inputs.is_empty() {
        preset.set_input_types(inputs);
    }

    for pair in &settings {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("Expected KEY=VALUE, got '{}'", pair))?;
        preset
            .set_setting_value(key.trim(), value.trim())
            .with_context(|| format!("Invalid setting '{}'", pair))?;
    }

    if let Some(problem) = preset.error(&engine::NoSiblings) {
        tracing::warn!("{}", problem);
    }

    println!("{}", preset.to_document().to_json()?);
    Ok(())
}

fn read_document(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read document from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read document: {}", file.display()))
    }
}

fn handle_check(file: &Path, siblings: &[String]) -> Result<()> {
    let json = read_document(file)?;
    let doc = PresetDocument::from_json(&json)?;
    let preset = Preset::from_document(&doc)?;

    println!("Name: {}", preset.name());
    match preset.output_format() {
        Some(format) => println!("Output format: {}", format),
        None => println!("Output format: (none)"),
    }
    println!("Input types: {}", preset.input_types().join(", "));
    println!("Settings:");
    for (key, value) in preset.settings().iter() {
        println!("  {} = {}", key, value);
    }

    let dropped = doc.irrelevant_entries().count();
    if dropped > 0 {
        println!("Dropped {} setting(s) not relevant to the output format", dropped);
    }

    // The host registry holds the checked preset plus the named siblings
    let registry = |name: &str| 1 + siblings.iter().filter(|s| s.as_str() == name).count();
    match preset.error(&registry) {
        Some(problem) => bail!("{}", problem),
        None => println!("Valid"),
    }
    Ok(())
}

fn handle_formats() {
    for format in OutputFormat::ALL {
        let defaults = engine::default_settings(*format);
        if defaults.is_empty() {
            println!("{} (.{}): no settings", format, format.extension());
            continue;
        }
        println!("{} (.{}):", format, format.extension());
        for d in defaults {
            println!("  {} (default {})", d.key, d.value);
        }
    }
}

fn handle_init_config() {
    match config::Config::config_path() {
        Ok(path) if path.exists() => match config::Config::load_from(&path) {
            Ok(cfg) => {
                println!("Config loaded successfully from {}", path.display());
                println!("{:#?}", cfg);
            }
            Err(e) => {
                eprintln!("Config invalid: {:#}", e);
                process::exit(1);
            }
        },
        Ok(path) => {
            println!("Creating default config...");
            if let Err(err) = config::Config::default().save_to(&path) {
                eprintln!("Failed to save default config: {:#}", err);
                process::exit(1);
            }
            println!("Default config saved to {}", path.display());
        }
        Err(e) => {
            eprintln!("Config path unknown: {:#}", e);
            process::exit(1);
        }
    }
}
