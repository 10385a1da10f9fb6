use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;
use tracing::info;

use gs1_decoder::logging::init_logging;
use gs1_decoder::{DecodedRecord, DecoderConfig, Gs1Decoder};

#[derive(Parser)]
#[command(name = "gs1_decoder")]
#[command(about = "GS1 Application Identifier barcode decoder")]
#[command(version = "0.1.0")]
struct Cli {
    /// Decoder config file with site-specific scanner quirks
    #[arg(long, default_value = "decoder.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a single scanned barcode string
    Decode {
        barcode: String,
        /// Emit the decoded record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether a scanned string looks like a GS1 barcode at all
    Validate { barcode: String },
    /// Decode a file of scans, one per line
    Batch {
        /// Path to the scan file
        #[arg(long)]
        input: String,
        /// Emit every record as one JSON document per line
        #[arg(long)]
        json: bool,
    },
}

fn load_decoder(config_path: &str) -> Result<Gs1Decoder> {
    if Path::new(config_path).exists() {
        let config = DecoderConfig::load(config_path)
            .with_context(|| format!("Failed to load decoder config '{}'", config_path))?;
        info!("Loaded decoder config from {}", config_path);
        Ok(Gs1Decoder::with_config(&config))
    } else {
        Ok(Gs1Decoder::new())
    }
}

fn print_record(record: &DecodedRecord, json: bool) -> Result<()> {
    if json {
        println!("{}", record.to_json()?);
        return Ok(());
    }
    println!("📦 Decoded record:");
    println!("   GTIN:            {}", record.gtin.as_deref().unwrap_or("-"));
    println!("   Batch/Lot:       {}", record.batch_number.as_deref().unwrap_or("-"));
    println!("   Serial:          {}", record.serial_number.as_deref().unwrap_or("-"));
    println!("   SSCC:            {}", record.sscc.as_deref().unwrap_or("-"));
    println!("   Expiry date:     {}", record.expiry_date.as_deref().unwrap_or("-"));
    println!("   Production date: {}", record.production_date.as_deref().unwrap_or("-"));
    for element in &record.elements {
        println!("   ({}) {}", element.ai, element.value);
    }
    Ok(())
}

fn run_batch(decoder: &Gs1Decoder, input: &str, json: bool) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read scan file '{}'", input))?;

    let mut total = 0usize;
    let mut decoded = 0usize;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        total += 1;
        let record = decoder.parse(line);
        if record.has_named_fields() {
            decoded += 1;
        }
        if json {
            println!("{}", serde_json::to_string(&record)?);
        }
    }

    println!("\n📊 Batch results for {}:", input);
    println!("   Total scans: {}", total);
    println!("   Decoded:     {}", decoded);
    println!("   Unrecognized: {}", total - decoded);
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let decoder = load_decoder(&cli.config)?;

    match cli.command {
        Commands::Decode { barcode, json } => {
            let record = decoder.parse(&barcode);
            print_record(&record, json)?;
        }
        Commands::Validate { barcode } => {
            if decoder.is_valid(&barcode) {
                println!("valid");
            } else {
                println!("not a GS1 barcode");
                std::process::exit(1);
            }
        }
        Commands::Batch { input, json } => {
            run_batch(&decoder, &input, json)?;
        }
    }
    Ok(())
}
