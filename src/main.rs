use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use uartrx_rs::rx::{RxConfig, UartRx};
use uartrx_rs::utils::consts;
use uartrx_rs::utils::logging::init_logging;
use uartrx_rs::wave::{self, LineEncoder};

#[derive(Parser)]
#[command(author, version, about = "Asynchronous serial (UART) line decoder", long_about = None)]
struct Cli {
    /// JSON file overriding the default timing constants
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a line capture for the given bytes
    Gen {
        /// Hex bytes, e.g. "55 a1 ff"
        bytes: String,
        /// Capture file to write (.wav, anything else is 0/1 text)
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, default_value_t = consts::TICKS_PER_BIT)]
        ticks_per_bit: u32,
        /// Idle ticks inserted between frames
        #[arg(long, default_value_t = 0)]
        gap: u32,
    },
    /// Decode a line capture and print the received bytes as hex
    Decode {
        /// Capture file to read (.wav, anything else is 0/1 text)
        input: PathBuf,
    },
}

fn parse_bytes(text: &str) -> Result<Vec<u8>, std::num::ParseIntError> {
    text.split_whitespace()
        .map(|token| u8::from_str_radix(token.trim_start_matches("0x"), 16))
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let config: RxConfig = match cli.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => RxConfig::default(),
    };

    match cli.command {
        Commands::Gen {
            bytes,
            output,
            ticks_per_bit,
            gap,
        } => {
            let data = parse_bytes(&bytes)?;
            let encoder = LineEncoder::new(ticks_per_bit);
            let samples = encoder.encode_bytes(&data, gap);
            wave::write_capture(&output, &samples, consts::WAV_SAMPLE_RATE)?;
            tracing::info!(
                "wrote {} samples ({} frames) to {}",
                samples.len(),
                data.len(),
                output.display()
            );
        }
        Commands::Decode { input } => {
            let samples = wave::read_capture(&input)?;
            tracing::info!("read {} samples from {}", samples.len(), input.display());
            let mut rx = UartRx::new(config)?;
            let decoded = rx.process_samples(&samples);
            tracing::info!("decoded {} bytes", decoded.len());
            let hex: Vec<String> = decoded.iter().map(|byte| format!("{byte:02x}")).collect();
            println!("{}", hex.join(" "));
        }
    }

    Ok(())
}
