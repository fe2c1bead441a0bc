//! Command-line interface for `aestrace`.

#![forbid(unsafe_code)]

use std::io;

use aestrace_core::{hex, Aes128Key, Block, CipherEngine, KeySchedule};
use aestrace_trace::Reporter;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

/// FIPS-197 appendix B example inputs, kept as the built-in demo vector.
const DEMO_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const DEMO_PLAINTEXT: &str = "3243f6a8885a308d313198a2e0370734";

/// Step-traced AES-128 CLI.
#[derive(Parser)]
#[command(
    name = "aestrace",
    version,
    author,
    about = "Step-traced AES-128 single-block encryption"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-byte block.
    Encrypt {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        plaintext_hex: String,
        /// Print every schedule word and the state after each sub-transform.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Print the 44 expanded schedule words for a key.
    Schedule {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Encrypt the FIPS-197 appendix B example block.
    Demo {
        /// Print every schedule word and the state after each sub-transform.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt {
            key_hex,
            plaintext_hex,
            trace,
        } => cmd_encrypt(&key_hex, &plaintext_hex, trace),
        Commands::Schedule { key_hex } => cmd_schedule(&key_hex),
        Commands::Demo { trace } => cmd_demo(trace),
    }
}

fn cmd_encrypt(key_hex: &str, plaintext_hex: &str, trace: bool) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let plaintext = parse_block_hex(plaintext_hex).context("decode plaintext hex")?;
    let engine = CipherEngine::new(key);

    let encryption = if trace {
        let mut reporter = Reporter::new(io::stdout().lock());
        let encryption = engine.encrypt_observed(&plaintext, &mut reporter);
        reporter.finish().context("write trace")?;
        encryption
    } else {
        engine.encrypt(&plaintext)
    };

    println!("{}", hex::encode(&encryption.ciphertext));
    Ok(())
}

fn cmd_schedule(key_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let schedule = KeySchedule::expand(&key);
    for word in schedule.words() {
        println!("{}", hex::encode(word));
    }
    Ok(())
}

fn cmd_demo(trace: bool) -> Result<()> {
    println!("key: {DEMO_KEY}");
    println!("plaintext: {DEMO_PLAINTEXT}");
    cmd_encrypt(DEMO_KEY, DEMO_PLAINTEXT, trace)
}

fn parse_key_hex(text: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(text.trim(), 16).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice()).context("key length")
}

fn parse_block_hex(text: &str) -> Result<Block> {
    let bytes = hex::decode(text.trim(), 16)?;
    let mut block = [0u8; 16];
    block.copy_from_slice(&bytes);
    Ok(block)
}
