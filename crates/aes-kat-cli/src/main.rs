//! Command-line interface for AES-128 known-answer verification.

#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use aes_core::{block_from_hex, block_to_hex, Aes128, Aes128Key, Block};
use aes_kat::{builtin_vectors, run_all, KnownAnswer, VectorFile};
use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// AES-128 verification CLI.
#[derive(Parser)]
#[command(
    name = "aeskat",
    version,
    about = "AES-128 ECB single-block encryption and known-answer checks"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one block and print the ciphertext.
    Encrypt {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block: String,
    },
    /// Decrypt one block and print the plaintext.
    Decrypt {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block: String,
    },
    /// Compare an externally produced ciphertext against this implementation.
    Check {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        plaintext: String,
        /// Ciphertext to verify, e.g. captured from hardware.
        #[arg(long, value_name = "HEX")]
        expected: String,
    },
    /// Run known-answer vectors and report pass/fail per case.
    Kat {
        /// TOML file with additional `[[case]]` entries.
        #[arg(long, value_name = "FILE")]
        vectors: Option<PathBuf>,
        /// Skip the built-in published vectors.
        #[arg(long, default_value_t = false)]
        no_builtin: bool,
        /// Write the failing cases to this TOML file for re-running.
        #[arg(long, value_name = "FILE")]
        write_failures: Option<PathBuf>,
    },
    /// Encrypt and decrypt a random block under a random key.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs a command; `Ok(false)` means a verification failed.
fn run(command: Commands) -> Result<bool> {
    match command {
        Commands::Encrypt { key, block } => cmd_encrypt(&key, &block).map(|_| true),
        Commands::Decrypt { key, block } => cmd_decrypt(&key, &block).map(|_| true),
        Commands::Check {
            key,
            plaintext,
            expected,
        } => cmd_check(&key, &plaintext, &expected),
        Commands::Kat {
            vectors,
            no_builtin,
            write_failures,
        } => cmd_kat(vectors.as_deref(), no_builtin, write_failures.as_deref()),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_encrypt(key_hex: &str, block_hex: &str) -> Result<String> {
    let cipher = Aes128::new(&parse_key_hex(key_hex)?);
    let ciphertext = block_to_hex(&cipher.encrypt_block(&parse_block_hex(block_hex)?));
    println!("{ciphertext}");
    Ok(ciphertext)
}

fn cmd_decrypt(key_hex: &str, block_hex: &str) -> Result<String> {
    let cipher = Aes128::new(&parse_key_hex(key_hex)?);
    let plaintext = block_to_hex(&cipher.decrypt_block(&parse_block_hex(block_hex)?));
    println!("{plaintext}");
    Ok(plaintext)
}

fn cmd_check(key_hex: &str, plaintext_hex: &str, expected_hex: &str) -> Result<bool> {
    let key = parse_key_hex(key_hex)?;
    let plaintext = parse_block_hex(plaintext_hex)?;
    let expected = block_to_hex(&parse_block_hex(expected_hex)?);
    let computed = block_to_hex(&Aes128::new(&key).encrypt_block(&plaintext));

    println!("key:       {}", key.to_hex());
    println!("plaintext: {}", block_to_hex(&plaintext));
    println!("expected:  {expected}");
    println!("computed:  {computed}");

    let matches = computed == expected;
    if matches {
        println!("PASS: expected ciphertext matches AES-128");
    } else {
        println!("FAIL: expected ciphertext does not match AES-128");
    }
    Ok(matches)
}

fn cmd_kat(
    vectors: Option<&Path>,
    no_builtin: bool,
    write_failures: Option<&Path>,
) -> Result<bool> {
    let mut cases: Vec<KnownAnswer> = Vec::new();
    if !no_builtin {
        cases.extend(builtin_vectors());
    }
    if let Some(path) = vectors {
        let file = VectorFile::load(path)
            .with_context(|| format!("load vectors from {}", path.display()))?;
        cases.extend(file.cases);
    }
    if cases.is_empty() {
        bail!("no cases to run; drop --no-builtin or pass --vectors");
    }
    info!(cases = cases.len(), "running known answers");

    let report = run_all(&cases);
    for outcome in &report.outcomes {
        println!("{outcome}");
    }
    println!("{report}");

    if let Some(path) = write_failures {
        if report.failed() > 0 {
            let failures = VectorFile {
                cases: report.failing_cases(&cases).cloned().collect(),
            };
            failures
                .save(path)
                .with_context(|| format!("write failing cases to {}", path.display()))?;
            info!(path = %path.display(), cases = failures.cases.len(), "wrote failing cases");
        }
    }
    Ok(report.success())
}

fn cmd_demo(seed: Option<u64>) -> Result<bool> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    let mut block: Block = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    rng.fill_bytes(&mut block);

    let key = Aes128Key::from(key_bytes);
    let cipher = Aes128::new(&key);
    let ciphertext = cipher.encrypt_block(&block);
    let decrypted = cipher.decrypt_block(&ciphertext);

    println!("demo key: {}", key.to_hex());
    println!("plaintext: {}", block_to_hex(&block));
    println!("ciphertext: {}", block_to_hex(&ciphertext));
    println!("decrypted: {}", block_to_hex(&decrypted));
    Ok(decrypted == block)
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    Aes128Key::from_hex(hex_str).context("parse AES-128 key (32 hex characters)")
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    block_from_hex(hex_str).context("parse block (32 hex characters)")
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    debug!(seeded = seed.is_some(), "demo rng initialised");
    ChaCha20Rng::from_seed(seed_bytes)
}
