//! randcode CLI — `randcode` command.
//!
//! Prints random strings, hex tokens, numeric codes and block-structured
//! passwords, one per line, using the operating system's CSPRNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use randcode::{
    Alphabet, Generator, PasswordBlock, PasswordPlan, Preset, DEFAULT_NUMBER_LENGTH,
    DEFAULT_STRING_LENGTH,
};

/// Password length when neither `--length` nor a plan gives one.
const DEFAULT_PASSWORD_LENGTH: usize = 16;

// ── Block spec parsing ────────────────────────────────────────────────────────

/// Parse `PRESET[:MIN[:MAX]][:sticky]`, e.g. `digits:2:4:sticky` or `letters`.
fn parse_block(spec: &str) -> std::result::Result<PasswordBlock, String> {
    let mut parts = spec.split(':');
    let preset: Preset = parts
        .next()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| format!("empty block spec '{spec}'"))?
        .parse()?;

    let mut block = PasswordBlock::new(preset);
    let mut bounds = Vec::new();
    for part in parts {
        if part.eq_ignore_ascii_case("sticky") {
            block = block.sticky(true);
        } else {
            let n: usize = part
                .parse()
                .map_err(|_| format!("invalid length '{part}' in block spec '{spec}'"))?;
            bounds.push(n);
        }
    }

    match bounds.as_slice() {
        [] => Ok(block),
        [min] => Ok(block.min_length(*min)),
        [min, max] => Ok(block.length(*min, *max)),
        _ => Err(format!("too many lengths in block spec '{spec}'")),
    }
}

fn read_plan(path: &Path) -> Result<PasswordPlan> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read plan file {}", path.display()))?;
    let plan = PasswordPlan::from_json(&json)
        .with_context(|| format!("invalid plan in {}", path.display()))?;
    log::debug!(
        "loaded plan from {}: length={}, blocks={}",
        path.display(),
        plan.length,
        plan.blocks.len()
    );
    Ok(plan)
}

// ── CLI structure ─────────────────────────────────────────────────────────────

/// randcode CLI — unbiased random strings, tokens, codes and passwords.
#[derive(Parser, Debug)]
#[command(
    name = "randcode",
    about = "randcode CLI",
    version,
    long_about = "randcode — random strings, hex tokens, numeric codes and passwords\n\nAll output is drawn from the operating system's cryptographically secure\nrandom source and mapped onto the chosen alphabet without modulo bias."
)]
struct Cli {
    /// How many values to generate (one per line)
    #[arg(short = 'n', long, global = true, default_value_t = 1)]
    count: usize,

    /// Print details about the generation to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a random string
    String {
        /// Number of symbols
        #[arg(short, long, default_value_t = DEFAULT_STRING_LENGTH)]
        length: usize,

        /// Custom alphabet, one symbol per character
        #[arg(short, long, conflicts_with = "preset")]
        alphabet: Option<String>,

        /// Named alphabet (see `randcode presets`)
        #[arg(short, long)]
        preset: Option<Preset>,
    },

    /// Generate a lowercase hex token (odd lengths round down)
    Hex {
        /// Number of hex characters
        #[arg(short, long, default_value_t = 32)]
        length: usize,
    },

    /// Generate a numeric code
    Number {
        /// Number of digits
        #[arg(short, long, default_value_t = DEFAULT_NUMBER_LENGTH)]
        length: usize,

        /// Allow the first digit to be zero
        #[arg(long)]
        allow_leading_zero: bool,
    },

    /// Generate a password from blocks
    Password {
        /// Total password length (overrides the plan's length)
        #[arg(short, long)]
        length: Option<usize>,

        /// JSON plan file
        #[arg(long, conflicts_with = "block")]
        plan: Option<PathBuf>,

        /// Block spec PRESET[:MIN[:MAX]][:sticky]; repeat in order, the last fills up
        #[arg(short, long, value_parser = parse_block)]
        block: Vec<PasswordBlock>,
    },

    /// List the named alphabets
    Presets,
}

// ── Main entry point ──────────────────────────────────────────────────────────

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("command: {:?}, count={}", cli.command, cli.count);
    let generator = Generator::new();
    let count = cli.count;
    let verbose = cli.verbose;

    let result = match cli.command {
        Commands::String {
            length,
            alphabet,
            preset,
        } => cmd_string(&generator, length, alphabet.as_deref(), preset, count, verbose),
        Commands::Hex { length } => cmd_hex(&generator, length, count, verbose),
        Commands::Number {
            length,
            allow_leading_zero,
        } => cmd_number(&generator, length, !allow_leading_zero, count, verbose),
        Commands::Password {
            length,
            plan,
            block,
        } => cmd_password(&generator, length, plan.as_deref(), block, count, verbose),
        Commands::Presets => cmd_presets(),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

// ── Command implementations ───────────────────────────────────────────────────

/// `randcode string [--length N] [--alphabet TEXT | --preset NAME]`
fn cmd_string(
    generator: &Generator,
    length: usize,
    alphabet: Option<&str>,
    preset: Option<Preset>,
    count: usize,
    verbose: bool,
) -> Result<()> {
    let alphabet = match (alphabet, preset) {
        (Some(text), _) => Alphabet::new(text).context("invalid alphabet")?,
        (None, Some(preset)) => preset.alphabet(),
        (None, None) => Alphabet::default(),
    };

    if verbose {
        eprintln!("Alphabet: {} symbols", alphabet.len());
        eprintln!("Length:   {length}");
    }

    for _ in 0..count {
        println!("{}", generator.string(length, &alphabet)?);
    }
    Ok(())
}

/// `randcode hex [--length N]`
fn cmd_hex(generator: &Generator, length: usize, count: usize, verbose: bool) -> Result<()> {
    if verbose {
        if length % 2 == 1 {
            eprintln!("Odd length {length} truncated to {}", length - 1);
        }
        eprintln!("Bytes: {}", length / 2);
    }

    for _ in 0..count {
        println!("{}", generator.hex(length)?);
    }
    Ok(())
}

/// `randcode number [--length N] [--allow-leading-zero]`
fn cmd_number(
    generator: &Generator,
    length: usize,
    no_zero_first: bool,
    count: usize,
    verbose: bool,
) -> Result<()> {
    if verbose {
        eprintln!("Digits:        {length}");
        eprintln!("Leading zero:  {}", if no_zero_first { "no" } else { "allowed" });
    }

    for _ in 0..count {
        println!("{}", generator.number(length, no_zero_first)?);
    }
    Ok(())
}

/// `randcode password [--length N] (--plan FILE | --block SPEC ...)`
fn cmd_password(
    generator: &Generator,
    length: Option<usize>,
    plan_path: Option<&Path>,
    blocks: Vec<PasswordBlock>,
    count: usize,
    verbose: bool,
) -> Result<()> {
    let mut plan = match plan_path {
        Some(path) => read_plan(path)?,
        None if blocks.is_empty() => {
            PasswordPlan::new(DEFAULT_PASSWORD_LENGTH).block(PasswordBlock::new(Preset::Alphanumeric))
        }
        None => PasswordPlan {
            length: DEFAULT_PASSWORD_LENGTH,
            blocks,
        },
    };
    if let Some(length) = length {
        plan.length = length;
    }
    plan.validate().context("password plan rejected")?;

    if verbose {
        eprintln!("Length: {}", plan.length);
        for (i, block) in plan.blocks.iter().enumerate() {
            let max = block
                .max_length
                .map_or_else(|| "-".to_string(), |m| m.to_string());
            eprintln!(
                "  Block {i}: {} symbols, min {}, max {max}{}",
                block.alphabet.len(),
                block.min_length,
                if block.sticky { ", sticky" } else { "" }
            );
        }
    }

    for _ in 0..count {
        println!("{}", generator.password_plan(&plan)?);
    }
    Ok(())
}

/// `randcode presets`
fn cmd_presets() -> Result<()> {
    for preset in Preset::ALL {
        println!(
            "{:<16} {:>3}  {}",
            preset.name(),
            preset.alphabet().len(),
            preset.symbols()
        );
    }
    Ok(())
}
