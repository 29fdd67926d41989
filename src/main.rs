//! Manual Entropy CLI
//!
//! Command-line front end for capturing seed entropy by hand and
//! inspecting how strong a captured sequence is.

use clap::{Parser, Subcommand};
use manual_entropy::{
    config::FileConfig, EntropyMetrics, EntropySession, GateDecision, Keypad, RandomError,
    SecureRandom, SessionError, StrengthGate, Token, Variant,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(name = "manual-entropy", version, about = "Capture seed entropy from dice, coins, cards or hex bytes")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the available keypads.
    Keypads,
    /// Draw random symbols from the secure generator.
    Roll {
        variant: Variant,
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
    /// Show entropy metrics for a text sequence.
    Inspect { variant: Variant, text: String },
    /// Derive seed bytes from a text sequence.
    Seed {
        variant: Variant,
        text: String,
        /// Accept entropy below the configured warning threshold.
        #[arg(long)]
        force: bool,
    },
    /// Interactive capture session on standard input.
    Capture {
        /// Defaults to the configured variant.
        variant: Option<Variant>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] manual_entropy::config::ConfigError),
    #[error(transparent)]
    Random(#[from] RandomError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Random(e)) => {
            error!("Cannot continue without secure randomness: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let gate = config.strength.gate();

    match cli.command {
        Command::Keypads => {
            for keypad in Keypad::ALL {
                println!(
                    "{:<6} {:<14} {:>6.3} bits/symbol  {:>3} symbols for 128 bits",
                    keypad.variant().key(),
                    keypad.name(),
                    keypad.bits_per_symbol(),
                    keypad.symbols_for_target()
                );
            }
            Ok(())
        }
        Command::Roll { variant, count } => {
            let mut rng = SecureRandom::shared()?;
            let mut session = EntropySession::new(variant);
            for _ in 0..count {
                session.append_random(&mut rng);
            }
            println!("{}", session.export_text());
            print_metrics(&session.metrics());
            Ok(())
        }
        Command::Inspect { variant, text } => {
            let mut session = EntropySession::new(variant);
            session.replace_from_text(&text)?;
            println!("{} {}", session.len(), variant.name());
            print_metrics(&session.metrics());
            Ok(())
        }
        Command::Seed {
            variant,
            text,
            force,
        } => {
            let mut session = EntropySession::new(variant);
            session.replace_from_text(&text)?;
            let seed = session.finish(&gate, force)?;
            println!("{}", seed.bytes().to_hex());
            if let Some(created_at) = seed.created_at() {
                info!(%created_at, "Seed creation date recorded");
            }
            Ok(())
        }
        Command::Capture { variant } => {
            let variant = variant.unwrap_or(config.session.variant);
            let stdin = io::stdin();
            let stdout = io::stdout();
            capture(
                variant,
                config.session.token_cap(),
                &gate,
                stdin.lock(),
                stdout.lock(),
            )
        }
    }
}

fn print_metrics(metrics: &EntropyMetrics) {
    println!(
        "{:.2} bits ({:.0}% of 128), {}",
        metrics.total_bits,
        metrics.progress * 100.0,
        metrics.strength
    );
}

/// Line-oriented input surface over a capture session.
///
/// End of input cancels the session and discards everything captured.
fn capture<R: BufRead, W: Write>(
    variant: Variant,
    cap: Option<usize>,
    gate: &StrengthGate,
    input: R,
    mut out: W,
) -> Result<(), CliError> {
    let mut session = EntropySession::new(variant);
    writeln!(
        out,
        "{} capture. Enter symbols, or: del, clear, roll [N|all], paste TEXT, copy, done, done!, quit",
        variant.name()
    )?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        let (command, argument) = match line.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "del" => {
                session.delete_last();
            }
            "clear" => session.clear(),
            "copy" => {
                writeln!(out, "{}", session.export_text())?;
                continue;
            }
            "paste" => {
                let decoded = match session.keypad().from_text(argument) {
                    Ok(tokens) => tokens.len(),
                    Err(e) => {
                        writeln!(out, "paste refused: {}", e)?;
                        continue;
                    }
                };
                if let Some(cap) = cap.filter(|&cap| decoded > cap) {
                    writeln!(
                        out,
                        "paste refused: {} symbols exceeds the limit of {}",
                        decoded, cap
                    )?;
                    continue;
                }
                session.replace_from_text(argument)?;
            }
            "roll" if argument == "all" => {
                let mut rng = SecureRandom::shared()?;
                session.fill_random_capped(&mut rng, cap);
            }
            "roll" => {
                let count = if argument.is_empty() {
                    1
                } else {
                    match argument.parse::<usize>() {
                        Ok(count) => count,
                        Err(_) => {
                            writeln!(out, "roll takes a count, got {:?}", argument)?;
                            continue;
                        }
                    }
                };
                let mut rng = SecureRandom::shared()?;
                for _ in 0..count {
                    if at_cap(&session, cap) {
                        break;
                    }
                    session.append_random(&mut rng);
                }
            }
            "done" | "done!" => {
                let confirmed = command == "done!";
                match session.finish(gate, confirmed) {
                    Ok(seed) => {
                        writeln!(out, "{}", seed.bytes().to_hex())?;
                        return Ok(());
                    }
                    Err(SessionError::WeakEntropy {
                        strength,
                        total_bits,
                    }) => {
                        writeln!(
                            out,
                            "Weak entropy: {} ({:.2} bits). Seeds generated with this level \
                             of entropy may not offer good security. Use done! to continue anyway.",
                            strength, total_bits
                        )?;
                        continue;
                    }
                    Err(e) => {
                        writeln!(out, "{}", e)?;
                        continue;
                    }
                }
            }
            "quit" => {
                info!("Capture cancelled; entropy discarded");
                return Ok(());
            }
            _ => match session.keypad().from_text(line) {
                Ok(tokens) => append_all(&mut session, tokens, cap)?,
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    continue;
                }
            },
        }

        let metrics = session.metrics();
        let marker = match gate.check(&metrics) {
            GateDecision::Proceed => "",
            GateDecision::ConfirmWeak { .. } => " (below threshold)",
        };
        writeln!(
            out,
            "{} symbols, {:.2} bits ({:.0}%), {}{}",
            session.len(),
            metrics.total_bits,
            metrics.progress * 100.0,
            metrics.strength,
            marker
        )?;
    }

    warn!("Input closed before capture finished; entropy discarded");
    Ok(())
}

fn at_cap(session: &EntropySession, cap: Option<usize>) -> bool {
    cap.is_some_and(|cap| session.len() >= cap)
}

fn append_all(
    session: &mut EntropySession,
    tokens: Vec<Token>,
    cap: Option<usize>,
) -> Result<(), CliError> {
    for token in tokens {
        if at_cap(session, cap) {
            warn!(cap = cap.unwrap_or_default(), "Token cap reached; remaining input ignored");
            break;
        }
        session.append(token)?;
    }
    Ok(())
}
