//! CLI entry point for fukidashi
//!
//! Plays outcome dialogs, the final-clear celebration, or a JSON script in
//! the terminal with the real typewriter and bubble timings.

use anyhow::Context;
use fukidashi::DialogConfig;
use fukidashi::cli::play::{DialogSource, run_play};
use fukidashi::types::Sequence;
use std::process;

#[derive(Debug)]
struct Options {
    source: Source,
    config: Option<String>,
    speed: f32,
}

#[derive(Debug)]
enum Source {
    Outcome { stage: u32, achieved: i64, goal: i64 },
    FinalClear,
    Script(String),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        print_usage();
        process::exit(1);
    }
    if matches!(args[0].as_str(), "--help" | "-h") {
        print_usage();
        return;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(err) = run(options).await {
        eprintln!("Error: Dialog playback failed");
        eprintln!("Reason: {err:#}");
        process::exit(1);
    }
}

fn print_usage() {
    println!("fukidashi - Speech bubble dialog player");
    println!();
    println!("USAGE:");
    println!("    fukidashi outcome <stage> <achieved> <goal> [OPTIONS]");
    println!("    fukidashi final [OPTIONS]");
    println!("    fukidashi script <file.json> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    outcome    Play the dialog for a finished stage");
    println!("    final      Play the final-clear celebration");
    println!("    script     Play a JSON array of {{\"text\", \"mood\"}} lines");
    println!("    --help, -h Show this help message");
    println!();
    println!("OPTIONS:");
    println!("    --config <file.json>   Timing overrides");
    println!("    --speed <factor>       Playback speed multiplier (default 1.0)");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run -- outcome 3 90 100");
    println!("    cargo run -- final --speed 2");
}

fn parse_args(args: &[String]) -> anyhow::Result<Options> {
    let (source, rest) = match args[0].as_str() {
        "outcome" => {
            let [stage, achieved, goal] = positional::<3>(args, "outcome")?;
            let source = Source::Outcome {
                stage: stage.parse()?,
                achieved: achieved.parse()?,
                goal: goal.parse()?,
            };
            (source, &args[4..])
        }
        "final" => (Source::FinalClear, &args[1..]),
        "script" => {
            let [path] = positional::<1>(args, "script")?;
            (Source::Script(path.clone()), &args[2..])
        }
        other => anyhow::bail!("Unknown command '{other}'"),
    };

    let mut options = Options {
        source,
        config: None,
        speed: 1.0,
    };

    let mut rest = rest.iter();
    while let Some(flag) = rest.next() {
        let value = rest
            .next()
            .ok_or_else(|| anyhow::anyhow!("Missing value for '{flag}'"))?;
        match flag.as_str() {
            "--config" => options.config = Some(value.clone()),
            "--speed" => {
                let speed: f32 = value.parse()?;
                if !speed.is_finite() || speed <= 0.0 {
                    anyhow::bail!("--speed must be a positive number");
                }
                options.speed = speed;
            }
            _ => anyhow::bail!("Unknown option '{flag}'"),
        }
    }

    Ok(options)
}

fn positional<'a, const N: usize>(
    args: &'a [String],
    command: &str,
) -> anyhow::Result<[&'a String; N]> {
    let values: Vec<&String> = args.iter().skip(1).take(N).collect();
    values
        .try_into()
        .map_err(|_| anyhow::anyhow!("'{command}' expects {} argument(s)", N))
}

async fn run(options: Options) -> anyhow::Result<()> {
    let config = match &options.config {
        Some(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read config '{path}'"))?;
            DialogConfig::from_json_str(&json)?
        }
        None => DialogConfig::default(),
    };
    let config = config.scaled(1.0 / options.speed);

    let source = match options.source {
        Source::Outcome {
            stage,
            achieved,
            goal,
        } => DialogSource::Outcome {
            stage,
            achieved,
            goal,
        },
        Source::FinalClear => DialogSource::FinalClear,
        Source::Script(path) => {
            let json = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("failed to read script '{path}'"))?;
            DialogSource::Script(Sequence::from_json(&json)?)
        }
    };

    run_play(source, config).await
}
