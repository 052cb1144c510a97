//! Stroop terminal host entry point.
//!
//! Judge whether the displayed word names the color it is painted in.
//! Commands: `start` (or `s`) starts/stops a round, `y`/`n` answer,
//! `q` quits.

use std::error::Error;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use stroop_core::palette::{Color, Palette};
use stroop_core::rng::SystemRng;
use stroop_session::application::runner::{RunnerConfig, SessionRunner};
use stroop_session::domain::commands::HostInput;
use stroop_session::domain::events::GameEvent;
use stroop_session::domain::prompt::Prompt;
use stroop_store::{FileRecordStore, RecordStore};

/// The fixed color table: material-design ARGB values keyed by English
/// color names.
fn default_palette() -> Result<Palette, Box<dyn Error>> {
    let names = ["Red", "Green", "Blue", "Yellow", "Purple", "Orange"]
        .map(str::to_owned)
        .to_vec();
    let colors = vec![
        Color(0xFFF4_4336),
        Color(0xFF4C_AF50),
        Color(0xFF21_96F3),
        Color(0xFFFF_EB3B),
        Color(0xFF9C_27B0),
        Color(0xFFFF_9800),
    ];
    Ok(Palette::from_parallel(names, colors)?)
}

/// Renders `name` in the 24-bit terminal color extracted from an ARGB
/// value.
fn painted(name: &str, color: Color) -> String {
    let r = (color.0 >> 16) & 0xFF;
    let g = (color.0 >> 8) & 0xFF;
    let b = color.0 & 0xFF;
    format!("\x1b[1;38;2;{r};{g};{b}m{name}\x1b[0m")
}

fn show_prompt(prompt: &Prompt) {
    println!("  {}  (y/n?)", painted(&prompt.label.name, prompt.swatch.color));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Read configuration from environment.
    let record_path =
        std::env::var("STROOP_RECORD_FILE").unwrap_or_else(|_| "stroop_record.txt".to_string());
    let round_secs: u64 = std::env::var("STROOP_ROUND_SECS")
        .unwrap_or_else(|_| "60".to_string())
        .parse()
        .map_err(|e| format!("STROOP_ROUND_SECS must be a positive integer: {e}"))?;
    if round_secs == 0 {
        return Err("STROOP_ROUND_SECS must be a positive integer".into());
    }

    let config = RunnerConfig {
        round_duration: Duration::from_secs(round_secs),
        tick_period: Duration::from_secs(1),
    };

    let store = FileRecordStore::new(record_path);
    println!("Record: {}", store.load());
    println!("Type `start` to begin a {round_secs}s round, `y`/`n` to answer, `q` to quit.");

    let (input_tx, input_rx) = mpsc::channel(16);
    let (event_tx, mut events) = mpsc::channel(16);

    let runner = SessionRunner::new(default_palette()?, store, SystemRng, config, event_tx);
    let runner_task = tokio::spawn(runner.run(input_rx));

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let input = match line.trim() {
                "start" | "s" => HostInput::StartPressed,
                "y" | "yes" => HostInput::YesPressed,
                "n" | "no" => HostInput::NoPressed,
                "q" | "quit" => break,
                "" => continue,
                other => {
                    println!("unknown command: {other}");
                    continue;
                }
            };
            if input_tx.send(input).await.is_err() {
                break;
            }
        }
    });

    while let Some(event) = events.recv().await {
        match event {
            GameEvent::Started { prompt, .. } => {
                println!("Go! Does the word name its own color?");
                show_prompt(&prompt);
            }
            GameEvent::Scored {
                correct,
                score,
                prompt,
            } => {
                let verdict = if correct { "+1" } else { "-1" };
                println!("{verdict}  score: {score}");
                show_prompt(&prompt);
            }
            GameEvent::Tick { remaining_millis } => {
                println!("  {}s left", remaining_millis.div_ceil(1000));
            }
            GameEvent::Finished { score, new_record } => {
                println!("Time! Final score: {score}");
                if new_record {
                    println!("New record!");
                }
            }
        }
    }

    runner_task.await??;
    Ok(())
}
