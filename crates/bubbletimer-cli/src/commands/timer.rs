use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Subcommand;

use bubbletimer_core::storage::Database;
use bubbletimer_core::Ticker;

use super::{load_engine, save_engine};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start a session from the current selection
    Start,
    /// Pause the running countdown
    Pause,
    /// Resume a paused countdown
    Resume,
    /// Cancel the session in progress
    Cancel,
    /// Advance the countdown by one tick
    Tick,
    /// Print current timer state as JSON
    Status,
    /// Start (or resume) and tick in the foreground until the session ends
    Run,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut engine = load_engine(&db)?;

    match action {
        TimerAction::Start => {
            // A guarded no-op (session in progress, zero duration) falls
            // through to the snapshot so the caller can see why.
            match engine.start() {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("{}", serde_json::to_string_pretty(&engine.snapshot())?),
            }
        }
        TimerAction::Pause => match engine.pause() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("{}", serde_json::to_string_pretty(&engine.snapshot())?),
        },
        TimerAction::Resume => match engine.resume() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("{}", serde_json::to_string_pretty(&engine.snapshot())?),
        },
        TimerAction::Cancel => match engine.cancel() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("{}", serde_json::to_string_pretty(&engine.snapshot())?),
        },
        TimerAction::Tick => {
            if let Some(event) = engine.tick() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
            }
        }
        TimerAction::Status => {
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        TimerAction::Run => return run_foreground(db, engine),
    }

    save_engine(&db, &engine)?;
    Ok(())
}

/// Drive the countdown with a live ticker, printing each event, until the
/// session finishes or is no longer running.
fn run_foreground(
    db: Database,
    mut engine: bubbletimer_core::TimerEngine,
) -> Result<(), Box<dyn std::error::Error>> {
    engine.subscribe(Box::new(|event| {
        if let Ok(json) = serde_json::to_string(event) {
            println!("{json}");
        }
    }));

    if !engine.session_in_progress() && engine.start().is_none() {
        eprintln!("nothing to run: selected duration is zero");
        std::process::exit(1);
    } else if !engine.running() && engine.resume().is_none() {
        eprintln!("nothing to run: no resumable session");
        std::process::exit(1);
    }

    let shared = Arc::new(Mutex::new(engine));
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut ticker = Ticker::new();
        ticker.start(shared.clone());
        loop {
            tokio::time::sleep(Duration::from_millis(200)).await;
            let running = shared.lock().map(|e| e.running()).unwrap_or(false);
            if !running {
                break;
            }
        }
    });

    let engine = shared.lock().map_err(|_| "engine lock poisoned")?;
    save_engine(&db, &engine)?;
    Ok(())
}
