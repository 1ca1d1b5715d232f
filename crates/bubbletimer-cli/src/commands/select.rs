use clap::Subcommand;

use bubbletimer_core::storage::Database;

use super::{load_engine, save_engine};

#[derive(Subcommand)]
pub enum SelectAction {
    /// Pick a minute value (clears any preset)
    Minutes {
        minutes: u32,
    },
    /// Pick a second value (clears any preset)
    Seconds {
        seconds: u32,
    },
    /// Apply a named preset (1m, 5m, 10m)
    Preset {
        name: String,
    },
    /// Commit a custom duration (validated)
    Custom {
        minutes: i64,
        seconds: i64,
    },
    /// Print the current selection as JSON
    Show,
}

pub fn run(action: SelectAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut engine = load_engine(&db)?;

    match action {
        SelectAction::Minutes { minutes } => {
            engine.selector_mut().set_minutes(minutes);
        }
        SelectAction::Seconds { seconds } => {
            engine.selector_mut().set_seconds(seconds);
        }
        SelectAction::Preset { name } => {
            engine.selector_mut().apply_preset(&name)?;
        }
        SelectAction::Custom { minutes, seconds } => {
            engine.selector_mut().set_custom(minutes, seconds)?;
        }
        SelectAction::Show => {}
    }

    println!(
        "{}",
        serde_json::to_string_pretty(engine.selector())?
    );
    save_engine(&db, &engine)?;
    Ok(())
}
