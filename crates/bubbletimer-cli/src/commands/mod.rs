pub mod config;
pub mod history;
pub mod select;
pub mod timer;

use bubbletimer_core::storage::{Config, Database};
use bubbletimer_core::{EngineState, HistoryStore, TimerEngine};

const ENGINE_KEY: &str = "timer_engine";

/// Rebuild the engine from the kv store: parked state plus history.
///
/// The history store takes its own connection; SQLite serializes the
/// writers within the process. A fresh engine seeds its selector from the
/// configured defaults.
pub fn load_engine(db: &Database) -> Result<TimerEngine, Box<dyn std::error::Error>> {
    let history = HistoryStore::new(Box::new(Database::open()?));
    if let Ok(Some(json)) = db.kv_get(ENGINE_KEY) {
        if let Ok(state) = serde_json::from_str::<EngineState>(&json) {
            return Ok(TimerEngine::restore(state, history));
        }
    }
    let mut engine = TimerEngine::new(history);
    let cfg = Config::load_or_default();
    engine.selector_mut().set_minutes(cfg.selector.default_minutes);
    engine.selector_mut().set_seconds(cfg.selector.default_seconds);
    Ok(engine)
}

/// Park the engine state back into the kv store.
pub fn save_engine(db: &Database, engine: &TimerEngine) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(&engine.state())?;
    db.kv_set(ENGINE_KEY, &json)?;
    Ok(())
}
