mod engine;
mod ticker;

pub use engine::{EngineState, TimerEngine};
pub use ticker::{SharedEngine, Ticker};
