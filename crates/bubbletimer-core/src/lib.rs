//! # Bubble Timer Core Library
//!
//! This library provides the core logic for the Bubble Timer countdown app.
//! It implements a CLI-first philosophy where all operations are available
//! via a standalone CLI binary, with any graphical frontend being a thin
//! presentation layer over the same core library.
//!
//! ## Architecture
//!
//! - **Timer Engine**: A tick-counting state machine that requires the caller
//!   (or a [`Ticker`]) to invoke `tick()` once per period
//! - **History**: An append-at-front session log with a single mutable head
//!   entry, serialized whole to key-value storage on every mutation
//! - **Selector**: The pending minutes/seconds/preset configuration that
//!   seeds the next session
//! - **Storage**: SQLite-backed key-value persistence and TOML-based
//!   configuration
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core countdown state machine
//! - [`HistoryStore`]: Ordered session history and persistence
//! - [`DurationSelector`]: Pending duration configuration
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod history;
pub mod selector;
pub mod session;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use history::HistoryStore;
pub use selector::DurationSelector;
pub use session::{SessionStatus, TimerSession};
pub use storage::{Config, Database, MemoryStorage, Storage};
pub use timer::{EngineState, SharedEngine, Ticker, TimerEngine};
