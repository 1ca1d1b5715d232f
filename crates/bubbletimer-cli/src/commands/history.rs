use clap::Subcommand;

use bubbletimer_core::storage::{Config, Database};

use super::{load_engine, save_engine};

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List recent sessions
    List {
        /// Cap the listing (defaults to the configured display limit)
        #[arg(long)]
        limit: Option<usize>,
        /// Print the raw JSON records
        #[arg(long)]
        json: bool,
    },
    /// Delete all session history
    Clear,
}

pub fn run(action: HistoryAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut engine = load_engine(&db)?;

    match action {
        HistoryAction::List { limit, json } => {
            let limit = limit.unwrap_or_else(|| Config::load_or_default().history.display_limit);
            let sessions = engine.history().recent(limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&sessions)?);
            } else if sessions.is_empty() {
                println!("no sessions recorded");
            } else {
                for session in sessions {
                    println!(
                        "{}  {:>8}  {:<9}  {}",
                        session.created_at.format("%Y-%m-%d %H:%M"),
                        format_duration(session.duration_secs),
                        format!("{:?}", session.status).to_lowercase(),
                        session.label,
                    );
                }
            }
        }
        HistoryAction::Clear => {
            let event = engine.clear_history();
            println!("{}", serde_json::to_string_pretty(&event)?);
            save_engine(&db, &engine)?;
        }
    }

    Ok(())
}

fn format_duration(secs: f64) -> String {
    let total = secs.round() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
