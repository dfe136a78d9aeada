use clap::Args;
use stegobmp_core::history::Category;

use super::Session;
use crate::CliResult;

/// Shows the recent files, patterns and messages of a user
#[derive(Args, Debug)]
pub struct HistoryArgs {}

impl HistoryArgs {
    pub fn run(self, session: &Session) -> CliResult<()> {
        let Some(store) = session.store() else {
            println!("No history file configured, pass --history <file>");
            return Ok(());
        };

        let history = session.history();
        println!("History of {} in {}", session.user(), store.path().display());
        for category in Category::ALL {
            println!("{category}:");
            for entry in history.entries(category) {
                println!("  {entry}");
            }
        }
        if let Some(choice) = history.last_pattern() {
            println!("next synthesize defaults to: {choice}");
        }

        Ok(())
    }
}
