//! Run orchestration: fetch, parse, present, report

use std::future::Future;
use std::io::Write;

use tracing::{error, warn};

use super::state::{App, Outcome};
use super::{EXIT_SUCCESS, RunError};
use crate::github::{GitHubClient, Parser};
use crate::model::Notice;
use crate::ui::widgets::ActivityTable;

impl<W: Write> App<W> {
    /// Fetch and display a user's recent activity
    ///
    /// Fetch errors abort before anything but the progress notice is printed.
    pub async fn run(&mut self, username: &str) -> Result<Outcome, RunError> {
        self.console
            .notice(&Notice::info(format!("Fetching activity for {username}...")))?;

        let client = GitHubClient::new(&self.config)?;
        let events = client.user_events(username).await?;
        let entries = Parser::parse_events(&events);

        if entries.is_empty() {
            self.console.notice(&Notice::warning(format!(
                " {username} has no recent activity..."
            )))?;
            return Ok(Outcome::NoActivity);
        }

        self.console.table(&ActivityTable::new(username, &entries))?;
        Ok(Outcome::Displayed(entries.len()))
    }

    /// Print a run error as a single line
    pub fn report(&mut self, err: &RunError) {
        let result = match err {
            RunError::Fetch(fetch) => self.console.notice(&Notice::error(fetch.to_string())),
            RunError::Interrupted => self
                .console
                .plain("")
                .and_then(|()| self.console.plain(&err.to_string())),
            RunError::Unexpected(_) => self.console.plain(&err.to_string()),
        };

        if let Err(io_err) = result {
            error!(error = %io_err, "Failed to report error");
        }
    }

    /// Run until done or until `shutdown` resolves, and return the exit code
    pub async fn execute<F>(&mut self, username: &str, shutdown: F) -> u8
    where
        F: Future<Output = ()>,
    {
        let result = tokio::select! {
            result = self.run(username) => result,
            () = shutdown => Err(RunError::Interrupted),
        };

        match result {
            Ok(_) => EXIT_SUCCESS,
            Err(err) => {
                self.report(&err);
                err.exit_code()
            }
        }
    }
}

/// Resolves on Ctrl-C
///
/// Never resolves when the handler cannot be installed.
pub async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
