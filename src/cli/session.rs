//! Session CLI commands
//!
//! Login, logout and whoami. Logging in loads the user's ledger; logging
//! out drops it.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_balance;
use crate::error::{TrackerError, TrackerResult};
use crate::services::Tracker;

/// Session subcommands
#[derive(Subcommand)]
pub enum SessionCommands {
    /// Log in as a user (any non-empty name and password are accepted)
    Login {
        /// Username
        username: String,
        /// Password; prompted for when omitted
        #[arg(short, long, env = "EXPENSE_TRACKER_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Log out the current user
    Logout,
    /// Show the logged-in user
    Whoami,
}

/// Handle a session command
pub fn handle_session_command(
    tracker: &mut Tracker<'_>,
    settings: &Settings,
    cmd: SessionCommands,
) -> TrackerResult<()> {
    match cmd {
        SessionCommands::Login { username, password } => {
            let password = match password {
                Some(password) => password,
                None => rpassword::prompt_password("Password: ")
                    .map_err(|e| TrackerError::Io(format!("Failed to read password: {}", e)))?,
            };

            let user = tracker.login(&username, &password)?;
            let count = tracker.transactions().len();

            println!("Logged in as {}", user);
            println!(
                "{} transaction{}. {}",
                count,
                if count == 1 { "" } else { "s" },
                format_balance(tracker.total(), &settings.currency_symbol)
            );
        }

        SessionCommands::Logout => {
            let user = tracker.current_user()?;
            tracker.logout()?;
            match user {
                Some(user) => println!("Logged out {}", user),
                None => println!("Not logged in."),
            }
        }

        SessionCommands::Whoami => match tracker.current_user()? {
            Some(user) => println!("{}", user),
            None => println!("Not logged in."),
        },
    }

    Ok(())
}
