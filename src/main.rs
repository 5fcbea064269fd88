//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use vdc_fantasy::{
    cli::{Commands, RosterCmd, VdcFantasy},
    commands::{
        dashboard::handle_dashboard,
        ingest::{handle_ingest, IngestParams},
        leaderboard::handle_leaderboard,
        login::handle_login,
        players::{handle_deactivate, handle_list_players},
        roster::{handle_show_roster, handle_submit_roster},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let app = VdcFantasy::parse();

    match app.command {
        Commands::Ingest {
            feed_url,
            input,
            match_id,
            verbose,
        } => {
            handle_ingest(IngestParams {
                feed_url,
                input,
                match_id,
                verbose,
            })
            .await?
        }

        Commands::Players { filters, json } => handle_list_players(filters, json)?,

        Commands::Deactivate { name } => handle_deactivate(&name)?,

        Commands::Roster { cmd } => match cmd {
            RosterCmd::Show { user, json } => handle_show_roster(user, json)?,
            RosterCmd::Submit {
                user,
                players,
                lock_deadline,
            } => handle_submit_roster(user, players, lock_deadline)?,
        },

        Commands::Dashboard { user, json } => handle_dashboard(user, json)?,

        Commands::Leaderboard { limit, json } => handle_leaderboard(limit, json)?,

        Commands::Login { code } => handle_login(&code).await?,
    }

    Ok(())
}
