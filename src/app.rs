use std::io;

use crate::bot::{Controller, SessionRegistry, UserId};
use crate::cli::{Cli, Commands};
use crate::error::AppError;
use crate::output::{
    output_application_json, output_applications_json, render_application_detail,
    render_application_table,
};
use crate::store::SqliteStore;
use crate::transport::run_console;

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let database = cli.database_path()?;
    let store = SqliteStore::open(&database)?;
    tracing::debug!(path = %database.display(), "opened application store");

    match cli.command() {
        Commands::Chat { user } => handle_chat(cli, store, UserId(user)),
        Commands::List { json } => handle_list(cli, &store, json),
        Commands::Show { username, json } => handle_show(cli, &store, &username, json),
    }
}

fn handle_chat(cli: &Cli, store: SqliteStore, user: UserId) -> Result<(), AppError> {
    let sessions = match cli.session_path()? {
        Some(path) => SessionRegistry::durable(path),
        None => SessionRegistry::volatile(),
    };
    let controller = Controller::new(store, sessions, cli.form());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_console(&controller, user, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn handle_list(cli: &Cli, store: &SqliteStore, json: bool) -> Result<(), AppError> {
    let applications = store.list()?;
    if json {
        println!("{}", output_applications_json(&applications));
        return Ok(());
    }
    if applications.is_empty() {
        println!("No applications submitted yet.");
        return Ok(());
    }
    println!("{}", render_application_table(&applications, cli.use_color()));
    Ok(())
}

fn handle_show(cli: &Cli, store: &SqliteStore, username: &str, json: bool) -> Result<(), AppError> {
    let username = username.trim().trim_start_matches('@');
    let Some(stored) = store.get(username)? else {
        return Err(AppError::ApplicationNotFound {
            username: username.to_string(),
        });
    };
    if json {
        println!("{}", output_application_json(&stored));
    } else {
        println!("{}", render_application_detail(&stored, cli.use_color()));
    }
    Ok(())
}
