//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;

use crate::bot::Form;
use crate::config::Config;
use crate::error::AppError;

use super::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "applybot")]
#[command(about = "Guided application questionnaire backed by SQLite", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// SQLite database holding submitted applications
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) database: Option<PathBuf>,

    /// File that keeps in-progress conversations across restarts
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) sessions: Option<PathBuf>,

    /// Keep conversations in memory only
    #[arg(long, global = true)]
    pub(crate) volatile: bool,

    /// Questionnaire variant
    #[arg(long, global = true, value_enum)]
    pub(crate) form: Option<Form>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}

impl Cli {
    /// Merge config values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Result<Self, AppError> {
        if !self.volatile && config.volatile {
            self.volatile = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        if self.database.is_none() {
            self.database = config.database.clone();
        }
        if self.sessions.is_none() {
            self.sessions = config.sessions.clone();
        }

        if self.form.is_none()
            && let Some(raw) = &config.form
        {
            let form = Form::parse(raw).ok_or_else(|| AppError::InvalidForm {
                input: raw.clone(),
            })?;
            self.form = Some(form);
        }

        Ok(self)
    }

    pub(crate) fn command(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }

    pub(crate) fn form(&self) -> Form {
        self.form.unwrap_or_default()
    }

    pub(crate) fn database_path(&self) -> Result<PathBuf, AppError> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join("applications.db")),
        }
    }

    /// Session snapshot file, or `None` when conversations are volatile
    pub(crate) fn session_path(&self) -> Result<Option<PathBuf>, AppError> {
        if self.volatile {
            return Ok(None);
        }
        match &self.sessions {
            Some(path) => Ok(Some(path.clone())),
            None => Ok(Some(data_dir()?.join("sessions.json"))),
        }
    }

    pub(crate) fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

fn data_dir() -> Result<PathBuf, AppError> {
    dirs::data_dir()
        .map(|dir| dir.join("applybot"))
        .ok_or(AppError::NoDataDir)
}
