//! Command handlers module
//!
//! This module contains the terminal commands (`/login`, `/open`, ...) and
//! the dispatcher that routes a parsed command to its handler.

pub mod auth;
pub mod courses;
pub mod help;
pub mod navigate;

use std::str::FromStr;
use tracing::{debug, error, warn};
use crate::models::Role;
use crate::state::AppContext;
use crate::utils::errors::{ErrorSeverity, LmsError, Result};

/// All available terminal commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Login { email: String, password: String },
    Register { email: String, name: String, role: Option<Role> },
    Logout,
    WhoAmI,
    Open { location: String },
    Courses { subject: Option<String> },
    Sidebar,
    Quit,
}

impl FromStr for Command {
    type Err = LmsError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let Some(body) = line.strip_prefix('/') else {
            return Err(LmsError::InvalidInput(format!(
                "'{}' is not a command, commands start with '/'",
                line
            )));
        };

        let mut parts = body.split_whitespace();
        let name = parts.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();
        let usage = |text: &str| LmsError::InvalidInput(format!("usage: {}", text));

        match name.as_str() {
            "help" | "start" => Ok(Command::Help),
            "login" => {
                let (email, password) = args.split_first().ok_or_else(|| usage("/login <email> [password]"))?;
                Ok(Command::Login {
                    email: email.to_string(),
                    password: password.join(" "),
                })
            }
            "register" => parse_register(&args).ok_or_else(|| usage("/register <email> <name...> [--role <role>]"))?,
            "logout" => Ok(Command::Logout),
            "whoami" => Ok(Command::WhoAmI),
            "open" => match args.as_slice() {
                [location] => Ok(Command::Open { location: location.to_string() }),
                _ => Err(usage("/open <path>")),
            },
            "courses" => Ok(Command::Courses {
                subject: (!args.is_empty()).then(|| args.join(" ")),
            }),
            "sidebar" => Ok(Command::Sidebar),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(LmsError::InvalidInput(format!("unknown command /{}, try /help", other))),
        }
    }
}

/// `None` when the shape is wrong; an unknown role is a distinct error
fn parse_register(args: &[&str]) -> Option<Result<Command>> {
    let (email, rest) = args.split_first()?;
    let mut name_parts = Vec::new();
    let mut role = None;

    let mut iter = rest.iter();
    while let Some(arg) = iter.next() {
        if *arg == "--role" {
            let raw = iter.next()?;
            match raw.parse::<Role>() {
                Ok(parsed) => role = Some(parsed),
                Err(e) => return Some(Err(e)),
            }
        } else {
            name_parts.push(*arg);
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    Some(Ok(Command::Register {
        email: email.to_string(),
        name: name_parts.join(" "),
        role,
    }))
}

/// What the terminal prints after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), quit: false }
    }

    pub fn quit(text: impl Into<String>) -> Self {
        Self { text: text.into(), quit: true }
    }
}

/// Main command dispatcher
pub async fn handle_command(ctx: &mut AppContext, cmd: Command) -> Result<Reply> {
    debug!(command = ?cmd, "Dispatching command");

    match cmd {
        Command::Help => Ok(Reply::text(help::handle_help())),
        Command::Login { email, password } => auth::handle_login(ctx, &email, &password).await.map(Reply::text),
        Command::Register { email, name, role } => auth::handle_register(ctx, email, name, role).await.map(Reply::text),
        Command::Logout => auth::handle_logout(ctx).await.map(Reply::text),
        Command::WhoAmI => auth::handle_whoami(ctx).await.map(Reply::text),
        Command::Open { location } => navigate::handle_open(ctx, &location).await.map(Reply::text),
        Command::Courses { subject } => courses::handle_courses(ctx, subject.as_deref()).await.map(Reply::text),
        Command::Sidebar => navigate::handle_toggle_sidebar(ctx).await.map(Reply::text),
        Command::Quit => Ok(Reply::quit("Goodbye!")),
    }
}

/// Parse and run one input line; errors become a message for the user
pub async fn handle_line(ctx: &mut AppContext, line: &str) -> Reply {
    let result = match line.parse::<Command>() {
        Ok(cmd) => handle_command(ctx, cmd).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(reply) => reply,
        Err(e) => {
            match e.severity() {
                ErrorSeverity::Info | ErrorSeverity::Warning => warn!(error = %e, "Command failed"),
                ErrorSeverity::Error | ErrorSeverity::Critical => error!(error = %e, "Command failed"),
            }
            Reply::text(e.user_message())
        }
    }
}
