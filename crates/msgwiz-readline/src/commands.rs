//! REPL command parsing.

use anyhow::{Result, anyhow, bail};

use msgwiz_core::wizard::Channel;

/// Every command name, for completion and hints.
pub const COMMANDS: &[&str] = &[
    "/help",
    "/personas",
    "/persona",
    "/customers",
    "/customer",
    "/intention",
    "/brand",
    "/target",
    "/channel",
    "/options",
    "/tone",
    "/skin",
    "/concerns",
    "/keywords",
    "/status",
    "/generate",
    "/reset",
    "/quit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Personas,
    /// Toggle a persona; no id clears the selection.
    Persona(Option<String>),
    Customers,
    Customer(Option<String>),
    Intention(Option<String>),
    Brand(bool),
    Target(String),
    Channel(Option<Channel>),
    Options,
    Tone(String),
    SkinTypes(Vec<String>),
    Concerns(Vec<String>),
    Keywords(Vec<String>),
    Status,
    Generate,
    Reset,
    Quit,
}

fn list(arg: &str) -> Vec<String> {
    arg.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional(arg: &str) -> Option<String> {
    (!arg.is_empty()).then(|| arg.to_string())
}

pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim();
    let (name, arg) = line
        .split_once(char::is_whitespace)
        .map(|(name, arg)| (name, arg.trim()))
        .unwrap_or((line, ""));

    let command = match name {
        "/help" | "/?" => Command::Help,
        "/personas" => Command::Personas,
        "/persona" => Command::Persona(optional(arg)),
        "/customers" => Command::Customers,
        "/customer" => Command::Customer(optional(arg)),
        // `/intention ""` keeps an empty but set intention
        "/intention" => Command::Intention(match arg {
            "" => None,
            "\"\"" => Some(String::new()),
            text => Some(text.to_string()),
        }),
        "/brand" => match arg {
            "on" | "yes" | "true" => Command::Brand(true),
            "off" | "no" | "false" => Command::Brand(false),
            other => bail!("/brand expects on|off, got '{}'", other),
        },
        "/target" => Command::Target(arg.to_string()),
        "/channel" => Command::Channel(match arg {
            "" => None,
            value => Some(
                value
                    .parse::<Channel>()
                    .map_err(|_| anyhow!("Unknown channel '{}' (APP_PUSH, SMS, KAKAO, EMAIL)", value))?,
            ),
        }),
        "/options" => Command::Options,
        "/tone" => {
            if arg.is_empty() {
                bail!("/tone expects a tone id");
            }
            Command::Tone(arg.to_string())
        }
        "/skin" => Command::SkinTypes(list(arg)),
        "/concerns" => Command::Concerns(list(arg)),
        "/keywords" => Command::Keywords(list(arg)),
        "/status" => Command::Status,
        "/generate" => Command::Generate,
        "/reset" => Command::Reset,
        "/quit" | "/exit" | "quit" | "exit" => Command::Quit,
        other => bail!("Unknown command '{}'. Type /help for a list.", other),
    };
    Ok(command)
}
