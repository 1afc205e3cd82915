//! Text commands.
//!
//! Commands are recognised by raw prefix on the message content rather than
//! through poise's argument parser, so `!ID123456` and `!ID 123456` both reach
//! the status lookup.

pub mod lang;
pub mod status;

use serenity::all::ChannelId;

use crate::formatter::StatusCard;

pub use lang::set_language;
pub use status::check_status;

pub const STATUS_PREFIX: &str = "!ID";
pub const LANG_PREFIX: &str = "!lang";

/// A parsed command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// `!lang <code>`; `None` when no code was given.
    SetLanguage(Option<&'a str>),
    /// `!ID<uid>`; the raw trailing text, trimmed.
    CheckStatus(&'a str),
}

/// Route message content to a command, if any.
pub fn parse(content: &str) -> Option<Command<'_>> {
    if let Some(rest) = content.strip_prefix(STATUS_PREFIX) {
        return Some(Command::CheckStatus(rest.trim()));
    }

    if let Some(rest) = content.strip_prefix(LANG_PREFIX) {
        // `!language` is not `!lang`
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return None;
        }
        return Some(Command::SetLanguage(rest.split_whitespace().next()));
    }

    None
}

/// What a command handler wants sent back to the channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Card(StatusCard),
    /// The command was used outside the allowed channel.
    NotAllowed(ChannelId),
}
