//! Registration command grammar
//!
//! `登録 <M>/<D> <h>:<m> <message>`

use regex::Regex;
use std::sync::OnceLock;

/// Prefix token that marks a registration command
pub const REGISTER_TOKEN: &str = "登録";

static REGISTRATION_GRAMMAR: OnceLock<Regex> = OnceLock::new();

fn grammar() -> &'static Regex {
    REGISTRATION_GRAMMAR.get_or_init(|| {
        Regex::new(r"^登録 ([0-9]{1,2}/[0-9]{1,2} [0-9]{1,2}:[0-9]{1,2}) (.+)$")
            .expect("registration grammar is a valid regex")
    })
}

/// Classification of inbound chat text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NotRegistration,
    MalformedCommand,
    RegistrationCommand { date_token: String, message: String },
}

/// Classify chat text. Only a whole-string prefix of [`REGISTER_TOKEN`] counts.
pub fn parse_command(text: &str) -> Command {
    if !text.starts_with(REGISTER_TOKEN) {
        return Command::NotRegistration;
    }

    match grammar().captures(text) {
        Some(caps) => Command::RegistrationCommand {
            date_token: caps[1].to_string(),
            message: caps[2].to_string(),
        },
        None => Command::MalformedCommand,
    }
}
