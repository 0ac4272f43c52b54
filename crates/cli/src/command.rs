//! Parsing of raw input lines into commands.
//!
//! Command words match case-insensitively; arguments keep their case.

use thiserror::Error;

use stockbook_core::DomainError;

pub const ITEMADD_USAGE: &str = "itemadd <item_id> <item_name> <quantity> <registration_date>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ItemAdd(ItemAdd),
    ItemsList,
    Help,
    Exit,
}

/// Arguments of `itemadd`, with the quantity already parsed.
///
/// The date is left as typed; the service validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAdd {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    pub registration_date: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("invalid format for itemadd command")]
    Usage,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let mut tokens = line.split_whitespace();
    let Some(word) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = tokens.collect();

    let command = match (word.to_ascii_lowercase().as_str(), args.is_empty()) {
        ("itemadd", _) => Command::ItemAdd(parse_item_add(&args)?),
        ("itemslist", true) => Command::ItemsList,
        ("help", true) => Command::Help,
        ("exit", true) => Command::Exit,
        _ => return Err(CommandError::Unknown(line.trim().to_string())),
    };
    Ok(Some(command))
}

// id, one or more name tokens, quantity, date.
fn parse_item_add(args: &[&str]) -> Result<ItemAdd, CommandError> {
    let [id, rest @ .., quantity, date] = args else {
        return Err(CommandError::Usage);
    };
    if rest.is_empty() {
        return Err(CommandError::Usage);
    }

    let quantity = quantity
        .parse()
        .map_err(|_| DomainError::invalid_quantity(*quantity))?;

    Ok(ItemAdd {
        id: id.to_string(),
        name: rest.join(" "),
        quantity,
        registration_date: date.to_string(),
    })
}
