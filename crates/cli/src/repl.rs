//! The interactive command loop.
//!
//! Reads one command per line, runs it against an [`InventoryService`] and
//! writes the outcome. A failed command prints a single `Error:` line and the
//! loop keeps going; only `exit` or end of input stops it.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use stockbook_core::DomainError;
use stockbook_infra::{InventoryError, InventoryService, RecordStore};

use crate::command::{self, Command, CommandError, ITEMADD_USAGE, ItemAdd};
use crate::render;

pub const BANNER: &str = "Stockbook Inventory System";
pub const PROMPT: &str = "> ";
pub const GOODBYE: &str = "Exiting the inventory system. Goodbye!";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Run the loop until `exit` or end of input.
///
/// A line that is not valid UTF-8 is rejected with an `Error:` line; the loop
/// carries on with the next one.
pub fn run<S, R, W>(service: &InventoryService<S>, mut input: R, out: &mut W) -> io::Result<()>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{BANNER}")?;
    writeln!(out, "Type 'help' for available commands")?;

    let mut buf = Vec::new();
    loop {
        write!(out, "\n{PROMPT}")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            writeln!(out, "{GOODBYE}")?;
            return Ok(());
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            warn!("rejecting input line that is not valid UTF-8");
            writeln!(out, "Error: Input is not valid UTF-8.")?;
            continue;
        };

        if execute_line(service, line, out)? == Flow::Exit {
            return Ok(());
        }
    }
}

/// Parse and run one input line.
pub fn execute_line<S, W>(service: &InventoryService<S>, line: &str, out: &mut W) -> io::Result<Flow>
where
    S: RecordStore,
    W: Write,
{
    match command::parse(line) {
        Ok(Some(command)) => execute(service, command, out),
        Ok(None) => Ok(Flow::Continue),
        Err(err) => {
            debug!(%err, "command rejected");
            report_command_error(&err, out)?;
            Ok(Flow::Continue)
        }
    }
}

pub fn execute<S, W>(service: &InventoryService<S>, command: Command, out: &mut W) -> io::Result<Flow>
where
    S: RecordStore,
    W: Write,
{
    match command {
        Command::ItemAdd(add) => item_add(service, add, out)?,
        Command::ItemsList => match service.list() {
            Ok(records) => write!(out, "{}", render::table(&records))?,
            Err(err) => report_inventory_error(&err, out)?,
        },
        Command::Help => write!(out, "{}", render::help())?,
        Command::Exit => {
            writeln!(out, "{GOODBYE}")?;
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

fn item_add<S, W>(service: &InventoryService<S>, add: ItemAdd, out: &mut W) -> io::Result<()>
where
    S: RecordStore,
    W: Write,
{
    match service.add(&add.id, &add.name, add.quantity, &add.registration_date) {
        Ok(()) => writeln!(out, "Item added successfully."),
        Err(err) => report_inventory_error(&err, out),
    }
}

fn report_command_error<W: Write>(err: &CommandError, out: &mut W) -> io::Result<()> {
    match err {
        CommandError::Unknown(_) => writeln!(
            out,
            "Error: Unknown command. Type 'help' for available commands."
        ),
        CommandError::Usage => {
            writeln!(out, "Error: Invalid format for itemadd command.")?;
            writeln!(out, "Usage: {ITEMADD_USAGE}")
        }
        CommandError::Domain(err) => report_domain_error(err, out),
    }
}

fn report_inventory_error<W: Write>(err: &InventoryError, out: &mut W) -> io::Result<()> {
    match err {
        InventoryError::Domain(err) => report_domain_error(err, out),
        InventoryError::Store(err) => {
            warn!(%err, "storage failure");
            writeln!(out, "Error: {err}")
        }
    }
}

fn report_domain_error<W: Write>(err: &DomainError, out: &mut W) -> io::Result<()> {
    match err {
        DomainError::InvalidDate(_) => {
            writeln!(out, "Error: Invalid date format. Please use YYYY-MM-DD.")
        }
        DomainError::InvalidQuantity(_) => writeln!(out, "Error: Quantity must be a number."),
        DomainError::Validation(msg) => writeln!(out, "Error: {msg}."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockbook_infra::InMemoryRecordStore;

    fn run_line(service: &InventoryService<&InMemoryRecordStore>, line: &str) -> (Flow, String) {
        let mut out = Vec::new();
        let flow = execute_line(service, line, &mut out).unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn itemadd_confirms_and_stores() {
        let store = InMemoryRecordStore::new();
        let service = InventoryService::new(&store);

        let (flow, out) = run_line(&service, "itemadd ID123 Laptop 15 2023-05-20");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(out, "Item added successfully.\n");
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn bad_date_prints_one_error_and_stores_nothing() {
        let store = InMemoryRecordStore::new();
        let service = InventoryService::new(&store);

        let (_, out) = run_line(&service, "itemadd X Y 1 2023-02-30");
        assert_eq!(out, "Error: Invalid date format. Please use YYYY-MM-DD.\n");
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn bad_quantity_and_usage_errors() {
        let store = InMemoryRecordStore::new();
        let service = InventoryService::new(&store);

        let (_, out) = run_line(&service, "itemadd X Y many 2023-01-01");
        assert_eq!(out, "Error: Quantity must be a number.\n");

        let (_, out) = run_line(&service, "itemadd X 1 2023-01-01");
        assert!(out.starts_with("Error: Invalid format for itemadd command.\n"));
        assert!(out.contains(ITEMADD_USAGE));
    }

    #[test]
    fn comma_in_name_is_reported() {
        let store = InMemoryRecordStore::new();
        let service = InventoryService::new(&store);

        let (_, out) = run_line(&service, "itemadd X Desk,oak 1 2023-01-01");
        assert_eq!(out, "Error: name must not contain ','.\n");
    }

    #[test]
    fn unknown_command_keeps_looping() {
        let store = InMemoryRecordStore::new();
        let service = InventoryService::new(&store);

        let (flow, out) = run_line(&service, "dance");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(
            out,
            "Error: Unknown command. Type 'help' for available commands.\n"
        );
    }

    #[test]
    fn exit_stops_the_loop() {
        let store = InMemoryRecordStore::new();
        let service = InventoryService::new(&store);

        let (flow, out) = run_line(&service, "exit");
        assert_eq!(flow, Flow::Exit);
        assert_eq!(out, format!("{GOODBYE}\n"));
    }
}
