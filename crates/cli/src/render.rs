//! Console rendering: item table and help text.

use stockbook_inventory::InventoryRecord;

use crate::command::ITEMADD_USAGE;

const TABLE_WIDTH: usize = 90;

pub fn table(records: &[InventoryRecord]) -> String {
    let rule = "-".repeat(TABLE_WIDTH);
    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<20}{:<30}{:<20}{:<20}|\n",
        "| Item ID", "| Item Name", "| Quantity", "| Reg Date"
    ));
    out.push_str(&rule);
    out.push('\n');

    for record in records {
        out.push_str(&format!(
            "| {:<18}| {:<28}| {:<18}| {:<18}|\n",
            record.item_id().as_str(),
            record.name(),
            record.quantity(),
            record.registration_date(),
        ));
    }

    out.push_str(&rule);
    out.push('\n');
    out
}

pub fn help() -> String {
    let rule = "-".repeat(60);
    format!(
        "\nCommands syntaxes:\n\
         {rule}\n\
         {ITEMADD_USAGE}\n    \
         Adds a new item to the inventory.\n    \
         Example: itemadd ID123 Laptop 15 2023-05-20\n\n\
         itemslist\n    \
         Lists all items in the inventory in alphabetical order.\n\n\
         help\n    \
         Displays this help information.\n\n\
         exit\n    \
         Exits the program.\n\
         {rule}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_has_header_and_rules_only() {
        let out = table(&[]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].len(), 90);
        assert_eq!(
            lines[1],
            "| Item ID           | Item Name                   | Quantity          | Reg Date          |"
        );
    }

    #[test]
    fn rows_are_padded_into_columns() {
        let out = table(&[InventoryRecord::new("ID123", "Laptop", 15, "2023-05-20")]);
        let row = out.lines().nth(3).unwrap();
        assert_eq!(
            row,
            "| ID123             | Laptop                      | 15                | 2023-05-20        |"
        );
    }

    #[test]
    fn help_lists_every_command() {
        let text = help();
        for word in ["itemadd", "itemslist", "help", "exit"] {
            assert!(text.contains(word), "help is missing {word}");
        }
        assert!(text.contains("Example: itemadd ID123 Laptop 15 2023-05-20"));
    }
}
