//! Line codec for the inventory file.
//!
//! One record per line, four fields joined by [`DELIMITER`] in the order
//! `id,name,quantity,registration_date`, terminated by `\n`. Other tools read
//! this file too, so the field order is fixed.
//!
//! Fields are not quoted or escaped. A delimiter inside a field makes the
//! line ambiguous on decode; the service refuses such values before writing.

use thiserror::Error;

use crate::record::InventoryRecord;

/// Field separator.
pub const DELIMITER: char = ',';

/// Line terminator written after every record.
pub const LINE_TERMINATOR: char = '\n';

/// Quantity used when the stored field is not an integer.
pub const QUANTITY_FALLBACK: i64 = 0;

const FIELD_COUNT: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("malformed line: expected {expected} fields, found {found}")]
    MalformedLine { expected: usize, found: usize },
}

/// Serialize a record to one terminated line.
pub fn encode(record: &InventoryRecord) -> String {
    format!(
        "{id}{d}{name}{d}{quantity}{d}{date}{t}",
        id = record.item_id(),
        name = record.name(),
        quantity = record.quantity(),
        date = record.registration_date(),
        d = DELIMITER,
        t = LINE_TERMINATOR,
    )
}

/// Parse one line.
///
/// Returns `Ok(None)` for an empty line and `MalformedLine` when fewer than
/// four fields are present. Fields past the fourth are ignored.
pub fn decode(line: &str) -> Result<Option<InventoryRecord>, CodecError> {
    let line = strip_terminator(line);
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() < FIELD_COUNT {
        return Err(CodecError::MalformedLine {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    Ok(Some(build(&fields)))
}

/// Parse one line, filling missing trailing fields with empty values.
///
/// Never rejects a non-empty line: a short line still yields a record so a
/// listing can show it.
pub fn decode_lenient(line: &str) -> Option<InventoryRecord> {
    let line = strip_terminator(line);
    if line.is_empty() {
        return None;
    }

    let mut fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() < FIELD_COUNT {
        fields.resize(FIELD_COUNT, "");
    }

    Some(build(&fields))
}

/// Parse a stored quantity, falling back to [`QUANTITY_FALLBACK`].
pub fn decode_quantity(field: &str) -> i64 {
    field.trim().parse().unwrap_or(QUANTITY_FALLBACK)
}

fn build(fields: &[&str]) -> InventoryRecord {
    InventoryRecord::new(
        fields[0],
        fields[1],
        decode_quantity(fields[2]),
        fields[3],
    )
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix(LINE_TERMINATOR).unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encode_writes_fields_in_wire_order() {
        let record = InventoryRecord::new("ID123", "Laptop Pro", 15, "2023-05-20");
        assert_eq!(encode(&record), "ID123,Laptop Pro,15,2023-05-20\n");
    }

    #[test]
    fn encode_keeps_negative_quantities() {
        let record = InventoryRecord::new("R1", "Returns", -3, "2023-01-02");
        assert_eq!(encode(&record), "R1,Returns,-3,2023-01-02\n");
    }

    #[test]
    fn decode_reads_a_full_line() {
        let record = decode("ID123,Laptop,15,2023-05-20").unwrap().unwrap();
        assert_eq!(record, InventoryRecord::new("ID123", "Laptop", 15, "2023-05-20"));
    }

    #[test]
    fn decode_accepts_crlf_terminated_lines() {
        let record = decode("A,Mouse,2,2023-05-20\r\n").unwrap().unwrap();
        assert_eq!(record.registration_date(), "2023-05-20");
    }

    #[test]
    fn decode_ignores_empty_lines() {
        assert_eq!(decode(""), Ok(None));
        assert_eq!(decode("\n"), Ok(None));
        assert_eq!(decode_lenient("\r\n"), None);
    }

    #[test]
    fn non_integer_quantity_decodes_to_fallback() {
        let record = decode("A,Desk,lots,2023-05-20").unwrap().unwrap();
        assert_eq!(record.quantity(), QUANTITY_FALLBACK);
        assert_eq!(record.name(), "Desk");
    }

    #[test]
    fn quantity_tolerates_surrounding_whitespace() {
        assert_eq!(decode_quantity(" 42 "), 42);
        assert_eq!(decode_quantity("-7"), -7);
        assert_eq!(decode_quantity(""), 0);
        assert_eq!(decode_quantity("99999999999999999999"), 0);
    }

    #[test]
    fn short_line_is_malformed() {
        assert_eq!(
            decode("A,Desk,3"),
            Err(CodecError::MalformedLine {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn lenient_decode_keeps_short_lines() {
        let record = decode_lenient("A,Desk").unwrap();
        assert_eq!(record, InventoryRecord::new("A", "Desk", 0, ""));
    }

    #[test]
    fn delimiter_in_name_shifts_later_fields() {
        // "Desk, oak" was written unescaped: the tail of the name lands in
        // the quantity slot and the real quantity in the date slot.
        let record = decode("A,Desk, oak,3,2023-05-20").unwrap().unwrap();
        assert_eq!(record.name(), "Desk");
        assert_eq!(record.quantity(), 0);
        assert_eq!(record.registration_date(), "3");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: decode(encode(r)) == r whenever no field holds the
        /// delimiter or a line break.
        #[test]
        fn decode_inverts_encode(
            id in "[^,\r\n]*",
            name in "[^,\r\n]*",
            quantity in any::<i64>(),
            date in "[^,\r\n]*",
        ) {
            let record = InventoryRecord::new(id, name, quantity, date);
            let decoded = decode(&encode(&record)).unwrap();
            prop_assert_eq!(decoded, Some(record));
        }
    }
}
