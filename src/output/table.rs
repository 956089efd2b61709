//! Fixed-width text table of subnet records.

use crate::models::SubnetRecord;
use colored::Colorize;

const COLUMNS: [(&str, usize); 6] = [
    ("NAME", 20),
    ("CIDR", 25),
    ("ADDRCOUNT", 15),
    ("FIRSTADDR", 20),
    ("LASTADDR", 20),
    ("DESCRIPTION", 50),
];

/// Format a value as a left-aligned field of at least `width` characters.
///
/// A value that fills the column still gets one trailing space so adjacent
/// columns never run together.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.chars().count() >= width {
        format!("{value_str} ")
    } else {
        format!("{value_str:<width$}")
    }
}

/// Render records as a table with a header row, one line per record.
pub fn render_table(records: &[SubnetRecord], colored: bool) -> String {
    let header: String = COLUMNS
        .iter()
        .map(|(title, width)| format_field(title, *width))
        .collect();
    let header = header.trim_end();

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(if colored {
        header.bold().to_string()
    } else {
        header.to_string()
    });

    for record in records {
        let fields = [
            record.name.to_string(),
            record.cidr.to_string(),
            record.addr_count.to_string(),
            record.first_addr.to_string(),
            record.last_addr.to_string(),
            record.description.to_string(),
        ];
        let line: String = fields
            .iter()
            .zip(COLUMNS.iter())
            .map(|(value, (_, width))| format_field(value, *width))
            .collect();
        let line = line.trim_end();
        lines.push(if colored && record.reserved {
            line.dimmed().to_string()
        } else {
            line.to_string()
        });
    }
    lines.join("\n")
}
