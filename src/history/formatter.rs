use crate::history::record::ConversionRecord;

const HEADERS: [&str; 4] = ["Value", "From", "To", "Result"];

/// Shortest round-trip form, or fixed decimals when `precision` is set.
///
/// Whole numbers carry no fractional part: `1000.0` renders as `1000`, not
/// `1000.0`. Set `precision` to get a fixed number of decimals instead.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{:.*}", digits, value),
        None => value.to_string(),
    }
}

/// Display label for a finished conversion: "<result> <toUnit>"
pub fn format_result(result: f64, to_unit: &str, precision: Option<usize>) -> String {
    format!("{} {}", format_number(result, precision), to_unit)
}

/// Render records as a text table with one row per conversion
pub fn render_table(records: &[ConversionRecord], precision: Option<usize>) -> String {
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|record| {
            [
                format_number(record.value(), precision),
                record.from_unit().to_string(),
                record.to_unit().to_string(),
                format_number(record.result(), precision),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(HEADERS.iter().copied(), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(format_row(row.iter().map(String::as_str), &widths));
    }

    lines.join("\n")
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize; 4]) -> String {
    cells
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
