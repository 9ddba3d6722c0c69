use sssp_cost::prelude::*;

const SIZE_WIDTH: usize = 10;
const COST_WIDTH: usize = 20;
const SEPARATOR: &str = " | ";

/// Formats `value` in scientific notation with a signed exponent of at
/// least two digits, e.g. `1.23e+04`.
pub(crate) fn scientific(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string().to_lowercase();
    }

    let formatted = format!("{value:.precision$e}");

    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}

/// Renders the sample table as fixed-width text, one line per row.
pub(crate) fn render(table: &SampleTable) -> String {
    let headers = table.headers();

    let mut header = format!("{:>SIZE_WIDTH$}", headers[0]);
    for name in &headers[1..] {
        header.push_str(SEPARATOR);
        header.push_str(&format!("{name:>COST_WIDTH$}"));
    }

    let mut lines = vec![header.clone(), "-".repeat(header.chars().count())];

    for row in table.rows() {
        let mut line = format!("{:>SIZE_WIDTH$}", scientific(row.size, 0));
        for cost in &row.costs {
            line.push_str(SEPARATOR);
            line.push_str(&format!("{:>COST_WIDTH$}", scientific(*cost, 2)));
        }
        lines.push(line);
    }

    lines.join("\n")
}
