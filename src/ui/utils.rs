//! Formatting helpers shared by the panels

use ratatui::buffer::Buffer;

/// Formats `value` with `decimals` fraction digits and comma-grouped thousands.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    // A value that rounds to zero has no sign.
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.insert(0, '-');
    }
    grouped
}

/// Dollar amount, e.g. `$49,500`.
pub fn format_usd(value: f64, decimals: usize) -> String {
    let grouped = format_grouped(value, decimals);
    match grouped.strip_prefix('-') {
        Some(magnitude) => format!("-${}", magnitude),
        None => format!("${}", grouped),
    }
}

/// Explicitly signed dollar amount with cents, e.g. `+$250.00`.
pub fn format_signed_usd(value: f64) -> String {
    let grouped = format_grouped(value, 2);
    match grouped.strip_prefix('-') {
        Some(magnitude) => format!("-${}", magnitude),
        None => format!("+${}", grouped),
    }
}

/// Profit-and-loss label, e.g. `+$250.00 (1.01%)`.
pub fn format_pnl(pnl: f64, pnl_percent: f64) -> String {
    format!("{} ({:.2}%)", format_signed_usd(pnl), pnl_percent)
}

/// Flattens a rendered buffer into text, one line per row, trailing blanks trimmed.
pub fn buffer_to_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        text.push_str(line.trim_end());
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use ratatui::prelude::Style;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(50150.0, 0), "50,150");
        assert_eq!(format_grouped(105315.0, 0), "105,315");
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_grouped(-13947.0, 0), "-13,947");
        assert_eq!(format_grouped(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(49500.0, 0), "$49,500");
        assert_eq!(format_usd(-12.5, 2), "-$12.50");
        assert_eq!(format_usd(-0.004, 2), "$0.00");
    }

    #[test]
    // Amounts that round to zero are never shown as negative.
    fn test_format_signed_usd_has_no_negative_zero() {
        assert_eq!(format_signed_usd(-0.004), "+$0.00");
        assert_eq!(format_signed_usd(-0.005001), "-$0.01");
        assert_eq!(format_signed_usd(-1234.5), "-$1,234.50");
        assert_eq!(format_signed_usd(0.0), "+$0.00");
    }

    #[test]
    // P&L keeps two decimals on both the amount and the percentage.
    fn test_format_pnl() {
        assert_eq!(format_pnl(250.0, 1.01), "+$250.00 (1.01%)");
        assert_eq!(format_pnl(500.0, 1.79), "+$500.00 (1.79%)");
        assert_eq!(format_pnl(-42.5, -0.5), "-$42.50 (-0.50%)");
    }

    #[test]
    fn test_buffer_to_text_trims_rows() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 8, 2));
        buffer.set_string(1, 0, "LYRA", Style::default());
        assert_eq!(buffer_to_text(&buffer), " LYRA\n\n");
    }
}
