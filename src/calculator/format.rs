//! Formatting operands for the display regions.

/// Format an operand string for display, grouping the integer digits with
/// commas.
pub fn format_operand(operand: &str) -> String {
    format_operand_with(operand, ',')
}

/// Format an operand string for display with a custom grouping separator.
///
/// The operand is split on its decimal point. The integer digits are
/// grouped in threes; the fractional digits are appended verbatim, neither
/// grouped nor rounded, so an operand still being typed (`1234.`) renders
/// as `1,234.` instead of collapsing through a numeric round-trip. An
/// integer part that does not parse (the empty in-progress operand)
/// renders as the empty string. Non-finite operands (`Infinity`, `NaN`)
/// pass through unchanged.
pub fn format_operand_with(operand: &str, separator: char) -> String {
    if operand.parse::<f64>().is_ok_and(|value| !value.is_finite()) {
        return operand.to_string();
    }

    let (integer_part, fraction) = match operand.split_once('.') {
        Some((integer_part, fraction)) => (integer_part, Some(fraction)),
        None => (operand, None),
    };

    let integer_display = match integer_part.parse::<f64>() {
        Ok(value) => group_integer_digits(value, separator),
        Err(_) => String::new(),
    };

    match fraction {
        Some(fraction) => format!("{integer_display}.{fraction}"),
        None => integer_display,
    }
}

/// Render an integer value with its digits grouped in threes.
fn group_integer_digits(value: f64, separator: char) -> String {
    let digits = format!("{value:.0}");
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits.as_str()),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    let grouped: String = grouped.chars().rev().collect();
    format!("{sign}{grouped}")
}

/// Convert a computed value back into an operand string.
///
/// Finite values use the shortest formatting that round-trips, so a chained
/// computation re-parses exactly the result it displayed. Non-finite values
/// use their conventional display names.
pub fn stringify_result(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        value.to_string()
    }
}
