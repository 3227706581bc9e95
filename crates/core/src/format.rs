//! Display formatting for money, dates and quantities.

use chrono::NaiveDate;

/// Formats an amount as `$1,234.56`. Negative amounts keep the sign in
/// front of the dollar symbol.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

/// Formats an ISO date (with or without a time component) as `dd/mm/yyyy`.
/// Unparseable input passes through untouched; `None` becomes a dash.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return "-".to_string();
    };
    let date_part = raw.split('T').next().unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Whole quantities drop the trailing `.0`; fractional ones keep two
/// decimals.
pub fn format_quantity(quantity: f64) -> String {
    if (quantity - quantity.round()).abs() < 1e-9 {
        format!("{}", quantity.round() as i64)
    } else {
        format!("{quantity:.2}")
    }
}
