//! Arabic-locale display formatters.
//!
//! Every function here is pure and total: bad input degrades to a
//! best-effort string, never an error. None of these normalize their
//! output; callers on an export path run it through `tahseel-normalize`.

use chrono::{Datelike, NaiveDate};

/// Currency unit label used when the caller does not supply one.
pub const DEFAULT_CURRENCY_LABEL: &str = "جنيه";

const ARABIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// U+066C ARABIC THOUSANDS SEPARATOR
const THOUSANDS_SEP: char = '\u{066C}';
/// U+066B ARABIC DECIMAL SEPARATOR
const DECIMAL_SEP: char = '\u{066B}';

const MONTHS: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو",
    "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
];

/// Map ASCII digits to Eastern Arabic-Indic; everything else passes through.
pub fn arabic_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => ARABIC_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Render an amount with Arabic grouping and the default currency label.
pub fn currency(amount: f64) -> String {
    currency_with_label(amount, DEFAULT_CURRENCY_LABEL)
}

/// Render an amount with Arabic-Indic digits, U+066C grouping, U+066B
/// decimal separator and a trailing unit label. Fractions are rounded to
/// piastre precision (2 digits) with trailing zeros trimmed.
pub fn currency_with_label(amount: f64, label: &str) -> String {
    if !amount.is_finite() {
        tracing::warn!(event = "currency_non_finite", amount = amount);
        return format!("{amount} {label}");
    }

    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u128;
    let whole = cents / 100;
    let frac = (cents % 100) as u32;

    let mut out = String::new();
    if negative && cents > 0 {
        out.push('-');
    }
    out.push_str(&arabic_digits(&group_thousands(whole)));
    if frac > 0 {
        out.push(DECIMAL_SEP);
        let frac_str = if frac % 10 == 0 {
            format!("{}", frac / 10)
        } else {
            format!("{frac:02}")
        };
        out.push_str(&arabic_digits(&frac_str));
    }
    out.push(' ');
    out.push_str(label);
    out
}

fn group_thousands(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while n > 0 {
        groups.push((n % 1000) as u32);
        n /= 1000;
    }
    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    while let Some(g) = groups.pop() {
        out.push(THOUSANDS_SEP);
        out.push_str(&format!("{g:03}"));
    }
    out
}

/// Arabic long-date rendering, e.g. "١٥ يناير ٢٠٢٤".
pub fn long_date(date: NaiveDate) -> String {
    let month = MONTHS[(date.month0() as usize).min(11)];
    format!(
        "{} {} {}",
        arabic_digits(&date.day().to_string()),
        month,
        arabic_digits(&date.year().to_string()),
    )
}

/// Parse an ISO-like date string and render it as a long Arabic date.
///
/// Absent input yields `""`; anything unparseable comes back verbatim so
/// the bad value stays visible in the report instead of vanishing.
pub fn long_date_str(date: Option<&str>) -> String {
    let Some(raw) = date else {
        return String::new();
    };
    if raw.is_empty() {
        return String::new();
    }
    match parse_iso_date(raw) {
        Some(d) => long_date(d),
        None => {
            tracing::warn!(event = "date_unparseable", raw = raw);
            raw.to_string()
        }
    }
}

/// Locale-independent `YYYY-MM-DD`, for round-tripping through editable
/// form fields. The one formatter whose output stays ASCII.
pub fn input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    // Datetime forms: take the calendar-date prefix.
    if let Some(prefix) = raw.get(..10) {
        if let Ok(d) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return Some(d);
        }
    }
    None
}

// Enum code -> Arabic label tables. Unrecognized codes come back unchanged
// so an unmapped code is visible in the output rather than hidden.

pub fn role_label(code: &str) -> &str {
    match code {
        "admin" => "مدير",
        "accountant" => "محاسب",
        "supervisor" => "مشرف",
        _ => code,
    }
}

pub fn school_status_label(code: &str) -> &str {
    match code {
        "active" => "منتظم",
        "transferred" => "منقول",
        "graduated" => "متخرج",
        "withdrawn" => "منسحب",
        _ => code,
    }
}

pub fn transport_label(code: &str) -> &str {
    match code {
        "none" => "بدون",
        "one_way" => "اتجاه واحد",
        "two_way" => "اتجاهان",
        _ => code,
    }
}

pub fn payment_status_label(code: &str) -> &str {
    match code {
        "paid" => "مدفوع",
        "partial" => "مدفوع جزئيا",
        "unpaid" => "غير مدفوع",
        "overdue" => "متأخر",
        _ => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_zero_has_digit_and_label() {
        let s = currency(0.0);
        assert_eq!(s, "٠ جنيه");
        assert!(s.ends_with(DEFAULT_CURRENCY_LABEL));
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency(1500.0), "١\u{066C}٥٠٠ جنيه");
        assert_eq!(currency(1234567.0), "١\u{066C}٢٣٤\u{066C}٥٦٧ جنيه");
    }

    #[test]
    fn currency_fractions_and_negative() {
        assert_eq!(currency(2300.5), "٢\u{066C}٣٠٠\u{066B}٥ جنيه");
        assert_eq!(currency(-75.25), "-٧٥\u{066B}٢٥ جنيه");
        // never empty, label always present
        for amount in [0.0, -0.0, 0.004, f64::NAN, f64::INFINITY] {
            let s = currency_with_label(amount, "ريال");
            assert!(!s.is_empty());
            assert!(s.contains("ريال"));
        }
    }

    #[test]
    fn long_date_renders_arabic() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(long_date(d), "١٥ يناير ٢٠٢٤");
    }

    #[test]
    fn long_date_str_fallbacks() {
        assert_eq!(long_date_str(None), "");
        assert_eq!(long_date_str(Some("")), "");
        assert_eq!(long_date_str(Some("2024-09-01")), "١ سبتمبر ٢٠٢٤");
        assert_eq!(long_date_str(Some("2024-09-01T10:30:00")), "١ سبتمبر ٢٠٢٤");
        // unparseable input stays visible
        assert_eq!(long_date_str(Some("يوم الخميس")), "يوم الخميس");
    }

    #[test]
    fn input_date_round_trips() {
        let d = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let s = input_date(d);
        assert_eq!(s, "2023-12-31");
        assert_eq!(NaiveDate::parse_from_str(&s, "%Y-%m-%d").unwrap(), d);
    }

    #[test]
    fn unknown_enum_codes_pass_through() {
        assert_eq!(role_label("admin"), "مدير");
        assert_eq!(role_label("janitor"), "janitor");
        assert_eq!(school_status_label("active"), "منتظم");
        assert_eq!(school_status_label("frozen"), "frozen");
        assert_eq!(transport_label("two_way"), "اتجاهان");
        assert_eq!(payment_status_label("paid"), "مدفوع");
        assert_eq!(payment_status_label(""), "");
    }
}
