use std::collections::BTreeMap;

use tahseel_core::{Record, Value};
use tahseel_domain::FieldKind;
use tahseel_format as fmt;

/// Currency unit label from layered config, falling back to the formatter
/// default.
pub fn currency_label_from_config() -> String {
    tahseel_config::load_config()
        .unwrap_or_default()
        .currency
        .and_then(|c| c.label)
        .unwrap_or_else(|| fmt::DEFAULT_CURRENCY_LABEL.to_string())
}

/// Render records as the table fragment the print path consumes, applying
/// the Arabic locale formatters per field kind. The output is raw display
/// markup; normalization happens once, inside document composition.
pub fn render_report_fragment(
    records: &[Record],
    labels: Option<&[(String, String)]>,
    kinds: &BTreeMap<String, FieldKind>,
    currency_label: &str,
) -> String {
    let columns: Vec<(String, String)> = match labels {
        Some(pairs) => pairs.to_vec(),
        None => {
            let mut cols: Vec<(String, String)> = Vec::new();
            for rec in records {
                for name in rec.names() {
                    if !cols.iter().any(|(n, _)| n == name) {
                        cols.push((name.to_string(), name.to_string()));
                    }
                }
            }
            cols
        }
    };

    let mut out = String::new();
    out.push_str("<table class=\"report\">\n<thead><tr>");
    for (_, label) in &columns {
        out.push_str("<th>");
        out.push_str(&escape_html(label));
        out.push_str("</th>");
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for rec in records {
        out.push_str("<tr>");
        for (field, _) in &columns {
            let kind = kinds.get(field).copied().unwrap_or(FieldKind::Text);
            let cell = rec
                .get(field)
                .map(|v| display_value(v, kind, currency_label))
                .unwrap_or_default();
            out.push_str("<td>");
            out.push_str(&escape_html(&cell));
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>");
    out
}

fn display_value(value: &Value, kind: FieldKind, currency_label: &str) -> String {
    match (kind, value) {
        (_, Value::Absent) => String::new(),
        (FieldKind::Currency, Value::Number(n)) => fmt::currency_with_label(*n, currency_label),
        (FieldKind::Currency, Value::Text(s)) => s.clone(),
        (FieldKind::Date, Value::Text(s)) => fmt::long_date_str(Some(s)),
        (FieldKind::Role, Value::Text(s)) => fmt::role_label(s).to_string(),
        (FieldKind::SchoolStatus, Value::Text(s)) => fmt::school_status_label(s).to_string(),
        (FieldKind::Transport, Value::Text(s)) => fmt::transport_label(s).to_string(),
        (FieldKind::PaymentStatus, Value::Text(s)) => fmt::payment_status_label(s).to_string(),
        (FieldKind::Number, Value::Number(n)) => fmt::arabic_digits(&trim_float(*n)),
        (_, Value::Number(n)) => trim_float(*n),
        (_, Value::Text(s)) => s.clone(),
    }
}

fn trim_float(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
