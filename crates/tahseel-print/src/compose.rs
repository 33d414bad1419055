use std::fmt::Write;

use tahseel_normalize::normalize_str;

use crate::capture::RenderFragment;

/// Page and timing knobs for the composed document.
#[derive(Debug, Clone)]
pub struct PrintOptions {
    pub title: String,
    /// CSS `@page` size keyword, e.g. "A4".
    pub page_size: String,
    pub margins_mm: u32,
    pub font_family: String,
    /// Delay before the auto-print trigger fires, letting deferred font
    /// loading settle. Best-effort heuristic, not a completion guarantee.
    pub print_delay_ms: u64,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            page_size: "A4".to_string(),
            margins_mm: 15,
            font_family: "'Cairo', 'Amiri', sans-serif".to_string(),
            print_delay_ms: 400,
        }
    }
}

/// Assemble a fully self-contained RTL document around the captured
/// fragment: Arabic base direction, inlined styles, print overrides and
/// the delayed auto-print / self-close trigger.
///
/// The fragment's markup and the title pass through the normalizer here,
/// their single normalization point on the print path.
pub fn compose(fragment: &RenderFragment, opts: &PrintOptions) -> String {
    let title = escape_html(&normalize_str(&opts.title));
    let markup = normalize_str(&fragment.markup);

    let mut doc = String::with_capacity(markup.len() + 2048);
    let w = &mut doc;
    let _ = writeln!(w, "<!DOCTYPE html>");
    let _ = writeln!(w, "<html lang=\"ar\" dir=\"rtl\">");
    let _ = writeln!(w, "<head>");
    let _ = writeln!(w, "<meta charset=\"utf-8\">");
    let _ = writeln!(w, "<title>{title}</title>");
    for rules in &fragment.styles {
        let _ = writeln!(w, "<style>\n{rules}\n</style>");
    }
    let _ = writeln!(w, "<style>");
    let _ = writeln!(w, "@page {{ size: {}; margin: {}mm; }}", opts.page_size, opts.margins_mm);
    let _ = writeln!(
        w,
        "body {{ direction: rtl; font-family: {}; margin: 0; }}",
        opts.font_family
    );
    let _ = writeln!(w, ".no-print, button, [role=\"button\"] {{ display: none !important; }}");
    let _ = writeln!(w, "</style>");
    let _ = writeln!(w, "</head>");
    let _ = writeln!(w, "<body>");
    let _ = writeln!(w, "<main class=\"print-page\">");
    let _ = writeln!(w, "{markup}");
    let _ = writeln!(w, "</main>");
    let _ = writeln!(w, "<script>");
    let _ = writeln!(w, "window.addEventListener('load', function () {{");
    let _ = writeln!(w, "  setTimeout(function () {{");
    let _ = writeln!(w, "    window.onafterprint = function () {{ window.close(); }};");
    let _ = writeln!(w, "    window.print();");
    let _ = writeln!(w, "  }}, {});", opts.print_delay_ms);
    let _ = writeln!(w, "}});");
    let _ = writeln!(w, "</script>");
    let _ = writeln!(w, "</body>");
    let _ = writeln!(w, "</html>");
    doc
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

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(markup: &str, styles: &[&str]) -> RenderFragment {
        RenderFragment {
            markup: markup.to_string(),
            styles: styles.iter().map(|s| s.to_string()).collect(),
            skipped: 0,
        }
    }

    #[test]
    fn document_is_rtl_and_self_contained() {
        let frag = fragment("<table><tr><td>أحمد</td></tr></table>", &["td { padding: 4px }"]);
        let opts = PrintOptions {
            title: "إيصال سداد".to_string(),
            ..Default::default()
        };
        let doc = compose(&frag, &opts);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<html lang=\"ar\" dir=\"rtl\">"));
        assert!(doc.contains("td { padding: 4px }"));
        assert!(doc.contains("<td>أحمد</td>"));
        assert!(doc.contains("@page { size: A4; margin: 15mm; }"));
        assert!(doc.contains(".no-print"));
        assert!(doc.contains("window.print()"));
        assert!(doc.contains("}, 400);"));
    }

    #[test]
    fn delay_is_configurable() {
        let doc = compose(
            &fragment("<p>x</p>", &[]),
            &PrintOptions {
                print_delay_ms: 1200,
                ..Default::default()
            },
        );
        assert!(doc.contains("}, 1200);"));
        assert!(!doc.contains("}, 400);"));
    }

    #[test]
    fn markup_is_normalized_in_composition() {
        let doc = compose(&fragment("<p>\u{0622}</p>", &[]), &PrintOptions::default());
        assert!(doc.contains("<p>\u{0627}\u{0653}</p>"));
    }

    #[test]
    fn title_is_escaped() {
        let opts = PrintOptions {
            title: "a < b & \"c\"".to_string(),
            ..Default::default()
        };
        let doc = compose(&fragment("<p>x</p>", &[]), &opts);
        assert!(doc.contains("<title>a &lt; b &amp; &quot;c&quot;</title>"));
    }

    #[test]
    fn styleless_fragment_still_composes() {
        let frag = RenderFragment {
            markup: "<p>بدون تنسيق</p>".to_string(),
            styles: Vec::new(),
            skipped: 2,
        };
        let doc = compose(&frag, &PrintOptions::default());
        assert!(doc.contains("<p>بدون تنسيق</p>"));
        assert!(doc.contains("</html>"));
    }
}
