//! Canonicalizes export-bound text to a stable decomposed form.
//!
//! Spreadsheet binaries and print documents do not share a rendering
//! pipeline, and precomposed Arabic forms can fail to render in fonts with
//! incomplete glyph tables while decomposed base+mark sequences are broadly
//! supported. Decomposition (NFKD) is therefore the canonical form for
//! everything that leaves this system.

use unicode_normalization::UnicodeNormalization;

/// Canonicalize `text` for export. Absent or empty input yields `""`.
///
/// Idempotent: `normalize(Some(&normalize(x)))` equals `normalize(x)`.
pub fn normalize(text: Option<&str>) -> String {
    match text {
        None => String::new(),
        Some("") => String::new(),
        Some(s) => s.nfkd().collect(),
    }
}

/// Convenience wrapper for callers that already hold a `&str`.
pub fn normalize_str(text: &str) -> String {
    normalize(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_give_empty() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
    }

    #[test]
    fn decomposes_precomposed_arabic() {
        // ARABIC LETTER ALEF WITH MADDA ABOVE -> ALEF + MADDA
        let out = normalize(Some("\u{0622}"));
        assert_eq!(out, "\u{0627}\u{0653}");
    }

    #[test]
    fn idempotent() {
        for s in ["أحمد", "مدرسة الفجر", "\u{0622}\u{0623}", "plain ascii", "١٢٣"] {
            let once = normalize(Some(s));
            let twice = normalize(Some(&once));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn combining_marks_only_input() {
        // Bare combining marks: already in canonical order they pass through
        // untouched; in arbitrary order they are reordered but stable.
        let ordered = "\u{064B}\u{0651}\u{0653}";
        assert_eq!(normalize(Some(ordered)), ordered);

        let scrambled = "\u{0653}\u{064B}\u{0651}";
        let once = normalize(Some(scrambled));
        assert_eq!(normalize(Some(&once)), once);
    }

    #[test]
    fn compatibility_forms_are_unfolded() {
        // Presentation-form ligature for "محمد"-style shaped text folds back
        // to plain letters, so cell comparison is stable across targets.
        let out = normalize(Some("\u{FDF2}")); // ALLAH ligature
        assert!(out.chars().count() > 1);
    }
}
