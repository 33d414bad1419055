use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TahseelConfig {
    pub currency: Option<CurrencyCfg>,
    pub export: Option<ExportCfg>,
    pub print: Option<PrintCfg>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrencyCfg {
    /// Unit label appended to formatted amounts, e.g. "جنيه".
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportCfg {
    pub sheet_title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrintCfg {
    /// Milliseconds the composed document waits before auto-printing,
    /// so deferred font loading can settle.
    pub delay_ms: Option<u64>,
    pub page_size: Option<String>,
    pub margins_mm: Option<u32>,
    pub font_family: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{0}")]
    Other(String),
}

pub fn load_config() -> Result<TahseelConfig, ConfigError> {
    // Search order: CWD/tahseel.toml, $HOME/.config/tahseel/tahseel.toml
    let mut merged = TahseelConfig::default();
    if let Ok(p) = std::env::current_dir() {
        let path = p.join("tahseel.toml");
        if let Ok(s) = std::fs::read_to_string(&path) {
            if let Ok(cfg) = toml::from_str::<TahseelConfig>(&s) {
                merged = merge(merged, cfg);
            }
        }
    }
    if let Some(base) = dirs::config_dir() {
        let path = base.join("tahseel").join("tahseel.toml");
        if let Ok(s) = std::fs::read_to_string(&path) {
            if let Ok(cfg) = toml::from_str::<TahseelConfig>(&s) {
                merged = merge(merged, cfg);
            }
        }
    }
    Ok(merged)
}

fn merge(mut a: TahseelConfig, b: TahseelConfig) -> TahseelConfig {
    a.currency = merge_opt(a.currency, b.currency, merge_currency);
    a.export = merge_opt(a.export, b.export, merge_export);
    a.print = merge_opt(a.print, b.print, merge_print);
    a
}

fn merge_opt<T: Default>(a: Option<T>, b: Option<T>, f: fn(T, T) -> T) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(f(a, b)),
        (None, Some(b)) => Some(b),
        (Some(a), None) => Some(a),
        (None, None) => None,
    }
}

fn merge_currency(mut a: CurrencyCfg, b: CurrencyCfg) -> CurrencyCfg {
    if a.label.is_none() {
        a.label = b.label;
    }
    a
}

fn merge_export(mut a: ExportCfg, b: ExportCfg) -> ExportCfg {
    if a.sheet_title.is_none() {
        a.sheet_title = b.sheet_title;
    }
    a
}

fn merge_print(mut a: PrintCfg, b: PrintCfg) -> PrintCfg {
    if a.delay_ms.is_none() {
        a.delay_ms = b.delay_ms;
    }
    if a.page_size.is_none() {
        a.page_size = b.page_size;
    }
    if a.margins_mm.is_none() {
        a.margins_mm = b.margins_mm;
    }
    if a.font_family.is_none() {
        a.font_family = b.font_family;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_first_writer() {
        let a = TahseelConfig {
            currency: Some(CurrencyCfg { label: Some("ريال".into()) }),
            export: None,
            print: Some(PrintCfg { delay_ms: Some(250), ..Default::default() }),
        };
        let b = TahseelConfig {
            currency: Some(CurrencyCfg { label: Some("جنيه".into()) }),
            export: Some(ExportCfg { sheet_title: Some("تقرير".into()) }),
            print: Some(PrintCfg { delay_ms: Some(900), font_family: Some("Amiri".into()), ..Default::default() }),
        };
        let m = merge(a, b);
        assert_eq!(m.currency.unwrap().label.as_deref(), Some("ريال"));
        assert_eq!(m.export.unwrap().sheet_title.as_deref(), Some("تقرير"));
        let p = m.print.unwrap();
        assert_eq!(p.delay_ms, Some(250));
        assert_eq!(p.font_family.as_deref(), Some("Amiri"));
    }
}
