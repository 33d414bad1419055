use std::fs;

pub fn run_schema(out_dir: std::path::PathBuf) -> color_eyre::Result<()> {
    let out_dir = if out_dir.as_os_str().is_empty() {
        std::path::PathBuf::from("./docs/schemas")
    } else {
        out_dir
    };
    fs::create_dir_all(&out_dir)?;
    macro_rules! dump {
        ($ty:ty, $name:literal) => {{
            let schema = schemars::schema_for!($ty);
            let path = out_dir.join($name);
            let f = std::fs::File::create(&path)?;
            serde_json::to_writer_pretty(f, &schema)?;
        }};
    }
    dump!(tahseel_domain::ExportSummary, "export_summary.schema.json");
    dump!(tahseel_domain::PrintSummary, "print_summary.schema.json");
    dump!(tahseel_domain::FieldKind, "field_kind.schema.json");
    crate::ui_ok!("schemas dumped to {}", out_dir.display());
    Ok(())
}
