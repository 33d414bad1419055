use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use tracing_appender::rolling;

mod commands;
mod records;
mod ui;

#[derive(Parser)]
#[command(name = "tahseel", version, about = "Arabic school-fee reporting and export toolkit")]
struct Cli {
    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Export records to a right-to-left .xlsx spreadsheet
    Export {
        /// JSON array of record objects
        #[arg(long)]
        records: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Sheet title (defaults to config, then "تقرير")
        #[arg(long)]
        title: Option<String>,
    },

    /// Build a blank fill-in template with a fixed Arabic header row
    Template {
        /// JSON object of field -> display label, in column order
        #[arg(long)]
        labels: PathBuf,
        /// Optional JSON array of sample records to seed rows
        #[arg(long)]
        samples: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        title: Option<String>,
    },

    /// Open a captured markup fragment as a printable RTL document
    Print {
        /// File holding the serialized markup snapshot
        #[arg(long)]
        fragment: PathBuf,
        /// Style sources to inline; unreadable ones are skipped
        #[arg(long = "style")]
        styles: Vec<PathBuf>,
        #[arg(long)]
        title: Option<String>,
        /// Write the composed document here instead of opening it
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Render records as a formatted fee report and print it
    Report {
        #[arg(long)]
        records: PathBuf,
        /// JSON object of field -> display label
        #[arg(long)]
        labels: Option<PathBuf>,
        /// JSON object of field -> kind (currency, date, payment_status, ...)
        #[arg(long)]
        kinds: Option<PathBuf>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Dump JSON schemas of the result DTOs
    Schema {
        #[arg(long, default_value = "")]
        out_dir: PathBuf,
    },
}

impl Commands {
    fn run(self, use_color: bool) -> Result<()> {
        let cmd_name = match &self {
            Commands::Export { .. } => "export",
            Commands::Template { .. } => "template",
            Commands::Print { .. } => "print",
            Commands::Report { .. } => "report",
            Commands::Schema { .. } => "schema",
        };
        info!("▶ Starting command: {}", cmd_name);

        let result = match self {
            Commands::Export { records, out, title } => {
                commands::export::run_export(records, out, title, use_color)
            }
            Commands::Template { labels, samples, out, title } => {
                commands::template::run_template(labels, samples, out, title)
            }
            Commands::Print { fragment, styles, title, out } => {
                commands::print::run_print(fragment, styles, title, out)
            }
            Commands::Report { records, labels, kinds, title, out } => {
                commands::report::run_report(records, labels, kinds, title, out)
            }
            Commands::Schema { out_dir } => commands::schema::run_schema(out_dir),
        };

        match &result {
            Ok(_) => info!("✔ Finished command: {}", cmd_name),
            Err(e) => error!("✖ Command {} failed: {:?}", cmd_name, e),
        }

        result
    }
}

fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = rolling::daily("logs", "tahseel.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")));

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(file_writer)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let _guard = init_tracing();

    let cli = Cli::parse();

    let use_color = !cli.no_color
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();

    cli.cmd.run(use_color)
}
