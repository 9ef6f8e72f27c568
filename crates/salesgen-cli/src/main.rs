mod logging;
mod paths;
mod settings;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use salesgen_core::{Catalog, Error as CoreError};
use salesgen_eval::{EvalError, verify_product_pages, verify_sales_csv};
use salesgen_generate::{
    GenerateOptions, GenerationEngine, GenerationError, bundled_pages, write_report,
};
use thiserror::Error;

use logging::init_logging;
use paths::{DataPaths, ensure_output_dirs};
use settings::{GenerateSettings, load_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("verification error: {0}")]
    Eval(#[from] EvalError),
    #[error("io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser, Debug)]
#[command(
    name = "salesgen",
    version,
    about = "Synthetic sales CSV and product page fixture generator"
)]
struct Cli {
    /// Settings file (defaults to ./salesgen.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Append JSON logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the sales CSV and product pages (default).
    Generate(GenerateArgs),
    /// Check previously generated artifacts.
    Verify(VerifyArgs),
}

#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Base directory holding structured/ and unstructured/.
    #[arg(long)]
    base_dir: Option<PathBuf>,
    /// Sales CSV path (overrides <base_dir>/structured/daily_sales.csv).
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Product page directory (overrides <base_dir>/unstructured).
    #[arg(long)]
    pages_dir: Option<PathBuf>,
    /// Catalog TOML replacing the bundled catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Number of sales records.
    #[arg(long)]
    rows: Option<usize>,
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    #[command(flatten)]
    output: OutputArgs,
    /// Seed for the record sampler; drawn at random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Create missing output directories instead of failing.
    #[arg(long, default_value_t = false)]
    create_dirs: bool,
    /// Write the run report as JSON to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct VerifyArgs {
    #[command(flatten)]
    output: OutputArgs,
}

/// Output locations after applying flags over settings.
struct ResolvedOutput {
    paths: DataPaths,
    csv_path: PathBuf,
    pages_dir: PathBuf,
    catalog: Catalog,
    rows: usize,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        None => run_generate(GenerateArgs::default(), &settings.generate),
        Some(Command::Generate(args)) => run_generate(args, &settings.generate),
        Some(Command::Verify(args)) => run_verify(args, &settings.generate),
    }
}

fn run_generate(args: GenerateArgs, settings: &GenerateSettings) -> CliResult<()> {
    let output = resolve_output(&args.output, settings)?;
    if args.create_dirs {
        ensure_output_dirs(&output.csv_path, &output.pages_dir)?;
        tracing::info!(base_dir = %output.paths.base_dir.display(), "output directories ready");
    }

    let seed = match args.seed.or(settings.seed) {
        Some(seed) => seed,
        None => {
            let seed = rand::random::<u64>();
            tracing::info!(seed, "no seed configured, drew one at random");
            seed
        }
    };

    let options = GenerateOptions {
        rows: output.rows,
        seed,
        window: settings.window()?,
        csv_path: output.csv_path,
        pages_dir: output.pages_dir,
    };

    let engine = GenerationEngine::new(options);
    let result = engine.run(&output.catalog, &bundled_pages())?;

    if let Some(report_path) = args.report.as_deref() {
        write_report(report_path, &result.report)?;
        tracing::info!(path = %report_path.display(), "report written");
    }

    tracing::info!(
        csv = %engine.options().csv_path.display(),
        pages = %engine.options().pages_dir.display(),
        seed,
        "data generation complete"
    );
    Ok(())
}

fn run_verify(args: VerifyArgs, settings: &GenerateSettings) -> CliResult<()> {
    let output = resolve_output(&args.output, settings)?;
    let window = settings.window()?;

    let sales = verify_sales_csv(
        &output.csv_path,
        &output.catalog,
        window,
        Some(output.rows as u64),
    )?;
    let pages = verify_product_pages(&output.pages_dir, &bundled_pages())?;

    let violations = (sales.violations.len() + pages.violations.len()) as u64;
    tracing::info!(
        rows = sales.rows_checked,
        pages = pages.pages_checked,
        violations,
        "verification finished"
    );

    if violations > 0 {
        return Err(EvalError::Violations(violations).into());
    }
    Ok(())
}

fn resolve_output(args: &OutputArgs, settings: &GenerateSettings) -> CliResult<ResolvedOutput> {
    let base_dir = args
        .base_dir
        .clone()
        .unwrap_or_else(|| settings.base_dir.clone());
    let paths = DataPaths::new(base_dir);
    let csv_path = args.csv.clone().unwrap_or_else(|| paths.sales_csv_path());
    let pages_dir = args
        .pages_dir
        .clone()
        .unwrap_or_else(|| paths.unstructured_dir.clone());

    let catalog = match args.catalog.as_deref().or(settings.catalog.as_deref()) {
        Some(path) => load_catalog(path)?,
        None => Catalog::bundled()?,
    };

    Ok(ResolvedOutput {
        paths,
        csv_path,
        pages_dir,
        catalog,
        rows: args.rows.unwrap_or(settings.rows),
    })
}

fn load_catalog(path: &Path) -> CliResult<Catalog> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = Catalog::from_toml_str(&contents)?;
    tracing::info!(path = %path.display(), products = catalog.len(), "catalog loaded");
    Ok(catalog)
}
