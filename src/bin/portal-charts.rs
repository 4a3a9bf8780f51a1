use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use portal_charts::{
    Chart, ChartRequest, ExportEnvelope, ExportJob, ExportThreading, FigureRenderer, Table,
    theme::{
        allocate::{allocate_entries, color_count},
        palette::{PaletteRegistry, QUANTITATIVE_ORDER},
    },
};

#[derive(Parser, Debug)]
#[command(name = "portal-charts", version)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build one chart and write its export envelope.
    Export(ExportArgs),
    /// Export every chart listed in a manifest.
    Batch(BatchArgs),
    /// Print the themed color sequence for N categories.
    Palette(PaletteArgs),
    /// Summarize an exported envelope.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Table JSON (object of column name to values).
    #[arg(long)]
    table: PathBuf,

    /// Chart request JSON, e.g. `{"chartType": "bar", ...}`.
    #[arg(long)]
    chart: PathBuf,

    /// Output envelope path.
    #[arg(long)]
    out: PathBuf,

    /// Write compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    /// Explicit colors, comma separated. Overrides the themed allocation.
    #[arg(long, value_delimiter = ',')]
    colors: Vec<String>,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Manifest JSON: `{"charts": [{"table": ..., "chart": ..., "out": ...}]}`.
    #[arg(long)]
    manifest: PathBuf,

    /// Worker threads (default: one per core).
    #[arg(long)]
    threads: Option<usize>,

    /// Export one chart at a time on the calling thread.
    #[arg(long)]
    sequential: bool,
}

#[derive(Parser, Debug)]
struct PaletteArgs {
    /// Number of categories.
    #[arg(long, allow_negative_numbers = true)]
    count: i64,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Envelope JSON written by `export` or `batch`.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(serde::Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct Manifest {
    charts: Vec<ManifestEntry>,
}

#[derive(serde::Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct ManifestEntry {
    table: PathBuf,
    /// A request object inline, or a path string to one.
    chart: serde_json::Value,
    out: PathBuf,
}

impl ManifestEntry {
    fn load(&self, root: &Path) -> anyhow::Result<(Table, ChartRequest)> {
        let table: Table = read_json(&root.join(&self.table), "table")?;
        let request = match &self.chart {
            serde_json::Value::String(path) => read_json(&root.join(path), "chart request")?,
            value @ serde_json::Value::Object(_) => {
                serde_json::from_value(value.clone()).context("parse inline chart request")?
            }
            other => anyhow::bail!("chart must be a request object or a path, got {other}"),
        };
        Ok((table, request))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Export(args) => cmd_export(args),
        Command::Batch(args) => cmd_batch(args),
        Command::Palette(args) => cmd_palette(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse {what} JSON '{}'", path.display()))
}

fn write_envelope(path: &Path, envelope: &ExportEnvelope, compact: bool) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let bytes = if compact {
        envelope.to_json_vec()?
    } else {
        envelope.to_json_pretty()?.into_bytes()
    };
    std::fs::write(path, bytes).with_context(|| format!("write envelope '{}'", path.display()))
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let table: Table = read_json(&args.table, "table")?;
    let mut request: ChartRequest = read_json(&args.chart, "chart request")?;
    if !args.colors.is_empty() {
        request = request.with_colors(args.colors);
    }

    let kind = request.kind();
    let envelope = Chart::build(table, request, &FigureRenderer::new())
        .with_context(|| format!("build {kind} chart"))?
        .export()?;
    write_envelope(&args.out, &envelope, args.compact)?;

    println!("wrote {kind} envelope to {}", args.out.display());
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let manifest: Manifest = read_json(&args.manifest, "manifest")?;
    let root = args.manifest.parent().unwrap_or_else(|| Path::new("."));
    let total = manifest.charts.len();

    // Entries that fail to load keep their slot so output stays in manifest order.
    let mut jobs = Vec::with_capacity(total);
    let mut slots: Vec<(PathBuf, Option<anyhow::Error>)> = Vec::with_capacity(total);
    for entry in &manifest.charts {
        let out = root.join(&entry.out);
        match entry.load(root) {
            Ok((table, request)) => {
                jobs.push(ExportJob::new(out.display().to_string(), table, request));
                slots.push((out, None));
            }
            Err(e) => slots.push((out, Some(e))),
        }
    }

    let threading = ExportThreading {
        parallel: !args.sequential,
        threads: args.threads,
    };
    let mut results =
        portal_charts::export_batch(jobs, &FigureRenderer::new(), &threading)?.into_iter();

    let mut failed = 0usize;
    for (out, load_err) in slots {
        let outcome = match load_err {
            Some(e) => Err(e),
            None => match results.next() {
                Some(Ok(envelope)) => write_envelope(&out, &envelope, false),
                Some(Err(e)) => Err(e.into()),
                None => Err(anyhow::anyhow!("no export result")),
            },
        };
        match outcome {
            Ok(()) => println!("ok      {}", out.display()),
            Err(e) => {
                failed += 1;
                println!("FAILED  {}: {e:#}", out.display());
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {total} charts failed to export");
    }
    Ok(())
}

fn cmd_palette(args: PaletteArgs) -> anyhow::Result<()> {
    let count = color_count(args.count)?;
    let entries = allocate_entries(count, &PaletteRegistry::government(), &QUANTITATIVE_ORDER)?;

    if args.json {
        let out: Vec<serde_json::Value> = entries
            .iter()
            .map(|e| {
                serde_json::json!({
                    "family": e.family,
                    "intensity": e.intensity.percent(),
                    "hex": e.hex,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (i, e) in entries.iter().enumerate() {
        println!(
            "{i:>3}  {}  {} {}%",
            e.hex,
            e.family,
            e.intensity.percent()
        );
    }
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read envelope '{}'", args.in_path.display()))?;
    let envelope = ExportEnvelope::from_json(&bytes)
        .with_context(|| format!("parse envelope '{}'", args.in_path.display()))?;

    let params = envelope.params();
    println!("chartType: {}", envelope.chart_type().unwrap_or("<missing>"));
    println!("shape:     {:?}", envelope.shape());
    if let Some(len) = params.get("length") {
        println!("rows:      {len}");
    }
    if let Some(colors) = params.get("colors").and_then(|c| c.as_array()) {
        println!("colors:    {}", colors.len());
    }
    let keys: Vec<&str> = params.keys().map(String::as_str).collect();
    println!("keys:      {}", keys.join(", "));
    let traces = envelope
        .figure_contents()
        .get("data")
        .and_then(|d| d.as_array())
        .map_or(0, Vec::len);
    println!("traces:    {traces}");
    Ok(())
}
