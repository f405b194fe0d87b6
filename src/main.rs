//! screen-rank command-line entrypoint.

use std::path::PathBuf;

use clap::Parser;
use mimalloc::MiMalloc;

use screen::config::Config;
use screen::ingest::{load_candidates, read_reference};
use screen::pipeline::screen;
use screen::ranking::RunOutcome;
use screen::report::{ReportFormat, default_output_name, render_preview, write_report};
use screen::scoring::Strategy;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Rank resumes against a job description.
#[derive(Parser, Debug)]
#[command(name = "screen-rank", version, about)]
struct Args {
    /// Job description file (.txt, or .pdf with the `pdf` feature)
    #[arg(long, default_value = "job_description.txt")]
    jd: PathBuf,

    /// Directory of resumes (.pdf and .txt)
    #[arg(long, default_value = "resumes")]
    resumes: PathBuf,

    /// Output file (defaults to results.csv / results_embeddings.csv)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Scoring strategy: lexical (tfidf) or semantic (embeddings)
    #[arg(short, long)]
    strategy: Option<Strategy>,

    /// Sentence-embedding model directory
    #[arg(long)]
    model_path: Option<PathBuf>,

    /// TF-IDF vocabulary cap
    #[arg(long)]
    max_features: Option<usize>,

    /// Rows printed after the run
    #[arg(long)]
    preview_rows: Option<usize>,

    /// Write JSON instead of CSV
    #[arg(long)]
    json: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(path) = &self.model_path {
            config.model_path = path.clone();
        }
        if let Some(max_features) = self.max_features {
            config.max_features = max_features;
        }
        if let Some(rows) = self.preview_rows {
            config.preview_rows = rows;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut config = Config::from_env()?;
    args.apply(&mut config);
    config.validate()?;

    tracing::info!(
        strategy = %config.strategy,
        jd = %args.jd.display(),
        resumes = %args.resumes.display(),
        "screen-rank starting"
    );

    let reference = read_reference(&args.jd)?;
    let candidates = load_candidates(&args.resumes)?;
    let source = args.resumes.display().to_string();

    let ranked = match screen(&config, &reference, &candidates, &source)? {
        RunOutcome::Ranked(ranked) => ranked,
        outcome @ RunOutcome::NoCandidates { .. } => {
            println!("{outcome}");
            return Ok(());
        }
    };

    let out = args.out.clone().unwrap_or_else(|| {
        let name = PathBuf::from(default_output_name(config.strategy));
        if args.json {
            name.with_extension("json")
        } else {
            name
        }
    });
    let format = if args.json {
        ReportFormat::Json
    } else {
        ReportFormat::from_path(&out)
    };

    write_report(&out, format, config.strategy, &ranked)?;
    println!("Wrote {}", out.display());

    let preview = render_preview(config.strategy, ranked.head(config.preview_rows));
    if !preview.is_empty() {
        println!("{preview}");
    }

    Ok(())
}
