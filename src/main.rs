mod args;

use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::anyhow;
use args::Args;
use clap::Parser;
use issue_triage::utils::corpus::load_corpus;
use issue_triage::{Catalog, ExportState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::golang(),
    };
    tracing::info!(
        labels = catalog.label_count(),
        milestones = catalog.milestone_count(),
        "loaded catalog"
    );

    let corpus = load_corpus(&args.corpus, args.token.as_deref())
        .await
        .map_err(|e| anyhow!("failed to load corpus: {}", e))?;

    let state = ExportState {
        catalog,
        corpus,
        repo: args.repo,
        project: args.project,
    };

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| anyhow!("failed to create {}: {}", path.display(), e))?;
            state.run(BufWriter::new(file))?;
        }
        None => {
            state.run(io::stdout().lock())?;
        }
    }

    Ok(())
}
