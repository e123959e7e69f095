use std::path::PathBuf;

use clap::Parser;

use issue_triage::models::{ProjectId, RepoId};
use issue_triage::utils::constants::{DEFAULT_PROJECT, DEFAULT_REPO};

#[derive(Parser, Debug)]
#[command(name = "issue-triage", about = "Export issue workflow state as CSV")]
pub struct Args {
    /// Corpus snapshot: a JSON file path or an http(s) URL.
    #[arg(long, required = true)]
    pub corpus: String,

    /// Label/milestone catalog (TOML). Defaults to the golang/go ids.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_REPO)]
    pub repo: RepoId,

    #[arg(long, default_value = DEFAULT_PROJECT)]
    pub project: ProjectId,

    /// Bearer token sent when fetching the corpus over HTTP.
    #[arg(long, env = "CORPUS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Write CSV here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}
