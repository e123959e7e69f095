use std::path::Path;

use anyhow::{Result, anyhow};
use reqwest::Client;
use tracing::info;

use crate::models::Corpus;

/// Loads a corpus snapshot from an `http(s)://` URL or a local path.
pub async fn load_corpus(source: &str, token: Option<&str>) -> Result<Corpus> {
    let corpus = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_corpus(source, token).await?
    } else {
        Corpus::load(Path::new(source))?
    };

    info!(
        source,
        repos = corpus.repos.len(),
        projects = corpus.projects.len(),
        "loaded corpus"
    );
    Ok(corpus)
}

async fn fetch_corpus(url: &str, token: Option<&str>) -> Result<Corpus> {
    let client = Client::new();
    let mut request = client.get(url);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let corpus = request
        .send()
        .await?
        .error_for_status()?
        .json::<Corpus>()
        .await
        .map_err(|e| anyhow!("failed to decode corpus from {}: {}", url, e))?;

    Ok(corpus)
}
