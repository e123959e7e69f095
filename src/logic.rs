use std::io::Write;

use tracing::info;

use crate::catalog::Catalog;
use crate::change_index::ChangeLinkIndex;
use crate::classify::Classifier;
use crate::emitter::Emitter;
use crate::error::Result;
use crate::models::{Corpus, ProjectId, RepoId};

pub struct ExportState {
    pub catalog: Catalog,
    pub corpus: Corpus,
    pub repo: RepoId,
    pub project: ProjectId,
}

impl ExportState {
    /// Classifies every issue of the target repo and writes the CSV rows to
    /// `out`. Returns the number of rows written.
    pub fn run<W: Write>(&self, out: W) -> Result<usize> {
        let project = self.corpus.project(&self.project)?;
        let repo = self.corpus.repo(&self.repo)?;

        let index = ChangeLinkIndex::build(&project.changes, &self.repo);
        info!(
            project = %self.project,
            changes = project.changes.len(),
            linked_issues = index.len(),
            "built change-link index"
        );

        let classifier = Classifier::new(&self.catalog, &index);
        let written = Emitter::new(&repo.issues, classifier).write_csv(out)?;
        info!(
            repo = %self.repo,
            issues = repo.issues.len(),
            written,
            "exported issues"
        );

        Ok(written)
    }
}
