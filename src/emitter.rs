use std::io::Write;

use chrono::NaiveDate;
use tracing::debug;

use crate::classify::{Classifier, State, When};
use crate::error::Result;
use crate::models::Issue;
use crate::utils::constants::UPDATED_DATE_FORMAT;
use crate::utils::csv::CsvWriter;

/// One exported row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub number: i32,
    pub updated: NaiveDate,
    pub state: State,
    pub when: When,
    pub assignees: String,
    pub title: String,
}

impl Record {
    /// Columns in output order: number, updated date, state, when, assignees, title.
    pub fn fields(&self) -> [String; 6] {
        [
            self.number.to_string(),
            self.updated.format(UPDATED_DATE_FORMAT).to_string(),
            self.state.to_string(),
            self.when.to_string(),
            self.assignees.clone(),
            self.title.clone(),
        ]
    }
}

pub struct Emitter<'a> {
    issues: &'a [Issue],
    classifier: Classifier<'a>,
}

impl<'a> Emitter<'a> {
    pub fn new(issues: &'a [Issue], classifier: Classifier<'a>) -> Self {
        Self { issues, classifier }
    }

    /// Records for the included issues, in corpus order. Each call starts over.
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.issues
            .iter()
            .filter(|issue| {
                let included = self.classifier.is_included(issue);
                if !included {
                    debug!(number = issue.number, "skipping issue");
                }
                included
            })
            .map(|issue| {
                let classification = self.classifier.classify(issue);
                Record {
                    number: issue.number,
                    updated: issue.updated.date_naive(),
                    state: classification.state,
                    when: classification.when,
                    assignees: classification.assignees,
                    title: issue.title.clone(),
                }
            })
    }

    /// Writes every record as a CSV row and returns how many were written.
    pub fn write_csv<W: Write>(&self, out: W) -> Result<usize> {
        let mut writer = CsvWriter::new(out);
        let mut written = 0;
        for record in self.records() {
            writer.write_record(&record.fields())?;
            written += 1;
        }
        writer.flush()?;
        Ok(written)
    }
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;
