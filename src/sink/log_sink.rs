//! Sink that writes submissions to the log

use super::traits::{SubmissionRecord, SubmissionSink};
use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;

/// Logs each submission at `info` and keeps them in memory
#[derive(Debug, Default)]
pub struct LogSink {
    records: Vec<SubmissionRecord>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submissions accepted so far, oldest first
    pub fn records(&self) -> &[SubmissionRecord] {
        &self.records
    }
}

#[async_trait]
impl SubmissionSink for LogSink {
    async fn submit(&mut self, form: &str, values: FormValues) -> Result<SubmissionRecord> {
        let record = SubmissionRecord::new(form, values);
        let json = serde_json::to_string(&record.values)?;
        tracing::info!(form = %form, values = %json, "form submitted");
        self.records.push(record.clone());
        Ok(record)
    }
}
