//! Trait abstraction for the submission sink to enable mocking in tests

use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One accepted submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub form: String,
    pub submitted_at: DateTime<Utc>,
    pub values: FormValues,
}

impl SubmissionRecord {
    pub fn new(form: impl Into<String>, values: FormValues) -> Self {
        Self {
            form: form.into(),
            submitted_at: Utc::now(),
            values,
        }
    }

    /// Values rendered as pretty JSON for display
    pub fn values_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.values)?)
    }
}

/// Receives values that passed validation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Accept the values of `form` and return what was recorded
    async fn submit(&mut self, form: &str, values: FormValues) -> Result<SubmissionRecord>;
}
