//! Hookform TUI - schema-driven form binding and validation in the terminal
//!
//! The [`state::FormController`] binds named fields to a declarative
//! [`state::ValidationSchema`], tracks touched/dirty/error state and gates
//! submission on validity. The Ratatui front end renders the demo forms and
//! hands accepted values to a [`sink::SubmissionSink`].

pub mod app;
pub mod config;
pub mod platform;
pub mod sink;
pub mod state;
pub mod ui;
