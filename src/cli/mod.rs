//! Interactive presentation layer: page selector, forms, tables, charts.

pub mod forms;
pub mod output;
pub mod pages;
pub mod shell;
pub mod state;
pub mod ui;
pub mod views;

use thiserror::Error;

use crate::errors::BookError;

/// Failures surfaced by the interactive layer.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("interaction error: {0}")]
    Interaction(#[from] dialoguer::Error),
    #[error(transparent)]
    Book(#[from] BookError),
}

pub type CliResult<T> = Result<T, CliError>;
