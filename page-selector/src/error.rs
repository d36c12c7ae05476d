//! Error types for page set construction and the terminal host.

use thiserror::Error;

use crate::page::PageId;

/// Why a list of pages cannot be used by a selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageSetError {
    #[error("page set must contain at least one page")]
    Empty,
    #[error("duplicate page id {0}")]
    DuplicateId(PageId),
}

/// Failures of the terminal host. The widget itself cannot fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("could not determine a cache directory for the log file")]
    NoLogDir,
}
