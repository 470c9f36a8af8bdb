use crate::error::DashboardError;
use std::error::Error as _;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedErrorKind {
    ConnectionRefused,
    Timeout,
    HttpStatus(u16),
    MissingFile,
    BadData,
    DuplicateId,
    Other,
}

/// Classify a seed loading error for the start-up toast
pub fn classify_seed_error(error: &DashboardError) -> SeedErrorKind {
    match error {
        DashboardError::SeedFormat(_) | DashboardError::Config(_) => SeedErrorKind::BadData,
        DashboardError::DuplicateId(_) => SeedErrorKind::DuplicateId,
        DashboardError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
            SeedErrorKind::MissingFile
        }
        DashboardError::SeedFetch(err) => {
            if err.is_timeout() {
                return SeedErrorKind::Timeout;
            }
            if let Some(status) = err.status() {
                return SeedErrorKind::HttpStatus(status.as_u16());
            }
            if err.is_decode() {
                return SeedErrorKind::BadData;
            }
            classify_by_message(&format_seed_error(error))
        }
        _ => classify_by_message(&error.to_string()),
    }
}

fn classify_by_message(message: &str) -> SeedErrorKind {
    let message = message.to_lowercase();
    if message.contains("connection refused") {
        SeedErrorKind::ConnectionRefused
    } else if message.contains("timeout") || message.contains("timed out") {
        SeedErrorKind::Timeout
    } else {
        SeedErrorKind::Other
    }
}

/// Short label for a toast prefix
pub fn seed_error_label(kind: &SeedErrorKind) -> String {
    match kind {
        SeedErrorKind::ConnectionRefused => "Seed server unreachable".to_string(),
        SeedErrorKind::Timeout => "Seed request timed out".to_string(),
        SeedErrorKind::HttpStatus(code) => format!("Seed request failed (HTTP {})", code),
        SeedErrorKind::MissingFile => "Seed file not found".to_string(),
        SeedErrorKind::BadData => "Seed data invalid".to_string(),
        SeedErrorKind::DuplicateId => "Seed has duplicate ids".to_string(),
        SeedErrorKind::Other => "Seed load failed".to_string(),
    }
}

/// Format error message showing the root cause
pub fn format_seed_error(error: &DashboardError) -> String {
    let mut source = error.source();
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}
