/// Outcome definitions for pages visited during a crawl
use std::fmt;

/// What happened to a URL once it was dequeued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageOutcome {
    // ===== Success =====
    /// Page was converted and written to the output tree
    Saved,

    // ===== Processed but not written =====
    /// Paginated listing (`/page/N/`); links followed, nothing written
    SkippedPagination,

    /// Category archive; regenerated as a synthetic index page instead
    SkippedArchive,

    // ===== Not processed =====
    /// Response Content-Type is not HTML
    NotHtml,

    /// Server answered with a status >= 400
    HttpError,

    /// Request never produced a response (DNS, connection, TLS, body read)
    TransportError,

    /// Page was converted but the file could not be written
    WriteFailed,
}

impl PageOutcome {
    /// Returns true if this represents an error state
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::HttpError | Self::TransportError | Self::WriteFailed
        )
    }

    /// Returns all possible outcomes
    pub fn all() -> [Self; 7] {
        [
            Self::Saved,
            Self::SkippedPagination,
            Self::SkippedArchive,
            Self::NotHtml,
            Self::HttpError,
            Self::TransportError,
            Self::WriteFailed,
        ]
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Saved => "Saved",
            Self::SkippedPagination => "Skipped (pagination)",
            Self::SkippedArchive => "Skipped (category archive)",
            Self::NotHtml => "Not HTML",
            Self::HttpError => "HTTP error",
            Self::TransportError => "Transport error",
            Self::WriteFailed => "Write failed",
        };
        write!(f, "{}", label)
    }
}
