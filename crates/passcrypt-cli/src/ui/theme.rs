//! Badge tokens for status lines.

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
}

impl Badge {
    /// Get badge text (e.g., "[OK]")
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
        }
    }
}
