//! Summarize flow state: which screen is showing and what it shows.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

/// Which of the two summarizer screens is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SummaryPage {
    /// URL entry screen.
    #[default]
    Input,
    /// Summary display screen.
    Result,
}

/// State of the summarize flow.
///
/// The URL input field itself is view state owned by the page; this
/// struct only carries flow state, so keystrokes do not churn it.
#[derive(Clone, Debug, Default)]
pub struct SummaryState {
    pub page: SummaryPage,
    /// Summary text or the error text shown in its place. Never empty
    /// once a request has finished.
    pub summary: String,
    pub loading: bool,
}
