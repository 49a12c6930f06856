//! Error Types

use thiserror::Error;

/// Result type alias for catalog checks
pub type Result<T> = std::result::Result<T, SiteError>;

/// Content authoring errors
///
/// Rendering itself never fails; these describe a catalog that would render
/// with something missing or pointing nowhere.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// A content list that a section maps over is empty
    #[error("Empty catalog: {0}")]
    EmptyCatalog(&'static str),

    /// A record has a blank required text field
    #[error("Blank field '{field}' in {catalog} entry {index}")]
    BlankField {
        catalog: &'static str,
        index: usize,
        field: &'static str,
    },

    /// More than one plan carries the highlighted variant
    #[error("Multiple highlighted plans: {0:?}")]
    MultipleHighlightedPlans(Vec<&'static str>),

    /// Two home sections declare the same anchor
    #[error("Duplicate section anchor: #{0}")]
    DuplicateAnchor(&'static str),

    /// A navigation link targets an anchor no home section declares
    #[error("Link '{label}' points to unknown anchor {href}")]
    DanglingAnchor {
        label: &'static str,
        href: &'static str,
    },
}

impl SiteError {
    /// Short message for log lines and the health endpoint
    pub fn user_message(&self) -> String {
        match self {
            SiteError::EmptyCatalog(name) => format!("The {name} list has no entries."),
            SiteError::BlankField { catalog, .. } => format!("A {catalog} entry is incomplete."),
            SiteError::MultipleHighlightedPlans(_) => "Only one plan may be highlighted.".into(),
            SiteError::DuplicateAnchor(_) | SiteError::DanglingAnchor { .. } => {
                "Page navigation is inconsistent.".into()
            }
        }
    }
}
