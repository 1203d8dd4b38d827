//! Description Filter
//!
//! Case-insensitive substring match over the rendered rows' descriptions.

/// Lower-cased filter text from the filter input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery(String);

impl FilterQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    /// True when the row with this description should stay visible
    pub fn matches(&self, description: &str) -> bool {
        self.0.is_empty() || description.to_lowercase().contains(&self.0)
    }
}

/// CSS `display` value for a row under `query`
pub fn row_display(query: &FilterQuery, description: &str) -> &'static str {
    if query.matches(description) {
        ""
    } else {
        "none"
    }
}
