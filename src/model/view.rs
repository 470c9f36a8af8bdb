//! View parameters
//!
//! `ViewState` is derived presentation state: it is recomputed into a
//! visible page on every render and never persisted.

/// Categorical facet filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Facet {
    #[default]
    All,
    Value(String),
}

impl Facet {
    /// Parse a facet from user/config text ("all" is case-insensitive)
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Facet::All
        } else {
            Facet::Value(value.to_string())
        }
    }

    /// Check a record's facet value against this filter
    ///
    /// Records without a facet only pass `Facet::All`.
    pub fn matches(&self, facet: Option<&str>) -> bool {
        match self {
            Facet::All => true,
            Facet::Value(wanted) => facet == Some(wanted.as_str()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Facet::All => "all",
            Facet::Value(value) => value,
        }
    }
}

/// Query, facet and pagination parameters for one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    pub facet: Facet,
    pub page_index: usize,
    /// Always > 0
    pub page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            facet: Facet::All,
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn with_page(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    /// Whether a query or facet currently narrows the view
    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty() || self.facet != Facet::All
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_parse_all_is_case_insensitive() {
        assert_eq!(Facet::parse("all"), Facet::All);
        assert_eq!(Facet::parse("ALL"), Facet::All);
        assert_eq!(Facet::parse("Home"), Facet::Value("Home".to_string()));
    }

    #[test]
    fn test_facet_matches() {
        let home = Facet::Value("Home".to_string());
        assert!(home.matches(Some("Home")));
        assert!(!home.matches(Some("home")));
        assert!(!home.matches(None));
        assert!(Facet::All.matches(None));
        assert!(Facet::All.matches(Some("Fashion")));
    }

    #[test]
    fn test_page_size_never_zero() {
        assert_eq!(ViewState::new(0).page_size, 1);
        assert_eq!(ViewState::new(25).page_size, 25);
    }

    #[test]
    fn test_is_filtered() {
        let mut view = ViewState::new(10).with_page(3);
        assert!(!view.is_filtered());
        view.query = "a".to_string();
        assert!(view.is_filtered());
        view.query.clear();
        view.facet = Facet::parse("Home");
        assert!(view.is_filtered());
    }
}
