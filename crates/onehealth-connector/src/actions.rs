use serde::{Deserialize, Serialize};

/// Endpoint path for organization-wide patient search
pub const PATIENT_SEARCH_PATH: &str = "/api/v2/health/organization/patient";

/// Query parameter names expected by the patient search endpoint
pub const QUERY_FULL_TEXT_SEARCH: &str = "fullTextSearchOnPerson";
pub const QUERY_SIZE: &str = "size";
pub const QUERY_PAGE: &str = "page";

/// Declarative description of one patient search call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientSearch {
    /// Free text matched against firstName, lastName, or birthDate
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub options: SearchOptions,
}

/// Optional paging controls for a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
}

impl PatientSearch {
    pub fn new(search_text: impl Into<String>) -> Self {
        Self { search_text: search_text.into(), options: SearchOptions::default() }
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.options.limit = Some(limit);
        self
    }

    pub fn with_page(mut self, page: u64) -> Self {
        self.options.page = Some(page);
        self
    }

    /// Query parameters for this search, in fixed key order.
    ///
    /// Empty text and zero values mean "not provided" and leave their key out
    /// entirely, so requesting page 0 is indistinguishable from not requesting
    /// a page at all. The service treats absent paging keys as its defaults.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.search_text.is_empty() {
            params.push((QUERY_FULL_TEXT_SEARCH, self.search_text.clone()));
        }
        if let Some(limit) = self.options.limit.filter(|&value| value != 0) {
            params.push((QUERY_SIZE, limit.to_string()));
        }
        if let Some(page) = self.options.page.filter(|&value| value != 0) {
            params.push((QUERY_PAGE, page.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_produces_no_params() {
        let search = PatientSearch::default();
        assert!(search.query_params().is_empty());
    }

    #[test]
    fn text_maps_to_full_text_key() {
        let search = PatientSearch::new("John Doe");
        assert_eq!(
            search.query_params(),
            vec![(QUERY_FULL_TEXT_SEARCH, "John Doe".to_string())]
        );
    }

    #[test]
    fn empty_text_omits_the_key() {
        let search = PatientSearch::new("").with_limit(5);
        assert_eq!(search.query_params(), vec![(QUERY_SIZE, "5".to_string())]);
    }

    #[test]
    fn limit_maps_to_size() {
        let search = PatientSearch::default().with_limit(50);
        assert_eq!(search.query_params(), vec![(QUERY_SIZE, "50".to_string())]);
    }

    #[test]
    fn zero_limit_is_treated_as_not_provided() {
        let search = PatientSearch::default().with_limit(0);
        assert!(search.query_params().is_empty());
    }

    #[test]
    fn zero_page_is_treated_as_not_provided() {
        let search = PatientSearch::default().with_page(0);
        assert!(search.query_params().is_empty());
    }

    #[test]
    fn nonzero_page_is_sent() {
        let search = PatientSearch::default().with_page(2);
        assert_eq!(search.query_params(), vec![(QUERY_PAGE, "2".to_string())]);
    }

    #[test]
    fn full_search_keeps_fixed_key_order() {
        let search = PatientSearch::new("John Doe").with_limit(10).with_page(1);
        assert_eq!(
            search.query_params(),
            vec![
                (QUERY_FULL_TEXT_SEARCH, "John Doe".to_string()),
                (QUERY_SIZE, "10".to_string()),
                (QUERY_PAGE, "1".to_string()),
            ]
        );
    }
}
