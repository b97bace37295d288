use crate::storage::RideStore;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

/// Shared handler state. The store is the only thing requests have in common.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RideStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RideStore>) -> Self {
        Self { store }
    }
}

/// Raw listing parameters. Kept as text so malformed values can fall back to defaults.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListRidesParams {
    /// 1-based page number (default 1).
    pub page: Option<String>,
    /// Page size, 0 for no limit (default 20).
    pub limit: Option<String>,
}

impl ListRidesParams {
    /// Picks `page` and `limit` out of decoded query pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::ListRidesParams;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_value_wins_for_repeated_keys() {
        let params = ListRidesParams::from_pairs(pairs(&[
            ("page", "1"),
            ("limit", "5"),
            ("page", "2"),
            ("limit", "x"),
        ]));
        assert_eq!(params.page.as_deref(), Some("1"));
        assert_eq!(params.limit.as_deref(), Some("5"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let params = ListRidesParams::from_pairs(pairs(&[("sort", "desc"), ("limit", "")]));
        assert_eq!(params.page, None);
        assert_eq!(params.limit.as_deref(), Some(""));
    }
}
