use crate::domain::SupplierId;
use std::fmt;

/// Client-side route table for the dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SupplierList,
    SupplierDetail(SupplierId),
    Insights(SupplierId),
    NotFound,
}

impl Route {
    /// Match a request path; query strings and one trailing slash are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };

        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            [""] => Route::SupplierList,
            ["suppliers", id] => id
                .parse()
                .map(Route::SupplierDetail)
                .unwrap_or(Route::NotFound),
            ["insights", id] => id.parse().map(Route::Insights).unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> Option<String> {
        match self {
            Route::SupplierList => Some("/".to_string()),
            Route::SupplierDetail(id) => Some(format!("/suppliers/{id}")),
            Route::Insights(id) => Some(format!("/insights/{id}")),
            Route::NotFound => None,
        }
    }

    pub fn supplier_id(&self) -> Option<SupplierId> {
        match self {
            Route::SupplierDetail(id) | Route::Insights(id) => Some(*id),
            Route::SupplierList | Route::NotFound => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(path) => f.write_str(&path),
            None => f.write_str("<not found>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_view_routes() {
        assert_eq!(Route::parse("/"), Route::SupplierList);
        assert_eq!(Route::parse(""), Route::SupplierList);
        assert_eq!(
            Route::parse("/suppliers/1"),
            Route::SupplierDetail(SupplierId(1))
        );
        assert_eq!(
            Route::parse("/insights/12/?tab=summary"),
            Route::Insights(SupplierId(12))
        );
    }

    #[test]
    fn unknown_or_malformed_paths_are_not_found() {
        assert_eq!(Route::parse("/suppliers"), Route::NotFound);
        assert_eq!(Route::parse("/suppliers/acme"), Route::NotFound);
        assert_eq!(Route::parse("/upload-compliance"), Route::NotFound);
        assert_eq!(Route::parse("/suppliers/1/records"), Route::NotFound);
    }

    #[test]
    fn path_is_inverse_of_parse() {
        for route in [
            Route::SupplierList,
            Route::SupplierDetail(SupplierId(7)),
            Route::Insights(SupplierId(7)),
        ] {
            let path = route.path().expect("routable");
            assert_eq!(Route::parse(&path), route);
        }
        assert_eq!(Route::NotFound.path(), None);
    }
}
