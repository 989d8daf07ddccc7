//! Dashboard views and their load state.
//!
//! Every view owns one [`ViewSlot`] per piece of remote data. A slot moves through
//! [`LoadState`] as its fetch progresses, and the view renders from whatever state the
//! slot holds, as plain text or as an HTML fragment.

mod detail;
mod insights;
mod list;
mod markup;
mod state;

pub use detail::SupplierDetailView;
pub use insights::InsightsView;
pub use list::SupplierListView;
pub use state::{LoadState, ViewSlot};

use crate::client::{ApiError, ComplianceApiClient};
use crate::routes::Route;

/// A mounted view selected by route.
pub enum Page {
    SupplierList(SupplierListView),
    SupplierDetail(SupplierDetailView),
    Insights(InsightsView),
    NotFound(String),
}

impl Page {
    /// Mount the view for `path` and start its fetches.
    pub fn open(path: &str, client: &ComplianceApiClient) -> Self {
        match Route::parse(path) {
            Route::SupplierList => {
                let mut view = SupplierListView::new();
                view.mount(client);
                Page::SupplierList(view)
            }
            Route::SupplierDetail(id) => {
                let mut view = SupplierDetailView::new();
                view.navigate(client, id);
                Page::SupplierDetail(view)
            }
            Route::Insights(id) => {
                let mut view = InsightsView::new();
                view.navigate(client, id);
                Page::Insights(view)
            }
            Route::NotFound => Page::NotFound(path.to_string()),
        }
    }

    pub async fn settled(&mut self) {
        match self {
            Page::SupplierList(view) => view.settled().await,
            Page::SupplierDetail(view) => view.settled().await,
            Page::Insights(view) => view.settled().await,
            Page::NotFound(_) => {}
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Page::NotFound(_))
    }

    /// Failure of the slot the page cannot render without. Detail insights are
    /// secondary and never reported here.
    pub fn primary_error(&self) -> Option<ApiError> {
        match self {
            Page::SupplierList(view) => view.state().error().cloned(),
            Page::SupplierDetail(view) => view.supplier_state().error().cloned(),
            Page::Insights(view) => view.state().error().cloned(),
            Page::NotFound(_) => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::SupplierList(_) => "Suppliers",
            Page::SupplierDetail(_) => "Supplier Detail",
            Page::Insights(_) => "Compliance Insights",
            Page::NotFound(_) => "Not Found",
        }
    }

    pub fn render_text(&self) -> String {
        match self {
            Page::SupplierList(view) => view.render_text(),
            Page::SupplierDetail(view) => view.render_text(),
            Page::Insights(view) => view.render_text(),
            Page::NotFound(path) => format!("No view matches '{path}'\n"),
        }
    }

    /// Full HTML document for the page.
    pub fn render_html(&self) -> String {
        let body = match self {
            Page::SupplierList(view) => view.render_html(),
            Page::SupplierDetail(view) => view.render_html(),
            Page::Insights(view) => view.render_html(),
            Page::NotFound(path) => format!(
                "<h1>Not Found</h1>\n<p>No view matches '{}'. <a href=\"/\">Back to suppliers</a></p>\n",
                markup::escape(path)
            ),
        };
        markup::document(self.title(), &body)
    }
}
