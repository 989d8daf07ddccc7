use super::markup::escape;
use super::state::{LoadState, ViewSlot};
use crate::client::ComplianceApiClient;
use crate::domain::{InsightsResult, Supplier, SupplierId};
use std::fmt::Write;

/// Supplier header, compliance history, and AI insights for one supplier.
///
/// The detail and insights fetches run concurrently and fill independent slots.
pub struct SupplierDetailView {
    supplier_id: Option<SupplierId>,
    supplier: ViewSlot<Supplier>,
    insights: ViewSlot<InsightsResult>,
}

impl Default for SupplierDetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl SupplierDetailView {
    pub fn new() -> Self {
        Self {
            supplier_id: None,
            supplier: ViewSlot::new("supplier_detail"),
            insights: ViewSlot::new("supplier_insights"),
        }
    }

    pub fn supplier_id(&self) -> Option<SupplierId> {
        self.supplier_id
    }

    /// Re-synchronize with the route parameter. Returns `false` when the id is unchanged
    /// and nothing was fetched.
    pub fn navigate(&mut self, client: &ComplianceApiClient, id: SupplierId) -> bool {
        if self.supplier_id == Some(id) {
            return false;
        }
        self.supplier_id = Some(id);

        let detail_client = client.clone();
        self.supplier
            .start(async move { detail_client.get_supplier(id).await });

        let insights_client = client.clone();
        self.insights
            .start(async move { insights_client.get_insights(id).await });
        true
    }

    pub async fn settled(&mut self) {
        self.supplier.settled().await;
        self.insights.settled().await;
    }

    pub fn supplier_state(&self) -> LoadState<Supplier> {
        self.supplier.snapshot()
    }

    pub fn insights_state(&self) -> LoadState<InsightsResult> {
        self.insights.snapshot()
    }

    fn insights_text(&self) -> String {
        self.insights.with_state(|state| match state {
            LoadState::Loaded(result) => result.insights.clone(),
            LoadState::Failed(_) => "Insights unavailable.".to_string(),
            LoadState::Idle | LoadState::Loading => String::new(),
        })
    }

    pub fn render_text(&self) -> String {
        let insights = self.insights_text();
        self.supplier.with_state(|state| match state {
            LoadState::Idle | LoadState::Loading => "Loading...\n".to_string(),
            LoadState::Failed(err) => format!("Unable to load supplier: {err}\n"),
            LoadState::Loaded(supplier) => {
                let mut out = String::new();
                let _ = writeln!(out, "{}", supplier.name);
                let _ = writeln!(out, "Country: {}", supplier.country);
                let _ = writeln!(out, "Compliance Score: {}", supplier.score_label());
                let _ = writeln!(out, "Last Audit: {}", supplier.last_audit_label());
                out.push_str("\nCompliance History\n");
                for record in &supplier.compliance_records {
                    let _ = writeln!(out, "- {}", record.headline());
                    let _ = writeln!(out, "  {}", record.summary());
                }
                out.push_str("\nAI-Generated Insights\n");
                let _ = writeln!(out, "{insights}");
                out
            }
        })
    }

    pub fn render_html(&self) -> String {
        let insights = self.insights_text();
        self.supplier.with_state(|state| match state {
            LoadState::Idle | LoadState::Loading => "<p>Loading...</p>\n".to_string(),
            LoadState::Failed(err) => format!(
                "<p class=\"error\">Unable to load supplier: {}</p>\n",
                escape(&err.to_string())
            ),
            LoadState::Loaded(supplier) => {
                let mut html = String::new();
                let _ = writeln!(html, "<h1>{}</h1>", escape(&supplier.name));
                let _ = writeln!(html, "<p>Country: {}</p>", escape(&supplier.country));
                let _ = writeln!(
                    html,
                    "<p>Compliance Score: {}</p>",
                    supplier.score_label()
                );
                let _ = writeln!(html, "<p>Last Audit: {}</p>", supplier.last_audit_label());
                html.push_str("<hr>\n<h2>Compliance History</h2>\n<ul>\n");
                for record in &supplier.compliance_records {
                    let _ = writeln!(
                        html,
                        "<li><strong>{}</strong><br>{}</li>",
                        escape(&record.headline()),
                        escape(&record.summary())
                    );
                }
                html.push_str("</ul>\n<hr>\n<h2>AI-Generated Insights</h2>\n");
                let _ = writeln!(html, "<p>{}</p>", escape(&insights));
                html
            }
        })
    }
}
