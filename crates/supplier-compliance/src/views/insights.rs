use super::markup::escape;
use super::state::{LoadState, ViewSlot};
use crate::client::ComplianceApiClient;
use crate::domain::{InsightsResult, SupplierId};

pub struct InsightsView {
    supplier_id: Option<SupplierId>,
    insights: ViewSlot<InsightsResult>,
}

impl Default for InsightsView {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightsView {
    pub fn new() -> Self {
        Self {
            supplier_id: None,
            insights: ViewSlot::new("insights_dashboard"),
        }
    }

    pub fn navigate(&mut self, client: &ComplianceApiClient, id: SupplierId) -> bool {
        if self.supplier_id == Some(id) {
            return false;
        }
        self.supplier_id = Some(id);

        let client = client.clone();
        self.insights
            .start(async move { client.get_insights(id).await });
        true
    }

    pub async fn settled(&mut self) {
        self.insights.settled().await;
    }

    pub fn state(&self) -> LoadState<InsightsResult> {
        self.insights.snapshot()
    }

    pub fn render_text(&self) -> String {
        self.insights.with_state(|state| {
            let body = match state {
                LoadState::Idle | LoadState::Loading => String::new(),
                LoadState::Failed(err) => format!("Unable to load insights: {err}"),
                LoadState::Loaded(result) => result.insights.clone(),
            };
            format!("Compliance Insights\n\n{body}\n")
        })
    }

    pub fn render_html(&self) -> String {
        self.insights.with_state(|state| {
            let body = match state {
                LoadState::Idle | LoadState::Loading => String::new(),
                LoadState::Failed(err) => {
                    format!("Unable to load insights: {}", escape(&err.to_string()))
                }
                LoadState::Loaded(result) => escape(&result.insights),
            };
            format!(
                "<h1>Compliance Insights</h1>\n<p style=\"white-space: pre-wrap\">{body}</p>\n"
            )
        })
    }
}
