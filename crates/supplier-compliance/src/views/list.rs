use super::markup::escape;
use super::state::{LoadState, ViewSlot};
use crate::client::ComplianceApiClient;
use crate::domain::Supplier;
use std::fmt::Write;

/// Table of every supplier, each linking to its detail route.
pub struct SupplierListView {
    suppliers: ViewSlot<Vec<Supplier>>,
}

impl Default for SupplierListView {
    fn default() -> Self {
        Self::new()
    }
}

impl SupplierListView {
    pub fn new() -> Self {
        Self {
            suppliers: ViewSlot::new("supplier_list"),
        }
    }

    pub fn mount(&mut self, client: &ComplianceApiClient) {
        let client = client.clone();
        self.suppliers
            .start(async move { client.list_suppliers().await });
    }

    pub async fn settled(&mut self) {
        self.suppliers.settled().await;
    }

    pub fn state(&self) -> LoadState<Vec<Supplier>> {
        self.suppliers.snapshot()
    }

    pub fn render_text(&self) -> String {
        self.suppliers.with_state(|state| match state {
            LoadState::Idle | LoadState::Loading => "Loading...\n".to_string(),
            LoadState::Failed(err) => format!("Unable to load suppliers: {err}\n"),
            LoadState::Loaded(suppliers) => {
                let rows: Vec<[String; 5]> = suppliers
                    .iter()
                    .map(|supplier| {
                        [
                            supplier.name.clone(),
                            supplier.country.clone(),
                            supplier.score_label(),
                            supplier.last_audit_label(),
                            supplier.detail_path(),
                        ]
                    })
                    .collect();
                text_table(
                    ["Name", "Country", "Compliance Score", "Last Audit", "Link"],
                    &rows,
                )
            }
        })
    }

    pub fn render_html(&self) -> String {
        self.suppliers.with_state(|state| match state {
            LoadState::Idle | LoadState::Loading => "<p>Loading...</p>\n".to_string(),
            LoadState::Failed(err) => format!(
                "<p class=\"error\">Unable to load suppliers: {}</p>\n",
                escape(&err.to_string())
            ),
            LoadState::Loaded(suppliers) => {
                let mut html = String::from(
                    "<table>\n<thead>\n<tr><th>Name</th><th>Country</th><th>Compliance Score</th><th>Last Audit</th></tr>\n</thead>\n<tbody>\n",
                );
                for supplier in suppliers {
                    let _ = writeln!(
                        html,
                        "<tr><td><a href=\"{}\">{}</a></td><td>{}</td><td>{}</td><td>{}</td></tr>",
                        supplier.detail_path(),
                        escape(&supplier.name),
                        escape(&supplier.country),
                        supplier.score_label(),
                        supplier.last_audit_label()
                    );
                }
                html.push_str("</tbody>\n</table>\n");
                html
            }
        })
    }
}

fn text_table<const N: usize>(headers: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = headers.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_row = |cells: Vec<&str>| {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{}", line.trim_end());
    };

    push_row(headers.to_vec());
    for row in rows {
        push_row(row.iter().map(String::as_str).collect());
    }
    out
}
