use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use supplier_compliance::error::AppError;
use supplier_compliance::views::{
    InsightsView, LoadState, Page, SupplierDetailView, SupplierListView,
};
use supplier_compliance::{ComplianceApiClient, ComplianceSubmission, SupplierId};

#[derive(Args, Debug)]
pub(crate) struct SubmitArgs {
    /// Supplier the metric belongs to
    #[arg(long)]
    pub(crate) supplier_id: SupplierId,
    /// Metric label, e.g. "CO2 emissions"
    #[arg(long)]
    pub(crate) metric: String,
    /// Measured value
    #[arg(long)]
    pub(crate) result: f64,
    /// Date the metric was recorded (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

fn failure<T>(state: LoadState<T>) -> Result<(), AppError> {
    match state {
        LoadState::Failed(err) => Err(err.into()),
        _ => Ok(()),
    }
}

pub(crate) async fn run_supplier_list(client: &ComplianceApiClient) -> Result<(), AppError> {
    let mut view = SupplierListView::new();
    view.mount(client);
    view.settled().await;

    print!("{}", view.render_text());
    failure(view.state())
}

pub(crate) async fn run_supplier_detail(
    client: &ComplianceApiClient,
    id: SupplierId,
) -> Result<(), AppError> {
    let mut view = SupplierDetailView::new();
    view.navigate(client, id);
    view.settled().await;

    print!("{}", view.render_text());
    failure(view.supplier_state())
}

pub(crate) async fn run_supplier_insights(
    client: &ComplianceApiClient,
    id: SupplierId,
) -> Result<(), AppError> {
    let mut view = InsightsView::new();
    view.navigate(client, id);
    view.settled().await;

    print!("{}", view.render_text());
    failure(view.state())
}

pub(crate) async fn open_route(client: &ComplianceApiClient, path: &str) -> Result<(), AppError> {
    let mut page = Page::open(path, client);
    page.settled().await;
    print!("{}", page.render_text());
    page_outcome(&page, path)
}

fn page_outcome(page: &Page, path: &str) -> Result<(), AppError> {
    if page.is_not_found() {
        return Err(AppError::UnknownRoute(path.to_string()));
    }
    match page.primary_error() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

pub(crate) fn build_submission(args: SubmitArgs, today: NaiveDate) -> ComplianceSubmission {
    ComplianceSubmission {
        supplier_id: args.supplier_id,
        metric: args.metric,
        result: args.result,
        date_recorded: args.date.unwrap_or(today),
    }
}

pub(crate) async fn submit_compliance(
    client: &ComplianceApiClient,
    args: SubmitArgs,
) -> Result<(), AppError> {
    let submission = build_submission(args, Local::now().date_naive());
    let response = client.submit_compliance(&submission).await?;

    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{json}"),
        Err(_) => println!("{response}"),
    }
    Ok(())
}
