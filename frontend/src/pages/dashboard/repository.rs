use crate::api::{ApiError, DashboardSummary, HrGateway};

pub async fn fetch_summary(gateway: &dyn HrGateway) -> Result<DashboardSummary, ApiError> {
    let summary = gateway.dashboard_summary().await?;
    log::debug!(
        "dashboard summary: {} employees, {} records",
        summary.total_employees,
        summary.total_attendance_records
    );
    Ok(summary)
}
