use crate::api::DashboardSummary;
use crate::pages::dashboard::utils::attendance_rate;
use crate::utils::format::format_percent;
use leptos::*;

#[component]
pub fn SummarySection(summary: DashboardSummary) -> impl IntoView {
    let rate = format_percent(attendance_rate(&summary));
    view! {
        <div class="stat-grid">
            <Metric label="Total Employees" value=summary.total_employees.to_string() tone="brand" />
            <Metric label="Total Present" value=summary.total_present.to_string() tone="present" />
            <Metric label="Total Absent" value=summary.total_absent.to_string() tone="absent" />
            <Metric label="Attendance Rate" value=rate tone="rate" subtitle="Overall" />
        </div>
    }
}

#[component]
fn Metric(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    tone: &'static str,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-{tone}")>
            <p class="stat-label">{label}</p>
            <p class="stat-value">{value}</p>
            {subtitle.map(|text| view! { <p class="stat-subtitle">{text}</p> })}
        </div>
    }
}
