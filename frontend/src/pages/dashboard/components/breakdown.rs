use crate::api::DashboardSummary;
use crate::pages::dashboard::utils::{department_shares, id_badge, present_days_ranking};
use crate::utils::format::plural;
use leptos::*;

#[component]
pub fn DepartmentBreakdown(summary: DashboardSummary) -> impl IntoView {
    let rows = department_shares(&summary)
        .into_iter()
        .map(|share| {
            let width = format!("width: {}%", share.percent);
            view! {
                <div class="breakdown-row">
                    <div class="breakdown-label">
                        <span>{share.department}</span>
                        <span>{format!("{} ({}%)", plural(share.count, "employee"), share.percent)}</span>
                    </div>
                    <div class="bar">
                        <div class="bar-fill" style=width></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="card">
            <h2>"Department Breakdown"</h2>
            <div class="breakdown">{rows}</div>
        </section>
    }
}

#[component]
pub fn PresentDaysList(summary: DashboardSummary) -> impl IntoView {
    let ranking = present_days_ranking(&summary);
    let body = if ranking.is_empty() {
        view! { <p class="muted">"No attendance data yet"</p> }.into_view()
    } else {
        ranking
            .into_iter()
            .map(|(employee_id, days)| {
                view! {
                    <div class="ranking-row">
                        <span class="avatar">{id_badge(&employee_id)}</span>
                        <span>{employee_id}</span>
                        <span class="ranking-days">{plural(days, "day")}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class="card">
            <h2>"Present Days per Employee"</h2>
            {body}
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use std::collections::BTreeMap;

    #[test]
    fn breakdown_lists_departments_with_share() {
        let summary = DashboardSummary {
            total_employees: 3,
            department_breakdown: BTreeMap::from([
                ("Engineering".to_string(), 2),
                ("Legal".to_string(), 1),
            ]),
            ..DashboardSummary::default()
        };
        let html = render_to_string(move || view! { <DepartmentBreakdown summary=summary /> });
        assert!(html.contains("2 employees (67%)"));
        assert!(html.contains("1 employee (33%)"));
    }

    #[test]
    fn present_days_show_placeholder_when_empty() {
        let html = render_to_string(|| {
            view! { <PresentDaysList summary=DashboardSummary::default() /> }
        });
        assert!(html.contains("No attendance data yet"));
    }

    #[test]
    fn present_days_render_ranked_rows() {
        let summary = DashboardSummary {
            employee_present_days: BTreeMap::from([
                ("EMP001".to_string(), 1),
                ("EMP002".to_string(), 4),
            ]),
            ..DashboardSummary::default()
        };
        let html = render_to_string(move || view! { <PresentDaysList summary=summary /> });
        let first = html.find("EMP002").unwrap();
        let second = html.find("EMP001").unwrap();
        assert!(first < second);
        assert!(html.contains("4 days"));
        assert!(html.contains("1 day"));
        assert!(!html.contains("1 days"));
    }
}
