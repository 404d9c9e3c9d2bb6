use crate::components::{
    layout::PageHeader,
    states::{ErrorState, LoadingState},
};
use crate::pages::dashboard::{
    components::{DepartmentBreakdown, PresentDaysList, SummarySection},
    view_model::use_dashboard_view_model,
};
use crate::state::page::LoadState;
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let page = vm.page;
    let on_retry = Callback::new(move |_| {
        let vm = vm.clone();
        spawn_local(async move {
            vm.load().await;
        });
    });

    view! {
        <div class="page">
            <PageHeader title="Dashboard" subtitle="Overview of your organization's HR metrics" />
            {move || match page.with(|page| page.state().clone()) {
                LoadState::Idle | LoadState::Loading => {
                    view! { <LoadingState label="Loading dashboard..." /> }.into_view()
                }
                LoadState::Failed(message) => {
                    view! { <ErrorState message=message on_retry=on_retry /> }.into_view()
                }
                LoadState::Ready(summary) => {
                    let breakdown = summary.clone();
                    let present = summary.clone();
                    view! {
                        <SummarySection summary=summary />
                        <div class="two-column">
                            <DepartmentBreakdown summary=breakdown />
                            <PresentDaysList summary=present />
                        </div>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}
