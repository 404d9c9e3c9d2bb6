use crate::api::{DashboardSummary, SharedGateway};
use crate::pages::dashboard::repository;
use crate::state::page::{run_load, PageState};
use leptos::*;

const LOAD_FALLBACK: &str = "Failed to load dashboard data";

#[derive(Clone)]
pub struct DashboardViewModel {
    gateway: SharedGateway,
    pub page: RwSignal<PageState<DashboardSummary>>,
}

impl DashboardViewModel {
    pub fn new(gateway: SharedGateway) -> Self {
        Self {
            gateway,
            page: create_rw_signal(PageState::loading()),
        }
    }

    pub async fn load(&self) -> bool {
        let gateway = self.gateway.clone();
        run_load(self.page, LOAD_FALLBACK, async move {
            repository::fetch_summary(gateway.as_ref()).await
        })
        .await
    }
}

/// Fresh view model per mount, so every visit re-fetches the summary.
pub fn use_dashboard_view_model() -> DashboardViewModel {
    let vm = DashboardViewModel::new(expect_context::<SharedGateway>());
    let mount = vm.clone();
    spawn_local(async move {
        mount.load().await;
    });
    vm
}
