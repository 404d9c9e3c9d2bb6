use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use std::rc::Rc;

use crate::{
    api::{ApiClient, SharedGateway},
    components::{layout::AppShell, toast::ToastHost},
    pages::{attendance::AttendancePage, dashboard::DashboardPage, employees::EmployeesPage},
    state::notifications::notification_channel,
};

/// Sidebar entries, in display order.
pub const NAV_ROUTES: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/employees", "Employees"),
    ("/attendance", "Attendance"),
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    let gateway: SharedGateway = Rc::new(ApiClient::new());
    provide_context(gateway);
    let (notifier, receiver) = notification_channel();
    provide_context(notifier);

    view! {
        <Title text="HRMS Lite" />
        <Router>
            <AppShell>
                <Routes>
                    <Route path="/" view=DashboardPage />
                    <Route path="/employees" view=EmployeesPage />
                    <Route path="/attendance" view=AttendancePage />
                    <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
                </Routes>
            </AppShell>
        </Router>
        <ToastHost receiver=receiver />
    }
}
