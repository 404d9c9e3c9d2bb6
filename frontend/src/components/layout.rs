use crate::router::NAV_ROUTES;
use leptos::*;
use leptos_router::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <h1>"HRMS Lite"</h1>
                <p>"Admin Panel"</p>
            </div>
            <nav class="sidebar-nav">
                {NAV_ROUTES
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <A href=*href exact=true active_class="active" class="nav-link">
                                {*label}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar />
            <main class="app-main">{children()}</main>
        </div>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div>
                <h2>{title}</h2>
                <p>{subtitle}</p>
            </div>
            {children.map(|children| children())}
        </header>
    }
}
