use crate::api::AttendanceStatus;
use crate::components::{
    layout::PageHeader,
    states::{EmptyState, ErrorState, FieldError, LoadingState},
};
use crate::pages::attendance::{
    repository::AttendancePageData,
    utils::AttendanceField,
    view_model::{use_attendance_view_model, AttendanceViewModel},
};
use crate::state::page::LoadState;
use crate::utils::time::format_date;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    let form = vm.form;
    let form_open = Signal::derive(move || form.with(|form| form.is_open()));
    let submitting = Signal::derive(move || form.with(|form| form.is_submitting()));

    let toggle_vm = vm.clone();
    let form_vm = vm.clone();
    let filter_vm = vm.clone();
    let retry_vm = vm.clone();
    let table_vm = vm;

    let on_retry = Callback::new(move |_| {
        let vm = retry_vm.clone();
        spawn_local(async move {
            vm.load().await;
        });
    });

    view! {
        <div class="page">
            <PageHeader title="Attendance" subtitle="Track and manage employee attendance records">
                <button
                    type="button"
                    class="btn btn-primary"
                    disabled=move || submitting.get()
                    on:click=move |_| toggle_vm.toggle_form()
                >
                    "Mark Attendance"
                </button>
            </PageHeader>
            <Show when=move || form_open.get()>
                <AttendanceForm vm=form_vm.clone() />
            </Show>
            <AttendanceFilters vm=filter_vm />
            {move || {
                let vm = table_vm.clone();
                match vm.page.with(|page| page.state().clone()) {
                    LoadState::Idle | LoadState::Loading => {
                        view! { <LoadingState label="Loading attendance records..." /> }.into_view()
                    }
                    LoadState::Failed(message) => {
                        view! { <ErrorState message=message on_retry=on_retry /> }.into_view()
                    }
                    LoadState::Ready(data) if data.records.is_empty() => {
                        view! {
                            <EmptyState title="No Attendance Records" description=vm.empty_message() />
                        }
                            .into_view()
                    }
                    LoadState::Ready(data) => {
                        view! {
                            <p class="count-line">{vm.count_line()}</p>
                            <AttendanceTable data=data />
                        }
                            .into_view()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn AttendanceFilters(vm: AttendanceViewModel) -> impl IntoView {
    let filter = vm.filter;
    let employees = vm.employees;
    let options_vm = vm.clone();
    let employee_vm = vm.clone();
    let date_vm = vm.clone();
    let clear_vm = vm.clone();
    let has_filters = Signal::derive(move || vm.has_filters());

    view! {
        <section class="card filters">
            <div class="filters-header">
                <span>"Filters"</span>
                <Show when=move || has_filters.get()>
                    {
                        let vm = clear_vm.clone();
                        view! {
                            <button
                                type="button"
                                class="btn btn-link"
                                on:click=move |_| {
                                    let vm = vm.clone();
                                    spawn_local(async move { vm.clear_filters().await });
                                }
                            >
                                "Clear all"
                            </button>
                        }
                    }
                </Show>
            </div>
            <div class="filters-grid">
                <select
                    prop:value=move || {
                        employees.with(|_| ());
                        filter.with(|f| f.employee_id.clone().unwrap_or_default())
                    }
                    on:change=move |ev| {
                        let vm = employee_vm.clone();
                        let value = event_target_value(&ev);
                        spawn_local(async move { vm.set_employee_filter(&value).await });
                    }
                >
                    <option value="">"All Employees"</option>
                    {move || {
                        options_vm
                            .employee_options()
                            .into_iter()
                            .map(|(id, label)| view! { <option value=id>{label}</option> })
                            .collect_view()
                    }}
                </select>
                <input
                    type="date"
                    prop:value=move || filter.with(|f| f.date.map(format_date).unwrap_or_default())
                    on:change=move |ev| {
                        let vm = date_vm.clone();
                        let value = event_target_value(&ev);
                        spawn_local(async move { vm.set_date_filter(&value).await });
                    }
                />
            </div>
        </section>
    }
}

#[component]
fn AttendanceForm(vm: AttendanceViewModel) -> impl IntoView {
    let form = vm.form;
    let employees = vm.employees;
    let submitting = Signal::derive(move || form.with(|form| form.is_submitting()));
    let error = move |field: AttendanceField| {
        Signal::derive(move || form.with(|form| form.error(field).map(str::to_string)))
    };

    let submit_vm = vm.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let vm = submit_vm.clone();
        spawn_local(async move {
            vm.submit().await;
        });
    };
    let options_vm = vm.clone();
    let employee_vm = vm.clone();
    let date_vm = vm.clone();
    let cancel_vm = vm.clone();

    let status_option = move |status: AttendanceStatus| {
        let vm = vm.clone();
        let value = status.as_str();
        view! {
            <label class="radio">
                <input
                    type="radio"
                    name=AttendanceField::Status.id()
                    value=value
                    prop:checked=move || form.with(|form| form.draft_value(AttendanceField::Status) == value)
                    on:change=move |_| vm.edit(AttendanceField::Status, value)
                />
                <span>{value}</span>
            </label>
        }
    };

    view! {
        <form class="card form" on:submit=on_submit>
            <div class="form-grid">
                <div class="field">
                    <label for=AttendanceField::EmployeeId.id()>"Employee"</label>
                    <select
                        id=AttendanceField::EmployeeId.id()
                        prop:value=move || {
                            employees.with(|_| ());
                            form.with(|form| form.draft_value(AttendanceField::EmployeeId))
                        }
                        on:change=move |ev| employee_vm.edit(AttendanceField::EmployeeId, &event_target_value(&ev))
                    >
                        <option value="">"Select employee"</option>
                        {move || {
                            options_vm
                                .employee_options()
                                .into_iter()
                                .map(|(id, label)| view! { <option value=id>{label}</option> })
                                .collect_view()
                        }}
                    </select>
                    <FieldError message=error(AttendanceField::EmployeeId) />
                </div>
                <div class="field">
                    <label for=AttendanceField::Date.id()>"Date"</label>
                    <input
                        id=AttendanceField::Date.id()
                        type="date"
                        prop:value=move || form.with(|form| form.draft_value(AttendanceField::Date))
                        on:input=move |ev| date_vm.edit(AttendanceField::Date, &event_target_value(&ev))
                    />
                    <FieldError message=error(AttendanceField::Date) />
                </div>
                <div class="field">
                    <span class="field-label">"Status"</span>
                    <div class="radio-group">
                        {AttendanceStatus::ALL.into_iter().map(status_option).collect_view()}
                    </div>
                    <FieldError message=error(AttendanceField::Status) />
                </div>
            </div>
            <div class="form-actions">
                <button
                    type="button"
                    class="btn btn-secondary"
                    disabled=move || submitting.get()
                    on:click=move |_| cancel_vm.close_form()
                >
                    "Cancel"
                </button>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving..." } else { "Mark Attendance" }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn AttendanceTable(data: AttendancePageData) -> impl IntoView {
    let rows = data
        .records
        .iter()
        .map(|record| {
            let badge = match record.status {
                AttendanceStatus::Present => "badge badge-present",
                AttendanceStatus::Absent => "badge badge-absent",
            };
            view! {
                <tr>
                    <td>{data.employee_name(&record.employee_id).to_string()}</td>
                    <td class="mono">{record.employee_id.clone()}</td>
                    <td>{format_date(record.date)}</td>
                    <td><span class=badge>{record.status.as_str()}</span></td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Employee"</th>
                    <th>"Employee ID"</th>
                    <th>"Date"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
