use crate::components::{
    confirm_dialog::ConfirmDialog,
    layout::PageHeader,
    states::{EmptyState, ErrorState, FieldError, LoadingState},
};
use crate::pages::employees::{
    utils::{EmployeeField, DEPARTMENTS},
    view_model::{use_employees_view_model, EmployeesViewModel},
};
use crate::state::page::LoadState;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    let form = vm.form;
    let gate = vm.delete_gate;

    let toggle_vm = vm.clone();
    let retry_vm = vm.clone();
    let confirm_vm = vm.clone();
    let cancel_vm = vm.clone();
    let form_vm = vm.clone();
    let table_vm = vm;

    let form_open = Signal::derive(move || form.with(|form| form.is_open()));
    let submitting = Signal::derive(move || form.with(|form| form.is_submitting()));

    let on_retry = Callback::new(move |_| {
        let vm = retry_vm.clone();
        spawn_local(async move {
            vm.load().await;
        });
    });
    let on_confirm = Callback::new(move |_| {
        let vm = confirm_vm.clone();
        spawn_local(async move {
            vm.confirm_delete().await;
        });
    });
    let on_cancel = Callback::new(move |_| cancel_vm.cancel_delete());

    view! {
        <div class="page">
            <PageHeader title="Employees" subtitle="Manage your organization's employees">
                <button
                    type="button"
                    class="btn btn-primary"
                    disabled=move || submitting.get()
                    on:click=move |_| toggle_vm.toggle_form()
                >
                    {move || if form_open.get() { "Cancel" } else { "Add Employee" }}
                </button>
            </PageHeader>
            <Show when=move || form_open.get()>
                <EmployeeForm vm=form_vm.clone() />
            </Show>
            {move || {
                let vm = table_vm.clone();
                match vm.page.with(|page| page.state().clone()) {
                    LoadState::Idle | LoadState::Loading => {
                        view! { <LoadingState label="Loading employees..." /> }.into_view()
                    }
                    LoadState::Failed(message) => {
                        view! { <ErrorState message=message on_retry=on_retry /> }.into_view()
                    }
                    LoadState::Ready(rows) if rows.is_empty() => {
                        view! {
                            <EmptyState
                                title="No employees yet"
                                description="Add your first employee to get started"
                            />
                        }
                            .into_view()
                    }
                    LoadState::Ready(rows) => {
                        let count = vm.count_line();
                        let rows_view = rows
                            .into_iter()
                            .map(|employee| {
                                let row_vm = vm.clone();
                                let id = employee.employee_id.clone();
                                view! {
                                    <tr>
                                        <td class="mono">{employee.employee_id}</td>
                                        <td>{employee.full_name}</td>
                                        <td>{employee.email}</td>
                                        <td><span class="badge">{employee.department}</span></td>
                                        <td>
                                            <button
                                                type="button"
                                                class="btn btn-ghost btn-danger"
                                                on:click=move |_| {
                                                    row_vm.request_delete(&id);
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view();
                        view! {
                            <p class="count-line">{count}</p>
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Employee ID"</th>
                                        <th>"Full Name"</th>
                                        <th>"Email"</th>
                                        <th>"Department"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>{rows_view}</tbody>
                            </table>
                        }
                            .into_view()
                    }
                }
            }}
            <ConfirmDialog
                is_open=Signal::derive(move || gate.with(|gate| gate.is_open()))
                title=Signal::derive(move || {
                    gate.with(|gate| gate.pending().map(|req| req.title.clone()).unwrap_or_default())
                })
                message=Signal::derive(move || {
                    gate.with(|gate| gate.pending().map(|req| req.message.clone()).unwrap_or_default())
                })
                on_confirm=on_confirm
                on_cancel=on_cancel
                confirm_label="Delete"
                busy=Signal::derive(move || gate.with(|gate| gate.is_busy()))
                destructive=true
            />
        </div>
    }
}

#[component]
fn EmployeeForm(vm: EmployeesViewModel) -> impl IntoView {
    let form = vm.form;
    let submitting = Signal::derive(move || form.with(|form| form.is_submitting()));
    let submit_vm = vm.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let vm = submit_vm.clone();
        spawn_local(async move {
            vm.submit().await;
        });
    };

    let department_vm = vm.clone();
    let text_input = move |field: EmployeeField, label: &'static str, kind: &'static str| {
        let vm = vm.clone();
        view! {
            <div class="field">
                <label for=field.id()>{label}</label>
                <input
                    id=field.id()
                    type=kind
                    prop:value=move || form.with(|form| form.draft_value(field))
                    on:input=move |ev| vm.edit(field, &event_target_value(&ev))
                />
                <FieldError message=Signal::derive(move || form.with(|form| form.error(field).map(str::to_string))) />
            </div>
        }
    };

    view! {
        <form class="card form" on:submit=on_submit>
            <div class="form-grid">
                {text_input(EmployeeField::EmployeeId, "Employee ID", "text")}
                {text_input(EmployeeField::FullName, "Full Name", "text")}
                {text_input(EmployeeField::Email, "Email", "email")}
                <div class="field">
                    <label for=EmployeeField::Department.id()>"Department"</label>
                    <select
                        id=EmployeeField::Department.id()
                        prop:value=move || form.with(|form| form.draft_value(EmployeeField::Department))
                        on:change=move |ev| {
                            department_vm.edit(EmployeeField::Department, &event_target_value(&ev))
                        }
                    >
                        <option value="">"Select department"</option>
                        {DEPARTMENTS
                            .iter()
                            .map(|name| view! { <option value=*name>{*name}</option> })
                            .collect_view()}
                    </select>
                    <FieldError message=Signal::derive(move || {
                        form.with(|form| form.error(EmployeeField::Department).map(str::to_string))
                    }) />
                </div>
            </div>
            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Adding..." } else { "Add Employee" }}
                </button>
            </div>
        </form>
    }
}
