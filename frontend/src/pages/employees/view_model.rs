use crate::api::{Employee, SharedGateway};
use crate::pages::employees::{
    repository,
    utils::{delete_message, EmployeeDraft, EmployeeField},
};
use crate::state::{
    confirm::{ConfirmGate, ConfirmRequest},
    form::{FormState, SubmitOutcome, SubmitStart},
    notifications::Notifier,
    page::{run_load, PageState},
};
use crate::utils::format::count_label;
use leptos::*;

const LOAD_FALLBACK: &str = "Failed to load employees";
const ADD_FALLBACK: &str = "Failed to add employee";
const DELETE_FALLBACK: &str = "Failed to delete employee";

#[derive(Clone)]
pub struct EmployeesViewModel {
    gateway: SharedGateway,
    notifier: Notifier,
    pub page: RwSignal<PageState<Vec<Employee>>>,
    pub form: RwSignal<FormState<EmployeeDraft>>,
    pub delete_gate: RwSignal<ConfirmGate<Employee>>,
}

impl EmployeesViewModel {
    pub fn new(gateway: SharedGateway, notifier: Notifier) -> Self {
        Self {
            gateway,
            notifier,
            page: create_rw_signal(PageState::loading()),
            form: create_rw_signal(FormState::default()),
            delete_gate: create_rw_signal(ConfirmGate::default()),
        }
    }

    pub async fn load(&self) -> bool {
        let gateway = self.gateway.clone();
        run_load(self.page, LOAD_FALLBACK, async move {
            repository::fetch_employees(gateway.as_ref()).await
        })
        .await
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.page
            .with(|page| page.data().cloned())
            .unwrap_or_default()
    }

    pub fn count_line(&self) -> String {
        let count = self.page.with(|page| page.data().map_or(0, Vec::len));
        count_label(count, "employee")
    }

    pub fn toggle_form(&self) {
        self.form.update(|form| form.toggle());
    }

    pub fn close_form(&self) {
        self.form.update(|form| {
            form.close();
        });
    }

    pub fn edit(&self, field: EmployeeField, value: &str) {
        self.form.update(|form| form.edit(field, value));
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let start = self
            .form
            .try_update(|form| form.begin_submit())
            .unwrap_or(SubmitStart::Ignored);
        let request = match start {
            SubmitStart::Ignored => return SubmitOutcome::Ignored,
            SubmitStart::Invalid => return SubmitOutcome::Invalid,
            SubmitStart::Ready(request) => request,
        };

        match self.gateway.create_employee(&request).await {
            Ok(created) => {
                self.form.update(|form| form.finish_submit(true));
                self.notifier
                    .success(format!("Employee {} added successfully", created.full_name));
                self.load().await;
                SubmitOutcome::Saved
            }
            Err(err) => {
                log::warn!("create employee {} failed: {}", request.employee_id, err);
                self.form.update(|form| form.finish_submit(false));
                self.notifier.failure(err.user_message(ADD_FALLBACK));
                SubmitOutcome::Rejected
            }
        }
    }

    /// Opens the confirmation prompt for a listed employee. No request is sent.
    pub fn request_delete(&self, employee_id: &str) -> bool {
        let Some(target) = self.page.with_untracked(|page| {
            page.data()
                .and_then(|rows| repository::find_employee(rows, employee_id))
                .cloned()
        }) else {
            return false;
        };
        let request = ConfirmRequest {
            title: "Delete Employee".to_string(),
            message: delete_message(&target.full_name),
            target,
        };
        self.delete_gate
            .try_update(|gate| gate.open(request))
            .unwrap_or(false)
    }

    pub async fn confirm_delete(&self) -> bool {
        let Some(target) = self
            .delete_gate
            .try_update(|gate| gate.begin_confirm())
            .flatten()
        else {
            return false;
        };

        match self.gateway.delete_employee(&target.employee_id).await {
            Ok(()) => {
                self.delete_gate.update(|gate| gate.finish_confirm(true));
                self.notifier
                    .success(format!("Employee {} deleted", target.full_name));
                self.load().await;
                true
            }
            Err(err) => {
                log::warn!("delete employee {} failed: {}", target.employee_id, err);
                self.delete_gate.update(|gate| gate.finish_confirm(false));
                self.notifier.failure(err.user_message(DELETE_FALLBACK));
                false
            }
        }
    }

    pub fn cancel_delete(&self) {
        self.delete_gate.update(|gate| {
            gate.cancel();
        });
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let vm = EmployeesViewModel::new(expect_context::<SharedGateway>(), expect_context::<Notifier>());
    let mount = vm.clone();
    spawn_local(async move {
        mount.load().await;
    });
    vm
}
