use crate::api::{AttendanceFilter, Employee, SharedGateway};
use crate::pages::attendance::{
    repository::{self, AttendancePageData},
    utils::{empty_message, AttendanceDraft, AttendanceField},
};
use crate::state::{
    form::{FormState, SubmitOutcome, SubmitStart},
    notifications::Notifier,
    page::{run_load, PageState},
};
use crate::utils::{format::count_label, time::parse_date};
use leptos::*;

const LOAD_FALLBACK: &str = "Failed to load attendance data";
const MARK_FALLBACK: &str = "Failed to mark attendance";

#[derive(Clone)]
pub struct AttendanceViewModel {
    gateway: SharedGateway,
    notifier: Notifier,
    pub page: RwSignal<PageState<AttendancePageData>>,
    /// Employees from the latest successful load. Survives reloads so the
    /// selectors keep their options while a fetch is pending or failed.
    pub employees: RwSignal<Vec<Employee>>,
    pub form: RwSignal<FormState<AttendanceDraft>>,
    pub filter: RwSignal<AttendanceFilter>,
}

impl AttendanceViewModel {
    pub fn new(gateway: SharedGateway, notifier: Notifier) -> Self {
        Self {
            gateway,
            notifier,
            page: create_rw_signal(PageState::loading()),
            employees: create_rw_signal(Vec::new()),
            form: create_rw_signal(FormState::default()),
            filter: create_rw_signal(AttendanceFilter::default()),
        }
    }

    /// Fetches with the filter as it stands now. A later call supersedes
    /// any fetch still in flight.
    pub async fn load(&self) -> bool {
        let gateway = self.gateway.clone();
        let filter = self.filter.get_untracked();
        let applied = run_load(self.page, LOAD_FALLBACK, async move {
            repository::fetch_attendance_page(gateway.as_ref(), &filter).await
        })
        .await;
        if applied {
            self.keep_employees();
        }
        applied
    }

    fn keep_employees(&self) {
        let Some(latest) = self
            .page
            .with_untracked(|page| page.data().map(|data| data.employees.clone()))
        else {
            return;
        };
        if self.employees.with_untracked(|current| *current != latest) {
            self.employees.set(latest);
        }
    }

    /// `(employee_id, "Full Name (ID)")` pairs for the employee selectors.
    pub fn employee_options(&self) -> Vec<(String, String)> {
        self.employees.with(|employees| {
            employees
                .iter()
                .map(|e| {
                    (
                        e.employee_id.clone(),
                        format!("{} ({})", e.full_name, e.employee_id),
                    )
                })
                .collect()
        })
    }

    fn change_filter(&self, change: impl FnOnce(&mut AttendanceFilter)) -> bool {
        self.filter
            .try_update(|filter| {
                let before = filter.clone();
                change(filter);
                *filter != before
            })
            .unwrap_or(false)
    }

    /// Empty input clears the constraint. Re-selecting the current value does nothing.
    pub async fn set_employee_filter(&self, value: &str) {
        let employee_id = Some(value.trim().to_string()).filter(|id| !id.is_empty());
        if self.change_filter(|filter| filter.employee_id = employee_id) {
            self.load().await;
        }
    }

    pub async fn set_date_filter(&self, value: &str) {
        let date = parse_date(value);
        if date.is_none() && !value.trim().is_empty() {
            log::debug!("ignoring unparseable date filter {:?}", value);
        }
        if self.change_filter(|filter| filter.date = date) {
            self.load().await;
        }
    }

    pub async fn clear_filters(&self) {
        if self.change_filter(|filter| *filter = AttendanceFilter::default()) {
            self.load().await;
        }
    }

    pub fn has_filters(&self) -> bool {
        !self.filter.with(|filter| filter.is_empty())
    }

    pub fn empty_message(&self) -> &'static str {
        empty_message(self.has_filters())
    }

    pub fn count_line(&self) -> String {
        let count = self
            .page
            .with(|page| page.data().map_or(0, |data| data.records.len()));
        count_label(count, "record")
    }

    pub fn toggle_form(&self) {
        self.form.update(|form| form.toggle());
    }

    pub fn close_form(&self) {
        self.form.update(|form| {
            form.close();
        });
    }

    pub fn edit(&self, field: AttendanceField, value: &str) {
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

        match self.gateway.mark_attendance(&request).await {
            Ok(record) => {
                log::debug!("attendance #{} recorded", record.id);
                self.form.update(|form| form.finish_submit(true));
                self.notifier.success("Attendance marked successfully");
                self.load().await;
                SubmitOutcome::Saved
            }
            Err(err) => {
                log::warn!(
                    "mark attendance for {} on {} failed: {}",
                    request.employee_id,
                    request.date,
                    err
                );
                self.form.update(|form| form.finish_submit(false));
                self.notifier.failure(err.user_message(MARK_FALLBACK));
                SubmitOutcome::Rejected
            }
        }
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let vm = AttendanceViewModel::new(
        expect_context::<SharedGateway>(),
        expect_context::<Notifier>(),
    );
    let mount = vm.clone();
    spawn_local(async move {
        mount.load().await;
    });
    vm
}
