use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::api::{
    ApiError, AttendanceFilter, AttendanceRecord, DashboardSummary, Employee, HrGateway,
    MarkAttendance, NewEmployee, SharedGateway,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListEmployees,
    CreateEmployee(NewEmployee),
    DeleteEmployee(String),
    ListAttendance(AttendanceFilter),
    MarkAttendance(MarkAttendance),
    DashboardSummary,
}

pub type Reply<T> = Result<T, ApiError>;

enum Scripted<T> {
    Now(Reply<T>),
    Held(oneshot::Receiver<Reply<T>>),
}

struct Script<T> {
    name: &'static str,
    replies: RefCell<VecDeque<Scripted<T>>>,
}

impl<T> Script<T> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            replies: RefCell::new(VecDeque::new()),
        }
    }

    fn push(&self, reply: Reply<T>) {
        self.replies.borrow_mut().push_back(Scripted::Now(reply));
    }

    fn hold(&self) -> oneshot::Sender<Reply<T>> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Scripted::Held(rx));
        tx
    }

    async fn next(&self) -> Reply<T> {
        let scripted = self.replies.borrow_mut().pop_front();
        match scripted {
            Some(Scripted::Now(reply)) => reply,
            Some(Scripted::Held(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Network(format!("{} reply dropped", self.name)))),
            None => Err(ApiError::Network(format!("no scripted reply for {}", self.name))),
        }
    }
}

/// In-memory gateway: replies are queued per operation and every call is
/// recorded. `hold_*` replies resolve only when the test sends on the
/// returned channel.
pub struct FakeGateway {
    calls: RefCell<Vec<Call>>,
    employees: Script<Vec<Employee>>,
    created: Script<Employee>,
    deleted: Script<()>,
    attendance: Script<Vec<AttendanceRecord>>,
    marked: Script<AttendanceRecord>,
    summary: Script<DashboardSummary>,
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            employees: Script::new("list_employees"),
            created: Script::new("create_employee"),
            deleted: Script::new("delete_employee"),
            attendance: Script::new("list_attendance"),
            marked: Script::new("mark_attendance"),
            summary: Script::new("dashboard_summary"),
        }
    }
}

impl FakeGateway {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn shared(self: &Rc<Self>) -> SharedGateway {
        self.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| predicate(*call)).count()
    }

    pub fn reply_employees(&self, reply: Reply<Vec<Employee>>) {
        self.employees.push(reply);
    }

    pub fn reply_create(&self, reply: Reply<Employee>) {
        self.created.push(reply);
    }

    pub fn hold_create(&self) -> oneshot::Sender<Reply<Employee>> {
        self.created.hold()
    }

    pub fn reply_delete(&self, reply: Reply<()>) {
        self.deleted.push(reply);
    }

    pub fn reply_attendance(&self, reply: Reply<Vec<AttendanceRecord>>) {
        self.attendance.push(reply);
    }

    pub fn hold_attendance(&self) -> oneshot::Sender<Reply<Vec<AttendanceRecord>>> {
        self.attendance.hold()
    }

    pub fn reply_mark(&self, reply: Reply<AttendanceRecord>) {
        self.marked.push(reply);
    }

    pub fn reply_summary(&self, reply: Reply<DashboardSummary>) {
        self.summary.push(reply);
    }

    pub fn hold_summary(&self) -> oneshot::Sender<Reply<DashboardSummary>> {
        self.summary.hold()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl HrGateway for FakeGateway {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.record(Call::ListEmployees);
        self.employees.next().await
    }

    async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, ApiError> {
        self.record(Call::CreateEmployee(employee.clone()));
        self.created.next().await
    }

    async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        self.record(Call::DeleteEmployee(employee_id.to_string()));
        self.deleted.next().await
    }

    async fn list_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.record(Call::ListAttendance(filter.clone()));
        self.attendance.next().await
    }

    async fn mark_attendance(
        &self,
        request: &MarkAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        self.record(Call::MarkAttendance(request.clone()));
        self.marked.next().await
    }

    async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.record(Call::DashboardSummary);
        self.summary.next().await
    }
}

pub fn employee(id: &str, name: &str) -> Employee {
    Employee {
        employee_id: id.into(),
        full_name: name.into(),
        email: format!("{}@example.com", id.to_lowercase()),
        department: "Engineering".into(),
    }
}
