use async_trait::async_trait;
use std::rc::Rc;

use super::{
    error::ApiError,
    types::{AttendanceFilter, AttendanceRecord, DashboardSummary, Employee, MarkAttendance, NewEmployee},
};

/// The backend as seen by the page view models. `ApiClient` speaks HTTP;
/// tests substitute a scripted implementation.
#[async_trait(?Send)]
pub trait HrGateway {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError>;

    async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, ApiError>;

    async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError>;

    async fn list_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, ApiError>;

    async fn mark_attendance(&self, request: &MarkAttendance)
        -> Result<AttendanceRecord, ApiError>;

    async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError>;
}

pub type SharedGateway = Rc<dyn HrGateway>;
