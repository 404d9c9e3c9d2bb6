use crate::api::{ApiError, AttendanceFilter, AttendanceRecord, Employee, HrGateway};
use futures::future::try_join;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendancePageData {
    pub employees: Vec<Employee>,
    pub records: Vec<AttendanceRecord>,
}

impl AttendancePageData {
    /// Display name for a record's employee; deleted employees fall back to the id.
    pub fn employee_name<'a>(&'a self, employee_id: &'a str) -> &'a str {
        self.employees
            .iter()
            .find(|employee| employee.employee_id == employee_id)
            .map(|employee| employee.full_name.as_str())
            .unwrap_or(employee_id)
    }
}

/// Employees (for the selectors) and the filtered records, fetched together.
/// Either failing fails the whole page.
pub async fn fetch_attendance_page(
    gateway: &dyn HrGateway,
    filter: &AttendanceFilter,
) -> Result<AttendancePageData, ApiError> {
    let (employees, records) =
        try_join(gateway.list_employees(), gateway.list_attendance(filter)).await?;
    Ok(AttendancePageData { employees, records })
}
