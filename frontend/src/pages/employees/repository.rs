use crate::api::{ApiError, Employee, HrGateway};

pub async fn fetch_employees(gateway: &dyn HrGateway) -> Result<Vec<Employee>, ApiError> {
    gateway.list_employees().await
}

/// Looks up a row of the current listing by its natural key.
pub fn find_employee<'a>(employees: &'a [Employee], employee_id: &str) -> Option<&'a Employee> {
    employees
        .iter()
        .find(|employee| employee.employee_id == employee_id)
}
