use crate::api::NewEmployee;
use crate::state::form::{Draft, FieldErrors};
use regex::Regex;
use std::sync::OnceLock;

pub const DEPARTMENTS: [&str; 8] = [
    "Engineering",
    "Human Resources",
    "Marketing",
    "Finance",
    "Operations",
    "Sales",
    "Design",
    "Legal",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmployeeField {
    EmployeeId,
    FullName,
    Email,
    Department,
}

impl EmployeeField {
    pub fn id(self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "employee_id",
            EmployeeField::FullName => "full_name",
            EmployeeField::Email => "email",
            EmployeeField::Department => "department",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

fn email_pattern() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| match Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$") {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                log::error!("email pattern failed to compile: {}", err);
                None
            }
        })
        .as_ref()
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_some_and(|pattern| pattern.is_match(email))
}

pub fn validate_employee(draft: &EmployeeDraft) -> FieldErrors<EmployeeField> {
    let mut errors = FieldErrors::new();
    if draft.employee_id.trim().is_empty() {
        errors.insert(EmployeeField::EmployeeId, "Employee ID is required");
    }
    if draft.full_name.trim().is_empty() {
        errors.insert(EmployeeField::FullName, "Full name is required");
    }
    if draft.email.trim().is_empty() {
        errors.insert(EmployeeField::Email, "Email is required");
    } else if !is_valid_email(&draft.email) {
        errors.insert(EmployeeField::Email, "Please enter a valid email address");
    }
    if draft.department.is_empty() {
        errors.insert(EmployeeField::Department, "Department is required");
    }
    errors
}

impl Draft for EmployeeDraft {
    type Field = EmployeeField;
    type Request = NewEmployee;

    fn set_field(&mut self, field: EmployeeField, value: &str) -> bool {
        let slot = match field {
            EmployeeField::EmployeeId => &mut self.employee_id,
            EmployeeField::FullName => &mut self.full_name,
            EmployeeField::Email => &mut self.email,
            EmployeeField::Department => &mut self.department,
        };
        if slot.as_str() == value {
            return false;
        }
        *slot = value.to_string();
        true
    }

    fn field_value(&self, field: EmployeeField) -> String {
        match field {
            EmployeeField::EmployeeId => self.employee_id.clone(),
            EmployeeField::FullName => self.full_name.clone(),
            EmployeeField::Email => self.email.clone(),
            EmployeeField::Department => self.department.clone(),
        }
    }

    fn validate(&self) -> FieldErrors<EmployeeField> {
        validate_employee(self)
    }

    fn to_request(&self) -> Result<NewEmployee, FieldErrors<EmployeeField>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewEmployee {
            employee_id: self.employee_id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.clone(),
        })
    }
}

pub fn delete_message(full_name: &str) -> String {
    format!(
        "Are you sure you want to delete {full_name}? This will also remove all their attendance records. This action cannot be undone."
    )
}
