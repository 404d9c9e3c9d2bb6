use crate::api::{AttendanceStatus, MarkAttendance};
use crate::state::form::{Draft, FieldErrors};
use crate::utils::time::{format_date, parse_date, today};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttendanceField {
    EmployeeId,
    Date,
    Status,
}

impl AttendanceField {
    pub fn id(self) -> &'static str {
        match self {
            AttendanceField::EmployeeId => "attendance_employee",
            AttendanceField::Date => "attendance_date",
            AttendanceField::Status => "attendance_status",
        }
    }
}

/// Raw form input. Everything stays a string until submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceDraft {
    pub employee_id: String,
    pub date: String,
    pub status: String,
}

impl Default for AttendanceDraft {
    fn default() -> Self {
        Self {
            employee_id: String::new(),
            date: format_date(today()),
            status: String::new(),
        }
    }
}

pub fn validate_attendance(draft: &AttendanceDraft) -> FieldErrors<AttendanceField> {
    let mut errors = FieldErrors::new();
    if draft.employee_id.is_empty() {
        errors.insert(AttendanceField::EmployeeId, "Please select an employee");
    }
    if draft.date.trim().is_empty() {
        errors.insert(AttendanceField::Date, "Date is required");
    } else if parse_date(&draft.date).is_none() {
        errors.insert(AttendanceField::Date, "Enter the date as YYYY-MM-DD");
    }
    if AttendanceStatus::parse(&draft.status).is_none() {
        errors.insert(AttendanceField::Status, "Please select a status");
    }
    errors
}

impl Draft for AttendanceDraft {
    type Field = AttendanceField;
    type Request = MarkAttendance;

    fn set_field(&mut self, field: AttendanceField, value: &str) -> bool {
        let slot = match field {
            AttendanceField::EmployeeId => &mut self.employee_id,
            AttendanceField::Date => &mut self.date,
            AttendanceField::Status => &mut self.status,
        };
        if slot.as_str() == value {
            return false;
        }
        *slot = value.to_string();
        true
    }

    fn field_value(&self, field: AttendanceField) -> String {
        match field {
            AttendanceField::EmployeeId => self.employee_id.clone(),
            AttendanceField::Date => self.date.clone(),
            AttendanceField::Status => self.status.clone(),
        }
    }

    fn validate(&self) -> FieldErrors<AttendanceField> {
        validate_attendance(self)
    }

    fn to_request(&self) -> Result<MarkAttendance, FieldErrors<AttendanceField>> {
        let errors = self.validate();
        match (parse_date(&self.date), AttendanceStatus::parse(&self.status)) {
            (Some(date), Some(status)) if errors.is_empty() => Ok(MarkAttendance {
                employee_id: self.employee_id.clone(),
                date,
                status,
            }),
            _ => Err(errors),
        }
    }
}

pub fn empty_message(has_filters: bool) -> &'static str {
    if has_filters {
        "No records match the current filters. Try adjusting your filters."
    } else {
        "Mark attendance for employees to see records here."
    }
}
