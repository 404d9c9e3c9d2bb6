use crate::api::DashboardSummary;
use crate::utils::format::rounded_percent;

/// Share of all attendance records marked present, as a whole percentage.
pub fn attendance_rate(summary: &DashboardSummary) -> u64 {
    rounded_percent(summary.total_present, summary.total_attendance_records)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentShare {
    pub department: String,
    pub count: u64,
    pub percent: u64,
}

/// Departments ordered by name, each with its share of the headcount.
pub fn department_shares(summary: &DashboardSummary) -> Vec<DepartmentShare> {
    summary
        .department_breakdown
        .iter()
        .map(|(department, &count)| DepartmentShare {
            department: department.clone(),
            count,
            percent: rounded_percent(count, summary.total_employees),
        })
        .collect()
}

/// Present-day counts, most days first; ties keep employee id order.
pub fn present_days_ranking(summary: &DashboardSummary) -> Vec<(String, u64)> {
    let mut ranking: Vec<(String, u64)> = summary
        .employee_present_days
        .iter()
        .map(|(id, &days)| (id.clone(), days))
        .collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranking
}

/// Last two characters of an employee id, for the avatar badge.
pub fn id_badge(employee_id: &str) -> String {
    let chars: Vec<char> = employee_id.chars().collect();
    chars[chars.len().saturating_sub(2)..].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::format::format_percent;
    use std::collections::BTreeMap;

    fn summary(present: u64, records: u64) -> DashboardSummary {
        DashboardSummary {
            total_present: present,
            total_attendance_records: records,
            ..DashboardSummary::default()
        }
    }

    #[test]
    fn rate_is_rounded_and_zero_safe() {
        assert_eq!(format_percent(attendance_rate(&summary(0, 0))), "0%");
        assert_eq!(format_percent(attendance_rate(&summary(3, 4))), "75%");
        assert_eq!(attendance_rate(&summary(2, 3)), 67);
    }

    #[test]
    fn department_shares_use_total_employees() {
        let data = DashboardSummary {
            total_employees: 4,
            department_breakdown: BTreeMap::from([
                ("Engineering".to_string(), 3),
                ("Legal".to_string(), 1),
            ]),
            ..DashboardSummary::default()
        };
        let shares = department_shares(&data);
        assert_eq!(shares[0].department, "Engineering");
        assert_eq!(shares[0].percent, 75);
        assert_eq!(shares[1].percent, 25);

        let empty = DashboardSummary {
            department_breakdown: BTreeMap::from([("Sales".to_string(), 2)]),
            ..DashboardSummary::default()
        };
        assert_eq!(department_shares(&empty)[0].percent, 0);
    }

    #[test]
    fn department_shares_are_ordered_by_name() {
        let data: DashboardSummary = serde_json::from_str(
            r#"{"total_employees": 3, "department_breakdown": {"Sales": 1, "Design": 1, "Legal": 1}}"#,
        )
        .unwrap();
        let names: Vec<_> = department_shares(&data)
            .into_iter()
            .map(|share| share.department)
            .collect();
        assert_eq!(names, vec!["Design", "Legal", "Sales"]);
    }

    #[test]
    fn ranking_sorts_by_days_then_id() {
        let data = DashboardSummary {
            employee_present_days: BTreeMap::from([
                ("EMP003".to_string(), 2),
                ("EMP001".to_string(), 5),
                ("EMP002".to_string(), 2),
            ]),
            ..DashboardSummary::default()
        };
        assert_eq!(
            present_days_ranking(&data),
            vec![
                ("EMP001".to_string(), 5),
                ("EMP002".to_string(), 2),
                ("EMP003".to_string(), 2),
            ]
        );
    }

    #[test]
    fn badge_takes_last_two_chars() {
        assert_eq!(id_badge("EMP042"), "42");
        assert_eq!(id_badge("X"), "X");
        assert_eq!(id_badge(""), "");
    }
}
