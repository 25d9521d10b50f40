//! Organization Lookup
//!
//! Pure helpers over the cached department list.

use crate::models::{Department, Division};

/// Divisions of the named department
///
/// Empty when the name is blank, unknown, or the department has no
/// divisions; the division dropdown is disabled in all three cases.
pub fn divisions_for<'a>(departments: &'a [Department], name: &str) -> &'a [Division] {
    departments
        .iter()
        .find(|dep| dep.name == name)
        .map(|dep| dep.divisions.as_slice())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_department(name: &str, divisions: &[&str]) -> Department {
        Department {
            name: name.to_string(),
            divisions: divisions
                .iter()
                .map(|d| Division { name: d.to_string() })
                .collect(),
        }
    }

    #[test]
    fn test_divisions_for_known_department() {
        let departments = vec![
            make_department("行政科", &["文書股", "總務股"]),
            make_department("工務科", &["土木股"]),
        ];

        let divisions = divisions_for(&departments, "行政科");
        assert_eq!(divisions.len(), 2);
        assert_eq!(divisions[0].name, "文書股");
        assert_eq!(divisions[1].name, "總務股");
    }

    #[test]
    fn test_divisions_for_department_without_divisions() {
        let departments = vec![make_department("秘書室", &[])];
        assert!(divisions_for(&departments, "秘書室").is_empty());
    }

    #[test]
    fn test_divisions_for_unknown_or_blank_name() {
        let departments = vec![make_department("行政科", &["文書股"])];
        assert!(divisions_for(&departments, "不存在的科").is_empty());
        assert!(divisions_for(&departments, "").is_empty());
    }
}
