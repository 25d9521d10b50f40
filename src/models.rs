//! Frontend Models
//!
//! Data structures matching the Apps Script service.

use serde::{Deserialize, Serialize};

/// One division (股別) inside a department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Division {
    pub name: String,
}

/// One department (科室) with its divisions, in sheet order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub divisions: Vec<Division>,
}

/// Meal-type choice attached to a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LunchOption {
    Meat,
    Vegetarian,
}

impl LunchOption {
    pub fn label(self) -> &'static str {
        match self {
            LunchOption::Meat => "葷",
            LunchOption::Vegetarian => "素",
        }
    }
}

/// Registration payload sent to the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub employee_id: String,
    pub employee_name: String,
    pub department_name: String,
    pub division_name: String,
    pub lunch_option: LunchOption,
}

/// One accepted registration, as reported by the status query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRow {
    pub employee_id: String,
    pub employee_name: String,
    pub department_name: String,
    pub division_name: String,
    pub lunch_option: LunchOption,
    #[serde(default)]
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lunch_option_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&LunchOption::Meat).unwrap(), "\"meat\"");
        assert_eq!(serde_json::to_string(&LunchOption::Vegetarian).unwrap(), "\"vegetarian\"");
    }

    #[test]
    fn test_lunch_option_rejects_unknown_value() {
        assert!(serde_json::from_str::<LunchOption>("\"fish\"").is_err());
    }
}
