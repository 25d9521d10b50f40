//! Registration Form Logic
//!
//! Trimming and client-side validation; nothing here touches the
//! network, so a blank field can never turn into a request.

use crate::models::{LunchOption, RegistrationRecord};

/// Validation notice shown when a required field is blank
pub const MISSING_FIELDS_MESSAGE: &str = "請填寫所有必填欄位！";

/// Raw form state as read from the inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub employee_id: String,
    pub employee_name: String,
    pub department_name: String,
    pub division_name: String,
    pub lunch_option: Option<LunchOption>,
}

/// Trim the text fields and require id, name, division and meal choice
pub fn validate(fields: &FormFields) -> Result<RegistrationRecord, String> {
    let employee_id = fields.employee_id.trim();
    let employee_name = fields.employee_name.trim();
    let division_name = fields.division_name.trim();

    if employee_id.is_empty() || employee_name.is_empty() || division_name.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE.to_string());
    }
    let Some(lunch_option) = fields.lunch_option else {
        return Err(MISSING_FIELDS_MESSAGE.to_string());
    };

    Ok(RegistrationRecord {
        employee_id: employee_id.to_string(),
        employee_name: employee_name.to_string(),
        // Sent along for the backend to cross-check against the division
        department_name: fields.department_name.trim().to_string(),
        division_name: division_name.to_string(),
        lunch_option,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_fields() -> FormFields {
        FormFields {
            employee_id: " A1234 ".to_string(),
            employee_name: "王小明".to_string(),
            department_name: "行政科".to_string(),
            division_name: "文書股".to_string(),
            lunch_option: Some(LunchOption::Meat),
        }
    }

    #[test]
    fn test_validate_trims_and_builds_record() {
        let record = validate(&filled_fields()).unwrap();
        assert_eq!(record.employee_id, "A1234");
        assert_eq!(record.employee_name, "王小明");
        assert_eq!(record.department_name, "行政科");
        assert_eq!(record.division_name, "文書股");
        assert_eq!(record.lunch_option, LunchOption::Meat);
    }

    #[test]
    fn test_validate_rejects_blank_required_fields() {
        let mut fields = filled_fields();
        fields.employee_id = "   ".to_string();
        assert_eq!(validate(&fields).unwrap_err(), MISSING_FIELDS_MESSAGE);

        let mut fields = filled_fields();
        fields.employee_name = String::new();
        assert_eq!(validate(&fields).unwrap_err(), MISSING_FIELDS_MESSAGE);

        let mut fields = filled_fields();
        fields.division_name = String::new();
        assert_eq!(validate(&fields).unwrap_err(), MISSING_FIELDS_MESSAGE);

        let mut fields = filled_fields();
        fields.lunch_option = None;
        assert_eq!(validate(&fields).unwrap_err(), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn test_validate_allows_blank_department_name() {
        // The division is the routed field; department is advisory
        let mut fields = filled_fields();
        fields.department_name = String::new();
        assert!(validate(&fields).is_ok());
    }
}
