use crate::store::StoredApplication;

pub(crate) fn output_applications_json(applications: &[StoredApplication]) -> String {
    serde_json::to_string_pretty(applications).unwrap_or_else(|_| "[]".to_string())
}

pub(crate) fn output_application_json(application: &StoredApplication) -> String {
    serde_json::to_string_pretty(application).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Application;
    use chrono::{TimeZone, Utc};
    use serde_json::Value;

    fn stored() -> StoredApplication {
        StoredApplication {
            application: Application {
                username: "ivanov123".to_string(),
                full_name: "Ivanov Ivan".to_string(),
                group_number: "G1".to_string(),
                programming_level: "Основы".to_string(),
                direction: None,
                known_languages: "Python, JS".to_string(),
                motivation: "хочу помогать".to_string(),
                teaching_experience: "нет".to_string(),
            },
            submitted_at: Utc.with_ymd_and_hms(2026, 10, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn application_fields_are_flat() {
        let json: Value = serde_json::from_str(&output_application_json(&stored())).unwrap();
        assert_eq!(json["username"], "ivanov123");
        assert_eq!(json["programming_level"], "Основы");
        assert!(json["direction"].is_null());
        assert_eq!(json["submitted_at"], "2026-10-01T09:30:00Z");
    }

    #[test]
    fn list_is_an_array() {
        let json: Value =
            serde_json::from_str(&output_applications_json(&[stored(), stored()])).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn empty_list() {
        assert_eq!(output_applications_json(&[]), "[]");
    }
}
