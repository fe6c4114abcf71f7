use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for logging an exercise. Only the id in the path is
/// presence-checked; missing description/duration reach the store and
/// fail there.
#[derive(Debug, Default, Deserialize)]
pub struct CreateExerciseRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Log query parameters, taken as raw text the way they arrive.
#[derive(Debug, Default, Deserialize)]
pub struct LogParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Response after logging an exercise: the owning user denormalized in,
/// date already in canonical text form.
#[derive(Debug, Serialize)]
pub struct ExerciseCreated {
    pub id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: i32,
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub id: Uuid,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_response_count_and_entries() {
        let response = LogResponse {
            id: Uuid::new_v4(),
            username: "alice".into(),
            count: 1,
            log: vec![LogEntry {
                description: "run".into(),
                duration: 30,
                date: "Thu Jan 05 2023".into(),
            }],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["id"].is_string());
        assert_eq!(json["count"], 1);
        assert_eq!(json["log"][0]["date"], "Thu Jan 05 2023");
        assert_eq!(json["log"][0].as_object().unwrap().len(), 3);
    }

    #[test]
    fn create_request_fields_are_all_optional() {
        let req: CreateExerciseRequest = serde_json::from_str("{}").unwrap();
        assert!(req.description.is_none());
        assert!(req.duration.is_none());
        assert!(req.date.is_none());

        let req: CreateExerciseRequest =
            serde_json::from_str(r#"{"description":"run","duration":30,"date":"2023-01-05"}"#)
                .unwrap();
        assert_eq!(req.duration, Some(30));
    }
}
