use serde_json::Value;

use crate::{Error, Result};

/// Check the shape of a raw API payload.
///
/// Returns the (possibly empty) homework list and the server cursor. An empty
/// list is a valid outcome; the loop decides whether anything is said about
/// it. A JSON `null` counts as an absent key.
pub fn check_response(raw: &Value) -> Result<(Vec<Value>, i64)> {
    let map = raw
        .as_object()
        .ok_or_else(|| Error::MalformedResponse("payload is not a mapping".to_string()))?;

    let cursor = match map.get("current_date") {
        None | Some(Value::Null) => return Err(Error::MissingCursor),
        Some(v) => v.as_i64().ok_or_else(|| {
            Error::MalformedResponse(format!("current_date is not an integer: {v}"))
        })?,
    };

    let homeworks = match map.get("homeworks") {
        None | Some(Value::Null) => return Err(Error::MissingHomeworksKey),
        Some(v) => v.as_array().ok_or(Error::HomeworksNotAList)?.clone(),
    };

    Ok((homeworks, cursor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_well_formed_payload() {
        let raw = json!({
            "current_date": 1000,
            "homeworks": [
                {"homework_name": "hw2", "status": "reviewing"},
                {"homework_name": "hw1", "status": "approved"},
            ],
        });

        let (homeworks, cursor) = check_response(&raw).unwrap();
        assert_eq!(cursor, 1000);
        assert_eq!(homeworks.len(), 2);
        // Server order is preserved; index 0 is what gets formatted.
        assert_eq!(homeworks[0]["homework_name"], "hw2");
    }

    #[test]
    fn empty_list_is_not_an_error() {
        let raw = json!({"current_date": 123, "homeworks": []});
        let (homeworks, cursor) = check_response(&raw).unwrap();
        assert!(homeworks.is_empty());
        assert_eq!(cursor, 123);
    }

    #[test]
    fn rejects_non_mapping_payload() {
        for raw in [json!([1, 2]), json!("nope"), json!(42)] {
            assert!(matches!(
                check_response(&raw),
                Err(Error::MalformedResponse(_))
            ));
        }
    }

    #[test]
    fn rejects_missing_cursor() {
        let raw = json!({"homeworks": []});
        assert!(matches!(check_response(&raw), Err(Error::MissingCursor)));

        // null is equivalent to an absent key.
        let raw = json!({"current_date": null, "homeworks": []});
        assert!(matches!(check_response(&raw), Err(Error::MissingCursor)));
    }

    #[test]
    fn rejects_non_integer_cursor() {
        let raw = json!({"current_date": "soon", "homeworks": []});
        assert!(matches!(
            check_response(&raw),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn rejects_missing_homeworks_key() {
        let raw = json!({"current_date": 1000});
        assert!(matches!(
            check_response(&raw),
            Err(Error::MissingHomeworksKey)
        ));
    }

    #[test]
    fn rejects_non_list_homeworks() {
        let raw = json!({"current_date": 1000, "homeworks": "hw1"});
        assert!(matches!(check_response(&raw), Err(Error::HomeworksNotAList)));

        let raw = json!({"current_date": 1000, "homeworks": {"homework_name": "hw1"}});
        assert!(matches!(check_response(&raw), Err(Error::HomeworksNotAList)));
    }
}
