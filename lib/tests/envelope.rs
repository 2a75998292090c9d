use gscores::api::{interpret_response, Endpoint};
use gscores::models::{ScoreRecord, StatisticsData, StatisticsMetadata, TopStudent};
use gscores::ApiError;

#[test_log::test]
fn success_envelope_yields_data() {
    let body = br#"{"success":true,"message":"ok","data":{"subjects":[{"key":"toan","name":"Toan"}]}}"#;
    let metadata: StatisticsMetadata = interpret_response(Endpoint::Metadata, 200, body).unwrap();
    assert_eq!(metadata.subjects.len(), 1);
    assert_eq!(metadata.subject_name("toan"), "Toan");
    assert_eq!(metadata.subject_name("gdcd"), "Civic Education");
}

#[test_log::test]
fn success_false_uses_server_message() {
    let body = br#"{"success":false,"message":"Invalid level 'great'","data":null}"#;
    let result: Result<StatisticsData, _> = interpret_response(Endpoint::Statistics, 200, body);
    assert_eq!(
        result,
        Err(ApiError::RequestFailed("Invalid level 'great'".to_string()))
    );
}

#[test_log::test]
fn server_error_without_message_uses_fallback() {
    let result: Result<ScoreRecord, _> =
        interpret_response(Endpoint::Search, 500, b"<html>Bad Gateway</html>");
    assert_eq!(
        result,
        Err(ApiError::RequestFailed("Error fetching scores.".to_string()))
    );

    let body = br#"{"success":false,"message":"   "}"#;
    let result: Result<ScoreRecord, _> = interpret_response(Endpoint::Search, 400, body);
    assert_eq!(
        result,
        Err(ApiError::RequestFailed("Error fetching scores.".to_string()))
    );
}

#[test_log::test]
fn server_error_message_is_preferred() {
    let body = br#"{"success":false,"message":"Registration number must be 8 digits"}"#;
    let result: Result<ScoreRecord, _> = interpret_response(Endpoint::Search, 422, body);
    assert_eq!(
        result,
        Err(ApiError::RequestFailed(
            "Registration number must be 8 digits".to_string()
        ))
    );
}

#[test_log::test]
fn missing_data_is_a_failure() {
    let body = br#"{"success":true,"message":"ok"}"#;
    let result: Result<StatisticsMetadata, _> = interpret_response(Endpoint::Metadata, 200, body);
    assert_eq!(
        result,
        Err(ApiError::RequestFailed(
            "Failed to load statistics metadata.".to_string()
        ))
    );
}

#[test_log::test]
fn statistics_payload_keeps_subject_order_and_nulls() {
    let body = br#"{"success":true,"message":"","data":{
        "ngu_van":{"excellent":1,"good":null},
        "toan":{"poor":7}
    }}"#;
    let data: StatisticsData = interpret_response(Endpoint::Statistics, 200, body).unwrap();
    let subjects: Vec<_> = data.iter().map(|(s, _)| s.to_string()).collect();
    assert_eq!(subjects, ["ngu_van", "toan"]);
}

#[test_log::test]
fn envelope_without_success_flag_is_accepted() {
    let body = br#"{"data":{"subjects":[{"key":"toan","name":"Toan"}]}}"#;
    let metadata: StatisticsMetadata = interpret_response(Endpoint::Metadata, 200, body).unwrap();
    assert_eq!(metadata.subject_name("toan"), "Toan");

    let body = br#"{"message":"ok","data":[{"sbd":"01000001","rank":1,"total_score":29.5,"toan":9.8}]}"#;
    let students: Vec<TopStudent> = interpret_response(Endpoint::TopStudents, 200, body).unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].sbd, "01000001");
    assert_eq!(students[0].rank, 1);
}

#[test_log::test]
fn explicit_success_flag_still_decides() {
    let ok = br#"{"success":true,"data":{"sbd":"01000001","toan":8.4}}"#;
    let record: ScoreRecord = interpret_response(Endpoint::Search, 200, ok).unwrap();
    assert_eq!(record.toan, Some(8.4));

    let failed = br#"{"success":false,"data":{"sbd":"01000001"}}"#;
    let result: Result<ScoreRecord, _> = interpret_response(Endpoint::Search, 200, failed);
    assert_eq!(
        result,
        Err(ApiError::RequestFailed("Error fetching scores.".to_string()))
    );
}
