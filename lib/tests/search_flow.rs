mod common;

use common::MockApi;
use gscores::api::NOT_FOUND_MESSAGE;
use gscores::models::ScoreRecord;
use gscores::search::{SearchAction, SearchState, SearchStatus};
use gscores::ApiError;

fn full_record() -> ScoreRecord {
    serde_json::from_value(serde_json::json!({
        "id": 1,
        "sbd": "01000001",
        "toan": 8.4,
        "ngu_van": 6.75,
        "ngoai_ngu": 8.0,
        "vat_li": 6.0,
        "hoa_hoc": 5.25,
        "sinh_hoc": 5.0,
        "lich_su": null,
        "dia_li": null,
        "gdcd": null,
        "ma_ngoai_ngu": "N1",
        "tongDiemKhoiA": 19.65,
        "tongDiemKhoiB": 18.65,
        "tongDiemKhoiD": 23.15,
        "diemTrungBinh": 6.57
    }))
    .unwrap()
}

async fn submit(state: &mut SearchState, api: &MockApi, input: &str) {
    if let Some(effect) = state.apply(SearchAction::Submit(input.to_string())) {
        let completion = effect.run(api).await;
        state.apply(completion);
    }
}

#[test_log::test(tokio::test)]
async fn found_record_shows_success_and_average() {
    let mut api = MockApi::new();
    api.expect_search_by_sbd()
        .withf(|sbd| sbd == "01000001")
        .times(1)
        .returning(|_| Ok(full_record()));

    let mut state = SearchState::default();
    submit(&mut state, &api, "  01000001 ").await;

    let card = state.card().expect("record should be found");
    assert_eq!(card.sbd, "01000001");
    assert_eq!(card.average, Some(6.57));
    assert_eq!(card.subjects.len(), 6);
    assert_eq!(card.block_totals.len(), 3);
    assert_eq!(state.query.as_deref(), Some("01000001"));
}

#[test_log::test(tokio::test)]
async fn not_found_leaves_no_stale_record() {
    let mut api = MockApi::new();
    api.expect_search_by_sbd()
        .withf(|sbd| sbd == "01000001")
        .returning(|_| Ok(full_record()));
    api.expect_search_by_sbd()
        .withf(|sbd| sbd == "99999999")
        .returning(|_| Err(ApiError::NotFound(NOT_FOUND_MESSAGE.to_string())));

    let mut state = SearchState::default();
    submit(&mut state, &api, "01000001").await;
    assert!(state.card().is_some());

    submit(&mut state, &api, "99999999").await;
    assert!(state.card().is_none());
    let error = state.error().expect("lookup should fail");
    assert!(error.is_not_found());
    assert_eq!(error.user_message(), "Registration number not found.");
}

#[test_log::test(tokio::test)]
async fn other_failures_surface_the_server_message() {
    let mut api = MockApi::new();
    api.expect_search_by_sbd()
        .returning(|_| Err(ApiError::RequestFailed("Service unavailable".to_string())));

    let mut state = SearchState::default();
    submit(&mut state, &api, "01000001").await;
    assert_eq!(
        state.status,
        SearchStatus::Failed(ApiError::RequestFailed("Service unavailable".to_string()))
    );
}

#[test_log::test(tokio::test)]
async fn slower_earlier_search_cannot_replace_newer_result() {
    let mut api = MockApi::new();
    api.expect_search_by_sbd().returning(|sbd| {
        let mut record = full_record();
        record.sbd = sbd.to_string();
        Ok(record)
    });

    let mut state = SearchState::default();
    let first = state
        .apply(SearchAction::Submit("01000001".into()))
        .unwrap();
    let second = state
        .apply(SearchAction::Submit("01000002".into()))
        .unwrap();
    assert!(state.is_loading());

    let second_done = second.run(&api).await;
    let first_done = first.run(&api).await;
    state.apply(second_done);
    state.apply(first_done);

    assert_eq!(state.card().map(|c| c.sbd.as_str()), Some("01000002"));
}
