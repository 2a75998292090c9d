use gscores::statistics::StatisticsQuery;
use gscores::{ApiError, Block, HttpScoresClient, ScoreLevel, ScoresApi};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves one canned response per connection and returns the request lines
/// it saw, in order.
async fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/api/", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let request = String::from_utf8_lossy(&request);
            seen.push(request.lines().next().unwrap_or_default().to_string());

            let response = format!(
                "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        }
        seen
    });

    (base_url, handle)
}

fn client(base_url: &str) -> HttpScoresClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpScoresClient::with_client(base_url, http)
}

#[test_log::test(tokio::test)]
async fn requests_hit_the_documented_paths() {
    let (base_url, server) = serve(vec![
        (200, r#"{"success":true,"data":{"sbd":"01000001","toan":8.4}}"#),
        (200, r#"{"data":{"subjects":[{"key":"toan","name":"Toan"}]}}"#),
        (200, r#"{"success":true,"data":{"ngu_van":{"poor":2},"toan":{"excellent":9}}}"#),
        (200, r#"{"message":"ok","data":[{"sbd":"02000002","rank":1,"total_score":28.0}]}"#),
    ])
    .await;
    let api = client(&base_url);

    let record = api.search_by_sbd("01000001").await.unwrap();
    assert_eq!(record.toan, Some(8.4));

    let metadata = api.metadata().await.unwrap();
    assert_eq!(metadata.subject_name("toan"), "Toan");

    let query = StatisticsQuery::new(
        vec!["toan".into(), "ngu_van".into()],
        vec![ScoreLevel::Poor, ScoreLevel::Excellent],
    )
    .unwrap();
    let data = api.filtered_statistics(&query).await.unwrap();
    assert_eq!(data.iter().count(), 2);

    let students = api.top_students(Block::B).await.unwrap();
    assert_eq!(students[0].sbd, "02000002");

    let seen = server.await.unwrap();
    assert_eq!(
        seen,
        [
            "GET /api/scores/search/01000001 HTTP/1.1",
            "GET /api/statistics/metadata HTTP/1.1",
            "GET /api/statistics/filter?subjects=ngu_van%2Ctoan&levels=excellent%2Cpoor HTTP/1.1",
            "GET /api/find-top/top/B HTTP/1.1",
        ]
    );
}

#[test_log::test(tokio::test)]
async fn search_escapes_the_registration_number_and_maps_404() {
    let (base_url, server) =
        serve(vec![(404, r#"{"success":false,"message":"Student not found"}"#)]).await;
    let api = client(&base_url);

    let result = api.search_by_sbd("01 000").await;
    assert_eq!(
        result,
        Err(ApiError::NotFound("Registration number not found.".to_string()))
    );

    let seen = server.await.unwrap();
    assert_eq!(seen, ["GET /api/scores/search/01%20000 HTTP/1.1"]);
}

#[test_log::test(tokio::test)]
async fn server_errors_surface_the_server_message() {
    let (base_url, server) = serve(vec![(
        500,
        r#"{"success":false,"message":"Database unavailable"}"#,
    )])
    .await;
    let api = client(&base_url);

    let result = api.top_students(Block::D).await;
    assert_eq!(
        result,
        Err(ApiError::RequestFailed("Database unavailable".to_string()))
    );
    assert_eq!(server.await.unwrap(), ["GET /api/find-top/top/D HTTP/1.1"]);
}
