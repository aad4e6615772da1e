use nba_halftime::{
    config::Config,
    data_fetcher::api::create_http_client_with_timeout,
    error::AppError,
    evaluator::{GameKind, PerformanceRating},
    monitor::Monitor,
    testing_utils::{CompetitorBuilder, completed_event, live_event, scoreboard, stats_page},
    ui::{StatusPage, format_game_line},
};
use serde_json::Value;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const FIRST_HALF: &[(&str, f64)] = &[
    ("LA Lakers", 52.0),
    ("Boston", 48.0),
    ("Miami", 52.0),
    ("New York", 53.0),
];
const SECOND_HALF: &[(&str, f64)] = &[
    ("LA Lakers", 50.0),
    ("Boston", 47.0),
    ("Miami", 50.0),
    ("New York", 51.0),
];

async fn mount_sources(server: &MockServer, feed: Value) {
    Mock::given(method("GET"))
        .and(path("/scoreboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/first-half"))
        .respond_with(ResponseTemplate::new(200).set_body_string(stats_page(FIRST_HALF)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/second-half"))
        .respond_with(ResponseTemplate::new(200).set_body_string(stats_page(SECOND_HALF)))
        .mount(server)
        .await;
}

fn config_for(server: &MockServer) -> Config {
    Config {
        scoreboard_url: format!("{}/scoreboard", server.uri()),
        first_half_averages_url: format!("{}/first-half", server.uri()),
        second_half_averages_url: format!("{}/second-half", server.uri()),
        http_timeout_seconds: 5,
        ..Config::default()
    }
}

fn monitor_for(server: &MockServer) -> Monitor {
    let config = config_for(server);
    let client = create_http_client_with_timeout(config.http_timeout_seconds).unwrap();
    Monitor::with_client(client, &config)
}

fn render(page: &StatusPage) -> String {
    let mut buffer = Vec::new();
    page.render_buffered(&mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

/// Completed game: home 55/55 against 52/50 averages, away 50/45 against 48/47.
#[tokio::test]
async fn test_completed_game_end_to_end() {
    let server = MockServer::start().await;
    mount_sources(
        &server,
        scoreboard(vec![completed_event(
            "401",
            CompetitorBuilder::new("Celtics").id("2").periods(&[24, 26, 20, 25]),
            CompetitorBuilder::new("Lakers").id("13").periods(&[30, 25, 28, 27]),
        )]),
    )
    .await;

    let mut monitor = monitor_for(&server);
    let snapshot = monitor.poll_once().await.unwrap();

    assert!(snapshot.live.is_empty());
    assert_eq!(snapshot.completed.len(), 1);

    let game = &snapshot.completed[0];
    assert_eq!(game.kind, GameKind::Completed);
    assert_eq!(game.status, "FINAL");
    assert!(!game.is_emphasized());
    assert_eq!(
        format_game_line(game),
        "Celtics 50/45 ➖/➖ @ Lakers 55/55 🔥/🔥 - FINAL"
    );

    let output = render(&StatusPage::from_snapshot(&snapshot, false));
    assert!(output.contains("Completed Games (Halftime Scores):"));
    assert!(!output.contains("NBA Live Games (Halftime Scores):"));
    assert!(!output.contains("\x1b[1m"));
}

#[tokio::test]
async fn test_live_game_with_shared_hot_streak_is_bold() {
    let server = MockServer::start().await;
    mount_sources(
        &server,
        scoreboard(vec![live_event(
            "402",
            "Halftime",
            CompetitorBuilder::new("Knicks").periods(&[31, 29]),
            CompetitorBuilder::new("Heat").periods(&[30, 30]),
        )]),
    )
    .await;

    let mut monitor = monitor_for(&server);
    let snapshot = monitor.poll_once().await.unwrap();
    let game = &snapshot.live[0];

    assert_eq!(game.kind, GameKind::Live);
    assert!(game.is_emphasized());

    let output = render(&StatusPage::from_snapshot(&snapshot, false));
    assert!(output.contains("\x1b[1mKnicks 60 🔥 @ Heat 60 🔥 - Halftime\x1b[0m"));
}

#[tokio::test]
async fn test_unknown_team_gets_no_data_marker() {
    let server = MockServer::start().await;
    mount_sources(
        &server,
        scoreboard(vec![live_event(
            "403",
            "Halftime",
            CompetitorBuilder::new("Sonics").periods(&[25, 25]),
            CompetitorBuilder::new("Lakers").periods(&[26, 26]),
        )]),
    )
    .await;

    let mut monitor = monitor_for(&server);
    let snapshot = monitor.poll_once().await.unwrap();
    let game = &snapshot.live[0];

    assert_eq!(
        game.away.rating(nba_halftime::Segment::FirstHalf),
        Some(PerformanceRating::NoData)
    );
    assert_eq!(format_game_line(game), "Sonics 50 ⚪ @ Lakers 52 ➖ - Halftime");
}

#[tokio::test]
async fn test_games_before_halftime_are_not_shown() {
    let server = MockServer::start().await;
    mount_sources(
        &server,
        scoreboard(vec![live_event(
            "404",
            "1st Qtr",
            CompetitorBuilder::new("Celtics").periods(&[12]),
            CompetitorBuilder::new("Lakers").periods(&[14]),
        )]),
    )
    .await;

    let mut monitor = monitor_for(&server);
    let snapshot = monitor.poll_once().await.unwrap();
    assert!(snapshot.is_empty());

    let output = render(&StatusPage::from_snapshot(&snapshot, false));
    assert!(output.contains("No NBA games with halftime scores available"));
}

#[tokio::test]
async fn test_averages_fetched_once_across_cycles() {
    let server = MockServer::start().await;
    let feed = scoreboard(vec![live_event(
        "405",
        "Halftime",
        CompetitorBuilder::new("Celtics").periods(&[25, 25]),
        CompetitorBuilder::new("Lakers").periods(&[26, 26]),
    )]);

    Mock::given(method("GET"))
        .and(path("/scoreboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed))
        .expect(3)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/first-half"))
        .respond_with(ResponseTemplate::new(200).set_body_string(stats_page(FIRST_HALF)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/second-half"))
        .respond_with(ResponseTemplate::new(200).set_body_string(stats_page(SECOND_HALF)))
        .expect(1)
        .mount(&server)
        .await;

    let mut monitor = monitor_for(&server);
    for _ in 0..3 {
        let snapshot = monitor.poll_once().await.unwrap();
        assert_eq!(snapshot.live.len(), 1);
    }
    assert!(!monitor.averages().cache().is_stale());
}

#[tokio::test]
async fn test_averages_outage_degrades_to_no_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scoreboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scoreboard(vec![live_event(
            "406",
            "Halftime",
            CompetitorBuilder::new("Celtics").periods(&[25, 25]),
            CompetitorBuilder::new("Lakers").periods(&[26, 26]),
        )])))
        .mount(&server)
        .await;
    // No stats pages mounted: both averages sources answer 404

    let mut monitor = monitor_for(&server);
    let snapshot = monitor.poll_once().await.unwrap();

    assert_eq!(
        format_game_line(&snapshot.live[0]),
        "Celtics 50 ⚪ @ Lakers 52 ⚪ - Halftime"
    );
    assert!(monitor.averages().cache().is_stale());
}

/// Two completed games mean eight lookups per cycle, but a failing stats
/// site is asked once per cycle.
#[tokio::test]
async fn test_averages_outage_costs_one_refresh_per_cycle() {
    let server = MockServer::start().await;
    let feed = scoreboard(vec![
        completed_event(
            "410",
            CompetitorBuilder::new("Celtics").periods(&[24, 26, 20, 25]),
            CompetitorBuilder::new("Lakers").periods(&[30, 25, 28, 27]),
        ),
        completed_event(
            "411",
            CompetitorBuilder::new("Knicks").periods(&[27, 26, 24, 24]),
            CompetitorBuilder::new("Heat").periods(&[25, 27, 22, 26]),
        ),
    ]);

    Mock::given(method("GET"))
        .and(path("/scoreboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/first-half"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/second-half"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let mut monitor = monitor_for(&server);
    for _ in 0..2 {
        let snapshot = monitor.poll_once().await.unwrap();
        assert_eq!(snapshot.completed.len(), 2);
        assert_eq!(
            format_game_line(&snapshot.completed[0]),
            "Celtics 50/45 ⚪/⚪ @ Lakers 55/55 ⚪/⚪ - FINAL"
        );
    }
    assert!(monitor.averages().cache().is_stale());
}

#[tokio::test]
async fn test_scoreboard_failure_renders_error_line() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scoreboard"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut monitor = monitor_for(&server);
    let err = monitor.poll_once().await.unwrap_err();
    assert!(matches!(err, AppError::ApiServerError { status: 500, .. }));

    let output = render(&monitor.build_page(false).await);
    assert!(output.contains("Error fetching NBA scores:"));
    assert!(output.contains("Press Ctrl+C to exit"));
}

#[tokio::test]
async fn test_malformed_scoreboard_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scoreboard"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let mut monitor = monitor_for(&server);
    let err = monitor.poll_once().await.unwrap_err();
    assert!(matches!(err, AppError::ApiMalformedJson { .. }));
}

#[tokio::test]
async fn test_malformed_event_does_not_hide_other_games() {
    let server = MockServer::start().await;
    let good = live_event(
        "407",
        "Halftime",
        CompetitorBuilder::new("Celtics").periods(&[25, 25]),
        CompetitorBuilder::new("Lakers").periods(&[26, 26]),
    );
    let broken = serde_json::json!({
        "id": "408",
        "status": {"type": {"state": "in", "detail": "Halftime"}},
        "competitions": [{"competitors": [
            {"homeAway": "home", "team": {"id": "9", "name": "Heat"}, "linescores": {"value": 30}},
            {"homeAway": "away", "team": "Knicks", "linescores": [{"value": 28}, {"value": 27}]}
        ]}]
    });
    let numeric_ids = serde_json::json!({
        "id": 409,
        "status": {"type": {"state": "in", "detail": null}},
        "competitions": [{"competitors": [
            {"homeAway": "home", "team": {"id": 21, "name": "Suns"}, "linescores": [25, 25]},
            {"homeAway": "away", "team": {"id": 26, "name": "Jazz"}, "linescores": null}
        ]}]
    });
    mount_sources(&server, scoreboard(vec![broken, good, numeric_ids])).await;

    let mut monitor = monitor_for(&server);
    let snapshot = monitor.poll_once().await.unwrap();

    assert_eq!(snapshot.live.len(), 1);
    assert_eq!(
        format_game_line(&snapshot.live[0]),
        "Celtics 50 ➖ @ Lakers 52 ➖ - Halftime"
    );

    let output = render(&StatusPage::from_snapshot(&snapshot, false));
    assert!(!output.contains("Error fetching NBA scores"));
}
