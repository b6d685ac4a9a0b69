//! Free-text team query to filtered highlight list, with a recording search
//! backend in place of YouTube.

mod support;

use std::sync::Arc;

use chrono::NaiveDate;
use hoop_watcher_lib::{
    AppError, DateFormat, HighlightQueryBuilder, HighlightService, QueryResolver, TeamQuery,
};
use support::factories::{result, two_team_catalog};
use support::stub_search::StubSearchClient;

fn new_year() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2023, 1, 1)
}

#[tokio::test]
async fn test_two_teams_share_one_search() {
    let catalog = two_team_catalog();
    let teams = QueryResolver::new().resolve_all(&TeamQuery::parse("knicks, grizzlies").unwrap(), &catalog);
    assert_eq!(teams.len(), 2);

    let stub = Arc::new(StubSearchClient::returning(vec![
        result("a", "Knicks vs Grizzlies Full Game Highlights"),
        result("b", "Grizzlies vs Knicks postgame"),
        result("c", "knicks HIGHLIGHTS from 1994"),
    ]));
    let service = HighlightService::new(stub.clone(), 10);

    let highlights = service.get_highlights(&teams, new_year()).await.unwrap();

    assert_eq!(
        stub.calls(),
        vec![(
            "'New York Knicks vs Memphis Grizzlies NBA Full Game Highlights January 1, 2023'"
                .to_string(),
            10
        )]
    );
    let urls: Vec<&str> = highlights.iter().map(|h| h.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://www.youtube.com/watch?v=a",
            "https://www.youtube.com/watch?v=c"
        ]
    );
    assert_eq!(
        highlights[0].label(1),
        "[1] https://www.youtube.com/watch?v=a : Knicks vs Grizzlies Full Game Highlights"
    );
}

#[tokio::test]
async fn test_iso_dates_and_no_date() {
    let catalog = two_team_catalog();
    let teams = QueryResolver::new().resolve_all(&TeamQuery::parse("mem").unwrap(), &catalog);

    let stub = Arc::new(StubSearchClient::returning(Vec::new()));
    let service = HighlightService::new(stub.clone(), 3)
        .with_query_builder(HighlightQueryBuilder::new(DateFormat::Iso));

    let highlights = service.get_highlights(&teams, new_year()).await.unwrap();
    assert!(highlights.is_empty());
    service.get_highlights(&teams, None).await.unwrap();

    let queries: Vec<String> = stub.calls().into_iter().map(|(q, _)| q).collect();
    assert_eq!(
        queries,
        vec![
            "'Memphis Grizzlies NBA Full Game Highlights 2023-01-01'".to_string(),
            "'Memphis Grizzlies NBA Full Game Highlights'".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_unresolved_teams_never_reach_search() {
    let catalog = two_team_catalog();
    let teams = QueryResolver::new().resolve_all(&TeamQuery::parse("lakers").unwrap(), &catalog);
    assert!(teams.is_empty());

    let stub = Arc::new(StubSearchClient::returning(Vec::new()));
    let service = HighlightService::new(stub.clone(), 10);

    let result = service.get_highlights(&teams, None).await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_backend_failure_is_search_unavailable() {
    let stub = Arc::new(StubSearchClient::failing(AppError::RateLimitError(
        "quota".to_string(),
    )));
    let service = HighlightService::new(stub.clone(), 10);

    let result = service
        .get_highlights(&[support::factories::knicks()], new_year())
        .await;
    assert!(matches!(result, Err(AppError::SearchUnavailable(_))));
    // A single attempt; retrying is the transport's business
    assert_eq!(stub.calls().len(), 1);
}
