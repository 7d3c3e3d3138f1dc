use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;

use pelada_sagaz::auth::Role;

mod utils;

use utils::*;

#[tokio::test]
async fn test_health_is_public() {
    let app = TestAppBuilder::new().build();

    let response = app.send("GET", "/health", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_or_bad_token_is_unauthorized() {
    let app = TestAppBuilder::new().build();

    ResponseAssertion::from(app.send("GET", "/players", None, None).await)
        .await
        .status(StatusCode::UNAUTHORIZED)
        .has_error();

    ResponseAssertion::from(app.send("GET", "/players", Some("not-a-jwt"), None).await)
        .await
        .status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_top_scorers_accumulate_across_games_and_filter_by_type() {
    let app = TestAppBuilder::new().build();
    let romario = app.add_player("Romário").await;
    let bebeto = app.add_player("Bebeto").await;

    let pelada = app.add_game("2024-02-10", "pelada").await;
    let final_game = app.add_game("2024-08-03", "campeonato").await;

    app.add_goals(&pelada, &romario, 2).await;
    app.add_goals(&pelada, &romario, 1).await;
    app.add_goals(&pelada, &bebeto, 1).await;
    app.add_goals(&final_game, &bebeto, 2).await;

    let all_time = ResponseAssertion::from(app.get_as(Role::Player, "/stats/top-scorers").await)
        .await
        .status(StatusCode::OK);
    // Tied on three, so alphabetical
    assert_eq!(all_time.ranked_names(), vec!["Bebeto", "Romário"]);
    assert_eq!(all_time.ranked_totals(), vec![3, 3]);

    let competitive = ResponseAssertion::from(
        app.get_as(Role::Viewer, "/stats/top-scorers?game_type=campeonato")
            .await,
    )
    .await
    .status(StatusCode::OK);
    assert_eq!(competitive.ranked_names(), vec!["Bebeto"]);
    assert_eq!(competitive.ranked_totals(), vec![2]);

    let first_quarter = ResponseAssertion::from(
        app.get_as(Role::Player, "/stats/top-scorers?period=2024-q1")
            .await,
    )
    .await
    .status(StatusCode::OK);
    assert_eq!(first_quarter.ranked_names(), vec!["Romário", "Bebeto"]);
    assert_eq!(first_quarter.ranked_totals(), vec![3, 1]);
}

#[tokio::test]
async fn test_unknown_period_is_rejected() {
    let app = TestAppBuilder::new().build();

    ResponseAssertion::from(
        app.get_as(Role::Admin, "/stats/top-scorers?period=2024-q9")
            .await,
    )
    .await
    .status(StatusCode::BAD_REQUEST)
    .has_error();
}

#[tokio::test]
async fn test_periods_follow_game_dates() {
    let app = TestAppBuilder::new().build();
    app.add_game("2023-11-20", "pelada").await;
    app.add_game("2024-05-04", "pelada").await;
    app.add_game("2024-05-18", "campeonato").await;

    let periods = ResponseAssertion::from(app.get_as(Role::Viewer, "/stats/periods").await)
        .await
        .status(StatusCode::OK);
    assert_eq!(
        periods.period_ids(),
        vec!["2024-total", "2024-q2", "2023-total", "2023-q4"]
    );
}

#[tokio::test]
async fn test_balance_reflects_treasury_movements() {
    let app = TestAppBuilder::new().build();
    app.add_transaction("2024-01-05", "inflow", "100.00").await;
    app.add_transaction("2024-01-06", "outflow", "40.00").await;

    let summary = ResponseAssertion::from(app.get_as(Role::Treasurer, "/stats/balance").await)
        .await
        .status(StatusCode::OK);
    let balance = summary.body()["balance"].as_str().unwrap();
    assert_eq!(Decimal::from_str(balance).unwrap(), Decimal::from(60));
}

#[tokio::test]
async fn test_roles_are_enforced_per_resource() {
    let app = TestAppBuilder::new().build();

    // Players see the roster but not the cash box
    ResponseAssertion::from(app.get_as(Role::Player, "/stats/balance").await)
        .await
        .status(StatusCode::FORBIDDEN)
        .has_error();
    ResponseAssertion::from(app.get_as(Role::Player, "/players").await)
        .await
        .status(StatusCode::OK);

    // Treasurers register movements but never touch the roster
    ResponseAssertion::from(
        app.post_as(
            Role::Treasurer,
            "/players",
            json!({
                "name": "Zico",
                "position": "midfielder",
                "rating": 5.0,
                "attendance": "regular"
            }),
        )
        .await,
    )
    .await
    .status(StatusCode::FORBIDDEN);

    // Viewers never see the treasury
    ResponseAssertion::from(app.get_as(Role::Viewer, "/transactions").await)
        .await
        .status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invalid_rating_is_rejected() {
    let app = TestAppBuilder::new().build();

    ResponseAssertion::from(
        app.post_as(
            Role::Admin,
            "/players",
            json!({
                "name": "Sócrates",
                "position": "midfielder",
                "rating": 5.5,
                "attendance": "occasional"
            }),
        )
        .await,
    )
    .await
    .status(StatusCode::BAD_REQUEST)
    .has_error();
}

#[tokio::test]
async fn test_championship_ranking_defaults_to_latest_year() {
    let app = TestAppBuilder::new().build();
    let zico = app.add_player("Zico").await;
    let junior = app.add_player("Júnior").await;

    app.add_title(&zico, "2023-06-01").await;
    app.add_title(&junior, "2024-03-01").await;
    app.add_title(&zico, "2024-09-01").await;
    app.add_title(&zico, "2024-12-01").await;

    let latest = ResponseAssertion::from(app.get_as(Role::Viewer, "/stats/championships").await)
        .await
        .status(StatusCode::OK);
    assert_eq!(latest.body()["year"], json!(2024));
    assert_eq!(latest.body()["years"], json!([2024, 2023]));
    assert_eq!(latest.ranked_names(), vec!["Zico", "Júnior"]);
    assert_eq!(latest.ranked_totals(), vec![2, 1]);

    let earlier = ResponseAssertion::from(
        app.get_as(Role::Viewer, "/stats/championships?year=2023")
            .await,
    )
    .await
    .status(StatusCode::OK);
    assert_eq!(earlier.ranked_names(), vec!["Zico"]);
}

#[tokio::test]
async fn test_deleted_player_drops_out_of_rankings() {
    let app = TestAppBuilder::new().build();
    let garrincha = app.add_player("Garrincha").await;
    let didi = app.add_player("Didi").await;
    let game = app.add_game("2024-04-13", "pelada").await;
    app.add_goals(&game, &garrincha, 4).await;
    app.add_goals(&game, &didi, 1).await;

    let response = app
        .send(
            "DELETE",
            &format!("/players/{}", garrincha),
            Some(&app.admin_token),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let ranking = ResponseAssertion::from(app.get_as(Role::Player, "/stats/top-scorers").await)
        .await
        .status(StatusCode::OK);
    assert_eq!(ranking.ranked_names(), vec!["Didi"]);
}

#[tokio::test]
async fn test_deleting_a_game_removes_its_goals() {
    let app = TestAppBuilder::new().build();
    let pele = app.add_player("Pelé").await;
    let game = app.add_game("2024-07-07", "campeonato").await;
    app.add_goals(&game, &pele, 3).await;

    let response = app
        .send(
            "DELETE",
            &format!("/games/{}", game),
            Some(&app.admin_token),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let ranking = ResponseAssertion::from(app.get_as(Role::Player, "/stats/top-scorers").await)
        .await
        .status(StatusCode::OK);
    assert!(ranking.ranked_names().is_empty());

    ResponseAssertion::from(app.get_as(Role::Player, &format!("/games/{}", game)).await)
        .await
        .status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_amount_beyond_cents_precision_is_rejected() {
    let app = TestAppBuilder::new().build();

    ResponseAssertion::from(
        app.post_as(
            Role::Treasurer,
            "/transactions",
            json!({ "date": "2024-01-05", "direction": "inflow", "amount": "0.001" }),
        )
        .await,
    )
    .await
    .status(StatusCode::BAD_REQUEST)
    .has_error();

    let summary = ResponseAssertion::from(app.get_as(Role::Treasurer, "/stats/balance").await)
        .await
        .status(StatusCode::OK);
    let balance = summary.body()["balance"].as_str().unwrap();
    assert_eq!(Decimal::from_str(balance).unwrap(), Decimal::ZERO);
}
