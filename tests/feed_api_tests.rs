
use actix_web::{test, App};
use serde_json::Value;
use tempfile::TempDir;

use staffhub_backend::routes::configure_routes;
use test_utils::test_state;

macro_rules! spawn_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .configure(configure_routes),
        )
        .await
    };
}

macro_rules! poll_new_users {
    ($app:expr) => {{
        let req = test::TestRequest::get().uri("/api/new-users").to_request();
        let rows: Value = test::call_and_read_body_json($app, req).await;
        rows
    }};
}

#[actix_web::test]
async fn second_poll_with_no_new_rows_is_empty() {
    let uploads = TempDir::new().unwrap();
    let (state, _, feed) = test_state(uploads.path());
    let app = spawn_app!(state);

    feed.register("alice");

    let first = poll_new_users!(&app);
    assert_eq!(first.as_array().unwrap().len(), 1);
    assert_eq!(first[0]["username"], "alice");

    let second = poll_new_users!(&app);
    assert!(second.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn a_row_registered_between_polls_is_delivered_exactly_once() {
    let uploads = TempDir::new().unwrap();
    let (state, _, feed) = test_state(uploads.path());
    let app = spawn_app!(state);

    feed.register("alice");
    let first = poll_new_users!(&app);
    assert_eq!(first.as_array().unwrap().len(), 1);

    feed.register("bob");

    let second = poll_new_users!(&app);
    assert_eq!(second.as_array().unwrap().len(), 1);
    assert_eq!(second[0]["username"], "bob");

    let third = poll_new_users!(&app);
    assert!(third.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn all_users_lists_newest_first_without_advancing_the_watermark() {
    let uploads = TempDir::new().unwrap();
    let (state, _, feed) = test_state(uploads.path());
    let app = spawn_app!(state);

    feed.register("alice");
    feed.register("bob");

    let req = test::TestRequest::get().uri("/api/all-users").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.as_array().unwrap().len(), 2);
    assert_eq!(all[0]["username"], "bob");
    assert_eq!(all[1]["username"], "alice");
    assert_eq!(all[0]["profile_image"], Value::Null);

    // Listing everything is watermark-neutral: both rows are still "new".
    let new = poll_new_users!(&app);
    assert_eq!(new.as_array().unwrap().len(), 2);
}
