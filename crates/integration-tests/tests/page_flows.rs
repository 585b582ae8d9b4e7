//! Page controller flows end to end: loading, creating, updating, and
//! deleting through the real client against a mock API.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::{Value, json};

use luxeboard_dashboard::api::ApiClient;
use luxeboard_dashboard::pages::{
    BookingsPage, GuestsPage, PAGE_SIZE, PropertiesPage, TasksPage, UsersAccess, UsersPage,
};
use luxeboard_dashboard::session::{AuthState, SessionStore};
use luxeboard_integration_tests::spawn_api;

fn authed() -> AuthState {
    AuthState {
        token: Some("tok".into()),
        user: None,
        loading: false,
    }
}

fn admin() -> AuthState {
    AuthState {
        token: Some("tok".into()),
        user: Some(luxeboard_dashboard::models::UserRecord::from_value(&json!({
            "id": "US-01", "role": "Admin",
        }))),
        loading: false,
    }
}

async fn client_for(router: Router) -> ApiClient {
    let base = spawn_api(router).await;
    ApiClient::new(base, SessionStore::in_memory())
}

#[tokio::test]
async fn test_properties_page_loads_collection() {
    let router = Router::new().route(
        "/properties",
        get(|| async {
            Json(json!([
                {"id": "PR-1", "name": "Bayview Retreat", "status": "Listed"},
                {"id": "PR-2", "name": "Mountain Escape"},
            ]))
        }),
    );
    let mut page = PropertiesPage::new(client_for(router).await);
    assert!(page.controller.is_loading());

    page.load(&authed()).await;
    assert!(!page.controller.is_loading());
    assert_eq!(page.controller.records().len(), 2);
    assert!(page.controller.error().is_none());
}

#[tokio::test]
async fn test_unauthenticated_page_never_fetches() {
    let router = Router::new().route(
        "/properties",
        get(|| async { Json(json!([{"id": "PR-1"}])) }),
    );
    let mut page = PropertiesPage::new(client_for(router).await);

    page.load(&AuthState::default()).await;
    // The skipped load leaves the initial state untouched.
    assert!(page.controller.is_loading());
    assert!(page.controller.records().is_empty());
}

#[tokio::test]
async fn test_bookings_load_fails_as_a_unit() {
    let router = Router::new()
        .route(
            "/bookings",
            get(|| async { Json(json!([{"id": "BK-1", "checkIn": "2025-11-12"}])) }),
        )
        .route(
            "/properties",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "properties down"})),
                )
            }),
        );
    let mut page = BookingsPage::new(client_for(router).await);

    page.load(&authed()).await;
    assert_eq!(page.bookings.error(), Some("properties down"));
    assert!(page.bookings.records().is_empty());
    assert!(page.property_names().is_empty());
}

#[tokio::test]
async fn test_bookings_load_feeds_calendar_and_picker() {
    let router = Router::new()
        .route(
            "/bookings",
            get(|| async {
                Json(json!([
                    {"id": "BK-1", "checkIn": "2025-11-12"},
                    {"id": "BK-2", "checkIn": "2025-11-12"},
                    {"id": "BK-3", "startDate": "2025-11-12"},
                    {"id": "BK-4", "checkIn": "2025-11-13"},
                    {"id": "BK-5", "checkIn": "2025-12-01"},
                ]))
            }),
        )
        .route(
            "/properties",
            get(|| async { Json(json!([{"id": "PR-1", "name": "Bayview Retreat"}])) }),
        );
    let mut page = BookingsPage::new(client_for(router).await);

    page.load(&authed()).await;
    assert_eq!(page.property_names(), vec!["Bayview Retreat"]);

    let today = NaiveDate::from_ymd_opt(2025, 11, 12).expect("valid date");
    let counts: Vec<_> = page.calendar(today).iter().map(|c| c.count).collect();
    assert_eq!(counts, vec![3, 1, 0, 0, 0, 0, 0]);
}

#[tokio::test]
async fn test_create_appends_server_record() {
    let router = Router::new().route(
        "/properties",
        get(|| async { Json(json!([])) }).post(|Json(body): Json<Value>| async move {
            assert_eq!(
                body.get("name").and_then(Value::as_str),
                Some("Harbor Loft")
            );
            Json(json!({"id": "PR-9", "name": "Harbor Loft", "status": "Listed"}))
        }),
    );
    let api = client_for(router).await;
    let mut page = PropertiesPage::new(api.clone());
    page.load(&authed()).await;
    page.controller.open_create();

    let created = page
        .controller
        .create(api.properties(), &json!({"name": "Harbor Loft"}))
        .await;
    assert!(created);
    assert!(!page.controller.is_create_open());
    assert_eq!(page.controller.records().len(), 1);
    assert_eq!(
        page.controller.records()[0].identity.canonical(),
        Some("PR-9")
    );
}

#[tokio::test]
async fn test_update_replaces_record_wholesale() {
    let router = Router::new()
        .route(
            "/properties",
            get(|| async {
                Json(json!([
                    {"id": "PR-1", "name": "Bayview Retreat", "location": "Santa Cruz"},
                ]))
            }),
        )
        .route(
            "/properties/{id}",
            put(|Path(id): Path<String>, Json(_body): Json<Value>| async move {
                assert_eq!(id, "PR-1");
                // The server's reply omits location; the local copy must not
                // keep it.
                Json(json!({"id": "PR-1", "name": "Bayview Lodge"}))
            }),
        );
    let api = client_for(router).await;
    let mut page = PropertiesPage::new(api.clone());
    page.load(&authed()).await;
    page.controller
        .select(page.controller.records()[0].clone());

    let updated = page
        .controller
        .update(api.properties(), "PR-1", &json!({"name": "Bayview Lodge"}))
        .await;
    assert!(updated);
    assert!(page.controller.selected().is_none());
    let record = &page.controller.records()[0];
    assert_eq!(record.name.as_deref(), Some("Bayview Lodge"));
    assert_eq!(record.location, None);
}

#[tokio::test]
async fn test_delete_failure_keeps_row_and_surfaces_message() {
    let router = Router::new()
        .route(
            "/properties",
            get(|| async { Json(json!([{"id": "PR-1", "name": "Bayview Retreat"}])) }),
        )
        .route(
            "/properties/{id}",
            delete(|Path(_id): Path<String>| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({"error": "Property has active bookings"})),
                )
            }),
        );
    let api = client_for(router).await;
    let mut page = PropertiesPage::new(api.clone());
    page.load(&authed()).await;

    page.controller.delete(api.properties(), "PR-1").await;
    assert_eq!(page.controller.records().len(), 1);
    assert_eq!(
        page.controller.error(),
        Some("Property has active bookings")
    );
    assert!(!page.controller.is_deleting("PR-1"));
}

#[tokio::test]
async fn test_users_page_confirmed_delete_removes_row() {
    let router = Router::new()
        .route(
            "/users",
            get(|| async {
                Json(json!([
                    {"id": "US-01", "name": "Nora Summers", "role": "Admin"},
                    {"id": "US-02", "name": "Evan Sterling", "role": "Manager"},
                ]))
            }),
        )
        .route(
            "/users/{id}",
            delete(|Path(id): Path<String>| async move {
                assert_eq!(id, "US-02");
                Json(json!({"deleted": true}))
            }),
        );
    let mut page = UsersPage::new(client_for(router).await);

    let auth = admin();
    assert_eq!(UsersPage::access(&auth), UsersAccess::Granted);
    page.load(&auth).await;
    assert_eq!(page.controller.records().len(), 2);

    page.controller.request_delete("US-02");
    page.confirm_pending_delete().await;
    assert_eq!(page.controller.records().len(), 1);
    assert!(page.controller.pending_delete().is_none());

    // Nothing pending: a second confirmation is a no-op.
    page.confirm_pending_delete().await;
    assert_eq!(page.controller.records().len(), 1);
}

#[tokio::test]
async fn test_users_page_denies_non_admin_without_fetching() {
    let router = Router::new().route("/users", get(|| async { Json(json!([{"id": "US-01"}])) }));
    let mut page = UsersPage::new(client_for(router).await);

    let auth = AuthState {
        token: Some("tok".into()),
        user: Some(luxeboard_dashboard::models::UserRecord::from_value(&json!({
            "id": "US-05", "role": "Staff",
        }))),
        loading: false,
    };
    assert_eq!(UsersPage::access(&auth), UsersAccess::Denied);

    page.load(&auth).await;
    assert!(page.controller.records().is_empty());
    assert!(page.controller.is_loading());
}

#[tokio::test]
async fn test_users_page_denies_admin_record_without_token() {
    let router = Router::new().route("/users", get(|| async { Json(json!([{"id": "US-01"}])) }));
    let mut page = UsersPage::new(client_for(router).await);

    // An admin user record can outlive a cleared token; the gate must
    // still deny and the page must not fetch.
    let auth = AuthState {
        token: None,
        user: Some(luxeboard_dashboard::models::UserRecord::from_value(&json!({
            "id": "US-01", "role": "Admin",
        }))),
        loading: false,
    };
    assert_eq!(UsersPage::access(&auth), UsersAccess::Denied);

    page.load(&auth).await;
    assert!(page.controller.records().is_empty());
    assert!(page.controller.is_loading());
}

#[tokio::test]
async fn test_guests_page_search_and_pagination() {
    let router = Router::new().route(
        "/guests",
        get(|| async {
            let guests: Vec<Value> = (0..12)
                .map(|i| {
                    json!({
                        "id": format!("GS-{i:03}"),
                        "name": format!("Guest {i}"),
                        "email": format!("guest{i}@luxe.stay"),
                    })
                })
                .collect();
            Json(Value::Array(guests))
        }),
    );
    let mut page = GuestsPage::new(client_for(router).await);

    page.load(&authed()).await;
    assert_eq!(page.total_pages(), 3);
    assert_eq!(page.page_items().len(), PAGE_SIZE);

    page.set_page(3);
    assert_eq!(page.page_items().len(), 2);

    // Searching narrows and snaps back to page 1.
    page.set_query("guest 1");
    assert_eq!(page.page(), 1);
    assert_eq!(page.filtered().len(), 3);
}

#[tokio::test]
async fn test_tasks_page_reloads_with_status_filter() {
    let router = Router::new().route(
        "/tasks",
        get(
            |axum::extract::Query(params): axum::extract::Query<
                std::collections::HashMap<String, String>,
            >| async move {
                match params.get("status").map(String::as_str) {
                    Some("Done") => Json(json!([{"id": "TK-2", "title": "Deep clean", "status": "Done"}])),
                    None => Json(json!([
                        {"id": "TK-1", "title": "Restock towels", "status": "To Do"},
                        {"id": "TK-2", "title": "Deep clean", "status": "Done"},
                    ])),
                    other => panic!("unexpected status filter: {other:?}"),
                }
            },
        ),
    );
    let mut page = TasksPage::new(client_for(router).await);

    page.load(&authed()).await;
    assert_eq!(page.controller.records().len(), 2);

    page.set_status_filter(&authed(), Some("Done".to_owned())).await;
    assert_eq!(page.status_filter(), Some("Done"));
    assert_eq!(page.controller.records().len(), 1);
    assert_eq!(page.controller.records()[0].title, "Deep clean");
}
