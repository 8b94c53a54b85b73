use actix_web::http::{Method, StatusCode, header};
use actix_web::{App, test, web};
use chrono::DateTime;
use futures::future::join_all;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait,
    Schema,
};
use time_log_backend::models::time_log;
use time_log_backend::routes;
use time_log_backend::utils::time::ZonedClock;

fn toronto() -> ZonedClock {
    ZonedClock::new(chrono_tz::America::Toronto)
}

async fn connect(url: &str) -> DatabaseConnection {
    let mut options = ConnectOptions::new(url.to_owned());
    // Une base SQLite en mémoire n'existe que pour sa connexion
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    Database::connect(options).await.expect("connect sqlite")
}

async fn create_table(db: &DatabaseConnection) {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(time_log::Entity)))
        .await
        .expect("create time_log");
}

async fn setup_db() -> DatabaseConnection {
    let db = connect("sqlite::memory:").await;
    create_table(&db).await;
    db
}

async fn row_count(db: &DatabaseConnection) -> u64 {
    time_log::Entity::find().count(db).await.expect("count rows")
}

#[actix_web::test]
async fn get_records_one_row_and_returns_json() {
    let db = setup_db().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(toronto()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/current-time").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body: serde_json::Value = test::read_body_json(resp).await;
    let current_time = body["current_time"].as_str().expect("current_time field");
    assert!(
        DateTime::parse_from_rfc2822(current_time).is_ok(),
        "not an RFC 1123 date: {}",
        current_time
    );
    assert!(current_time.ends_with(" EST") || current_time.ends_with(" EDT"));

    assert_eq!(row_count(&db).await, 1);
}

#[actix_web::test]
async fn stored_date_matches_today_in_configured_zone() {
    let db = setup_db().await;
    let clock = toronto();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(clock))
            .configure(routes::configure_routes),
    )
    .await;

    let before = clock.now().date_naive();
    let req = test::TestRequest::get().uri("/current-time").to_request();
    let resp = test::call_service(&app, req).await;
    let after = clock.now().date_naive();
    assert_eq!(resp.status(), StatusCode::OK);

    let rows = time_log::Entity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);

    // Un appel à cheval sur minuit peut tomber sur l'un ou l'autre jour
    let stored = rows[0].timestamp.date();
    assert!(stored == before || stored == after, "stored date {} not today", stored);
}

#[actix_web::test]
async fn any_method_is_accepted() {
    let db = setup_db().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(toronto()))
            .configure(routes::configure_routes),
    )
    .await;

    for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let req = test::TestRequest::default()
            .method(method.clone())
            .uri("/current-time")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "method {}", method);
    }

    assert_eq!(row_count(&db).await, 4);
}

#[actix_web::test]
async fn other_paths_are_not_found() {
    let db = setup_db().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(toronto()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/time").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(row_count(&db).await, 0);
}

#[actix_web::test]
async fn disconnected_store_returns_500() {
    let counter = setup_db().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(DatabaseConnection::Disconnected))
            .app_data(web::Data::new(toronto()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/current-time").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        resp.headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );
    let body = test::read_body(resp).await;
    assert_eq!(body, "Database insert failed");
    assert_eq!(row_count(&counter).await, 0);
}

#[actix_web::test]
async fn closed_pool_returns_500_and_row_count_is_unchanged() {
    let path = std::env::temp_dir().join(format!(
        "time_log_closed_pool_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}?mode=rwc", path.display());

    let db = connect(&url).await;
    create_table(&db).await;
    let counter = connect(&url).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(toronto()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/current-time").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(row_count(&counter).await, 1);

    // Ferme le pool partagé par l'application
    db.close().await.unwrap();

    let req = test::TestRequest::get().uri("/current-time").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(test::read_body(resp).await, "Database insert failed");
    assert_eq!(row_count(&counter).await, 1);

    counter.close().await.unwrap();
    let _ = std::fs::remove_file(&path);
}

#[actix_web::test]
async fn missing_table_returns_500() {
    let db = connect("sqlite::memory:").await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(toronto()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/current-time").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(test::read_body(resp).await, "Database insert failed");
}

#[actix_web::test]
async fn concurrent_requests_each_insert_one_row() {
    let db = setup_db().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(toronto()))
            .configure(routes::configure_routes),
    )
    .await;

    let calls = (0..50).map(|_| {
        let req = test::TestRequest::get().uri("/current-time").to_request();
        test::call_service(&app, req)
    });
    let responses = join_all(calls).await;

    assert!(responses.iter().all(|r| r.status() == StatusCode::OK));
    assert_eq!(row_count(&db).await, 50);
}
