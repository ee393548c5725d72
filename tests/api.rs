use axum::{body::Body, http::{Request, StatusCode}, Router};
use chrono::NaiveDate;
use opensase_lunar_calendar::{
    api::{router, AppState},
    domain::conversion::{AstronomicalConverter, ConversionFault, LunarConverter},
    service::Clock,
    CalendarQueryService, FallbackPolicy, LunarDate,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn d(y: i32, m: u32, day: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, day).unwrap() }

fn app_with(converter: Arc<dyn LunarConverter>, policy: FallbackPolicy) -> Router {
    let calendar = CalendarQueryService::new(converter, policy, Clock::Fixed(d(2025, 1, 29)));
    router(AppState { calendar, bulk_default_months: 3 })
}

fn app() -> Router { app_with(Arc::new(AstronomicalConverter::vietnamese()), FallbackPolicy::Approximate) }

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let resp = app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

struct OutageConverter;

impl LunarConverter for OutageConverter {
    fn convert(&self, _: NaiveDate) -> Result<LunarDate, ConversionFault> { Err(ConversionFault::Other("offline".into())) }
}

#[tokio::test]
async fn test_month_view() {
    let (status, body) = get(app(), "/api/lunar-calendar?year=2024&month=1").await;
    assert_eq!(status, StatusCode::OK);
    let days = body["days"].as_array().unwrap();
    assert_eq!(days.len(), 31);
    assert_eq!(days[0]["solarDate"], "2024-01-01");
    assert_eq!(days[30]["solarDate"], "2024-01-31");
    assert_eq!(body["monthInfo"]["lunarMonth"], 1);
    assert_eq!(body["monthInfo"]["lunarYear"], 2024);
    assert_eq!(body["monthInfo"]["canChiMonth"], "Giáp Tý");
    assert_eq!(body["monthInfo"]["seasonContext"], "Spring");
}

#[tokio::test]
async fn test_month_validation() {
    for uri in ["/api/lunar-calendar?year=2024&month=13", "/api/lunar-calendar?year=2024&month=0", "/api/lunar-calendar?year=abc&month=1"] {
        let (status, body) = get(app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["kind"], "validation");
        assert_eq!(body["error"], "Invalid year or month");
    }
    let (status, body) = get(app(), "/api/lunar-calendar?year=2024").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Year and month parameters are required");
}

#[tokio::test]
async fn test_today() {
    let (status, body) = get(app(), "/api/lunar-calendar/today").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["solarDate"], "2025-01-29");
    assert_eq!(body["isToday"], true);
    assert_eq!(body["holidayName"], "Tết Nguyên Đán");
}

#[tokio::test]
async fn test_day_by_date() {
    let (status, body) = get(app(), "/api/lunar-calendar/day?date=2024-09-17").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lunarDate"], 15);
    assert_eq!(body["lunarMonth"], 8);
    assert_eq!(body["isToday"], false);
    let (status, _) = get(app(), "/api/lunar-calendar/day?date=17-09-2024").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bulk_keys_and_clamp() {
    let (status, body) = get(app(), "/api/lunar-calendar/bulk?startYear=2024&startMonth=12&months=3").await;
    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 3);
    for key in ["2024-12", "2025-1", "2025-2"] {
        assert!(body.get(key).is_some(), "missing {key}");
    }

    let (_, clamped) = get(app(), "/api/lunar-calendar/bulk?startYear=2024&startMonth=1&months=20").await;
    let (_, twelve) = get(app(), "/api/lunar-calendar/bulk?startYear=2024&startMonth=1&months=12").await;
    assert_eq!(clamped, twelve);

    let (_, default) = get(app(), "/api/lunar-calendar/bulk?startYear=2024&startMonth=1").await;
    assert_eq!(default.as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn test_search() {
    let (status, body) = get(app(), "/api/lunar-calendar/search?query=T%E1%BA%BFt&year=2025&month=1").await;
    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(body["total"], results.len());
    assert!(results.iter().any(|day| day["solarDate"] == "2025-01-29"));

    let (status, body) = get(app(), "/api/lunar-calendar/search?query=&year=2025&month=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Search query is required");

    let (status, _) = get(app(), "/api/lunar-calendar/search?query=rau&filter=lucky").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_query_is_not_trimmed() {
    let (status, body) = get(app(), "/api/lunar-calendar/search?query=%20T%E1%BA%BFt&year=2025&month=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], " tết");

    let (status, body) = get(app(), "/api/lunar-calendar/search?query=%20&year=2024&month=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 31);
}

#[tokio::test]
async fn test_bulk_stops_at_year_9999() {
    let (status, body) = get(app(), "/api/lunar-calendar/bulk?startYear=9999&startMonth=12&months=2").await;
    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["9999-12"]);
}

#[tokio::test]
async fn test_search_defaults_to_current_month() {
    let (status, body) = get(app(), "/api/lunar-calendar/search?query=rau&filter=holiday").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2025);
    assert_eq!(body["month"], 1);
    assert!(body["results"].as_array().unwrap().iter().all(|day| day["isHoliday"] == true));
}

#[tokio::test]
async fn test_converter_outage_keeps_every_day() {
    let app = app_with(Arc::new(OutageConverter), FallbackPolicy::Approximate);
    let (status, body) = get(app, "/api/lunar-calendar?year=2024&month=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"].as_array().unwrap().len(), 29);
}

#[tokio::test]
async fn test_fail_fast_reports_internal_error() {
    let app = app_with(Arc::new(OutageConverter), FallbackPolicy::FailFast);
    let (status, body) = get(app, "/api/lunar-calendar?year=2024&month=2").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["kind"], "internal");
}

#[tokio::test]
async fn test_holidays_listing() {
    let (status, body) = get(app(), "/api/lunar-calendar/holidays").await;
    assert_eq!(status, StatusCode::OK);
    let holidays = body.as_array().unwrap();
    assert_eq!(holidays.len(), 11);
    assert_eq!(holidays[0]["name"], "Tết Nguyên Đán");
    assert_eq!(holidays[0]["lunarMonth"], 1);
}
