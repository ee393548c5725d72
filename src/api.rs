//! HTTP surface of the lunar calendar

use axum::{extract::{Query, State}, http::StatusCode, response::{IntoResponse, Response}, routing::get, Json, Router};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::str::FromStr;

use crate::config::Config;
use crate::domain::almanac::{Holiday, HolidayRegistry};
use crate::service::CalendarQueryService;
use crate::{BulkMonths, CalendarError, LunarDay, LunarMonthData, Result, SearchFilter, SearchResults};

#[derive(Clone)]
pub struct AppState { pub calendar: CalendarQueryService, pub bulk_default_months: i64 }

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self { calendar: CalendarQueryService::from_config(config), bulk_default_months: config.bulk_default_months }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { Json(serde_json::json!({"status": "healthy", "service": "opensase-lunar-calendar"})) }))
        .route("/api/lunar-calendar", get(get_month))
        .route("/api/lunar-calendar/today", get(get_today))
        .route("/api/lunar-calendar/day", get(get_day))
        .route("/api/lunar-calendar/bulk", get(get_bulk))
        .route("/api/lunar-calendar/search", get(search))
        .route("/api/lunar-calendar/holidays", get(list_holidays))
        .with_state(state)
}

impl IntoResponse for CalendarError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            CalendarError::Validation(_) => (StatusCode::BAD_REQUEST, "validation"),
            CalendarError::Conversion { .. } | CalendarError::Internal(_) => {
                tracing::error!(error = %self, "lunar calendar request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        };
        (status, Json(serde_json::json!({"error": self.to_string(), "kind": kind}))).into_response()
    }
}

/// Treats absent and blank parameters alike.
fn present(raw: &Option<String>) -> Option<&str> { raw.as_deref().map(str::trim).filter(|s| !s.is_empty()) }

fn parse_year_month(year: &str, month: &str) -> Result<(i32, u32)> {
    let year = year.parse().map_err(|_| CalendarError::invalid_year_or_month())?;
    let month = month.parse().map_err(|_| CalendarError::invalid_year_or_month())?;
    Ok((year, month))
}

#[derive(Debug, Deserialize)] pub struct MonthParams { pub year: Option<String>, pub month: Option<String> }

async fn get_month(State(s): State<AppState>, Query(p): Query<MonthParams>) -> Result<Json<LunarMonthData>> {
    let (Some(year), Some(month)) = (present(&p.year), present(&p.month)) else {
        return Err(CalendarError::Validation("Year and month parameters are required".to_string()));
    };
    let (year, month) = parse_year_month(year, month)?;
    s.calendar.month(year, month).map(Json)
}

async fn get_today(State(s): State<AppState>) -> Result<Json<LunarDay>> {
    s.calendar.today_day().map(Json)
}

#[derive(Debug, Deserialize)] pub struct DayParams { pub date: Option<String> }

async fn get_day(State(s): State<AppState>, Query(p): Query<DayParams>) -> Result<Json<LunarDay>> {
    let date = match present(&p.date) {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| CalendarError::Validation("Invalid date".to_string()))?,
        None => s.calendar.today(),
    };
    s.calendar.day(date).map(Json)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkParams { pub start_year: Option<String>, pub start_month: Option<String>, pub months: Option<String> }

async fn get_bulk(State(s): State<AppState>, Query(p): Query<BulkParams>) -> Result<Json<BulkMonths>> {
    let (Some(year), Some(month)) = (present(&p.start_year), present(&p.start_month)) else {
        return Err(CalendarError::Validation("startYear and startMonth parameters are required".to_string()));
    };
    let (year, month) = parse_year_month(year, month)?;
    let months = match present(&p.months) {
        Some(raw) => raw.parse().map_err(|_| CalendarError::Validation("Invalid months".to_string()))?,
        None => s.bulk_default_months,
    };
    let calendar = s.calendar.clone();
    tokio::task::spawn_blocking(move || calendar.bulk_months(year, month, months))
        .await
        .map_err(|e| CalendarError::Internal(e.to_string()))?
        .map(Json)
}

#[derive(Debug, Deserialize)]
pub struct SearchParams { pub query: Option<String>, pub year: Option<String>, pub month: Option<String>, pub filter: Option<String> }

async fn search(State(s): State<AppState>, Query(p): Query<SearchParams>) -> Result<Json<SearchResults>> {
    let Some(query) = p.query.as_deref().filter(|q| !q.is_empty()) else {
        return Err(CalendarError::Validation("Search query is required".to_string()));
    };
    let today = s.calendar.today();
    let year = present(&p.year).map(i32::from_str).transpose().map_err(|_| CalendarError::invalid_year_or_month())?.unwrap_or(today.year());
    let month = present(&p.month).map(u32::from_str).transpose().map_err(|_| CalendarError::invalid_year_or_month())?.unwrap_or(today.month());
    let filter = present(&p.filter).map(SearchFilter::from_str).transpose()?;
    s.calendar.search(query, year, month, filter).map(Json)
}

async fn list_holidays() -> Json<&'static [Holiday]> { Json(HolidayRegistry::all()) }
