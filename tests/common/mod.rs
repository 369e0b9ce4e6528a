#![allow(dead_code)]

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use deen_dashboard::config::{Config, Endpoints};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// Surah whose Arabic edition answers slowly, for overtaking tests
pub const SLOW_SURAH: u16 = 2;

/// Cities whose timings answer after 300ms and 600ms
pub const SLOW_CITY: &str = "Slowtown";
pub const SLOWER_CITY: &str = "Slowertown";

/// Reference of the hadith served by a delayed request
pub const SLOW_HADITH_REFERENCE: &str = "Sahih Bukhari 2";

/// State of the fake third-party services
#[derive(Default)]
pub struct Upstream {
    requests: Mutex<Vec<String>>,
    pub translation_fails: AtomicBool,
    pub hadith_fails: AtomicBool,
    /// The next hadith request answers late with a different record
    pub hadith_slow_once: AtomicBool,
}

impl Upstream {
    fn record(&self, uri: &Uri) {
        let entry = uri
            .path_and_query()
            .map_or_else(|| uri.path().to_string(), ToString::to_string);
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(entry);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log poisoned").clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.starts_with(prefix))
            .count()
    }
}

pub struct MockUpstream {
    pub addr: SocketAddr,
    pub state: Arc<Upstream>,
}

impl MockUpstream {
    pub async fn start() -> Self {
        let state = Arc::new(Upstream::default());
        let app = Router::new()
            .route("/aladhan/gToH/:date", get(hijri))
            .route("/aladhan/timings", get(timings))
            .route("/aladhan/timingsByCity", get(timings_by_city))
            .route("/alquran/surah", get(surah_list))
            .route("/alquran/surah/:number", get(surah_arabic))
            .route("/alquran/surah/:number/:edition", get(surah_translation))
            .route("/hadith/bukhari/", get(hadith))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock upstream");
        let addr = listener
            .local_addr()
            .expect("Failed to read mock upstream address");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock upstream stopped");
        });

        Self { addr, state }
    }

    pub fn config(&self) -> Config {
        Config {
            endpoints: Endpoints {
                aladhan: format!("http://{}/aladhan/", self.addr),
                alquran: format!("http://{}/alquran/", self.addr),
                hadith: format!("http://{}/hadith/", self.addr),
            },
            ..Config::default()
        }
    }
}

/// Configuration whose endpoints refuse every connection
pub fn unreachable_config() -> Config {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to reserve a local port");
    let addr = listener
        .local_addr()
        .expect("Failed to read reserved address");
    drop(listener);

    Config {
        endpoints: Endpoints {
            aladhan: format!("http://{addr}/aladhan/"),
            alquran: format!("http://{addr}/alquran/"),
            hadith: format!("http://{addr}/hadith/"),
        },
        ..Config::default()
    }
}

pub fn full_timings() -> Value {
    json!({
        "Fajr": "04:52",
        "Sunrise": "06:13",
        "Dhuhr": "11:40",
        "Asr": "14:51",
        "Sunset": "17:07",
        "Maghrib": "17:07",
        "Isha": "18:25",
        "Imsak": "04:42",
        "Midnight": "23:40"
    })
}

async fn hijri(State(state): State<Arc<Upstream>>, uri: Uri) -> Json<Value> {
    state.record(&uri);
    Json(json!({
        "code": 200,
        "status": "OK",
        "data": {
            "hijri": {
                "date": "06-05-1448",
                "day": "06",
                "month": { "number": 5, "en": "Jumādá al-ūlá", "ar": "جُمادى الأولى" },
                "year": "1448"
            }
        }
    }))
}

async fn timings(State(state): State<Arc<Upstream>>, uri: Uri) -> Json<Value> {
    state.record(&uri);
    Json(json!({ "code": 200, "status": "OK", "data": { "timings": full_timings() } }))
}

async fn timings_by_city(
    State(state): State<Arc<Upstream>>,
    Query(query): Query<HashMap<String, String>>,
    uri: Uri,
) -> Response {
    state.record(&uri);
    match query.get("city").map(String::as_str) {
        Some(SLOW_CITY) => tokio::time::sleep(Duration::from_millis(300)).await,
        Some(SLOWER_CITY) => tokio::time::sleep(Duration::from_millis(600)).await,
        _ => {}
    }
    match query.get("city").map(String::as_str) {
        Some("Atlantis") => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "code": 400, "status": "BAD_REQUEST", "data": "Unable to find city" })),
        )
            .into_response(),
        Some("Partial") => Json(json!({
            "code": 200,
            "data": { "timings": { "Fajr": "05:10", "Dhuhr": "12:01" } }
        }))
        .into_response(),
        _ => Json(json!({ "code": 200, "data": { "timings": full_timings() } })).into_response(),
    }
}

async fn surah_list(State(state): State<Arc<Upstream>>, uri: Uri) -> Json<Value> {
    state.record(&uri);
    Json(json!({
        "code": 200,
        "data": [
            { "number": 1, "name": "سُورَةُ ٱلْفَاتِحَةِ", "englishName": "Al-Faatiha", "numberOfAyahs": 7 },
            { "number": 2, "name": "سُورَةُ البَقَرَةِ", "englishName": "Al-Baqara", "numberOfAyahs": 286 },
            { "number": 112, "name": "سُورَةُ الإِخۡلَاصِ", "englishName": "Al-Ikhlaas", "numberOfAyahs": 4 }
        ]
    }))
}

fn english_name(number: u16) -> &'static str {
    match number {
        1 => "Al-Faatiha",
        2 => "Al-Baqara",
        _ => "Al-Ikhlaas",
    }
}

async fn surah_arabic(
    State(state): State<Arc<Upstream>>,
    Path(number): Path<u16>,
    uri: Uri,
) -> Response {
    state.record(&uri);
    if number > 114 {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    }
    if number == SLOW_SURAH {
        tokio::time::sleep(Duration::from_millis(300)).await;
    }
    Json(json!({
        "code": 200,
        "data": {
            "number": number,
            "englishName": english_name(number),
            "ayahs": [
                { "number": 1, "text": format!("آية {number}-1"), "numberInSurah": 1 },
                { "number": 2, "text": format!("آية {number}-2"), "numberInSurah": 2 },
                { "number": 3, "text": format!("آية {number}-3"), "numberInSurah": 3 }
            ]
        }
    }))
    .into_response()
}

async fn surah_translation(
    State(state): State<Arc<Upstream>>,
    Path((number, edition)): Path<(u16, String)>,
    uri: Uri,
) -> Response {
    state.record(&uri);
    if state.translation_fails.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
    }
    Json(json!({
        "code": 200,
        "data": {
            "number": number,
            "englishName": english_name(number),
            "edition": { "identifier": edition },
            "ayahs": [
                { "number": 1, "text": format!("Verse {number}-1"), "numberInSurah": 1 },
                { "number": 2, "text": format!("Verse {number}-2"), "numberInSurah": 2 },
                { "number": 3, "text": format!("Verse {number}-3"), "numberInSurah": 3 }
            ]
        }
    }))
    .into_response()
}

async fn hadith(State(state): State<Arc<Upstream>>, uri: Uri) -> Response {
    state.record(&uri);
    if state.hadith_fails.load(Ordering::SeqCst) {
        return "<html>rate limited</html>".into_response();
    }
    let reference = if state.hadith_slow_once.swap(false, Ordering::SeqCst) {
        tokio::time::sleep(Duration::from_millis(300)).await;
        SLOW_HADITH_REFERENCE
    } else {
        "Sahih Bukhari 1"
    };
    Json(json!({
        "data": {
            "id": 1,
            "header": "Narrated 'Umar bin Al-Khattab:",
            "hadith_english": "I heard Allah's Messenger saying, \"The reward of deeds depends upon the intentions.\"",
            "book": "Revelation",
            "refno": reference,
            "bookName": "Sahih Bukhari",
            "chapterName": "Revelation"
        }
    }))
    .into_response()
}
