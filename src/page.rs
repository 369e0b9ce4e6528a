use crate::api::ApiClient;
use crate::config::Config;
use crate::dua::{DuaBoard, DuaRegion};
use crate::error::Result;
use crate::hadith::{HadithFeed, HadithRegion};
use crate::models::{Coordinates, Geolocation};
use crate::prayer::{CalendarRegion, DatePrayer, PrayerRegion};
use crate::quran::{QuranReader, QuranRegion};
use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Server state shared by every request: the configuration and the pooled
/// HTTP client. Page state lives in a [`Dashboard`] built per request.
#[derive(Debug, Clone)]
pub struct AppState {
    config: Config,
    api: ApiClient,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the API client cannot be built from the configured endpoints
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            api: ApiClient::new(config)?,
        })
    }

    /// A fresh page with empty regions, sharing only the HTTP client.
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::with_api(&self.config, self.api.clone())
    }
}

/// Every module of one page, each painting into its own region
pub struct Dashboard {
    site_name: String,
    date_prayer: DatePrayer,
    quran: QuranReader,
    hadith: HadithFeed,
    dua: DuaBoard,
}

impl Dashboard {
    /// Build the modules and the regions enabled in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API client cannot be built from the configured endpoints
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_api(config, ApiClient::new(config)?))
    }

    pub fn with_api(config: &Config, api: ApiClient) -> Self {
        Self {
            site_name: config.site_name.clone(),
            date_prayer: DatePrayer::new(api.clone()),
            quran: QuranReader::new(api.clone(), config.sections.quran),
            hadith: HadithFeed::new(api, config.sections.hadith),
            dua: DuaBoard::new(config.sections.dua),
        }
    }

    pub fn date_prayer(&self) -> &DatePrayer {
        &self.date_prayer
    }

    pub fn quran(&self) -> &QuranReader {
        &self.quran
    }

    pub fn hadith(&self) -> &HadithFeed {
        &self.hadith
    }

    pub fn dua(&self) -> &DuaBoard {
        &self.dua
    }

    /// Page load: initialize every module. They share nothing, so their
    /// fetches run concurrently.
    pub async fn load(&self) {
        tracing::debug!("Initializing page modules");
        self.dua.init_dua();
        tokio::join!(
            self.date_prayer.init_home(),
            self.quran.init_quran(),
            self.hadith.load_random_hadith(),
        );
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            site_name: self.site_name.clone(),
            calendar: self.date_prayer.calendar().snapshot(),
            prayer: self.date_prayer.prayer().snapshot(),
            quran: self.quran.region().map(|region| region.snapshot()),
            hadith: self.hadith.region().map(|region| region.snapshot()),
            dua: self.dua.region().map(|region| region.snapshot()),
        }
    }
}

/// Point-in-time copy of every region. Disabled regions are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub site_name: String,
    pub calendar: CalendarRegion,
    pub prayer: PrayerRegion,
    pub quran: Option<QuranRegion>,
    pub hadith: Option<HadithRegion>,
    pub dua: Option<DuaRegion>,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct PageTemplate {
    page: PageSnapshot,
}

fn render_page(dashboard: &Dashboard) -> Response {
    let template = PageTemplate {
        page: dashboard.snapshot(),
    };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template rendering error: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Template rendering error",
            )
                .into_response()
        }
    }
}

/// `GET /`
pub async fn load_page(State(state): State<Arc<AppState>>) -> Response {
    let dashboard = state.dashboard();
    dashboard.load().await;
    render_page(&dashboard)
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Set to `denied` by the page script when the browser refused
    pub geolocation: Option<String>,
}

impl LocationQuery {
    pub fn geolocation(&self) -> Geolocation {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Geolocation::Position(Coordinates {
                latitude,
                longitude,
            }),
            _ if self.geolocation.as_deref() == Some("denied") => Geolocation::Denied,
            _ => Geolocation::Unsupported,
        }
    }
}

/// `GET /prayer/location`
pub async fn prayer_by_location(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocationQuery>,
) -> Response {
    let dashboard = state.dashboard();
    tokio::join!(
        dashboard.load(),
        dashboard
            .date_prayer()
            .prayer_times_by_location(query.geolocation()),
    );
    render_page(&dashboard)
}

#[derive(Debug, Default, Deserialize)]
pub struct CityQuery {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

/// `GET /prayer/city`
pub async fn prayer_by_city(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CityQuery>,
) -> Response {
    let dashboard = state.dashboard();
    tokio::join!(
        dashboard.load(),
        dashboard
            .date_prayer()
            .prayer_times_by_city(&query.city, &query.country),
    );
    render_page(&dashboard)
}

#[derive(Debug, Default, Deserialize)]
pub struct SurahQuery {
    pub surah: Option<String>,
}

impl SurahQuery {
    /// Blank or non-numeric selections count as no selection
    pub fn surah_number(&self) -> Option<u16> {
        self.surah.as_deref().and_then(|s| s.trim().parse().ok())
    }
}

/// `GET /quran`
pub async fn select_surah(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SurahQuery>,
) -> Response {
    let dashboard = state.dashboard();
    tokio::join!(
        dashboard.load(),
        dashboard.quran().load_surah(query.surah_number()),
    );
    render_page(&dashboard)
}

/// `GET /hadith/random`
///
/// Page load already draws a new hadith, so this is a plain reload.
pub async fn random_hadith(state: State<Arc<AppState>>) -> Response {
    load_page(state).await
}

/// `GET /api/page`
pub async fn page_snapshot(State(state): State<Arc<AppState>>) -> Json<PageSnapshot> {
    let dashboard = state.dashboard();
    dashboard.load().await;
    Json(dashboard.snapshot())
}
