//! Date and prayer timings.
//!
//! Owns two regions: the calendar line (Gregorian date computed locally plus
//! its Hijri equivalent) and the prayer panel (loader, alert, location label
//! and the five-row timings table).

use crate::api::ApiClient;
use crate::error::{DeenError, Result};
use crate::models::{Geolocation, PrayerRow, PrayerTimings};
use crate::region::{Loadable, Region};
use crate::utils::{gregorian_long_date, today};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, error, info, warn};

pub const HIJRI_UNAVAILABLE: &str = "Unavailable";
pub const YOUR_LOCATION: &str = "Your Location";

pub const ALERT_GEOLOCATION_UNSUPPORTED: &str = "Geolocation not supported.";
pub const ALERT_GEOLOCATION_DENIED: &str = "Unable to retrieve your location.";
pub const ALERT_FETCH_FAILED: &str = "Error fetching API data";
pub const ALERT_MISSING_CITY: &str = "Please enter city and country";
pub const ALERT_CITY_NOT_FOUND: &str = "Could not find city.";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CalendarRegion {
    pub gregorian: String,
    /// Empty until the conversion answers
    pub hijri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PrayerRegion {
    pub loading: bool,
    pub results_visible: bool,
    pub location_name: String,
    pub rows: Vec<PrayerRow>,
    /// Message the page raises as a blocking alert
    pub alert: Option<String>,
}

impl PrayerRegion {
    /// Paint a timings result, replacing whatever table was there before.
    pub fn display_prayer_times(&mut self, timings: &PrayerTimings, location_name: &str) {
        self.loading = false;
        self.results_visible = true;
        self.location_name = location_name.to_string();
        self.rows = timings.rows();
    }

    fn raise(&mut self, message: &str) {
        self.loading = false;
        self.alert = Some(message.to_string());
    }
}

impl Loadable for PrayerRegion {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

/// Trim both inputs and reject the query if either ends up blank.
///
/// # Errors
///
/// Returns [`DeenError::Validation`] when the city or the country is blank
pub fn validate_city_query(city: &str, country: &str) -> Result<(String, String)> {
    let (city, country) = (city.trim(), country.trim());
    if city.is_empty() || country.is_empty() {
        return Err(DeenError::Validation(
            "city and country are both required".to_string(),
        ));
    }
    Ok((city.to_string(), country.to_string()))
}

pub struct DatePrayer {
    api: ApiClient,
    calendar: Region<CalendarRegion>,
    prayer: Region<PrayerRegion>,
}

impl DatePrayer {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            calendar: Region::default(),
            prayer: Region::default(),
        }
    }

    pub fn calendar(&self) -> &Region<CalendarRegion> {
        &self.calendar
    }

    pub fn prayer(&self) -> &Region<PrayerRegion> {
        &self.prayer
    }

    /// Show today's date and look up its Hijri equivalent.
    pub async fn init_home(&self) {
        self.init_home_on(today()).await;
    }

    pub async fn init_home_on(&self, date: NaiveDate) {
        let gregorian = gregorian_long_date(date);
        debug!("Initializing calendar for {gregorian}");
        self.calendar.update(|calendar| calendar.gregorian = gregorian);
        self.fetch_hijri_date(date).await;
    }

    /// Convert `date` and paint `<day> <month> <year>`, or the placeholder on
    /// any failure.
    pub async fn fetch_hijri_date(&self, date: NaiveDate) {
        let ticket = self.calendar.issue();
        let hijri = match self.api.hijri_date(date).await {
            Ok(hijri) => hijri.formatted(),
            Err(e) => {
                warn!("Hijri conversion failed: {e}");
                HIJRI_UNAVAILABLE.to_string()
            }
        };
        self.calendar
            .update_if_current(ticket, |calendar| calendar.hijri = hijri);
    }

    /// Fetch timings for the position the browser reported.
    pub async fn prayer_times_by_location(&self, geolocation: Geolocation) {
        let ticket = self.prayer.issue();
        let coordinates = match geolocation {
            Geolocation::Unsupported => {
                info!("Geolocation unsupported by the client");
                self.prayer.update_if_current(ticket, |prayer| {
                    prayer.raise(ALERT_GEOLOCATION_UNSUPPORTED);
                });
                return;
            }
            Geolocation::Denied => {
                info!("Client could not provide a position");
                self.prayer.update_if_current(ticket, |prayer| {
                    prayer.raise(ALERT_GEOLOCATION_DENIED);
                });
                return;
            }
            Geolocation::Position(coordinates) => coordinates,
        };

        self.prayer.update_if_current(ticket, |prayer| prayer.alert = None);
        let _loading = self.prayer.begin_loading(ticket);

        match self.api.timings_by_coordinates(coordinates).await {
            Ok(timings) => {
                self.prayer.update_if_current(ticket, |prayer| {
                    prayer.display_prayer_times(&timings, YOUR_LOCATION);
                });
            }
            Err(e) => {
                error!(
                    "Timings lookup for {},{} failed: {e}",
                    coordinates.latitude, coordinates.longitude
                );
                self.prayer
                    .update_if_current(ticket, |prayer| prayer.raise(ALERT_FETCH_FAILED));
            }
        }
    }

    /// Fetch timings for a city typed by the user. Blank input never reaches
    /// the network.
    pub async fn prayer_times_by_city(&self, city: &str, country: &str) {
        let ticket = self.prayer.issue();
        let (city, country) = match validate_city_query(city, country) {
            Ok(query) => query,
            Err(e) => {
                debug!("Rejected city query: {e}");
                self.prayer
                    .update_if_current(ticket, |prayer| prayer.raise(ALERT_MISSING_CITY));
                return;
            }
        };

        self.prayer.update_if_current(ticket, |prayer| prayer.alert = None);
        let _loading = self.prayer.begin_loading(ticket);

        match self.api.timings_by_city(&city, &country).await {
            Ok(timings) => {
                let label = format!("{city}, {country}");
                self.prayer.update_if_current(ticket, |prayer| {
                    prayer.display_prayer_times(&timings, &label);
                });
            }
            Err(e) => {
                warn!("Timings lookup for {city}, {country} failed: {e}");
                self.prayer
                    .update_if_current(ticket, |prayer| prayer.raise(ALERT_CITY_NOT_FOUND));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_city_query_trims() {
        let (city, country) = validate_city_query("  Cairo ", "Egypt\t").unwrap();
        assert_eq!(city, "Cairo");
        assert_eq!(country, "Egypt");
    }

    #[test]
    fn test_validate_city_query_rejects_whitespace() {
        assert!(matches!(
            validate_city_query("   ", "Egypt"),
            Err(DeenError::Validation(_))
        ));
        assert!(validate_city_query("Cairo", "").is_err());
    }

    #[test]
    fn test_display_replaces_previous_table() {
        let mut region = PrayerRegion {
            loading: true,
            location_name: "Old".to_string(),
            ..PrayerRegion::default()
        };
        let timings = PrayerTimings {
            fajr: Some("05:00".to_string()),
            ..PrayerTimings::default()
        };

        region.display_prayer_times(&timings, "Cairo, Egypt");
        region.display_prayer_times(&timings, "Cairo, Egypt");

        assert!(!region.loading);
        assert!(region.results_visible);
        assert_eq!(region.location_name, "Cairo, Egypt");
        assert_eq!(region.rows.len(), 5);
    }

    #[tokio::test]
    async fn test_unsupported_geolocation_raises_alert_without_loader() {
        let api = ApiClient::new(&crate::config::Config::default()).unwrap();
        let component = DatePrayer::new(api);

        component
            .prayer_times_by_location(Geolocation::Unsupported)
            .await;

        let prayer = component.prayer().snapshot();
        assert!(!prayer.loading);
        assert!(!prayer.results_visible);
        assert_eq!(prayer.alert.as_deref(), Some(ALERT_GEOLOCATION_UNSUPPORTED));
    }

    #[tokio::test]
    async fn test_blank_city_raises_alert() {
        let api = ApiClient::new(&crate::config::Config::default()).unwrap();
        let component = DatePrayer::new(api);

        component.prayer_times_by_city("Cairo", "  ").await;

        let prayer = component.prayer().snapshot();
        assert!(!prayer.loading);
        assert_eq!(prayer.alert.as_deref(), Some(ALERT_MISSING_CITY));
    }
}
