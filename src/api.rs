//! Client for the third-party JSON services.
//!
//! Every endpoint wraps its payload in a `{ "data": ... }` envelope. Bodies are
//! read as text and decoded separately so a transport failure and a malformed
//! response surface as different [`DeenError`] variants.

use crate::config::Config;
use crate::error::{DeenError, Result};
use crate::models::{Coordinates, Hadith, HijriDate, PrayerTimings, Surah};
use crate::utils::hijri_path_segment;
use chrono::NaiveDate;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use tracing::debug;
use url::Url;

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct HijriConversion {
    hijri: HijriPayload,
}

#[derive(Deserialize)]
struct HijriPayload {
    #[serde(deserialize_with = "number_from_any")]
    day: u32,
    month: HijriMonth,
    #[serde(deserialize_with = "number_from_any")]
    year: u32,
}

#[derive(Deserialize)]
struct HijriMonth {
    en: String,
}

#[derive(Deserialize)]
struct TimingsPayload {
    timings: PrayerTimings,
}

/// One edition of a surah: the Arabic text or a translation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SurahEdition {
    #[serde(rename = "englishName", default)]
    pub english_name: String,
    pub ayahs: Vec<Ayah>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ayah {
    pub text: String,
    #[serde(rename = "numberInSurah", default)]
    pub number_in_surah: u32,
}

#[derive(Deserialize)]
struct HadithPayload {
    header: String,
    hadith_english: String,
    #[serde(deserialize_with = "text_from_any")]
    refno: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u64),
    Text(String),
}

fn number_from_any<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => u32::try_from(n).map_err(D::Error::custom),
        NumberOrText::Text(s) => s.trim().parse().map_err(D::Error::custom),
    }
}

fn text_from_any<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => n.to_string(),
        NumberOrText::Text(s) => s,
    })
}

/// Typed access to the prayer-time, Quran and hadith services
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    aladhan: Url,
    alquran: Url,
    hadith: Url,
    calculation_method: u8,
    translation_edition: String,
    hadith_collection: String,
}

impl ApiClient {
    /// Build a client for the services named in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the configured base URLs cannot be parsed
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Same as [`ApiClient::new`] but reusing an existing `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the configured base URLs cannot be parsed
    pub fn with_http_client(http: reqwest::Client, config: &Config) -> Result<Self> {
        Ok(Self {
            http,
            aladhan: base_url(&config.endpoints.aladhan)?,
            alquran: base_url(&config.endpoints.alquran)?,
            hadith: base_url(&config.endpoints.hadith)?,
            calculation_method: config.calculation_method,
            translation_edition: config.translation_edition.clone(),
            hadith_collection: config.hadith_collection.clone(),
        })
    }

    pub fn translation_edition(&self) -> &str {
        &self.translation_edition
    }

    /// Convert a Gregorian day to its Hijri equivalent.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected response body
    pub async fn hijri_date(&self, date: NaiveDate) -> Result<HijriDate> {
        let url = self.aladhan.join(&format!("gToH/{}", hijri_path_segment(date)))?;
        let conversion: HijriConversion = self.get_json(url).await?;
        let hijri = conversion.hijri;
        Ok(HijriDate {
            day: hijri.day,
            month: hijri.month.en,
            year: hijri.year,
        })
    }

    /// Today's timings at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected response body
    pub async fn timings_by_coordinates(&self, coordinates: Coordinates) -> Result<PrayerTimings> {
        let mut url = self.aladhan.join("timings")?;
        url.query_pairs_mut()
            .append_pair("latitude", &coordinates.latitude.to_string())
            .append_pair("longitude", &coordinates.longitude.to_string())
            .append_pair("method", &self.calculation_method.to_string());
        let payload: TimingsPayload = self.get_json(url).await?;
        Ok(payload.timings)
    }

    /// Today's timings for a named city.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected response body,
    /// which is what the service answers for a city it does not know
    pub async fn timings_by_city(&self, city: &str, country: &str) -> Result<PrayerTimings> {
        let mut url = self.aladhan.join("timingsByCity")?;
        url.query_pairs_mut()
            .append_pair("city", city)
            .append_pair("country", country)
            .append_pair("method", &self.calculation_method.to_string());
        let payload: TimingsPayload = self.get_json(url).await?;
        Ok(payload.timings)
    }

    /// All surahs in the order the service lists them.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected response body
    pub async fn surah_list(&self) -> Result<Vec<Surah>> {
        let url = self.alquran.join("surah")?;
        self.get_json(url).await
    }

    /// The Arabic text of one surah.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected response body
    pub async fn surah_arabic(&self, number: u16) -> Result<SurahEdition> {
        let url = self.alquran.join(&format!("surah/{number}"))?;
        self.get_json(url).await
    }

    /// The configured translation edition of one surah.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected response body
    pub async fn surah_translation(&self, number: u16) -> Result<SurahEdition> {
        let url = self
            .alquran
            .join(&format!("surah/{number}/{}", self.translation_edition))?;
        self.get_json(url).await
    }

    /// A random hadith from the configured collection. Every call is independent.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected response body
    pub async fn random_hadith(&self) -> Result<Hadith> {
        let url = self.hadith.join(&format!("{}/", self.hadith_collection))?;
        let payload: HadithPayload = self.get_json(url).await?;
        Ok(Hadith {
            narrator: payload.header,
            text: payload.hadith_english,
            reference: payload.refno,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {url}");
        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }
}

/// Parse a base URL so that `join` appends to its path instead of replacing
/// the last segment.
fn base_url(raw: &str) -> Result<Url> {
    let url = if raw.ends_with('/') {
        Url::parse(raw)?
    } else {
        Url::parse(&format!("{raw}/"))?
    };
    if url.cannot_be_a_base() {
        return Err(DeenError::Generic(format!("Not a base URL: {raw}")));
    }
    Ok(url)
}
