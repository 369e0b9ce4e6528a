//! View models rendered by the page regions.
//!
//! These are transient: each one is built from a single remote response (or
//! from constants, for the duas) and replaced wholesale by the next one.

use serde::{Deserialize, Serialize};

/// Placeholder shown in a timings cell when the service omitted that prayer
pub const MISSING_TIME: &str = "N/A";

/// The five daily prayers, in the order the timings table lists them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

/// Timings for one day at one place, as returned by the timings endpoints.
///
/// Keys the service did not send stay `None` instead of turning into an
/// empty cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrayerTimings {
    #[serde(rename = "Fajr", default)]
    pub fajr: Option<String>,
    #[serde(rename = "Dhuhr", default)]
    pub dhuhr: Option<String>,
    #[serde(rename = "Asr", default)]
    pub asr: Option<String>,
    #[serde(rename = "Maghrib", default)]
    pub maghrib: Option<String>,
    #[serde(rename = "Isha", default)]
    pub isha: Option<String>,
}

impl PrayerTimings {
    pub fn get(&self, prayer: Prayer) -> Option<&str> {
        match prayer {
            Prayer::Fajr => self.fajr.as_deref(),
            Prayer::Dhuhr => self.dhuhr.as_deref(),
            Prayer::Asr => self.asr.as_deref(),
            Prayer::Maghrib => self.maghrib.as_deref(),
            Prayer::Isha => self.isha.as_deref(),
        }
    }

    /// One row per prayer in fixed order, missing values shown as [`MISSING_TIME`]
    pub fn rows(&self) -> Vec<PrayerRow> {
        Prayer::ALL
            .iter()
            .map(|&prayer| PrayerRow {
                name: prayer.display_name().to_string(),
                time: self.get(prayer).unwrap_or(MISSING_TIME).to_string(),
            })
            .collect()
    }
}

/// A rendered row of the timings table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrayerRow {
    pub name: String,
    pub time: String,
}

/// A position reported by the browser
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Outcome of asking the browser for its position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geolocation {
    /// The runtime has no geolocation support at all
    Unsupported,
    /// The user refused, or the lookup failed
    Denied,
    Position(Coordinates),
}

/// Hijri equivalent of a Gregorian day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HijriDate {
    pub day: u32,
    pub month: String,
    pub year: u32,
}

impl HijriDate {
    pub fn formatted(&self) -> String {
        format!("{} {} {}", self.day, self.month, self.year)
    }
}

/// One entry of the surah selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surah {
    pub number: u16,
    #[serde(rename = "englishName")]
    pub english_name: String,
    /// Native (Arabic) name
    pub name: String,
}

impl Surah {
    pub fn option_label(&self) -> String {
        format!("{}. {} ({})", self.number, self.english_name, self.name)
    }
}

/// A verse block: the Arabic text with its in-surah number and the
/// translation found at the same position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verse {
    pub number_in_surah: u32,
    pub arabic: String,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hadith {
    pub narrator: String,
    pub text: String,
    pub reference: String,
}

/// A supplication card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dua {
    pub title: &'static str,
    pub arabic: &'static str,
    pub translation: &'static str,
}
