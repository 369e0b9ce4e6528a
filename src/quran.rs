use crate::api::{ApiClient, SurahEdition};
use crate::models::Verse;
use crate::region::{Loadable, Region};
use serde::Serialize;
use tracing::{debug, error, info, warn};

pub const SURAH_LOAD_FAILED: &str = "Failed to load Surah. Please try again.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurahOption {
    pub value: u16,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuranRegion {
    /// Selector entries, in the order the service listed them
    pub options: Vec<SurahOption>,
    pub selected: Option<u16>,
    pub loading: bool,
    pub content_visible: bool,
    pub title: String,
    pub verses: Vec<Verse>,
    pub error: Option<String>,
}

impl QuranRegion {
    /// Whether the option `value` is the current selection
    pub fn is_selected(&self, value: &u16) -> bool {
        self.selected == Some(*value)
    }
}

impl Loadable for QuranRegion {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

/// Pair each Arabic verse with the translation at the same position.
///
/// A translation shorter than the Arabic text leaves the trailing verses
/// with an empty translation.
pub fn pair_verses(arabic: &SurahEdition, translation: &SurahEdition) -> Vec<Verse> {
    if arabic.ayahs.len() != translation.ayahs.len() {
        warn!(
            "Edition length mismatch: {} Arabic verses, {} translated",
            arabic.ayahs.len(),
            translation.ayahs.len()
        );
    }

    arabic
        .ayahs
        .iter()
        .enumerate()
        .map(|(index, ayah)| Verse {
            number_in_surah: ayah.number_in_surah,
            arabic: ayah.text.clone(),
            translation: translation
                .ayahs
                .get(index)
                .map(|t| t.text.clone())
                .unwrap_or_default(),
        })
        .collect()
}

/// Surah selector and reader. Absent regions turn every operation into a no-op.
pub struct QuranReader {
    api: ApiClient,
    region: Option<Region<QuranRegion>>,
}

impl QuranReader {
    pub fn new(api: ApiClient, enabled: bool) -> Self {
        Self {
            api,
            region: enabled.then(Region::default),
        }
    }

    pub fn region(&self) -> Option<&Region<QuranRegion>> {
        self.region.as_ref()
    }

    /// Fill the selector with every surah. A failed fetch leaves it empty.
    pub async fn init_quran(&self) {
        let Some(region) = &self.region else {
            return;
        };

        match self.api.surah_list().await {
            Ok(surahs) => {
                let options: Vec<SurahOption> = surahs
                    .iter()
                    .map(|surah| SurahOption {
                        value: surah.number,
                        label: surah.option_label(),
                    })
                    .collect();
                info!("Loaded {} surahs into the selector", options.len());
                region.update(|quran| quran.options = options);
            }
            Err(e) => error!("Surah list fetch failed: {e}"),
        }
    }

    /// Fetch the Arabic text and the translation of one surah concurrently
    /// and render them as paired verse blocks. Both must succeed.
    pub async fn load_surah(&self, surah_number: Option<u16>) {
        let Some(region) = &self.region else {
            return;
        };
        let Some(number) = surah_number.filter(|&n| n != 0) else {
            debug!("No surah selected");
            return;
        };

        let ticket = region.issue();
        region.update_if_current(ticket, |quran| {
            quran.selected = Some(number);
            quran.content_visible = false;
            quran.error = None;
        });
        let _loading = region.begin_loading(ticket);

        let joined = tokio::try_join!(
            self.api.surah_arabic(number),
            self.api.surah_translation(number)
        );

        match joined {
            Ok((arabic, translation)) => {
                let verses = pair_verses(&arabic, &translation);
                region.update_if_current(ticket, |quran| {
                    quran.title = arabic.english_name;
                    quran.verses = verses;
                    quran.loading = false;
                    quran.content_visible = true;
                });
            }
            Err(e) => {
                error!(
                    "Loading surah {number} ({}) failed: {e}",
                    self.api.translation_edition()
                );
                region.update_if_current(ticket, |quran| {
                    quran.title.clear();
                    quran.verses.clear();
                    quran.loading = false;
                    quran.error = Some(SURAH_LOAD_FAILED.to_string());
                });
            }
        }
    }
}
