use crate::api::ApiClient;
use crate::models::Hadith;
use crate::region::Region;
use serde::Serialize;
use tracing::{debug, warn};

pub const HADITH_LOADING: &str = "Loading...";
pub const HADITH_LOAD_FAILED: &str = "Failed to load Hadith. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "hadith", rename_all = "lowercase")]
pub enum HadithRegion {
    #[default]
    Empty,
    Loading,
    Loaded(Hadith),
    Failed,
}

impl HadithRegion {
    /// Plain text of what the container shows
    pub fn text(&self) -> String {
        match self {
            HadithRegion::Empty => String::new(),
            HadithRegion::Loading => HADITH_LOADING.to_string(),
            HadithRegion::Loaded(hadith) => format!(
                "Narrator: {}\n\"{}\"\nReference: {}",
                hadith.narrator, hadith.text, hadith.reference
            ),
            HadithRegion::Failed => HADITH_LOAD_FAILED.to_string(),
        }
    }
}

pub struct HadithFeed {
    api: ApiClient,
    region: Option<Region<HadithRegion>>,
}

impl HadithFeed {
    pub fn new(api: ApiClient, enabled: bool) -> Self {
        Self {
            api,
            region: enabled.then(Region::default),
        }
    }

    pub fn region(&self) -> Option<&Region<HadithRegion>> {
        self.region.as_ref()
    }

    /// Replace the container with a freshly drawn hadith.
    pub async fn load_random_hadith(&self) {
        let Some(region) = &self.region else {
            return;
        };

        let ticket = region.issue();
        region.update_if_current(ticket, |content| *content = HadithRegion::Loading);

        let next = match self.api.random_hadith().await {
            Ok(hadith) => {
                debug!("Drew hadith {}", hadith.reference);
                HadithRegion::Loaded(hadith)
            }
            Err(e) => {
                warn!("Random hadith fetch failed: {e}");
                HadithRegion::Failed
            }
        };
        region.update_if_current(ticket, |content| *content = next);
    }
}
