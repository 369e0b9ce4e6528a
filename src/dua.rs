use crate::models::Dua;
use crate::region::Region;
use serde::Serialize;

/// The supplications shown on the page, in display order
pub const DUAS: [Dua; 3] = [
    Dua {
        title: "Upon Waking Up",
        arabic: "الْحَمْدُ لِلَّهِ الَّذِي أَحْيَانَا بَعْدَ مَا أَمَاتَنَا وَإِلَيْهِ النُّشُورُ",
        translation: "All praise is due to Allah who gave us life after He had caused us to die, and unto Him is the resurrection.",
    },
    Dua {
        title: "Before Eating",
        arabic: "بِسْمِ اللَّهِ",
        translation: "In the name of Allah.",
    },
    Dua {
        title: "Breaking Fast",
        arabic: "ذَهَبَ الظَّمَأُ وَابْتَلَّتِ الْعُرُوقُ وَثَبَتَ الأَجْرُ إِنْ شَاءَ اللَّهُ",
        translation: "The thirst is gone, the veins are moistened, and the reward is confirmed, if Allah wills.",
    },
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DuaRegion {
    pub cards: Vec<Dua>,
}

pub struct DuaBoard {
    region: Option<Region<DuaRegion>>,
}

impl DuaBoard {
    pub fn new(enabled: bool) -> Self {
        Self {
            region: enabled.then(Region::default),
        }
    }

    pub fn region(&self) -> Option<&Region<DuaRegion>> {
        self.region.as_ref()
    }

    /// Render the fixed cards, replacing any previous rendering.
    pub fn init_dua(&self) {
        if let Some(region) = &self.region {
            region.update(|duas| duas.cards = DUAS.to_vec());
        }
    }
}
