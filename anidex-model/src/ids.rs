/// MyAnimeList identifier of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MalId(pub u32);

const MAL_ANIME_BASE: &str = "https://myanimelist.net/anime";

impl MalId {
    pub fn new(id: u32) -> Self {
        MalId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Public MyAnimeList page for this entry
    pub fn page_url(&self) -> String {
        format!("{}/{}", MAL_ANIME_BASE, self.0)
    }
}

impl std::fmt::Display for MalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MalId {
    fn from(id: u32) -> Self {
        MalId(id)
    }
}
