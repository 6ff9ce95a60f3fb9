use serde::{Deserialize, Serialize};

// ── GraphQL response wrappers ────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct MediaResponse {
    #[serde(rename = "Media")]
    pub media: AniListMedia,
}

#[derive(Debug, Deserialize)]
pub struct PageResponse {
    #[serde(rename = "Page")]
    pub page: PageData,
}

#[derive(Debug, Deserialize)]
pub struct PageData {
    pub media: Vec<AniListMedia>,
}

#[derive(Debug, Deserialize)]
pub struct CharacterResponse {
    #[serde(rename = "Character")]
    pub character: AniListCharacter,
}

// ── Raw media / character shapes ─────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AniListMedia {
    pub id: u64,
    pub title: Option<AniListTitle>,
    pub genres: Option<Vec<String>>,
    pub episodes: Option<u32>,
    #[serde(rename = "averageScore")]
    pub average_score: Option<u32>,
    #[serde(rename = "startDate")]
    pub start_date: Option<FuzzyDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<FuzzyDate>,
    pub description: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<CoverImage>,
    pub characters: Option<CharacterConnection>,
}

#[derive(Debug, Deserialize)]
pub struct AniListTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CoverImage {
    pub large: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CharacterConnection {
    pub edges: Vec<CharacterEdge>,
}

#[derive(Debug, Deserialize)]
pub struct CharacterEdge {
    pub node: CharacterNode,
}

#[derive(Debug, Deserialize)]
pub struct CharacterNode {
    pub name: CharacterName,
}

#[derive(Debug, Deserialize)]
pub struct CharacterName {
    pub full: String,
}

#[derive(Debug, Deserialize)]
pub struct AniListCharacter {
    pub id: Option<u64>,
    pub name: CharacterName,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<FuzzyDate>,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub image: Option<CharacterImage>,
}

#[derive(Debug, Deserialize)]
pub struct CharacterImage {
    pub large: Option<String>,
}

/// AniList fuzzy date: any of the three parts may be null.
#[derive(Debug, Deserialize)]
pub struct FuzzyDate {
    pub year: Option<u32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

// ── Flat records ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

/// Id-and-title record returned by the summary lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaSummary {
    pub id: u64,
    pub title: MediaTitle,
}

/// Full record returned by the detailed lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaDetail {
    pub id: u64,
    pub title: MediaTitle,
    pub genres: Vec<String>,
    pub episodes: Option<u32>,
    pub average_score: Option<u32>,
    pub start_date: String,
    pub end_date: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub cover_image: Option<String>,
    pub characters: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub birthday: String,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub profile_image: Option<String>,
}

// ── Conversions ──────────────────────────────────────────────────

impl FuzzyDate {
    /// `"{year}-{month}-{day}"` with no zero padding. Null parts render as a
    /// literal `null`, matching what the service sent; callers that want a
    /// placeholder for a wholly absent date go through [`format_fuzzy_date`].
    pub fn to_display(&self) -> String {
        fn part(v: Option<u32>) -> String {
            v.map_or_else(|| "null".to_string(), |n| n.to_string())
        }
        format!(
            "{}-{}-{}",
            part(self.year),
            part(self.month),
            part(self.day)
        )
    }
}

/// Display string for an optional fuzzy date: `"N/A"` when absent.
pub fn format_fuzzy_date(date: Option<&FuzzyDate>) -> String {
    date.map_or_else(|| "N/A".to_string(), FuzzyDate::to_display)
}

impl AniListTitle {
    fn into_media_title(self) -> MediaTitle {
        MediaTitle {
            romaji: self.romaji,
            english: self.english,
            native: self.native,
        }
    }
}

impl AniListMedia {
    pub fn into_summary(self) -> MediaSummary {
        MediaSummary {
            id: self.id,
            title: self
                .title
                .map(AniListTitle::into_media_title)
                .unwrap_or_default(),
        }
    }

    pub fn into_detail(self) -> MediaDetail {
        let characters = self
            .characters
            .map(|c| c.edges.into_iter().map(|e| e.node.name.full).collect())
            .unwrap_or_default();

        MediaDetail {
            id: self.id,
            start_date: format_fuzzy_date(self.start_date.as_ref()),
            end_date: format_fuzzy_date(self.end_date.as_ref()),
            title: self
                .title
                .map(AniListTitle::into_media_title)
                .unwrap_or_default(),
            genres: self.genres.unwrap_or_default(),
            episodes: self.episodes,
            average_score: self.average_score,
            description: self.description,
            status: self.status,
            cover_image: self.cover_image.and_then(|c| c.large),
            characters,
        }
    }
}

impl AniListCharacter {
    pub fn into_record(self) -> CharacterRecord {
        CharacterRecord {
            birthday: format_fuzzy_date(self.date_of_birth.as_ref()),
            name: self.name.full,
            gender: self.gender,
            description: self.description,
            profile_image: self.image.and_then(|i| i.large),
        }
    }
}
