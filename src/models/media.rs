use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// Projection of an AniList media record.
///
/// Every field is optional: AniList returns `null` for unknown values and
/// omits nothing we did not ask for, but a missing key still deserializes
/// to `None` instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(name = "Media")]
#[serde(rename_all = "camelCase", default)]
pub struct MediaRecord {
    pub episodes: Option<i32>,
    pub season_int: Option<i32>,
    pub cover_image: Option<CoverImage>,
    pub title: Option<MediaTitle>,
    pub genres: Option<Vec<Option<String>>>,
    pub start_date: Option<FuzzyDate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(name = "CoverImage")]
#[serde(default)]
pub struct CoverImage {
    pub large: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(name = "Title")]
#[serde(default)]
pub struct MediaTitle {
    pub english: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(name = "Date")]
#[serde(default)]
pub struct FuzzyDate {
    pub year: Option<i32>,
}
