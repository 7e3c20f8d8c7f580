use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One student organization as scraped from the directory.
///
/// Every field is optional on input: records come from an external API and are
/// persisted as-is, so a missing or oddly-typed field becomes `None` instead of
/// failing the whole corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawClubRecord")]
pub struct ClubRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub summary: Option<String>,
    /// Long-form description. Raw HTML, never stripped.
    #[serde(rename = "description_html")]
    pub description_html: Option<String>,

    // Carried through untouched; not used for matching.
    pub categories: Vec<Value>,
    pub status: Option<Value>,
    pub visibility: Option<Value>,
    pub email: Option<Value>,
    pub website_key: Option<Value>,
    pub profile_picture: Option<Value>,
    pub social_media: Map<String, Value>,
    pub start_date: Option<Value>,
    pub modified_on: Option<Value>,
    pub primary_contact: Option<Value>,
}

/// Input shape. The description may arrive under the scraper's key, the
/// camelCase key or the directory's raw `description`; each is read on its
/// own so a record carrying several of them still loads.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawClubRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    short_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    summary: Option<String>,
    #[serde(default, rename = "description_html", deserialize_with = "lenient_string")]
    description_html: Option<String>,
    #[serde(default, rename = "descriptionHtml", deserialize_with = "lenient_string")]
    description_html_camel: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient_array")]
    categories: Vec<Value>,
    #[serde(default)]
    status: Option<Value>,
    #[serde(default)]
    visibility: Option<Value>,
    #[serde(default)]
    email: Option<Value>,
    #[serde(default)]
    website_key: Option<Value>,
    #[serde(default)]
    profile_picture: Option<Value>,
    #[serde(default, deserialize_with = "lenient_object")]
    social_media: Map<String, Value>,
    #[serde(default)]
    start_date: Option<Value>,
    #[serde(default)]
    modified_on: Option<Value>,
    #[serde(default)]
    primary_contact: Option<Value>,
}

impl From<RawClubRecord> for ClubRecord {
    fn from(raw: RawClubRecord) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            short_name: raw.short_name,
            summary: raw.summary,
            // Cleaned key wins over the directory's raw field.
            description_html: raw
                .description_html
                .or(raw.description_html_camel)
                .or(raw.description),
            categories: raw.categories,
            status: raw.status,
            visibility: raw.visibility,
            email: raw.email,
            website_key: raw.website_key,
            profile_picture: raw.profile_picture,
            social_media: raw.social_media,
            start_date: raw.start_date,
            modified_on: raw.modified_on,
            primary_contact: raw.primary_contact,
        }
    }
}

impl ClubRecord {
    /// Trims the display name and fills a missing id from the corpus key.
    pub fn normalized(mut self, key: &str) -> Self {
        if let Some(name) = self.name.as_mut() {
            let trimmed = name.trim();
            if trimmed.len() != name.len() {
                *name = trimmed.to_string();
            }
        }
        if self.id.as_deref().map_or(true, str::is_empty) {
            self.id = Some(key.to_string());
        }
        self
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        // Directory ids are sometimes numeric.
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_array<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => Vec::new(),
    })
}

fn lenient_object<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map,
        _ => Map::new(),
    })
}
