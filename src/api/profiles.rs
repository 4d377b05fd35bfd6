// =============================================================================
// Connect-U Web - Profiles API
// =============================================================================
// Table of Contents:
// 1. Types
// 2. Feed Filters
// 3. Profiles API Functions
// =============================================================================

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use super::{decode, ApiClient, ApiError, HttpTransport};

/// Next batch of candidate profiles for the feed.
pub const NEXT_PROFILES_ENDPOINT: &str = "/api/v1/profiles/next/";

/// The caller's own profile.
pub const MY_PROFILE_ENDPOINT: &str = "/api/v1/profiles/me/";

/// Generated avatar service used when a profile has no photo.
const PLACEHOLDER_AVATAR_URL: &str = "https://ui-avatars.com/api/";

// -----------------------------------------------------------------------------
// 1. Types
// -----------------------------------------------------------------------------

/// Decode a display-only field, falling back to its default when the backend
/// sends a shape this client does not understand.
fn lenient<'de, D, V>(deserializer: D) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
    V: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(V::deserialize(value).unwrap_or_else(|e| {
        log::debug!("Ignoring unreadable profile field: {}", e);
        V::default()
    }))
}

/// Parse an API timestamp. Naive timestamps are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| v.as_str()).and_then(parse_timestamp))
}

/// Account fields nested in a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: u64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_main: bool,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    pub id: u64,
    pub name: String,
}

/// An interest as listed on a profile: a bare primary key or the full object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InterestRef {
    Named(Interest),
    Id(u64),
}

impl InterestRef {
    /// Display name, when the backend expanded it.
    pub fn name(&self) -> Option<&str> {
        match self {
            InterestRef::Named(interest) => Some(interest.name.as_str()),
            InterestRef::Id(_) => None,
        }
    }
}

/// Relationship status as the backend spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    Searching,
    InRelationship,
    NotSpecified,
}

impl ProfileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileStatus::Searching => "searching",
            ProfileStatus::InRelationship => "in_relationship",
            ProfileStatus::NotSpecified => "not_specified",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileStatus::Searching => "Looking",
            ProfileStatus::InRelationship => "In a relationship",
            ProfileStatus::NotSpecified => "Not specified",
        }
    }
}

/// A user profile as served by the API. Unknown fields are ignored, and
/// display fields that fail to decode fall back to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<UserSummary>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<ProfileStatus>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub interests: Vec<InterestRef>,
    #[serde(default, deserialize_with = "lenient")]
    pub main_photo: Option<Photo>,
}

impl Profile {
    /// Id reactions are addressed to: the owning user, else the profile.
    pub fn user_id(&self) -> Option<u64> {
        self.user.as_ref().map(|user| user.id).or(self.id)
    }

    /// URL of the main photo, if one is set.
    pub fn photo_url(&self) -> Option<&str> {
        self.main_photo
            .as_ref()
            .and_then(|photo| photo.image.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Main photo, or a generated placeholder keyed by the full name.
    pub fn avatar_url(&self) -> String {
        match self.photo_url() {
            Some(url) => url.to_string(),
            None => placeholder_avatar_url(&self.full_name),
        }
    }
}

/// Generated initials avatar for `name`.
pub fn placeholder_avatar_url(name: &str) -> String {
    format!(
        "{}?name={}&background=4A96FF&color=fff&font-size=0.5",
        PLACEHOLDER_AVATAR_URL,
        urlencoding::encode(name)
    )
}

/// Feed response body: DRF returns either a bare list or a page envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProfileFeed {
    List(Vec<Profile>),
    Page {
        #[serde(default)]
        count: Option<u64>,
        #[serde(default)]
        next: Option<String>,
        results: Vec<Profile>,
    },
}

impl ProfileFeed {
    pub fn into_profiles(self) -> Vec<Profile> {
        match self {
            ProfileFeed::List(profiles) => profiles,
            ProfileFeed::Page { results, .. } => results,
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Feed Filters
// -----------------------------------------------------------------------------

/// Query parameters for the feed, kept in insertion order.
///
/// Absent and empty values are dropped when the query string is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFilters {
    entries: Vec<(String, Option<String>)>,
}

impl ProfileFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any earlier value in place.
    pub fn set(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> &mut Self {
        let key = key.into();
        let value = value.map(Into::into);

        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.set(key, value);
        self
    }

    pub fn min_age(self, age: Option<u32>) -> Self {
        self.with("min_age", age.map(|a| a.to_string()))
    }

    pub fn max_age(self, age: Option<u32>) -> Self {
        self.with("max_age", age.map(|a| a.to_string()))
    }

    pub fn gender(self, gender: Option<&str>) -> Self {
        self.with("gender", gender)
    }

    pub fn city(self, city: Option<&str>) -> Self {
        self.with("city", city)
    }

    pub fn status(self, status: Option<ProfileStatus>) -> Self {
        self.with("status", status.map(|s| s.as_str()))
    }

    /// Pairs that survive cleaning, in insertion order.
    pub fn cleaned(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(key, value)| match value.as_deref() {
            Some(v) if !v.is_empty() => Some((key.as_str(), v)),
            _ => None,
        })
    }

    /// URL-encoded query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.cleaned()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

// -----------------------------------------------------------------------------
// 3. Profiles API Functions
// -----------------------------------------------------------------------------

impl<T: HttpTransport> ApiClient<T> {
    /// Load the next profiles for the feed.
    ///
    /// A 401 logs the session out before `SessionExpired` is returned.
    pub async fn get_profiles(&self, filters: &ProfileFilters) -> Result<Vec<Profile>, ApiError> {
        let endpoint = format!("{}?{}", NEXT_PROFILES_ENDPOINT, filters.to_query_string());
        let response = self.get(&endpoint, true).await?;

        match response.status {
            200..=299 => decode::<ProfileFeed>(&response).map(ProfileFeed::into_profiles),
            401 => {
                self.session().logout();
                Err(ApiError::SessionExpired)
            }
            status => Err(ApiError::fetch(status, "Failed to load profiles")),
        }
    }

    /// Load the signed-in user's own profile.
    pub async fn get_my_profile(&self) -> Result<Profile, ApiError> {
        let response = self.get(MY_PROFILE_ENDPOINT, true).await?;

        if !response.is_success() {
            return Err(ApiError::fetch(response.status, "Failed to load profile"));
        }

        decode(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use crate::session::TokenStorage;
    use crate::testing::Harness;
    use futures::executor::block_on;

    const ANNA: &str = r#"{
        "id": 7,
        "user": {"id": 42, "username": "anna@example.com", "email": "anna@example.com"},
        "full_name": "Anna Smith",
        "city": "Kazan",
        "status": "searching",
        "interests": [{"id": 1, "name": "Hiking"}],
        "main_photo": {"image": "https://cdn.example.com/anna.jpg", "is_main": true},
        "avatar": "avatars/default.png"
    }"#;

    #[test]
    fn test_filters_drop_absent_and_empty_values() {
        let filters = ProfileFilters::new()
            .city(Some("Saint Petersburg"))
            .with("gender", None::<String>)
            .with("status", Some(""))
            .min_age(Some(25))
            .with("interest", Some("rock & roll"));

        assert_eq!(
            filters.to_query_string(),
            "city=Saint%20Petersburg&min_age=25&interest=rock%20%26%20roll"
        );
    }

    #[test]
    fn test_filters_replace_in_place() {
        let filters = ProfileFilters::new()
            .city(Some("Kazan"))
            .max_age(Some(40))
            .city(Some("Moscow"));

        let pairs: Vec<_> = filters.cleaned().collect();
        assert_eq!(pairs, vec![("city", "Moscow"), ("max_age", "40")]);
    }

    #[test]
    fn test_get_profiles_sends_cleaned_query() {
        let harness = Harness::signed_in();
        harness.transport.respond(200, "[]");

        let filters = ProfileFilters::new()
            .gender(Some("F"))
            .city(None)
            .status(Some(ProfileStatus::Searching));
        block_on(harness.client.get_profiles(&filters)).unwrap();

        let request = &harness.transport.requests()[0];
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "/api/v1/profiles/next/?gender=F&status=searching");
        assert_eq!(request.header("Authorization"), Some("Bearer access-token"));
    }

    #[test]
    fn test_get_profiles_with_no_filters_keeps_separator() {
        let harness = Harness::signed_in();
        harness.transport.respond(200, "[]");

        block_on(harness.client.get_profiles(&ProfileFilters::default())).unwrap();

        assert_eq!(harness.transport.requests()[0].url, "/api/v1/profiles/next/?");
    }

    #[test]
    fn test_get_profiles_decodes_list_and_page() {
        let harness = Harness::signed_in();
        harness.transport.respond(200, &format!("[{}]", ANNA));
        harness.transport.respond(
            200,
            &format!(r#"{{"count": 1, "next": null, "previous": null, "results": [{}]}}"#, ANNA),
        );

        let listed = block_on(harness.client.get_profiles(&ProfileFilters::new())).unwrap();
        let paged = block_on(harness.client.get_profiles(&ProfileFilters::new())).unwrap();

        assert_eq!(listed, paged);
        assert_eq!(listed[0].full_name, "Anna Smith");
        assert_eq!(listed[0].user_id(), Some(42));
        assert_eq!(listed[0].status, Some(ProfileStatus::Searching));
    }

    #[test]
    fn test_get_profiles_401_logs_out() {
        let harness = Harness::signed_in();
        harness.transport.respond(401, r#"{"detail":"Token expired"}"#);

        let err = block_on(harness.client.get_profiles(&ProfileFilters::new())).unwrap_err();

        assert_eq!(err, ApiError::SessionExpired);
        assert!(harness.storage.get("access").is_none());
        assert!(harness.storage.get("refresh").is_none());
        assert_eq!(harness.navigator.visited(), vec!["/login".to_string()]);
    }

    #[test]
    fn test_get_profiles_other_failure_keeps_session() {
        let harness = Harness::signed_in();
        harness.transport.respond(500, "boom");

        let err = block_on(harness.client.get_profiles(&ProfileFilters::new())).unwrap_err();

        assert_eq!(
            err,
            ApiError::Fetch {
                status: 500,
                message: "Failed to load profiles".to_string()
            }
        );
        assert!(harness.client.session().is_authenticated());
        assert!(harness.navigator.visited().is_empty());
    }

    #[test]
    fn test_get_my_profile() {
        let harness = Harness::signed_in();
        harness.transport.respond(200, ANNA);
        harness.transport.respond(403, "");

        let profile = block_on(harness.client.get_my_profile()).unwrap();
        assert_eq!(profile.photo_url(), Some("https://cdn.example.com/anna.jpg"));
        assert_eq!(harness.transport.requests()[0].url, "/api/v1/profiles/me/");

        let err = block_on(harness.client.get_my_profile()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to load profile");
    }

    #[test]
    fn test_avatar_falls_back_to_placeholder() {
        let profile: Profile =
            serde_json::from_str(r#"{"full_name": "Иван Петров", "main_photo": null}"#).unwrap();

        let url = profile.avatar_url();
        assert!(url.starts_with("https://ui-avatars.com/api/?name="));
        assert!(url.contains(&*urlencoding::encode("Иван Петров")));
        assert!(url.ends_with("&background=4A96FF&color=fff&font-size=0.5"));
    }

    #[test]
    fn test_interests_accept_ids_and_objects() {
        let profile: Profile = serde_json::from_str(
            r#"{"full_name": "Anna", "interests": [1, {"id": 3, "name": "Chess"}]}"#,
        )
        .unwrap();

        assert_eq!(
            profile.interests,
            vec![
                InterestRef::Id(1),
                InterestRef::Named(Interest {
                    id: 3,
                    name: "Chess".to_string()
                }),
            ]
        );
        assert_eq!(profile.interests[0].name(), None);
        assert_eq!(profile.interests[1].name(), Some("Chess"));
    }

    #[test]
    fn test_unreadable_display_fields_fall_back() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "full_name": "Anna",
                "status": "complicated",
                "age": "twenty",
                "interests": "hiking",
                "main_photo": {"image": "/media/a.jpg", "uploaded_at": "yesterday"}
            }"#,
        )
        .unwrap();

        assert_eq!(profile.status, None);
        assert_eq!(profile.age, None);
        assert!(profile.interests.is_empty());
        assert_eq!(profile.photo_url(), Some("/media/a.jpg"));
        assert_eq!(profile.main_photo.unwrap().uploaded_at, None);
    }

    #[test]
    fn test_timestamps_with_and_without_offset() {
        let aware = parse_timestamp("2024-05-01T10:00:00+03:00").unwrap();
        let naive = parse_timestamp("2024-05-01T07:00:00").unwrap();
        let fractional = parse_timestamp("2024-05-01T07:00:00.123456").unwrap();

        assert_eq!(aware, naive);
        assert_eq!(fractional.timestamp(), naive.timestamp());
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn test_empty_photo_url_uses_placeholder() {
        let profile: Profile =
            serde_json::from_str(r#"{"full_name": "Anna", "main_photo": {"image": ""}}"#).unwrap();
        assert_eq!(profile.avatar_url(), placeholder_avatar_url("Anna"));
    }
}
