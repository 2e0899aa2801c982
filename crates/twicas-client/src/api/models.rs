use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields not (yet) described by this crate, kept as received.
pub type Extra = Map<String, Value>;

// ---------------------------------------------------------------------------
// Domain objects
// ---------------------------------------------------------------------------

/// User object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub screen_id: String,
    pub name: String,
    pub image: String,
    pub profile: String,
    pub level: i64,
    #[serde(default)]
    pub last_movie_id: Option<String>,
    pub is_live: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Movie (live or recording) object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub last_owner_comment: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub link: String,
    pub is_live: bool,
    pub is_recorded: bool,
    pub comment_count: i64,
    pub large_thumbnail: String,
    pub small_thumbnail: String,
    pub country: String,
    /// Seconds.
    pub duration: i64,
    /// Unix time.
    pub created: i64,
    pub is_collabo: bool,
    pub is_protected: bool,
    pub max_view_count: i64,
    pub current_view_count: i64,
    pub total_view_count: i64,
    #[serde(default)]
    pub hls_url: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Movie {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created, 0)
    }
}

/// Comment object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub message: String,
    pub from_user: User,
    pub created: i64,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Comment {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created, 0)
    }
}

/// Gift (item) object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    pub id: String,
    pub message: String,
    pub item_image: String,
    #[serde(default)]
    pub item_sub_image: Option<String>,
    pub item_id: String,
    pub item_mp: String,
    pub item_name: String,
    pub user_image: String,
    pub user_screen_id: String,
    pub user_screen_name: String,
    pub user_name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// User object with supporter counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupporterUser {
    #[serde(flatten)]
    pub user: User,
    pub supported: i64,
    pub point: i64,
    pub total_point: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: String,
    pub name: String,
    pub count: i64,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub sub_categories: Vec<SubCategory>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One registered webhook event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebHookEntry {
    pub user_id: String,
    pub event: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Application object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    pub client_id: String,
    pub name: String,
    pub owner_user_id: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Movie plus its broadcaster and tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieWithBroadcaster {
    pub movie: Movie,
    pub broadcaster: User,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body delivered to a registered webhook URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub signature: String,
    pub movie: Movie,
    pub broadcaster: User,
    #[serde(flatten)]
    pub extra: Extra,
}

// ---------------------------------------------------------------------------
// Endpoint responses
// ---------------------------------------------------------------------------

/// GET /users/:user_id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub user: User,
    pub supporter_count: i64,
    pub supporting_count: i64,
    #[serde(flatten)]
    pub extra: Extra,
}

/// GET /verify_credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedCredentials {
    pub app: App,
    pub user: User,
    pub supporter_count: i64,
    pub supporting_count: i64,
    #[serde(flatten)]
    pub extra: Extra,
}

/// GET /users/:user_id/movies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviesByUser {
    pub total_count: i64,
    pub movies: Vec<Movie>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// POST /movies/subtitle, DELETE /movies/subtitle (subtitle is null)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveSubtitle {
    pub movie_id: String,
    pub subtitle: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// POST /movies/hashtag, DELETE /movies/hashtag (hashtag is null)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveHashtag {
    pub movie_id: String,
    pub hashtag: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// GET /movies/:movie_id/comments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comments {
    pub movie_id: String,
    pub all_count: i64,
    pub comments: Vec<Comment>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// POST /movies/:movie_id/comments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostedComment {
    pub movie_id: String,
    pub all_count: i64,
    pub comment: Comment,
    #[serde(flatten)]
    pub extra: Extra,
}

/// DELETE /movies/:movie_id/comments/:comment_id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedComment {
    pub comment_id: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// GET /gifts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gifts {
    /// Pass back as `slice_id` to receive only newer gifts.
    pub slice_id: i64,
    pub gifts: Vec<Gift>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// GET /users/:user_id/supporting_status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportingStatus {
    pub is_supporting: bool,
    /// Unix time the support started.
    pub supported: i64,
    pub target_user: User,
    #[serde(flatten)]
    pub extra: Extra,
}

/// PUT /support
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportResult {
    pub added_count: i64,
    #[serde(flatten)]
    pub extra: Extra,
}

/// PUT /unsupport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsupportResult {
    pub removed_count: i64,
    #[serde(flatten)]
    pub extra: Extra,
}

/// GET /users/:user_id/supporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportingList {
    pub total: i64,
    pub supporting: Vec<SupporterUser>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// GET /users/:user_id/supporters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupporterList {
    pub total: i64,
    pub supporters: Vec<SupporterUser>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// GET /categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categories {
    pub categories: Vec<Category>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// GET /search/users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSearchResult {
    pub users: Vec<User>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// GET /search/lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveSearchResult {
    pub movies: Vec<MovieWithBroadcaster>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// GET /webhooks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebHookList {
    pub all_count: i64,
    pub webhooks: Vec<WebHookEntry>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// POST /webhooks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredWebHooks {
    pub user_id: String,
    pub added_events: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// DELETE /webhooks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovedWebHooks {
    pub user_id: String,
    pub deleted_events: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// GET /rtmp_url
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RtmpUrl {
    pub enabled: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub stream_key: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}
