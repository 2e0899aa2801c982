//! Request parameters.
//!
//! `None` fields are left out of the request and take the upstream default.
//! Bounds are checked before sending, see [`crate::schema::registry`].

use serde::Serialize;

/// Paging for movie and comment listings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Only items newer than this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slice_id: Option<String>,
}

impl PageParams {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
            slice_id: None,
        }
    }
}

pub type MoviesByUserParams = PageParams;
pub type CommentsParams = PageParams;

#[derive(Debug, Clone, Serialize)]
pub struct SubtitleParams {
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HashtagParams {
    pub hashtag: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostCommentParams {
    pub comment: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GiftsParams {
    /// `-1` (the default) returns the most recent gifts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slice_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupportingStatusParams {
    pub target_user_id: String,
}

/// Targets of a support or unsupport call, 1 to 20 ids.
#[derive(Debug, Clone, Serialize)]
pub struct SupportParams {
    pub target_user_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SupportingListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SupporterSort {
    New,
    Ranking,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupporterListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    pub sort: SupporterSort,
}

impl SupporterListParams {
    pub fn new(sort: SupporterSort) -> Self {
        Self {
            offset: None,
            limit: None,
            sort,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryLang {
    Ja,
    En,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoriesParams {
    pub lang: CategoryLang,
}

/// Search APIs only accept Japanese.
pub const SEARCH_LANG: &str = "ja";

#[derive(Debug, Clone, Serialize)]
pub struct UserSearchParams {
    /// Space separated keywords.
    pub words: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    pub lang: String,
}

impl UserSearchParams {
    pub fn new(words: impl Into<String>) -> Self {
        Self {
            words: words.into(),
            limit: None,
            lang: SEARCH_LANG.into(),
        }
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveSearchType {
    Tag,
    Word,
    Category,
    New,
    Recommend,
}

/// Live search. `context` is required for tag/word/category searches and
/// must be absent for new/recommend.
#[derive(Debug, Clone, Serialize)]
pub struct LiveSearchParams {
    #[serde(rename = "type")]
    pub search_type: LiveSearchType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    pub lang: String,
}

impl LiveSearchParams {
    pub fn new(search_type: LiveSearchType) -> Self {
        Self {
            search_type,
            context: None,
            limit: None,
            lang: SEARCH_LANG.into(),
        }
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WebHookListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Only hooks registered for this user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Events to register or remove, e.g. `livestart`, `liveend`.
#[derive(Debug, Clone, Serialize)]
pub struct WebHookEventsParams {
    pub user_id: String,
    pub events: Vec<String>,
}
