//! Parameter and response schemas for every endpoint.
//!
//! Parameter objects are strict; response objects are loose. Limits follow
//! the upstream API documentation.

use std::sync::LazyLock;

use regex::Regex;

use super::entities::{
    app, category, comment, gift, movie, movie_with_broadcaster, supporter_user, user, webhook,
};
use super::{
    Schema, array_of, boolean, integer, literal, loose_object, null, nullish, number, one_of,
    strict_object, string, tagged,
};

static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}]+$").unwrap());

pub const LIVE_SEARCH_TYPES_WITH_CONTEXT: &[&str] = &["tag", "word", "category"];
pub const LIVE_SEARCH_TYPES_WITHOUT_CONTEXT: &[&str] = &["new", "recommend"];

// ---- users ----------------------------------------------------------------

pub fn get_user_info_response() -> Schema {
    loose_object()
        .required("user", user())
        .required("supporter_count", number())
        .required("supporting_count", number())
        .into()
}

pub fn verify_credentials_response() -> Schema {
    loose_object()
        .required("app", app())
        .required("user", user())
        .required("supporter_count", number())
        .required("supporting_count", number())
        .into()
}

// ---- movies ---------------------------------------------------------------

pub fn get_movie_info_response() -> Schema {
    movie_with_broadcaster().into()
}

pub fn get_movies_by_user_params() -> Schema {
    strict_object()
        .with_default("offset", integer().range(0, 1000), 0)
        .with_default("limit", integer().range(1, 50), 20)
        .optional("slice_id", string())
        .into()
}

pub fn get_movies_by_user_response() -> Schema {
    loose_object()
        .required("total_count", number())
        .required("movies", array_of(movie()))
        .into()
}

pub fn get_current_live_response() -> Schema {
    movie_with_broadcaster().into()
}

pub fn set_subtitle_params() -> Schema {
    strict_object()
        .required("subtitle", string().length(1, 34))
        .into()
}

pub fn set_subtitle_response() -> Schema {
    loose_object()
        .required("movie_id", string())
        .required("subtitle", string())
        .into()
}

pub fn unset_subtitle_response() -> Schema {
    loose_object()
        .required("movie_id", string())
        .required("subtitle", null())
        .into()
}

pub fn set_hashtag_params() -> Schema {
    strict_object()
        .required(
            "hashtag",
            string()
                .length(1, 26)
                .pattern(HASHTAG_RE.clone(), "must contain only letters and numbers"),
        )
        .into()
}

pub fn set_hashtag_response() -> Schema {
    loose_object()
        .required("movie_id", string())
        .required("hashtag", string())
        .into()
}

pub fn unset_hashtag_response() -> Schema {
    loose_object()
        .required("movie_id", string())
        .required("hashtag", null())
        .into()
}

// ---- comments -------------------------------------------------------------

pub fn get_comments_params() -> Schema {
    strict_object()
        .with_default("offset", integer().min(0), 0)
        .with_default("limit", integer().range(1, 50), 20)
        .optional("slice_id", string())
        .into()
}

pub fn get_comments_response() -> Schema {
    loose_object()
        .required("movie_id", string())
        .required("all_count", number())
        .required("comments", array_of(comment()))
        .into()
}

pub fn post_comment_params() -> Schema {
    strict_object()
        .required("comment", string().length(1, 140))
        .into()
}

pub fn post_comment_response() -> Schema {
    loose_object()
        .required("movie_id", string())
        .required("all_count", number())
        .required("comment", comment())
        .into()
}

pub fn delete_comment_response() -> Schema {
    loose_object().required("comment_id", string()).into()
}

// ---- gifts ----------------------------------------------------------------

pub fn get_gifts_params() -> Schema {
    strict_object()
        .with_default("slice_id", integer().min(-1), -1)
        .into()
}

pub fn get_gifts_response() -> Schema {
    loose_object()
        .required("slice_id", number())
        .required("gifts", array_of(gift()))
        .into()
}

// ---- supporters -----------------------------------------------------------

pub fn get_supporting_status_params() -> Schema {
    strict_object().required("target_user_id", string()).into()
}

pub fn get_supporting_status_response() -> Schema {
    loose_object()
        .required("is_supporting", boolean())
        .required("supported", number())
        .required("target_user", user())
        .into()
}

pub fn support_params() -> Schema {
    strict_object()
        .required("target_user_ids", array_of(string()).items(1, 20))
        .into()
}

pub fn support_response() -> Schema {
    loose_object().required("added_count", number()).into()
}

pub fn unsupport_response() -> Schema {
    loose_object().required("removed_count", number()).into()
}

pub fn get_supporting_list_params() -> Schema {
    strict_object()
        .with_default("offset", integer().min(0), 0)
        .with_default("limit", integer().range(1, 20), 20)
        .into()
}

pub fn get_supporting_list_response() -> Schema {
    loose_object()
        .required("total", number())
        .required("supporting", array_of(supporter_user()))
        .into()
}

pub fn get_supporter_list_params() -> Schema {
    strict_object()
        .with_default("offset", integer().min(0), 0)
        .with_default("limit", integer().range(1, 20), 20)
        .required("sort", one_of(&["new", "ranking"]))
        .into()
}

pub fn get_supporter_list_response() -> Schema {
    loose_object()
        .required("total", number())
        .required("supporters", array_of(supporter_user()))
        .into()
}

// ---- categories -----------------------------------------------------------

pub fn get_categories_params() -> Schema {
    strict_object()
        .required("lang", one_of(&["ja", "en"]))
        .into()
}

pub fn get_categories_response() -> Schema {
    loose_object()
        .required("categories", array_of(category()))
        .into()
}

// ---- search ---------------------------------------------------------------

pub fn search_users_params() -> Schema {
    strict_object()
        .required("words", string())
        .with_default("limit", integer().range(1, 50), 10)
        .required("lang", literal("ja"))
        .into()
}

pub fn search_users_response() -> Schema {
    loose_object().required("users", array_of(user())).into()
}

/// `context` is required for keyword-like searches and rejected otherwise.
pub fn search_live_movies_params() -> Schema {
    tagged("type")
        .variant(
            LIVE_SEARCH_TYPES_WITH_CONTEXT,
            strict_object()
                .with_default("limit", integer().range(1, 100), 10)
                .required("type", one_of(LIVE_SEARCH_TYPES_WITH_CONTEXT))
                .required("context", string())
                .required("lang", literal("ja")),
        )
        .variant(
            LIVE_SEARCH_TYPES_WITHOUT_CONTEXT,
            strict_object()
                .with_default("limit", integer().range(1, 100), 10)
                .required("type", one_of(LIVE_SEARCH_TYPES_WITHOUT_CONTEXT))
                .required("lang", literal("ja")),
        )
        .into()
}

pub fn search_live_movies_response() -> Schema {
    loose_object()
        .required("movies", array_of(movie_with_broadcaster()))
        .into()
}

// ---- webhooks -------------------------------------------------------------

pub fn get_webhook_list_params() -> Schema {
    strict_object()
        .with_default("limit", integer().range(1, 50), 50)
        .with_default("offset", integer().min(0), 0)
        .optional("user_id", string())
        .into()
}

pub fn get_webhook_list_response() -> Schema {
    loose_object()
        .required("all_count", number())
        .required("webhooks", array_of(webhook()))
        .into()
}

pub fn webhook_events_params() -> Schema {
    strict_object()
        .required("user_id", string())
        .required("events", array_of(string()))
        .into()
}

pub fn register_webhook_response() -> Schema {
    loose_object()
        .required("user_id", string())
        .required("added_events", array_of(string()))
        .into()
}

pub fn remove_webhook_response() -> Schema {
    loose_object()
        .required("user_id", string())
        .required("deleted_events", array_of(string()))
        .into()
}

// ---- broadcasting ---------------------------------------------------------

pub fn get_rtmp_url_response() -> Schema {
    loose_object()
        .required("enabled", boolean())
        .optional("url", nullish(string()))
        .optional("stream_key", nullish(string()))
        .into()
}
