//! Static description of every JSON endpoint: method, path template and
//! the schemas applied on the way out and on the way back.

use std::sync::LazyLock;

use crate::schema::{Schema, registry};
use crate::transport::HttpMethod;

use HttpMethod::{Delete, Get, Post, Put};
use Segment::{Fixed, Param};

/// One path segment. `Param` is substituted from the call arguments in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment {
    Fixed(&'static str),
    Param(&'static str),
}

#[derive(Debug)]
pub(crate) struct EndpointContract {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: &'static [Segment],
    /// `None` for endpoints that take no parameters.
    pub params: Option<Schema>,
    pub response: Schema,
}

pub(crate) type Contract = LazyLock<EndpointContract>;

fn contract(
    name: &'static str,
    method: HttpMethod,
    path: &'static [Segment],
    params: Option<Schema>,
    response: Schema,
) -> EndpointContract {
    EndpointContract {
        name,
        method,
        path,
        params,
        response,
    }
}

pub(crate) const LIVE_THUMBNAIL_PATH: &[Segment] =
    &[Fixed("users"), Param("user_id"), Fixed("live"), Fixed("thumbnail")];

// ---- users ----------------------------------------------------------------

pub(crate) static GET_USER_INFO: Contract = LazyLock::new(|| {
    contract(
        "get_user_info",
        Get,
        &[Fixed("users"), Param("user_id")],
        None,
        registry::get_user_info_response(),
    )
});

pub(crate) static VERIFY_CREDENTIALS: Contract = LazyLock::new(|| {
    contract(
        "verify_credentials",
        Get,
        &[Fixed("verify_credentials")],
        None,
        registry::verify_credentials_response(),
    )
});

// ---- movies ---------------------------------------------------------------

pub(crate) static GET_MOVIE_INFO: Contract = LazyLock::new(|| {
    contract(
        "get_movie_info",
        Get,
        &[Fixed("movies"), Param("movie_id")],
        None,
        registry::get_movie_info_response(),
    )
});

pub(crate) static GET_MOVIES_BY_USER: Contract = LazyLock::new(|| {
    contract(
        "get_movies_by_user",
        Get,
        &[Fixed("users"), Param("user_id"), Fixed("movies")],
        Some(registry::get_movies_by_user_params()),
        registry::get_movies_by_user_response(),
    )
});

pub(crate) static GET_CURRENT_LIVE: Contract = LazyLock::new(|| {
    contract(
        "get_current_live",
        Get,
        &[Fixed("users"), Param("user_id"), Fixed("current_live")],
        None,
        registry::get_current_live_response(),
    )
});

pub(crate) static SET_CURRENT_LIVE_SUBTITLE: Contract = LazyLock::new(|| {
    contract(
        "set_current_live_subtitle",
        Post,
        &[Fixed("movies"), Fixed("subtitle")],
        Some(registry::set_subtitle_params()),
        registry::set_subtitle_response(),
    )
});

pub(crate) static UNSET_CURRENT_LIVE_SUBTITLE: Contract = LazyLock::new(|| {
    contract(
        "unset_current_live_subtitle",
        Delete,
        &[Fixed("movies"), Fixed("subtitle")],
        None,
        registry::unset_subtitle_response(),
    )
});

pub(crate) static SET_CURRENT_LIVE_HASHTAG: Contract = LazyLock::new(|| {
    contract(
        "set_current_live_hashtag",
        Post,
        &[Fixed("movies"), Fixed("hashtag")],
        Some(registry::set_hashtag_params()),
        registry::set_hashtag_response(),
    )
});

pub(crate) static UNSET_CURRENT_LIVE_HASHTAG: Contract = LazyLock::new(|| {
    contract(
        "unset_current_live_hashtag",
        Delete,
        &[Fixed("movies"), Fixed("hashtag")],
        None,
        registry::unset_hashtag_response(),
    )
});

// ---- comments -------------------------------------------------------------

pub(crate) static GET_COMMENTS: Contract = LazyLock::new(|| {
    contract(
        "get_comments",
        Get,
        &[Fixed("movies"), Param("movie_id"), Fixed("comments")],
        Some(registry::get_comments_params()),
        registry::get_comments_response(),
    )
});

pub(crate) static POST_COMMENT: Contract = LazyLock::new(|| {
    contract(
        "post_comment",
        Post,
        &[Fixed("movies"), Param("movie_id"), Fixed("comments")],
        Some(registry::post_comment_params()),
        registry::post_comment_response(),
    )
});

pub(crate) static DELETE_COMMENT: Contract = LazyLock::new(|| {
    contract(
        "delete_comment",
        Delete,
        &[
            Fixed("movies"),
            Param("movie_id"),
            Fixed("comments"),
            Param("comment_id"),
        ],
        None,
        registry::delete_comment_response(),
    )
});

// ---- gifts ----------------------------------------------------------------

pub(crate) static GET_GIFTS: Contract = LazyLock::new(|| {
    contract(
        "get_gifts",
        Get,
        &[Fixed("gifts")],
        Some(registry::get_gifts_params()),
        registry::get_gifts_response(),
    )
});

// ---- supporters -----------------------------------------------------------

pub(crate) static GET_SUPPORTING_STATUS: Contract = LazyLock::new(|| {
    contract(
        "get_supporting_status",
        Get,
        &[Fixed("users"), Param("user_id"), Fixed("supporting_status")],
        Some(registry::get_supporting_status_params()),
        registry::get_supporting_status_response(),
    )
});

pub(crate) static SUPPORT_USER: Contract = LazyLock::new(|| {
    contract(
        "support_user",
        Put,
        &[Fixed("support")],
        Some(registry::support_params()),
        registry::support_response(),
    )
});

pub(crate) static UNSUPPORT_USER: Contract = LazyLock::new(|| {
    contract(
        "unsupport_user",
        Put,
        &[Fixed("unsupport")],
        Some(registry::support_params()),
        registry::unsupport_response(),
    )
});

pub(crate) static GET_SUPPORTING_LIST: Contract = LazyLock::new(|| {
    contract(
        "get_supporting_list",
        Get,
        &[Fixed("users"), Param("user_id"), Fixed("supporting")],
        Some(registry::get_supporting_list_params()),
        registry::get_supporting_list_response(),
    )
});

pub(crate) static GET_SUPPORTER_LIST: Contract = LazyLock::new(|| {
    contract(
        "get_supporter_list",
        Get,
        &[Fixed("users"), Param("user_id"), Fixed("supporters")],
        Some(registry::get_supporter_list_params()),
        registry::get_supporter_list_response(),
    )
});

// ---- categories -----------------------------------------------------------

pub(crate) static GET_CATEGORIES: Contract = LazyLock::new(|| {
    contract(
        "get_categories",
        Get,
        &[Fixed("categories")],
        Some(registry::get_categories_params()),
        registry::get_categories_response(),
    )
});

// ---- search ---------------------------------------------------------------

pub(crate) static SEARCH_USERS: Contract = LazyLock::new(|| {
    contract(
        "search_users",
        Get,
        &[Fixed("search"), Fixed("users")],
        Some(registry::search_users_params()),
        registry::search_users_response(),
    )
});

pub(crate) static SEARCH_LIVE_MOVIES: Contract = LazyLock::new(|| {
    contract(
        "search_live_movies",
        Get,
        &[Fixed("search"), Fixed("lives")],
        Some(registry::search_live_movies_params()),
        registry::search_live_movies_response(),
    )
});

// ---- webhooks -------------------------------------------------------------

pub(crate) static GET_WEBHOOK_LIST: Contract = LazyLock::new(|| {
    contract(
        "get_webhook_list",
        Get,
        &[Fixed("webhooks")],
        Some(registry::get_webhook_list_params()),
        registry::get_webhook_list_response(),
    )
});

pub(crate) static REGISTER_WEBHOOK: Contract = LazyLock::new(|| {
    contract(
        "register_webhook",
        Post,
        &[Fixed("webhooks")],
        Some(registry::webhook_events_params()),
        registry::register_webhook_response(),
    )
});

pub(crate) static REMOVE_WEBHOOK: Contract = LazyLock::new(|| {
    contract(
        "remove_webhook",
        Delete,
        &[Fixed("webhooks")],
        Some(registry::webhook_events_params()),
        registry::remove_webhook_response(),
    )
});

// ---- broadcasting ---------------------------------------------------------

pub(crate) static GET_RTMP_URL: Contract = LazyLock::new(|| {
    contract(
        "get_rtmp_url",
        Get,
        &[Fixed("rtmp_url")],
        None,
        registry::get_rtmp_url_response(),
    )
});
