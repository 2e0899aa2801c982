//! Response shapes of the TwitCasting domain objects.
//!
//! See <https://apiv2-doc.twitcasting.tv/> for the upstream definitions.
//! All objects are loose: fields added upstream are kept, not rejected.

use super::{
    ObjectRule, Schema, array_of, boolean, loose_object, nullish, number, string,
};

/// <https://apiv2-doc.twitcasting.tv/#user-object>
pub fn user() -> ObjectRule {
    loose_object()
        .required("id", string())
        .required("screen_id", string())
        .required("name", string())
        .required("image", string())
        .required("profile", string())
        .required("level", number())
        .optional("last_movie_id", nullish(string()))
        .required("is_live", boolean())
}

/// <https://apiv2-doc.twitcasting.tv/#movie-object>
pub fn movie() -> ObjectRule {
    loose_object()
        .required("id", string())
        .required("user_id", string())
        .required("title", string())
        .optional("subtitle", nullish(string()))
        .optional("last_owner_comment", nullish(string()))
        .optional("category", nullish(string()))
        .required("link", string())
        .required("is_live", boolean())
        .required("is_recorded", boolean())
        .required("comment_count", number())
        .required("large_thumbnail", string())
        .required("small_thumbnail", string())
        .required("country", string())
        .required("duration", number())
        .required("created", number())
        .required("is_collabo", boolean())
        .required("is_protected", boolean())
        .required("max_view_count", number())
        .required("current_view_count", number())
        .required("total_view_count", number())
        .optional("hls_url", nullish(string()))
}

/// <https://apiv2-doc.twitcasting.tv/#comment-object>
pub fn comment() -> ObjectRule {
    loose_object()
        .required("id", string())
        .required("message", string())
        .required("from_user", user())
        .required("created", number())
}

/// <https://apiv2-doc.twitcasting.tv/#gift-object>
pub fn gift() -> ObjectRule {
    loose_object()
        .required("id", string())
        .required("message", string())
        .required("item_image", string())
        .optional("item_sub_image", nullish(string()))
        .required("item_id", string())
        .required("item_mp", string())
        .required("item_name", string())
        .required("user_image", string())
        .required("user_screen_id", string())
        .required("user_screen_name", string())
        .required("user_name", string())
}

/// User object plus the supporter counters.
///
/// <https://apiv2-doc.twitcasting.tv/#supporteruser-object>
pub fn supporter_user() -> ObjectRule {
    let counters = loose_object()
        .required("supported", number())
        .required("point", number())
        .required("total_point", number());

    user().extend(counters)
}

/// <https://apiv2-doc.twitcasting.tv/#category-object>
pub fn category() -> ObjectRule {
    let sub_category = loose_object()
        .required("id", string())
        .required("name", string())
        .required("count", number());

    loose_object()
        .required("id", string())
        .required("name", string())
        .required("sub_categories", array_of(sub_category))
}

/// <https://apiv2-doc.twitcasting.tv/#webhook-object>
pub fn webhook() -> ObjectRule {
    loose_object()
        .required("user_id", string())
        .required("event", string())
}

/// <https://apiv2-doc.twitcasting.tv/#app-object>
pub fn app() -> ObjectRule {
    loose_object()
        .required("client_id", string())
        .required("name", string())
        .required("owner_user_id", string())
}

/// Movie, broadcaster and tags, as returned by movie lookups and searches.
pub fn movie_with_broadcaster() -> ObjectRule {
    loose_object()
        .required("movie", movie())
        .required("broadcaster", user())
        .required("tags", array_of(string()))
}

/// Body POSTed by TwitCasting to a registered webhook URL.
pub fn webhook_payload() -> Schema {
    loose_object()
        .required("signature", string())
        .required("movie", movie())
        .required("broadcaster", user())
        .into()
}

/// `{"error": {"code": ..., "message": ...}}` returned with non-2xx statuses.
pub fn error_body() -> Schema {
    let detail = loose_object()
        .required("code", number())
        .required("message", string())
        .optional("details", super::any());

    loose_object().required("error", detail).into()
}
