//! TwitCasting API v2 endpoints.
//!
//! Every endpoint goes through the same pipeline: validate parameters,
//! build the URL and body, send through the client's transport, then
//! check the status and validate the response body.

mod broadcasting;
mod categories;
mod comments;
pub(crate) mod contracts;
mod gifts;
mod live_thumbnail;
mod movies;
mod request;
mod search;
mod supporters;
mod users;
mod webhooks;

pub mod models;
pub mod params;


pub use models::{
    App, Categories, Category, Comment, Comments, DeletedComment, Extra, Gift, Gifts,
    LiveHashtag, LiveSearchResult, LiveSubtitle, Movie, MovieWithBroadcaster, MoviesByUser,
    PostedComment, RegisteredWebHooks, RemovedWebHooks, RtmpUrl, SubCategory, SupportResult,
    SupporterList, SupporterUser, SupportingList, SupportingStatus, UnsupportResult, User,
    UserInfo, UserSearchResult, VerifiedCredentials, WebHookEntry, WebHookList, WebhookPayload,
};
pub use params::{
    CategoriesParams, CategoryLang, CommentsParams, GiftsParams, HashtagParams, LiveSearchParams,
    LiveSearchType, MoviesByUserParams, PageParams, PostCommentParams, SubtitleParams,
    SupportParams, SupporterListParams, SupporterSort, SupportingListParams,
    SupportingStatusParams, UserSearchParams, WebHookEventsParams, WebHookListParams,
};

use crate::client::TwicasClient;
use crate::response::ApiResponse;
use crate::transport::Transport;
use crate::{ImageResponse, TwicasError};
use contracts::*;
use request::to_params;
