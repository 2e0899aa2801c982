use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use url::Url;

use super::contracts::{EndpointContract, Segment};
use crate::TwicasError;
use crate::client::TwicasClient;
use crate::response::{ApiResponse, format_response};
use crate::schema::ValidationError;
use crate::transport::{ApiRequest, Transport};

impl<T: Transport> TwicasClient<T> {
    /// Validate, send and decode one call to `contract`.
    ///
    /// `args` fill the path parameters in order.
    pub(super) async fn dispatch<R: DeserializeOwned>(
        &self,
        contract: &EndpointContract,
        args: &[&str],
        params: Option<Value>,
    ) -> Result<ApiResponse<R>, TwicasError> {
        let request = self.build_request(contract, args, params)?;
        tracing::debug!(
            endpoint = contract.name,
            method = %request.method,
            url = %request.url,
            "Sending TwitCasting API request"
        );

        let raw = self.transport.send(request).await?;
        format_response(raw, &contract.response)
    }

    /// Build the outgoing request without sending it. Parameters go to the
    /// JSON body for POST/PUT and to the query string otherwise.
    pub(super) fn build_request(
        &self,
        contract: &EndpointContract,
        args: &[&str],
        params: Option<Value>,
    ) -> Result<ApiRequest, TwicasError> {
        let params = match &contract.params {
            Some(schema) => {
                let input = params.unwrap_or_else(|| Value::Object(Map::new()));
                match schema.validate(&input) {
                    Ok(normalized) => Some(normalized),
                    Err(e) => {
                        tracing::debug!(
                            endpoint = contract.name,
                            error = %e,
                            "Rejected request parameters"
                        );
                        return Err(e.into());
                    }
                }
            }
            None => None,
        };

        let mut url = self.endpoint_url(contract.path, args)?;
        let body = match params {
            Some(params) if contract.method.sends_body() => Some(params),
            Some(params) => {
                append_query(&mut url, &params);
                None
            }
            None => None,
        };

        Ok(ApiRequest {
            method: contract.method,
            url,
            body,
        })
    }

    /// Base URL plus `path`, with every segment percent-encoded.
    pub(super) fn endpoint_url(&self, path: &[Segment], args: &[&str]) -> Result<Url, TwicasError> {
        let mut url = self.base_url.clone();
        let mut args = args.iter().copied();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                TwicasError::InvalidConfig("base URL cannot carry a path".into())
            })?;
            segments.pop_if_empty();
            for segment in path {
                match *segment {
                    Segment::Fixed(s) => {
                        segments.push(s);
                    }
                    Segment::Param(name) => {
                        let value = args.next().unwrap_or_default();
                        if value.is_empty() {
                            return Err(ValidationError::single(name, "must not be empty").into());
                        }
                        segments.push(value);
                    }
                }
            }
        }
        Ok(url)
    }
}

/// Serialize typed parameters for validation.
pub(super) fn to_params<P: Serialize>(params: &P) -> Result<Value, TwicasError> {
    serde_json::to_value(params).map_err(|e| {
        TwicasError::from(ValidationError::single(
            "",
            format!("cannot encode parameters: {e}"),
        ))
    })
}

/// Append `params` as query pairs. Arrays become repeated `key[]` entries,
/// nulls are dropped.
fn append_query(url: &mut Url, params: &Value) {
    let Some(map) = params.as_object() else {
        return;
    };

    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let name = format!("{key}[]");
                pairs.extend(
                    items
                        .iter()
                        .filter(|item| !item.is_null())
                        .map(|item| (name.clone(), scalar(item))),
                );
            }
            other => pairs.push((key.clone(), scalar(other))),
        }
    }

    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn query(url: &Url) -> Vec<(String, String)> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn arrays_become_bracketed_repeated_keys() {
        let mut url = Url::parse("https://apiv2.twitcasting.tv/webhooks").unwrap();
        append_query(&mut url, &json!({ "user_id": "7", "events": ["livestart", "liveend"] }));

        assert_eq!(
            query(&url),
            vec![
                ("events[]".to_string(), "livestart".to_string()),
                ("events[]".to_string(), "liveend".to_string()),
                ("user_id".to_string(), "7".to_string()),
            ]
        );
    }

    #[test]
    fn scalars_and_nulls() {
        let mut url = Url::parse("https://apiv2.twitcasting.tv/gifts").unwrap();
        append_query(&mut url, &json!({ "slice_id": -1, "flag": true, "skip": null }));

        assert_eq!(
            query(&url),
            vec![
                ("flag".to_string(), "true".to_string()),
                ("slice_id".to_string(), "-1".to_string()),
            ]
        );
    }

    #[test]
    fn empty_params_leave_no_question_mark() {
        let mut url = Url::parse("https://apiv2.twitcasting.tv/rtmp_url").unwrap();
        append_query(&mut url, &json!({}));
        assert_eq!(url.as_str(), "https://apiv2.twitcasting.tv/rtmp_url");
    }
}
