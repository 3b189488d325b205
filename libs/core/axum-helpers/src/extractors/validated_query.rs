//! Query string extractor with envelope-shaped rejections.

use crate::errors::ErrorBody;
use axum::{
    extract::{FromRequestParts, Query},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Query extractor that answers malformed query strings with a 400 envelope.
///
/// Axum's plain `Query` rejection is a text/plain body; this wrapper keeps
/// the `{success, message, error}` shape consistent with every other
/// endpoint response.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedQuery;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Filter {
///     #[serde(default)]
///     include_deleted: bool,
/// }
///
/// async fn list(ValidatedQuery(filter): ValidatedQuery<Filter>) {
///     // ...
/// }
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                let body = ErrorBody::with_detail("Invalid query parameters", e.body_text());
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            })?;

        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Filter {
        #[serde(default)]
        flag: bool,
    }

    async fn handler(ValidatedQuery(filter): ValidatedQuery<Filter>) -> String {
        filter.flag.to_string()
    }

    fn app() -> Router {
        Router::new().route("/", get(handler))
    }

    #[tokio::test]
    async fn test_valid_query_passes() {
        let response = app()
            .oneshot(Request::builder().uri("/?flag=true").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_query_returns_envelope() {
        let response = app()
            .oneshot(Request::builder().uri("/?flag=1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid query parameters");
    }
}
