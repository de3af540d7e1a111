//! Custom Axum extractors
//!
//! Both map their rejections onto `ApiError` so every failure, including a
//! malformed body or a bad path id, answers with the same `{"detail"}` shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract and validate a positive integer id from the path
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "id",
                    reason: "missing path parameter",
                })
            })?;

        parse_id(&raw).map(Self).map_err(ApiError::from)
    }
}

fn parse_id(raw: &str) -> Result<i64, ValidationError> {
    let id = raw.parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
        field: "id",
        reason: "must be an integer",
    })?;

    if id <= 0 {
        return Err(ValidationError::OutOfRange {
            field: "id",
            reason: "must be positive",
        });
    }

    Ok(id)
}

/// JSON body extractor that rejects with `ApiError`
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(body_error(rejection)),
        }
    }
}

fn body_error(rejection: JsonRejection) -> ApiError {
    tracing::debug!(error = %rejection.body_text(), "rejected request body");
    ApiError::Validation(ValidationError::Body {
        message: rejection.body_text(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn missing_path_param_is_invalid_format() {
        let (mut parts, _) = Request::builder().uri("/products/").body(()).unwrap().into_parts();

        let err = RecordId::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "id",
                reason: "missing path parameter",
            })
        ));
    }

    #[test]
    fn parses_positive_ids() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("999999").unwrap(), 999999);
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(matches!(
            parse_id("abc"),
            Err(ValidationError::InvalidFormat { field: "id", .. })
        ));
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert!(matches!(parse_id("0"), Err(ValidationError::OutOfRange { .. })));
        assert!(matches!(parse_id("-4"), Err(ValidationError::OutOfRange { .. })));
    }
}
