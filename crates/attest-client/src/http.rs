//! Response checking and error normalization shared by every endpoint.

use attest_auth::Session;
use attest_core::Locale;
use reqwest::StatusCode;

use crate::error::ClientError;

const UNREACHABLE_KEY: &str = "errors.unreachable";
const NO_RESPONSE_KEY: &str = "errors.no_response";
const GENERIC_KEY: &str = "errors.generic";
const UNAUTHORIZED_KEY: &str = "errors.unauthorized";

/// Pass successful responses through; turn everything else into a
/// [`ClientError`].
///
/// A 401 clears `session` (memory and store) before returning.
pub async fn check_response(
    resp: reqwest::Response,
    session: &Session,
    locale: Locale,
) -> Result<reqwest::Response, ClientError> {
    let result = check_status(resp, locale).await;
    if matches!(result, Err(ClientError::Unauthorized { .. })) {
        if let Err(error) = session.clear() {
            tracing::warn!(%error, "failed to clear persisted session after 401");
        }
        tracing::debug!("401 received; session cleared");
    }
    result
}

/// Like [`check_response`] but without touching any session. Login uses this
/// so a rejected password leaves the current session alone.
pub async fn check_status(
    resp: reqwest::Response,
    locale: Locale,
) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let server_message = extract_message(&body);

    if status == StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized {
            message: server_message
                .unwrap_or_else(|| localized(locale, UNAUTHORIZED_KEY)),
        });
    }

    Err(ClientError::Api {
        status: status.as_u16(),
        message: server_message.unwrap_or_else(|| localized(locale, GENERIC_KEY)),
    })
}

/// Classify a transport failure.
pub fn transport_error(err: reqwest::Error, locale: Locale) -> ClientError {
    if err.is_builder() {
        return ClientError::Build(err.to_string());
    }
    if err.is_decode() {
        return ClientError::Decode(err.to_string());
    }
    if err.is_connect() {
        return ClientError::Unreachable {
            message: localized(locale, UNREACHABLE_KEY),
            source: err,
        };
    }
    ClientError::NoResponse {
        message: localized(locale, NO_RESPONSE_KEY),
        source: err,
    }
}

/// Pull a human-readable message out of an error body.
///
/// Priority: `detail` (a string as-is, anything else as JSON text), then
/// `message`. Empty values are skipped.
#[must_use]
pub fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    match value.get("detail") {
        Some(serde_json::Value::String(detail)) if !detail.is_empty() => {
            return Some(detail.clone());
        }
        Some(serde_json::Value::Null | serde_json::Value::String(_)) | None => {}
        Some(structured) => return Some(structured.to_string()),
    }

    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

fn localized(locale: Locale, key: &str) -> String {
    locale.text_or(key, key).to_string()
}

/// File name from a `Content-Disposition` header.
///
/// Accepts `filename*=UTF-8''percent%20encoded` and `filename="quoted"` /
/// `filename=bare`. The extended form wins when both are present.
#[must_use]
pub fn content_disposition_filename(header: &str) -> Option<String> {
    let mut plain = None;
    for part in header.split(';').map(str::trim) {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        let value = value.trim();
        if key == "filename*" {
            let encoded = value.rsplit("''").next().unwrap_or(value);
            if let Ok(decoded) = urlencoding::decode(encoded.trim_matches('"')) {
                if !decoded.is_empty() {
                    return Some(decoded.into_owned());
                }
            }
        } else if key == "filename" {
            let name = value.trim_matches(|c| c == '"' || c == '\'');
            if !name.is_empty() {
                plain = Some(name.to_string());
            }
        }
    }
    plain
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn detail_string_wins() {
        let body = r#"{"detail": "Bulgu bulunamadı", "message": "ignored"}"#;
        assert_eq!(extract_message(body).as_deref(), Some("Bulgu bulunamadı"));
    }

    #[test]
    fn structured_detail_is_serialized() {
        let body = r#"{"detail": [{"loc": ["body", "title"], "msg": "field required"}]}"#;
        let message = extract_message(body).unwrap();
        assert!(message.starts_with('['));
        assert!(message.contains("field required"));
    }

    #[test]
    fn message_is_second_choice() {
        assert_eq!(
            extract_message(r#"{"message": "Rate limit"}"#).as_deref(),
            Some("Rate limit")
        );
        assert_eq!(
            extract_message(r#"{"detail": "", "message": "Rate limit"}"#).as_deref(),
            Some("Rate limit")
        );
    }

    #[test]
    fn non_json_or_empty_body_has_no_message() {
        assert_eq!(extract_message("<html>502</html>"), None);
        assert_eq!(extract_message(""), None);
        assert_eq!(extract_message(r#"{"detail": null}"#), None);
    }

    #[test]
    fn filename_from_quoted_header() {
        let header = r#"attachment; filename="denetim_raporu_3_20240601.docx""#;
        assert_eq!(
            content_disposition_filename(header).as_deref(),
            Some("denetim_raporu_3_20240601.docx")
        );
    }

    #[test]
    fn extended_filename_is_decoded_and_preferred() {
        let header = "attachment; filename=\"rapor.docx\"; filename*=UTF-8''denetim%20raporu.docx";
        assert_eq!(
            content_disposition_filename(header).as_deref(),
            Some("denetim raporu.docx")
        );
    }

    #[test]
    fn missing_filename_is_none() {
        assert_eq!(content_disposition_filename("attachment"), None);
        assert_eq!(content_disposition_filename("inline; filename=\"\""), None);
    }

    #[tokio::test]
    async fn server_error_uses_locale_fallback() {
        let session = Session::in_memory();
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(500)
                .body("oops")
                .unwrap(),
        );
        let err = check_response(resp, &session, Locale::En).await.unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "An unexpected error occurred.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn status_check_leaves_session_alone() {
        let session = Session::in_memory();
        session.set_token("kept");
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(401)
                .body(r#"{"detail": "Incorrect email or password"}"#)
                .unwrap(),
        );
        let err = check_status(resp, Locale::En).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(session.token().as_deref(), Some("kept"));
    }

    #[tokio::test]
    async fn unauthorized_clears_session() {
        let session = Session::in_memory();
        session.set_token("stale");
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(401)
                .body(r#"{"detail": "Could not validate credentials"}"#)
                .unwrap(),
        );
        let err = check_response(resp, &session, Locale::Tr).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Could not validate credentials");
        assert!(!session.is_authenticated());
    }
}
