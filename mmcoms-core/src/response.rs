use serde_json::Value;

use crate::error::{ApiError, Error, Result};
use crate::net::HttpResponse;

/// Maps a raw response onto the call result: 200 yields the parsed JSON body,
/// 401 a rejected token, and anything else an [`ApiError::Status`].
pub fn interpret_response(response: HttpResponse) -> Result<Value> {
    match response.status_code {
        200 => serde_json::from_slice(&response.body)
            .map_err(|e| Error::Api(ApiError::InvalidResponse(e))),
        401 => Err(Error::Authentication),
        status => Err(Error::Api(ApiError::Status {
            status,
            body: response.body_string(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_body_is_parsed() {
        let response = HttpResponse::new(200, br#"{"id": "abc"}"#.to_vec());
        let value = interpret_response(response).unwrap();
        assert_eq!(value, json!({"id": "abc"}));
    }

    #[test]
    fn unauthorized_is_authentication_error() {
        let err = interpret_response(HttpResponse::new(401, b"nope".to_vec())).unwrap_err();
        assert!(matches!(err, Error::Authentication));
    }

    #[test]
    fn other_status_keeps_code_and_text() {
        let err = interpret_response(HttpResponse::new(500, b"server error".to_vec())).unwrap_err();
        match err {
            Error::Api(ApiError::Status { status, ref body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "server error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_200_success_codes_are_still_failures() {
        let err = interpret_response(HttpResponse::new(201, b"{}".to_vec())).unwrap_err();
        assert_eq!(err.status(), Some(201));
    }

    #[test]
    fn ok_with_garbage_body_is_invalid_response() {
        let err = interpret_response(HttpResponse::new(200, b"<html>".to_vec())).unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::InvalidResponse(_))));
    }
}
