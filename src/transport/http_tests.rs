//! Tests for HTTP request/response types.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let url = url::Url::parse("https://example.com/api").unwrap();
        let req = HttpRequest::new(http::Method::PUT, url.clone());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, url);
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn get_and_post_set_method() {
        let url = url::Url::parse("https://example.com/").unwrap();

        assert_eq!(HttpRequest::get(url.clone()).method, http::Method::GET);
        assert_eq!(HttpRequest::post(url).method, http::Method::POST);
    }

    #[test]
    fn with_body_sets_body() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::post(url).with_body(b"{}".to_vec());

        assert_eq!(req.body, Some(b"{}".to_vec()));
    }

    #[test]
    fn with_header_replaces_existing_value() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::get(url)
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/html"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 1);
        assert_eq!(
            req.headers.get(http::header::ACCEPT).unwrap(),
            "application/json"
        );
    }
}

mod http_response {
    use super::*;

    fn response(status: u16, body: &[u8]) -> HttpResponse {
        HttpResponse::new(
            http::StatusCode::from_u16(status).unwrap(),
            http::HeaderMap::new(),
            body.to_vec(),
        )
    }

    #[test]
    fn is_success_covers_2xx_only() {
        assert!(response(200, b"").is_success());
        assert!(response(204, b"").is_success());
        assert!(!response(301, b"").is_success());
        assert!(!response(404, b"").is_success());
        assert!(!response(500, b"").is_success());
    }

    #[test]
    fn body_text_returns_utf8() {
        assert_eq!(response(200, b"hello").body_text(), Some("hello"));
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        assert_eq!(response(200, &[0xff, 0xfe]).body_text(), None);
    }

    #[test]
    fn json_parses_body() {
        let resp = response(200, br#"{"Events":[{"code":"CASJ"}]}"#);
        let value: serde_json::Value = resp.json().unwrap();

        assert_eq!(value["Events"][0]["code"], "CASJ");
    }

    #[test]
    fn json_rejects_non_json_body() {
        let resp = response(200, b"<html>");

        assert!(resp.json::<serde_json::Value>().is_err());
    }
}

mod http_client_trait {
    use super::*;

    struct FixedClient {
        status: http::StatusCode,
    }

    impl HttpClient for FixedClient {
        async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            Ok(HttpResponse::new(self.status, http::HeaderMap::new(), vec![]))
        }
    }

    struct FailingClient;

    impl HttpClient for FailingClient {
        async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            Err(HttpError::Timeout)
        }
    }

    #[tokio::test]
    async fn non_success_status_is_still_a_response() {
        let client = FixedClient {
            status: http::StatusCode::NOT_FOUND,
        };
        let url = url::Url::parse("https://example.com/").unwrap();

        let resp = client.request(HttpRequest::get(url)).await.unwrap();

        assert_eq!(resp.status, http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn transport_failure_is_an_error() {
        let url = url::Url::parse("https://example.com/").unwrap();

        let result = FailingClient.request(HttpRequest::get(url)).await;

        assert!(matches!(result, Err(HttpError::Timeout)));
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
        assert_eq!(
            HttpError::InvalidUrl("bad".to_string()).to_string(),
            "Invalid URL: bad"
        );
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert_eq!(
            HttpError::Connection(Box::new(io)).to_string(),
            "Connection error: refused"
        );
    }
}
