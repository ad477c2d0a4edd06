use crate::header::with_header;
use html_escape::encode_text;
use std::io::Cursor;
use tiny_http::{Response, StatusCode};

/// A request that ends in an HTTP error instead of file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    pub status: u16,
    pub message: String,
}

impl ErrorPage {
    pub fn new<M: Into<String>>(status: u16, message: M) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request<M: Into<String>>(message: M) -> Self {
        Self::new(400, message)
    }

    pub fn forbidden() -> Self {
        Self::new(403, "Forbidden")
    }

    pub fn not_found() -> Self {
        Self::new(404, "File not found")
    }

    pub fn not_implemented(method: &str) -> Self {
        Self::new(501, format!("Unsupported method ('{method}')"))
    }

    pub fn reason(&self) -> &'static str {
        StatusCode(self.status).default_reason_phrase()
    }
}

impl From<ErrorPage> for Response<Cursor<Vec<u8>>> {
    fn from(value: ErrorPage) -> Self {
        let html = format!(
            r#"<!DOCTYPE HTML>
<html lang="en">
    <head>
        <meta charset="utf-8">
        <title>Error response</title>
    </head>
    <body>
        <h1>Error response</h1>
        <p>Error code: {status}</p>
        <p>Message: {message}.</p>
        <p>Error code explanation: {status} - {reason}.</p>
    </body>
</html>
"#,
            status = value.status,
            message = encode_text(&value.message),
            reason = value.reason(),
        );

        let response = Response::from_string(html).with_status_code(value.status);

        with_header(response, "content-type", "text/html; charset=utf-8")
    }
}
