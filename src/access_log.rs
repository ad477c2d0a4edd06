use crate::handler::Handler;
use chrono::{DateTime, Local, TimeZone};
use std::{
    fmt::Display,
    io::{Write, stdout},
};
use tiny_http::{Request, ResponseBox};

static TIMESTAMP: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Prints one line per request once its response is ready.
pub struct AccessLog<H> {
    inner: H,
}

impl<H: Handler> AccessLog<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: Handler> Handler for AccessLog<H> {
    fn handle(&self, request: &Request) -> ResponseBox {
        let response = self.inner.handle(request);

        println!(
            "{}",
            format_line(&Local::now(), &request_line(request), response.status_code().0)
        );
        let _ = stdout().flush();

        response
    }
}

pub fn request_line(request: &Request) -> String {
    let version = request.http_version();

    format!(
        "{} {} HTTP/{}.{}",
        request.method(),
        request.url(),
        version.0,
        version.1
    )
}

pub fn format_line<Tz>(time: &DateTime<Tz>, request_line: &str, status: u16) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        r#"[{}] "{request_line}" {status} -"#,
        time.format(TIMESTAMP)
    )
}
