use anyhow::{Error, Result};
use std::io::Read;
use tiny_http::{Header, Response};

pub fn header<V>(field: &str, value: V) -> Result<Header>
where
    V: Into<Vec<u8>> + AsRef<[u8]>,
{
    Header::from_bytes(field, value).map_err(|_| Error::msg("Could not create header"))
}

/// Adds a header, leaving the response untouched if the value is not valid header text.
pub fn with_header<R, V>(response: Response<R>, field: &str, value: V) -> Response<R>
where
    R: Read,
    V: Into<Vec<u8>> + AsRef<[u8]>,
{
    match header(field, value) {
        Ok(header) => response.with_header(header),
        Err(_) => response,
    }
}

pub fn find<'a>(headers: &'a [Header], field: &'static str) -> Option<&'a str> {
    headers
        .iter()
        .find(|header| header.field.equiv(field))
        .map(|header| header.value.as_str())
}
