use crate::header::with_header;
use anyhow::Result;
use chrono::{DateTime, Utc};
use mime_guess::{Mime, from_path};
use std::{fs::File as FsFile, path::PathBuf, time::SystemTime};
use tiny_http::{Response, ResponseBox};

static HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

#[derive(Clone)]
pub struct File {
    pub path: PathBuf,
    pub mime: Mime,
    pub size: u64,
    pub modified: Option<DateTime<Utc>>,
}

impl File {
    pub fn new(path: PathBuf) -> Result<Self> {
        let mime = from_path(&path).first_or_octet_stream();
        let metadata = FsFile::open(&path).and_then(|file| file.metadata())?;

        Ok(Self {
            path,
            mime,
            size: metadata.len(),
            modified: metadata.modified().ok().map(DateTime::<Utc>::from),
        })
    }

    /// Streams the file, or answers `304` when the client copy is still current.
    pub fn get_response(&self, if_modified_since: Option<&str>) -> Result<ResponseBox> {
        if self.is_unmodified_since(if_modified_since) {
            return Ok(Response::empty(304).boxed());
        }

        let fs_file = FsFile::open(&self.path)?;
        let mut response = Response::from_file(fs_file);

        response = with_header(response, "content-type", self.mime.essence_str());

        if let Some(modified) = self.modified {
            response = with_header(
                response,
                "last-modified",
                modified.format(HTTP_DATE).to_string(),
            );
        }

        Ok(response.boxed())
    }

    fn is_unmodified_since(&self, if_modified_since: Option<&str>) -> bool {
        let (Some(value), Some(modified)) = (if_modified_since, self.modified) else {
            return false;
        };

        let Ok(since) = DateTime::parse_from_rfc2822(value.trim()) else {
            return false;
        };

        modified.timestamp() <= since.timestamp()
    }
}
