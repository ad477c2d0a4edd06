use crate::error::ErrorPage;
use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};

static INDEX_FILES: [&str; 2] = ["index.html", "index.htm"];

/// What a request path points at inside the root directory.
#[derive(Debug, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Directory { path: PathBuf, display: String },
    Redirect(String),
}

/// Maps a raw request target onto the filesystem under `root`.
///
/// `root` must already be canonical. Anything that would escape it, by `..`
/// segments or by symlinks, is refused.
pub fn resolve(root: &Path, url: &str) -> Result<Target, ErrorPage> {
    let (path, query) = split_url(url);

    if !path.starts_with('/') {
        return Err(ErrorPage::bad_request("Bad request path"));
    }

    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map_err(|_| ErrorPage::bad_request("Bad request path"))?;

    if decoded.contains('\0') {
        return Err(ErrorPage::bad_request("Bad request path"));
    }

    let mut relative = PathBuf::new();

    for segment in decoded.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return Err(ErrorPage::forbidden()),
            segment => relative.push(segment),
        }
    }

    let path_buf = contained(root, &root.join(relative))?;

    if !path_buf.is_dir() {
        if path.ends_with('/') {
            return Err(ErrorPage::not_found());
        }

        return Ok(Target::File(path_buf));
    }

    if !path.ends_with('/') {
        return Ok(Target::Redirect(format!("{path}/{query}")));
    }

    for index in INDEX_FILES {
        let index = path_buf.join(index);

        if index.is_file() {
            return contained(root, &index).map(Target::File);
        }
    }

    Ok(Target::Directory {
        path: path_buf,
        display: decoded.into_owned(),
    })
}

/// Splits off `?query` (kept for redirects) and drops any `#fragment`.
fn split_url(url: &str) -> (&str, &str) {
    let url = url.split('#').next().unwrap_or_default();

    match url.find('?') {
        Some(index) => url.split_at(index),
        None => (url, ""),
    }
}

fn contained(root: &Path, path: &Path) -> Result<PathBuf, ErrorPage> {
    let canonical = path.canonicalize().map_err(|_| ErrorPage::not_found())?;

    if canonical.starts_with(root) {
        Ok(canonical)
    } else {
        Err(ErrorPage::forbidden())
    }
}
