use crate::header::with_header;
use anyhow::Result;
use html_escape::{encode_double_quoted_attribute, encode_text};
use natord::compare_ignore_case;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::{fs::read_dir, io::Cursor, path::Path};
use tiny_http::Response;

// Everything but unreserved characters and the path separator.
const LINK: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

struct Entry {
    name: String,
    is_dir: bool,
    is_symlink: bool,
}

pub struct Listing {
    display: String,
    entries: Vec<Entry>,
}

impl Listing {
    pub fn new(path: &Path, display: &str) -> Result<Self> {
        let mut entries = vec![];

        for entry in read_dir(path)? {
            let Ok(entry) = entry else { continue };
            let is_symlink = entry
                .file_type()
                .is_ok_and(|file_type| file_type.is_symlink());

            entries.push(Entry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.path().is_dir(),
                is_symlink,
            });
        }

        entries.sort_by(|a, b| compare_ignore_case(&a.name, &b.name));

        Ok(Self {
            display: display.into(),
            entries,
        })
    }
}

impl From<Listing> for Response<Cursor<Vec<u8>>> {
    fn from(value: Listing) -> Self {
        let title = format!("Directory listing for {}", encode_text(&value.display));

        let mut entry_elements = String::new();

        for entry in &value.entries {
            let link = if entry.is_dir {
                format!("{}/", entry.name)
            } else {
                entry.name.clone()
            };

            // A symlinked directory links with `/` but is labelled with `@`
            let label = if entry.is_symlink {
                format!("{}@", entry.name)
            } else {
                link.clone()
            };

            let href = utf8_percent_encode(&link, LINK).to_string();

            entry_elements += &format!(
                "\n            <li><a href=\"{}\">{}</a></li>",
                encode_double_quoted_attribute(&href),
                encode_text(&label),
            );
        }

        let html = format!(
            r#"<!DOCTYPE HTML>
<html lang="en">
    <head>
        <meta charset="utf-8">
        <title>{title}</title>
    </head>
    <body>
        <h1>{title}</h1>
        <hr>
        <ul>{entry_elements}
        </ul>
        <hr>
    </body>
</html>
"#
        );

        with_header(
            Response::from_string(html),
            "content-type",
            "text/html; charset=utf-8",
        )
    }
}
