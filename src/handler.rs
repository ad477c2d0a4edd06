use crate::{
    error::ErrorPage,
    file::File,
    header::{find, with_header},
    listing::Listing,
    resolve::{Target, resolve},
};
use std::{io::Cursor, path::PathBuf};
use tiny_http::{Method, Request, Response, ResponseBox};

/// One stage of the request pipeline.
pub trait Handler {
    fn handle(&self, request: &Request) -> ResponseBox;
}

/// Serves files and directory listings from a fixed root.
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn serve(&self, request: &Request) -> Result<ResponseBox, ErrorPage> {
        match request.method() {
            Method::Get | Method::Head => {}
            method => return Err(ErrorPage::not_implemented(method.as_str())),
        }

        match resolve(&self.root, request.url())? {
            Target::File(path) => {
                let file = File::new(path).map_err(|_| ErrorPage::not_found())?;

                // An entity tag always wins over a date
                let if_modified_since = match find(request.headers(), "If-None-Match") {
                    Some(_) => None,
                    None => find(request.headers(), "If-Modified-Since"),
                };

                file.get_response(if_modified_since)
                    .map_err(|_| ErrorPage::not_found())
            }
            Target::Directory { path, display } => Listing::new(&path, &display)
                .map(|listing| Response::<Cursor<Vec<u8>>>::from(listing).boxed())
                .map_err(|_| ErrorPage::new(404, "No permission to list directory")),
            Target::Redirect(location) => {
                Ok(with_header(Response::empty(301), "location", location).boxed())
            }
        }
    }
}

impl Handler for StaticFiles {
    fn handle(&self, request: &Request) -> ResponseBox {
        self.serve(request)
            .unwrap_or_else(|error| Response::<Cursor<Vec<u8>>>::from(error).boxed())
    }
}
