use crate::{handler::Handler, header::with_header};
use tiny_http::{Request, ResponseBox};

/// Lets any origin read every response, whatever its status.
pub struct Cors<H> {
    inner: H,
}

impl<H: Handler> Cors<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: Handler> Handler for Cors<H> {
    fn handle(&self, request: &Request) -> ResponseBox {
        with_header(
            self.inner.handle(request),
            "access-control-allow-origin",
            "*",
        )
    }
}
