use std::{
    convert::Infallible,
    pin::Pin,
    task::{Context, Poll},
};

use bytes::Bytes;
use futures::{future, Future};
use http::{Response, StatusCode};
use http_body_util::Full;
use tower::Service;

pub const GREETING: &str = "Hello, world 🤪";

/// Catch-all service: answers every request with 200 and a fixed body,
/// without looking at the request at all. No content-type is set; hyper's
/// defaults apply.
#[derive(Debug, Clone)]
pub struct FixedResponder {
    body: Bytes,
}

impl FixedResponder {
    pub fn new(body: impl Into<Bytes>) -> Self {
        FixedResponder { body: body.into() }
    }

    pub fn greeting() -> Self {
        FixedResponder::new(Bytes::from_static(GREETING.as_bytes()))
    }
}

impl<Req> Service<Req> for FixedResponder {
    type Response = Response<Full<Bytes>>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _: Req) -> Self::Future {
        let response = Response::builder()
            .status(StatusCode::OK)
            .body(Full::new(self.body.clone()))
            .unwrap();
        Box::pin(future::ready(Ok(response)))
    }
}
