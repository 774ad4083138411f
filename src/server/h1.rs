use std::fmt::Display;

use anyhow::Context as _;
use bytes::Bytes;
use derive_builder::Builder;
use http::{Request, Response};
use http_body_util::Full;
use hyper::{body::Incoming, server::conn::http1, service::service_fn};
use tokio::net::{TcpListener, ToSocketAddrs};
use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tower::{Service, ServiceExt};

use super::Server;

/// HTTP/1 server that hands every connection to a single catch-all service.
#[derive(Debug, Builder)]
#[builder(pattern = "owned")]
pub struct HttpServer<Address, S> {
    #[builder(setter(name = "bind"))]
    pub listen_addr: Address,

    #[builder(setter(name = "service"))]
    pub responder: S,

    #[builder(default, setter(skip))]
    pub cancel_token: CancellationToken,

    #[builder(default = "http1::Builder::new()")]
    pub hyper_conn_builder: http1::Builder,
}

#[async_trait::async_trait]
impl<Address, S> Server for HttpServer<Address, S>
where
    Address: ToSocketAddrs + Display + Send + Sync,
    S: Service<Request<Incoming>, Response = Response<Full<Bytes>>> + Clone + Send + Sync + 'static,
    S::Error: std::error::Error + Send + Sync + 'static,
    S::Future: Send,
{
    type Error = anyhow::Error;

    fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    async fn serve(&mut self) -> Result<(), Self::Error> {
        let listener = TcpListener::bind(&self.listen_addr)
            .await
            .with_context(|| format!("failed to bind {}", self.listen_addr))?;
        let port = listener.local_addr()?.port();

        // startup lines go to stdout, diagnostics to the log facade
        println!("App listening on port {}", port);
        println!("Press Ctrl+C to quit.");

        let connection_tracker = TaskTracker::new();

        let conn_builder = self.hyper_conn_builder.clone();
        let responder = self.responder.clone();
        let tracker = connection_tracker.clone();
        let child_token = self.cancel_token.child_token();
        let accept_task_handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;

                    _ = child_token.cancelled() => {
                        tracker.close();
                        break;
                    },
                    res = listener.accept() => match res {
                        Ok((inbound, peer_addr)) => {
                            log::debug!("accepted connection from {}", peer_addr);
                            let io = hyper_util::rt::TokioIo::new(inbound);
                            let responder = responder.clone();
                            tracker.spawn(conn_builder.serve_connection(
                                io,
                                service_fn(move |req: Request<Incoming>| {
                                    responder.clone().oneshot(req)
                                }),
                            ));
                        }
                        Err(err) => {
                            log::error!("error accepting connection: {}", err);
                        }
                    }
                }
            }
        });

        accept_task_handle.await?;
        connection_tracker.wait().await; // wait for all the pending connections to complete

        log::info!("HTTP server on port {} stopped", port);
        Ok(())
    }
}
