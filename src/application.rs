use futures::{stream::FuturesUnordered, StreamExt};
use tokio::signal::unix::{signal, SignalKind};

use crate::server::Server;

/// Runs a set of servers until all of them finish, cancelling every one of
/// them when the process receives SIGINT or SIGTERM.
#[derive(Default)]
pub struct Application {
    servers: Vec<Box<dyn Server<Error = anyhow::Error>>>,
}

impl Application {
    pub fn new() -> Self {
        Application::default()
    }

    pub fn server(mut self, srv: impl Server<Error = anyhow::Error> + 'static) -> Application {
        self.servers.push(Box::new(srv));
        self
    }

    pub async fn serve_all(mut self) -> anyhow::Result<()> {
        let cancel_tokens = self
            .servers
            .iter()
            .map(|srv| srv.cancel_token())
            .collect::<Vec<_>>();

        let signal_handle = tokio::spawn(async move {
            let mut sigterm = signal(SignalKind::terminate()).unwrap();
            let mut sigint = signal(SignalKind::interrupt()).unwrap();

            tokio::select! {
                _ = sigterm.recv() => log::info!("received SIGTERM, shutting down"),
                _ = sigint.recv() => log::info!("received SIGINT, shutting down"),
            }
            cancel_tokens.iter().for_each(|token| token.cancel());
        });

        let results = self
            .servers
            .iter_mut()
            .map(|srv| srv.serve())
            .collect::<FuturesUnordered<_>>()
            .collect::<Vec<_>>()
            .await;

        signal_handle.abort();

        results.into_iter().collect::<Result<(), _>>()
    }
}
