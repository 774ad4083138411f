use std::net::SocketAddr;

use hello_responder::application::Application;
use hello_responder::config::Config;
use hello_responder::responder::FixedResponder;
use hello_responder::server::h1::HttpServerBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let config = Config::from_env()?;

    let srv = HttpServerBuilder::default()
        .bind(SocketAddr::from(([0, 0, 0, 0], config.port)))
        .service(FixedResponder::greeting())
        .build()?;

    Application::new().server(srv).serve_all().await
}
