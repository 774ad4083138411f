use tokio_util::sync::CancellationToken;

pub mod h1;

#[async_trait::async_trait]
pub trait Server {
    type Error;

    async fn serve(&mut self) -> Result<(), Self::Error>;

    fn cancel_token(&self) -> CancellationToken;
}
