use crate::interactor::scanner_interactor::ScannerInteractor;
use crate::view::scanner_view::ScannerView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait ScannerPresenter: Send + Sync {
    async fn show_token_score(&self, token_address: &str) -> Result<()>;
    async fn show_trending(&self) -> Result<()>;
}

pub struct ScannerPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> ScannerPresenterImpl<I, V>
where
    I: ScannerInteractor,
    V: ScannerView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> ScannerPresenter for ScannerPresenterImpl<I, V>
where
    I: ScannerInteractor + Send + Sync,
    V: ScannerView + Send + Sync,
{
    async fn show_token_score(&self, token_address: &str) -> Result<()> {
        match self.interactor.get_token_quote(token_address).await {
            Ok(quote) => {
                self.view.display_token_score(quote).await?;
            }
            Err(e) => {
                self.view.display_error(e.to_string()).await?;
            }
        }

        Ok(())
    }

    async fn show_trending(&self) -> Result<()> {
        self.view.display_loading().await?;

        match self.interactor.get_trending().await {
            Ok(quotes) => {
                self.view.display_trending(quotes).await?;
            }
            Err(e) => {
                self.view.display_error(e.to_string()).await?;
            }
        }

        Ok(())
    }
}
