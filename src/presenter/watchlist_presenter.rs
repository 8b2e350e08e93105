use crate::interactor::watchlist_interactor::WatchlistInteractor;
use crate::view::watchlist_view::WatchlistView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait WatchlistPresenter: Send + Sync {
    async fn show_watchlist(&self, chat_id: i64) -> Result<()>;
    async fn add_to_watchlist(
        &self,
        chat_id: i64,
        token_address: &str,
        alert_threshold: Option<f64>,
    ) -> Result<()>;
    async fn remove_from_watchlist(&self, chat_id: i64, id: i32) -> Result<()>;
    async fn show_usage(&self, usage: &str) -> Result<()>;
}

pub struct WatchlistPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> WatchlistPresenterImpl<I, V>
where
    I: WatchlistInteractor,
    V: WatchlistView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> WatchlistPresenter for WatchlistPresenterImpl<I, V>
where
    I: WatchlistInteractor + Send + Sync,
    V: WatchlistView + Send + Sync,
{
    async fn show_watchlist(&self, chat_id: i64) -> Result<()> {
        match self.interactor.get_watchlist(chat_id).await {
            Ok(watchlist) => {
                self.view.display_watchlist(watchlist).await?;
            }
            Err(e) => {
                self.view.display_error(e.to_string()).await?;
            }
        }

        Ok(())
    }

    async fn add_to_watchlist(
        &self,
        chat_id: i64,
        token_address: &str,
        alert_threshold: Option<f64>,
    ) -> Result<()> {
        match self
            .interactor
            .add_to_watchlist(chat_id, token_address, alert_threshold)
            .await
        {
            Ok(entry) => {
                self.view.display_token_added(entry).await?;
            }
            Err(e) => {
                self.view.display_error(e.to_string()).await?;
            }
        }

        Ok(())
    }

    async fn remove_from_watchlist(&self, chat_id: i64, id: i32) -> Result<()> {
        match self.interactor.remove_from_watchlist(chat_id, id).await {
            Ok(Some(entry)) => {
                self.view.display_token_removed(entry).await?;
            }
            Ok(None) => {
                self.view.display_entry_not_found(id).await?;
            }
            Err(e) => {
                self.view.display_error(e.to_string()).await?;
            }
        }

        Ok(())
    }

    async fn show_usage(&self, usage: &str) -> Result<()> {
        self.view.display_usage(usage).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{WatchEntry, WatchlistItem};
    use anyhow::anyhow;
    use chrono::Utc;
    use std::sync::Mutex;

    struct StubInteractor;

    fn entry(id: i32) -> WatchEntry {
        WatchEntry {
            id,
            contract_address: "TokenA".to_string(),
            symbol: "TKA".to_string(),
            name: None,
            network: None,
            initial_price: Some(1.0),
            chat_id: Some(10),
            alert_threshold: None,
            last_alerted_at: None,
            created_at: Utc::now(),
        }
    }

    #[async_trait]
    impl WatchlistInteractor for StubInteractor {
        async fn get_watchlist(&self, _chat_id: i64) -> Result<Vec<WatchlistItem>> {
            Err(anyhow!("database unavailable"))
        }

        async fn add_to_watchlist(
            &self,
            _chat_id: i64,
            _token_address: &str,
            _alert_threshold: Option<f64>,
        ) -> Result<WatchEntry> {
            Ok(entry(3))
        }

        async fn remove_from_watchlist(&self, _chat_id: i64, id: i32) -> Result<Option<WatchEntry>> {
            Ok(if id == 3 { Some(entry(3)) } else { None })
        }
    }

    #[derive(Default)]
    struct RecordingView {
        events: Mutex<Vec<String>>,
    }

    impl RecordingView {
        fn record(&self, event: String) -> Result<()> {
            self.events.lock().unwrap().push(event);
            Ok(())
        }
    }

    #[async_trait]
    impl WatchlistView for RecordingView {
        async fn display_watchlist(&self, watchlist: Vec<WatchlistItem>) -> Result<()> {
            self.record(format!("list:{}", watchlist.len()))
        }
        async fn display_empty_watchlist(&self) -> Result<()> {
            self.record("empty".to_string())
        }
        async fn display_token_added(&self, entry: WatchEntry) -> Result<()> {
            self.record(format!("added:{}", entry.id))
        }
        async fn display_token_removed(&self, entry: WatchEntry) -> Result<()> {
            self.record(format!("removed:{}", entry.id))
        }
        async fn display_entry_not_found(&self, id: i32) -> Result<()> {
            self.record(format!("not_found:{}", id))
        }
        async fn display_usage(&self, usage: &str) -> Result<()> {
            self.record(format!("usage:{}", usage))
        }
        async fn display_error(&self, error_message: String) -> Result<()> {
            self.record(format!("error:{}", error_message))
        }
    }

    #[tokio::test]
    async fn routes_interactor_results_to_view() {
        let view = Arc::new(RecordingView::default());
        let presenter = WatchlistPresenterImpl::new(Arc::new(StubInteractor), view.clone());

        presenter.show_watchlist(10).await.unwrap();
        presenter.add_to_watchlist(10, "TokenA", None).await.unwrap();
        presenter.remove_from_watchlist(10, 3).await.unwrap();
        presenter.remove_from_watchlist(10, 99).await.unwrap();

        let events = view.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                "error:database unavailable".to_string(),
                "added:3".to_string(),
                "removed:3".to_string(),
                "not_found:99".to_string(),
            ]
        );
    }
}
