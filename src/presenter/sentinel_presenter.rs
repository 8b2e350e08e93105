use crate::interactor::sentinel_interactor::SentinelInteractor;
use crate::services::sentinel_service::bounded_pass;
use crate::view::sentinel_view::SentinelView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

#[async_trait]
pub trait SentinelPresenter: Send + Sync {
    async fn run_now(&self) -> Result<()>;
}

pub struct SentinelPresenterImpl<V> {
    sentinel: Arc<dyn SentinelInteractor + Send + Sync>,
    view: Arc<V>,
    pass_timeout: Duration,
}

impl<V> SentinelPresenterImpl<V>
where
    V: SentinelView,
{
    pub fn new(
        sentinel: Arc<dyn SentinelInteractor + Send + Sync>,
        view: Arc<V>,
        pass_timeout: Duration,
    ) -> Self {
        Self {
            sentinel,
            view,
            pass_timeout,
        }
    }
}

#[async_trait]
impl<V> SentinelPresenter for SentinelPresenterImpl<V>
where
    V: SentinelView + Send + Sync,
{
    async fn run_now(&self) -> Result<()> {
        match bounded_pass(self.sentinel.as_ref(), self.pass_timeout).await {
            Ok(summary) => {
                self.view.display_summary(summary).await?;
            }
            Err(e) => {
                self.view.display_error(e.to_string()).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{PassSummary, SentinelError};
    use std::sync::Mutex;

    struct SlowSentinel {
        delay: Duration,
    }

    #[async_trait]
    impl SentinelInteractor for SlowSentinel {
        async fn run_pass(&self) -> Result<PassSummary, SentinelError> {
            tokio::time::sleep(self.delay).await;
            Ok(PassSummary {
                items_checked: 3,
                ..PassSummary::default()
            })
        }
    }

    #[derive(Default)]
    struct RecordingView {
        events: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SentinelView for RecordingView {
        async fn display_summary(&self, summary: PassSummary) -> Result<()> {
            self.events
                .lock()
                .unwrap()
                .push(format!("summary:{}", summary.items_checked));
            Ok(())
        }

        async fn display_error(&self, error_message: String) -> Result<()> {
            self.events
                .lock()
                .unwrap()
                .push(format!("error:{}", error_message));
            Ok(())
        }
    }

    #[tokio::test]
    async fn reports_summary_of_finished_pass() {
        let view = Arc::new(RecordingView::default());
        let presenter = SentinelPresenterImpl::new(
            Arc::new(SlowSentinel {
                delay: Duration::ZERO,
            }),
            view.clone(),
            Duration::from_secs(5),
        );

        presenter.run_now().await.unwrap();

        assert_eq!(*view.events.lock().unwrap(), vec!["summary:3".to_string()]);
    }

    #[tokio::test]
    async fn manual_run_is_cut_off_by_pass_timeout() {
        let view = Arc::new(RecordingView::default());
        let presenter = SentinelPresenterImpl::new(
            Arc::new(SlowSentinel {
                delay: Duration::from_secs(3600),
            }),
            view.clone(),
            Duration::from_millis(20),
        );

        presenter.run_now().await.unwrap();

        let events = view.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0].starts_with("error:Sentinel pass did not finish"));
    }
}
