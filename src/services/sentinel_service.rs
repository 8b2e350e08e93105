use crate::entity::PassSummary;
use crate::interactor::sentinel_interactor::SentinelInteractor;
use anyhow::{anyhow, Result};
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::select;
use tokio::sync::mpsc;
use tokio::time::{interval, timeout, Instant, MissedTickBehavior};

/// Schedules sentinel passes on a fixed interval
pub struct SentinelService {
    sentinel: Arc<dyn SentinelInteractor + Send + Sync>,
    interval: Duration,
    pass_timeout: Duration,
    stop_tx: Option<mpsc::Sender<()>>,
}

impl SentinelService {
    pub fn new(
        sentinel: Arc<dyn SentinelInteractor + Send + Sync>,
        interval: Duration,
        pass_timeout: Duration,
    ) -> Self {
        Self {
            sentinel,
            interval,
            pass_timeout,
            stop_tx: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.stop_tx.is_some()
    }

    // Start the background loop; the first pass runs immediately
    pub async fn start(&mut self) -> Result<()> {
        if self.stop_tx.is_some() {
            warn!("Sentinel service is already running");
            return Ok(());
        }

        let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);
        self.stop_tx = Some(stop_tx);

        let sentinel = self.sentinel.clone();
        let period = self.interval;
        let pass_timeout = self.pass_timeout;

        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut last_run = Instant::now();

            loop {
                select! {
                    _ = ticker.tick() => {
                        debug!("Running sentinel pass (last run: {:.2?} ago)", last_run.elapsed());

                        if let Err(e) = bounded_pass(sentinel.as_ref(), pass_timeout).await {
                            error!("Sentinel pass failed: {}", e);
                        }

                        last_run = Instant::now();
                    }
                    _ = stop_rx.recv() => {
                        info!("Stopping sentinel service");
                        break;
                    }
                }
            }
        });

        info!(
            "Sentinel service started (interval: {:?}, pass timeout: {:?})",
            self.interval, self.pass_timeout
        );
        Ok(())
    }

    // Stop the background loop
    pub async fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(()).await;
            info!("Sentinel service stop signal sent");
        }
    }

    /// Run a single pass bounded by the pass timeout
    pub async fn run_once(&self) -> Result<PassSummary> {
        bounded_pass(self.sentinel.as_ref(), self.pass_timeout).await
    }
}

/// Run one pass, failing if it does not finish within `pass_timeout`
pub async fn bounded_pass(
    sentinel: &(dyn SentinelInteractor + Send + Sync),
    pass_timeout: Duration,
) -> Result<PassSummary> {
    match timeout(pass_timeout, sentinel.run_pass()).await {
        Ok(result) => result.map_err(|e| anyhow!("{}", e)),
        Err(_) => Err(anyhow!(
            "Sentinel pass did not finish within {:?}",
            pass_timeout
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::SentinelError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSentinel {
        passes: AtomicUsize,
        delay: Duration,
    }

    #[async_trait]
    impl SentinelInteractor for CountingSentinel {
        async fn run_pass(&self) -> Result<PassSummary, SentinelError> {
            tokio::time::sleep(self.delay).await;
            self.passes.fetch_add(1, Ordering::SeqCst);
            Ok(PassSummary {
                items_checked: 2,
                alerts_sent: 1,
                ..PassSummary::default()
            })
        }
    }

    #[tokio::test]
    async fn run_once_returns_summary() {
        let sentinel = Arc::new(CountingSentinel {
            passes: AtomicUsize::new(0),
            delay: Duration::ZERO,
        });
        let service = SentinelService::new(
            sentinel.clone(),
            Duration::from_secs(60),
            Duration::from_secs(5),
        );

        let summary = service.run_once().await.unwrap();
        assert_eq!(summary.items_checked, 2);
        assert_eq!(summary.alerts_sent, 1);
        assert_eq!(sentinel.passes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn hung_pass_is_cut_off_by_timeout() {
        let sentinel = Arc::new(CountingSentinel {
            passes: AtomicUsize::new(0),
            delay: Duration::from_secs(3600),
        });
        let service = SentinelService::new(
            sentinel,
            Duration::from_secs(60),
            Duration::from_millis(20),
        );

        assert!(service.run_once().await.is_err());
    }

    #[tokio::test]
    async fn start_runs_first_pass_and_stop_ends_loop() {
        let sentinel = Arc::new(CountingSentinel {
            passes: AtomicUsize::new(0),
            delay: Duration::ZERO,
        });
        let mut service = SentinelService::new(
            sentinel.clone(),
            Duration::from_secs(3600),
            Duration::from_secs(5),
        );

        service.start().await.unwrap();
        assert!(service.is_running());
        service.start().await.unwrap();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(sentinel.passes.load(Ordering::SeqCst), 1);

        service.stop().await;
        assert!(!service.is_running());
    }
}
