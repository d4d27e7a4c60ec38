//! Background task evicting participants that stopped sending heartbeats.

use std::time::Duration;

use tokio::{
    sync::oneshot,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};

use crate::{domain::Timestamp, usecase::SweepStaleParticipantsUseCase};

/// Handle to the running sweeper task
pub struct LivenessSweeper {
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl LivenessSweeper {
    /// Spawn the sweeper. The first sweep runs one full `interval` after start.
    pub fn spawn(usecase: SweepStaleParticipantsUseCase, interval: Duration) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = ticker.tick() => sweep_once(&usecase).await,
                }
            }
            tracing::info!("Liveness sweeper stopped");
        });
        tracing::info!("Liveness sweeper started (interval: {:?})", interval);

        Self {
            shutdown_tx: Some(shutdown_tx),
            handle,
        }
    }

    /// Stop the task and wait for an in-flight sweep to finish.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Err(e) = self.handle.await {
            tracing::error!("Liveness sweeper task failed: {}", e);
        }
    }
}

async fn sweep_once(usecase: &SweepStaleParticipantsUseCase) {
    match usecase.execute(Timestamp::now()).await {
        Ok(report) if report.evicted.is_empty() && report.failed.is_empty() => {
            tracing::debug!("Sweep tick: nobody to evict");
        }
        Ok(report) => {
            tracing::info!(
                "Sweep tick: evicted {}, failed {}",
                report.evicted.len(),
                report.failed.len()
            );
        }
        Err(e) => {
            tracing::error!("Sweep tick failed: {}", e);
        }
    }
}
