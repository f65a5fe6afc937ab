//! Timer driven truck motion
//!
//! [`TruckSimulator::start`] spawns a task owning the truck position. The
//! position is published on a [`tokio::sync::watch`] channel; the task is
//! the only writer. The task stops when [`TruckSimulator::stop`] is called
//! or the simulator is dropped.

use super::{TruckMotion, TruckPosition};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Handle on a running truck simulation.
#[derive(Debug)]
pub struct TruckSimulator {
    receiver: watch::Receiver<TruckPosition>,
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl TruckSimulator {
    /// Starts simulating `motion`. Must be called from within a tokio
    /// runtime.
    ///
    /// # Panics
    /// A drift with a zero interval panics, as [`tokio::time::interval`]
    /// does.
    pub fn start(motion: TruckMotion) -> Self {
        let (sender, receiver) = watch::channel(motion.position_after(0));
        let token = CancellationToken::new();

        truck_info!(
            "(start) truck at {}, motion: {:?}.",
            motion.origin(),
            motion
        );

        let handle = match motion {
            TruckMotion::Static(_) => tokio::spawn(park(sender, token.clone())),
            TruckMotion::Drift { interval, .. } => {
                tokio::spawn(drift(sender, motion, interval, token.clone()))
            }
        };

        Self {
            receiver,
            token,
            handle: Some(handle),
        }
    }

    /// A receiver notified on every move.
    pub fn subscribe(&self) -> watch::Receiver<TruckPosition> {
        self.receiver.clone()
    }

    /// The latest published position.
    pub fn current(&self) -> TruckPosition {
        *self.receiver.borrow()
    }

    /// Cancels the timer and waits for the task to finish. No position is
    /// published once this returns.
    pub async fn stop(mut self) {
        self.token.cancel();

        let Some(handle) = self.handle.take() else {
            return;
        };

        if let Err(e) = handle.await {
            truck_error!("(stop) simulator task failed: {}", e);
            return;
        }

        truck_info!("(stop) simulator stopped at {:?}.", self.current());
    }
}

impl Drop for TruckSimulator {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Keeps the channel open for a truck that never moves.
async fn park(sender: watch::Sender<TruckPosition>, token: CancellationToken) {
    token.cancelled().await;
    truck_debug!("(park) released {:?}.", *sender.borrow());
}

async fn drift(
    sender: watch::Sender<TruckPosition>,
    motion: TruckMotion,
    interval: Duration,
    token: CancellationToken,
) {
    // first move one full interval after start
    let mut timer = tokio::time::interval_at(Instant::now() + interval, interval);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut ticks: u64 = 0;

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                truck_debug!("(drift) cancelled after {} ticks.", ticks);
                break;
            }
            _ = timer.tick() => {
                ticks += 1;
                let position = motion.position_after(ticks);
                truck_debug!("(drift) tick {}: truck at {}.", ticks, position.point);

                if sender.send(position).is_err() {
                    truck_warn!("(drift) no receiver left, stopping.");
                    break;
                }
            }
        }
    }
}
