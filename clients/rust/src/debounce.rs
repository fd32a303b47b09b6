use std::time::Duration;
use tokio::{
    sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};

/// Holds back search input until typing pauses.
///
/// Every pushed value restarts the delay. A value is only delivered once
/// the delay passes without newer input, so only the latest value of a
/// burst reaches the receiver. Closing the debouncer delivers a pending
/// value right away.
pub struct SearchDebouncer {
    input: UnboundedSender<String>,
    task: JoinHandle<()>,
}

impl SearchDebouncer {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

    /// Spawns the debouncer on the current tokio runtime. Settled values
    /// arrive on the returned receiver.
    pub fn new(delay: Duration) -> (Self, UnboundedReceiver<String>) {
        let (input, mut pushed) = unbounded_channel::<String>();
        let (settled, output) = unbounded_channel();

        let task = tokio::spawn(async move {
            let mut pending: Option<String> = None;
            loop {
                match pending.take() {
                    None => match pushed.recv().await {
                        Some(value) => pending = Some(value),
                        None => break,
                    },
                    Some(value) => {
                        tokio::select! {
                            next = pushed.recv() => match next {
                                Some(next) => pending = Some(next),
                                None => {
                                    let _ = settled.send(value);
                                    break;
                                }
                            },
                            _ = tokio::time::sleep(delay) => {
                                if settled.send(value).is_err() {
                                    break;
                                }
                            }
                        }
                    }
                }
            }
        });

        (Self { input, task }, output)
    }

    pub fn push(&self, value: impl Into<String>) {
        // The task only stops once the input is dropped or the receiver is gone
        let _ = self.input.send(value.into());
    }

    /// Delivers any pending value and waits for the debouncer to stop
    pub async fn close(self) {
        drop(self.input);
        let _ = self.task.await;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn only_the_last_value_of_a_burst_is_delivered() {
        let (debouncer, mut settled) = SearchDebouncer::new(SearchDebouncer::DEFAULT_DELAY);

        debouncer.push("a");
        advance(Duration::from_millis(100)).await;
        debouncer.push("an");
        advance(Duration::from_millis(100)).await;
        debouncer.push("ann");
        advance(Duration::from_millis(299)).await;
        assert!(settled.try_recv().is_err());

        assert_eq!(settled.recv().await, Some("ann".to_string()));
        debouncer.close().await;
        assert_eq!(settled.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn values_after_a_pause_are_delivered_separately() {
        let (debouncer, mut settled) = SearchDebouncer::new(SearchDebouncer::DEFAULT_DELAY);

        debouncer.push("ann");
        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.push("bob");
        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.close().await;

        assert_eq!(settled.recv().await, Some("ann".to_string()));
        assert_eq!(settled.recv().await, Some("bob".to_string()));
        assert_eq!(settled.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn closing_flushes_the_pending_value() {
        let (debouncer, mut settled) = SearchDebouncer::new(Duration::from_secs(10));

        debouncer.push("pending");
        debouncer.close().await;

        assert_eq!(settled.recv().await, Some("pending".to_string()));
        assert_eq!(settled.recv().await, None);
    }
}
