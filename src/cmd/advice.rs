use crate::advice::{AdviceFetcher, AdviceOutcome};
use anyhow::{anyhow, Result};
use std::time::Duration;

/// Upper bound on how long the one-shot command waits for the worker.
const WAIT: Duration = Duration::from_secs(60);

pub fn run() -> Result<()> {
    let mut fetcher = AdviceFetcher::new();
    fetcher.start();
    println!("{}", await_outcome(&mut fetcher, WAIT).text());
    Ok(())
}

/// Waits for the pending fetch. A timeout goes down the same logged failure
/// path as any other fetch error.
pub(crate) fn await_outcome(fetcher: &mut AdviceFetcher, wait: Duration) -> AdviceOutcome {
    fetcher.wait(wait).unwrap_or_else(|| {
        AdviceOutcome::from_result(Err(anyhow!(
            "no advice after {}ms",
            wait.as_millis()
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn test_await_outcome_returns_advice() {
        let mut fetcher = AdviceFetcher::new();
        fetcher.start_with(|| Ok("Read the docs.".to_string()));
        let outcome = await_outcome(&mut fetcher, Duration::from_secs(5));
        assert!(outcome.is_emphasized());
        assert!(outcome.text().ends_with("Read the docs."));
    }

    #[test]
    fn test_await_outcome_timeout_is_fallback() {
        let (release_tx, release_rx) = channel::<()>();
        let mut fetcher = AdviceFetcher::new();
        fetcher.start_with(move || {
            let _ = release_rx.recv();
            Ok("too late".to_string())
        });
        let outcome = await_outcome(&mut fetcher, Duration::from_millis(10));
        assert_eq!(outcome, AdviceOutcome::Fallback);
        let _ = release_tx.send(());
    }
}
