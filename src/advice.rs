use anyhow::{Context, Result};
use log::{debug, error, info};
use serde::Deserialize;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

pub const ADVICE_URL: &str = "https://api.adviceslip.com/advice";
pub const ADVICE_PREFIX: &str = "💡 Programmer's maxim: ";
pub const ADVICE_FALLBACK: &str = "❌ Failed to fetch data, please check your network connection.";

#[derive(Deserialize, Debug)]
struct AdviceResponse {
    slip: Slip,
}

#[derive(Deserialize, Debug)]
struct Slip {
    advice: String,
}

/// Extracts `slip.advice` from an advice API response body.
pub fn parse_advice(body: &str) -> Result<String> {
    let response: AdviceResponse =
        serde_json::from_str(body).context("failed to parse advice response")?;
    Ok(response.slip.advice)
}

/// GETs the advice endpoint and returns the advice text.
pub fn fetch_advice() -> Result<String> {
    let body = reqwest::blocking::get(ADVICE_URL)
        .with_context(|| format!("request to {ADVICE_URL} failed"))?
        .error_for_status()
        .context("advice endpoint returned an error status")?
        .text()
        .context("failed to read advice response body")?;
    parse_advice(&body)
}

/// Text the About paragraph shows for a finished fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum AdviceOutcome {
    /// Decorated advice, shown with emphasis.
    Advice(String),
    Fallback,
}

impl AdviceOutcome {
    pub fn from_result(result: Result<String>) -> Self {
        match result {
            Ok(advice) => AdviceOutcome::Advice(format!("{ADVICE_PREFIX}{advice}")),
            Err(e) => {
                error!("advice fetch failed: {e:#}");
                AdviceOutcome::Fallback
            }
        }
    }

    pub fn text(&self) -> &str {
        match self {
            AdviceOutcome::Advice(text) => text,
            AdviceOutcome::Fallback => ADVICE_FALLBACK,
        }
    }

    pub fn is_emphasized(&self) -> bool {
        matches!(self, AdviceOutcome::Advice(_))
    }
}

/// Runs at most one fetch at a time on a background thread and hands the
/// result back through a channel.
#[derive(Default)]
pub struct AdviceFetcher {
    pending: Option<Receiver<Result<String>>>,
}

impl AdviceFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a fetch against the real endpoint.
    pub fn start(&mut self) -> bool {
        self.start_with(fetch_advice)
    }

    /// Starts a fetch using `source`. Ignored (returns false) while another
    /// fetch is still in flight; in-flight fetches cannot be cancelled.
    pub fn start_with<F>(&mut self, source: F) -> bool
    where
        F: FnOnce() -> Result<String> + Send + 'static,
    {
        if self.pending.is_some() {
            debug!("advice fetch already in flight, ignoring request");
            return false;
        }
        info!("fetching advice");
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // The receiver may be gone if the app quit first.
            let _ = tx.send(source());
        });
        self.pending = Some(rx);
        true
    }

    /// Non-blocking check for a finished fetch.
    pub fn poll(&mut self) -> Option<AdviceOutcome> {
        let rx = self.pending.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                Err(anyhow::anyhow!("advice worker exited without a result"))
            }
        };
        self.pending = None;
        Some(finish(result))
    }

    /// Blocks up to `timeout` for the pending fetch. Used by the `advice`
    /// subcommand, which has no event loop.
    pub fn wait(&mut self, timeout: Duration) -> Option<AdviceOutcome> {
        let rx = self.pending.as_ref()?;
        let result = match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => return None,
            Err(RecvTimeoutError::Disconnected) => {
                Err(anyhow::anyhow!("advice worker exited without a result"))
            }
        };
        self.pending = None;
        Some(finish(result))
    }
}

fn finish(result: Result<String>) -> AdviceOutcome {
    if result.is_ok() {
        info!("advice fetched");
    }
    AdviceOutcome::from_result(result)
}
