use log::{debug, info};
use ratatui::style::Color;
use std::time::{Duration, Instant};

/// Time between two status ticks.
pub const TICK_PERIOD: Duration = Duration::from_millis(3000);

pub const STATUS_PREFIX: &str = "Current status: ";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusRecord {
    pub text: &'static str,
    pub color: Color,
}

pub static STATUSES: [StatusRecord; 4] = [
    StatusRecord {
        text: "🟢 Ready, open to team up",
        color: Color::Green,
    },
    StatusRecord {
        text: "🟡 Matchmaking, please wait",
        color: Color::Rgb(0xff, 0xc1, 0x07),
    },
    StatusRecord {
        text: "🔴 Away from keyboard...",
        color: Color::Red,
    },
    StatusRecord {
        text: "🔵 In game, do not disturb",
        color: Color::Rgb(0x00, 0x7b, 0xff),
    },
];

impl StatusRecord {
    pub fn display_text(&self) -> String {
        format!("{}{}", STATUS_PREFIX, self.text)
    }
}

/// Owns the rotation index and the single repeating timer of the status panel.
///
/// The timer is just the instant of the next due tick; the event loop calls
/// `poll` often enough to notice it. Holding the only handle here means two
/// timers can never be live at once.
#[derive(Debug)]
pub struct StatusDashboard {
    index: usize,
    displayed: Option<usize>,
    next_tick: Option<Instant>,
    mounted: bool,
}

impl Default for StatusDashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusDashboard {
    pub fn new() -> Self {
        StatusDashboard {
            index: 0,
            displayed: None,
            next_tick: None,
            mounted: true,
        }
    }

    /// Record currently on display, if anything has been rendered yet.
    pub fn current(&self) -> Option<&'static StatusRecord> {
        self.displayed.map(|i| &STATUSES[i])
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Renders the current record and advances the index. Called once at
    /// page-ready so the first status shows without waiting for a tick.
    pub fn render_now(&mut self) {
        if !self.mounted {
            return;
        }
        self.displayed = Some(self.index);
        self.index = (self.index + 1) % STATUSES.len();
    }

    /// Starts the timer. A no-op while already running or unmounted.
    pub fn start(&mut self, now: Instant) {
        if self.next_tick.is_some() || !self.mounted {
            return;
        }
        self.next_tick = Some(now + TICK_PERIOD);
        debug!("status timer started");
    }

    pub fn stop(&mut self) {
        if self.next_tick.take().is_some() {
            debug!("status timer stopped");
        }
    }

    /// Stops and starts again; the next tick is a full period after `now`.
    pub fn restart(&mut self, now: Instant) {
        self.stop();
        self.start(now);
    }

    /// The panel went away: stop ticking until it comes back.
    pub fn unmount(&mut self) {
        if self.mounted {
            info!("status panel unmounted");
        }
        self.mounted = false;
        self.stop();
    }

    pub fn mount(&mut self, now: Instant) {
        if !self.mounted {
            info!("status panel mounted");
        }
        self.mounted = true;
        self.start(now);
    }

    /// Fires the tick if it is due. Returns true when a new record was rendered.
    ///
    /// Ticks missed because the loop fell behind are skipped, not replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = match self.next_tick {
            Some(due) if due <= now => due,
            _ => return false,
        };
        if !self.mounted {
            self.stop();
            return false;
        }
        self.render_now();

        let mut next = due + TICK_PERIOD;
        while next <= now {
            next += TICK_PERIOD;
        }
        self.next_tick = Some(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn started() -> (StatusDashboard, Instant) {
        let t0 = Instant::now();
        let mut d = StatusDashboard::new();
        d.render_now();
        d.start(t0);
        (d, t0)
    }

    #[test]
    fn test_first_render_happens_before_any_tick() {
        let (d, _) = started();
        assert_eq!(d.current(), Some(&STATUSES[0]));
        assert!(d.is_running());
    }

    #[test]
    fn test_nothing_rendered_before_render_now() {
        let d = StatusDashboard::new();
        assert!(d.current().is_none());
        assert!(!d.is_running());
    }

    #[test]
    fn test_no_tick_before_period_elapses() {
        let (mut d, t0) = started();
        assert!(!d.poll(t0 + ms(2999)));
        assert_eq!(d.current(), Some(&STATUSES[0]));
    }

    #[test]
    fn test_cycles_in_fixed_order_and_wraps() {
        let (mut d, t0) = started();
        let mut seen = vec![d.current().unwrap().text];
        for i in 1..=4 {
            assert!(d.poll(t0 + TICK_PERIOD * i));
            seen.push(d.current().unwrap().text);
        }
        assert_eq!(
            seen,
            vec![
                STATUSES[0].text,
                STATUSES[1].text,
                STATUSES[2].text,
                STATUSES[3].text,
                STATUSES[0].text,
            ]
        );
    }

    #[test]
    fn test_poll_fires_once_per_due_tick() {
        let (mut d, t0) = started();
        assert!(d.poll(t0 + ms(3000)));
        assert!(!d.poll(t0 + ms(3001)));
        assert!(!d.poll(t0 + ms(5999)));
        assert!(d.poll(t0 + ms(6000)));
    }

    #[test]
    fn test_missed_ticks_are_skipped() {
        let (mut d, t0) = started();
        assert!(d.poll(t0 + ms(10_000)));
        assert_eq!(d.current(), Some(&STATUSES[1]));
        // Next due is 12000, not 6000 or 9000.
        assert!(!d.poll(t0 + ms(11_999)));
        assert!(d.poll(t0 + ms(12_000)));
    }

    #[test]
    fn test_stop_prevents_ticks() {
        let (mut d, t0) = started();
        d.stop();
        assert!(!d.is_running());
        assert!(!d.poll(t0 + ms(30_000)));
        assert_eq!(d.current(), Some(&STATUSES[0]));
    }

    #[test]
    fn test_resume_restarts_window_from_resume_time() {
        let (mut d, t0) = started();
        d.stop();
        let resume = t0 + ms(5000);
        d.start(resume);
        assert!(!d.poll(t0 + ms(6000)));
        assert!(!d.poll(resume + ms(2999)));
        assert!(d.poll(resume + ms(3000)));
        assert_eq!(d.current(), Some(&STATUSES[1]));
    }

    #[test]
    fn test_start_while_running_keeps_due_time() {
        let (mut d, t0) = started();
        d.start(t0 + ms(2000));
        assert!(d.poll(t0 + ms(3000)));
    }

    #[test]
    fn test_restart_resets_window() {
        let (mut d, t0) = started();
        d.restart(t0 + ms(2000));
        assert!(!d.poll(t0 + ms(3000)));
        assert!(d.poll(t0 + ms(5000)));
    }

    #[test]
    fn test_unmount_stops_and_blocks_start() {
        let (mut d, t0) = started();
        d.unmount();
        assert!(!d.is_running());
        d.start(t0);
        assert!(!d.is_running());
        assert!(!d.poll(t0 + ms(9000)));
    }

    #[test]
    fn test_mount_resumes() {
        let (mut d, t0) = started();
        d.unmount();
        d.mount(t0 + ms(1000));
        assert!(d.is_running());
        assert!(d.poll(t0 + ms(4000)));
        assert_eq!(d.current(), Some(&STATUSES[1]));
    }

    #[test]
    fn test_display_text_has_prefix() {
        assert_eq!(
            STATUSES[2].display_text(),
            format!("Current status: {}", STATUSES[2].text)
        );
    }
}
