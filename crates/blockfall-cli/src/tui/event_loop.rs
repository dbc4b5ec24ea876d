use std::time::{Duration, Instant};

use crossterm::event;

use super::event::TuiEvent;

/// When the screen gets redrawn.
#[derive(Debug, Clone, Copy, Default)]
pub enum RenderMode {
    /// Redraw on a fixed cadence, independent of activity.
    Interval(Duration),
    /// Redraw only after something happened (a tick or a terminal event).
    #[default]
    OnDirty,
}

impl RenderMode {
    const fn interval(self) -> Option<Duration> {
        match self {
            Self::Interval(interval) => Some(interval),
            Self::OnDirty => None,
        }
    }
}

/// Merges the game clock, the render cadence and terminal input into a
/// single stream of [`TuiEvent`]s.
///
/// Ticks are disabled until an interval is set; a loop without a tick
/// interval only ever yields renders and terminal events.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    render_mode: RenderMode,
    last_tick: Instant,
    last_render: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            tick_interval: None,
            render_mode: RenderMode::default(),
            last_tick: now,
            last_render: now,
            // The first frame must be drawn before anything happens.
            dirty: true,
        }
    }
}

impl EventLoop {
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
    }

    pub(super) fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    /// Blocks until the next event is due and returns it.
    ///
    /// An overdue tick wins over an overdue render, so a burst of input
    /// can delay drawing but never the game clock.
    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        loop {
            let now = Instant::now();

            if let Some(interval) = self.tick_interval
                && now.duration_since(self.last_tick) >= interval
            {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            let render_due = match self.render_mode {
                RenderMode::Interval(interval) => now.duration_since(self.last_render) >= interval,
                RenderMode::OnDirty => self.dirty,
            };
            if render_due {
                self.last_render = now;
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            if let Some(timeout) = self.idle_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    /// How long the loop may sleep in `poll` before a tick or render
    /// comes due. `None` means nothing is scheduled and input can be
    /// awaited indefinitely.
    fn idle_timeout(&self, now: Instant) -> Option<Duration> {
        let tick_due = self.tick_interval.map(|interval| self.last_tick + interval);
        let render_due = self
            .render_mode
            .interval()
            .map(|interval| self.last_render + interval);
        let earliest = [tick_due, render_due].into_iter().flatten().min()?;
        Some(earliest.saturating_duration_since(now))
    }
}
