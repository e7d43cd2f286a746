//! Reading-aid page scroller.
//!
//! Driven by a fixed-rate timer, but each tick moves the page by
//! `speed * elapsed` so the pace holds when ticks arrive late. Stops on its
//! own once the viewport is within `bottom_margin_px` of the document end.

use assistant_types::config::AutoScrollConfig;

use crate::ports::ViewportPort;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Not playing; nothing happened
    Idle,
    Scrolled { by: f64 },
    /// Scrolled, then stopped at the bottom margin
    ReachedBottom,
}

#[derive(Debug, Clone)]
pub struct AutoScroller {
    config: AutoScrollConfig,
    speed: u32,
    playing: bool,
    last_tick_ms: f64,
}

impl AutoScroller {
    pub fn new(config: AutoScrollConfig) -> Self {
        let speed = config.default_speed.clamp(config.min_speed, config.max_speed);
        Self {
            config,
            speed,
            playing: false,
            last_tick_ms: 0.0,
        }
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn speed_range(&self) -> std::ops::RangeInclusive<u32> {
        self.config.min_speed..=self.config.max_speed
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.config.tick_ms
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn start(&mut self, now_ms: f64) {
        self.playing = true;
        self.last_tick_ms = now_ms;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Play/pause. Returns whether it is playing afterwards.
    pub fn toggle(&mut self, now_ms: f64) -> bool {
        if self.playing {
            self.pause();
        } else {
            self.start(now_ms);
        }
        self.playing
    }

    /// Change speed (clamped to the configured range). While playing, timing
    /// restarts from `now_ms` so the new speed applies from here on.
    pub fn set_speed(&mut self, speed: u32, now_ms: f64) {
        self.speed = speed.clamp(self.config.min_speed, self.config.max_speed);
        if self.playing {
            self.last_tick_ms = now_ms;
        }
    }

    pub fn tick(&mut self, now_ms: f64, viewport: &dyn ViewportPort) -> TickOutcome {
        if !self.playing {
            return TickOutcome::Idle;
        }
        let elapsed_s = ((now_ms - self.last_tick_ms) / 1000.0).max(0.0);
        self.last_tick_ms = now_ms;

        let by = self.speed as f64 * elapsed_s;
        viewport.scroll_by(by);

        let metrics = viewport.page_metrics();
        if metrics.distance_to_bottom() <= self.config.bottom_margin_px {
            self.pause();
            return TickOutcome::ReachedBottom;
        }
        TickOutcome::Scrolled { by }
    }

    /// Back to the top of the page; stops playback.
    pub fn reset(&mut self, viewport: &dyn ViewportPort) {
        viewport.scroll_to_top();
        self.pause();
    }
}
