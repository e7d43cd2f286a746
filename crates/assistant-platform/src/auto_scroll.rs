//! Timer driver for `AutoScroller`.
//!
//! Owns the gloo-timers `Interval` while playback runs. Dropping the
//! interval clears it, so pausing, resetting, navigating away and dropping
//! the driver all stop the page from moving.

use std::cell::RefCell;
use std::ops::RangeInclusive;
use std::rc::Rc;

use gloo_timers::callback::Interval;

use assistant_core::auto_scroll::{AutoScroller, TickOutcome};
use assistant_core::ports::{ClockPort, ViewportPort};
use assistant_types::config::AutoScrollConfig;

pub struct AutoScrollDriver {
    scroller: Rc<RefCell<AutoScroller>>,
    viewport: Rc<dyn ViewportPort>,
    clock: Rc<dyn ClockPort>,
    interval: Option<Interval>,
}

impl AutoScrollDriver {
    pub fn new(
        config: AutoScrollConfig,
        viewport: Rc<dyn ViewportPort>,
        clock: Rc<dyn ClockPort>,
    ) -> Self {
        Self {
            scroller: Rc::new(RefCell::new(AutoScroller::new(config))),
            viewport,
            clock,
            interval: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.scroller.borrow().is_playing()
    }

    pub fn speed(&self) -> u32 {
        self.scroller.borrow().speed()
    }

    pub fn speed_range(&self) -> RangeInclusive<u32> {
        self.scroller.borrow().speed_range()
    }

    pub fn toggle(&mut self) {
        let now = self.clock.monotonic_ms();
        let playing = self.scroller.borrow_mut().toggle(now);
        if playing {
            self.arm();
        } else {
            self.interval = None;
        }
    }

    pub fn set_speed(&mut self, speed: u32) {
        let now = self.clock.monotonic_ms();
        self.scroller.borrow_mut().set_speed(speed, now);
    }

    pub fn reset(&mut self) {
        self.interval = None;
        self.scroller.borrow_mut().reset(self.viewport.as_ref());
    }

    /// Stop without moving the page (route change).
    pub fn stop(&mut self) {
        self.interval = None;
        self.scroller.borrow_mut().pause();
    }

    /// Release the timer once the scroller has stopped itself at the bottom.
    /// Call once per frame.
    pub fn sync(&mut self) {
        if self.interval.is_some() && !self.is_playing() {
            log::debug!("Auto-scroll finished");
            self.interval = None;
        }
    }

    fn arm(&mut self) {
        let scroller = self.scroller.clone();
        let viewport = self.viewport.clone();
        let clock = self.clock.clone();
        let tick_ms = scroller.borrow().tick_interval_ms();

        self.interval = Some(Interval::new(tick_ms, move || {
            let now = clock.monotonic_ms();
            if let TickOutcome::ReachedBottom = scroller.borrow_mut().tick(now, viewport.as_ref()) {
                log::debug!("Auto-scroll reached the bottom margin");
            }
        }));
    }
}
