//! Browser clock: `Date.now()`, `performance.now()`, `Math.random()` and
//! gloo-timers sleeps.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use assistant_core::ports::ClockPort;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl BrowserClock {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl ClockPort for BrowserClock {
    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }

    fn monotonic_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn random_unit(&self) -> f64 {
        js_sys::Math::random()
    }

    async fn sleep(&self, ms: u64) {
        TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
    }
}
