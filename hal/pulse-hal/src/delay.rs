//! Blocking delay abstraction
//!
//! A delay suspends the calling thread of control for at least the requested
//! time. Nothing else runs on that thread while it waits.

use core::time::Duration;

/// Blocking delay provider
///
/// Implementations only need [`delay_ns`](BlockingDelay::delay_ns); the
/// coarser units and [`delay`](BlockingDelay::delay) are built on top of it.
pub trait BlockingDelay {
    /// Block for at least `ns` nanoseconds
    fn delay_ns(&mut self, ns: u32);

    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32) {
        self.delay(Duration::from_micros(u64::from(us)));
    }

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        self.delay(Duration::from_millis(u64::from(ms)));
    }

    /// Block for at least `period`
    ///
    /// Periods longer than `u32::MAX` nanoseconds (about 4.3 s) are split
    /// into several `delay_ns` calls. A zero period does not call into the
    /// implementation at all.
    fn delay(&mut self, period: Duration) {
        let mut remaining = period.as_nanos();
        while remaining > 0 {
            let chunk = remaining.min(u128::from(u32::MAX)) as u32;
            self.delay_ns(chunk);
            remaining -= u128::from(chunk);
        }
    }
}

impl<D: BlockingDelay + ?Sized> BlockingDelay for &mut D {
    fn delay_ns(&mut self, ns: u32) {
        (**self).delay_ns(ns)
    }

    fn delay(&mut self, period: Duration) {
        (**self).delay(period)
    }
}
