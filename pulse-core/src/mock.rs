//! Test doubles: a shared clock, a recording pin, a clock-advancing delay and
//! a pin provider with a fixed set of lines.

use core::cell::Cell;
use core::time::Duration;

use pulse_hal::{BlockingDelay, OutputPin};

use crate::board::BoardLine;
use crate::error::HardwareBindingError;
use crate::provider::PinProvider;

/// Virtual time, advanced only by [`MockDelay`]
#[derive(Default)]
pub struct MockClock {
    now_ns: Cell<u64>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        Duration::from_nanos(self.now_ns.get())
    }

    fn advance(&self, ns: u32) {
        self.now_ns.set(self.now_ns.get() + u64::from(ns));
    }
}

/// One write to a [`MockPin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Write {
    pub at: Duration,
    pub high: bool,
}

/// Output pin that timestamps every write
pub struct MockPin<'a> {
    clock: &'a MockClock,
    high: bool,
    pub writes: Vec<Write>,
}

impl<'a> MockPin<'a> {
    pub fn new(clock: &'a MockClock, high: bool) -> Self {
        Self {
            clock,
            high,
            writes: Vec::new(),
        }
    }

    /// Levels written, in order
    pub fn levels(&self) -> Vec<bool> {
        self.writes.iter().map(|w| w.high).collect()
    }

    fn record(&mut self, high: bool) {
        self.high = high;
        self.writes.push(Write {
            at: self.clock.now(),
            high,
        });
    }
}

impl OutputPin for MockPin<'_> {
    fn set_high(&mut self) {
        self.record(true);
    }

    fn set_low(&mut self) {
        self.record(false);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Delay that advances a [`MockClock`] instead of sleeping
///
/// With a budget set, the delay panics once the budget is spent. That is
/// the only way to get out of a loop that never returns.
pub struct MockDelay<'a> {
    clock: &'a MockClock,
    pub calls: usize,
    budget: Option<usize>,
}

impl<'a> MockDelay<'a> {
    pub fn new(clock: &'a MockClock) -> Self {
        Self {
            clock,
            calls: 0,
            budget: None,
        }
    }

    pub fn with_budget(clock: &'a MockClock, calls: usize) -> Self {
        Self {
            clock,
            calls: 0,
            budget: Some(calls),
        }
    }
}

impl BlockingDelay for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        if self.budget == Some(self.calls) {
            panic!("delay budget exhausted");
        }
        self.calls += 1;
        self.clock.advance(ns);
    }
}

/// Provider with `lines` plain GPIOs and no wireless lines
pub struct MockPinProvider<'a> {
    clock: &'a MockClock,
    claimed: Vec<bool>,
}

impl<'a> MockPinProvider<'a> {
    pub fn new(clock: &'a MockClock, lines: usize) -> Self {
        Self {
            clock,
            claimed: vec![false; lines],
        }
    }

    pub fn claimed_count(&self) -> usize {
        self.claimed.iter().filter(|c| **c).count()
    }
}

impl<'a> PinProvider for MockPinProvider<'a> {
    type Pin = MockPin<'a>;

    fn claim_output(
        &mut self,
        line: BoardLine,
        initial_high: bool,
    ) -> Result<MockPin<'a>, HardwareBindingError> {
        let BoardLine::Gpio(n) = line else {
            return Err(HardwareBindingError::Unsupported);
        };
        let slot = self
            .claimed
            .get_mut(usize::from(n))
            .ok_or(HardwareBindingError::LineOutOfRange)?;
        if *slot {
            return Err(HardwareBindingError::AlreadyClaimed);
        }
        *slot = true;
        Ok(MockPin::new(self.clock, initial_high))
    }

    fn is_available(&self, line: BoardLine) -> bool {
        match line {
            BoardLine::Gpio(n) => self.claimed.get(usize::from(n)) == Some(&false),
            BoardLine::Wireless(_) => false,
        }
    }
}
