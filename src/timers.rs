//! Periodic timers that only raise flags.
//!
//! A timer never runs screen code. When it fires it raises a [`TickFlag`]
//! and the owning screen consumes the flag from its `update`, which the main
//! loop calls. This keeps all drawing in one execution context.
//!
//! [`AlarmTable`] is the fixed-capacity scheduler behind the [`Timers`]
//! trait. The device services it from an embassy task every millisecond;
//! the simulator services it from its event loop.

use core::sync::atomic::{AtomicBool, Ordering};

/// A "work pending" flag shared between a timer and a screen.
pub struct TickFlag(AtomicBool);

impl TickFlag {
    /// Create a lowered flag.
    pub const fn new() -> Self { Self(AtomicBool::new(false)) }

    /// Mark work as pending.
    #[inline]
    pub fn raise(&self) { self.0.store(true, Ordering::Release); }

    /// Lower the flag without consuming it.
    #[inline]
    pub fn clear(&self) { self.0.store(false, Ordering::Release); }

    /// Check without consuming.
    #[inline]
    pub fn is_raised(&self) -> bool { self.0.load(Ordering::Acquire) }

    /// Consume the flag: returns whether it was raised and lowers it.
    #[inline]
    pub fn take(&self) -> bool { self.0.swap(false, Ordering::AcqRel) }
}

impl Default for TickFlag {
    fn default() -> Self { Self::new() }
}

/// Identifies one scheduled timer. Stale handles are detected by generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle {
    slot: u8,
    generation: u16,
}

/// Why a timer could not be scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerError {
    /// All timer slots are in use.
    NoFreeSlot,
    /// A zero period would fire on every service call.
    ZeroPeriod,
}

impl core::fmt::Display for TimerError {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::NoFreeSlot => f.write_str("no free timer slot"),
            Self::ZeroPeriod => f.write_str("zero timer period"),
        }
    }
}

/// Periodic timer service offered to screens.
pub trait Timers {
    /// Raise `flag` every `period_ms` milliseconds until cancelled.
    fn schedule(
        &mut self,
        period_ms: u32,
        flag: &'static TickFlag,
    ) -> Result<TimerHandle, TimerError>;

    /// Stop a timer and lower its flag. Unknown or stale handles are ignored.
    fn cancel(
        &mut self,
        handle: TimerHandle,
    );
}

struct Alarm {
    flag: &'static TickFlag,
    period_ms: u64,
    next_due_ms: u64,
}

/// Fixed-capacity periodic alarm scheduler.
pub struct AlarmTable<const N: usize> {
    slots: [Option<Alarm>; N],
    generations: [u16; N],
    now_ms: u64,
}

impl<const N: usize> AlarmTable<N> {
    /// Create an empty table.
    pub const fn new() -> Self {
        Self {
            slots: [const { None }; N],
            generations: [0; N],
            now_ms: 0,
        }
    }

    /// Advance the table clock to `now_ms` and raise every due flag.
    ///
    /// Missed periods are coalesced: a late service raises the flag once and
    /// schedules the next deadline one period after `now_ms`.
    pub fn service(
        &mut self,
        now_ms: u64,
    ) {
        let now = self.now_ms.max(now_ms);
        self.now_ms = now;
        for alarm in self.slots.iter_mut().flatten() {
            if now >= alarm.next_due_ms {
                alarm.flag.raise();
                alarm.next_due_ms += alarm.period_ms;
                if alarm.next_due_ms <= now {
                    alarm.next_due_ms = now + alarm.period_ms;
                }
            }
        }
    }

    /// Number of scheduled timers.
    pub fn active(&self) -> usize { self.slots.iter().filter(|slot| slot.is_some()).count() }

    fn lookup(
        &self,
        handle: TimerHandle,
    ) -> Option<usize> {
        let slot = usize::from(handle.slot);
        (slot < N && self.generations[slot] == handle.generation && self.slots[slot].is_some())
            .then_some(slot)
    }
}

impl<const N: usize> Default for AlarmTable<N> {
    fn default() -> Self { Self::new() }
}

impl<const N: usize> Timers for AlarmTable<N> {
    fn schedule(
        &mut self,
        period_ms: u32,
        flag: &'static TickFlag,
    ) -> Result<TimerHandle, TimerError> {
        if period_ms == 0 {
            return Err(TimerError::ZeroPeriod);
        }
        let slot = self.slots.iter().position(Option::is_none).ok_or(TimerError::NoFreeSlot)?;
        let period_ms = u64::from(period_ms);
        self.slots[slot] = Some(Alarm {
            flag,
            period_ms,
            next_due_ms: self.now_ms + period_ms,
        });
        Ok(TimerHandle {
            slot: slot as u8,
            generation: self.generations[slot],
        })
    }

    fn cancel(
        &mut self,
        handle: TimerHandle,
    ) {
        let Some(slot) = self.lookup(handle) else {
            return;
        };
        if let Some(alarm) = self.slots[slot].take() {
            alarm.flag.clear();
        }
        self.generations[slot] = self.generations[slot].wrapping_add(1);
    }
}
