//! Frame scheduling for the simulator.
//!
//! The simulator never sleeps or spawns anything itself. It asks a
//! [`FrameScheduler`] for the next tick and the host later hands that tick
//! back through [`Simulator::on_tick`](crate::simulation::Simulator::on_tick).
//! A browser host maps this onto `requestAnimationFrame`; tests use
//! [`VirtualClock`] to step time deterministically.

/// Identifies one scheduled tick so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A fired tick: which request it answers and the host clock reading in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub handle: TickHandle,
    pub timestamp: f64,
}

pub trait FrameScheduler {
    /// Requests one future tick.
    fn schedule_next_tick(&mut self) -> TickHandle;

    /// Withdraws a tick that has not fired yet. Unknown handles are ignored.
    fn cancel_tick(&mut self, handle: TickHandle);
}

/// A clock that only moves when told to. Every pending tick fires on the next
/// [`advance`](VirtualClock::advance).
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: f64,
    next_id: u64,
    pending: Vec<TickHandle>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the clock at `now` seconds.
    pub fn starting_at(now: f64) -> Self {
        Self { now, ..Self::default() }
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn pending_ticks(&self) -> &[TickHandle] {
        &self.pending
    }

    /// Moves time forward by `dt` seconds (negative values are treated as 0)
    /// and fires every pending tick at the new time.
    pub fn advance(&mut self, dt: f64) -> Vec<Tick> {
        if dt > 0.0 {
            self.now += dt;
        }
        let now = self.now;
        self.pending
            .drain(..)
            .map(|handle| Tick { handle, timestamp: now })
            .collect()
    }
}

impl FrameScheduler for VirtualClock {
    fn schedule_next_tick(&mut self) -> TickHandle {
        let handle = TickHandle::new(self.next_id);
        self.next_id += 1;
        self.pending.push(handle);
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        self.pending.retain(|pending| *pending != handle);
    }
}

/// A scheduler for hosts that own the frame loop. It keeps at most one pending
/// request, which the host fires with its own timestamp.
#[derive(Debug, Default)]
pub struct HostScheduler {
    next_id: u64,
    pending: Option<TickHandle>,
}

impl HostScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Fires the pending request, if any, at `timestamp` seconds.
    pub fn fire(&mut self, timestamp: f64) -> Option<Tick> {
        self.pending.take().map(|handle| Tick { handle, timestamp })
    }
}

impl FrameScheduler for HostScheduler {
    fn schedule_next_tick(&mut self) -> TickHandle {
        let handle = TickHandle::new(self.next_id);
        self.next_id += 1;
        self.pending = Some(handle);
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}
