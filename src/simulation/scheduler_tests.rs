// src/simulation/scheduler_tests.rs

use crate::simulation::{FrameScheduler, HostScheduler, Tick, VirtualClock};

#[test]
fn test_virtual_clock_fires_pending_ticks_once() {
    let mut clock = VirtualClock::new();
    let first = clock.schedule_next_tick();
    let second = clock.schedule_next_tick();
    assert_ne!(first, second);

    let ticks = clock.advance(0.25);
    assert_eq!(
        ticks,
        vec![
            Tick { handle: first, timestamp: 0.25 },
            Tick { handle: second, timestamp: 0.25 },
        ]
    );
    assert!(clock.advance(0.25).is_empty());
    assert_eq!(clock.now(), 0.5);
}

#[test]
fn test_virtual_clock_cancel_and_backwards_step() {
    let mut clock = VirtualClock::starting_at(10.0);
    let handle = clock.schedule_next_tick();
    clock.cancel_tick(handle);
    assert!(clock.pending_ticks().is_empty());

    clock.schedule_next_tick();
    let ticks = clock.advance(-3.0);
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].timestamp, 10.0);
}

#[test]
fn test_host_scheduler_keeps_latest_request() {
    let mut host = HostScheduler::new();
    assert!(host.fire(1.0).is_none());

    let stale = host.schedule_next_tick();
    let current = host.schedule_next_tick();
    host.cancel_tick(stale);
    assert!(host.has_pending());

    let tick = host.fire(2.0).unwrap();
    assert_eq!(tick.handle, current);
    assert_eq!(tick.timestamp, 2.0);
    assert!(!host.has_pending());
}
