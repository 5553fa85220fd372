//! End-to-end pipeline test through the public crate surface.
//!
//! Exercises the whole chain the binary uses:
//! - engine script compilation for every algorithm
//! - worker thread playback with channel delivery
//! - busy latch rejections and cancellation recovery
//!
//! Run with: cargo test --test run_pipeline

use std::thread;
use std::time::{Duration, Instant};

use sort_tui::{script, spawn_run, AnimationDriver, RunError, RunEvent, SortKind, StepDelay};
use sort_tui::util;

/// Spins until `condition` holds, failing the test after one second.
fn wait_until(mut condition: impl FnMut() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(1);
    while !condition() {
        assert!(
            Instant::now() < deadline,
            "condition not met within one second"
        );
        thread::yield_now();
    }
}

/// Drains a handle to completion, returning the step snapshots and the
/// final array from the terminal event.
fn drain(handle: &sort_tui::RunHandle) -> (Vec<Vec<i32>>, Vec<i32>) {
    let mut snapshots = Vec::new();
    let mut sorted = None;
    while let Some(event) = handle.next() {
        match event {
            RunEvent::Step(snapshot) => snapshots.push(snapshot),
            RunEvent::Finished(values) => sorted = Some(values),
            RunEvent::Failed(error) => panic!("run failed: {error}"),
        }
    }
    (snapshots, sorted.expect("run never finished"))
}

#[test]
fn every_kind_replays_to_sorted_over_the_wire() {
    for kind in SortKind::ALL {
        let driver = AnimationDriver::new(util::shuffled_sequence(32));
        let input = driver.snapshot();
        let plan = script(kind, &input);

        let handle = spawn_run(&driver, kind, StepDelay::none()).expect("driver is idle");
        let (snapshots, sorted) = drain(&handle);
        handle.join();

        assert_eq!(
            snapshots.len(),
            plan.len(),
            "{kind}: one snapshot per script step"
        );

        // Each published snapshot matches a local replay of the script.
        let mut replay = input.clone();
        for (step, snapshot) in plan.steps().iter().zip(&snapshots) {
            step.apply(&mut replay);
            assert_eq!(snapshot, &replay, "{kind}: snapshot diverged from replay");
        }

        assert_eq!(sorted, plan.sorted(), "{kind}: final array");
        assert!(sorted.is_sorted(), "{kind}: final array is sorted");
        assert!(!driver.is_sorting(), "{kind}: latch released after the run");
    }
}

#[test]
fn reshuffle_between_runs_keeps_the_driver_healthy() {
    let driver = AnimationDriver::new(util::sequence(16));

    let handle = spawn_run(&driver, SortKind::Bubble, StepDelay::none()).expect("idle");
    let (_, first) = drain(&handle);
    handle.join();
    assert_eq!(first, util::sequence(16));

    driver.reset(util::shuffled_sequence(24)).expect("idle after the run");
    assert_eq!(driver.len(), 24);

    let handle = spawn_run(&driver, SortKind::Heap, StepDelay::none()).expect("idle");
    let (_, second) = drain(&handle);
    handle.join();
    assert_eq!(second, util::sequence(24));
    assert_eq!(driver.snapshot(), util::sequence(24));
}

#[test]
fn busy_driver_rejects_everything_then_recovers() {
    let reversed: Vec<i32> = (1..=40).rev().collect();
    let driver = AnimationDriver::new(reversed);

    let handle = spawn_run(&driver, SortKind::Bubble, StepDelay::millis(5)).expect("idle");
    wait_until(|| driver.is_sorting());

    // Everything that mutates the array is rejected while running.
    assert!(matches!(
        spawn_run(&driver, SortKind::Quick, StepDelay::none()),
        Err(RunError::Busy)
    ));
    assert_eq!(
        driver.run(SortKind::Quick, StepDelay::none(), |_| {}),
        Err(RunError::Busy)
    );
    assert_eq!(driver.reset(util::sequence(8)), Err(RunError::Busy));

    // Cancellation unwinds the run between steps.
    driver.cancel();
    let mut last = None;
    while let Some(event) = handle.next() {
        last = Some(event);
    }
    assert_eq!(last, Some(RunEvent::Failed(RunError::Cancelled)));
    handle.join();
    // The worker releases the latch before it reports the failure.
    assert!(!driver.is_sorting());

    // A fresh run goes through.
    let handle = spawn_run(&driver, SortKind::Quick, StepDelay::none()).expect("idle again");
    let (_, sorted) = drain(&handle);
    handle.join();
    assert_eq!(sorted, util::sequence(40));
}
