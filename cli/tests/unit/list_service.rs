//! Listing with inspection: bounded concurrency, ordering and fail-fast.

#![allow(clippy::expect_used)]

use std::time::Duration;

use machine_cli::application::services::list::{
    DEFAULT_INSPECT_CONCURRENCY, InspectPool, ListOptions, list,
};
use machine_cli::domain::{MachineError, ProcessError};
use machine_cli::infra::config::MachineConfig;
use machine_cli::infra::docker_machine::DockerMachine;

use crate::mocks::{ConcurrencyProbe, listing_runner};

const INSPECT: ListOptions = ListOptions {
    timeout: None,
    inspect: true,
};

// ── Bounded concurrency ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_default_pool_runs_at_most_four_inspections() {
    let probe = ConcurrencyProbe::new(10, Duration::from_millis(20));
    let machines = list(&probe, &INSPECT, &InspectPool::default())
        .await
        .expect("list");

    assert_eq!(machines.len(), 10);
    assert!(probe.peak() <= DEFAULT_INSPECT_CONCURRENCY, "peak {}", probe.peak());
    assert!(probe.peak() > 1, "inspections never overlapped");
}

#[tokio::test]
async fn test_custom_limit_is_respected() {
    let probe = ConcurrencyProbe::new(6, Duration::from_millis(10));
    list(&probe, &INSPECT, &InspectPool::new(2)).await.expect("list");
    assert!(probe.peak() <= 2, "peak {}", probe.peak());
}

#[tokio::test]
async fn test_oversized_limit_is_capped_at_four() {
    let probe = ConcurrencyProbe::new(10, Duration::from_millis(30));
    let machines = list(&probe, &INSPECT, &InspectPool::new(10))
        .await
        .expect("list");

    assert_eq!(machines.len(), 10);
    assert!(probe.peak() <= DEFAULT_INSPECT_CONCURRENCY, "peak {}", probe.peak());
}

#[tokio::test]
async fn test_inspections_start_in_listing_order() {
    let probe = ConcurrencyProbe::new(5, Duration::from_millis(1));
    list(&probe, &INSPECT, &InspectPool::new(1)).await.expect("list");
    assert_eq!(probe.inspected(), ["m0", "m1", "m2", "m3", "m4"]);
}

// ── Ordering and merge ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_records_keep_listing_order_and_carry_inspection() {
    let probe = ConcurrencyProbe::new(8, Duration::from_millis(5));
    let machines = list(&probe, &INSPECT, &InspectPool::default())
        .await
        .expect("list");

    let names: Vec<_> = machines.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["m0", "m1", "m2", "m3", "m4", "m5", "m6", "m7"]);
    for machine in &machines {
        assert_eq!(machine.state.as_deref(), Some("running"));
        assert_eq!(machine.details["driver"]["ipAddress"], "192.168.99.100");
        assert_eq!(machine.details["driver"]["sshUser"], "docker");
    }
}

#[tokio::test]
async fn test_list_through_adapter_without_inspect() {
    let runner = listing_runner(3);
    let dm = DockerMachine::new(runner.clone(), &MachineConfig::default());
    let options = ListOptions {
        timeout: Some(5),
        inspect: false,
    };
    let machines = list(&dm, &options, &InspectPool::default()).await.expect("list");

    assert_eq!(machines.len(), 3);
    assert!((machines[0].response_time - 2.0).abs() < f64::EPSILON);
    assert_eq!(machines[0].docker_version.as_deref(), Some("v17.05.0-ce"));

    let calls = runner.args();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0][0], "ls");
    assert_eq!(calls[0][3..], ["-t", "5"]);
}

#[tokio::test]
async fn test_list_through_adapter_with_inspect() {
    let runner = listing_runner(2);
    let dm = DockerMachine::new(runner.clone(), &MachineConfig::default());
    let machines = list(&dm, &INSPECT, &InspectPool::default()).await.expect("list");

    assert_eq!(machines[1].name, "m1");
    assert_eq!(machines[1].driver_name.as_deref(), Some("virtualbox"));
    assert_eq!(runner.calls().len(), 3);
}

// ── Fail-fast ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_first_inspection_failure_fails_the_list() {
    let probe = ConcurrencyProbe::new(6, Duration::from_millis(5)).failing_on("m3");
    let err = list(&probe, &INSPECT, &InspectPool::default())
        .await
        .expect_err("m3 fails");
    let MachineError::Process(ProcessError::Exit { message, .. }) = err else {
        panic!("expected the inspect failure, got {err:?}");
    };
    assert!(message.contains("m3"));
}

#[tokio::test]
async fn test_no_inspection_starts_after_failure_with_serial_pool() {
    let probe = ConcurrencyProbe::new(5, Duration::from_millis(1)).failing_on("m1");
    list(&probe, &INSPECT, &InspectPool::new(1))
        .await
        .expect_err("m1 fails");
    assert_eq!(probe.inspected(), ["m0", "m1"]);
}
