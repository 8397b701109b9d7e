//! End-to-end experiment runs against recording mocks.
//!
//! Each test scripts the chooser, so the action path is deterministic while
//! the production code under test stays identical to a live run.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use faultline_common::config::{RunConfig, TargetSource};
use faultline_common::error::ResolutionError;
use faultline_common::experiment::{Outcome, RuleAction};
use faultline_core::chooser::ScriptedChooser;
use faultline_core::driver::ExperimentDriver;
use faultline_core::executor::FaultExecutor;

use crate::support::{self, FirewallCall, MockCompute, MockFirewall, MockInventory};

const TERMINATE: usize = 0;
const TOGGLE: usize = 1;
const ADD: usize = 0;
const REMOVE: usize = 1;

fn run_config(target: TargetSource) -> RunConfig {
    RunConfig {
        target,
        security_group: "sg-123".to_string(),
        rule: support::http_open_rule(),
    }
}

fn static_config() -> RunConfig {
    run_config(TargetSource::Static("web-asg-1".to_string()))
}

struct Harness {
    driver: ExperimentDriver,
    terminated: Arc<Mutex<Vec<String>>>,
    firewall_calls: Arc<Mutex<Vec<FirewallCall>>>,
}

fn harness(inventory: MockInventory) -> Harness {
    let (compute, terminated) = MockCompute::new();
    let (firewall, firewall_calls) = MockFirewall::new();
    let executor = FaultExecutor::new(Box::new(inventory), Box::new(compute), Box::new(firewall));
    Harness {
        driver: ExperimentDriver::new(executor),
        terminated,
        firewall_calls,
    }
}

#[tokio::test]
async fn full_run_terminates_a_listed_member() {
    let h = harness(MockInventory::with_members(&["i-001", "i-002"]));
    let mut chooser = ScriptedChooser::new(&[TERMINATE, 1]);

    let result = h.driver.run(&static_config(), &mut chooser).await.unwrap();

    assert_eq!(result.outcome, Outcome::Success);
    assert_eq!(result.subject, "i-002");
    assert_eq!(*h.terminated.lock().unwrap(), vec!["i-002".to_string()]);
    assert!(h.firewall_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn terminated_member_always_comes_from_the_inventory() {
    for pick in [0, 1] {
        let h = harness(MockInventory::with_members(&["i-001", "i-002"]));
        let mut chooser = ScriptedChooser::new(&[TERMINATE, pick]);

        let result = h.driver.run(&static_config(), &mut chooser).await.unwrap();

        assert_eq!(result.outcome, Outcome::Success);
        let terminated = h.terminated.lock().unwrap();
        assert_eq!(terminated.len(), 1, "exactly one terminate call expected");
        assert!(
            ["i-001", "i-002"].contains(&terminated[0].as_str()),
            "terminated an instance the inventory never listed: {}",
            terminated[0]
        );
    }
}

#[tokio::test]
async fn full_run_adds_the_configured_rule() {
    let h = harness(MockInventory::with_members(&["i-001"]));
    let mut chooser = ScriptedChooser::new(&[TOGGLE, ADD]);

    let result = h.driver.run(&static_config(), &mut chooser).await.unwrap();

    assert_eq!(result.outcome, Outcome::Success);
    assert_eq!(result.subject, "sg-123");

    let calls = h.firewall_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "authorize");
    assert_eq!(calls[0].1, "sg-123");
    assert_eq!(calls[0].2, support::http_open_rule());
    assert!(h.terminated.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_group_run_is_a_noop_without_terminate_calls() {
    let h = harness(MockInventory::with_members(&[]));
    let mut chooser = ScriptedChooser::new(&[TERMINATE]);

    let result = h.driver.run(&static_config(), &mut chooser).await.unwrap();

    assert_eq!(result.outcome, Outcome::NoOp);
    assert!(h.terminated.lock().unwrap().is_empty());
}

#[tokio::test]
async fn resolution_failure_aborts_before_any_provider_call() {
    let h = harness(MockInventory::with_members(&["i-001"]));
    let cfg = run_config(TargetSource::OutputsFile {
        path: PathBuf::from("/nonexistent/outputs.txt"),
        key: "autoscaling_group_name".to_string(),
    });
    // An empty script doubles as proof the chooser is never consulted.
    let mut chooser = ScriptedChooser::new(&[]);

    let outcome = h.driver.run(&cfg, &mut chooser).await;

    assert!(matches!(outcome, Err(ResolutionError::FileNotFound(_))));
    assert!(h.terminated.lock().unwrap().is_empty());
    assert!(h.firewall_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn run_resolves_the_target_from_an_outputs_file() {
    let path = std::env::temp_dir().join(format!(
        "faultline-it-outputs-{}.txt",
        std::process::id()
    ));
    std::fs::write(&path, "autoscaling_group_name = \"web-asg-1\"\n").unwrap();

    let h = harness(MockInventory::with_members(&["i-001"]));
    let cfg = run_config(TargetSource::OutputsFile {
        path,
        key: "autoscaling_group_name".to_string(),
    });
    let mut chooser = ScriptedChooser::new(&[TERMINATE, 0]);

    let result = h.driver.run(&cfg, &mut chooser).await.unwrap();

    assert_eq!(result.outcome, Outcome::Success);
    assert_eq!(*h.terminated.lock().unwrap(), vec!["i-001".to_string()]);
}

#[tokio::test]
async fn add_then_remove_issues_two_independent_calls() {
    let (firewall, calls) = MockFirewall::new();
    let (compute, _) = MockCompute::new();
    let executor = FaultExecutor::new(
        Box::new(MockInventory::with_members(&[])),
        Box::new(compute),
        Box::new(firewall),
    );
    let rule = support::http_open_rule();

    let add = executor.toggle_rule("sg-123", RuleAction::Add, &rule).await;
    let remove = executor
        .toggle_rule("sg-123", RuleAction::Remove, &rule)
        .await;

    assert_eq!(add.outcome, Outcome::Success);
    assert_eq!(remove.outcome, Outcome::Success);

    // Nothing is deduplicated or verified; both API calls must have happened.
    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, "authorize");
    assert_eq!(calls[1].0, "revoke");
}

#[tokio::test]
async fn duplicate_rule_rejection_surfaces_as_error() {
    let (firewall, calls) = MockFirewall::rejecting("InvalidPermission.Duplicate");
    let (compute, _) = MockCompute::new();
    let executor = FaultExecutor::new(
        Box::new(MockInventory::with_members(&[])),
        Box::new(compute),
        Box::new(firewall),
    );

    let result = executor
        .toggle_rule("sg-123", RuleAction::Add, &support::http_open_rule())
        .await;

    assert_eq!(result.outcome, Outcome::Error);
    assert!(
        result.detail.contains("InvalidPermission.Duplicate"),
        "provider detail should survive into the result: {}",
        result.detail
    );
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn inventory_failure_surfaces_as_error_not_panic() {
    let h = harness(MockInventory::failing());
    let mut chooser = ScriptedChooser::new(&[TERMINATE]);

    let result = h.driver.run(&static_config(), &mut chooser).await.unwrap();

    assert_eq!(result.outcome, Outcome::Error);
    assert!(h.terminated.lock().unwrap().is_empty());
}

#[tokio::test]
async fn failed_termination_is_reported_after_a_single_attempt() {
    let (compute, terminated) = MockCompute::failing();
    let (firewall, _) = MockFirewall::new();
    let executor = FaultExecutor::new(
        Box::new(MockInventory::with_members(&["i-001"])),
        Box::new(compute),
        Box::new(firewall),
    );
    let driver = ExperimentDriver::new(executor);
    let mut chooser = ScriptedChooser::new(&[TERMINATE, 0]);

    let result = driver.run(&static_config(), &mut chooser).await.unwrap();

    assert_eq!(result.outcome, Outcome::Error);
    assert_eq!(terminated.lock().unwrap().len(), 1, "no retries expected");
}

#[tokio::test]
async fn rule_action_is_chosen_independently_of_the_action_kind() {
    let h = harness(MockInventory::with_members(&["i-001"]));
    let mut chooser = ScriptedChooser::new(&[TOGGLE, REMOVE]);

    let result = h.driver.run(&static_config(), &mut chooser).await.unwrap();

    assert_eq!(result.outcome, Outcome::Success);
    let calls = h.firewall_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "revoke");
}
