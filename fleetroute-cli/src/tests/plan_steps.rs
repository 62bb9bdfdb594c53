//! Behaviour-driven step definitions driving the plan CLI scenarios.

use super::helpers::{nairobi_request, temp_root, write_request, write_utf8};
use super::*;
use crate::plan::run_plan_with;
use camino::Utf8PathBuf;
use fleetroute_core::{GeoPoint, Plan, PlanRequest, RouteError, TourMetrics};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct PlanWorld {
    _tmp: TempDir,
    request_path: Utf8PathBuf,
    include_request: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl PlanWorld {
    fn new() -> Self {
        let (tmp, root) = temp_root();
        let request_path = root.join("request.json");
        Self {
            _tmp: tmp,
            request_path,
            include_request: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["fleetroute".to_string(), "plan".to_string()];
        if *self.include_request.borrow() {
            argv.push(self.request_path.as_str().to_string());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }

    fn plan(&self) -> Plan {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        result.as_ref().expect("expected success");
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON plan")
    }
}

#[fixture]
fn world() -> PlanWorld {
    PlanWorld::new()
}

#[given("a valid plan request exists on disk")]
fn valid_plan_request_exists(#[from(world)] world: &PlanWorld) {
    write_request(&world.request_path, &nairobi_request());
}

#[given("I set the average speed to 40 km/h")]
fn set_average_speed(#[from(world)] world: &PlanWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_AVERAGE_SPEED}"), "40".to_string()]);
}

#[given("the plan request contains invalid JSON")]
fn plan_request_contains_invalid_json(#[from(world)] world: &PlanWorld) {
    write_utf8(&world.request_path, b"{ not valid json");
}

#[given("the plan request has a start latitude of 999")]
fn plan_request_has_invalid_start(#[from(world)] world: &PlanWorld) {
    let request = PlanRequest {
        start: GeoPoint::new(999.0, 0.0),
        ..nairobi_request()
    };
    write_request(&world.request_path, &request);
}

#[given("I omit the plan request path")]
fn omit_plan_request_path(#[from(world)] world: &PlanWorld) {
    *world.include_request.borrow_mut() = false;
}

#[when("I run the plan command")]
fn run_plan_command(#[from(world)] world: &PlanWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Plan(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_plan_with(args, &mut *buffer)
        }
        Command::Distance(_) => panic!("expected plan command"),
    });

    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints a plan starting at the nearest shop")]
fn command_prints_plan(#[from(world)] world: &PlanWorld) {
    let plan = world.plan();
    assert_eq!(plan.tour.iter().next(), Some("s1"));
    assert_eq!(plan.legs.len(), plan.tour.len());
    assert!(plan.metrics.total_distance_km > 0.0);
}

#[then("the estimated minutes follow the overridden speed")]
fn minutes_follow_override(#[from(world)] world: &PlanWorld) {
    let plan = world.plan();
    let expected = TourMetrics::from_distance(plan.metrics.total_distance_km, 40.0)
        .expect("override speed is valid");
    assert_eq!(plan.metrics, expected);
}

#[then("the command fails because the request JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &PlanWorld) {
    match &*world.error() {
        CliError::ParsePlanRequest { .. } => {}
        other => panic!("expected ParsePlanRequest, found {other:?}"),
    }
}

#[then("the command fails because a coordinate is invalid")]
fn command_fails_invalid_coordinate(#[from(world)] world: &PlanWorld) {
    match &*world.error() {
        CliError::Plan { source, .. } => {
            assert!(matches!(source, RouteError::InvalidCoordinate { .. }));
        }
        other => panic!("expected Plan, found {other:?}"),
    }
}

#[then("the command fails because the request path is missing")]
fn command_fails_missing_request_path(#[from(world)] world: &PlanWorld) {
    match &*world.error() {
        CliError::MissingPositional { field, .. } => assert_eq!(*field, ARG_PLAN_REQUEST),
        other => panic!("expected MissingPositional, found {other:?}"),
    }
}

macro_rules! register_plan_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/plan_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: PlanWorld) {
            let _ = world;
        }
    };
}

register_plan_scenario!(plan_happy_path, "planning a request from JSON");
register_plan_scenario!(plan_speed_override, "overriding the average speed");
register_plan_scenario!(plan_invalid_json, "rejecting invalid JSON input");
register_plan_scenario!(plan_invalid_coordinates, "rejecting requests with invalid coordinates");
register_plan_scenario!(plan_missing_request, "rejecting missing request paths");
