//! A guarded industrial robot, end to end.
//!
//! Run with: `cargo run --example guarded_robot`

use sideguard::{
    BatteryMin, DryRunHarness, GateBuilder, MaxTemp, OnFail, RequireConnectivity, StateSnapshot,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// The telemetry a deployment would read from sensors; here it is a pair of
/// atomics so the demo can degrade the robot between calls.
#[derive(Clone)]
struct Telemetry {
    battery: Arc<AtomicU64>,
    temperature: Arc<AtomicU64>,
}

impl Telemetry {
    fn probe(self, connection: &'static str) -> impl Fn() -> StateSnapshot {
        move || {
            StateSnapshot::new()
                .with("battery", self.battery.load(Ordering::SeqCst) as i64)
                .with("temperature", self.temperature.load(Ordering::SeqCst) as i64)
                .with("connection", connection)
        }
    }
}

fn main() {
    let telemetry = Telemetry {
        battery: Arc::new(AtomicU64::new(80)),
        temperature: Arc::new(AtomicU64::new(50)),
    };

    let mut clean_zone = GateBuilder::new(telemetry.clone().probe("wifi"))
        .rule(BatteryMin::new(20.0))
        .rule(RequireConnectivity::new("WIFI"))
        .on_fail(OnFail::Return)
        .operation(|zone: &str| {
            println!("ROBOT MOVING TO {zone}...");
            "cleaned"
        });

    // 1. Happy path: healthy robot executes.
    println!("1. Healthy robot:");
    match clean_zone.invoke("zone a").expect("return policy never raises") {
        outcome if outcome.is_executed() => println!("   result: {:?}\n", outcome.into_executed()),
        outcome => println!("   rejected: {:?}\n", outcome.rejection()),
    }

    // 2. Drained battery: structured rejection, no crash, no movement.
    telemetry.battery.store(10, Ordering::SeqCst);
    println!("2. Low-battery robot (no crash):");
    let outcome = clean_zone.invoke("zone b").expect("return policy never raises");
    if let Some(payload) = outcome.rejection() {
        println!("   reason: {}", payload.reason);
        println!("   suggestion: {}\n", payload.suggestion);
    }

    // 3. Dry run: rules evaluate against injected state, hardware untouched.
    println!("3. Dry run against a synthetic snapshot:");
    let injected = StateSnapshot::new()
        .with("battery", 90.0)
        .with("connection", "wifi");
    let report = DryRunHarness::run(&clean_zone, &injected);
    println!("   success: {}, rules: {}\n", report.success, report.evaluated.len());

    // 4. Raise policy: an overheated emergency path halts loudly.
    telemetry.temperature.store(95, Ordering::SeqCst);
    let mut emergency_stop = GateBuilder::new(telemetry.clone().probe("wifi"))
        .rule(MaxTemp::new(80.0))
        .on_fail(OnFail::Raise)
        .operation(|(): ()| println!("SHUTTING DOWN SYSTEM"));

    println!("4. on_fail = raise while overheating:");
    match emergency_stop.invoke(()) {
        Ok(_) => println!("   shutdown ran"),
        Err(violation) => println!("   caught violation: {violation}"),
    }
}
