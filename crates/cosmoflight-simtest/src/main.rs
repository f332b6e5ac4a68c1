//! Cosmoflight Headless Simulation Harness
//!
//! Validates the pure flight logic and the ship data without a front
//! end. Runs entirely in-process — no rendering, no networking.
//!
//! Usage:
//!   cargo run -p cosmoflight-simtest
//!   cargo run -p cosmoflight-simtest -- --verbose

use cosmoflight_core::SimulationEngine;
use cosmoflight_logic::{
    BodyType, CelestialBody, LifeSupportStatus, PhysicsEngine, Quaternion, ShipType, Spacecraft,
    SpacecraftSpec, Vector3,
};
use serde::Deserialize;

// ── Ship manifest (the same JSON a front end ships with) ────────────────
const MANIFEST_JSON: &str = include_str!("../../../data/ship_manifest.json");

#[derive(Debug, Deserialize)]
struct ShipPreset {
    ship_type: ShipType,
    name: String,
    dry_mass: f64,
    max_fuel_capacity: f64,
    max_thrust: f64,
    specific_impulse: f64,
    cruise_speed: f64,
}

impl ShipPreset {
    fn spec(&self) -> SpacecraftSpec {
        SpacecraftSpec {
            dry_mass: self.dry_mass,
            max_fuel_capacity: self.max_fuel_capacity,
            max_thrust: self.max_thrust,
            specific_impulse: self.specific_impulse,
            cruise_speed: self.cruise_speed,
        }
    }
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: impl Into<String>) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed,
        detail: detail.into(),
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Cosmoflight Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Vector & quaternion algebra sweep
    results.extend(validate_algebra());

    // 2. Celestial bodies & registry
    results.extend(validate_bodies());

    // 3. Spacecraft fuel & life support
    results.extend(validate_spacecraft());

    // 4. Ship manifest validation
    results.extend(validate_ship_manifest());

    // 5. End-to-end flight scenario
    results.extend(validate_flight_scenario());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Algebra ──────────────────────────────────────────────────────────

fn validate_algebra() -> Vec<TestResult> {
    let mut out = Vec::new();

    let v = Vector3::new(3.0, 4.0, 12.0);
    let n = v.normalize();
    out.push(check(
        "vector normalize",
        (n.magnitude() - 1.0).abs() < 1e-12,
        format!("|n| = {}", n.magnitude()),
    ));
    out.push(check(
        "zero vector normalizes to zero",
        Vector3::ZERO.normalize() == Vector3::ZERO,
        "policy: no fault on zero input",
    ));

    let x = Vector3::new(1.0, 0.0, 0.0);
    let y = Vector3::new(0.0, 1.0, 0.0);
    out.push(check(
        "cross product handedness",
        x.cross(&y) == Vector3::new(0.0, 0.0, 1.0),
        "x × y = z",
    ));

    let mut round_trip_ok = true;
    let mut worst = 0.0_f64;
    for &(p, yw, r) in &[(0.3, -1.0, 2.5), (-1.2, 2.8, -0.4), (1.5, 0.0, 3.1)] {
        let q = Quaternion::from_euler(p, yw, r);
        let (p2, y2, r2) = q.to_euler();
        let err = (p - p2).abs().max((yw - y2).abs()).max((r - r2).abs());
        worst = worst.max(err);
        round_trip_ok &= err < 1e-6;
    }
    out.push(check(
        "euler round trip",
        round_trip_ok,
        format!("worst error {worst:.2e}"),
    ));
    out.push(check(
        "zero quaternion normalizes to identity",
        Quaternion::new(0.0, 0.0, 0.0, 0.0).normalize() == Quaternion::IDENTITY,
        "policy: identity on degenerate input",
    ));

    out
}

// ── 2. Bodies & registry ────────────────────────────────────────────────

fn validate_bodies() -> Vec<TestResult> {
    let mut out = Vec::new();
    let system = cosmoflight_core::generation::standard_system();

    out.push(check(
        "standard system census",
        system.len() == 10 && system.star().id == "sol",
        format!("{} bodies, star '{}'", system.len(), system.star().id),
    ));

    let earth = system.body("earth");
    let g = earth.map(|e| e.surface_gravity()).unwrap_or(0.0);
    out.push(check(
        "earth surface gravity",
        g > 9.7 && g < 9.9,
        format!("{g:.3} m/s²"),
    ));

    let zero_radius = CelestialBody::new("point", "Point", BodyType::Asteroid)
        .with_physical(1.0e20, 0.0, 100.0);
    out.push(check(
        "zero-radius surface gravity",
        zero_radius.surface_gravity() == 0.0,
        "policy: 0 instead of division fault",
    ));

    let probe = Vector3::new(2.2794e11 + 1.0e9, 0.0, 0.0);
    let nearest = system.nearest_body(&probe).map(|b| b.id.clone());
    out.push(check(
        "nearest body from mars orbit",
        nearest.as_deref() == Some("mars"),
        format!("{nearest:?}"),
    ));

    out
}

// ── 3. Spacecraft state machine ─────────────────────────────────────────

fn scout() -> Spacecraft {
    let mut craft = Spacecraft::new(
        "ship-001",
        "Explorer",
        ShipType::Scout,
        SpacecraftSpec {
            dry_mass: 4000.0,
            max_fuel_capacity: 1000.0,
            max_thrust: 10_000.0,
            specific_impulse: 300.0,
            cruise_speed: 7800.0,
        },
    );
    craft.set_fuel(500.0);
    craft
}

fn validate_spacecraft() -> Vec<TestResult> {
    let mut out = Vec::new();

    let mut craft = scout();
    out.push(check(
        "fuel percent",
        craft.fuel_percent() == 50.0,
        format!("{}%", craft.fuel_percent()),
    ));
    out.push(check(
        "current mass",
        craft.current_mass() == 4375.0,
        format!("{} kg", craft.current_mass()),
    ));

    craft.set_throttle(50.0);
    let consumed = craft.consume_fuel(1.0).unwrap_or(f64::NAN);
    let expected = 0.5 * 10_000.0 / (300.0 * 9.81);
    out.push(check(
        "fuel flow formula",
        (consumed - expected).abs() < 1e-12,
        format!("{consumed:.6} L/s at 50% throttle"),
    ));

    out.push(check(
        "negative dt rejected",
        craft.consume_fuel(-1.0).is_err() && craft.update_life_support(-1.0).is_err(),
        "InvalidTimestep",
    ));

    let mut cabin = scout();
    cabin.set_oxygen_level(50.0);
    let warn = cabin.life_support_status == LifeSupportStatus::Warning;
    cabin.set_oxygen_level(20.0);
    let crit = cabin.life_support_status == LifeSupportStatus::Critical;
    out.push(check(
        "life support boundaries",
        warn && crit,
        "warning at 50.0, critical at 20.0",
    ));

    let engine = PhysicsEngine::default();
    let body = CelestialBody::new("earth", "Earth", BodyType::Planet)
        .with_physical(5.972e24, 6.371e6, 288.0);
    let mut probe = scout();
    probe.position = body.position;
    out.push(check(
        "gravity at zero separation",
        engine.gravitational_force(&probe, &body) == Vector3::ZERO,
        "policy: zero vector, no singularity",
    ));

    out
}

// ── 4. Ship manifest ────────────────────────────────────────────────────

fn validate_ship_manifest() -> Vec<TestResult> {
    let mut out = Vec::new();

    let presets: Vec<ShipPreset> = match serde_json::from_str(MANIFEST_JSON) {
        Ok(p) => p,
        Err(e) => {
            out.push(check("ship manifest parses", false, e.to_string()));
            return out;
        }
    };
    out.push(check(
        "ship manifest parses",
        presets.len() == 3,
        format!("{} presets", presets.len()),
    ));

    for preset in &presets {
        let sane = preset.dry_mass > 0.0
            && preset.max_fuel_capacity >= 0.0
            && preset.max_thrust > 0.0
            && preset.specific_impulse > 0.0
            && preset.cruise_speed > 0.0;
        out.push(check(
            &format!("preset '{}'", preset.name),
            sane,
            format!("{:?}", preset.ship_type),
        ));
    }

    out
}

// ── 5. Flight scenario ──────────────────────────────────────────────────

fn validate_flight_scenario() -> Vec<TestResult> {
    let mut out = Vec::new();

    let presets: Vec<ShipPreset> = serde_json::from_str(MANIFEST_JSON).unwrap_or_default();
    let Some(preset) = presets.iter().find(|p| p.ship_type == ShipType::Scout) else {
        out.push(check("flight scenario", false, "no scout preset"));
        return out;
    };

    let mut engine = SimulationEngine::with_standard_system();
    let mut craft = Spacecraft::new("ship-001", &preset.name, preset.ship_type, preset.spec());
    craft.set_fuel(500.0);
    let earth = match engine.system.body("earth") {
        Some(b) => b.position,
        None => {
            out.push(check("flight scenario", false, "standard system has no earth"));
            return out;
        }
    };
    craft.position = earth + Vector3::new(7.0e6, 0.0, 0.0);
    craft.velocity = Vector3::new(0.0, 7.5e3, 0.0);

    let entity = engine.spawn_spacecraft(craft, "earth");
    engine.set_throttle(entity, 50.0);

    // One simulated minute at 60 Hz.
    let mut tick_err = None;
    for _ in 0..3600 {
        if let Err(e) = engine.update(1.0 / 60.0) {
            tick_err = Some(e);
            break;
        }
    }
    out.push(check(
        "fixed-timestep loop",
        tick_err.is_none(),
        format!("sim_time {:.1} s", engine.sim_time),
    ));

    let (fuel_consumed, distance, elapsed) = engine
        .stats(entity)
        .map(|s| (s.fuel_consumed, s.distance_traveled, s.elapsed_time))
        .unwrap_or((f64::NAN, f64::NAN, f64::NAN));

    let expected_burn = 0.5 * 10_000.0 / (300.0 * 9.81) * 60.0;
    out.push(check(
        "scenario fuel burn",
        (fuel_consumed - expected_burn).abs() < 1e-6,
        format!("{fuel_consumed:.3} L over {elapsed:.0} s"),
    ));
    out.push(check(
        "distance accumulates",
        distance > 4.0e5,
        format!("{:.1} km", distance / 1000.0),
    ));

    let (oxygen, status, fuel, mass) = match engine.spacecraft(entity) {
        Some(c) => (
            c.oxygen_level,
            c.life_support_status,
            c.current_fuel(),
            c.current_mass(),
        ),
        None => {
            out.push(check("flight scenario", false, "craft vanished"));
            return out;
        }
    };
    out.push(check(
        "oxygen drains in flight",
        (oxygen - 94.0).abs() < 1e-6 && status == LifeSupportStatus::Nominal,
        format!("{oxygen:.1}% after 60 s"),
    ));
    out.push(check(
        "mass tracks fuel",
        (mass - (4000.0 + fuel * 0.75)).abs() < 1e-9,
        format!("{mass:.2} kg with {fuel:.2} L aboard"),
    ));

    out
}
