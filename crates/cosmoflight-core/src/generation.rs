//! Solar-system generation — the standard Sol system plus optional
//! procedural asteroids.
//!
//! Bodies are *placed*, not propagated: each planet starts on the +x
//! axis at its semi-major axis with its mean orbital velocity along +y.
//! Keeping them moving is the job of an external orbit driver.

use rand::Rng;

use cosmoflight_logic::{BodyType, CelestialBody, OrbitalElements, SolarSystem, Vector3};

/// Metres per astronomical unit.
pub const AU: f64 = 1.495_978_707e11;

struct PlanetData {
    id: &'static str,
    name: &'static str,
    mass: f64,
    radius: f64,
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    orbital_period: f64,
    rotation_period: f64,
    orbital_velocity: f64,
    temperature: f64,
    atmosphere: Option<(f64, f64)>,
    water: bool,
}

const PLANETS: [PlanetData; 8] = [
    PlanetData {
        id: "mercury",
        name: "Mercury",
        mass: 3.301e23,
        radius: 2.4397e6,
        semi_major_axis: 5.791e10,
        eccentricity: 0.2056,
        inclination: 0.1222,
        orbital_period: 7.600e6,
        rotation_period: 5.067e6,
        orbital_velocity: 4.736e4,
        temperature: 440.0,
        atmosphere: None,
        water: false,
    },
    PlanetData {
        id: "venus",
        name: "Venus",
        mass: 4.867e24,
        radius: 6.0518e6,
        semi_major_axis: 1.0821e11,
        eccentricity: 0.0068,
        inclination: 0.0592,
        orbital_period: 1.941e7,
        rotation_period: 2.0997e7,
        orbital_velocity: 3.502e4,
        temperature: 737.0,
        atmosphere: Some((9200.0, 2.5e5)),
        water: false,
    },
    PlanetData {
        id: "earth",
        name: "Earth",
        mass: 5.972e24,
        radius: 6.371e6,
        semi_major_axis: 1.496e11,
        eccentricity: 0.0167,
        inclination: 0.0,
        orbital_period: 3.156e7,
        rotation_period: 8.6164e4,
        orbital_velocity: 2.978e4,
        temperature: 288.0,
        atmosphere: Some((101.3, 1.0e5)),
        water: true,
    },
    PlanetData {
        id: "mars",
        name: "Mars",
        mass: 6.417e23,
        radius: 3.3895e6,
        semi_major_axis: 2.2794e11,
        eccentricity: 0.0934,
        inclination: 0.0323,
        orbital_period: 5.935e7,
        rotation_period: 8.8643e4,
        orbital_velocity: 2.407e4,
        temperature: 210.0,
        atmosphere: Some((0.61, 1.25e5)),
        water: false,
    },
    PlanetData {
        id: "jupiter",
        name: "Jupiter",
        mass: 1.898e27,
        radius: 6.9911e7,
        semi_major_axis: 7.7857e11,
        eccentricity: 0.0489,
        inclination: 0.0227,
        orbital_period: 3.743e8,
        rotation_period: 3.573e4,
        orbital_velocity: 1.307e4,
        temperature: 165.0,
        atmosphere: Some((100.0, 3.0e6)),
        water: false,
    },
    PlanetData {
        id: "saturn",
        name: "Saturn",
        mass: 5.683e26,
        radius: 5.8232e7,
        semi_major_axis: 1.4335e12,
        eccentricity: 0.0565,
        inclination: 0.0433,
        orbital_period: 9.292e8,
        rotation_period: 3.810e4,
        orbital_velocity: 9.68e3,
        temperature: 134.0,
        atmosphere: Some((100.0, 3.0e6)),
        water: false,
    },
    PlanetData {
        id: "uranus",
        name: "Uranus",
        mass: 8.681e25,
        radius: 2.5362e7,
        semi_major_axis: 2.8725e12,
        eccentricity: 0.0457,
        inclination: 0.0135,
        orbital_period: 2.651e9,
        rotation_period: 6.206e4,
        orbital_velocity: 6.80e3,
        temperature: 76.0,
        atmosphere: Some((100.0, 2.0e6)),
        water: false,
    },
    PlanetData {
        id: "neptune",
        name: "Neptune",
        mass: 1.024e26,
        radius: 2.4622e7,
        semi_major_axis: 4.4951e12,
        eccentricity: 0.0113,
        inclination: 0.0309,
        orbital_period: 5.200e9,
        rotation_period: 5.800e4,
        orbital_velocity: 5.43e3,
        temperature: 72.0,
        atmosphere: Some((100.0, 2.0e6)),
        water: false,
    },
];

/// Build the standard Sol system: the Sun, the eight planets, and Luna.
pub fn standard_system() -> SolarSystem {
    let sol = CelestialBody::new("sol", "Sol", BodyType::Star)
        .with_physical(1.9891e30, 6.9634e8, 5778.0);
    let mut system = SolarSystem::new(sol);

    for p in &PLANETS {
        let mut body = CelestialBody::new(p.id, p.name, BodyType::Planet)
            .with_physical(p.mass, p.radius, p.temperature)
            .with_orbit(OrbitalElements {
                parent_id: Some("sol".to_string()),
                semi_major_axis: p.semi_major_axis,
                eccentricity: p.eccentricity,
                inclination: p.inclination,
                orbital_period: p.orbital_period,
                rotation_period: p.rotation_period,
                orbital_velocity: p.orbital_velocity,
            })
            .with_position(
                Vector3::new(p.semi_major_axis, 0.0, 0.0),
                Vector3::new(0.0, p.orbital_velocity, 0.0),
            );
        if let Some((pressure, depth)) = p.atmosphere {
            body = body.with_atmosphere(pressure, depth);
        }
        if p.water {
            body = body.with_water();
        }
        system.add_body(body);
    }

    let earth_position = system.body("earth").expect("earth just added").position;
    let earth_velocity = system.body("earth").expect("earth just added").velocity;
    let luna = CelestialBody::new("luna", "Luna", BodyType::Moon)
        .with_physical(7.342e22, 1.7374e6, 250.0)
        .with_orbit(OrbitalElements {
            parent_id: Some("earth".to_string()),
            semi_major_axis: 3.844e8,
            eccentricity: 0.0549,
            inclination: 0.0898,
            orbital_period: 2.3606e6,
            rotation_period: 2.3606e6,
            orbital_velocity: 1.022e3,
        })
        .with_position(
            earth_position + Vector3::new(3.844e8, 0.0, 0.0),
            earth_velocity + Vector3::new(0.0, 1.022e3, 0.0),
        );
    system.add_body(luna);

    system
}

/// Scatter procedural asteroids into the main belt (2.2–3.2 AU), each on
/// a circular heliocentric track. Ids are `asteroid-NNN`.
pub fn scatter_asteroids(system: &mut SolarSystem, count: usize, rng: &mut impl Rng) {
    let star_position = system.star().position;
    let star_mass = system.star().mass;
    let mu = cosmoflight_logic::constants::GRAVITATIONAL_CONSTANT * star_mass;

    for i in 0..count {
        let orbit_radius = rng.gen_range(2.2 * AU..3.2 * AU);
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let mass = rng.gen_range(1.0e15..1.0e19);
        let radius = rng.gen_range(5.0e2..3.0e5);
        let speed = (mu / orbit_radius).sqrt();

        let position = star_position
            + Vector3::new(orbit_radius * angle.cos(), orbit_radius * angle.sin(), 0.0);
        let velocity = Vector3::new(-angle.sin(), angle.cos(), 0.0) * speed;

        let id = format!("asteroid-{i:03}");
        let name = format!("Asteroid {i:03}");
        let body = CelestialBody::new(id, name, BodyType::Asteroid)
            .with_physical(mass, radius, 170.0)
            .with_orbit(OrbitalElements {
                parent_id: Some(system.star_id().to_string()),
                semi_major_axis: orbit_radius,
                eccentricity: 0.0,
                inclination: 0.0,
                orbital_period: std::f64::consts::TAU * orbit_radius / speed,
                rotation_period: 0.0,
                orbital_velocity: speed,
            })
            .with_position(position, velocity);
        system.add_body(body);
    }
}
