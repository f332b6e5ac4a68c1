//! Body registry — id-keyed lookup and nearest-body queries.
//!
//! Bodies are owned by the registry and addressed by string id; the
//! distinguished star is always present after construction. During
//! simulation ticks the registry is read-only, so it can be shared by
//! immutable reference across however many spacecraft a driver steps.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::body::{BodyType, CelestialBody};
use crate::vector::Vector3;

/// Registry of all celestial bodies in a simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolarSystem {
    bodies: HashMap<String, CelestialBody>,
    star_id: String,
}

impl SolarSystem {
    /// New system seeded with its star. The star is registered like any
    /// other body and additionally remembered as the system's star.
    pub fn new(star: CelestialBody) -> Self {
        let star_id = star.id.clone();
        let mut bodies = HashMap::new();
        bodies.insert(star_id.clone(), star);
        Self { bodies, star_id }
    }

    /// Register a body, replacing any body with the same id.
    pub fn add_body(&mut self, body: CelestialBody) {
        self.bodies.insert(body.id.clone(), body);
    }

    pub fn body(&self, id: &str) -> Option<&CelestialBody> {
        self.bodies.get(id)
    }

    pub fn body_mut(&mut self, id: &str) -> Option<&mut CelestialBody> {
        self.bodies.get_mut(id)
    }

    /// The system's star. Present by construction.
    pub fn star(&self) -> &CelestialBody {
        &self.bodies[&self.star_id]
    }

    pub fn star_id(&self) -> &str {
        &self.star_id
    }

    pub fn bodies(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.values()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The body nearest to a point, or `None` for an empty registry.
    ///
    /// Distance ties go to the lexicographically smallest body id, so the
    /// result does not depend on map iteration order.
    pub fn nearest_body(&self, point: &Vector3) -> Option<&CelestialBody> {
        self.bodies.values().min_by(|a, b| {
            let da = point.distance_squared(&a.position);
            let db = point.distance_squared(&b.position);
            da.total_cmp(&db).then_with(|| a.id.cmp(&b.id))
        })
    }

    /// Ids of every registered body of a given type.
    pub fn ids_of_type(&self, body_type: BodyType) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .bodies
            .values()
            .filter(|b| b.body_type == body_type)
            .map(|b| b.id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }
}
