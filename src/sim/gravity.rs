use crate::sim::error::{SimError, SimResult};

/// Surface gravity per celestial body in m/s² (downward magnitude).
pub const SURFACE_GRAVITY: &[(&str, f32)] = &[
    ("sun", 274.0),
    ("mercury", 3.7),
    ("venus", 8.87),
    ("earth", 9.81),
    ("moon", 1.625),
    ("mars", 3.71),
    ("jupiter", 24.79),
    ("saturn", 10.44),
    ("uranus", 8.69),
    ("neptune", 11.15),
];

/// Look up the surface gravity for a body by name.
///
/// Names are exact and lowercase, matching the entries in
/// [`SURFACE_GRAVITY`].
pub fn surface_gravity(name: &str) -> SimResult<f32> {
    SURFACE_GRAVITY
        .iter()
        .find(|(body, _)| *body == name)
        .map(|(_, gravity)| *gravity)
        .ok_or_else(|| SimError::UnknownBody(name.to_string()))
}

/// Body names in table order, for populating a picker.
pub fn body_names() -> impl Iterator<Item = &'static str> {
    SURFACE_GRAVITY.iter().map(|(name, _)| *name)
}
