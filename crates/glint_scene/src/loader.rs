//! Scene description loading.
//!
//! Scenes are described as JSON documents listing spheres:
//!
//! ```json
//! {
//!   "spheres": [
//!     {
//!       "center": [0.0, 0.0, -20.0],
//!       "radius": 4.0,
//!       "surface_color": [1.0, 0.32, 0.36],
//!       "reflection": 1.0,
//!       "transparency": 0.5
//!     }
//!   ]
//! }
//! ```
//!
//! `emission_color`, `transparency`, and `reflection` default to zero.
//! Documents go through the same validation as programmatic scene
//! construction, so a loaded scene is always renderable.

use std::path::Path;

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::{Scene, SceneError, Sphere};

/// Top-level scene document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDoc {
    pub spheres: Vec<SphereDoc>,
}

/// One sphere as written in a scene document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereDoc {
    pub center: [f32; 3],
    pub radius: f32,
    pub surface_color: [f32; 3],
    #[serde(default)]
    pub emission_color: [f32; 3],
    #[serde(default)]
    pub transparency: f32,
    #[serde(default)]
    pub reflection: f32,
}

impl From<&SphereDoc> for Sphere {
    fn from(doc: &SphereDoc) -> Self {
        Sphere::new(
            Vec3::from_array(doc.center),
            doc.radius,
            Vec3::from_array(doc.surface_color),
        )
        .with_emission(Vec3::from_array(doc.emission_color))
        .with_transparency(doc.transparency)
        .with_reflection(doc.reflection)
    }
}

/// Load and validate a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, SceneError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let scene = parse_scene(&text)?;
    log::info!("loaded {} spheres from {}", scene.len(), path.display());
    Ok(scene)
}

/// Parse and validate a scene from JSON text.
pub fn parse_scene(text: &str) -> Result<Scene, SceneError> {
    let doc: SceneDoc = serde_json::from_str(text)?;
    Scene::new(doc.spheres.iter().map(Sphere::from).collect())
}
