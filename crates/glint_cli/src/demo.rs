//! Built-in demo scene.

use glint_math::Vec3;
use glint_scene::{Scene, SceneError, Sphere};

/// Build the demo scene for one frame of the sequence.
///
/// Five spheres over a huge ground sphere, lit by one emissive sphere.
/// The central red sphere bobs vertically with the frame number so a
/// rendered sequence visibly animates; each frame gets its own frozen
/// scene.
pub fn demo_scene(frame: u32) -> Result<Scene, SceneError> {
    let bob = (frame as f32 * 0.2).sin() * 2.0;

    Scene::new(vec![
        // Ground
        Sphere::new(Vec3::new(0.0, -10004.0, -20.0), 10000.0, Vec3::splat(0.2)),
        // Glassy red centerpiece
        Sphere::new(Vec3::new(0.0, bob, -20.0), 4.0, Vec3::new(1.0, 0.32, 0.36))
            .with_reflection(1.0)
            .with_transparency(0.5),
        // Mirrors around it
        Sphere::new(Vec3::new(5.0, -1.0, -15.0), 2.0, Vec3::new(0.9, 0.76, 0.46))
            .with_reflection(1.0),
        Sphere::new(Vec3::new(5.0, 0.0, -25.0), 3.0, Vec3::new(0.65, 0.77, 0.97))
            .with_reflection(1.0),
        Sphere::new(Vec3::new(-5.5, 0.0, -15.0), 3.0, Vec3::new(0.9, 0.9, 0.9))
            .with_reflection(1.0),
        // Light
        Sphere::new(Vec3::new(0.0, 20.0, -30.0), 3.0, Vec3::ZERO)
            .with_emission(Vec3::splat(3.0)),
    ])
}
