// Host-side tests for the floating background object: per-frame spin, float,
// pointer tilt, camera and cube geometry.

use folio_core::scene::{
    pointer_to_ndc, solid_cube, wire_cube, Camera, CubeTransform, FloatingObject,
};
use folio_core::SceneConfig;
use glam::{Vec2, Vec3, Vec4};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn cubes_spin_in_opposite_directions() {
    let mut obj = FloatingObject::new(SceneConfig::default());
    for _ in 0..10 {
        obj.step(0.0);
    }
    let outer = obj.outer().rotation;
    let inner = obj.inner().rotation;
    assert!(approx(outer.x, 0.05) && approx(outer.y, 0.05), "{outer:?}");
    assert!(approx(inner.x, -0.03) && approx(inner.y, -0.03), "{inner:?}");
}

#[test]
fn both_cubes_float_together() {
    let mut obj = FloatingObject::new(SceneConfig::default());
    let now = std::f64::consts::FRAC_PI_2 * 1000.0;
    obj.step(now);
    assert!(approx(obj.outer().position_y, 0.3));
    assert_eq!(obj.outer().position_y, obj.inner().position_y);

    obj.step(0.0);
    assert!(approx(obj.outer().position_y, 0.0));
}

#[test]
fn pointer_tilts_only_the_outer_cube() {
    let mut still = FloatingObject::new(SceneConfig::default());
    let mut tilted = FloatingObject::new(SceneConfig::default());
    tilted.set_pointer_ndc(Vec2::new(1.0, -0.5));
    assert_eq!(tilted.pointer(), Vec2::new(1.0, -0.5));

    still.step(0.0);
    tilted.step(0.0);

    let d = tilted.outer().rotation - still.outer().rotation;
    assert!(approx(d.x, -0.005), "x tilt follows pointer y: {d:?}");
    assert!(approx(d.y, 0.01), "y tilt follows pointer x: {d:?}");
    assert_eq!(tilted.inner(), still.inner());
}

#[test]
fn model_matrix_rotates_about_x_after_y() {
    let t = CubeTransform {
        rotation: Vec2::new(0.7, 0.9),
        position_y: 0.0,
    };
    let p = t.model_matrix().transform_point3(Vec3::X);
    // y applied to the point first, then x
    assert!(approx(p.x, 0.621610), "{p:?}");
    assert!(approx(p.y, 0.504633), "{p:?}");
    assert!(approx(p.z, -0.599121), "{p:?}");
}

#[test]
fn model_matrix_lifts_by_float_offset() {
    let t = CubeTransform {
        rotation: Vec2::ZERO,
        position_y: 0.3,
    };
    let p = t.model_matrix().transform_point3(Vec3::ZERO);
    assert!(approx(p.y, 0.3) && approx(p.x, 0.0) && approx(p.z, 0.0));
}

#[test]
fn pointer_maps_to_ndc() {
    assert_eq!(pointer_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(pointer_to_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
    assert_eq!(pointer_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    assert_eq!(pointer_to_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
}

#[test]
fn camera_tracks_viewport_aspect() {
    let config = SceneConfig::default();
    let mut cam = Camera::from_config(&config, 1600.0, 900.0);
    assert!(approx(cam.aspect, 16.0 / 9.0));
    assert!(approx(cam.fovy_radians, 75f32.to_radians()));
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 5.0));

    cam.set_viewport(0.0, 900.0);
    assert!(approx(cam.aspect, 16.0 / 9.0));
    cam.set_viewport(500.0, 500.0);
    assert!(approx(cam.aspect, 1.0));
}

#[test]
fn origin_projects_to_screen_center() {
    let cam = Camera::from_config(&SceneConfig::default(), 1024.0, 768.0);
    let clip = cam.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(approx(ndc.x, 0.0) && approx(ndc.y, 0.0));
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn wire_cube_has_twelve_edges() {
    let (vertices, indices) = wire_cube(2.0);
    assert_eq!(vertices.len(), 8);
    assert_eq!(indices.len(), 24);
    for pair in indices.chunks(2) {
        let a = Vec3::from(vertices[pair[0] as usize].position);
        let b = Vec3::from(vertices[pair[1] as usize].position);
        assert!(approx(a.distance(b), 2.0), "edge {pair:?}");
    }
    assert!(vertices.iter().all(|v| v.normal == [0.0; 3]));
}

#[test]
fn solid_cube_faces_wind_outward() {
    let (vertices, indices) = solid_cube(1.5);
    assert_eq!(vertices.len(), 24);
    assert_eq!(indices.len(), 36);
    for tri in indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| vertices[i as usize]);
        let pa = Vec3::from(a.position);
        let face = (Vec3::from(b.position) - pa).cross(Vec3::from(c.position) - pa);
        assert!(face.dot(Vec3::from(a.normal)) > 0.0, "triangle {tri:?}");
        assert!(approx(pa.abs().max_element(), 0.75));
    }
}
