use crate::aggregate::*;
use crate::animation::{self, bezier};
use crate::camera::Camera;
use crate::config::{AnimationConfig, RenderConfig};
use crate::error::RenderError;
use crate::light::Light;
use crate::material::*;
use crate::prims::*;
use crate::shape::*;
use crate::types::*;

/// Everything needed to render one frame. Built once per frame and only
/// read while rendering.
pub struct Scene {
    pub aggregate: Aggregate,
    pub lights: Vec<Light>,
    pub camera: Camera,
}

pub const CHRISTMAS_RED: Rgb8 = [220, 20, 60];
pub const GOLD: Rgb8 = [255, 215, 0];
pub const SILVER: Rgb8 = [192, 192, 192];
pub const WHITE: Rgb8 = [255, 255, 255];
pub const WARM_GOLD_LIGHT: Rgb8 = [255, 230, 140];
pub const COOL_SILVER_LIGHT: Rgb8 = [220, 240, 255];

const AMBIENT: Float = 0.1;
const DIFFUSE: Float = 0.7;
const SPECULAR: Float = 0.5;

const BOUNCE: Float = 0.2;
const ORBIT_RADIUS: Float = 1.5;
const ORBIT_HEIGHT: Float = 1.0;
const ORBIT_SPEED: Float = 1.5;
const ORBIT_VERTICAL_SPEED: Float = 2.0;

const RED_PATH: [Point3f; 4] = [
    Point3f { x: -2.0, y: 0.0, z: -2.0 },
    Point3f { x: -1.0, y: 2.0, z: -2.0 },
    Point3f { x: 1.0, y: 2.0, z: -2.0 },
    Point3f { x: 2.0, y: 0.0, z: -2.0 },
];
const SILVER_PATH: [Point3f; 4] = [
    Point3f { x: 2.0, y: 0.0, z: -1.0 },
    Point3f { x: 1.0, y: 3.0, z: -1.0 },
    Point3f { x: -1.0, y: 3.0, z: -1.0 },
    Point3f { x: -2.0, y: 0.0, z: -1.0 },
];

/// Three dancing ornaments over a checkered stage at animation time `t`.
pub fn new_ornament_scene(t: Float, render: &RenderConfig, anim: &AnimationConfig) -> Result<Scene, RenderError> {
    let ornament = |rgb, reflectivity| Material::new(rgb, Texture::Stripe, ShadowKind::Smooth, reflectivity);
    let mut aggregate = Aggregate::new();

    let mut red = bezier(t, RED_PATH);
    red.y += (t * PI * 2.0).sin() * BOUNCE;
    aggregate.push(ShapePrimitive::new(
        Sphere::new(red, 0.5)?,
        ornament(CHRISTMAS_RED, anim.default_reflectivity),
    ));

    let angle = t * ORBIT_SPEED * PI * 2.0;
    let orbit = ORBIT_RADIUS + (t * PI * 2.0).sin() * 0.2;
    let gold = Point3f::new(
        angle.cos() * orbit,
        ORBIT_HEIGHT + (t * ORBIT_VERTICAL_SPEED * PI).sin() * BOUNCE,
        angle.sin() * orbit - 2.0,
    );
    aggregate.push(ShapePrimitive::new(Sphere::new(gold, 0.3)?, ornament(GOLD, anim.ornament_reflectivity)));

    let mut silver = bezier(t, SILVER_PATH);
    silver.y += (t * PI * 3.0).cos() * BOUNCE * 0.5;
    aggregate.push(ShapePrimitive::new(
        Sphere::new(silver, 0.25)?,
        ornament(SILVER, anim.default_reflectivity),
    ));

    // stage
    aggregate.push(ShapePrimitive::new(
        Sphere::new(Point3f::new(0.0, -100.5, 0.0), 100.0)?,
        Material::new(WHITE, Texture::Checkerboard, ShadowKind::Sharp, anim.default_reflectivity),
    ));

    let angle = t * PI * 2.0;
    let radius = 8.0;
    let lift = (t * PI * 2.0).sin() * 2.0;
    let lights = vec![
        Light::new(
            Point3f::new(angle.cos() * radius, 8.0 + lift, angle.sin() * radius),
            AMBIENT * 0.5,
            DIFFUSE,
            SPECULAR,
            WARM_GOLD_LIGHT,
        ),
        Light::new(
            Point3f::new((angle + PI).cos() * radius, 6.0 - lift, (angle + PI).sin() * radius),
            AMBIENT * 0.3,
            DIFFUSE * 0.6,
            SPECULAR * 0.8,
            COOL_SILVER_LIGHT,
        ),
    ];

    let (look_from, look_at) = if anim.animate_camera {
        animation::camera_path(t)
    } else {
        (Point3f::new(0.0, 3.0, 8.0), Point3f::new(0.0, 0.0, -2.0))
    };
    let camera = Camera::new(look_from, look_at, Vector3f::unit_y(), render.fov, render.aspect())?;

    Ok(Scene { aggregate, lights, camera })
}
