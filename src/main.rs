use minifb::{Key, MouseMode, Window, WindowOptions};
use rayon::prelude::*;

use whitted::camera::Camera;
use whitted::constants::*;
use whitted::environment::GradientSky;
use whitted::material::Material;
use whitted::objects::{PointLight, Sphere};
use whitted::ray::Ray;
use whitted::scene::Scene;
use whitted::tracer::trace_ray;
use whitted::vec3::Vec3;

fn render_frame(buffer: &mut [u32], camera: &Camera, scene: &Scene) {
    let aspect_ratio = BUFFER_WIDTH as f32 / BUFFER_HEIGHT as f32;
    let fov_scale = (60.0f32.to_radians() / 2.0).tan();
    let (forward, right, up) = camera.basis();

    buffer
        .par_chunks_mut(BUFFER_WIDTH)
        .enumerate()
        .for_each(|(j, row)| {
            for (i, pixel) in row.iter_mut().enumerate() {
                let ndc_x =
                    (2.0 * (i as f32 + 0.5) / BUFFER_WIDTH as f32 - 1.0) * aspect_ratio * fov_scale;
                let ndc_y = (1.0 - 2.0 * (j as f32 + 0.5) / BUFFER_HEIGHT as f32) * fov_scale;
                let direction = (forward + right * ndc_x + up * ndc_y).normalize();

                let ray = Ray::new(camera.position, direction);
                let (color, _covered) = trace_ray(&ray, scene, BOUNCE_LIMIT);
                *pixel = color.to_u32_gamma();
            }
        });
}

fn init_scene() -> Scene {
    let mat_mirror = Material::new(
        Vec3::new(0.05, 0.05, 0.05),
        Vec3::new(0.9, 0.9, 0.9),
        512.0,
    );
    let mat_copper = Material::new(Vec3::new(0.7, 0.35, 0.15), Vec3::new(0.4, 0.3, 0.2), 64.0);
    let mat_matte_red = Material::new(Vec3::new(0.8, 0.1, 0.1), Vec3::new(0.0, 0.0, 0.0), 1.0);
    let mat_floor = Material::new(Vec3::new(0.4, 0.4, 0.45), Vec3::new(0.1, 0.1, 0.1), 16.0);

    let spheres = vec![
        Sphere {
            center: Vec3::new(0.0, 1.0, -1.0),
            radius: 1.0,
            material: mat_mirror,
        },
        Sphere {
            center: Vec3::new(2.2, 0.7, 0.5),
            radius: 0.7,
            material: mat_copper,
        },
        Sphere {
            center: Vec3::new(-2.0, 0.6, 0.8),
            radius: 0.6,
            material: mat_matte_red,
        },
        // Oversized sphere standing in for a ground plane.
        Sphere {
            center: Vec3::new(0.0, -500.0, 0.0),
            radius: 500.0,
            material: mat_floor,
        },
    ];

    let lights = vec![
        PointLight {
            position: Vec3::new(4.0, 6.0, 4.0),
            intensity: Vec3::new(1.0, 1.0, 0.9),
        },
        PointLight {
            position: Vec3::new(-5.0, 3.0, 1.0),
            intensity: Vec3::new(0.3, 0.3, 0.4),
        },
    ];

    let sky = GradientSky {
        horizon: Vec3::new(0.8, 0.85, 0.9),
        zenith: Vec3::new(0.25, 0.45, 0.85),
    };

    let scene = Scene::new(spheres, lights, Box::new(sky));
    tracing::info!(
        spheres = scene.spheres.len(),
        lights = scene.lights.len(),
        bounce_limit = BOUNCE_LIMIT,
        "scene initialized"
    );
    scene
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut window = Window::new(
        "Whitted sphere tracer",
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        WindowOptions {
            resize: false,
            scale: minifb::Scale::FitScreen,
            ..WindowOptions::default()
        },
    )
    .unwrap();

    window.set_target_fps(60);
    let mut buffer: Vec<u32> = vec![0; BUFFER_WIDTH * BUFFER_HEIGHT];

    let scene = init_scene();

    let start_mouse = window.get_mouse_pos(MouseMode::Pass).unwrap_or((0.0, 0.0));
    let mut camera = Camera::new(Vec3::new(0.0, 1.5, 6.0), start_mouse);
    camera.pitch = -10.0;

    let mut logged_first_frame = false;
    while window.is_open() && !window.is_key_down(Key::Escape) {
        camera.update(&window);

        let frame_start = std::time::Instant::now();
        render_frame(&mut buffer, &camera, &scene);
        if !logged_first_frame {
            tracing::info!(elapsed = ?frame_start.elapsed(), "first frame rendered");
            logged_first_frame = true;
        }

        window
            .update_with_buffer(&buffer, BUFFER_WIDTH, BUFFER_HEIGHT)
            .unwrap();
    }
    tracing::info!("exiting");
}
