use anyhow::Context;

use polyboard_engine::config::SceneConfig;
use polyboard_engine::input::{DragController, InputEvent};
use polyboard_engine::logging::init_logging;
use polyboard_engine::render::Framebuffer;

fn main() -> anyhow::Result<()> {
    init_logging(None);

    println!();
    println!("  polyboard studio — scan-line fill demo");
    println!("  drag session is scripted; snapshots land in the working dir");
    println!();

    let config = demo_config();
    let mut scene = config
        .build()
        .context("demo scene configuration is invalid")?;

    let mut fb = Framebuffer::new(config.width, config.height);
    scene.redraw(&mut fb);
    save_png("before.png", &fb)?;

    // Replay a scripted drag of the fan's center point. Each move event
    // repositions the point and fully redraws before the next one applies.
    let mut controller = DragController::new();
    for ev in drag_script() {
        controller.apply_event(&mut scene, &mut fb, ev);
    }
    save_png("after.png", &fb)?;

    log::info!("wrote before.png and after.png");
    Ok(())
}

/// Built-in demo scene: six triangles fanned around a shared center vertex,
/// so dragging the center deforms every polygon at once.
fn demo_config() -> SceneConfig {
    SceneConfig {
        width: 480,
        height: 360,
        vertices: vec![
            [80.0, 60.0, 0.0],
            [240.0, 40.0, 0.0],
            [400.0, 90.0, 0.0],
            [420.0, 250.0, 0.0],
            [240.0, 320.0, 0.0],
            [70.0, 260.0, 0.0],
            [240.0, 170.0, 0.0],
        ],
        colors: vec![
            [230, 70, 70],
            [70, 160, 230],
            [90, 200, 120],
            [240, 180, 60],
            [170, 110, 220],
            [230, 120, 170],
            [120, 120, 120],
        ],
        alpha: 0.75,
        polygons: vec![
            vec![0, 1, 6],
            vec![1, 2, 6],
            vec![2, 3, 6],
            vec![3, 4, 6],
            vec![4, 5, 6],
            vec![5, 0, 6],
        ],
    }
}

/// Grab the center vertex just off its exact position, pull it toward the
/// bottom right in a few steps, release.
fn drag_script() -> Vec<InputEvent> {
    vec![
        InputEvent::left_down(242.0, 168.0),
        InputEvent::moved(262.0, 188.0),
        InputEvent::moved(282.0, 203.0),
        InputEvent::moved(302.0, 218.0),
        InputEvent::left_up(302.0, 218.0),
    ]
}

fn save_png(path: &str, fb: &Framebuffer) -> anyhow::Result<()> {
    image::save_buffer(
        path,
        fb.as_bytes(),
        fb.width(),
        fb.height(),
        image::ExtendedColorType::Rgba8,
    )
    .with_context(|| format!("writing {path}"))
}
