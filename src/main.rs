//! Brickfall entry point
//!
//! Headless driver: loads the scene files named on the command line (or
//! three built-in layouts when there are none), autopilots the paddle, and
//! logs how the run ended. Real hosts embed the library and bring their own
//! `Platform`.

use std::env;
use std::path::Path;

use brickfall::consts::*;
use brickfall::level;
use brickfall::render::DrawList;
use brickfall::{
    App, EntityRecord, FrameInput, NoTextures, Platform, RunOutcome, Scene, Settings,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brickfall starting...");

    let settings = Settings::load(Path::new("brickfall.json"));
    let master_seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Master seed: {}", master_seed);

    let args: Vec<String> = env::args().skip(1).collect();
    let layouts = scene_layouts(&args);
    if layouts.is_empty() {
        log::error!("No usable scenes");
        std::process::exit(1);
    }

    let mut scenes = Vec::with_capacity(layouts.len());
    for (index, records) in layouts.iter().enumerate() {
        let mut scene = Scene::new(master_seed.wrapping_add(index as u64));
        scene.load_entities(records, &mut NoTextures);
        scenes.push(scene);
    }

    let mut app = App::new(scenes);
    let mut platform = Autopilot::new(settings.collider_debug);
    match app.run(&mut platform, &settings) {
        RunOutcome::Completed => log::info!("ALL SCENES CLEARED"),
        RunOutcome::GameOver => log::info!("GAME OVER in scene {}", app.current_index() + 1),
        RunOutcome::Quit => log::info!("Stopped after {} frames", platform.frames),
    }
}

/// Scene record lists from the command line, or the built-in ones
fn scene_layouts(args: &[String]) -> Vec<Vec<EntityRecord>> {
    if args.is_empty() {
        return (1..=3).map(built_in_layout).collect();
    }
    args.iter()
        .filter_map(|path| match std::fs::read_to_string(path) {
            Ok(text) => Some(level::parse(&text)),
            Err(err) => {
                log::warn!("Skipping scene file {}: {}", path, err);
                None
            }
        })
        .collect()
}

/// A centered brick grid with `rows` rows. The third layout gets a pair of
/// unbreakable bookends on its top row.
fn built_in_layout(rows: u32) -> Vec<EntityRecord> {
    let mut records = vec![
        EntityRecord::Paddle { x: 710.0, y: 920.0 },
        EntityRecord::Ball {
            x: 790.0,
            y: 600.0,
            vx: 150.0,
            vy: -250.0,
        },
    ];

    let brick_w = BRICK_WIDTH * BRICK_SCALE;
    let brick_h = BRICK_HEIGHT * BRICK_SCALE;
    let columns = 14u32;
    let spacing = 10.0;
    let grid_w = columns as f32 * (brick_w + spacing) - spacing;
    let left = (WORLD_WIDTH - grid_w) / 2.0;

    for row in 0..rows {
        let y = 80.0 + row as f32 * (brick_h + spacing);
        for col in 0..columns {
            let x = left + col as f32 * (brick_w + spacing);
            let bookend = rows >= 3 && row == 0 && (col == 0 || col + 1 == columns);
            if bookend {
                records.push(EntityRecord::UnbreakableBrick { x, y });
            } else {
                records.push(EntityRecord::Brick { x, y });
            }
        }
    }
    records
}

/// Plays by chasing the lowest ball that is still coming down. A frame
/// budget backstops the run so a demo always terminates.
struct Autopilot {
    frames: u64,
    draw_list: DrawList,
}

impl Autopilot {
    const FRAME_BUDGET: u64 = 20_000;

    fn new(collider_debug: bool) -> Self {
        Self {
            frames: 0,
            draw_list: if collider_debug {
                DrawList::with_colliders()
            } else {
                DrawList::new()
            },
        }
    }
}

impl Platform for Autopilot {
    fn poll_input(&mut self, scene: &Scene) -> FrameInput {
        self.frames += 1;
        if self.frames > Self::FRAME_BUDGET {
            return FrameInput {
                left: false,
                right: false,
                quit: true,
            };
        }

        let Some(paddle_center) = scene
            .paddle()
            .and_then(|p| p.transform())
            .map(|t| t.x() + t.w() / 2.0)
        else {
            return FrameInput::default();
        };

        let mut target: Option<(f32, f32)> = None;
        for ball in scene.balls() {
            if ball.velocity().y <= 0.0 {
                continue;
            }
            let Some(transform) = ball.transform() else {
                continue;
            };
            let candidate = (transform.y(), transform.x() + transform.w() / 2.0);
            if target.is_none_or(|(y, _)| candidate.0 > y) {
                target = Some(candidate);
            }
        }
        let Some((_, ball_center)) = target else {
            return FrameInput::default();
        };

        // Dead zone so the paddle does not oscillate around the ball
        let dead_zone = 10.0;
        FrameInput {
            left: ball_center < paddle_center - dead_zone,
            right: ball_center > paddle_center + dead_zone,
            quit: false,
        }
    }

    fn present(&mut self, scene: &Scene) {
        self.draw_list.clear();
        scene.render(&mut self.draw_list);
    }
}
