//! Application driver: scenes in sequence under a fixed frame pace
//!
//! `App` owns the loaded scenes and plays them in order; the host plugs in
//! a [`Platform`] for input and presentation. Physics scale by measured
//! delta time, so a slow frame just makes the next step larger. There is
//! no catch-up.

use std::time::{Duration, Instant};

use crate::settings::Settings;
use crate::sim::{FrameInput, Scene, SceneOutcome};

/// Host seam for input and output
pub trait Platform {
    /// Sample the input devices for this frame. The scene is provided
    /// read-only so synthetic drivers can steer from game state.
    fn poll_input(&mut self, scene: &Scene) -> FrameInput;

    /// Show the frame. What "show" means is the host's business.
    fn present(&mut self, scene: &Scene);
}

/// What one frame concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    /// The last scene cleared
    Finished,
    /// The current scene ran out of balls
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    GameOver,
    Quit,
}

/// The scene sequencer
pub struct App {
    scenes: Vec<Scene>,
    current: usize,
}

impl App {
    pub fn new(scenes: Vec<Scene>) -> Self {
        Self { scenes, current: 0 }
    }

    pub fn current_scene(&self) -> Option<&Scene> {
        self.scenes.get(self.current)
    }

    /// Zero-based index of the scene in play
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Run input and update for one frame, advancing to the next scene
    /// when the current one clears
    pub fn frame(&mut self, input: &FrameInput, dt: f32) -> FrameOutcome {
        let Some(scene) = self.scenes.get_mut(self.current) else {
            return FrameOutcome::Finished;
        };

        scene.input(input, dt);
        match scene.update(dt) {
            SceneOutcome::Running => FrameOutcome::Continue,
            SceneOutcome::GameOver => FrameOutcome::GameOver,
            SceneOutcome::Cleared => {
                if self.current + 1 < self.scenes.len() {
                    self.current += 1;
                    log::info!("Scene {} done, advancing", self.current);
                    FrameOutcome::Continue
                } else {
                    FrameOutcome::Finished
                }
            }
        }
    }

    /// Drive frames until the run ends: poll, simulate, present, then
    /// sleep out the rest of the frame budget if the frame came in early.
    /// A `target_fps` of zero runs unpaced.
    pub fn run(&mut self, platform: &mut dyn Platform, settings: &Settings) -> RunOutcome {
        let frame_budget = if settings.target_fps > 0 {
            Some(Duration::from_millis(1000 / settings.target_fps as u64))
        } else {
            None
        };
        let mut last_frame = Instant::now();

        loop {
            let frame_start = Instant::now();
            let dt = frame_start.duration_since(last_frame).as_secs_f32();
            last_frame = frame_start;

            let Some(scene) = self.current_scene() else {
                return RunOutcome::Completed;
            };
            let input = platform.poll_input(scene);
            if input.quit {
                log::info!("Quit requested");
                return RunOutcome::Quit;
            }

            let outcome = self.frame(&input, dt);
            if let Some(scene) = self.current_scene() {
                platform.present(scene);
            }

            match outcome {
                FrameOutcome::Continue => {}
                FrameOutcome::Finished => return RunOutcome::Completed,
                FrameOutcome::GameOver => return RunOutcome::GameOver,
            }

            if let Some(budget) = frame_budget {
                let elapsed = frame_start.elapsed();
                if elapsed < budget {
                    std::thread::sleep(budget - elapsed);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::NoTextures;
    use crate::level::EntityRecord;

    const DT: f32 = 1.0 / 60.0;

    fn scene_with(seed: u64, records: &[EntityRecord]) -> Scene {
        let mut scene = Scene::new(seed);
        scene.load_entities(records, &mut NoTextures);
        scene
    }

    /// A scene with a parked ball and one far brick; runs forever
    fn endless_scene() -> Scene {
        scene_with(
            1,
            &[
                EntityRecord::Ball {
                    x: 100.0,
                    y: 100.0,
                    vx: 0.0,
                    vy: 0.0,
                },
                EntityRecord::Brick { x: 1000.0, y: 100.0 },
            ],
        )
    }

    /// A scene with a ball and no bricks; clears on its first update
    fn instant_clear_scene() -> Scene {
        scene_with(
            1,
            &[EntityRecord::Ball {
                x: 100.0,
                y: 100.0,
                vx: 0.0,
                vy: 0.0,
            }],
        )
    }

    /// A scene with no balls at all; game over on its first update
    fn no_balls_scene() -> Scene {
        scene_with(1, &[EntityRecord::Brick { x: 100.0, y: 100.0 }])
    }

    struct ScriptedPlatform {
        quit_immediately: bool,
        polls: u32,
        presents: u32,
    }

    impl ScriptedPlatform {
        fn new(quit_immediately: bool) -> Self {
            Self {
                quit_immediately,
                polls: 0,
                presents: 0,
            }
        }
    }

    impl Platform for ScriptedPlatform {
        fn poll_input(&mut self, _scene: &Scene) -> FrameInput {
            self.polls += 1;
            FrameInput {
                left: false,
                right: false,
                quit: self.quit_immediately,
            }
        }

        fn present(&mut self, _scene: &Scene) {
            self.presents += 1;
        }
    }

    fn unpaced() -> Settings {
        Settings {
            target_fps: 0,
            ..Settings::default()
        }
    }

    #[test]
    fn test_clearing_advances_to_next_scene() {
        let mut app = App::new(vec![instant_clear_scene(), endless_scene()]);

        assert_eq!(app.frame(&FrameInput::default(), DT), FrameOutcome::Continue);
        assert_eq!(app.current_index(), 1);

        // The next scene actually plays
        assert_eq!(app.frame(&FrameInput::default(), DT), FrameOutcome::Continue);
        assert_eq!(app.current_index(), 1);
    }

    #[test]
    fn test_clearing_the_last_scene_finishes() {
        let mut app = App::new(vec![instant_clear_scene()]);

        assert_eq!(app.frame(&FrameInput::default(), DT), FrameOutcome::Finished);
        // Stable once finished
        assert_eq!(app.frame(&FrameInput::default(), DT), FrameOutcome::Finished);
    }

    #[test]
    fn test_game_over_stops_the_sequence() {
        let mut app = App::new(vec![no_balls_scene(), endless_scene()]);

        assert_eq!(app.frame(&FrameInput::default(), DT), FrameOutcome::GameOver);
        assert_eq!(app.current_index(), 0);
    }

    #[test]
    fn test_run_honors_quit() {
        let mut app = App::new(vec![endless_scene()]);
        let mut platform = ScriptedPlatform::new(true);

        let outcome = app.run(&mut platform, &unpaced());

        assert_eq!(outcome, RunOutcome::Quit);
        assert_eq!(platform.polls, 1);
        assert_eq!(platform.presents, 0);
    }

    #[test]
    fn test_run_completes_and_presents() {
        let mut app = App::new(vec![instant_clear_scene()]);
        let mut platform = ScriptedPlatform::new(false);

        let outcome = app.run(&mut platform, &unpaced());

        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(platform.presents, 1);
    }

    #[test]
    fn test_run_reports_game_over() {
        let mut app = App::new(vec![no_balls_scene()]);
        let mut platform = ScriptedPlatform::new(false);

        assert_eq!(app.run(&mut platform, &unpaced()), RunOutcome::GameOver);
    }

    #[test]
    fn test_empty_app_completes() {
        let mut app = App::new(Vec::new());
        let mut platform = ScriptedPlatform::new(false);

        assert_eq!(app.run(&mut platform, &unpaced()), RunOutcome::Completed);
        assert_eq!(platform.polls, 0);
    }
}
