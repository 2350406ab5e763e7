use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::Instant;

use crate::audio::AudioManager;
use crate::collision;
use crate::config::FRAME_BUDGET;
use crate::entities::{Explosion, Groups, Phase, Player};
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};
use crate::spawner::Spawner;

/// The main application which holds the state and logic of the game:
/// the phase machine, the round state, and the frame loop.
pub struct App {
    running: bool,
    phase: Phase,
    player: Player,
    groups: Groups,
    score: u32,
    spawner: Spawner,
    last_frame: Instant,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
    audio_manager: AudioManager,
}

impl App {
    /// Construct a new instance of [`App`], starting on the menu screen.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            running: true,
            phase: Phase::Menu,
            player: Player::new(),
            groups: Groups::new(),
            score: 0,
            spawner: Spawner::new(now),
            last_frame: now,
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
            audio_manager: AudioManager::new(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            let frame_start = Instant::now();
            // Motion scales by real elapsed time, so a slow frame simply
            // produces a larger step rather than a slowdown.
            let dt = frame_start.duration_since(self.last_frame).as_secs_f32();
            self.last_frame = frame_start;

            terminal.draw(|frame| {
                let view = RenderView {
                    phase: self.phase,
                    player: &self.player,
                    missiles: &self.groups.missiles,
                    enemies: &self.groups.enemies,
                    explosions: &self.groups.explosions,
                    score: self.score,
                    area: frame.area(),
                };
                self.renderer.render(frame, &view);
            })?;

            self.input_manager.poll_events(self.phase)?;
            let actions = self.input_manager.take_actions();
            self.process_actions(&actions, frame_start);

            if self.phase == Phase::Playing {
                self.update_game(dt, frame_start);
            }

            // Pace to the target frame rate.
            let elapsed = frame_start.elapsed();
            if elapsed < FRAME_BUDGET {
                std::thread::sleep(FRAME_BUDGET - elapsed);
            }
        }
        Ok(())
    }

    /// Applies the frame's drained one-shot actions to the phase machine.
    fn process_actions(&mut self, actions: &[InputAction], now: Instant) {
        for action in actions {
            match action {
                InputAction::Quit => {
                    self.running = false;
                }
                InputAction::Start => {
                    if matches!(self.phase, Phase::Menu | Phase::GameOver) {
                        self.reset_round(now);
                    }
                }
                InputAction::Fire => {
                    if self.phase == Phase::Playing
                        && let Some(missile) = self.player.fire_missile(now)
                    {
                        self.audio_manager.play_fire();
                        self.groups.missiles.push(missile);
                    }
                }
            }
        }
    }

    /// Fresh round: score 0, full lives, empty groups, new ship.
    fn reset_round(&mut self, now: Instant) {
        self.score = 0;
        self.player = Player::new();
        self.groups.clear();
        self.spawner.reset(now);
        self.input_manager.clear_held();
        self.phase = Phase::Playing;
    }

    /// One Playing-phase simulation step: entity updates, spawning, then
    /// collision resolution over the post-update state.
    fn update_game(&mut self, dt: f32, now: Instant) {
        self.player.update(dt, self.input_manager.held());
        self.groups.update(dt);

        if let Some(enemy) = self.spawner.try_spawn(now, self.score, &mut rand::rng()) {
            self.groups.enemies.push(enemy);
        }

        self.resolve_collisions();
    }

    fn resolve_collisions(&mut self) {
        // Enemy–missile pass first; the player pass sees only the survivors.
        let hits = collision::resolve_missile_hits(&mut self.groups);
        for hit in &hits {
            self.score += hit.score;
            self.groups.explosions.push(Explosion::new(hit.center));
            self.audio_manager.play_explosion();
        }

        if collision::resolve_player_hits(&mut self.groups, &self.player) {
            self.groups
                .explosions
                .push(Explosion::new(self.player.rect.center()));
            // One life per frame, no matter how many enemies connected.
            self.player.lives -= 1;
            self.audio_manager.play_explosion();

            if self.player.lives <= 0 {
                self.phase = Phase::GameOver;
                self.input_manager.clear_held();
                self.audio_manager.play_game_over();
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
