use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::{Enemy, Explosion, Missile, Phase, Player};
use crate::geometry::Rect as WorldRect;

/// Explicit HUD text placement, mapped to a one-line area plus alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    Center,
}

/// Resolves an anchor to the line area and alignment to render the text with.
fn anchored_line(area: Rect, anchor: Anchor) -> (Rect, Alignment) {
    let line = |y: u16| Rect {
        x: area.x + 1,
        y,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    match anchor {
        Anchor::TopLeft => (line(area.y), Alignment::Left),
        Anchor::TopRight => (line(area.y), Alignment::Right),
        Anchor::Center => (line(area.y + area.height / 2), Alignment::Center),
    }
}

/// View struct that holds all game state needed for rendering.
pub struct RenderView<'a> {
    pub phase: Phase,
    pub player: &'a Player,
    pub missiles: &'a [Missile],
    pub enemies: &'a [Enemy],
    pub explosions: &'a [Explosion],
    pub score: u32,
    pub area: Rect,
}

/// Handles all rendering responsibilities for the game. World coordinates are
/// a fixed 800×600 logical space scaled to the terminal area every frame.
pub struct GameRenderer;

impl GameRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Main render method that dispatches to phase-specific renderers.
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        match view.phase {
            Phase::Menu => self.render_menu(frame, view.area),
            Phase::Playing => self.render_game(frame, view),
            Phase::GameOver => self.render_game_over(frame, view),
        }
    }

    fn render_menu(&self, frame: &mut Frame, area: Rect) {
        let menu_text = vec![
            Line::from(""),
            Line::from(""),
            Line::from("ARCADE MISSILE GAME").centered().yellow().bold(),
            Line::from(""),
            Line::from("Press ENTER to Start").centered().white(),
            Line::from(""),
            Line::from("[A/D or Arrows: Move] [Space: Fire] [Q: Quit]")
                .centered()
                .dark_gray(),
        ];

        frame.render_widget(
            Paragraph::new(menu_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            area,
        );
    }

    /// Renders the active gameplay screen.
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        // Missiles first, then enemies and explosions, player on top.
        let buffer = frame.buffer_mut();
        for missile in view.missiles {
            if let Some((cx, cy)) = to_cell(missile.rect.x, missile.rect.y, area) {
                buffer.set_string(
                    cx,
                    cy,
                    missile.get_sprite().to_string(),
                    Style::default().fg(Color::Yellow),
                );
            }
        }

        for enemy in view.enemies {
            draw_sprite_lines(
                frame,
                area,
                &enemy.rect,
                &enemy.get_sprite_lines(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            );
        }

        let buffer = frame.buffer_mut();
        for explosion in view.explosions {
            let (cx, cy) = explosion.rect.center();
            if let Some((col, row)) = to_cell(cx, cy, area) {
                buffer.set_string(
                    col,
                    row,
                    explosion.get_sprite(),
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                );
            }
        }

        draw_sprite_lines(
            frame,
            area,
            &view.player.rect,
            &view.player.get_sprite_lines(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );

        // HUD: score top-left, lives top-right.
        self.draw_hud_text(
            frame,
            area,
            Anchor::TopLeft,
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{}", view.score),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        );
        self.draw_hud_text(
            frame,
            area,
            Anchor::TopRight,
            Line::from(vec![
                Span::styled("Lives: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{}", view.player.lives),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        );
    }

    fn draw_hud_text(&self, frame: &mut Frame, area: Rect, anchor: Anchor, line: Line) {
        let (text_area, alignment) = anchored_line(area, anchor);
        frame.render_widget(Paragraph::new(line).alignment(alignment), text_area);
    }

    /// Renders the game over screen.
    fn render_game_over(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let game_over_text = vec![
            Line::from(""),
            Line::from("╔═══════════════════════════╗").centered().red(),
            Line::from("║        GAME OVER          ║")
                .centered()
                .red()
                .bold(),
            Line::from("╚═══════════════════════════╝").centered().red(),
            Line::from(""),
            Line::from(format!("Final Score: {}", view.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(""),
            Line::from("Press ENTER to Restart").centered().white(),
            Line::from("Press ESC to Quit").centered().white(),
        ];

        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            area,
        );
    }
}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a world-space point to a terminal cell, or `None` when it falls
/// outside the drawable area.
fn to_cell(world_x: f32, world_y: f32, area: Rect) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let col = (world_x / SCREEN_WIDTH * area.width as f32).floor();
    let row = (world_y / SCREEN_HEIGHT * area.height as f32).floor();
    if col < 0.0 || row < 0.0 || col >= area.width as f32 || row >= area.height as f32 {
        return None;
    }
    Some((area.x + col as u16, area.y + row as u16))
}

/// Blits a multi-line ASCII sprite anchored at the scaled top-left of its
/// world rect, clipped to the area. Follows the batched Paragraph idiom.
fn draw_sprite_lines(
    frame: &mut Frame,
    area: Rect,
    world: &WorldRect,
    sprite_lines: &[&'static str],
    style: Style,
) {
    let Some((col, row)) = to_cell(world.x, world.y.max(0.0), area) else {
        return;
    };
    let sprite_width = sprite_lines.iter().map(|l| l.len()).max().unwrap_or(0) as u16;
    let sprite_height = sprite_lines.len() as u16;
    if col + sprite_width > area.x + area.width || row + sprite_height > area.y + area.height {
        return;
    }

    let text: Vec<Line> = sprite_lines
        .iter()
        .map(|line| Line::from(*line).style(style))
        .collect();
    let sprite_area = Rect {
        x: col,
        y: row,
        width: sprite_width,
        height: sprite_height,
    };
    frame.render_widget(Paragraph::new(text), sprite_area);
}
