use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::entities::Phase;

/// Discrete, drained-per-frame game actions triggered by key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Fire a missile (Playing only).
    Fire,
    /// Enter pressed on the menu or game-over screen: start a round.
    Start,
    /// Leave the process.
    Quit,
}

/// Keys that are held down for continuous horizontal movement.
#[derive(Debug, Default, Clone)]
pub struct Held {
    pub left: bool,
    pub right: bool,
}

/// Polls crossterm events once per frame and translates them into held-key
/// state plus a queue of one-shot actions.
pub struct InputManager {
    held: Held,
    oneshot_actions: Vec<InputAction>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            held: Held::default(),
            oneshot_actions: Vec::new(),
        }
    }

    /// Drains all pending events without blocking. Call once per frame before
    /// reading `held()` or `take_actions()`.
    pub fn poll_events(&mut self, phase: Phase) -> color_eyre::Result<()> {
        self.oneshot_actions.clear();

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key_event) => self.handle_key_event(key_event, phase),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {
                    // The renderer rescales from the frame area every draw.
                }
                _ => {}
            }
        }

        Ok(())
    }

    pub fn held(&self) -> &Held {
        &self.held
    }

    /// One-shot actions collected this frame, in arrival order.
    pub fn take_actions(&mut self) -> Vec<InputAction> {
        std::mem::take(&mut self.oneshot_actions)
    }

    /// Drops held movement, as on round transitions, so a key held through a
    /// phase change does not carry into the next round.
    pub fn clear_held(&mut self) {
        self.held = Held::default();
    }

    fn handle_key_event(&mut self, key_event: KeyEvent, phase: Phase) {
        match key_event.kind {
            KeyEventKind::Press => self.handle_key_press(key_event, phase),
            KeyEventKind::Release => self.handle_key_release(key_event.code),
            _ => {}
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, phase: Phase) {
        // Quit signal, honored in any phase.
        if matches!(key_event.code, KeyCode::Char('q') | KeyCode::Char('Q'))
            || (key_event.code == KeyCode::Char('c')
                && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        match phase {
            Phase::Menu => {
                if key_event.code == KeyCode::Enter {
                    self.oneshot_actions.push(InputAction::Start);
                }
            }
            Phase::Playing => match key_event.code {
                KeyCode::Char(' ') => self.oneshot_actions.push(InputAction::Fire),
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    self.held.left = true;
                    self.held.right = false;
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    self.held.right = true;
                    self.held.left = false;
                }
                _ => {}
            },
            Phase::GameOver => match key_event.code {
                KeyCode::Enter => self.oneshot_actions.push(InputAction::Start),
                KeyCode::Esc => self.oneshot_actions.push(InputAction::Quit),
                _ => {}
            },
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.held.left = false;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.held.right = false;
            }
            _ => {}
        }
    }
}
