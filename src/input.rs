/// Held-key tracking and the key bindings for both sides.
///
/// Both sides share one keyboard, so keys are not acted on per event.
/// Instead `KeyTracker` records the frame each key was last pressed or
/// repeated, and every frame the bindings ask which keys are still "fresh".
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events, keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`). Keys expire after `HOLD_WINDOW` frames of silence.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEventKind};

use crate::entities::{Ability, ActorInput, Side};

/// A key counts as held if its last press/repeat arrived within this many
/// frames. OS key-repeat runs at 15 Hz or faster, so at 40 FPS a held key is
/// refreshed before it expires.
pub const HOLD_WINDOW: u64 = 4;

#[derive(Debug, Default)]
pub struct KeyTracker {
    last_seen: HashMap<KeyCode, u64>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, code: KeyCode, kind: KeyEventKind, frame: u64) {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(normalize(code), frame);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&normalize(code));
            }
        }
    }

    pub fn is_held(&self, code: KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(&normalize(code))
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}

/// Letters are tracked case-insensitively so Shift or Caps Lock does not
/// drop a held key.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Keys driving one side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bindings {
    pub left: KeyCode,
    pub right: KeyCode,
    /// Fire keys in tier order: shot, speed-shot, spread-shot.
    pub fire: [(KeyCode, Ability); 3],
}

impl Bindings {
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Player => Self {
                left: KeyCode::Left,
                right: KeyCode::Right,
                fire: [
                    (KeyCode::Char(' '), Ability::Shot),
                    (KeyCode::Down, Ability::SpeedShot),
                    (KeyCode::Up, Ability::SpreadShot),
                ],
            },
            Side::Alien => Self {
                left: KeyCode::Char('a'),
                right: KeyCode::Char('d'),
                fire: [
                    (KeyCode::Char('t'), Ability::Shot),
                    (KeyCode::Char('g'), Ability::SpeedShot),
                    (KeyCode::Char('b'), Ability::SpreadShot),
                ],
            },
        }
    }

    /// Snapshot this side's input. Opposite directions cancel out; when
    /// several fire keys are held the highest tier wins.
    pub fn read(&self, keys: &KeyTracker, frame: u64) -> ActorInput {
        let left = keys.is_held(self.left, frame) as i8;
        let right = keys.is_held(self.right, frame) as i8;
        let firing = self
            .fire
            .iter()
            .filter(|(code, _)| keys.is_held(*code, frame))
            .map(|(_, ability)| *ability)
            .max();
        ActorInput {
            direction: right - left,
            firing,
        }
    }
}
