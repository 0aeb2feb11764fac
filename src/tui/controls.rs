//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;
use crate::config::ScenarioConfig;

/// Applies a key press to the app.
///
/// Digit `n` switches to the `n`-th entry of [`ScenarioConfig::PRESETS`].
/// Only [`KeyEventKind::Press`] is handled so keys do not fire twice on
/// terminals that report releases.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Char(' ') => app.toggle_pause(),
        KeyCode::Char('+' | '=') | KeyCode::Right => app.speed_up(),
        KeyCode::Char('-') | KeyCode::Left => app.speed_down(),
        KeyCode::Char('r') => app.restart(),
        KeyCode::Char(c) => {
            if let Some(name) = preset_for_key(c) {
                app.switch_preset(name);
            }
        }
        _ => {}
    }
}

fn preset_for_key(c: char) -> Option<&'static str> {
    let n = c.to_digit(10)?.checked_sub(1)?;
    ScenarioConfig::PRESETS.get(n as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_select_presets_in_order() {
        assert_eq!(preset_for_key('1'), Some("default"));
        assert_eq!(preset_for_key('2'), Some("uniform"));
        assert_eq!(preset_for_key('3'), Some("fan"));
        assert_eq!(preset_for_key('0'), None);
        assert_eq!(preset_for_key('4'), None);
        assert_eq!(preset_for_key('x'), None);
    }

    #[test]
    fn digit_key_switches_preset() {
        let mut app = App::from_preset("default");
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.preset_name, "fan");
        handle_key(&mut app, press(KeyCode::Char('9')));
        assert_eq!(app.preset_name, "fan");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::from_preset("default");
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.quit);

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.quit);
    }
}
