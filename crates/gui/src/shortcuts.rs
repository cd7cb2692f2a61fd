//! Rotation lock keyboard shortcut

use egui::{Event, Key};

/// Key that toggles the camera rotation lock
pub const ROTATION_LOCK_KEY: Key = Key::Space;

/// Listener for [`ROTATION_LOCK_KEY`]. Events are only filtered through a
/// live guard, so dropping it (the app or harness going away) detaches the
/// listener.
///
/// Besides counting presses it removes the key from the input queue so no
/// widget (scroll areas, focused buttons) reacts to it.
#[derive(Debug)]
pub struct RotationLockShortcut {
    _private: (),
}

impl RotationLockShortcut {
    pub fn install() -> Self {
        tracing::debug!("Rotation lock shortcut installed");
        Self { _private: () }
    }

    /// Drain the shortcut from `events` and return how many times it toggles.
    /// Auto-repeat is swallowed without toggling.
    pub fn process(&self, events: &mut Vec<Event>) -> usize {
        let mut toggles = 0;
        events.retain(|event| match event {
            Event::Key {
                key,
                pressed,
                repeat,
                ..
            } if *key == ROTATION_LOCK_KEY => {
                if *pressed && !*repeat {
                    toggles += 1;
                }
                false
            }
            Event::Text(text) if text == " " => false,
            _ => true,
        });
        toggles
    }
}

impl Drop for RotationLockShortcut {
    fn drop(&mut self) {
        tracing::debug!("Rotation lock shortcut removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, pressed: bool, repeat: bool) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_process_counts_presses_and_drains_key() {
        let shortcut = RotationLockShortcut::install();
        let mut events = vec![
            key(Key::Space, true, false),
            Event::Text(" ".into()),
            key(Key::Space, true, true),
            key(Key::Space, false, false),
            key(Key::A, true, false),
            Event::Text("a".into()),
            key(Key::Space, true, false),
        ];
        assert_eq!(shortcut.process(&mut events), 2);
        assert_eq!(events, vec![key(Key::A, true, false), Event::Text("a".into())]);
    }

    #[test]
    fn test_repeat_only_never_toggles() {
        let shortcut = RotationLockShortcut::install();
        let mut events = vec![key(Key::Space, true, true), key(Key::Space, true, true)];
        assert_eq!(shortcut.process(&mut events), 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_other_keys_untouched() {
        let shortcut = RotationLockShortcut::install();
        let mut events = vec![key(Key::Delete, true, false), Event::Text("x".into())];
        let before = events.clone();
        assert_eq!(shortcut.process(&mut events), 0);
        assert_eq!(events, before);
    }
}
