use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use showreel_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Normalize a terminal key event into the form bindings are stored in.
    /// Terminals report Shift+Tab as BackTab, disagree on whether shifted
    /// letters carry SHIFT, and some add SHIFT to symbols like "?".
    pub fn from_event(key: &KeyEvent) -> Self {
        match key.code {
            KeyCode::BackTab => Self::shift(KeyCode::Tab),
            KeyCode::Char(c)
                if c.is_ascii_alphabetic()
                    && (c.is_ascii_uppercase() || key.modifiers.contains(KeyModifiers::SHIFT)) =>
            {
                Self::new(KeyCode::Char(c.to_ascii_uppercase()), key.modifiers | KeyModifiers::SHIFT)
            }
            KeyCode::Char(_) => Self::new(key.code, key.modifiers.difference(KeyModifiers::SHIFT)),
            _ => Self::new(key.code, key.modifiers),
        }
    }
}

/// Runtime keymap for efficient key-to-action lookup
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

/// Always-available alternatives, unless the config claims the key
const FALLBACK_KEYS: [(KeyCode, Action); 6] = [
    (KeyCode::Right, Action::NextSlide),
    (KeyCode::Left, Action::PrevSlide),
    (KeyCode::Down, Action::FocusNext),
    (KeyCode::Up, Action::FocusPrev),
    (KeyCode::Home, Action::FirstPage),
    (KeyCode::End, Action::LastPage),
];

impl Keymap {
    /// Build the lookup table. Unparseable keys and keys already taken by an
    /// earlier action are skipped with a warning.
    pub fn from_config(config: &KeymapConfig) -> Self {
        let configured = [
            (config.quit.as_str(), Action::Quit),
            (config.focus_next.as_str(), Action::FocusNext),
            (config.focus_prev.as_str(), Action::FocusPrev),
            (config.next_slide.as_str(), Action::NextSlide),
            (config.prev_slide.as_str(), Action::PrevSlide),
            (config.first_page.as_str(), Action::FirstPage),
            (config.last_page.as_str(), Action::LastPage),
            (config.toggle_hold.as_str(), Action::ToggleHold),
            (config.edit.as_str(), Action::Edit),
            (config.submit.as_str(), Action::Submit),
            (config.help.as_str(), Action::Help),
        ];

        let mut bindings = HashMap::new();
        for (notation, action) in configured {
            let Some(binding) = parse_key_binding(notation) else {
                warn!(key = notation, action = ?action, "Unrecognized key notation, binding skipped");
                continue;
            };
            match bindings.entry(binding) {
                Entry::Occupied(taken) => {
                    warn!(key = notation, bound = ?taken.get(), skipped = ?action, "Key already bound");
                }
                Entry::Vacant(slot) => {
                    slot.insert(action);
                }
            }
        }

        for (code, action) in FALLBACK_KEYS {
            bindings.entry(KeyBinding::simple(code)).or_insert(action);
        }

        Self { bindings }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    /// First configured key for an action, for hints
    pub fn key_for(&self, action: &Action) -> Option<KeyBinding> {
        let mut matches: Vec<KeyBinding> = self
            .bindings
            .iter()
            .filter(|(_, a)| *a == action)
            .map(|(k, _)| *k)
            .collect();
        // Prefer plain character keys so hints are short
        matches.sort_by_key(|k| (!matches!(k.code, KeyCode::Char(_)), k.modifiers.bits()));
        matches.into_iter().next()
    }
}

/// Short display form of a binding, e.g. "l", "C-s", "Tab"
pub fn describe(binding: &KeyBinding) -> String {
    let key = match binding.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        other => format!("{:?}", other),
    };
    if binding.modifiers.contains(KeyModifiers::CONTROL) {
        format!("C-{}", key)
    } else if binding.modifiers.contains(KeyModifiers::SHIFT) && !matches!(binding.code, KeyCode::Char(_)) {
        format!("S-{}", key)
    } else {
        key
    }
}

/// Names accepted inside `<...>`, matched case-insensitively
const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("cr", KeyCode::Enter),
    ("enter", KeyCode::Enter),
    ("return", KeyCode::Enter),
    ("esc", KeyCode::Esc),
    ("escape", KeyCode::Esc),
    ("tab", KeyCode::Tab),
    ("space", KeyCode::Char(' ')),
    ("spc", KeyCode::Char(' ')),
    ("bs", KeyCode::Backspace),
    ("backspace", KeyCode::Backspace),
    ("left", KeyCode::Left),
    ("right", KeyCode::Right),
    ("up", KeyCode::Up),
    ("down", KeyCode::Down),
    ("home", KeyCode::Home),
    ("end", KeyCode::End),
    ("pgup", KeyCode::PageUp),
    ("pageup", KeyCode::PageUp),
    ("pgdn", KeyCode::PageDown),
    ("pagedown", KeyCode::PageDown),
];

/// Parse Vim-style notation: a bare character ("l", "G", "?") or a
/// bracketed key with any number of `C-`/`S-` prefixes ("<C-s>", "<S-Tab>",
/// "<C-S-x>"). Shifted letters are stored uppercase.
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();
    let binding = match s.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) {
        Some(inner) if !inner.is_empty() => parse_bracketed(inner)?,
        _ => KeyBinding::simple(KeyCode::Char(single_char(s)?)),
    };
    Some(encode_shift(binding))
}

fn parse_bracketed(inner: &str) -> Option<KeyBinding> {
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = inner;
    loop {
        if let Some(tail) = rest.strip_prefix("C-") {
            modifiers |= KeyModifiers::CONTROL;
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("S-") {
            modifiers |= KeyModifiers::SHIFT;
            rest = tail;
        } else {
            break;
        }
    }

    let lower = rest.to_ascii_lowercase();
    let code = match NAMED_KEYS.iter().find(|(name, _)| *name == lower) {
        Some((_, code)) => *code,
        None => KeyCode::Char(single_char(rest)?.to_ascii_lowercase()),
    };
    Some(KeyBinding::new(code, modifiers))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// Letters carry Shift as their case as well as the modifier
fn encode_shift(binding: KeyBinding) -> KeyBinding {
    match binding.code {
        KeyCode::Char(c) if c.is_ascii_uppercase() => {
            KeyBinding::new(binding.code, binding.modifiers | KeyModifiers::SHIFT)
        }
        KeyCode::Char(c) if c.is_ascii_lowercase() && binding.modifiers.contains(KeyModifiers::SHIFT) => {
            KeyBinding::new(KeyCode::Char(c.to_ascii_uppercase()), binding.modifiers)
        }
        _ => binding,
    }
}
