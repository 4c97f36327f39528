//! Keyboard routing from discrete key presses to world commands

use super::state::Prompt;
use anyhow::Result;
use std::fmt;
use std::str::FromStr;

/// A key press delivered by whatever front end polls the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Space,
    Up,
    Down,
    Enter,
    Escape,
}

/// Mouse buttons that edit cells: left paints, right erases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

impl MouseButton {
    /// Cell state a click with this button writes
    pub fn paints_alive(self) -> bool {
        matches!(self, MouseButton::Left)
    }
}

/// Everything a key press can ask the world to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Run,
    Stop,
    ToggleRunStop,
    Clear,
    Gradient,
    BeginDensityPrompt,
    DensityDigit(u8),
    BeginModePrompt,
    StepMode(i32),
    ConfirmMode,
    CancelPrompt,
    Quit,
}

/// Translate a key into a command given the prompt currently open
pub fn route(prompt: Prompt, key: Key) -> Option<Command> {
    match (prompt, key) {
        (_, Key::Char('q')) => Some(Command::Quit),

        (Prompt::DensityDigit, Key::Char(c)) => c
            .to_digit(10)
            .map(|digit| Command::DensityDigit(digit as u8)),
        (Prompt::DensityDigit, Key::Escape) => Some(Command::CancelPrompt),
        (Prompt::DensityDigit, _) => None,

        (Prompt::ModeChoice, Key::Up) => Some(Command::StepMode(1)),
        (Prompt::ModeChoice, Key::Down) => Some(Command::StepMode(-1)),
        (Prompt::ModeChoice, Key::Enter) => Some(Command::ConfirmMode),
        (Prompt::ModeChoice, Key::Escape) => Some(Command::CancelPrompt),
        (Prompt::ModeChoice, _) => None,

        (Prompt::None, Key::Char('r')) => Some(Command::Run),
        (Prompt::None, Key::Char('s')) => Some(Command::Stop),
        (Prompt::None, Key::Space) => Some(Command::ToggleRunStop),
        (Prompt::None, Key::Char('c')) => Some(Command::Clear),
        (Prompt::None, Key::Char('g')) => Some(Command::Gradient),
        (Prompt::None, Key::Char('n')) => Some(Command::BeginDensityPrompt),
        (Prompt::None, Key::Char('m')) => Some(Command::BeginModePrompt),
        (Prompt::None, Key::Escape) => Some(Command::Quit),
        (Prompt::None, _) => None,
    }
}

impl FromStr for Key {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_ascii_lowercase();
        let key = match token.as_str() {
            "space" | " " => Key::Space,
            "up" => Key::Up,
            "down" => Key::Down,
            "enter" | "return" => Key::Enter,
            "esc" | "escape" => Key::Escape,
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => anyhow::bail!("Unknown key: '{}'", s),
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Space => write!(f, "space"),
            Key::Up => write!(f, "up"),
            Key::Down => write!(f, "down"),
            Key::Enter => write!(f, "enter"),
            Key::Escape => write!(f, "esc"),
        }
    }
}

/// Parse a comma separated key script such as `m,down,enter,r`
pub fn parse_key_script(script: &str) -> Result<Vec<Key>> {
    script
        .split(',')
        .filter(|token| !token.trim().is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_keys() {
        assert_eq!(route(Prompt::None, Key::Char('r')), Some(Command::Run));
        assert_eq!(route(Prompt::None, Key::Space), Some(Command::ToggleRunStop));
        assert_eq!(route(Prompt::None, Key::Char('m')), Some(Command::BeginModePrompt));
        assert_eq!(route(Prompt::None, Key::Char('5')), None);
        assert_eq!(route(Prompt::None, Key::Up), None);
    }

    #[test]
    fn test_density_prompt_takes_digits() {
        assert_eq!(route(Prompt::DensityDigit, Key::Char('7')), Some(Command::DensityDigit(7)));
        assert_eq!(route(Prompt::DensityDigit, Key::Char('r')), None);
        assert_eq!(route(Prompt::DensityDigit, Key::Escape), Some(Command::CancelPrompt));
        assert_eq!(route(Prompt::DensityDigit, Key::Char('q')), Some(Command::Quit));
    }

    #[test]
    fn test_mode_prompt_takes_arrows() {
        assert_eq!(route(Prompt::ModeChoice, Key::Up), Some(Command::StepMode(1)));
        assert_eq!(route(Prompt::ModeChoice, Key::Down), Some(Command::StepMode(-1)));
        assert_eq!(route(Prompt::ModeChoice, Key::Enter), Some(Command::ConfirmMode));
        assert_eq!(route(Prompt::ModeChoice, Key::Char('c')), None);
    }

    #[test]
    fn test_parse_key_script() {
        let keys = parse_key_script("m, Down ,enter,space,5,").unwrap();
        assert_eq!(
            keys,
            vec![Key::Char('m'), Key::Down, Key::Enter, Key::Space, Key::Char('5')]
        );
        assert!(parse_key_script("m,sideways").is_err());
    }

    #[test]
    fn test_mouse_buttons() {
        assert!(MouseButton::Left.paints_alive());
        assert!(!MouseButton::Right.paints_alive());
    }
}
