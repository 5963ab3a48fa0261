//! Raw-mode terminal frontend.
//!
//! Draws the two display regions above the keypad grid and feeds key
//! presses into the state machine, one action per event. The terminal is
//! restored through an RAII guard, so an error inside the loop cannot
//! leave the shell in raw mode.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use tracing::debug;

use crate::calculator::Calculator;
use crate::config::Config;
use crate::display::render_frame_with;
use crate::keypad::{self, Button, ButtonKind, LAYOUT};

/// Width of the keypad grid and the right-aligned display lines.
const DISPLAY_WIDTH: usize = 28;

/// Restores the terminal when dropped.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)
            .context("failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Run the interactive calculator until the user quits.
pub fn run(config: &Config) -> Result<()> {
    let _guard = RawModeGuard::enter()?;
    let mut calc = Calculator::new();

    draw(&calc, config)?;
    loop {
        match event::read().context("failed to read terminal event")? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if is_quit(&key) {
                    break;
                }
                if let Some(kind) = kind_for_key(&key, config) {
                    debug!(?kind, "applying key");
                    kind.apply(&mut calc);
                    draw(&calc, config)?;
                }
            }
            Event::Resize(..) => draw(&calc, config)?,
            _ => {}
        }
    }

    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Translate a key event into a keypad button.
///
/// The configured control bindings take precedence over the printable
/// mapping; Enter and Backspace/Delete are always bound.
fn kind_for_key(key: &KeyEvent, config: &Config) -> Option<ButtonKind> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(ButtonKind::Equals),
        KeyCode::Backspace | KeyCode::Delete => Some(ButtonKind::Delete),
        KeyCode::Char(c) if c == config.keys.clear => Some(ButtonKind::AllClear),
        KeyCode::Char(c) if c == config.keys.delete => Some(ButtonKind::Delete),
        KeyCode::Char(c) if c == config.keys.equals => Some(ButtonKind::Equals),
        KeyCode::Char(c) => keypad::kind_for_char(c),
        _ => None,
    }
}

/// Redraw the whole face: display regions, keypad grid, key hints.
fn draw(calc: &Calculator, config: &Config) -> Result<()> {
    let frame = render_frame_with(calc, config.display.group_separator);
    let mut out = io::stdout();

    queue!(out, Clear(ClearType::All)).context("failed to clear screen")?;

    let mut lines = Vec::new();
    lines.push(format!("{:>DISPLAY_WIDTH$}", frame.secondary));
    lines.push(format!("{:>DISPLAY_WIDTH$}", frame.primary));
    lines.push(String::new());
    for row in LAYOUT {
        lines.push(render_row(row));
    }
    lines.push(String::new());
    lines.push(format!(
        "{} clear   {} delete   enter =   q quit",
        config.keys.clear, config.keys.delete
    ));

    for (y, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(0, y as u16)).context("failed to move cursor")?;
        write!(out, "{line}").context("failed to write line")?;
    }
    out.flush().context("failed to flush terminal")?;
    Ok(())
}

/// Render one keypad row; wide buttons take two cells.
fn render_row(row: &[Button]) -> String {
    let mut line = String::new();
    for button in row {
        if button.wide {
            line.push_str(&format!("[{:^12}]", button.label));
        } else {
            line.push_str(&format!("[{:^5}]", button.label));
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operator;

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_printable_keys_reach_the_keypad_mapping() {
        let config = Config::default();
        assert_eq!(
            kind_for_key(&press('7'), &config),
            Some(ButtonKind::Digit('7'))
        );
        assert_eq!(
            kind_for_key(&press('/'), &config),
            Some(ButtonKind::Operator(Operator::Divide))
        );
        assert_eq!(kind_for_key(&press('='), &config), Some(ButtonKind::Equals));
    }

    #[test]
    fn test_configured_bindings_take_precedence() {
        let mut config = Config::default();
        config.keys.clear = '0';
        assert_eq!(
            kind_for_key(&press('0'), &config),
            Some(ButtonKind::AllClear)
        );
        assert_eq!(
            kind_for_key(&press('x'), &config),
            Some(ButtonKind::Delete)
        );
    }

    #[test]
    fn test_special_keys_always_bound() {
        let config = Config::default();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let backspace = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(kind_for_key(&enter, &config), Some(ButtonKind::Equals));
        assert_eq!(kind_for_key(&backspace, &config), Some(ButtonKind::Delete));
    }

    #[test]
    fn test_modified_keys_ignored() {
        let config = Config::default();
        let ctrl_five = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::CONTROL);
        assert_eq!(kind_for_key(&ctrl_five, &config), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(&press('q')));
        assert!(is_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit(&press('c')));
    }

    #[test]
    fn test_row_rendering_keeps_grid_width() {
        for row in LAYOUT {
            let rendered = render_row(row);
            assert_eq!(rendered.chars().count(), DISPLAY_WIDTH);
        }
    }
}
