use crossterm::event::{poll, read, Event, KeyCode, KeyModifiers};
use crossterm::terminal;
use log::warn;
use std::collections::HashMap;
use std::io;
use std::time::Duration;

/// physical key to CHIP-8 key, using the left-hand block of a qwerty
/// keyboard:
///   1 2 3 4        1 2 3 C
///   q w e r   ->   4 5 6 D
///   a s d f        7 8 9 E
///   z x c v        A 0 B F
const CHIP8_QWERTY_KEYMAP: [(char, u8); 16] = [
    ('1', 0x01),
    ('2', 0x02),
    ('3', 0x03),
    ('4', 0x0c),
    ('q', 0x04),
    ('w', 0x05),
    ('e', 0x06),
    ('r', 0x0d),
    ('a', 0x07),
    ('s', 0x08),
    ('d', 0x09),
    ('f', 0x0e),
    ('z', 0x0a),
    ('x', 0x00),
    ('c', 0x0b),
    ('v', 0x0f),
];

/// how many frames a key reads as held after its press event; the terminal
/// gives us no key-up events to go on
const KEY_HOLD_FRAMES: u8 = 12;

/// what the driver learns from one input poll
pub struct InputState {
    /// key-down flags for CHIP-8 keys 0x0..=0xF
    pub keys: [bool; 16],
    /// the user asked to leave the emulator
    pub quit: bool,
}

/// reads keypresses
pub trait Input {
    /// sample the key matrix, once per frame
    fn poll(&mut self) -> Result<InputState, io::Error>;
}

/// terminal implementation of Input; crossterm events in, a decaying
/// key-down matrix out. Owns raw mode until dropped.
pub struct CrosstermInput {
    hold: [u8; 16],
    keymap: HashMap<char, u8>,
}

impl CrosstermInput {
    pub fn new() -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        Ok(CrosstermInput {
            hold: [0; 16],
            keymap: HashMap::from(CHIP8_QWERTY_KEYMAP),
        })
    }
}

impl Drop for CrosstermInput {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl Input for CrosstermInput {
    fn poll(&mut self) -> Result<InputState, io::Error> {
        for frames in self.hold.iter_mut() {
            *frames = frames.saturating_sub(1);
        }

        let mut quit = false;
        while poll(Duration::from_millis(0))? {
            match read()? {
                Event::Key(evt) => match (evt.code, evt.modifiers) {
                    (KeyCode::Esc, _) => quit = true,
                    (KeyCode::Char('c'), KeyModifiers::CONTROL) => quit = true,
                    (KeyCode::Char(key), _) => match self.keymap.get(&key) {
                        Some(&mapped_key) => self.hold[mapped_key as usize] = KEY_HOLD_FRAMES,
                        None => warn!("can't map '{}' to a COSMAC key", key),
                    },
                    _ => {}
                },
                _ => {}
            }
        }

        let mut keys = [false; 16];
        for (down, &frames) in keys.iter_mut().zip(self.hold.iter()) {
            *down = frames > 0;
        }
        Ok(InputState { keys, quit })
    }
}

/// dummy Input implementation for testing
pub struct DummyInput {
    keys: [bool; 16],
    pub quit: bool,
}

impl DummyInput {
    pub fn new(pressed: &[u8]) -> Self {
        let mut keys = [false; 16];
        for &key in pressed {
            keys[key as usize] = true;
        }
        DummyInput { keys, quit: false }
    }
}

impl Input for DummyInput {
    fn poll(&mut self) -> Result<InputState, io::Error> {
        Ok(InputState {
            keys: self.keys,
            quit: self.quit,
        })
    }
}
