use std::error::Error;
use std::time::{Duration, Instant};

use log::info;
use rand::RngCore;

use crate::display::Display;
use crate::input::Input;
use crate::interpreter::{Interpreter, StepResult};
use crate::machine::{LoadError, Machine};
use crate::sound::Sound;

/// 60Hz
const FRAME: Duration = Duration::from_micros(16_667);

/// whether the driver loop should come back for another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameResult {
    Running,
    Finished,
}

/// The driver: owns the machine and the interpreter, borrows the display,
/// input and sound collaborators, and multiplexes them into 60Hz frames.
pub struct Emulator<'a, R: RngCore> {
    machine: Machine,
    interpreter: Interpreter<R>,
    display: &'a mut dyn Display,
    input: &'a mut dyn Input,
    sound: &'a mut dyn Sound,
    instructions_per_frame: u32,
}

impl<'a, R: RngCore> Emulator<'a, R> {
    pub fn new(
        display: &'a mut dyn Display,
        input: &'a mut dyn Input,
        sound: &'a mut dyn Sound,
        rng: R,
        instructions_per_frame: u32,
    ) -> Self {
        Emulator {
            machine: Machine::new(),
            interpreter: Interpreter::new(rng),
            display,
            input,
            sound,
            instructions_per_frame,
        }
    }

    /// load a chip8 program
    pub fn load_program(&mut self, rom: &[u8]) -> Result<(), LoadError> {
        self.machine.load_rom(rom)
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// One frame: feed the key matrix, run the instruction batch, render if
    /// anything changed, tick the timers, gate the tone. The instruction
    /// batch ends early when the machine blocks on a key; the run ends when
    /// the program halts or the user quits.
    pub fn run_frame(&mut self) -> Result<FrameResult, Box<dyn Error>> {
        let input = self.input.poll()?;
        if input.quit {
            info!("quit requested");
            return Ok(FrameResult::Finished);
        }
        self.machine.keyboard = input.keys;

        for _ in 0..self.instructions_per_frame {
            match self.interpreter.step(&mut self.machine)? {
                StepResult::Continue => {}
                StepResult::Blocked => break,
                StepResult::Halted => {
                    info!("program counter left the loaded program; halting");
                    return Ok(FrameResult::Finished);
                }
            }
        }

        if self.machine.dirty {
            self.display.draw(&self.machine.framebuffer)?;
            self.machine.dirty = false;
        }

        self.machine.tick_timers();

        if self.machine.sound_timer > 0 {
            self.sound.beep()?;
        } else {
            self.sound.stop()?;
        }

        Ok(FrameResult::Running)
    }

    /// run frames at 60Hz until the program ends
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        loop {
            let frame_start = Instant::now();

            if self.run_frame()? == FrameResult::Finished {
                return Ok(());
            }

            // instructions run as fast as they like; the frame clock, and
            // with it the timers, stays at 60Hz
            let spent = frame_start.elapsed();
            if spent < FRAME {
                spin_sleep::sleep(FRAME - spent);
            }
        }
    }
}
