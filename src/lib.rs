//! A CHIP-8 virtual machine.
//!
//! ## Design
//!
//! * the machine state is plain data: RAM, registers, call stack, timers,
//!   key matrix, framebuffer. Only the interpreter mutates it, one
//!   instruction per `step`
//! * the interpreter keeps no state of its own beyond the random source, so
//!   tests can drive a machine with a deterministic generator
//! * abstract display/input/sound behind traits so a variety of front-ends
//!   would work; starting with TUI in-console
//! * instructions run as fast as possible inside a frame, then the driver
//!   sleeps to 60Hz; the timers tick on the frame clock, not the
//!   instruction clock
//! * "wait for key" parks the program counter on the instruction itself, so
//!   the driver can simply come back next frame
//!
//! Model
//!
//! main
//!  |-- display, input, sound (collaborators behind traits)
//!  `-- emulator(display, input, sound)
//!       |-- machine state
//!       |-- interpreter(rng)
//!       `-- frame loop
//!            |-- input.poll() -> key matrix (and quit?)
//!            |-- interpreter.step() * instructions_per_frame
//!            |-- display.draw() if the framebuffer is dirty
//!            |-- machine.tick_timers()
//!            |-- sound on while the sound timer runs
//!            `-- sleep out the rest of the frame

pub mod display;
pub mod emulator;
pub mod input;
pub mod interpreter;
pub mod machine;
pub mod sound;
