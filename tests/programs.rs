//! Whole-machine tests: small hand-assembled programs run through the
//! public API, the way a front-end would drive them.

use rand::rngs::StdRng;
use rand::SeedableRng;

use cosmac8::display::DummyDisplay;
use cosmac8::emulator::{Emulator, FrameResult};
use cosmac8::input::DummyInput;
use cosmac8::interpreter::{Interpreter, StepResult};
use cosmac8::machine::{Machine, SCREEN_WIDTH};
use cosmac8::sound::Mute;

fn run_to_halt(rom: &[u8]) -> Machine {
    let mut machine = Machine::new();
    machine.load_rom(rom).unwrap();
    let mut interpreter = Interpreter::new(StdRng::seed_from_u64(0));

    for _ in 0..10_000 {
        match interpreter.step(&mut machine).unwrap() {
            StepResult::Continue => {}
            StepResult::Halted => return machine,
            StepResult::Blocked => panic!("program blocked on input"),
        }
    }
    panic!("program did not halt");
}

#[test]
fn countdown_loop_runs_to_completion() {
    // VA counts down from 5, then execution falls off the program end
    let machine = run_to_halt(&[
        0x6a, 0x05, // VA = 5
        0x7a, 0xff, // VA += -1
        0x3a, 0x00, // skip next if VA == 0
        0x12, 0x02, // jump back to the decrement
    ]);
    assert_eq!(machine.v[0xa], 0);
    assert_eq!(machine.pc, 0x208);
}

#[test]
fn bcd_font_pipeline_draws_a_digit() {
    // split 123 into digits, then draw the glyph for the middle one
    let machine = run_to_halt(&[
        0x6a, 0x7b, // VA = 123
        0xa3, 0x00, // I = 0x300
        0xfa, 0x33, // BCD of VA -> 1, 2, 3
        0xf2, 0x65, // V0..V2 = 1, 2, 3
        0xf1, 0x29, // I = glyph address for V1 (digit 2)
        0x6c, 0x08, // VC = 8
        0x6d, 0x03, // VD = 3
        0xdc, 0xd5, // draw 5 rows at (8, 3)
    ]);
    assert_eq!(machine.v[..3], [1, 2, 3]);
    assert_eq!(machine.i, 10);

    // the framebuffer region at (8, 3) matches the glyph bitmap
    for row in 0..5 {
        let bits = machine.ram[10 + row];
        for col in 0..8 {
            let lit = bits & (0x80 >> col) != 0;
            let idx = (3 + row) * SCREEN_WIDTH + 8 + col;
            assert_eq!(
                machine.framebuffer[idx] == 1,
                lit,
                "pixel at row {} col {}",
                row,
                col
            );
        }
    }
    assert_eq!(machine.v[0xf], 0); // nothing was erased
}

#[test]
fn nested_subroutines_return_in_order() {
    let machine = run_to_halt(&[
        0x22, 0x06, // call A
        0x60, 0xaa, // V0 = 0xAA, runs after both returns
        0x12, 0x0e, // jump off the program end
        0x22, 0x0a, // A: call B
        0x00, 0xee, // A: return
        0x61, 0xbb, // B: V1 = 0xBB
        0x00, 0xee, // B: return
    ]);
    assert_eq!(machine.v[0], 0xaa);
    assert_eq!(machine.v[1], 0xbb);
    assert_eq!(machine.sp, 0);
}

#[test]
fn delay_timer_paces_a_spin_loop() {
    // the program spins reading the delay timer; only the 60Hz frame clock
    // moves it toward zero
    let mut display = DummyDisplay::new();
    let mut input = DummyInput::new(&[]);
    let mut sound = Mute::new();
    let mut emu = Emulator::new(&mut display, &mut input, &mut sound, StdRng::seed_from_u64(0), 4);
    emu.load_program(&[
        0x6a, 0x03, // VA = 3
        0xfa, 0x15, // delay = VA
        0xfa, 0x07, // VA = delay
        0x3a, 0x00, // skip next if VA == 0
        0x12, 0x04, // jump back to the read
    ])
    .unwrap();

    let mut frames = 0;
    loop {
        frames += 1;
        assert!(frames < 100, "spin loop never saw the timer expire");
        if emu.run_frame().unwrap() == FrameResult::Finished {
            break;
        }
    }
    assert_eq!(emu.machine().v[0xa], 0);
    assert!(frames >= 3, "timer expired too quickly ({} frames)", frames);
}

#[test]
fn keypad_program_reads_a_held_key() {
    let mut display = DummyDisplay::new();
    let mut input = DummyInput::new(&[0xb]);
    let mut sound = Mute::new();
    let mut emu = Emulator::new(&mut display, &mut input, &mut sound, StdRng::seed_from_u64(0), 10);
    emu.load_program(&[
        0xfa, 0x0a, // wait for a key into VA
        0xfa, 0x18, // sound timer = VA
    ])
    .unwrap();

    while emu.run_frame().unwrap() == FrameResult::Running {}
    assert_eq!(emu.machine().v[0xa], 0xb);
}
