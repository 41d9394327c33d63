use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cosmac8::display::MonoTermDisplay;
use cosmac8::emulator::Emulator;
use cosmac8::input::CrosstermInput;
use cosmac8::sound::{Mute, SimpleBeep, Sound};

/// terminal CHIP-8 emulator
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// path to a CHIP-8 ROM image
    rom: PathBuf,

    /// instructions executed per 60Hz frame
    #[arg(long, default_value_t = 10)]
    ipf: u32,

    /// seed for the random number generator, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// disable the beeper
    #[arg(long)]
    mute: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    info!("loading rom: [path='{}']", args.rom.display());
    let rom = fs::read(&args.rom)?;

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // initialise collaborators; their Drop impls restore the terminal even
    // when the run ends in an error
    let mut display = MonoTermDisplay::new()?;
    let mut input = CrosstermInput::new()?;
    let mut sound: Box<dyn Sound> = if args.mute {
        Box::new(Mute::new())
    } else {
        Box::new(SimpleBeep::new())
    };

    let mut emulator = Emulator::new(&mut display, &mut input, sound.as_mut(), rng, args.ipf);
    emulator.load_program(&rom)?;
    emulator.run()
}
