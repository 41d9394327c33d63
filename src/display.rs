use std::io;

use crossterm::{cursor, execute, terminal};
use tui::backend::CrosstermBackend;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::symbols::Marker;
use tui::widgets::canvas::{Canvas, Points};
use tui::widgets::{Block, Borders};
use tui::Terminal;

use crate::machine::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Display is used by the driver to put the framebuffer on a screen. It
/// should abstract the implementation details, so a variety of kinds of
/// screen would work.
pub trait Display {
    /// render one frame; data holds one byte per pixel, 0 or 1, row-major
    fn draw(&mut self, data: &[u8]) -> Result<(), io::Error>;
}

/// monochrome display in a terminal, rendered with TUI on a crossterm
/// backend; takes over the alternate screen until dropped
pub struct MonoTermDisplay {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl MonoTermDisplay {
    pub fn new() -> Result<MonoTermDisplay, io::Error> {
        let mut stdout = io::stdout();
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        Ok(MonoTermDisplay {
            terminal: Terminal::new(backend)?,
        })
    }
}

impl Drop for MonoTermDisplay {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show);
    }
}

impl Display for MonoTermDisplay {
    fn draw(&mut self, data: &[u8]) -> Result<(), io::Error> {
        // make sure we're given exactly the right amount of data to draw
        assert_eq!(
            data.len(),
            SCREEN_WIDTH * SCREEN_HEIGHT,
            "MonoTermDisplay must have correct-sized data to draw"
        );

        // 1:1 ratio between terminal cells, chip8 pixels and the internal
        // TUI canvas
        self.terminal.draw(|f| {
            let size = Rect::new(0, 0, 2 + SCREEN_WIDTH as u16, 2 + SCREEN_HEIGHT as u16);

            let canvas = Canvas::default()
                .block(
                    Block::default()
                        .title("CHIP-8")
                        .borders(Borders::ALL)
                        .style(Style::default().bg(Color::Black)),
                )
                .x_bounds([0.0, (SCREEN_WIDTH - 1) as f64])
                .y_bounds([-1.0 * (SCREEN_HEIGHT - 1) as f64, 0.0])
                .marker(Marker::Block)
                .paint(|ctx| {
                    // paint unlit pixels too so stale cells never linger
                    ctx.draw(&Points {
                        coords: &plane_coords(data, 0),
                        color: Color::Black,
                    });
                    ctx.draw(&Points {
                        coords: &plane_coords(data, 1),
                        color: Color::White,
                    });
                });
            f.render_widget(canvas, size);
        })?;
        Ok(())
    }
}

/// canvas coordinates of every pixel in `data` with value `plane`; TUI wants
/// y growing upward, the framebuffer stores rows top-down
fn plane_coords(data: &[u8], plane: u8) -> Vec<(f64, f64)> {
    data.iter()
        .enumerate()
        .filter(|&(_, &px)| px == plane)
        .map(|(idx, _)| {
            (
                (idx % SCREEN_WIDTH) as f64,
                -1.0 * (idx / SCREEN_WIDTH) as f64,
            )
        })
        .collect()
}

/// useful for testing non-display routines
pub struct DummyDisplay {
    pub frames: usize,
}

impl DummyDisplay {
    pub fn new() -> DummyDisplay {
        DummyDisplay { frames: 0 }
    }
}

impl Display for DummyDisplay {
    fn draw(&mut self, _data: &[u8]) -> Result<(), io::Error> {
        self.frames += 1;
        Ok(())
    }
}
