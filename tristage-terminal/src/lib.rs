//! Terminal playback and file export for rendered triptych sequences.
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tristage_core::{Frame, Triptych};

pub mod export;
pub mod label;
pub mod renderer;

pub use renderer::TriptychRenderer;

/// One frame of the animation, flattened for display.
pub struct PreviewFrame {
    pub angle: f64,
    pub image: Triptych,
}

impl From<&Frame> for PreviewFrame {
    fn from(frame: &Frame) -> Self {
        Self {
            angle: frame.angle,
            image: frame.triptych(),
        }
    }
}

/// Loops a rendered sequence in the terminal until the user quits.
pub struct PreviewApp {
    frames: Vec<PreviewFrame>,
    renderer: TriptychRenderer,
    frame_interval: Duration,
    current: usize,
    paused: bool,
    running: bool,
}

impl PreviewApp {
    pub fn new(frames: Vec<PreviewFrame>, fps: u32) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            frames,
            // top line is the status bar
            renderer: TriptychRenderer::new(width as usize, (height as usize).saturating_sub(1)),
            frame_interval: Duration::from_millis(1000 / u64::from(fps.max(1))),
            current: 0,
            paused: false,
            running: true,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        if self.frames.is_empty() {
            return Ok(());
        }

        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let mut last_advance = Instant::now();
        self.render()?;

        while self.running {
            let wait = self.frame_interval.saturating_sub(last_advance.elapsed());
            if event::poll(wait)? {
                self.handle_input()?;
                self.render()?;
                continue;
            }

            if !self.paused {
                self.step(1);
                self.render()?;
            }
            last_advance = Instant::now();
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char(' ') => {
                    self.paused = !self.paused;
                }
                KeyCode::Right | KeyCode::Char('d') => {
                    self.paused = true;
                    self.step(1);
                }
                KeyCode::Left | KeyCode::Char('a') => {
                    self.paused = true;
                    self.step(-1);
                }
                _ => {}
            },
            Event::Resize(width, height) => {
                self.renderer
                    .resize(width as usize, (height as usize).saturating_sub(1));
                execute!(stdout(), terminal::Clear(ClearType::All))?;
            }
            _ => {}
        }
        Ok(())
    }

    fn step(&mut self, delta: isize) {
        let len = self.frames.len() as isize;
        self.current = (self.current as isize + delta).rem_euclid(len) as usize;
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = &self.frames[self.current];
        let mut stdout = stdout();

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Tristage | {:>6.1} deg | frame {}/{}{} | L1 edges  L2 fill  L3 filter | Space=Pause Arrows=Step Q=Quit",
                frame.angle,
                self.current + 1,
                self.frames.len(),
                if self.paused { " (paused)" } else { "" }
            )),
            terminal::Clear(ClearType::UntilNewLine),
            ResetColor,
            cursor::MoveTo(0, 1)
        )?;

        self.renderer.draw(&frame.image, &mut stdout)?;

        stdout.flush()?;
        Ok(())
    }
}
