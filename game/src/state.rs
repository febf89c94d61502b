use backend::input::{InputEvent, Key, MouseButtonId};
use sdl2::rect::Rect;

pub const PLAYER_SIZE: u32 = 100;
/// Pixels moved per arrow key press.
pub const STEP: i32 = 20;

/// The movable rectangle. It is not clamped to the screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
}

impl Player {
    pub fn centered(width: u32, height: u32) -> Self {
        Player {
            x: width as i32 / 2 - PLAYER_SIZE as i32 / 2,
            y: height as i32 / 2,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }
}

/// Cosmetic rotation of the image, one degree per frame.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Spin(pub i32);

impl Spin {
    /// Returns the angle for this frame in degrees and moves to the next one.
    pub fn advance(&mut self) -> f64 {
        let degrees = f64::from(self.0 % 360);
        self.0 = self.0.wrapping_add(1);
        degrees
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    pub elapsed_ms: f64,
}

impl FrameTime {
    /// The frame counter label; on a zero-length frame the FPS saturates.
    pub fn label(&self) -> String {
        format!(
            "{} ms / frame, {} FPS",
            self.elapsed_ms as i32,
            (1000.0 / self.elapsed_ms) as i32
        )
    }
}

/// Measures time between performance counter samples. The first sample is
/// taken against a counter of 0.
#[derive(Debug, Default)]
pub struct FrameTimer {
    prev: u64,
}

impl FrameTimer {
    pub fn sample(&mut self, now: u64, frequency: u64) -> FrameTime {
        let ticks = now.wrapping_sub(self.prev);
        self.prev = now;
        let elapsed_ms = if frequency == 0 {
            0.0
        } else {
            ticks as f64 * 1000.0 / frequency as f64
        };
        FrameTime { elapsed_ms }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Effect {
    PlaySound,
}

pub struct GameState {
    pub player: Player,
    pub spin: Spin,
    pub timer: FrameTimer,
    running: bool,
}

impl GameState {
    pub fn new(width: u32, height: u32) -> Self {
        GameState {
            player: Player::centered(width, height),
            spin: Spin::default(),
            timer: FrameTimer::default(),
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn handle(&mut self, event: &InputEvent) -> Option<Effect> {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape | Key::Q) => {
                self.running = false;
                None
            }
            InputEvent::KeyDown(Key::Down) => {
                self.player.y = self.player.y.wrapping_add(STEP);
                None
            }
            InputEvent::KeyDown(Key::Up) => {
                self.player.y = self.player.y.wrapping_sub(STEP);
                None
            }
            InputEvent::KeyDown(Key::Space) => Some(Effect::PlaySound),
            _ => None,
        }
    }
}

/// Line printed for events that have no effect on the game.
pub fn diagnostic(event: &InputEvent) -> Option<String> {
    match event {
        InputEvent::KeyDown(Key::Other(name)) => Some(format!("key: {name}")),
        InputEvent::MouseMotion { x, y, xrel, yrel } => {
            Some(format!("mouse: {x}, {y} ({xrel:+}, {yrel:+})"))
        }
        InputEvent::MouseButtonUp(button) => {
            let (name, x, y) = match *button {
                MouseButtonId::Left(x, y) => ("left", x, y),
                MouseButtonId::Right(x, y) => ("right", x, y),
                MouseButtonId::Middle(x, y) => ("middle", x, y),
                MouseButtonId::Other(x, y) => ("other", x, y),
            };
            Some(format!("mouse button up: {name} at {x}, {y}"))
        }
        _ => None,
    }
}
