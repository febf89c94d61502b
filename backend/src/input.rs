use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Q,
    Up,
    Down,
    Space,
    // SDL key name
    Other(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MouseButtonId {
    // x, y
    Left(i32, i32),
    Right(i32, i32),
    Middle(i32, i32),
    Other(i32, i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    MouseMotion {
        x: i32,
        y: i32,
        xrel: i32,
        yrel: i32,
    },
    MouseButtonUp(MouseButtonId),
}

impl From<Keycode> for Key {
    fn from(keycode: Keycode) -> Self {
        match keycode {
            Keycode::Escape => Key::Escape,
            Keycode::Q => Key::Q,
            Keycode::Up => Key::Up,
            Keycode::Down => Key::Down,
            Keycode::Space => Key::Space,
            other => Key::Other(other.name()),
        }
    }
}

fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(keycode),
            ..
        } => Some(InputEvent::KeyDown(keycode.into())),
        Event::MouseMotion {
            x, y, xrel, yrel, ..
        } => Some(InputEvent::MouseMotion { x, y, xrel, yrel }),
        Event::MouseButtonUp {
            mouse_btn, x, y, ..
        } => Some(InputEvent::MouseButtonUp(match mouse_btn {
            MouseButton::Left => MouseButtonId::Left(x, y),
            MouseButton::Right => MouseButtonId::Right(x, y),
            MouseButton::Middle => MouseButtonId::Middle(x, y),
            _ => MouseButtonId::Other(x, y),
        })),
        _ => None,
    }
}

/// Drains every pending event without blocking.
pub fn poll_events(event_pump: &mut EventPump) -> impl Iterator<Item = InputEvent> + '_ {
    event_pump.poll_iter().filter_map(translate)
}
