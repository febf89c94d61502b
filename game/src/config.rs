use std::path::PathBuf;

use sdl2::pixels::Color;

use crate::cli::WindowSize;

/// Runtime settings. Asset paths are relative to the working directory.
#[derive(Debug, Clone)]
pub struct Settings {
    pub title: String,
    pub size: WindowSize,
    pub image: PathBuf,
    pub sound: PathBuf,
    pub font: PathBuf,
    pub big_font_size: u16,
    pub small_font_size: u16,
    pub text_color: Color,
    pub rect_color: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            title: "game".to_string(),
            size: WindowSize::default(),
            image: PathBuf::from("resources/ball.png"),
            sound: PathBuf::from("resources/shot.ogg"),
            font: PathBuf::from("resources/DejaVuSansMono.ttf"),
            big_font_size: 64,
            small_font_size: 32,
            text_color: Color::RGBA(255, 0, 0, 200),
            // blue, 50% transparent
            rect_color: Color::RGBA(0, 0, 255, 128),
        }
    }
}

impl Settings {
    pub fn with_size(mut self, size: WindowSize) -> Self {
        self.size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.size.to_string(), "800x600");
        assert_eq!((s.big_font_size, s.small_font_size), (64, 32));
        assert_eq!(s.rect_color.a, 128);
    }

    #[test]
    fn with_size_only_touches_size() {
        let s = Settings::default().with_size(WindowSize {
            width: 200,
            height: 100,
        });
        assert_eq!(s.size.to_string(), "200x100");
        assert_eq!(s.title, "game");
    }
}
