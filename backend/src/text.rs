use std::path::Path;

use log::debug;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{TextureCreator, WindowCanvas};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::WindowContext;

use crate::error::{BackendError, Result};

/// Horizontal anchoring of a text label relative to its `x` coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
}

/// Opens a font file at the given point size.
pub fn load_font<'ttf>(
    ttf: &'ttf Sdl2TtfContext,
    path: &Path,
    point_size: u16,
) -> Result<Font<'ttf, 'static>> {
    let font = ttf
        .load_font(path, point_size)
        .map_err(|e| BackendError::asset(path, e))?;
    debug!("loaded font {path:?} at {point_size} pt");
    Ok(font)
}

/// Top-left corner of a label `width` pixels wide anchored at `(x, y)`.
pub fn text_origin(x: i32, y: i32, width: u32, anchor: Anchor) -> (i32, i32) {
    match anchor {
        Anchor::Left => (x, y),
        Anchor::Center => (x - (width / 2) as i32, y),
    }
}

/// Rasterizes `text` and copies it onto the canvas at its natural size.
///
/// Nothing is cached: the bitmap and the texture are created and released on
/// every call.
#[allow(clippy::too_many_arguments)]
pub fn draw_text(
    canvas: &mut WindowCanvas,
    texture_creator: &TextureCreator<WindowContext>,
    font: &Font,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    anchor: Anchor,
) -> Result<()> {
    // render the text into RAM
    let surface = font
        .render(text)
        .solid(color)
        .map_err(|e| BackendError::Render(format!("rendering text {text:?}: {e}")))?;

    // upload to the GPU
    let texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| BackendError::Render(e.to_string()))?;
    let (w, h) = (surface.width(), surface.height());
    drop(surface);

    let (left, top) = text_origin(x, y, w, anchor);
    canvas
        .copy(&texture, None, Rect::new(left, top, w, h))
        .map_err(BackendError::Render)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_anchor_keeps_x() {
        for x in -50..50 {
            for w in [0, 1, 7, 64, 513] {
                assert_eq!(text_origin(x, 12, w, Anchor::Left), (x, 12));
            }
        }
    }

    #[test]
    fn center_anchor_subtracts_half_the_width() {
        for x in -50..50 {
            for w in 0..200u32 {
                assert_eq!(text_origin(x, 0, w, Anchor::Center), (x - (w / 2) as i32, 0));
            }
        }
    }

    #[test]
    fn odd_widths_round_half_down() {
        assert_eq!(text_origin(400, 150, 301, Anchor::Center), (250, 150));
    }

    #[test]
    fn missing_font_is_an_asset_error() {
        let ttf = sdl2::ttf::init().unwrap();
        let path = Path::new("resources/no-such-font.ttf");
        let err = load_font(&ttf, path, 32).err().unwrap();
        assert!(matches!(err, BackendError::Asset { path: ref p, .. } if p == path));
    }

    #[test]
    fn y_is_never_adjusted() {
        assert_eq!(text_origin(0, -7, 100, Anchor::Center).1, -7);
        assert_eq!(text_origin(0, 220, 100, Anchor::Left).1, 220);
    }
}
