use std::path::Path;

use log::debug;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::WindowContext;
use stb_image::image::{Image, LoadResult};

use crate::error::{BackendError, Result};

/// Channels every image is expanded to on decode, whatever it stores.
pub const RGBA_DEPTH: usize = 4;

/// Unwraps an 8-bit decode result forced to [`RGBA_DEPTH`] channels.
pub fn decoded_rgba(result: LoadResult, filename: &Path) -> Result<Image<u8>> {
    match result {
        LoadResult::ImageF32(_) => Err(BackendError::asset(
            filename,
            "32-bit images not supported here",
        )),
        LoadResult::ImageU8(img) => Ok(img),
        LoadResult::Error(e) => Err(BackendError::asset(filename, e)),
    }
}

/// Decodes an image file and uploads it as a texture owned by `texture_creator`.
pub fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    filename: &Path,
) -> Result<Texture<'a>> {
    // SDL textures are top-down
    unsafe {
        stb_image::stb_image::stbi_set_flip_vertically_on_load(0);
    }
    let mut img = decoded_rgba(
        stb_image::image::load_with_depth(filename, RGBA_DEPTH, false),
        filename,
    )?;

    let (width, height) = (img.width as u32, img.height as u32);
    let pitch = (img.width * RGBA_DEPTH) as u32;

    let surface = Surface::from_data(&mut img.data, width, height, pitch, PixelFormatEnum::RGBA32)
        .map_err(|e| BackendError::asset(filename, e))?;
    let texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| BackendError::asset(filename, e))?;
    debug!("loaded image {filename:?}: {width} x {height}");

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2x1 binary greyscale PGM
    const GREY_2X1: &[u8] = b"P5\n2 1\n255\n\x10\x80";

    #[test]
    fn greyscale_is_expanded_to_rgba() {
        let img = decoded_rgba(
            stb_image::image::load_from_memory_with_depth(GREY_2X1, RGBA_DEPTH, false),
            Path::new("grey.pgm"),
        )
        .unwrap();
        assert_eq!((img.width, img.height), (2, 1));
        assert_eq!(img.data.len(), 2 * RGBA_DEPTH);
        assert_eq!(
            img.data,
            vec![0x10, 0x10, 0x10, 0xff, 0x80, 0x80, 0x80, 0xff]
        );
    }

    #[test]
    fn undecodable_data_is_an_asset_error() {
        let err = decoded_rgba(
            stb_image::image::load_from_memory_with_depth(b"not an image", RGBA_DEPTH, false),
            Path::new("broken.png"),
        )
        .err()
        .unwrap();
        assert!(matches!(err, BackendError::Asset { ref path, .. } if path == Path::new("broken.png")));
    }
}
