use backend::error::Result;
use backend::text::load_font;
use backend::texture::load_texture;
use backend::Handles;
use log::info;
use sdl2::render::{Texture, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::WindowContext;

#[cfg(feature = "audio")]
use backend::audio::Sound;

use crate::config::Settings;

/// Media used by the scene. Everything here borrows from the context and is
/// released before it.
pub struct Assets<'a> {
    #[cfg(feature = "audio")]
    pub shot: Sound<'a>,
    pub image: Texture<'a>,
    pub big_font: Font<'a, 'static>,
    pub small_font: Font<'a, 'static>,
}

impl<'a> Assets<'a> {
    pub fn load<'h: 'a>(
        handles: &Handles<'h>,
        texture_creator: &'a TextureCreator<WindowContext>,
        settings: &Settings,
    ) -> Result<Assets<'a>> {
        #[cfg(feature = "audio")]
        let shot = {
            let audio = handles.audio;
            audio.load_sound(&settings.sound)?
        };

        let image = load_texture(texture_creator, &settings.image)?;

        let ttf = handles.ttf;
        let big_font = load_font(ttf, &settings.font, settings.big_font_size)?;
        let small_font = load_font(ttf, &settings.font, settings.small_font_size)?;
        info!(
            "assets loaded: {:?}, {:?} ({} pt, {} pt)",
            settings.image, settings.font, settings.big_font_size, settings.small_font_size
        );

        Ok(Assets {
            #[cfg(feature = "audio")]
            shot,
            image,
            big_font,
            small_font,
        })
    }
}
