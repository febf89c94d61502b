use backend::error::{BackendError, Result};
use backend::input::poll_events;
use backend::text::{draw_text, Anchor};
use backend::Handles;
use log::{info, trace};
use sdl2::pixels::Color;
use sdl2::render::{TextureCreator, WindowCanvas};
use sdl2::video::WindowContext;

use crate::assets::Assets;
use crate::config::Settings;
use crate::state::{diagnostic, Effect, FrameTime, GameState};

pub const TITLE: &str = "The Game";
pub const INSTRUCTIONS: &str = "Press up/down or space";

/// Anchor points of the two centered labels for a window of the given size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Layout {
    pub title: (i32, i32),
    pub instructions: (i32, i32),
}

impl Layout {
    pub fn new(width: u32, height: u32) -> Self {
        let (w, h) = (width as i32, height as i32);
        Layout {
            title: (w / 2, h / 4),
            instructions: (w / 2, h / 4 + 70),
        }
    }
}

/// Runs frames until a quit event arrives.
pub fn run(
    handles: &mut Handles<'_>,
    texture_creator: &TextureCreator<WindowContext>,
    assets: &Assets<'_>,
    settings: &Settings,
) -> Result<()> {
    let mut state = GameState::new(handles.width, handles.height);
    let layout = Layout::new(handles.width, handles.height);
    let frequency = handles.timer.performance_frequency();

    loop {
        let frame_time = state
            .timer
            .sample(handles.timer.performance_counter(), frequency);

        for event in poll_events(handles.event_pump) {
            if let Some(line) = diagnostic(&event) {
                println!("{line}");
            }
            if let Some(Effect::PlaySound) = state.handle(&event) {
                play_shot(assets)?;
            }
            if !state.is_running() {
                info!("quit requested: {event:?}");
                return Ok(());
            }
        }

        render(
            handles.canvas,
            texture_creator,
            assets,
            settings,
            &layout,
            &mut state,
            &frame_time,
        )?;
    }
}

#[cfg(feature = "audio")]
fn play_shot(assets: &Assets<'_>) -> Result<()> {
    assets.shot.play()
}

#[cfg(not(feature = "audio"))]
fn play_shot(_assets: &Assets<'_>) -> Result<()> {
    trace!("audio disabled, shot not played");
    Ok(())
}

fn render(
    canvas: &mut WindowCanvas,
    texture_creator: &TextureCreator<WindowContext>,
    assets: &Assets<'_>,
    settings: &Settings,
    layout: &Layout,
    state: &mut GameState,
    frame_time: &FrameTime,
) -> Result<()> {
    canvas.set_draw_color(Color::RGBA(0, 0, 0, 255));
    canvas.clear();

    let (x, y) = layout.title;
    draw_text(
        canvas,
        texture_creator,
        &assets.big_font,
        TITLE,
        x,
        y,
        settings.text_color,
        Anchor::Center,
    )?;
    let (x, y) = layout.instructions;
    draw_text(
        canvas,
        texture_creator,
        &assets.small_font,
        INSTRUCTIONS,
        x,
        y,
        settings.text_color,
        Anchor::Center,
    )?;

    let label = frame_time.label();
    trace!("{label}");
    draw_text(
        canvas,
        texture_creator,
        &assets.small_font,
        &label,
        0,
        0,
        settings.text_color,
        Anchor::Left,
    )?;

    let rect = state.player.rect();
    canvas.set_draw_color(settings.rect_color);
    canvas.fill_rect(rect).map_err(BackendError::Render)?;

    let angle = state.spin.advance();
    canvas
        .copy_ex(&assets.image, None, rect, angle, None, false, false)
        .map_err(BackendError::Render)?;

    canvas.present();
    Ok(())
}
