use log::{debug, info};
use sdl2::render::{BlendMode, WindowCanvas};
use sdl2::ttf::Sdl2TtfContext;
use sdl2::{EventPump, TimerSubsystem};

#[cfg(feature = "audio")]
use crate::audio::Audio;
use crate::error::{BackendError, Result};

/// How the window should be created for a requested size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindowMode {
    Windowed(u32, u32),
    /// Desktop-sized fullscreen, chosen when either requested dimension is
    /// not positive.
    Fullscreen,
}

impl WindowMode {
    pub fn from_requested(w: i32, h: i32) -> Self {
        if w <= 0 || h <= 0 {
            WindowMode::Fullscreen
        } else {
            WindowMode::Windowed(w as u32, h as u32)
        }
    }
}

/// Final drawable size. `query` is only consulted in fullscreen mode, where the
/// requested values are meaningless.
pub fn resolve_dimensions<F>(mode: WindowMode, query: F) -> Result<(u32, u32)>
where
    F: FnOnce() -> std::result::Result<(u32, u32), String>,
{
    match mode {
        WindowMode::Windowed(w, h) => Ok((w, h)),
        WindowMode::Fullscreen => match query().map_err(BackendError::Canvas)? {
            (w, h) if w > 0 && h > 0 => Ok((w, h)),
            (w, h) => Err(BackendError::Canvas(format!(
                "fullscreen output size reported as {w}x{h}"
            ))),
        },
    }
}

/// Owns every SDL subsystem the game uses, plus the window canvas.
///
/// Fields are dropped in declaration order, which is the reverse of the order
/// they are acquired in `Context::new`: canvas and window first, then audio,
/// text rendering, and the core SDL context last. Textures, fonts and sounds
/// borrow from the context, so they cannot outlive it.
pub struct Context {
    width: u32,
    height: u32,
    event_pump: EventPump,
    canvas: WindowCanvas,
    #[cfg(feature = "audio")]
    audio: Audio,
    ttf: Sdl2TtfContext,
    timer: TimerSubsystem,
    _video: sdl2::VideoSubsystem,
    _sdl: sdl2::Sdl,
}

/// Disjoint borrows of a live [`Context`], so that assets can borrow the
/// font and audio subsystems while the frame loop draws on the canvas.
pub struct Handles<'a> {
    pub width: u32,
    pub height: u32,
    pub canvas: &'a mut WindowCanvas,
    pub event_pump: &'a mut EventPump,
    pub timer: &'a TimerSubsystem,
    pub ttf: &'a Sdl2TtfContext,
    #[cfg(feature = "audio")]
    pub audio: &'a Audio,
}

impl Context {
    pub fn new(title: &str, w: i32, h: i32) -> Result<Context> {
        let sdl = sdl2::init().map_err(|e| BackendError::init("SDL", e))?;
        let video = sdl.video().map_err(|e| BackendError::init("video", e))?;
        let timer = sdl.timer().map_err(|e| BackendError::init("timer", e))?;

        let ttf = sdl2::ttf::init().map_err(|e| BackendError::init("TTF", e))?;

        #[cfg(feature = "audio")]
        let audio = Audio::open(&sdl)?;

        let mode = WindowMode::from_requested(w, h);
        let mut builder = match mode {
            WindowMode::Windowed(w, h) => video.window(title, w, h),
            WindowMode::Fullscreen => video.window(title, w.max(1) as u32, h.max(1) as u32),
        };
        builder.position_centered();
        if mode == WindowMode::Fullscreen {
            builder.fullscreen_desktop();
        }
        let window = builder
            .build()
            .map_err(|e| BackendError::Window(e.to_string()))?;

        // GPU accelerated renderer, paced by vertical sync
        let mut canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| BackendError::Canvas(e.to_string()))?;
        canvas.set_blend_mode(BlendMode::Blend);

        let (width, height) = resolve_dimensions(mode, || canvas.output_size())?;
        info!("window \"{title}\" ready: {width}x{height} ({mode:?})");

        let event_pump = sdl
            .event_pump()
            .map_err(|e| BackendError::init("event pump", e))?;

        Ok(Context {
            width,
            height,
            event_pump,
            canvas,
            #[cfg(feature = "audio")]
            audio,
            ttf,
            timer,
            _video: video,
            _sdl: sdl,
        })
    }

    pub fn handles(&mut self) -> Handles<'_> {
        Handles {
            width: self.width,
            height: self.height,
            canvas: &mut self.canvas,
            event_pump: &mut self.event_pump,
            timer: &self.timer,
            ttf: &self.ttf,
            #[cfg(feature = "audio")]
            audio: &self.audio,
        }
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        debug!("shutting down SDL context");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_sizes_are_windowed() {
        for w in 1..64 {
            for h in 1..64 {
                assert_eq!(
                    WindowMode::from_requested(w, h),
                    WindowMode::Windowed(w as u32, h as u32)
                );
            }
        }
        assert_eq!(
            WindowMode::from_requested(i32::MAX, 1),
            WindowMode::Windowed(i32::MAX as u32, 1)
        );
    }

    #[test]
    fn any_non_positive_size_is_fullscreen() {
        for (w, h) in [(0, 600), (800, 0), (-1, 600), (800, -1), (0, 0), (i32::MIN, -5)] {
            assert_eq!(WindowMode::from_requested(w, h), WindowMode::Fullscreen);
        }
    }

    #[test]
    fn windowed_resolution_echoes_request_without_querying() {
        for (w, h) in [(800, 600), (1, 1), (200, 100), (3840, 2160)] {
            let resolved = resolve_dimensions(WindowMode::from_requested(w, h), || {
                panic!("output size must not be queried for a windowed request")
            })
            .unwrap();
            assert_eq!(resolved, (w as u32, h as u32));
        }
    }

    #[test]
    fn fullscreen_resolution_uses_queried_size() {
        for (w, h) in [(0, 0), (-800, 600), (1024, 0)] {
            let resolved =
                resolve_dimensions(WindowMode::from_requested(w, h), || Ok((1920, 1080))).unwrap();
            assert_eq!(resolved, (1920, 1080));
        }
    }

    #[test]
    fn fullscreen_resolution_rejects_empty_output() {
        let err = resolve_dimensions(WindowMode::Fullscreen, || Ok((0, 1080))).unwrap_err();
        assert!(matches!(err, BackendError::Canvas(_)));
    }

    #[test]
    fn fullscreen_query_failure_is_a_canvas_error() {
        let err = resolve_dimensions(WindowMode::Fullscreen, || Err("no renderer".to_string()))
            .unwrap_err();
        assert!(matches!(err, BackendError::Canvas(msg) if msg == "no renderer"));
    }
}
