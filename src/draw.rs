// Window + input. Everything else draws into a FrameBuffer; this module
// is the only place that talks to minifb.

use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};

/// Input observed since the previous frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,                              // window closed or ESC
    MouseMotion { x: f64, y: f64 },    // cursor moved inside the window
    Snapshot,                          // S pressed: save the current frame
}

pub struct Drawer {
    window: Window,                    // the on-screen window you see
    last_mouse: Option<(f32, f32)>,    // to report motion only when it happens
}

impl Drawer {
    /// Create a window of the given size.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self { window, last_mouse: None })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Drain this frame's input.
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            events.push(InputEvent::Quit);
        }

        // Discard: no position while the cursor is outside the window
        let pos = self.window.get_mouse_pos(MouseMode::Discard);
        if let Some((x, y)) = pos {
            if self.last_mouse != pos {
                events.push(InputEvent::MouseMotion { x: x as f64, y: y as f64 });
            }
            self.last_mouse = pos;
        }

        if self.window.is_key_pressed(Key::S, KeyRepeat::No) {
            events.push(InputEvent::Snapshot);
        }
        events
    }
}
