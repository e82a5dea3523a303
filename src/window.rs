use glfw::{self, Action, Context, Key, WindowEvent};
use log::info;

use crate::error::DemoError;

/// A window with a current OpenGL 3.3 core context and loaded function
/// pointers. Dropping it tears the window and the GLFW handle down.
pub struct WindowContext {
    pub glfw: glfw::Glfw,
    pub window: glfw::PWindow,
    pub events: glfw::GlfwReceiver<(f64, WindowEvent)>,
}

impl WindowContext {
    pub fn new(width: u32, height: u32, title: &str) -> Result<Self, DemoError> {
        let mut glfw = glfw::init(glfw::fail_on_errors)?;
        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(DemoError::WindowCreation)?;

        window.set_key_polling(true);
        window.set_framebuffer_size_polling(true);
        window.make_current();
        glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);

        unsafe {
            let version =
                std::ffi::CStr::from_ptr(gl::GetString(gl::VERSION) as *const i8).to_string_lossy();
            info!("OpenGL version: {}", version);

            let (fb_width, fb_height) = window.get_framebuffer_size();
            gl::Viewport(0, 0, fb_width, fb_height);
        }

        Ok(Self { glfw, window, events })
    }

    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Polls the OS and drains the event queue for this frame.
    pub fn poll(&mut self) -> Vec<(f64, WindowEvent)> {
        self.glfw.poll_events();
        glfw::flush_messages(&self.events).collect()
    }

    /// Handles the two events every demo reacts to: Escape requests close,
    /// framebuffer resizes update the viewport.
    pub fn handle_default_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
                self.window.set_should_close(true);
            }
            WindowEvent::FramebufferSize(width, height) => unsafe {
                gl::Viewport(0, 0, *width, *height);
            },
            _ => {}
        }
    }

    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }
}
