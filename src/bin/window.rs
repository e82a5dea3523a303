//! Opens a window with a 3.3 core context and clears it to teal every
//! frame. Escape or closing the window exits.

use learngl::{DemoError, WindowContext};

fn main() -> Result<(), DemoError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut ctx = WindowContext::new(600, 600, "LearnOpenGL")?;

    unsafe {
        gl::ClearColor(0.2, 0.3, 0.3, 1.0);
    }

    while !ctx.should_close() {
        for (_, event) in ctx.poll() {
            ctx.handle_default_event(&event);
        }

        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        ctx.swap_buffers();
    }

    Ok(())
}
