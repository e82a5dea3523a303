//! Draws a hardcoded triangle through the wrapper types, loading its
//! shader pair from the combined file under `shaders/`.

use std::mem::size_of;

use learngl::{DemoError, FpsCounter, Shader, VertexArray, VertexBuffer, WindowContext};

const VERTICES: [f32; 6] = [
    0.0, 1.0, // top
    -1.0, -1.0, // bottom left
    1.0, -1.0, // bottom right
];

fn main() -> Result<(), DemoError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut ctx = WindowContext::new(600, 600, "LearnOpenGL")?;

    let vao = VertexArray::new();
    // Stays alive until the end of main; the attribute below records it.
    let _vbo = VertexBuffer::new(&VERTICES);
    vao.set_attribute(0, 2, 2 * size_of::<f32>() as i32, 0);

    let shader = Shader::from_file("shaders/triangle.shader")?;
    shader.bind();

    let mut fps = FpsCounter::new();

    unsafe {
        gl::ClearColor(0.2, 0.3, 0.3, 1.0);
    }

    while !ctx.should_close() {
        for (_, event) in ctx.poll() {
            ctx.handle_default_event(&event);
        }

        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT);
            gl::DrawArrays(gl::TRIANGLES, 0, 3);
        }

        ctx.swap_buffers();
        fps.update();
    }

    Ok(())
}
