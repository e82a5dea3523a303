//! Draws an indexed square: four corner vertices, six indices, one draw
//! call. The shader pair is embedded as source strings.

use std::mem::size_of;
use std::ptr;

use learngl::{DemoError, FpsCounter, IndexBuffer, Shader, VertexArray, VertexBuffer, WindowContext};

const VERTEX_SRC: &str = "\
#version 330 core
layout (location = 0) in vec2 position;
void main()
{
    gl_Position = vec4(position.xy, 1.0, 1.0);
}
";

const FRAGMENT_SRC: &str = "\
#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
";

/*
 * 0----2
 * |    |
 * |    |
 * 1----3
 */
const VERTICES: [f32; 8] = [
    -0.75, 0.75, // 0
    -0.75, -0.75, // 1
    0.75, 0.75, // 2
    0.75, -0.75, // 3
];

const INDICES: [u32; 6] = [
    0, 1, 2, //
    2, 1, 3,
];

fn main() -> Result<(), DemoError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut ctx = WindowContext::new(600, 600, "LearnOpenGL")?;

    let vao = VertexArray::new();
    let _vbo = VertexBuffer::new(&VERTICES);
    vao.set_attribute(0, 2, 2 * size_of::<f32>() as i32, 0);
    // Bound while the VAO is, so the VAO records it for DrawElements.
    let ibo = IndexBuffer::new(&INDICES);

    let shader = Shader::from_sources(VERTEX_SRC, FRAGMENT_SRC)?;
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
            gl::DrawElements(gl::TRIANGLES, ibo.count(), gl::UNSIGNED_INT, ptr::null());
        }

        ctx.swap_buffers();
        fps.update();
    }

    Ok(())
}
