//! Small wrappers around the GLFW/OpenGL calls the learning demos share:
//! a window with a 3.3 core context, vertex/index buffers, a vertex array,
//! and a compiled shader program. Each demo binary under `src/bin/` strings
//! these together into the usual setup-then-render-loop sequence.

pub mod buffer;
pub mod error;
pub mod fps;
pub mod shader;
pub mod vertex_array;
pub mod window;

pub use buffer::{IndexBuffer, VertexBuffer};
pub use error::DemoError;
pub use fps::FpsCounter;
pub use shader::Shader;
pub use vertex_array::VertexArray;
pub use window::WindowContext;
