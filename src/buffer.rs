use std::os::raw::c_void;

use gl::types::{GLsizeiptr, GLuint};

/// An ARRAY_BUFFER of vertex position floats. Creating one generates the
/// buffer, binds it, and uploads `data` with STATIC_DRAW; it stays bound so
/// a following attribute-pointer call picks it up.
pub struct VertexBuffer {
    id: GLuint,
}

impl VertexBuffer {
    pub fn new(data: &[f32]) -> Self {
        let mut id = 0;
        unsafe {
            gl::GenBuffers(1, &mut id);
            gl::BindBuffer(gl::ARRAY_BUFFER, id);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                std::mem::size_of_val(data) as GLsizeiptr,
                data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );
        }
        Self { id }
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, self.id);
        }
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}

/// An ELEMENT_ARRAY_BUFFER of triangle indices. Create it while the vertex
/// array that should record it is bound; the binding is part of VAO state.
pub struct IndexBuffer {
    id: GLuint,
    count: i32,
}

impl IndexBuffer {
    pub fn new(indices: &[u32]) -> Self {
        let mut id = 0;
        unsafe {
            gl::GenBuffers(1, &mut id);
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, id);
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                std::mem::size_of_val(indices) as GLsizeiptr,
                indices.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );
        }
        Self {
            id,
            count: indices.len() as i32,
        }
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, self.id);
        }
    }

    /// Number of indices, for the matching `DrawElements` call.
    pub fn count(&self) -> i32 {
        self.count
    }
}

impl Drop for IndexBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}
