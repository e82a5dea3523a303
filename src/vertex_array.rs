use std::os::raw::c_void;

use gl::types::{GLint, GLuint};

/// A vertex array object. Creating one generates and binds it.
pub struct VertexArray {
    id: GLuint,
}

impl VertexArray {
    pub fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut id);
            gl::BindVertexArray(id);
        }
        Self { id }
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindVertexArray(self.id);
        }
    }

    pub fn unbind() {
        unsafe {
            gl::BindVertexArray(0);
        }
    }

    /// Describes a float attribute in the currently bound ARRAY_BUFFER and
    /// enables it. The demos only ever feed float positions, so the
    /// component type is fixed at `GL_FLOAT`.
    pub fn set_attribute(&self, index: GLuint, size: GLint, stride: GLint, offset: usize) {
        unsafe {
            gl::VertexAttribPointer(index, size, gl::FLOAT, gl::FALSE, stride, offset as *const c_void);
            gl::EnableVertexAttribArray(index);
        }
    }
}

impl Default for VertexArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}
