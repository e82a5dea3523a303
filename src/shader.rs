use std::ffi::CString;
use std::fs;
use std::path::Path;
use std::ptr;

use gl::types::{GLenum, GLuint};
use log::debug;

use crate::error::DemoError;

/// A linked shader program. The program is deleted when this drops.
pub struct Shader {
    id: GLuint,
}

impl Shader {
    /// Compiles and links a vertex/fragment source pair.
    pub fn from_sources(vertex_src: &str, fragment_src: &str) -> Result<Self, DemoError> {
        let vert = compile(vertex_src, gl::VERTEX_SHADER)?;
        let frag = compile(fragment_src, gl::FRAGMENT_SHADER)?;

        unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            let mut success = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);

            if success == 0 {
                let mut len = 0;
                gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
                let mut buffer = vec![0u8; len as usize];
                gl::GetProgramInfoLog(program, len, ptr::null_mut(), buffer.as_mut_ptr() as *mut i8);
                gl::DeleteProgram(program);
                return Err(DemoError::ProgramLink(
                    String::from_utf8_lossy(&buffer).into_owned(),
                ));
            }

            // Once linked, the stage objects are no longer needed.
            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            Ok(Self { id: program })
        }
    }

    /// Loads a combined shader file holding both stages behind
    /// `#shader vertex` and `#shader fragment` marker lines.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DemoError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| DemoError::ShaderRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let (vertex_src, fragment_src) = split_stages(&source)?;
        debug!("loaded shader pair from {}", path.display());
        Self::from_sources(&vertex_src, &fragment_src)
    }

    pub fn bind(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

fn compile(source: &str, shader_type: GLenum) -> Result<GLuint, DemoError> {
    let stage = if shader_type == gl::VERTEX_SHADER {
        "vertex"
    } else {
        "fragment"
    };

    let c_source = CString::new(source.as_bytes())
        .map_err(|_| DemoError::ShaderParse(format!("{} source contains a NUL byte", stage)))?;

    unsafe {
        let shader = gl::CreateShader(shader_type);
        gl::ShaderSource(shader, 1, &c_source.as_ptr(), ptr::null());
        gl::CompileShader(shader);

        let mut success = 0;
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);

        if success == 0 {
            let mut len = 0;
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
            let mut buffer = vec![0u8; len as usize];
            gl::GetShaderInfoLog(shader, len, ptr::null_mut(), buffer.as_mut_ptr() as *mut i8);
            gl::DeleteShader(shader);
            return Err(DemoError::ShaderCompile {
                stage,
                log: String::from_utf8_lossy(&buffer).into_owned(),
            });
        }

        Ok(shader)
    }
}

enum Stage {
    None,
    Vertex,
    Fragment,
}

/// Splits a combined shader source into its (vertex, fragment) stages.
/// Lines before the first `#shader` marker are ignored.
fn split_stages(source: &str) -> Result<(String, String), DemoError> {
    let mut vertex = String::new();
    let mut fragment = String::new();
    let mut stage = Stage::None;

    for line in source.lines() {
        if let Some(rest) = line.trim().strip_prefix("#shader") {
            stage = match rest.trim() {
                "vertex" => Stage::Vertex,
                "fragment" => Stage::Fragment,
                other => {
                    return Err(DemoError::ShaderParse(format!(
                        "unknown shader stage {:?}",
                        other
                    )))
                }
            };
        } else {
            match stage {
                Stage::Vertex => {
                    vertex.push_str(line);
                    vertex.push('\n');
                }
                Stage::Fragment => {
                    fragment.push_str(line);
                    fragment.push('\n');
                }
                Stage::None => {}
            }
        }
    }

    if vertex.is_empty() || fragment.is_empty() {
        return Err(DemoError::ShaderParse(
            "combined source must declare both a vertex and a fragment stage".into(),
        ));
    }

    Ok((vertex, fragment))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMBINED: &str = "\
#shader vertex
#version 330 core
void main() { gl_Position = vec4(0.0); }

#shader fragment
#version 330 core
out vec4 FragColor;
void main() { FragColor = vec4(1.0); }
";

    #[test]
    fn splits_both_stages() {
        let (vertex, fragment) = split_stages(COMBINED).unwrap();
        assert!(vertex.contains("gl_Position"));
        assert!(!vertex.contains("FragColor"));
        assert!(fragment.contains("FragColor"));
        assert!(!fragment.contains("gl_Position"));
    }

    #[test]
    fn ignores_lines_before_the_first_marker() {
        let source = format!("// a comment up top\n\n{}", COMBINED);
        let (vertex, _) = split_stages(&source).unwrap();
        assert!(!vertex.contains("comment"));
    }

    #[test]
    fn rejects_unknown_stage_names() {
        let err = split_stages("#shader geometry\nvoid main() {}\n").unwrap_err();
        assert!(matches!(err, DemoError::ShaderParse(_)));
        assert!(err.to_string().contains("geometry"));
    }

    #[test]
    fn rejects_a_missing_stage() {
        let source = "#shader vertex\nvoid main() {}\n";
        assert!(matches!(
            split_stages(source),
            Err(DemoError::ShaderParse(_))
        ));
    }
}
