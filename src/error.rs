use std::fmt;
use std::io;

/// Anything that can go wrong while a demo is setting up. All of these are
/// fatal: the demos abort rather than limp on with a broken handle.
#[derive(Debug)]
pub enum DemoError {
    /// GLFW itself failed to initialize.
    Init(glfw::InitError),
    /// GLFW could not create the window or its GL context.
    WindowCreation,
    /// A shader file could not be read.
    ShaderRead { path: String, source: io::Error },
    /// A combined shader file did not follow the `#shader <stage>` format.
    ShaderParse(String),
    /// A shader stage failed to compile; `log` is the GL info log.
    ShaderCompile { stage: &'static str, log: String },
    /// The shader program failed to link; `log` is the GL info log.
    ProgramLink(String),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::Init(e) => write!(f, "GLFW initialization failed: {}", e),
            DemoError::WindowCreation => write!(f, "failed to create GLFW window"),
            DemoError::ShaderRead { path, source } => {
                write!(f, "failed to read shader file {}: {}", path, source)
            }
            DemoError::ShaderParse(msg) => write!(f, "malformed shader file: {}", msg),
            DemoError::ShaderCompile { stage, log } => {
                write!(f, "{} shader compilation failed: {}", stage, log)
            }
            DemoError::ProgramLink(log) => write!(f, "program linking failed: {}", log),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DemoError::Init(e) => Some(e),
            DemoError::ShaderRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<glfw::InitError> for DemoError {
    fn from(e: glfw::InitError) -> Self {
        DemoError::Init(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_names_the_stage() {
        let err = DemoError::ShaderCompile {
            stage: "vertex",
            log: "0:1(1): error: syntax error".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("vertex"));
        assert!(msg.contains("syntax error"));
    }

    #[test]
    fn read_error_carries_the_path() {
        let err = DemoError::ShaderRead {
            path: "shaders/triangle.shader".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("shaders/triangle.shader"));
    }
}
