use std::fmt;

use glium::backend::Facade;

use crate::error::Error;

const TRIANGLE_VERTEX: &str = include_str!("shaders/triangle.vert");
const TRIANGLE_FRAGMENT: &str = include_str!("shaders/triangle.frag");

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// GLSL text of a single stage.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    pub stage: ShaderStage,
    pub text: String,
}

impl ShaderSource {
    pub fn new(stage: ShaderStage, text: impl Into<String>) -> Self {
        ShaderSource {
            stage,
            text: text.into(),
        }
    }
}

/// Validated set of stages, one of each.
#[derive(Debug, Clone)]
pub struct ProgramSources {
    vertex: String,
    fragment: String,
}

impl ProgramSources {
    pub fn from_stages(stages: Vec<ShaderSource>) -> Result<Self, Error> {
        let mut vertex = None;
        let mut fragment = None;

        for source in stages {
            let slot = match source.stage {
                ShaderStage::Vertex => &mut vertex,
                ShaderStage::Fragment => &mut fragment,
            };
            if slot.is_some() {
                return Err(Error::DuplicateStage(source.stage));
            }
            *slot = Some(source.text);
        }

        Ok(ProgramSources {
            vertex: vertex.ok_or(Error::MissingStage(ShaderStage::Vertex))?,
            fragment: fragment.ok_or(Error::MissingStage(ShaderStage::Fragment))?,
        })
    }

    /// Shaders shared by both demos. Uniforms: `mvp`, `solid`, `colour`.
    pub fn triangle() -> Self {
        ProgramSources {
            vertex: TRIANGLE_VERTEX.to_owned(),
            fragment: TRIANGLE_FRAGMENT.to_owned(),
        }
    }

    pub fn text(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }

    /// Compiles and links, the driver's log ends up in `Error::Program`.
    pub fn compile<F: Facade + ?Sized>(&self, facade: &F) -> Result<glium::Program, Error> {
        let program = glium::Program::from_source(facade, &self.vertex, &self.fragment, None)?;
        Ok(program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_of_each() {
        let sources = ProgramSources::from_stages(vec![
            ShaderSource::new(ShaderStage::Fragment, "frag"),
            ShaderSource::new(ShaderStage::Vertex, "vert"),
        ])
        .unwrap();

        assert_eq!(sources.text(ShaderStage::Vertex), "vert");
        assert_eq!(sources.text(ShaderStage::Fragment), "frag");
    }

    #[test]
    fn rejects_missing_stage() {
        let err = ProgramSources::from_stages(vec![ShaderSource::new(ShaderStage::Vertex, "v")])
            .unwrap_err();
        assert!(matches!(err, Error::MissingStage(ShaderStage::Fragment)));

        let err = ProgramSources::from_stages(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::MissingStage(ShaderStage::Vertex)));
    }

    #[test]
    fn rejects_duplicate_stage() {
        let err = ProgramSources::from_stages(vec![
            ShaderSource::new(ShaderStage::Vertex, "a"),
            ShaderSource::new(ShaderStage::Fragment, "f"),
            ShaderSource::new(ShaderStage::Vertex, "b"),
        ])
        .unwrap_err();

        assert!(matches!(err, Error::DuplicateStage(ShaderStage::Vertex)));
        assert_eq!(err.to_string(), "vertex shader stage given more than once");
    }

    #[test]
    fn builtin_sources_declare_uniforms() {
        let sources = ProgramSources::triangle();
        let vertex = sources.text(ShaderStage::Vertex);
        let fragment = sources.text(ShaderStage::Fragment);

        assert!(vertex.contains("uniform mat4 mvp;"));
        assert!(vertex.contains("in vec3 position;"));
        assert!(fragment.contains("uniform bool solid;"));
        assert!(fragment.contains("uniform vec4 colour;"));
    }
}
