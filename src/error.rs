use crate::shader::ShaderStage;

/// Everything that can stop a demo from starting or drawing a frame.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Window, GL context or GL function table could not be created.
    #[error("cannot create window: {0}")]
    DisplayCreation(#[from] glium::backend::glutin::DisplayCreationError),
    /// Triangle mesh could not be uploaded.
    #[error("cannot create vertex buffer: {0}")]
    Buffer(#[from] glium::vertex::BufferCreationError),
    /// Shader compilation or linking failed, carries the driver log.
    #[error("cannot build shader program: {0}")]
    Program(#[from] glium::ProgramCreationError),
    #[error("no {0} shader stage given")]
    MissingStage(ShaderStage),
    #[error("{0} shader stage given more than once")]
    DuplicateStage(ShaderStage),
    #[error("draw call failed: {0}")]
    Draw(#[from] glium::DrawError),
    #[error("cannot swap buffers: {0}")]
    SwapBuffers(#[from] glium::SwapBuffersError),
}
