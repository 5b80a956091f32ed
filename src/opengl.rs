use std::collections::HashSet;
use std::time::{Duration, Instant};

use glium::glutin::{
    self,
    dpi::LogicalSize,
    event::{ElementState, Event, KeyboardInput, StartCause, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
};
use glium::index::{NoIndices, PrimitiveType};
use glium::{Display, Frame, Surface, VertexBuffer};

use crate::config::WindowConfig;
use crate::error::Error;
use crate::geometry::{mvp, projection, UNIT_TRIANGLE};
use crate::scene::{Fill, FrameClock, FrameInfo, Key, Pass, Scene};
use crate::shader::ProgramSources;

const FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);

#[derive(Copy, Clone)]
struct Vertex {
    position: [f32; 3],
}

implement_vertex!(Vertex, position);

struct Mesh {
    vertex_buffer: VertexBuffer<Vertex>,
    indices: NoIndices,
}

fn create_mesh(display: &Display) -> Result<Mesh, Error> {
    let shape: Vec<Vertex> = UNIT_TRIANGLE
        .iter()
        .map(|&position| Vertex { position })
        .collect();

    Ok(Mesh {
        vertex_buffer: VertexBuffer::new(display, &shape)?,
        indices: NoIndices(PrimitiveType::TrianglesList),
    })
}

fn create_display(config: &WindowConfig, event_loop: &EventLoop<()>) -> Result<Display, Error> {
    let window = glutin::window::WindowBuilder::new()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height));

    let context = glutin::ContextBuilder::new()
        .with_vsync(config.vsync)
        .with_depth_buffer(24);

    let display = Display::new(window, context, event_loop)?;

    log::info!("Renderer: {}", display.get_opengl_renderer_string());
    log::info!("OpenGL version supported {}", display.get_opengl_version_string());

    Ok(display)
}

fn map_key(code: VirtualKeyCode) -> Key {
    match code {
        VirtualKeyCode::Escape => Key::Escape,
        VirtualKeyCode::Up => Key::Up,
        VirtualKeyCode::Down => Key::Down,
        _ => Key::Other,
    }
}

/// GPU side of a demo: window, unit triangle and the shader program.
pub struct Renderer {
    display: Display,
    mesh: Mesh,
    program: glium::Program,
}

impl Renderer {
    pub fn new(display: Display, sources: &ProgramSources) -> Result<Self, Error> {
        let mesh = create_mesh(&display)?;
        let program = sources.compile(&display)?;

        Ok(Renderer {
            display,
            mesh,
            program,
        })
    }

    fn aspect(&self) -> f32 {
        let (width, height) = self.display.get_framebuffer_dimensions();
        width as f32 / height.max(1) as f32
    }

    fn draw_pass(&self, target: &mut Frame, pass: &Pass, aspect: f32) -> Result<(), Error> {
        let projection = projection(aspect, pass.orientation);

        let (solid, colour) = match pass.fill {
            Fill::Flat(colour) => (true, colour),
            Fill::Gradient => (false, [0.0; 4]),
        };

        let params = glium::DrawParameters {
            depth: glium::Depth {
                test: glium::DepthTest::IfLess,
                write: true,
                ..Default::default()
            },
            ..Default::default()
        };

        for placement in pass.placements.iter() {
            let uniforms = uniform! {
                mvp: mvp(&projection, *placement),
                solid: solid,
                colour: colour,
            };

            target.draw(
                &self.mesh.vertex_buffer,
                &self.mesh.indices,
                &self.program,
                &uniforms,
                &params,
            )?;
        }

        Ok(())
    }

    /// Draws one frame, returns the number of triangles issued.
    pub fn draw_frame(
        &self,
        scene: &mut dyn Scene,
        clock: &mut FrameClock,
    ) -> Result<usize, Error> {
        let frame: FrameInfo = clock.tick(self.aspect());
        let passes = scene.passes(&frame);

        let [r, g, b, a] = scene.clear_colour();
        let mut target = self.display.draw();
        target.clear_color_and_depth((r, g, b, a), 1.0);

        let drawn = passes
            .iter()
            .try_for_each(|pass| self.draw_pass(&mut target, pass, frame.aspect));

        // the frame has to be finished even when a draw call failed
        let finished = target.finish();
        drawn?;
        finished?;

        Ok(passes.iter().map(|pass| pass.placements.len()).sum())
    }
}

/// Opens the window and runs `scene` until it is closed.
///
/// Returns only on initialization errors. Closing the window or pressing
/// Escape exits the process with status 0.
pub fn run<S: Scene + 'static>(config: &WindowConfig, scene: S) -> Result<(), Error> {
    let event_loop = EventLoop::new();

    let display = create_display(config, &event_loop)?;
    let renderer = Renderer::new(display, &ProgramSources::triangle())?;

    let (width, height) = renderer.display.get_framebuffer_dimensions();
    log::info!("{} window {}x{}", config.title, width, height);

    let mut scene = scene;
    let mut clock = FrameClock::new();
    let mut held = HashSet::new();

    let mut fps_count = 0;
    let mut fps_measure = Instant::now() + Duration::from_secs(1);

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state,
                            virtual_keycode: Some(code),
                            ..
                        },
                    ..
                } => {
                    match state {
                        // auto repeat sends Pressed again without a Released
                        ElementState::Pressed => {
                            if held.insert(code) {
                                match map_key(code) {
                                    Key::Escape => *control_flow = ControlFlow::Exit,
                                    key => {
                                        scene.handle_key(key);
                                    }
                                }
                            }
                        }
                        ElementState::Released => {
                            held.remove(&code);
                        }
                    }
                    return;
                }
                _ => return,
            },
            Event::NewEvents(cause) => match cause {
                StartCause::ResumeTimeReached { .. } => (),
                StartCause::Init => (),
                _ => return,
            },
            _ => return,
        }

        let next_frame_time = Instant::now() + FRAME_INTERVAL;
        *control_flow = ControlFlow::WaitUntil(next_frame_time);

        if let Err(err) = renderer.draw_frame(&mut scene, &mut clock) {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            std::process::exit(1);
        }

        if fps_measure < next_frame_time {
            fps_measure = next_frame_time + Duration::from_secs(1);

            log::debug!("FPS {}", fps_count);
            fps_count = 0;
        } else {
            fps_count += 1;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_and_escape_are_mapped() {
        assert_eq!(map_key(VirtualKeyCode::Escape), Key::Escape);
        assert_eq!(map_key(VirtualKeyCode::Up), Key::Up);
        assert_eq!(map_key(VirtualKeyCode::Down), Key::Down);
        assert_eq!(map_key(VirtualKeyCode::Space), Key::Other);
    }
}
