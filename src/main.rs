//! Ripplesurf - drag across a pool of liquid and watch it ripple.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use glam::Vec2;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use ripplesurf::camera::CameraSystem;
use ripplesurf::cli::Args;
use ripplesurf::error::AppError;
use ripplesurf::headless;
use ripplesurf::params::{OrbitCamera, RenderConfig};
use ripplesurf::rendering::{RenderSystem, Uniforms};
use ripplesurf::surface::SurfaceSystem;

/// Picks this far outside the surface (local units) still count as contact
const PICK_MARGIN: f32 = 1.5;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,
    render_config: RenderConfig,

    // Simulation
    surface: SurfaceSystem,
    camera: CameraSystem,
    fixed_step: bool,

    // Pointer
    cursor: Option<Vec2>,
    pointer_held: bool,

    // Time tracking
    last_frame: Instant,
}

impl App {
    fn new(surface: SurfaceSystem, fixed_step: bool) -> Self {
        let rest_y = surface.params().initial_height * surface.params().scale;
        let camera = CameraSystem::new(OrbitCamera::default(), surface.local_extent(), rest_y);

        Self {
            window: None,
            render_system: None,
            render_config: RenderConfig::default(),
            surface,
            camera,
            fixed_step,
            cursor: None,
            pointer_held: false,
            last_frame: Instant::now(),
        }
    }

    /// Advance and draw a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };

        // Pointer -> normalized hit -> ripples
        let hit = self
            .cursor
            .and_then(|cursor| self.camera.pick_local(cursor, &self.render_config, PICK_MARGIN))
            .map(|local| self.surface.normalize_local(local));
        self.surface.inject_stroke(hit, self.pointer_held);

        // Integrate
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        if self.fixed_step {
            self.surface.tick_nominal();
        } else {
            self.surface.tick(dt);
        }

        // Upload and draw
        render_system.update_vertices(self.surface.vertices());
        let (eye, _) = self.camera.eye_and_target();
        let uniforms = Uniforms::new(
            self.camera.view_proj(&self.render_config),
            self.camera.model_matrix(),
            eye,
            &self.render_config,
        );
        render_system.update_uniforms(&uniforms);

        match render_system.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = render_system.size();
                render_system.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Ripplesurf")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.render_config.window_width = size.width;
        self.render_config.window_height = size.height;

        let render_system = match pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            self.surface.vertices(),
            self.surface.indices(),
            &self.render_config,
        )) {
            Ok(render_system) => render_system,
            Err(e) => {
                error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        info!("Drag with the left mouse button; R resets, Esc quits");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.last_frame = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape => event_loop.exit(),
                KeyCode::KeyR => {
                    info!("Resetting surface");
                    self.surface.reset();
                }
                _ => {}
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => self.cursor = None,
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.pointer_held = state == ElementState::Pressed;
            }
            WindowEvent::Resized(size) => {
                self.render_config.window_width = size.width;
                self.render_config.window_height = size.height;
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut surface = SurfaceSystem::new(args.surface_params())?;

    if args.headless {
        headless::run(&mut surface, args.frames, &args.splash);
        if let Some(snapshot) = args.snapshot_config() {
            headless::write_snapshot(&surface, &snapshot)?;
        }
        return Ok(());
    }

    for &point in &args.splash {
        surface.inject_at(point, 1.0);
    }

    let mut app = App::new(surface, args.fixed_step);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
