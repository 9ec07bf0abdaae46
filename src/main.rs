use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use twister::animation::{Easing, TwistTimeline};
use twister::binding::{TwistBinding, UniformRegistry};
use twister::camera::OrbitCamera;
use twister::cli::Cli;
use twister::core::clock::{FpsCounter, FrameClock};
use twister::renderer::{TwistRenderer, TWIST_UNIFORM};
use twister::scene::create_torus_scene;

// === Constants ===

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

// === Type Aliases ===

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

// === Application ===

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<TwistRenderer>,
    binding: Option<TwistBinding>,
    camera: OrbitCamera,
    clock: FrameClock,
    fps_counter: FpsCounter,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            renderer: None,
            binding: None,
            camera: OrbitCamera::new(),
            clock: FrameClock::new(),
            fps_counter: FpsCounter::new(FPS_UPDATE_INTERVAL),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Twister")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let scene = create_torus_scene(self.cli.ring_radius, self.cli.pipe_radius);
            let mut registry = UniformRegistry::new();

            let renderer = match pollster::block_on(TwistRenderer::new(
                window.clone(),
                &scene,
                &mut registry,
            )) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            // The timeline walks the twist factor down to zero and back,
            // ease-in/ease-out, repeating until the window closes. It is
            // wired to the uniform the geometry published above; a wrong
            // name here fails at startup instead of animating nothing.
            let timeline =
                TwistTimeline::new(self.cli.twist, 0.0, self.cli.period, Easing::EaseInOut);
            let binding = match TwistBinding::attach(&registry, TWIST_UNIFORM, timeline) {
                Ok(b) => b,
                Err(e) => {
                    eprintln!("Failed to attach twist animation: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
            self.binding = Some(binding);
            self.clock.reset();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return; // egui consumed the event
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.camera.process_keyboard(&event),
            WindowEvent::MouseInput { button, state, .. } => {
                self.camera.process_mouse_button(button, state)
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.camera.process_cursor(position.x, position.y)
            }
            WindowEvent::MouseWheel { delta, .. } => self.camera.process_scroll(delta),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();
                if let Some(fps) = self.fps_counter.tick(delta) {
                    println!("FPS: {:.1}", fps);
                }

                self.camera.update(delta);
                if let Some(binding) = &mut self.binding {
                    binding.advance(delta);
                }

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    if let Err(e) = renderer.render(
                        &self.camera,
                        window,
                        self.fps_counter.fps(),
                        !self.cli.no_ui,
                    ) {
                        eprintln!("Render error: {}", e);
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    println!("Twister - Controls: drag or arrow keys to orbit, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
