//! Application shell
//!
//! Owns the window, the render engine, the UI overlay and the attached
//! simulation, and drives the continuous frame loop: every redraw
//! requests the next one, so the viewer animates for as long as the
//! window lives. Pausing stops state changes, never rendering.

use cgmath::Vector3;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::gfx::{
    camera::{
        camera_controller::CameraController, camera_utils::CameraManager, orbit_camera::OrbitCamera,
    },
    rendering::RenderEngine,
    scene::Scene,
};
use crate::sim::{manager::SimulationManager, traits::Simulation};
use crate::ui::UiManager;

const DEFAULT_WIDTH: u32 = 1200;
const DEFAULT_HEIGHT: u32 = 800;
/// Initial camera distance, far enough to frame the outermost orbit
const CAMERA_DISTANCE: f32 = 35.0;

// Extra UI drawn after the simulation's own panel
pub type UiCallback = Box<dyn Fn(&imgui::Ui) + Send + Sync>;

/// Top-level application
///
/// Construct with [`crate::default()`], attach a simulation, then call
/// [`run`](OrreryApp::run) to enter the event loop.
pub struct OrreryApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
    ui_callback: Option<UiCallback>,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    sim_manager: SimulationManager,
    scene: Scene,
    ui_callback: Option<UiCallback>,
}

impl OrreryApp {
    /// Creates the application with the default orbit camera
    pub async fn new() -> Self {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        let camera = OrbitCamera::new(
            CAMERA_DISTANCE,
            0.4,
            0.0,
            Vector3::new(0.0, 0.0, 0.0),
            DEFAULT_WIDTH as f32 / DEFAULT_HEIGHT as f32,
        );
        let controller = CameraController::new(0.005, 0.1);

        let camera_manager = CameraManager::new(camera, controller);
        let scene = Scene::new(camera_manager);

        Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                ui_manager: None,
                sim_manager: SimulationManager::new(),
                scene,
                ui_callback: None,
            },
            ui_callback: None,
        }
    }

    /// Attaches a simulation, building its objects into the scene
    ///
    /// Must be called before [`run`](OrreryApp::run); the scene's GPU
    /// resources are created from whatever objects exist at window
    /// creation time.
    pub fn attach_simulation(&mut self, simulation: impl Simulation + 'static) {
        self.app_state
            .sim_manager
            .attach_simulation(Box::new(simulation), &mut self.app_state.scene);
    }

    /// Sets an extra UI callback drawn after the simulation's panel
    pub fn set_ui<F>(&mut self, ui_fn: F)
    where
        F: Fn(&imgui::Ui) + Send + Sync + 'static,
    {
        self.ui_callback = Some(Box::new(ui_fn));
    }

    /// Runs the event loop, consuming the application
    pub fn run(mut self) {
        self.app_state.ui_callback = self.ui_callback.take();

        let event_loop = self.event_loop.take().expect("Event loop already consumed");
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .expect("Failed to run event loop");
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Ok(window) = event_loop.create_window(
            WindowAttributes::default()
                .with_title("Orrery")
                .with_inner_size(winit::dpi::LogicalSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)),
        ) {
            let window_handle = Arc::new(window);
            self.window = Some(window_handle.clone());

            let (width, height) = window_handle.inner_size().into();

            let window_clone = window_handle.clone();
            let renderer = pollster::block_on(async move {
                RenderEngine::new(window_clone, width, height).await
            });

            self.scene
                .init_gpu_resources(renderer.device(), renderer.queue());

            let ui_manager = UiManager::new(
                renderer.device(),
                renderer.queue(),
                renderer.surface_format(),
                &window_handle,
            );

            self.ui_manager = Some(ui_manager);
            self.render_engine = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };

        let Some(window) = self.window.as_ref() else {
            return;
        };

        // The panel gets first refusal on input
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            let ui_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
                window_id,
                event: event.clone(),
            };
            if ui_manager.handle_input(window, &ui_event) {
                window.request_redraw();
                return;
            }
        }

        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: winit::keyboard::PhysicalKey::Code(key_code),
                        ..
                    },
                ..
            } => {
                if matches!(key_code, winit::keyboard::KeyCode::Escape) {
                    event_loop.exit();
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.scene
                    .camera_manager
                    .controller
                    .set_shift_held(modifiers.state().shift_key());
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                // Aspect ratio and drawing buffer both track the window
                // exactly; no capping or rounding.
                self.scene
                    .camera_manager
                    .camera
                    .resize_projection(width, height);
                render_engine.resize(width, height);
                if let Some(ui_manager) = self.ui_manager.as_mut() {
                    ui_manager.update_display_size(width, height);
                }
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.scene.update();
                self.sim_manager.update(&mut self.scene);
                self.scene.update_all_transforms(render_engine.queue());
                render_engine.update(self.scene.camera_manager.camera.uniform);

                if let Some(ui_manager) = self.ui_manager.as_mut() {
                    let window_clone = window.clone();
                    let sim_manager = &mut self.sim_manager;
                    let user_callback = &self.ui_callback;
                    render_engine.render_frame_with_ui(
                        &self.scene,
                        |device, queue, encoder, color_attachment| {
                            ui_manager.draw(
                                device,
                                queue,
                                encoder,
                                &window_clone,
                                color_attachment,
                                |ui| {
                                    sim_manager.render_ui(ui);
                                    if let Some(callback) = user_callback {
                                        callback(ui);
                                    }
                                },
                            );
                        },
                    );
                } else {
                    render_engine.render_frame(
                        &self.scene,
                        None::<
                            fn(
                                &wgpu::Device,
                                &wgpu::Queue,
                                &mut wgpu::CommandEncoder,
                                &wgpu::TextureView,
                            ),
                        >,
                    );
                }
            }
            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: winit::event::DeviceEvent,
    ) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        // Camera input is suppressed while the panel owns the mouse
        if let Some(ui_manager) = self.ui_manager.as_ref() {
            let io = ui_manager.context.io();
            if io.want_capture_mouse || io.want_capture_keyboard {
                return;
            }
        }

        self.scene.camera_manager.process_event(&event, window);
    }

    // The continuous loop: each finished frame schedules the next one
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
