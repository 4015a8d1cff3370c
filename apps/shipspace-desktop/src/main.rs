use anyhow::{Context, Result};
use clap::Parser;
use egui::Context as EguiContext;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use shipspace_common::AppConfig;
use shipspace_input::{Control, ControlSet};
use shipspace_render_wgpu::{MeshData, OrbitCamera, ShipRenderer};
use shipspace_sim::Ship;
use shipspace_tools::ShipInspector;

#[derive(Parser)]
#[command(name = "shipspace-desktop", about = "Windowed spaceship steering demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to a YAML config file (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the ship mesh path from the config
    #[arg(long)]
    mesh: Option<String>,
}

fn control_for_key(key: KeyCode) -> Option<Control> {
    match key {
        KeyCode::ArrowLeft => Some(Control::Left),
        KeyCode::ArrowRight => Some(Control::Right),
        KeyCode::ArrowUp => Some(Control::Up),
        KeyCode::ArrowDown => Some(Control::Down),
        KeyCode::KeyR => Some(Control::Spin),
        _ => None,
    }
}

/// Application state: sim, controls, camera.
struct AppState {
    config: AppConfig,
    ship: Ship,
    controls: ControlSet,
    camera: OrbitCamera,
    show_overlay: bool,
    last_frame: Instant,
    // Movement ticks run on their own fixed interval, independent of redraw.
    tick_accumulator: f64,
    tick_interval: f64,
    orbiting: bool,
    panning: bool,
}

impl AppState {
    fn new(config: AppConfig) -> Self {
        let ship = Ship::from_config(&config.sim);
        let camera = OrbitCamera::from_config(&config.camera);
        let tick_interval = config.sim.tick_interval_secs().max(0.001);
        Self {
            config,
            ship,
            controls: ControlSet::new(),
            camera,
            show_overlay: true,
            last_frame: Instant::now(),
            tick_accumulator: 0.0,
            tick_interval,
            orbiting: false,
            panning: false,
        }
    }

    /// Drain elapsed time into fixed movement ticks. A tick with no held
    /// controls skips the ship update entirely.
    fn advance(&mut self, dt: f64) {
        self.tick_accumulator += dt;
        while self.tick_accumulator >= self.tick_interval {
            self.tick_accumulator -= self.tick_interval;
            if let Some(delta) = self.controls.resolve(&self.config.sim) {
                self.ship.update(delta);
            }
        }
    }

    /// Returns true when the app should exit.
    fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if let Some(control) = control_for_key(key) {
            if pressed {
                self.controls.press(control);
            } else {
                self.controls.release(control);
            }
            return false;
        }

        if !pressed {
            return false;
        }

        match key {
            KeyCode::F1 => {
                self.show_overlay = !self.show_overlay;
                false
            }
            KeyCode::Escape => true,
            _ => false,
        }
    }

    fn draw_ui(&mut self, ctx: &EguiContext) {
        if !self.show_overlay {
            return;
        }

        let summary = ShipInspector::summary(&self.ship);

        egui::SidePanel::left("ship_overlay")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Shipspace");
                ui.separator();
                ui.label(format!(
                    "Position: ({:.2}, {:.2}, {:.2})",
                    summary.position[0], summary.position[1], summary.position[2]
                ));
                ui.label(format!(
                    "Heading: {:.1}\u{b0} (raw {:.1})",
                    summary.heading_wrapped(),
                    summary.heading
                ));
                ui.label(format!("Ticks: {}", summary.ticks));
                ui.label(format!(
                    "Bounds: \u{b1}{} x \u{b1}{}",
                    summary.bounds[0], summary.bounds[1]
                ));
                ui.label(format!("Shader: {}", self.config.shader));
                ui.separator();
                ui.label(format!(
                    "Camera: dist={:.1} yaw={:.2} pitch={:.2}",
                    self.camera.distance, self.camera.yaw, self.camera.pitch
                ));
                ui.separator();
                ui.small("Arrows: steer | R: spin | F1: overlay");
                ui.small("LMB drag: orbit | RMB drag: pan | Wheel: zoom");
                ui.small("Esc: quit");
            });
    }
}

struct GpuApp {
    state: AppState,
    mesh_data: MeshData,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<ShipRenderer>,
    egui_ctx: EguiContext,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
}

impl GpuApp {
    fn new(config: AppConfig, mesh_data: MeshData) -> Self {
        Self {
            state: AppState::new(config),
            mesh_data,
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            egui_ctx: EguiContext::default(),
            egui_winit: None,
            egui_renderer: None,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Shipspace")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("shipspace_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state.camera.set_aspect(size.width, size.height);

        let renderer = ShipRenderer::new(
            &device,
            surface_format,
            size.width,
            size.height,
            &self.mesh_data,
        );

        if !renderer.has_shader(&self.state.config.shader) {
            tracing::error!(
                "configured shader {:?} is not available (have: {})",
                self.state.config.shader,
                renderer.shader_names().collect::<Vec<_>>().join(", ")
            );
            event_loop.exit();
            return;
        }

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(egui_winit) = &mut self.egui_winit {
            let response = egui_winit.on_window_event(self.window.as_ref().unwrap(), &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    self.state.camera.set_aspect(config.width, config.height);
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                if self
                    .state
                    .handle_key(key, key_state == ElementState::Pressed)
                {
                    event_loop.exit();
                }
            }
            WindowEvent::MouseInput { button, state, .. } => {
                let pressed = state == ElementState::Pressed;
                match button {
                    MouseButton::Left => self.state.orbiting = pressed,
                    MouseButton::Right => self.state.panning = pressed,
                    _ => {}
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 50.0,
                };
                self.state.camera.zoom(steps);
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = (now - self.state.last_frame).as_secs_f64().min(0.1);
                self.state.last_frame = now;
                self.state.advance(dt);

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                if let Some(renderer) = &self.renderer {
                    if let Err(e) = renderer.render(
                        device,
                        queue,
                        &view,
                        &self.state.config.shader,
                        self.state.camera.view_matrix(),
                        self.state.camera.projection_matrix(),
                        &self.state.ship,
                    ) {
                        tracing::error!("render failed: {e}");
                        event_loop.exit();
                        return;
                    }
                }

                let raw_input = self
                    .egui_winit
                    .as_mut()
                    .unwrap()
                    .take_egui_input(self.window.as_ref().unwrap());
                let full_output = self.egui_ctx.run(raw_input, |ctx| {
                    self.state.draw_ui(ctx);
                });

                self.egui_winit.as_mut().unwrap().handle_platform_output(
                    self.window.as_ref().unwrap(),
                    full_output.platform_output,
                );

                let paint_jobs = self
                    .egui_ctx
                    .tessellate(full_output.shapes, full_output.pixels_per_point);

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [
                        self.config.as_ref().unwrap().width,
                        self.config.as_ref().unwrap().height,
                    ],
                    pixels_per_point: full_output.pixels_per_point,
                };

                {
                    let egui_renderer = self.egui_renderer.as_mut().unwrap();
                    for (id, image_delta) in &full_output.textures_delta.set {
                        egui_renderer.update_texture(device, queue, *id, image_delta);
                    }
                    let mut encoder =
                        device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("egui_encoder"),
                        });
                    egui_renderer.update_buffers(
                        device,
                        queue,
                        &mut encoder,
                        &paint_jobs,
                        &screen_descriptor,
                    );
                    {
                        let mut pass = encoder
                            .begin_render_pass(&wgpu::RenderPassDescriptor {
                                label: Some("egui_pass"),
                                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                    view: &view,
                                    resolve_target: None,
                                    ops: wgpu::Operations {
                                        load: wgpu::LoadOp::Load,
                                        store: wgpu::StoreOp::Store,
                                    },
                                })],
                                depth_stencil_attachment: None,
                                ..Default::default()
                            })
                            .forget_lifetime();
                        egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
                    }
                    queue.submit(std::iter::once(encoder.finish()));
                    for id in &full_output.textures_delta.free {
                        egui_renderer.free_texture(id);
                    }
                }

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.state.orbiting {
                self.state.camera.orbit(delta.0 as f32, delta.1 as f32);
            } else if self.state.panning {
                self.state.camera.pan(delta.0 as f32, delta.1 as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(mesh) = cli.mesh {
        config.mesh_path = mesh;
    }

    // Load the hull geometry before opening a window so a bad path fails fast.
    let mesh_data = MeshData::from_obj(&config.mesh_path)
        .with_context(|| format!("loading ship mesh from {}", config.mesh_path))?;

    tracing::info!("shipspace-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(config, mesh_data);
    event_loop.run_app(&mut app)?;

    Ok(())
}
