// src/app.rs

use anyhow::Context;
use glam::Vec3;
use winit::{
    event::{ElementState, MouseButton, WindowEvent},
    window::Window,
};

use crate::config::{EditorConfig, EditorMode};
use crate::engine_lib::camera::Camera;
use crate::engine_lib::controller::InteractionController;
use crate::engine_lib::scene_types::EditOutcome;
use crate::generator::PolygonGenerator;
use crate::geometry::Point2;
use crate::polygon::PolygonModel;
use crate::rendering_lib::renderer::Renderer;
use crate::rendering_lib::scene_geometry::{SceneGeometry, SceneStyle};
use crate::rendering_lib::shader::WGSL_SHADER_SOURCE;
use crate::ui::{build_ui, EditorStatus, UiAction};

const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 10.0);
const CAMERA_FOV_DEG: f32 = 75.0;
const CAMERA_ZNEAR: f32 = 0.1;
const CAMERA_ZFAR: f32 = 1000.0;

/// Initial boundary for the configured mode: a regular polygon, or nothing for free-form.
pub fn seed_points(config: &EditorConfig) -> Vec<Point2> {
    match config.mode {
        EditorMode::FixedVertices => {
            PolygonGenerator::regular(Point2::ZERO, config.seed_radius, config.seed_vertex_count)
        }
        EditorMode::FreeForm => Vec::new(),
    }
}

pub struct PolygonApp {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    renderer: Renderer,
    scene: SceneGeometry,
    camera: Camera,
    model: PolygonModel,
    controller: InteractionController,
    editor_config: EditorConfig,
    cursor: Option<Point2>,
    last_outcome: Option<EditOutcome>,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl PolygonApp {
    pub async fn new(window: std::sync::Arc<Window>, editor_config: EditorConfig) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create rendering surface")?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no GPU adapter compatible with the window surface")?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    label: None,
                },
                None,
            )
            .await
            .context("failed to open GPU device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps.formats.iter().copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface reports no texture formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = Renderer::new(&device, config.format, WGSL_SHADER_SOURCE);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(), egui::ViewportId::ROOT, &window,
            Some(window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &device, config.format, None, 1,
        );

        let camera = Camera::new(CAMERA_POSITION, CAMERA_FOV_DEG, CAMERA_ZNEAR, CAMERA_ZFAR);

        let mut scene = SceneGeometry::new(SceneStyle::from(&editor_config));
        let model = PolygonModel::from_points(&seed_points(&editor_config), editor_config.max_vertices);
        let mut controller = InteractionController::new(&editor_config);
        controller.attach(&model, &mut scene);

        log::info!(
            "editor started in {} mode with {} vertices on {:?}",
            editor_config.mode,
            model.len(),
            adapter.get_info().backend,
        );

        Ok(Self {
            surface, device, queue, config, size,
            renderer, scene, camera, model, controller, editor_config,
            cursor: None,
            last_outcome: None,
            egui_ctx, egui_state, egui_renderer,
        })
    }

    pub fn get_size(&self) -> winit::dpi::PhysicalSize<u32> { self.size }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        if !focused {
            // A release outside the window never reaches us.
            let outcome = self.controller.pointer_up();
            self.record(outcome);
        }
    }

    fn status(&self) -> EditorStatus {
        EditorStatus {
            mode: self.controller.mode(),
            vertex_count: self.model.len(),
            max_vertices: self.model.max_vertices(),
            dragging: self.controller.state().dragged_index(),
            rejected_moves: self.controller.rejected_moves(),
            last_outcome: self.last_outcome,
        }
    }

    fn record(&mut self, outcome: EditOutcome) {
        if outcome != EditOutcome::Ignored {
            self.last_outcome = Some(outcome);
        }
    }

    /// Cursor position (physical pixels) to a point on the polygon plane.
    fn cursor_on_plane(&self) -> Option<Point2> {
        let cursor = self.cursor?;
        if self.size.width == 0 || self.size.height == 0 {
            return None;
        }
        self.camera.pick_on_plane(cursor, self.size.width as f32, self.size.height as f32)
    }

    fn reset(&mut self) {
        let seed = seed_points(&self.editor_config);
        self.controller.reset(&mut self.model, &mut self.scene, &seed);
        self.last_outcome = None;
    }

    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        let output_texture = self.surface.get_current_texture()?;
        let view = output_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Main Command Encoder"),
        });

        self.renderer.render_scene(
            &self.queue, &mut encoder, &view,
            &self.scene, &self.camera,
            self.size.width as f32, self.size.height as f32,
            wgpu::Color { r: 0.05, g: 0.05, b: 0.1, a: 1.0 },
        );

        let status = self.status();
        let mut action = UiAction::None;
        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| { action = build_ui(ctx, &status); });
        self.egui_state.handle_platform_output(window, full_output.platform_output);
        let tris = self.egui_ctx.tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };
        let egui_commands = self.egui_renderer.update_buffers(
            &self.device, &self.queue, &mut encoder, &tris, &screen_descriptor,
        );
        {
            let mut gui_render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("GUI Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view, resolve_target: None,
                    ops: wgpu::Operations { load: wgpu::LoadOp::Load, store: wgpu::StoreOp::Store },
                })],
                depth_stencil_attachment: None, occlusion_query_set: None, timestamp_writes: None,
            });
            self.egui_renderer.render(&mut gui_render_pass, &tris, &screen_descriptor);
        }
        for tex_id in &full_output.textures_delta.free { self.egui_renderer.free_texture(tex_id); }

        self.queue.submit(egui_commands.into_iter().chain(std::iter::once(encoder.finish())));
        output_texture.present();

        if action == UiAction::Reset {
            self.reset();
        }
        Ok(())
    }

    /// Routes pointer input to the editor. Returns true when the event was used.
    pub fn handle_window_event(&mut self, event: &WindowEvent, window: &Window) -> bool {
        if self.egui_state.on_window_event(window, event).consumed { return true; }
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(Point2::new(position.x as f32, position.y as f32));
                let Some(world) = self.cursor_on_plane() else { return false };
                let outcome = self.controller.pointer_move(&mut self.model, &mut self.scene, world);
                self.record(outcome);
                outcome != EditOutcome::Ignored
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                false
            }
            WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                if self.egui_ctx.is_pointer_over_area() { return false; }
                let Some(world) = self.cursor_on_plane() else { return false };
                let outcome = self.controller.pointer_down(&mut self.model, &mut self.scene, world);
                self.record(outcome);
                outcome != EditOutcome::Ignored
            }
            WindowEvent::MouseInput { state: ElementState::Released, button: MouseButton::Left, .. } => {
                let outcome = self.controller.pointer_up();
                self.record(outcome);
                outcome != EditOutcome::Ignored
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_mode_seeds_configured_regular_polygon() {
        let config = EditorConfig { seed_vertex_count: 5, ..EditorConfig::default() };
        let seed = seed_points(&config);
        assert_eq!(seed.len(), 5);
        assert_eq!(seed[0], Point2::new(config.seed_radius, 0.0));
    }

    #[test]
    fn free_form_starts_empty() {
        let config = EditorConfig { mode: EditorMode::FreeForm, ..EditorConfig::default() };
        assert!(seed_points(&config).is_empty());
    }
}
