// src/app.rs

use std::sync::Arc;

use anyhow::Context as _;
use log::{info, trace};
use raycaster2d::{LightScene, SceneConfig};
use winit::{event::WindowEvent, window::Window};

use crate::engine_lib::{InputAction, PointerController};
use crate::rendering_lib::{FrameBuilder, Renderer, WGSL_SHADER_SOURCE};
use crate::ui::{build_ui, UiView};

const SCATTER_COUNT: usize = 8;

pub struct LightApp {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    renderer: Renderer,
    frame: FrameBuilder,
    scene: LightScene,
    controller: PointerController,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl LightApp {
    pub async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create a surface for the window")?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no compatible GPU adapter")?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    label: None,
                },
                None,
            )
            .await
            .context("failed to open the GPU device")?;
        info!("using adapter {:?}", adapter.get_info().name);

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
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

        let renderer = Renderer::new(
            &device,
            config.format,
            WGSL_SHADER_SOURCE,
            config.width as f32,
            config.height as f32,
        );

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, config.format, None, 1);

        let scene = LightScene::new(
            SceneConfig::default().with_size(config.width as f32, config.height as f32),
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            renderer,
            frame: FrameBuilder::with_capacity(4096),
            scene,
            controller: PointerController::new(),
            egui_ctx,
            egui_state,
            egui_renderer,
        })
    }

    pub fn get_size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.size
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.scene
                .resize(new_size.width as f32, new_size.height as f32);
        }
    }

    fn apply(&mut self, action: InputAction) {
        trace!("input: {action:?}");
        match action {
            InputAction::PointerMoved(point) => self.scene.pointer_moved(point),
            InputAction::Click(point) => self.scene.click(point),
            InputAction::PlaceLight(point) => self.scene.add_light(point),
            InputAction::TogglePolygons => self.scene.toggle_polygons(),
            InputAction::CycleColoring => self.scene.cycle_coloring(),
            InputAction::ClearBoundaries => self.scene.clear_boundaries(),
            InputAction::ScatterBoundaries => {
                self.scene.scatter_random(&mut rand::thread_rng(), SCATTER_COUNT)
            }
            InputAction::CancelDraft => self.scene.cancel_draft(),
        }
    }

    pub fn update(&mut self) {
        self.scene.update();
    }

    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        let output_texture = self.surface.get_current_texture()?;
        let view = output_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Main Command Encoder"),
            });

        self.frame.clear();
        self.scene.render(&mut self.frame);

        let [r, g, b, a] = self.scene.config().background;
        self.renderer.render_frame(
            &self.device,
            &self.queue,
            &mut encoder,
            &view,
            &self.frame,
            self.config.width as f32,
            self.config.height as f32,
            wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            },
        );

        let ui_view = UiView {
            stats: self.scene.stats(),
            polygons_visible: self.scene.polygons_visible(),
            coloring: self.scene.fan_coloring(),
        };
        let mut ui_action = None;
        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            ui_action = build_ui(ctx, &ui_view);
        });
        self.egui_state
            .handle_platform_output(window, full_output.platform_output);
        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };
        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut gui_render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("GUI Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            self.egui_renderer
                .render(&mut gui_render_pass, &tris, &screen_descriptor);
        }
        for tex_id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(tex_id);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output_texture.present();

        if let Some(action) = ui_action {
            self.apply(action);
        }
        Ok(())
    }

    /// Returns `true` when the event was consumed by the panel or the scene.
    pub fn handle_window_event(&mut self, event: &WindowEvent, window: &Window) -> bool {
        if self.egui_state.on_window_event(window, event).consumed {
            return true;
        }
        match self.controller.handle_window_event(event) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }
}
