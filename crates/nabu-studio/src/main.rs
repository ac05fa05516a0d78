//! Windowed demo: batches a few rectangles through the engine every frame
//! and hands the result to the draw-list renderer.

mod gpu;

use std::sync::Arc;

use anyhow::{Context as _, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use nabu_engine::context::Context;
use nabu_engine::coords::Viewport;
use nabu_engine::logging;
use nabu_engine::paint::Color;
use nabu_engine::render::{DrawListRenderer, RenderCtx, RenderTarget};

use crate::gpu::{Gpu, SurfaceErrorAction};

const CLEAR_COLOR: wgpu::Color = wgpu::Color { r: 0.5, g: 0.5, b: 0.5, a: 1.0 };

struct Studio {
    window: Option<Arc<Window>>,
    gpu: Option<Gpu>,
    context: Context,
    renderer: DrawListRenderer,
}

impl Studio {
    fn new() -> Self {
        Self {
            window: None,
            gpu: None,
            context: Context::new(),
            renderer: DrawListRenderer::new(),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title("nabu studio")
            .with_inner_size(LogicalSize::new(800.0, 600.0));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let gpu = pollster::block_on(Gpu::new(Arc::clone(&window)))
            .context("GPU initialization failed")?;

        self.window = Some(window);
        self.gpu = Some(gpu);
        log::info!("studio window up");
        Ok(())
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(gpu)) = (self.window.as_ref(), self.gpu.as_mut()) else {
            return;
        };

        // Batch this frame's shapes.
        self.context.begin_frame();
        self.context.rect(40.0, 40.0, 240.0, 160.0, Color::WHITE);
        self.context
            .rect(120.0, 120.0, 200.0, 200.0, Color::from_rgba(1.0, 1.0, 0.0, 1.0));
        self.context
            .rect(480.0, 80.0, 160.0, 320.0, Color::from_rgb(0.2, 0.4, 0.9));
        self.context.render_frame();

        let mut frame = match gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                if gpu.handle_surface_error(err) == SurfaceErrorAction::Fatal {
                    log::error!("surface out of memory; exiting");
                    event_loop.exit();
                }
                return;
            }
        };

        // Clear pass; dropped before the encoder is handed to the renderer.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("nabu-studio clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let logical: LogicalSize<f64> = window.inner_size().to_logical(window.scale_factor());
        let rctx = RenderCtx::new(
            gpu.device(),
            gpu.queue(),
            gpu.surface_format(),
            Viewport::new(logical.width as f32, logical.height as f32),
        );

        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            self.renderer.render(&rctx, &mut target, &self.context);
        }

        window.pre_present_notify();
        gpu.submit(frame);
    }
}

impl ApplicationHandler for Studio {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init(event_loop) {
            log::error!("initialization failed: {err:#}");
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    logging::init(None);

    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    event_loop
        .run_app(&mut Studio::new())
        .context("winit event loop terminated with error")?;

    Ok(())
}
