// src/main.rs

pub mod app;
pub mod engine_lib;
pub mod rendering_lib;
pub mod ui;

use std::sync::Arc;

use anyhow::Context as _;
use app::LightApp;
use log::{error, info};
use raycaster2d::config::{DEFAULT_SCENE_HEIGHT, DEFAULT_SCENE_WIDTH};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::WindowBuilder,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub async fn run() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            // A second init only fails because a logger is already installed.
            let _ = console_log::init_with_level(log::Level::Warn);
        } else {
            env_logger::init();
        }
    }

    if let Err(err) = run_event_loop().await {
        error!("{err:#}");
    }
}

async fn run_event_loop() -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("failed to create the event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Raycasting Simulation")
            .with_inner_size(winit::dpi::LogicalSize::new(
                DEFAULT_SCENE_WIDTH,
                DEFAULT_SCENE_HEIGHT,
            ))
            .build(&event_loop)
            .context("failed to open the window")?,
    );

    #[cfg(target_arch = "wasm32")]
    {
        use winit::platform::web::WindowExtWebSys;
        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| {
                let dst = doc.get_element_by_id("wasm-viewport")?;
                let canvas = web_sys::Element::from(window.canvas()?);
                dst.append_child(&canvas).ok()?;
                Some(())
            })
            .context("couldn't append canvas to document body")?;
    }

    let mut app_state = LightApp::new(window.clone()).await?;
    info!("window ready at {:?}", app_state.get_size());

    event_loop.run(move |event, target: &EventLoopWindowTarget<()>| {
        target.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                if !app_state.handle_window_event(event, &window) {
                    match event {
                        WindowEvent::CloseRequested => {
                            info!("close requested");
                            target.exit();
                        }
                        WindowEvent::Resized(physical_size) => {
                            app_state.resize(*physical_size);
                        }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                app_state.update();
                match app_state.render(&window) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        app_state.resize(app_state.get_size());
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        error!("GPU out of memory, exiting");
                        target.exit();
                    }
                    Err(e) => log::warn!("surface error: {e:?}"),
                }

                if !target.exiting() {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    })?;
    Ok(())
}

#[tokio::main]
async fn main() {
    run().await;
}
