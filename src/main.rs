//! Bounce Box entry point
//!
//! Handles platform-specific initialization and drives the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use bounce_box::SimConfig;
    use bounce_box::renderer::{RenderState, draw_scene};
    use bounce_box::sim::{FrameLoop, FrameScheduler, SimulationState};

    /// Re-arm flag the rAF driver drains after each loop call
    #[derive(Default)]
    struct RafArm {
        armed: bool,
    }

    impl RafArm {
        fn take(&mut self) -> bool {
            std::mem::take(&mut self.armed)
        }
    }

    impl FrameScheduler for RafArm {
        fn request_frame(&mut self) {
            self.armed = true;
        }
    }

    /// App instance holding the loop and the renderer
    struct App {
        frame_loop: FrameLoop,
        render_state: RenderState,
        scheduler: RafArm,
    }

    impl App {
        /// Draw the current state once without stepping (startup render)
        fn render_idle(&mut self) {
            let Self {
                frame_loop,
                render_state,
                ..
            } = self;
            draw_scene(render_state, frame_loop.state(), frame_loop.style());
            self.present();
        }

        /// One granted rAF callback; true when another must be requested
        fn on_frame(&mut self) -> bool {
            self.frame_loop
                .frame(&mut self.render_state, &mut self.scheduler);
            let rearm = self.scheduler.take();
            if rearm {
                self.present();
            }
            rearm
        }

        /// Start trigger; true when a callback chain must be armed
        fn on_start(&mut self) -> bool {
            self.frame_loop
                .start(&mut self.render_state, &mut self.scheduler);
            let rearm = self.scheduler.take();
            if rearm {
                self.present();
            }
            rearm
        }

        /// Reset trigger; halts the loop and redraws the fresh state
        fn on_reset(&mut self) {
            self.frame_loop.reset(&mut self.render_state);
            self.present();
        }

        fn present(&mut self) {
            match self.render_state.present() {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bounce Box starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("mainCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Surface bounds come from the DOM element, the rest from stored config
        let mut config = SimConfig::load();
        config.width = client_w as f32;
        config.height = client_h as f32;
        config.validate().expect("canvas has zero extent");

        let seed = js_sys::Date::now() as u64;
        let state = SimulationState::new(&config, seed).expect("bounds already validated");
        log::info!("Simulation initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            (config.width, config.height),
        )
        .await;

        let app = Rc::new(RefCell::new(App {
            frame_loop: FrameLoop::new(state, config.style),
            render_state,
            scheduler: RafArm::default(),
        }));

        // One render of the seeded state before any start
        app.borrow_mut().render_idle();

        setup_buttons(app);

        log::info!("Bounce Box ready - press Start");
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("btnStart") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                if app.borrow_mut().on_start() {
                    request_animation_frame(app.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("btnReset") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().on_reset();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame_callback(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_callback(app: Rc<RefCell<App>>) {
        let rearm = app.borrow_mut().on_frame();
        if rearm {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bounce Box (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web demo");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the loop for a few hundred frames against a tallying canvas
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use bounce_box::SimConfig;
    use bounce_box::renderer::{Canvas, Region};
    use bounce_box::sim::{FrameLoop, FrameScheduler, SimulationState};
    use glam::Vec2;

    #[derive(Default)]
    struct TallyCanvas {
        circles: usize,
    }

    impl Canvas for TallyCanvas {
        fn clear(&mut self, _region: Region) {}
        fn fill_rect(&mut self, _region: Region, _color: [f32; 4]) {}
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: [f32; 4]) {
            self.circles += 1;
        }
    }

    #[derive(Default)]
    struct Immediate {
        armed: bool,
    }

    impl FrameScheduler for Immediate {
        fn request_frame(&mut self) {
            self.armed = true;
        }
    }

    let config = SimConfig::load();
    let state = SimulationState::new(&config, 42).expect("default bounds are valid");
    let mut frame_loop = FrameLoop::new(state, config.style);
    let mut canvas = TallyCanvas::default();
    let mut scheduler = Immediate::default();

    frame_loop.start(&mut canvas, &mut scheduler);
    for _ in 0..299 {
        scheduler.armed = false;
        frame_loop.frame(&mut canvas, &mut scheduler);
        debug_assert!(scheduler.armed);
    }
    frame_loop.stop();

    log::info!("300 frames run, {} circles drawn", canvas.circles);
    for (i, p) in frame_loop.state().particles.iter().enumerate() {
        log::info!(
            "particle {i}: pos=({:.1}, {:.1}) vel=({:.2}, {:.2})",
            p.pos.x,
            p.pos.y,
            p.vel.x,
            p.vel.y
        );
    }
}
