//! Fullscreen particle backdrop for the hero section.
//!
//! Mounting appends a canvas to the container, wires resize (and optional
//! pointer) subscriptions, and starts WebGPU initialization in the
//! background. When WebGPU is unavailable the canvas stays blank and the
//! surrounding hero content is unaffected.

use crate::core::{generate_particles, SceneConfig};
use crate::dom;
use crate::events::Subscriptions;
use crate::frame::{FrameContext, RenderLoop};
use crate::input;
use crate::render::GpuState;
use anyhow::Context;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct HeroShared {
    container: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    mounted: Cell<bool>,
    subs: RefCell<Subscriptions>,
    render_loop: RefCell<Option<RenderLoop>>,
}

impl HeroShared {
    fn teardown(&self) {
        if !self.mounted.replace(false) {
            return;
        }
        if let Some(render_loop) = self.render_loop.borrow_mut().take() {
            // Dropping the loop drops the frame context and with it the GPU surface
            render_loop.stop();
        }
        self.subs.borrow_mut().clear();
        let node: &web::Node = &self.canvas;
        if self.container.contains(Some(node)) {
            if let Err(e) = self.container.remove_child(node) {
                log::error!("[hero] error during cleanup: {:?}", e);
            }
        }
        log::info!("[hero] unmounted");
    }
}

impl Drop for HeroShared {
    fn drop(&mut self) {
        self.teardown();
    }
}

pub struct ParticleHero {
    shared: Rc<HeroShared>,
}

impl ParticleHero {
    pub fn mount(container: &web::HtmlElement, scene: SceneConfig) -> anyhow::Result<Self> {
        scene.validate().context("invalid particle scene")?;
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let canvas: web::HtmlCanvasElement = dom::create(&document, "canvas")?;
        dom::set_style(&canvas, "display", "block");
        dom::set_style(&canvas, "width", "100%");
        dom::set_style(&canvas, "height", "100%");
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
        let (w, h) = dom::sync_canvas_backing_size(&canvas, container);

        let shared = Rc::new(HeroShared {
            container: container.clone(),
            canvas: canvas.clone(),
            mounted: Cell::new(true),
            subs: RefCell::new(Subscriptions::new()),
            render_loop: RefCell::new(None),
        });

        let pointer = Rc::new(Cell::new(Vec2::ZERO));
        {
            let mut subs = shared.subs.borrow_mut();
            let canvas_resize = canvas.clone();
            let host_resize = container.clone();
            subs.listen(&window, "resize", move |_: web::Event| {
                dom::sync_canvas_backing_size(&canvas_resize, &host_resize);
            })?;

            if scene.move_on_hover {
                let host = container.clone();
                let pointer_move = pointer.clone();
                subs.listen(&window, "mousemove", move |ev: web::MouseEvent| {
                    let rect = host.get_bounding_client_rect();
                    pointer_move.set(input::pointer_ndc(
                        ev.client_x() as f64,
                        ev.client_y() as f64,
                        rect.left(),
                        rect.top(),
                        rect.width(),
                        rect.height(),
                    ));
                })?;
            }
        }

        let particles = generate_particles(&scene, &mut StdRng::from_entropy());
        log::info!(
            "[hero] mounted {}x{} count={} spread={} speed={}",
            w,
            h,
            particles.len(),
            scene.spread,
            scene.speed
        );

        let weak = Rc::downgrade(&shared);
        spawn_local(async move {
            let gpu = GpuState::new(&canvas, &particles).await;
            start_animation(weak, gpu, scene, canvas, pointer);
        });

        Ok(Self { shared })
    }

    /// Invoke `callback` when `target` is clicked, for as long as the hero is mounted.
    pub fn on_enter(
        &self,
        target: &web::EventTarget,
        mut callback: impl FnMut() + 'static,
    ) -> anyhow::Result<()> {
        self.shared
            .subs
            .borrow_mut()
            .listen(target, "click", move |_: web::Event| callback())
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.mounted.get()
    }

    pub fn is_animating(&self) -> bool {
        self.shared
            .render_loop
            .borrow()
            .as_ref()
            .map(|l| l.is_running())
            .unwrap_or(false)
    }

    pub fn listener_count(&self) -> usize {
        self.shared.subs.borrow().len()
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.shared.canvas
    }

    /// Stop the frame loop, release the GPU surface, detach every listener,
    /// and remove the canvas. Safe to call more than once.
    pub fn unmount(&self) {
        self.shared.teardown();
    }
}

fn start_animation(
    hero: Weak<HeroShared>,
    gpu: anyhow::Result<GpuState>,
    scene: SceneConfig,
    canvas: web::HtmlCanvasElement,
    pointer: Rc<Cell<Vec2>>,
) {
    let Some(shared) = hero.upgrade() else {
        return;
    };
    if !shared.mounted.get() {
        // Unmounted while the adapter was being requested; `gpu` drops here.
        return;
    }
    let gpu = match gpu {
        Ok(g) => g,
        Err(e) => {
            log::warn!("[hero] particle backdrop disabled: {:?}", e);
            return;
        }
    };
    let mut ctx = FrameContext::new(scene, gpu, canvas, pointer);
    match RenderLoop::start(move || ctx.frame()) {
        Ok(render_loop) => *shared.render_loop.borrow_mut() = Some(render_loop),
        Err(e) => log::warn!("[hero] animation loop unavailable: {:?}", e),
    }
}
