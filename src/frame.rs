use crate::core::{Camera, ParticleField, SceneConfig, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::dom;
use crate::render;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the hero needs to draw one frame.
pub struct FrameContext {
    pub scene: SceneConfig,
    pub field: ParticleField,
    pub camera: Camera,
    pub gpu: render::GpuState,
    pub canvas: web::HtmlCanvasElement,
    /// Latest pointer position in normalized device units, written by the
    /// pointermove subscription.
    pub pointer: Rc<Cell<Vec2>>,
}

impl FrameContext {
    pub fn new(
        scene: SceneConfig,
        gpu: render::GpuState,
        canvas: web::HtmlCanvasElement,
        pointer: Rc<Cell<Vec2>>,
    ) -> Self {
        let mut camera = Camera::new(
            scene.camera_distance,
            scene.fov_deg,
            CAMERA_ZNEAR,
            CAMERA_ZFAR,
        );
        let (w, h) = gpu.size();
        camera.set_viewport(w, h);
        Self {
            scene,
            field: ParticleField::new(),
            camera,
            gpu,
            canvas,
            pointer,
        }
    }

    pub fn frame(&mut self) {
        // The resize subscription only touches the canvas backing store; pick
        // the new size up here so projection and surface change together.
        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        if self.camera.set_viewport(w, h) {
            log::debug!("[hero] aspect {:.3} ({}x{})", self.camera.aspect, w, h);
        }

        self.field.step(&self.scene, self.pointer.get());

        let dpr = dom::device_pixel_ratio() as f32;
        match self.gpu.render(&self.field, &self.camera, &self.scene, dpr) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                let (w, h) = (self.canvas.width(), self.canvas.height());
                log::warn!("[hero] surface lost, reconfiguring at {}x{}", w, h);
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

/// A requestAnimationFrame loop owned by a component.
///
/// Each tick checks the liveness flag before drawing and before scheduling
/// the next frame. [`RenderLoop::stop`] clears the flag, cancels the pending
/// frame, and drops the tick closure.
pub struct RenderLoop {
    alive: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RenderLoop {
    pub fn start(mut frame: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let alive = Rc::new(Cell::new(true));
        let handle = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let alive_tick = alive.clone();
        let handle_tick = handle.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            if !alive_tick.get() {
                return;
            }
            frame();
            if !alive_tick.get() {
                return;
            }
            if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
                match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => handle_tick.set(Some(id)),
                    Err(e) => log::error!("[frame] request_animation_frame: {:?}", e),
                }
            }
        }) as Box<dyn FnMut()>));

        let first = tick
            .borrow()
            .as_ref()
            .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
        match first {
            Some(Ok(id)) => handle.set(Some(id)),
            Some(Err(e)) => {
                tick.borrow_mut().take();
                anyhow::bail!("request_animation_frame: {:?}", e);
            }
            None => {}
        }
        Ok(Self {
            alive,
            handle,
            tick,
        })
    }

    pub fn is_running(&self) -> bool {
        self.alive.get()
    }

    pub fn stop(&self) {
        if !self.alive.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            if let Err(e) = w.cancel_animation_frame(id) {
                log::error!("[frame] cancel_animation_frame: {:?}", e);
            }
        }
        // Breaks the closure's reference to itself
        self.tick.borrow_mut().take();
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
