use crate::canvas::CanvasPainter;
use crate::constants::SLOW_FRAME_MS;
use crate::dom;
use crate::listener::Listener;
use instant::Instant;
use origin_core::{CanvasEffect, EffectSettings, FrameClock, FrameScheduler, Viewport};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` bound to one effect's frame callback.
pub struct RafClock {
    callback: js_sys::Function,
}

impl FrameClock for RafClock {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        web::window()?.request_animation_frame(&self.callback).ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle);
        }
    }
}

/// One canvas, its effect and its redraw state.
struct Runner {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    effect: Box<dyn CanvasEffect>,
    settings: EffectSettings,
    scheduler: FrameScheduler<i32>,
    clock: RafClock,
    css: (f64, f64),
    dpr: f64,
    needs_resize: bool,
}

impl Runner {
    fn progress(&self) -> f32 {
        self.settings
            .local_progress(&dom::scroll_sample(&self.canvas))
    }

    fn on_scroll(&mut self) {
        let p = self.progress();
        self.scheduler.notify(p, &mut self.clock);
    }

    /// Reallocation is deferred to the next frame so bursts of resize events
    /// cost one buffer reset, immediately followed by a redraw.
    fn on_resize(&mut self) {
        self.needs_resize = true;
        let p = self.progress();
        self.scheduler.notify(p, &mut self.clock);
        if !self.scheduler.is_pending() {
            self.scheduler.request_redraw(&mut self.clock);
        }
    }

    fn on_frame(&mut self) {
        let Some(p) = self.scheduler.fire() else {
            return;
        };
        if self.needs_resize {
            self.resize();
        }
        self.paint(p);
    }

    fn resize(&mut self) {
        self.needs_resize = false;
        self.dpr = dom::device_pixel_ratio();
        self.css = dom::css_size(&self.canvas, self.settings.sizing);
        dom::apply_backing_size(&self.canvas, self.css, self.dpr);
        log::debug!(
            "[{}] backing {:.0}x{:.0} @{:.2}",
            self.effect.name(),
            self.css.0,
            self.css.1,
            self.dpr
        );
    }

    fn paint(&mut self, progress: f32) {
        let started = Instant::now();
        let viewport = Viewport::new(self.css.0 as f32, self.css.1 as f32);
        let mut painter = CanvasPainter::begin(&self.ctx, self.dpr, self.css.0, self.css.1);
        self.effect.draw(progress, viewport, &mut painter);
        let ms = started.elapsed().as_secs_f64() * 1000.0;
        if ms > SLOW_FRAME_MS {
            log::debug!("[{}] slow frame {:.1} ms at {:.4}", self.effect.name(), ms, progress);
        }
    }
}

/// A running effect. Dropping it cancels the pending frame before the frame
/// callback is released, then detaches the listeners.
pub struct Mounted {
    name: &'static str,
    runner: Rc<RefCell<Runner>>,
    listeners: Vec<Listener>,
    _frame: Closure<dyn FnMut()>,
}

impl Mounted {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn unmount(self) {
        log::info!("[{}] unmounted", self.name);
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        if let Ok(mut r) = self.runner.try_borrow_mut() {
            let r = &mut *r;
            r.scheduler.cancel(&mut r.clock);
        }
        self.listeners.clear();
    }
}

fn with_runner(weak: &Weak<RefCell<Runner>>, f: impl FnOnce(&mut Runner)) {
    if let Some(runner) = weak.upgrade() {
        if let Ok(mut r) = runner.try_borrow_mut() {
            f(&mut *r);
        }
    }
}

/// Size the canvas, paint the current frame synchronously and start
/// listening for scroll and resize.
pub fn mount(
    canvas: web::HtmlCanvasElement,
    effect: Box<dyn CanvasEffect>,
) -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let settings = effect.settings();
    let name = effect.name();
    let ctx = dom::context_2d(&canvas, settings.opaque)?;

    let slot: Rc<RefCell<Weak<RefCell<Runner>>>> = Rc::new(RefCell::new(Weak::new()));
    let slot_frame = slot.clone();
    let frame = Closure::wrap(Box::new(move || {
        with_runner(&slot_frame.borrow(), Runner::on_frame);
    }) as Box<dyn FnMut()>);

    let runner = Rc::new(RefCell::new(Runner {
        canvas,
        ctx,
        effect,
        settings,
        scheduler: FrameScheduler::new(settings.epsilon),
        clock: RafClock {
            callback: frame.as_ref().unchecked_ref::<js_sys::Function>().clone(),
        },
        css: (0.0, 0.0),
        dpr: 1.0,
        needs_resize: false,
    }));
    *slot.borrow_mut() = Rc::downgrade(&runner);

    {
        let mut r = runner.borrow_mut();
        r.resize();
        let p = r.progress();
        r.paint(p);
        r.scheduler.mark_drawn(p);
        log::info!("[{}] mounted at {:.3}", name, p);
    }

    let target: &web::EventTarget = window.as_ref();
    let weak_scroll = Rc::downgrade(&runner);
    let weak_resize = Rc::downgrade(&runner);
    let listeners = [
        Listener::passive(target, "scroll", move || with_runner(&weak_scroll, Runner::on_scroll)),
        Listener::passive(target, "resize", move || with_runner(&weak_resize, Runner::on_resize)),
    ]
    .into_iter()
    .flatten()
    .collect();

    Ok(Mounted {
        name,
        runner,
        listeners,
        _frame: frame,
    })
}
