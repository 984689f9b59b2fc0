use std::cell::RefCell;
use std::rc::Rc;

use swarm_core::{Swarm, SwarmConfig, SwarmError, Vector2D, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent, Window};

mod canvas;
pub use canvas::{css_color, CanvasSurface};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

fn to_js(error: SwarmError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[wasm_bindgen]
pub struct SwarmSimulation {
    swarm: Swarm,
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    display_width: f64,
    display_height: f64,
}

#[wasm_bindgen]
impl SwarmSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: &str,
        agent_count: usize,
        show_agents: bool,
    ) -> Result<SwarmSimulation, JsValue> {
        console_log!("Initializing swarm with {} agents", agent_count);

        let window = web_sys::window().ok_or("no global window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        let context = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let config = SwarmConfig {
            agent_count,
            show_agents,
            ..Default::default()
        };

        let (display_width, display_height) = inner_size(&window)?;
        let viewport = fit_canvas(&canvas, display_width, display_height, config.display_scale)?;

        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let swarm = Swarm::new(viewport, config, seed).map_err(to_js)?;

        Ok(SwarmSimulation {
            swarm,
            canvas,
            surface: CanvasSurface::new(context),
            display_width,
            display_height,
        })
    }

    /// Advance and draw one frame.
    pub fn tick(&mut self) {
        self.swarm.tick(&mut self.surface);
    }

    pub fn handle_mouse_move(&mut self, event: MouseEvent) {
        let point = self.event_point(&event);
        self.swarm.pointer_move(point);
    }

    pub fn handle_mouse_out(&mut self) {
        self.swarm.pointer_leave();
    }

    pub fn handle_click(&mut self, event: MouseEvent) {
        let point = self.event_point(&event);
        let scattered = self.swarm.impulse(point);
        console_log!("Scattered {} agents from ({}, {})", scattered, point.x, point.y);
    }

    /// Refit the canvas to the window. Does nothing if the window size did
    /// not change.
    pub fn handle_resize(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no global window")?;
        let (width, height) = inner_size(&window)?;
        if width == self.display_width && height == self.display_height {
            return Ok(());
        }

        let viewport = fit_canvas(&self.canvas, width, height, self.swarm.config().display_scale)?;
        self.swarm.resize(viewport);
        self.display_width = width;
        self.display_height = height;
        console_log!("Resized to {}x{}", viewport.width(), viewport.height());
        Ok(())
    }

    pub fn agent_count(&self) -> usize {
        self.swarm.agents().len()
    }

    pub fn frame(&self) -> u64 {
        self.swarm.frame()
    }

    pub fn mean_speed(&self) -> f32 {
        self.swarm.mean_speed()
    }
}

impl SwarmSimulation {
    fn event_point(&self, event: &MouseEvent) -> Vector2D {
        let canvas_element: &Element = self.canvas.as_ref();
        let rect = canvas_element.get_bounding_client_rect();
        let x = event.client_x() as f64 - rect.left();
        let y = event.client_y() as f64 - rect.top();
        Viewport::to_internal(
            Vector2D::new(x as f32, y as f32),
            self.swarm.config().display_scale,
        )
    }
}

fn inner_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window.inner_width()?.as_f64().ok_or("innerWidth is not a number")?;
    let height = window.inner_height()?.as_f64().ok_or("innerHeight is not a number")?;
    Ok((width, height))
}

/// Size the canvas element to the display size and its backing store to the
/// scaled viewport.
fn fit_canvas(
    canvas: &HtmlCanvasElement,
    display_width: f64,
    display_height: f64,
    scale: f32,
) -> Result<Viewport, JsValue> {
    let viewport =
        Viewport::from_display(display_width as f32, display_height as f32, scale).map_err(to_js)?;

    let style = canvas.style();
    style.set_property("width", &format!("{}px", display_width.trunc()))?;
    style.set_property("height", &format!("{}px", display_height.trunc()))?;
    canvas.set_width(viewport.width() as u32);
    canvas.set_height(viewport.height() as u32);

    Ok(viewport)
}

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or("no global window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

fn listen_mouse<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Build a simulation on `canvas_id`, wire pointer, click and resize events
/// and keep it running on animation frames until the page goes away.
#[wasm_bindgen]
pub fn start(canvas_id: &str, agent_count: usize, show_agents: bool) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no global window")?;
    let simulation = SwarmSimulation::new(canvas_id, agent_count, show_agents)?;
    let canvas = simulation.canvas.clone();
    let simulation = Rc::new(RefCell::new(simulation));

    {
        let simulation = simulation.clone();
        listen_mouse(&canvas, "mousemove", move |event| {
            simulation.borrow_mut().handle_mouse_move(event)
        })?;
    }
    {
        let simulation = simulation.clone();
        listen_mouse(&canvas, "mouseout", move |_| {
            simulation.borrow_mut().handle_mouse_out()
        })?;
    }
    {
        let simulation = simulation.clone();
        listen_mouse(&window, "click", move |event| {
            simulation.borrow_mut().handle_click(event)
        })?;
    }
    {
        let simulation = simulation.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            if let Err(e) = simulation.borrow_mut().handle_resize() {
                console_log!("Resize failed: {:?}", e);
            }
        });
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();
    *frame.borrow_mut() = Some(Closure::new(move || {
        simulation.borrow_mut().tick();
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(e) = request_animation_frame(callback) {
                console_log!("Failed to schedule frame: {:?}", e);
            }
        }
    }));

    if let Some(callback) = frame.borrow().as_ref() {
        request_animation_frame(callback)?;
    }

    console_log!("Swarm running on #{}", canvas_id);
    Ok(())
}
