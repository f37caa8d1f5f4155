//! Bindings to the page's `gsap` and `ScrollTrigger` globals.
//!
//! Requests are translated into GSAP vars objects. Failures thrown by the
//! library are caught and logged; the page keeps working without the effect.

use js_sys::{Array, Object, Reflect};
use motion_core::{PropMap, Repeat, ScrollStart, Timeline, Tween, Tweener, Value, ViewportObserver};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = to)]
    fn gsap_to(targets: &JsValue, vars: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = set)]
    fn gsap_set(targets: &JsValue, vars: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = timeline)]
    fn gsap_timeline(vars: &Object) -> Result<GsapTimeline, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = registerPlugin)]
    fn gsap_register_plugin(plugin: &JsValue) -> Result<(), JsValue>;

    type GsapTimeline;

    #[wasm_bindgen(catch, method, js_name = to)]
    fn to(
        this: &GsapTimeline,
        targets: &JsValue,
        vars: &Object,
        position: &JsValue,
    ) -> Result<JsValue, JsValue>;

    type ScrollTriggerInstance;

    #[wasm_bindgen(method)]
    fn scroll(this: &ScrollTriggerInstance) -> f64;

    #[wasm_bindgen(catch, js_namespace = ScrollTrigger, js_name = create)]
    fn scroll_trigger_create(vars: &Object) -> Result<ScrollTriggerInstance, JsValue>;
}

fn global(name: &str) -> JsValue {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
}

/// Whether the `gsap` global has been loaded.
pub fn available() -> bool {
    !global("gsap").is_undefined()
}

/// Register ScrollTrigger with GSAP. Returns `false` when the plugin script
/// is missing or registration throws.
pub fn register_scroll_trigger() -> bool {
    let plugin = global("ScrollTrigger");
    if plugin.is_undefined() {
        log::warn!("[gsap] ScrollTrigger not loaded; scroll effects fall back to immediate");
        return false;
    }
    match gsap_register_plugin(&plugin) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("[gsap] registerPlugin failed: {:?}", e);
            false
        }
    }
}

#[inline]
fn put(obj: &Object, key: &str, value: &JsValue) {
    _ = Reflect::set(obj, &JsValue::from_str(key), value);
}

fn report<T>(op: &str, result: Result<T, JsValue>) {
    if let Err(e) = result {
        log::warn!("[gsap] {} failed: {:?}", op, e);
    }
}

fn value_to_js(value: &Value) -> JsValue {
    match value {
        Value::Num(n) => JsValue::from_f64(*n as f64),
        Value::Text(s) => JsValue::from_str(s),
    }
}

fn props_object(props: &PropMap) -> Object {
    let vars = Object::new();
    for (prop, value) in props {
        put(&vars, prop.key(), &value_to_js(value));
    }
    vars
}

fn tween_vars(tween: &Tween) -> Object {
    let vars = props_object(&tween.props);
    if let Some(duration) = tween.duration {
        put(&vars, "duration", &JsValue::from_f64(duration as f64));
    }
    if let Some(ease) = tween.ease {
        put(&vars, "ease", &JsValue::from_str(&ease.to_string()));
    }
    if tween.delay > 0.0 {
        put(&vars, "delay", &JsValue::from_f64(tween.delay as f64));
    }
    if tween.stagger > 0.0 {
        put(&vars, "stagger", &JsValue::from_f64(tween.stagger as f64));
    }
    match tween.repeat {
        Some(Repeat::Count(n)) => put(&vars, "repeat", &JsValue::from_f64(n as f64)),
        Some(Repeat::Infinite) => put(&vars, "repeat", &JsValue::from_f64(-1.0)),
        None => {}
    }
    if tween.yoyo {
        put(&vars, "yoyo", &JsValue::from_bool(true));
    }
    vars
}

/// Tween requests go straight to `gsap.to` / `gsap.set`, which already
/// overwrite conflicting properties on the same target.
pub struct Gsap;

impl Tweener<web::Element> for Gsap {
    fn to(&self, target: &web::Element, tween: &Tween) {
        report("to", gsap_to(target.as_ref(), &tween_vars(tween)));
    }

    fn set(&self, target: &web::Element, props: &PropMap) {
        report("set", gsap_set(target.as_ref(), &props_object(props)));
    }

    fn play(&self, timeline: &Timeline<web::Element>) {
        let defaults = Object::new();
        if let Some(ease) = timeline.default_ease {
            put(&defaults, "ease", &JsValue::from_str(&ease.to_string()));
        }
        let vars = Object::new();
        put(&vars, "defaults", &defaults);

        let tl = match gsap_timeline(&vars) {
            Ok(tl) => tl,
            Err(e) => {
                log::warn!("[gsap] timeline failed: {:?}", e);
                return;
            }
        };
        for step in timeline.steps() {
            let targets: Array = step.targets.iter().collect();
            let position = step
                .position
                .label()
                .map(JsValue::from)
                .unwrap_or(JsValue::UNDEFINED);
            if let Err(e) = tl.to(&targets, &tween_vars(&step.tween), &position) {
                log::warn!("[gsap] timeline step failed: {:?}", e);
                return;
            }
        }
    }
}

/// Scroll thresholds through ScrollTrigger. Without the plugin, enter
/// callbacks run at once so revealed content is never left hidden.
pub struct ScrollTriggers {
    enabled: bool,
}

impl ScrollTriggers {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl ViewportObserver<web::Element> for ScrollTriggers {
    fn on_enter(&self, target: &web::Element, start: ScrollStart, mut callback: Box<dyn FnMut()>) {
        if !self.enabled {
            callback();
            return;
        }
        let on_enter = Closure::wrap(callback);
        let vars = Object::new();
        put(&vars, "trigger", target.as_ref());
        put(&vars, "start", &JsValue::from_str(&start.to_string()));
        put(&vars, "once", &JsValue::from_bool(true));
        put(&vars, "onEnter", on_enter.as_ref());
        report("ScrollTrigger.create", scroll_trigger_create(&vars));
        on_enter.forget();
    }

    fn on_scroll(&self, start: ScrollStart, mut callback: Box<dyn FnMut(f32)>) {
        if !self.enabled {
            return;
        }
        let on_update = Closure::wrap(Box::new(move |st: ScrollTriggerInstance| {
            callback(st.scroll() as f32);
        }) as Box<dyn FnMut(ScrollTriggerInstance)>);
        let vars = Object::new();
        put(&vars, "start", &JsValue::from_str(&start.to_string()));
        put(&vars, "onUpdate", on_update.as_ref());
        report("ScrollTrigger.create", scroll_trigger_create(&vars));
        on_update.forget();
    }
}
