// In-memory page for driving the real engine from host tests.
// Elements are plain indices; selectors are registered verbatim, so tests
// register elements under the same selector strings the installers query.

#![allow(dead_code)]

use fnv::FnvHashMap;
use glam::Vec2;
use motion_core::{
    AnimationEngine, Backend, EngineConfig, EventKind, Host, InstallReport, PointerHandler,
    PointerSample, Prop, PropMap, Rect, ScrollStart, Timeline, Tween, Tweener, ViewportObserver,
};
use std::cell::RefCell;
use std::rc::Rc;

pub type El = usize;

#[derive(Default)]
pub struct Node {
    pub classes: Vec<String>,
    pub attrs: FnvHashMap<String, String>,
    pub children: Vec<El>,
    pub rect: Rect,
}

#[derive(Default)]
pub struct Page {
    pub nodes: Vec<Node>,
    selectors: FnvHashMap<String, Vec<El>>,
    within: FnvHashMap<(El, String), El>,
    listeners: FnvHashMap<(El, EventKind), Vec<PointerHandler>>,
    pub overlays_created: usize,
    pub viewport: Vec2,
}

impl Page {
    fn new_node(&mut self, rect: Rect) -> El {
        self.nodes.push(Node {
            rect,
            ..Node::default()
        });
        self.nodes.len() - 1
    }
}

pub struct FakeHost(Rc<RefCell<Page>>);

impl Host for FakeHost {
    type Element = El;

    fn query_all(&self, selector: &str) -> Vec<El> {
        self.0.borrow().selectors.get(selector).cloned().unwrap_or_default()
    }

    fn query_within(&self, parent: &El, selector: &str) -> Option<El> {
        self.0.borrow().within.get(&(*parent, selector.to_string())).copied()
    }

    fn attribute(&self, element: &El, name: &str) -> Option<String> {
        self.0.borrow().nodes[*element].attrs.get(name).cloned()
    }

    fn bounds(&self, element: &El) -> Rect {
        self.0.borrow().nodes[*element].rect
    }

    fn viewport(&self) -> Vec2 {
        self.0.borrow().viewport
    }

    fn overlay_slot(&self, owner: &El, class_name: &str) -> Option<El> {
        let mut page = self.0.borrow_mut();
        let existing = page.nodes[*owner]
            .children
            .iter()
            .copied()
            .find(|c| page.nodes[*c].classes.iter().any(|k| k == class_name));
        if existing.is_some() {
            return existing;
        }
        let rect = page.nodes[*owner].rect;
        let child = page.new_node(rect);
        page.nodes[child].classes.push(class_name.to_string());
        page.nodes[*owner].children.push(child);
        page.overlays_created += 1;
        Some(child)
    }

    fn set_class(&self, element: &El, class_name: &str, on: bool) {
        let mut page = self.0.borrow_mut();
        let classes = &mut page.nodes[*element].classes;
        classes.retain(|c| c != class_name);
        if on {
            classes.push(class_name.to_string());
        }
    }

    fn listen(&self, element: &El, kind: EventKind, handler: PointerHandler) {
        self.0
            .borrow_mut()
            .listeners
            .entry((*element, kind))
            .or_default()
            .push(handler);
    }
}

#[derive(Clone, Debug)]
pub enum Request {
    To(El, Tween),
    Set(El, PropMap),
    Play(Timeline<El>),
}

/// Every request in issue order, plus the engine's view of which tween
/// currently owns each (element, property).
#[derive(Default)]
pub struct TweenLog {
    pub requests: Vec<Request>,
    active: FnvHashMap<(El, Prop), Tween>,
}

pub struct FakeTweener(Rc<RefCell<TweenLog>>);

impl Tweener<El> for FakeTweener {
    fn to(&self, target: &El, tween: &Tween) {
        let mut log = self.0.borrow_mut();
        for (prop, _) in &tween.props {
            log.active.insert((*target, *prop), tween.clone());
        }
        log.requests.push(Request::To(*target, tween.clone()));
    }

    fn set(&self, target: &El, props: &PropMap) {
        let mut log = self.0.borrow_mut();
        for (prop, _) in props {
            log.active.remove(&(*target, *prop));
        }
        log.requests.push(Request::Set(*target, props.clone()));
    }

    fn play(&self, timeline: &Timeline<El>) {
        self.0.borrow_mut().requests.push(Request::Play(timeline.clone()));
    }
}

type EnterCallback = (El, ScrollStart, Box<dyn FnMut()>);
type ScrollCallback = (ScrollStart, Box<dyn FnMut(f32)>);

#[derive(Default)]
pub struct Watchers {
    enters: Vec<EnterCallback>,
    scrolls: Vec<ScrollCallback>,
}

pub struct FakeObserver(Rc<RefCell<Watchers>>);

impl ViewportObserver<El> for FakeObserver {
    fn on_enter(&self, target: &El, start: ScrollStart, callback: Box<dyn FnMut()>) {
        self.0.borrow_mut().enters.push((*target, start, callback));
    }

    fn on_scroll(&self, start: ScrollStart, callback: Box<dyn FnMut(f32)>) {
        self.0.borrow_mut().scrolls.push((start, callback));
    }
}

pub struct Fake;

impl Backend for Fake {
    type Element = El;
    type Host = FakeHost;
    type Tweener = FakeTweener;
    type Observer = FakeObserver;
}

pub struct Harness {
    pub page: Rc<RefCell<Page>>,
    pub log: Rc<RefCell<TweenLog>>,
    pub watchers: Rc<RefCell<Watchers>>,
    pub engine: AnimationEngine<Fake>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let page = Rc::new(RefCell::new(Page {
            viewport: Vec2::new(1280.0, 800.0),
            ..Page::default()
        }));
        let log = Rc::new(RefCell::new(TweenLog::default()));
        let watchers = Rc::new(RefCell::new(Watchers::default()));
        let engine = AnimationEngine::new(
            FakeHost(page.clone()),
            FakeTweener(log.clone()),
            FakeObserver(watchers.clone()),
            config,
        );
        Self {
            page,
            log,
            watchers,
            engine,
        }
    }

    // ---------------- page building ----------------

    pub fn add(&self, selector: &str, rect: Rect) -> El {
        let mut page = self.page.borrow_mut();
        let el = page.new_node(rect);
        page.selectors.entry(selector.to_string()).or_default().push(el);
        el
    }

    /// Register an existing element under another selector too.
    pub fn also_matches(&self, el: El, selector: &str) {
        self.page
            .borrow_mut()
            .selectors
            .entry(selector.to_string())
            .or_default()
            .push(el);
    }

    pub fn add_within(&self, parent: El, selector: &str) -> El {
        let mut page = self.page.borrow_mut();
        let rect = page.nodes[parent].rect;
        let el = page.new_node(rect);
        page.nodes[parent].children.push(el);
        page.within.insert((parent, selector.to_string()), el);
        el
    }

    pub fn set_attr(&self, el: El, name: &str, value: &str) {
        self.page.borrow_mut().nodes[el]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    pub fn start(&self) -> Option<InstallReport> {
        self.engine.start()
    }

    // ---------------- input ----------------

    pub fn fire(&self, el: El, kind: EventKind, sample: PointerSample) {
        let mut handlers = self
            .page
            .borrow_mut()
            .listeners
            .remove(&(el, kind))
            .unwrap_or_default();
        for handler in handlers.iter_mut() {
            handler(sample);
        }
        let mut page = self.page.borrow_mut();
        let slot = page.listeners.entry((el, kind)).or_default();
        handlers.append(slot);
        *slot = handlers;
    }

    pub fn hover(&self, el: El, kind: EventKind) {
        self.fire(el, kind, PointerSample::default());
    }

    /// Report `el` crossing its enter threshold.
    pub fn enter_viewport(&self, el: El) {
        let mut watchers = std::mem::take(&mut self.watchers.borrow_mut().enters);
        for (target, _, callback) in watchers.iter_mut() {
            if *target == el {
                callback();
            }
        }
        let mut current = self.watchers.borrow_mut();
        watchers.append(&mut current.enters);
        current.enters = watchers;
    }

    pub fn scroll_to(&self, offset: f32) {
        let mut scrolls = std::mem::take(&mut self.watchers.borrow_mut().scrolls);
        for (_, callback) in scrolls.iter_mut() {
            callback(offset);
        }
        let mut current = self.watchers.borrow_mut();
        scrolls.append(&mut current.scrolls);
        current.scrolls = scrolls;
    }

    // ---------------- inspection ----------------

    pub fn listener_count(&self, el: El) -> usize {
        self.page
            .borrow()
            .listeners
            .iter()
            .filter(|((target, _), _)| *target == el)
            .map(|(_, hs)| hs.len())
            .sum()
    }

    pub fn total_listeners(&self) -> usize {
        self.page.borrow().listeners.values().map(Vec::len).sum()
    }

    pub fn listens_for(&self, el: El, kind: EventKind) -> bool {
        self.page
            .borrow()
            .listeners
            .get(&(el, kind))
            .is_some_and(|hs| !hs.is_empty())
    }

    pub fn enter_watchers(&self, el: El) -> Vec<ScrollStart> {
        self.watchers
            .borrow()
            .enters
            .iter()
            .filter(|(target, _, _)| *target == el)
            .map(|(_, start, _)| *start)
            .collect()
    }

    pub fn scroll_watchers(&self) -> Vec<ScrollStart> {
        self.watchers.borrow().scrolls.iter().map(|(s, _)| *s).collect()
    }

    pub fn request_count(&self) -> usize {
        self.log.borrow().requests.len()
    }

    /// Tweens issued to `el`, in order.
    pub fn tweens_for(&self, el: El) -> Vec<Tween> {
        self.log
            .borrow()
            .requests
            .iter()
            .filter_map(|r| match r {
                Request::To(target, tween) if *target == el => Some(tween.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_tween(&self, el: El) -> Option<Tween> {
        self.tweens_for(el).pop()
    }

    pub fn sets_for(&self, el: El) -> Vec<PropMap> {
        self.log
            .borrow()
            .requests
            .iter()
            .filter_map(|r| match r {
                Request::Set(target, props) if *target == el => Some(props.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn timelines(&self) -> Vec<Timeline<El>> {
        self.log
            .borrow()
            .requests
            .iter()
            .filter_map(|r| match r {
                Request::Play(tl) => Some(tl.clone()),
                _ => None,
            })
            .collect()
    }

    /// The tween currently driving `prop` on `el`, if any.
    pub fn active(&self, el: El, prop: Prop) -> Option<Tween> {
        self.log.borrow().active.get(&(el, prop)).cloned()
    }

    /// Index of the first request touching `el`.
    pub fn first_request_index(&self, el: El) -> Option<usize> {
        self.log.borrow().requests.iter().position(|r| match r {
            Request::To(t, _) | Request::Set(t, _) => *t == el,
            Request::Play(tl) => tl.steps().iter().any(|s| s.targets.contains(&el)),
        })
    }

    pub fn overlays_created(&self) -> usize {
        self.page.borrow().overlays_created
    }

    pub fn children(&self, el: El) -> Vec<El> {
        self.page.borrow().nodes[el].children.clone()
    }

    pub fn has_class(&self, el: El, class_name: &str) -> bool {
        self.page.borrow().nodes[el].classes.iter().any(|c| c == class_name)
    }
}

pub fn rect(left: f32, top: f32, width: f32, height: f32) -> Rect {
    Rect::new(left, top, width, height)
}

pub fn at(x: f32, y: f32) -> PointerSample {
    PointerSample::new(x, y)
}
