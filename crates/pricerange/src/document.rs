//! # Document
//!
//! Retained element tree the slider is mounted into. Elements carry a
//! role, attributes, classes, inline style, text and a field value; the
//! hierarchy and layout rects live in a [`WidgetTree`], which also gives
//! hit testing and the bubbling path of change events.
//!
//! ```text
//! Container [data-price-range-filter]
//! ├── SliderMount
//! │   └── Track            (built by mount)
//! │       ├── ActiveRange
//! │       ├── Handle(Min)
//! │       └── Handle(Max)  (topmost)
//! ├── FromValue / ToValue  (label regions)
//! └── Field name=min_price / Field name=max_price
//! ```

use std::collections::{BTreeMap, HashMap};

use pricerange_ui::{
    HandleSide, InputState, Rect, RenderCommand, UIRenderer, Widget, WidgetId, WidgetState,
    WidgetTree,
};
use tracing::warn;

use crate::error::{DocumentError, DocumentResult};
use crate::events::{ChangeBus, ChangeReceiver, ChangeSender, Delivery, RangeChangeEvent};
use crate::mount::{SliderId, SliderInstance};

/// Element identifier; elements are nodes of the document's widget tree.
pub type ElementId = WidgetId;

/// Attribute marking a container for [`Document::mount_all`].
pub const FILTER_ATTRIBUTE: &str = "data-price-range-filter";

/// What an element is to the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Host container; change events are dispatched on it.
    Container,
    /// Element the track is built into.
    SliderMount,
    /// Region showing the lower value.
    FromValue,
    /// Region showing the upper value.
    ToValue,
    /// Form field receiving a value.
    Field,
    /// Slider track. Built by the slider.
    Track,
    /// Highlight between the handles. Built by the slider.
    ActiveRange,
    /// Draggable handle. Built by the slider.
    Handle(HandleSide),
    /// Anything else.
    Generic,
}

impl Role {
    /// Lowercase role name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::SliderMount => "slider-mount",
            Self::FromValue => "from-value",
            Self::ToValue => "to-value",
            Self::Field => "field",
            Self::Track => "track",
            Self::ActiveRange => "active-range",
            Self::Handle(_) => "handle",
            Self::Generic => "generic",
        }
    }

    /// Returns true for parts only the slider creates.
    #[must_use]
    pub const fn is_slider_part(self) -> bool {
        matches!(self, Self::Track | Self::ActiveRange | Self::Handle(_))
    }
}

/// One node of the document.
#[derive(Debug, Clone)]
pub struct Element {
    role: Role,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    text: String,
    value: String,
    /// Slider that built this element.
    owner: Option<SliderId>,
}

impl Element {
    /// Creates an element with the given role.
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            role,
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            style: BTreeMap::new(),
            text: String::new(),
            value: String::new(),
            owner: None,
        }
    }

    /// Creates a container marked for [`Document::mount_all`].
    #[must_use]
    pub fn filter_container() -> Self {
        Self::new(Role::Container).with_attr(FILTER_ATTRIBUTE, "")
    }

    /// Creates a named form field.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self::new(Role::Field).with_attr("name", name)
    }

    /// Sets an attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Adds a class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub(crate) fn owned_by(mut self, slider: SliderId) -> Self {
        self.owner = Some(slider);
        self
    }

    /// Element role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// All attributes.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// One attribute.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// The `name` attribute.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.attr("name")
    }

    /// Returns true if the class is set.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Classes in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// One inline style property.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// Text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Field value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Slider that built this element, if any.
    #[must_use]
    pub fn owner(&self) -> Option<SliderId> {
        self.owner
    }

    pub(crate) fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub(crate) fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub(crate) fn set_style(&mut self, property: &str, value: String) {
        self.style.insert(property.to_string(), value);
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn set_value_text(&mut self, value: String) {
        self.value = value;
    }
}

/// The element tree plus everything mounted into it.
#[derive(Debug, Default)]
pub struct Document {
    pub(crate) tree: WidgetTree,
    pub(crate) elements: HashMap<ElementId, Element>,
    /// Change listeners per element.
    pub(crate) listeners: HashMap<ElementId, Vec<ChangeSender>>,
    pub(crate) sliders: BTreeMap<SliderId, SliderInstance>,
    /// Sliders holding document-level move/up listeners, in registration
    /// order.
    pub(crate) pointer_listeners: Vec<SliderId>,
    pub(crate) next_slider: u64,
    pub(crate) input: InputState,
    /// Element hit by the last press, for click synthesis.
    pub(crate) press_target: Option<ElementId>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element under `parent`, or as a root when `parent` is
    /// `None`. Later siblings paint, and hit-test, above earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::ElementNotFound`] for an unknown parent and
    /// [`DocumentError::ReservedRole`] for track parts, which only a slider
    /// builds.
    pub fn append(
        &mut self,
        parent: Option<ElementId>,
        element: Element,
        rect: Rect,
    ) -> DocumentResult<ElementId> {
        if element.role.is_slider_part() {
            return Err(DocumentError::ReservedRole {
                role: element.role.name(),
            });
        }
        self.insert(parent, element, rect)
    }

    pub(crate) fn insert(
        &mut self,
        parent: Option<ElementId>,
        element: Element,
        rect: Rect,
    ) -> DocumentResult<ElementId> {
        if let Some(parent) = parent {
            self.check(parent)?;
        }

        let id = self.tree.next_id();
        let state = WidgetState::with_rect(id, rect);
        match parent {
            Some(parent) => self.tree.add_child(parent, state),
            None => self.tree.add_root(state),
        }
        self.elements.insert(id, element);
        Ok(id)
    }

    /// Removes an element and everything below it.
    pub(crate) fn remove_subtree(&mut self, id: ElementId) {
        let doomed: Vec<_> = self.tree.descendants(id).collect();
        for element in &doomed {
            self.elements.remove(element);
            self.listeners.remove(element);
        }
        self.tree.remove(id);
    }

    pub(crate) fn check(&self, id: ElementId) -> DocumentResult<()> {
        if self.elements.contains_key(&id) {
            Ok(())
        } else {
            Err(DocumentError::ElementNotFound(id))
        }
    }

    /// Returns an element.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub(crate) fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    /// Returns an element's layout rect.
    #[must_use]
    pub fn rect(&self, id: ElementId) -> Option<Rect> {
        self.tree.get(id).map(|state| state.rect)
    }

    pub(crate) fn set_rect(&mut self, id: ElementId, rect: Rect) {
        if let Some(state) = self.tree.get_mut(id) {
            state.rect = rect;
        }
    }

    /// Returns an element's children in paint order.
    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.tree.children(id)
    }

    /// Returns the parent of an element.
    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.tree.parent(id)
    }

    /// Returns the first element at or below `root` (depth first) matching
    /// the predicate.
    pub fn find(&self, root: ElementId, predicate: impl Fn(&Element) -> bool) -> Option<ElementId> {
        self.tree
            .descendants(root)
            .find(|id| self.elements.get(id).is_some_and(&predicate))
    }

    /// Returns the first element with the given role at or below `root`.
    #[must_use]
    pub fn find_role(&self, root: ElementId, role: Role) -> Option<ElementId> {
        self.find(root, |element| element.role == role)
    }

    /// Returns every element carrying an attribute, in document order.
    #[must_use]
    pub fn query_attr(&self, key: &str) -> Vec<ElementId> {
        self.tree
            .iter_dfs()
            .filter(|id| self.elements.get(id).is_some_and(|e| e.attr(key).is_some()))
            .collect()
    }

    /// Returns the topmost element containing the point.
    #[must_use]
    pub fn hit_test(&self, x: f32, y: f32) -> Option<ElementId> {
        self.tree.hit_test(x, y)
    }

    /// Subscribes to change events reaching `element`, either dispatched
    /// on it or bubbling up from below.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::ElementNotFound`] for an unknown element.
    pub fn add_listener(
        &mut self,
        element: ElementId,
        capacity: usize,
    ) -> DocumentResult<ChangeReceiver> {
        self.check(element)?;
        let (sender, receiver) = ChangeBus::create_pair(capacity);
        self.listeners.entry(element).or_default().push(sender);
        Ok(receiver)
    }

    /// Dispatches a change event on `target` and bubbles it to the root.
    ///
    /// Returns the number of listeners that received it. Listeners whose
    /// receiver is gone are unsubscribed.
    pub(crate) fn dispatch_change(&mut self, target: ElementId, event: RangeChangeEvent) -> usize {
        let path: Vec<_> = self.tree.ancestors(target).collect();
        let mut delivered = 0;

        for current in path {
            let Some(senders) = self.listeners.get_mut(&current) else {
                continue;
            };

            senders.retain(|sender| {
                let copy = RangeChangeEvent {
                    current_target: current,
                    ..event
                };
                match sender.send(copy) {
                    Delivery::Delivered => {
                        delivered += 1;
                        true
                    }
                    Delivery::Full => {
                        warn!(element = current.raw(), "change listener full, event dropped");
                        true
                    }
                    Delivery::Disconnected => false,
                }
            });
        }

        delivered
    }

    /// Emits render commands for every mounted slider and label region.
    pub fn render(&self, renderer: &mut UIRenderer) {
        let mut commands = Vec::with_capacity(16);
        for instance in self.sliders.values() {
            instance.slider.render(&mut commands);
        }
        renderer.extend(commands);

        for id in self.tree.iter_dfs() {
            let Some(element) = self.elements.get(&id) else {
                continue;
            };
            if element.text.is_empty() {
                continue;
            }
            let (Some(rect), Some(instance)) = (self.rect(id), self.labelled_by(id)) else {
                continue;
            };
            let style = instance.slider.style();
            renderer.push(RenderCommand::Text {
                text: element.text.clone(),
                x: rect.x,
                y: rect.y,
                color: style.value_text,
                font_size: style.font_size,
            });
        }
    }

    /// Renders a new frame only if a slider changed since the last one.
    ///
    /// Returns true if a frame was emitted. Every slider starts dirty, so
    /// the first call always renders.
    pub fn render_changed(&mut self, renderer: &mut UIRenderer) -> bool {
        let mut dirty = false;
        for instance in self.sliders.values_mut() {
            dirty |= instance.slider.state_mut().take_dirty();
        }
        if dirty {
            renderer.begin_frame();
            self.render(renderer);
        }
        dirty
    }

    fn labelled_by(&self, label: ElementId) -> Option<&SliderInstance> {
        self.sliders
            .values()
            .find(|instance| instance.from_value == Some(label) || instance.to_value == Some(label))
    }
}
