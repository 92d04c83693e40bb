//! # Mounting
//!
//! Attaches [`RangeSlider`]s to containers of a [`Document`], keeps the
//! markup in sync with slider state, and tears sliders down again.
//!
//! Sync after every state change writes:
//! - `left` of each handle and `left`/`width` of the active range, in percent
//! - the `active` class on the dragged handle
//! - the from/to label text (when labels are shown)
//! - the value of both bound fields

use pricerange_ui::{HandleSide, RangeSlider, RangeValues, Rect, SliderConfig, WidgetId};
use tracing::{debug, info, warn};

use crate::document::{Document, Element, ElementId, Role, FILTER_ATTRIBUTE};
use crate::error::{DocumentError, DocumentResult};

/// Field name bound to the lower value when none is configured.
pub const DEFAULT_MIN_FIELD: &str = "min_price";
/// Field name bound to the upper value when none is configured.
pub const DEFAULT_MAX_FIELD: &str = "max_price";

/// Class names used by the markup contract.
pub mod class {
    /// Mount point for the track.
    pub const MOUNT: &str = "price-range-slider-container";
    /// Region showing the lower value.
    pub const FROM_VALUE: &str = "price-range-from-value";
    /// Region showing the upper value.
    pub const TO_VALUE: &str = "price-range-to-value";
    /// Built track.
    pub const TRACK: &str = "price-range-track";
    /// Built active range.
    pub const ACTIVE_RANGE: &str = "price-range-active";
    /// Built handles.
    pub const HANDLE: &str = "price-range-handle";
    /// Built min handle.
    pub const HANDLE_MIN: &str = "price-range-handle-min";
    /// Built max handle.
    pub const HANDLE_MAX: &str = "price-range-handle-max";
    /// Handle being dragged.
    pub const ACTIVE: &str = "active";
}

/// Identifier of a mounted slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SliderId(u64);

impl SliderId {
    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Elements built for a slider with a mount point.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TrackParts {
    pub(crate) track: ElementId,
    pub(crate) active_range: ElementId,
    pub(crate) min_handle: ElementId,
    pub(crate) max_handle: ElementId,
}

impl TrackParts {
    fn handle(&self, side: HandleSide) -> ElementId {
        match side {
            HandleSide::Min => self.min_handle,
            HandleSide::Max => self.max_handle,
        }
    }
}

/// A slider mounted into a container.
#[derive(Debug)]
pub struct SliderInstance {
    pub(crate) slider: RangeSlider,
    pub(crate) container: ElementId,
    pub(crate) parts: Option<TrackParts>,
    pub(crate) from_value: Option<ElementId>,
    pub(crate) to_value: Option<ElementId>,
    pub(crate) min_field: Option<ElementId>,
    pub(crate) max_field: Option<ElementId>,
}

impl SliderInstance {
    /// The slider widget.
    #[must_use]
    pub fn slider(&self) -> &RangeSlider {
        &self.slider
    }

    /// Container change events are dispatched on.
    #[must_use]
    pub fn container(&self) -> ElementId {
        self.container
    }

    /// The built track, if the container had a mount point.
    #[must_use]
    pub fn track(&self) -> Option<ElementId> {
        self.parts.map(|parts| parts.track)
    }

    /// The built handle for one side.
    #[must_use]
    pub fn handle(&self, side: HandleSide) -> Option<ElementId> {
        self.parts.map(|parts| parts.handle(side))
    }

    /// The built active range.
    #[must_use]
    pub fn active_range(&self) -> Option<ElementId> {
        self.parts.map(|parts| parts.active_range)
    }

    /// Field receiving one side's value.
    #[must_use]
    pub fn field(&self, side: HandleSide) -> Option<ElementId> {
        match side {
            HandleSide::Min => self.min_field,
            HandleSide::Max => self.max_field,
        }
    }
}

impl Document {
    /// Mounts a slider into `container`.
    ///
    /// The track is built into the container's mount point: the container
    /// itself when it is one, else its first descendant that is. Without a
    /// mount point the slider still mounts, with no track and no pointer
    /// handling; labels, fields and the programmatic API keep working.
    ///
    /// Mounting twice into the same container builds a second track; that
    /// is the caller's mistake to avoid.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::ElementNotFound`] for an unknown container.
    pub fn mount(&mut self, container: ElementId, config: SliderConfig) -> DocumentResult<SliderId> {
        self.check(container)?;

        let id = SliderId(self.next_slider);
        self.next_slider += 1;

        let min_name = config.min_field_name.clone();
        let max_name = config.max_field_name.clone();
        let mut slider = RangeSlider::new(WidgetId::new(id.0), config);

        let parts = match self.find_mount(container) {
            Some(mount) => Some(self.build_track(id, mount, &mut slider)?),
            None => {
                warn!(
                    container = container.raw(),
                    "slider mount point not found, mounting without a track"
                );
                None
            }
        };

        let instance = SliderInstance {
            slider,
            container,
            parts,
            from_value: self.find(container, |e| {
                e.role() == Role::FromValue || e.has_class(class::FROM_VALUE)
            }),
            to_value: self.find(container, |e| {
                e.role() == Role::ToValue || e.has_class(class::TO_VALUE)
            }),
            min_field: self.find_field(container, min_name.as_deref(), DEFAULT_MIN_FIELD, "min"),
            max_field: self.find_field(container, max_name.as_deref(), DEFAULT_MAX_FIELD, "max"),
        };

        if parts.is_some() {
            self.pointer_listeners.push(id);
        }
        self.sliders.insert(id, instance);
        self.sync(id);

        let values = self.values(id)?;
        info!(
            slider = id.raw(),
            container = container.raw(),
            min = values.min,
            max = values.max,
            has_track = parts.is_some(),
            "price range slider mounted"
        );
        Ok(id)
    }

    /// Mounts a slider configured from the container's `data-*`
    /// attributes.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::ElementNotFound`] for an unknown container.
    pub fn mount_from_attributes(&mut self, container: ElementId) -> DocumentResult<SliderId> {
        let config = self
            .element(container)
            .map(|element| SliderConfig::from_attributes(element.attributes()))
            .ok_or(DocumentError::ElementNotFound(container))?;
        self.mount(container, config)
    }

    /// Mounts a slider on every element carrying `data-price-range-filter`.
    ///
    /// # Errors
    ///
    /// Propagates the first mount failure.
    pub fn mount_all(&mut self) -> DocumentResult<Vec<SliderId>> {
        let containers = self.query_attr(FILTER_ATTRIBUTE);
        let mut mounted = Vec::with_capacity(containers.len());
        for container in containers {
            mounted.push(self.mount_from_attributes(container)?);
        }
        info!(count = mounted.len(), "price range filters initialized");
        Ok(mounted)
    }

    /// Unmounts a slider: drops its document-level pointer listeners and
    /// removes the built track. Labels and fields keep their last values.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::SliderNotFound`] if the slider is not
    /// mounted.
    pub fn destroy(&mut self, id: SliderId) -> DocumentResult<()> {
        let instance = self.sliders.remove(&id).ok_or(DocumentError::SliderNotFound(id))?;

        self.pointer_listeners.retain(|&listener| listener != id);
        if let Some(parts) = instance.parts {
            self.remove_subtree(parts.track);
        }

        info!(slider = id.raw(), container = instance.container.raw(), "price range slider destroyed");
        Ok(())
    }

    /// Returns a mounted slider.
    #[must_use]
    pub fn slider(&self, id: SliderId) -> Option<&SliderInstance> {
        self.sliders.get(&id)
    }

    /// Returns every mounted slider id, oldest first.
    #[must_use]
    pub fn slider_ids(&self) -> Vec<SliderId> {
        self.sliders.keys().copied().collect()
    }

    /// Returns the slider mounted on `container`, if any.
    #[must_use]
    pub fn slider_for(&self, container: ElementId) -> Option<SliderId> {
        self.sliders
            .iter()
            .find(|(_, instance)| instance.container == container)
            .map(|(&id, _)| id)
    }

    /// Current selection of a slider.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::SliderNotFound`] if the slider is not
    /// mounted.
    pub fn values(&self, id: SliderId) -> DocumentResult<RangeValues> {
        self.sliders
            .get(&id)
            .map(|instance| instance.slider.values())
            .ok_or(DocumentError::SliderNotFound(id))
    }

    /// Replaces a slider's selection. Clamped, re-synced, never notifies.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::SliderNotFound`] if the slider is not
    /// mounted.
    pub fn set_values(&mut self, id: SliderId, min: f64, max: f64) -> DocumentResult<RangeValues> {
        self.update(id, |slider| slider.set_values(min, max))
    }

    /// Sets a slider's lower value. Clamped, re-synced, never notifies.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::SliderNotFound`] if the slider is not
    /// mounted.
    pub fn set_min_value(&mut self, id: SliderId, value: f64) -> DocumentResult<RangeValues> {
        self.update(id, |slider| slider.set_min_value(value))
    }

    /// Sets a slider's upper value. Clamped, re-synced, never notifies.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::SliderNotFound`] if the slider is not
    /// mounted.
    pub fn set_max_value(&mut self, id: SliderId, value: f64) -> DocumentResult<RangeValues> {
        self.update(id, |slider| slider.set_max_value(value))
    }

    /// Applies text typed into a bound field.
    ///
    /// A number moves that side (clamped like [`Document::set_min_value`]);
    /// anything else is rejected. Either way the field is rewritten with
    /// the slider's value afterwards. Never notifies.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnboundField`] if no slider writes to
    /// `field`.
    pub fn edit_field(&mut self, field: ElementId, text: &str) -> DocumentResult<RangeValues> {
        let (id, side) = self
            .sliders
            .iter()
            .find_map(|(&id, instance)| {
                if instance.min_field == Some(field) {
                    Some((id, HandleSide::Min))
                } else if instance.max_field == Some(field) {
                    Some((id, HandleSide::Max))
                } else {
                    None
                }
            })
            .ok_or(DocumentError::UnboundField(field))?;

        match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => match side {
                HandleSide::Min => self.set_min_value(id, value),
                HandleSide::Max => self.set_max_value(id, value),
            },
            _ => {
                debug!(slider = id.raw(), field = field.raw(), text, "rejected field input");
                self.sync(id);
                self.values(id)
            }
        }
    }

    fn update(
        &mut self,
        id: SliderId,
        apply: impl FnOnce(&mut RangeSlider) -> bool,
    ) -> DocumentResult<RangeValues> {
        let instance = self.sliders.get_mut(&id).ok_or(DocumentError::SliderNotFound(id))?;
        apply(&mut instance.slider);
        let values = instance.slider.values();
        self.sync(id);
        Ok(values)
    }

    /// Writes slider state into the markup.
    pub(crate) fn sync(&mut self, id: SliderId) {
        let Some(instance) = self.sliders.get(&id) else {
            return;
        };
        let view = instance.slider.view();
        let show_labels = instance.slider.config().show_labels;
        let parts = instance.parts;
        let handle_rects = [
            instance.slider.handle(HandleSide::Min).rect(),
            instance.slider.handle(HandleSide::Max).rect(),
        ];
        let labels = [
            (instance.from_value, view.from_text.clone()),
            (instance.to_value, view.to_text.clone()),
        ];
        let fields = [
            (instance.min_field, view.from_text.clone()),
            (instance.max_field, view.to_text.clone()),
        ];

        if let Some(parts) = parts {
            let handles = [
                (parts.min_handle, view.min_percent, view.min_active, handle_rects[0]),
                (parts.max_handle, view.max_percent, view.max_active, handle_rects[1]),
            ];
            for (handle, percent, active, rect) in handles {
                if let Some(element) = self.element_mut(handle) {
                    element.set_style("left", format!("{percent}%"));
                    if active {
                        element.add_class(class::ACTIVE);
                    } else {
                        element.remove_class(class::ACTIVE);
                    }
                }
                self.set_rect(handle, rect);
            }

            let track = self.rect(parts.track).unwrap_or_default();
            if let Some(element) = self.element_mut(parts.active_range) {
                element.set_style("left", format!("{}%", view.active_left));
                element.set_style("width", format!("{}%", view.active_width));
            }
            self.set_rect(parts.active_range, active_rect(track, view.active_left, view.active_width));
        }

        if show_labels {
            for (label, text) in labels {
                if let Some(element) = label.and_then(|label| self.element_mut(label)) {
                    element.set_text(text);
                }
            }
        }

        for (field, value) in fields {
            if let Some(element) = field.and_then(|field| self.element_mut(field)) {
                element.set_value_text(value);
            }
        }
    }

    fn find_mount(&self, container: ElementId) -> Option<ElementId> {
        self.find(container, |e| {
            e.role() == Role::SliderMount || e.has_class(class::MOUNT)
        })
    }

    /// Finds a bound field: the configured (or default) name exactly, else
    /// the first field whose name contains `fragment`.
    fn find_field(
        &self,
        container: ElementId,
        configured: Option<&str>,
        default: &str,
        fragment: &str,
    ) -> Option<ElementId> {
        let wanted = configured.unwrap_or(default);
        self.find(container, |e| e.role() == Role::Field && e.name() == Some(wanted))
            .or_else(|| {
                self.find(container, |e| {
                    e.role() == Role::Field && e.name().is_some_and(|name| name.contains(fragment))
                })
            })
    }

    /// Builds track, active range, min handle and max handle, in that
    /// order, into `mount`.
    fn build_track(
        &mut self,
        id: SliderId,
        mount: ElementId,
        slider: &mut RangeSlider,
    ) -> DocumentResult<TrackParts> {
        let area = self.rect(mount).ok_or(DocumentError::ElementNotFound(mount))?;
        let track_rect = slider.fit_track(area);

        let track = self.insert(
            Some(mount),
            Element::new(Role::Track).with_class(class::TRACK).owned_by(id),
            track_rect,
        )?;
        let active_range = self.insert(
            Some(track),
            Element::new(Role::ActiveRange).with_class(class::ACTIVE_RANGE).owned_by(id),
            track_rect,
        )?;

        let handle = |doc: &mut Self, side: HandleSide, extra: &str| {
            doc.insert(
                Some(track),
                Element::new(Role::Handle(side))
                    .with_class(class::HANDLE)
                    .with_class(extra)
                    .with_attr("data-handle", side.name())
                    .owned_by(id),
                slider.handle(side).rect(),
            )
        };
        let min_handle = handle(self, HandleSide::Min, class::HANDLE_MIN)?;
        let max_handle = handle(self, HandleSide::Max, class::HANDLE_MAX)?;

        Ok(TrackParts {
            track,
            active_range,
            min_handle,
            max_handle,
        })
    }
}

#[allow(clippy::cast_possible_truncation)]
fn active_rect(track: Rect, left: f64, width: f64) -> Rect {
    Rect::new(
        track.x + (left / 100.0) as f32 * track.width,
        track.y,
        (width / 100.0) as f32 * track.width,
        track.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> (Document, ElementId, ElementId, ElementId) {
        let mut doc = Document::new();
        let container = doc
            .append(
                None,
                Element::filter_container().with_attr("data-max", "1000"),
                Rect::new(0.0, 0.0, 420.0, 140.0),
            )
            .unwrap();
        doc.append(
            Some(container),
            Element::new(Role::SliderMount),
            Rect::new(0.0, 60.0, 420.0, 40.0),
        )
        .unwrap();
        let min_field = doc.append(Some(container), Element::field("min_price"), Rect::ZERO).unwrap();
        let max_field = doc.append(Some(container), Element::field("max_price"), Rect::ZERO).unwrap();
        (doc, container, min_field, max_field)
    }

    #[test]
    fn test_mount_builds_track_in_order() {
        let (mut doc, container, _, _) = form();
        let id = doc.mount_from_attributes(container).unwrap();
        let instance = doc.slider(id).unwrap();

        let track = instance.track().unwrap();
        assert_eq!(
            doc.children(track),
            &[
                instance.active_range().unwrap(),
                instance.handle(HandleSide::Min).unwrap(),
                instance.handle(HandleSide::Max).unwrap(),
            ]
        );
        assert!(doc.element(track).unwrap().has_class(class::TRACK));
        assert_eq!(
            doc.element(instance.handle(HandleSide::Max).unwrap()).unwrap().attr("data-handle"),
            Some("max")
        );
        assert_eq!(doc.pointer_listeners, vec![id]);
    }

    #[test]
    fn test_mount_writes_fields() {
        let (mut doc, container, min_field, max_field) = form();
        doc.mount_from_attributes(container).unwrap();

        assert_eq!(doc.element(min_field).unwrap().value(), "0");
        assert_eq!(doc.element(max_field).unwrap().value(), "1000");
    }

    #[test]
    fn test_container_as_mount_point() {
        let mut doc = Document::new();
        let container = doc
            .append(
                None,
                Element::new(Role::SliderMount).with_attr(FILTER_ATTRIBUTE, ""),
                Rect::new(0.0, 0.0, 300.0, 30.0),
            )
            .unwrap();

        let id = doc.mount_from_attributes(container).unwrap();
        let track = doc.slider(id).unwrap().track().unwrap();
        assert_eq!(doc.parent(track), Some(container));
    }

    #[test]
    fn test_field_name_fallback() {
        let mut doc = Document::new();
        let container = doc.append(None, Element::filter_container(), Rect::ZERO).unwrap();
        let from = doc.append(Some(container), Element::field("price_min_eur"), Rect::ZERO).unwrap();
        let to = doc.append(Some(container), Element::field("price_max_eur"), Rect::ZERO).unwrap();

        let id = doc.mount(container, SliderConfig::default()).unwrap();
        let instance = doc.slider(id).unwrap();

        assert_eq!(instance.field(HandleSide::Min), Some(from));
        assert_eq!(instance.field(HandleSide::Max), Some(to));
    }

    #[test]
    fn test_configured_field_names() {
        let mut doc = Document::new();
        let container = doc.append(None, Element::filter_container(), Rect::ZERO).unwrap();
        doc.append(Some(container), Element::field("min_price"), Rect::ZERO).unwrap();
        let from = doc.append(Some(container), Element::field("lo"), Rect::ZERO).unwrap();

        let config = SliderConfig::default().with_field_names("lo", "hi");
        let id = doc.mount(container, config).unwrap();

        assert_eq!(doc.slider(id).unwrap().field(HandleSide::Min), Some(from));
    }

    #[test]
    fn test_edit_field() {
        let (mut doc, container, min_field, max_field) = form();
        let id = doc.mount_from_attributes(container).unwrap();

        assert_eq!(doc.edit_field(min_field, " 250 ").unwrap(), RangeValues::new(250.0, 1000.0));
        assert_eq!(doc.edit_field(max_field, "100").unwrap(), RangeValues::new(250.0, 250.0));
        assert_eq!(doc.element(max_field).unwrap().value(), "250");

        assert_eq!(doc.edit_field(min_field, "cheap").unwrap(), RangeValues::new(250.0, 250.0));
        assert_eq!(doc.element(min_field).unwrap().value(), "250");

        assert_eq!(doc.values(id).unwrap(), RangeValues::new(250.0, 250.0));
        assert_eq!(doc.edit_field(container, "1"), Err(DocumentError::UnboundField(container)));
    }

    #[test]
    fn test_sync_styles() {
        let (mut doc, container, _, _) = form();
        let id = doc.mount_from_attributes(container).unwrap();
        doc.set_values(id, 250.0, 750.0).unwrap();

        let instance = doc.slider(id).unwrap();
        let min_handle = doc.element(instance.handle(HandleSide::Min).unwrap()).unwrap();
        let active = doc.element(instance.active_range().unwrap()).unwrap();

        assert_eq!(min_handle.style("left"), Some("25%"));
        assert_eq!(active.style("left"), Some("25%"));
        assert_eq!(active.style("width"), Some("50%"));
    }

    #[test]
    fn test_destroy() {
        let (mut doc, container, _, _) = form();
        let id = doc.mount_from_attributes(container).unwrap();
        let track = doc.slider(id).unwrap().track().unwrap();

        doc.destroy(id).unwrap();

        assert!(doc.element(track).is_none());
        assert!(doc.pointer_listeners.is_empty());
        assert!(doc.slider(id).is_none());
        assert_eq!(doc.destroy(id), Err(DocumentError::SliderNotFound(id)));
    }
}
