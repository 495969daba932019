//! In-memory presentation surface.
//!
//! The orchestrator's only observable effect is writing visual properties, layout rects and pin
//! state onto elements. [`Surface`] is the seam a real rendering target implements; [`Stage`] is
//! the headless implementation every section and test runs against.

use std::collections::BTreeMap;

use crate::{
    animation::property::{Property, VisualProps},
    foundation::core::{ElementId, Rect},
};

mod fingerprint;

pub use fingerprint::StageFingerprint;

/// Target of timeline property writes.
pub trait Surface {
    /// Assign `value` to `property` of `target`.
    ///
    /// Returns `false` when the target is not mounted; the write is dropped.
    fn apply(&mut self, target: ElementId, property: Property, value: f64) -> bool;
}

/// Layout mode of an element with respect to scroll pinning.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PinState {
    /// Normal document flow.
    #[default]
    Flow,
    /// Removed from flow and held at a fixed viewport offset.
    Pinned {
        /// Viewport-relative top edge while pinned.
        viewport_top: f64,
    },
    /// Back in flow, pushed down by the pinned scroll distance.
    Released {
        /// Extra document offset reserved by the pin.
        spacing: f64,
    },
}

/// One mounted visual element.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Element {
    /// Debug name, e.g. `"hero.title1"`.
    pub name: String,
    /// Animated properties.
    pub props: VisualProps,
    /// Laid-out rect in document coordinates (before pin offsets and transforms).
    pub layout: Rect,
    /// Pin layout state.
    pub pin: PinState,
    /// Removed from presentation entirely (e.g. a finished preloader).
    pub hidden: bool,
    /// Text content, for elements that carry copy.
    pub text: Option<String>,
    /// Containing element. Placement follows the parent's pin state.
    pub parent: Option<ElementId>,
}

/// Element arena keyed by [`ElementId`].
#[derive(Debug, Default)]
pub struct Stage {
    next_id: u32,
    elements: BTreeMap<ElementId, Element>,
    skipped_writes: u64,
}

impl Stage {
    /// Create an empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a new element at `layout` with rest-value properties.
    pub fn mount(&mut self, name: impl Into<String>, layout: Rect) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(
            id,
            Element {
                name: name.into(),
                props: VisualProps::default(),
                layout,
                pin: PinState::Flow,
                hidden: false,
                text: None,
                parent: None,
            },
        );
        id
    }

    /// Mount an element that carries text.
    pub fn mount_text(
        &mut self,
        name: impl Into<String>,
        layout: Rect,
        text: impl Into<String>,
    ) -> ElementId {
        let id = self.mount(name, layout);
        if let Some(el) = self.elements.get_mut(&id) {
            el.text = Some(text.into());
        }
        id
    }

    /// Remove an element. Later writes to `id` are skipped.
    pub fn unmount(&mut self, id: ElementId) -> Option<Element> {
        self.elements.remove(&id)
    }

    /// Return `true` while `id` is mounted.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Number of mounted elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Return `true` when nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Borrow an element.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Iterate elements in mount order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements.iter().map(|(id, el)| (*id, el))
    }

    /// Current animated properties of `id`.
    pub fn props(&self, id: ElementId) -> Option<VisualProps> {
        self.elements.get(&id).map(|el| el.props)
    }

    /// Read a single property.
    pub fn get(&self, id: ElementId, property: Property) -> Option<f64> {
        self.elements.get(&id).map(|el| el.props.get(property))
    }

    /// Document-space layout rect of `id`.
    pub fn layout(&self, id: ElementId) -> Option<Rect> {
        self.elements.get(&id).map(|el| el.layout)
    }

    /// Replace the layout rect of `id`.
    pub fn set_layout(&mut self, id: ElementId, layout: Rect) -> bool {
        match self.elements.get_mut(&id) {
            Some(el) => {
                el.layout = layout;
                true
            }
            None => false,
        }
    }

    /// Pin state of `id`.
    pub fn pin(&self, id: ElementId) -> Option<PinState> {
        self.elements.get(&id).map(|el| el.pin)
    }

    /// Replace the pin state of `id`.
    pub fn set_pin(&mut self, id: ElementId, pin: PinState) -> bool {
        match self.elements.get_mut(&id) {
            Some(el) => {
                el.pin = pin;
                true
            }
            None => false,
        }
    }

    /// Replace the text of `id`.
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) -> bool {
        match self.elements.get_mut(&id) {
            Some(el) => {
                el.text = Some(text.into());
                true
            }
            None => false,
        }
    }

    /// Text of `id`, if any.
    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.elements.get(&id).and_then(|el| el.text.as_deref())
    }

    /// Nest `child` inside `parent`, so it moves with the parent while the parent is pinned.
    ///
    /// Returns `false` when either element is missing or the link would form a cycle.
    pub fn set_parent(&mut self, child: ElementId, parent: ElementId) -> bool {
        if !self.elements.contains_key(&parent) || !self.elements.contains_key(&child) {
            return false;
        }
        if self.ancestors(parent).any(|a| a == child) {
            return false;
        }
        match self.elements.get_mut(&child) {
            Some(el) => {
                el.parent = Some(parent);
                true
            }
            None => false,
        }
    }

    /// Parent of `id`, if nested.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(&id).and_then(|el| el.parent)
    }

    /// `id` followed by its mounted ancestors, innermost first.
    fn ancestors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::successors(self.contains(id).then_some(id), |cur| {
            self.parent(*cur).filter(|p| self.contains(*p))
        })
        .take(self.elements.len())
    }

    /// Hide or show `id`.
    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) -> bool {
        match self.elements.get_mut(&id) {
            Some(el) => {
                el.hidden = hidden;
                true
            }
            None => false,
        }
    }

    /// Top edge of `id` relative to the viewport at document scroll offset `scroll_y`,
    /// accounting for pinning and the `y` transform.
    ///
    /// An element in flow is placed by its nearest pinned or released ancestor, keeping its
    /// layout offset from that ancestor.
    pub fn viewport_top(&self, id: ElementId, scroll_y: f64) -> Option<f64> {
        let el = self.elements.get(&id)?;
        let holder = self
            .ancestors(id)
            .filter_map(|a| self.elements.get(&a))
            .find(|a| a.pin != PinState::Flow);
        let base = match holder {
            None => el.layout.y0 - scroll_y,
            Some(h) => match h.pin {
                PinState::Flow => el.layout.y0 - scroll_y,
                PinState::Pinned { viewport_top } => viewport_top + (el.layout.y0 - h.layout.y0),
                PinState::Released { spacing } => el.layout.y0 + spacing - scroll_y,
            },
        };
        Some(base + el.props.y)
    }

    /// Number of property writes dropped because their target was gone.
    pub fn skipped_writes(&self) -> u64 {
        self.skipped_writes
    }

    /// Stable hash of all presentation state.
    pub fn fingerprint(&self) -> StageFingerprint {
        fingerprint::fingerprint_stage(self)
    }
}

impl Surface for Stage {
    fn apply(&mut self, target: ElementId, property: Property, value: f64) -> bool {
        match self.elements.get_mut(&target) {
            Some(el) => {
                el.props.set(property, value);
                true
            }
            None => {
                self.skipped_writes += 1;
                tracing::trace!(?target, ?property, "write to unmounted element skipped");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/stage.rs"]
mod tests;
