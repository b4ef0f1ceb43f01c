use crate::element::{find_element_mut, Element};

/// Outcome of dispatching an event to an element's handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The handler ran and suppressed default handling.
    Consumed,
    /// No handler ran (missing element or no handler attached).
    Ignored,
}

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer entered the target element
    HoverEnter { target: String },
    /// Pointer left the target element
    HoverLeave { target: String },
}

/// Dispatch an event to its target element's handler.
pub fn dispatch(root: &mut Element, event: &Event) -> EventResult {
    let (target, entering) = match event {
        Event::HoverEnter { target } => (target, true),
        Event::HoverLeave { target } => (target, false),
    };

    let Some(element) = find_element_mut(root, target) else {
        return EventResult::Ignored;
    };

    // Clone the handle first so the closure can take the element mutably.
    let handler = if entering {
        element.on_hover_enter.clone()
    } else {
        element.on_hover_leave.clone()
    };

    match handler {
        Some(handler) => handler(element),
        None => EventResult::Ignored,
    }
}

/// Tracks which element the pointer is currently over and turns position
/// updates into enter/leave events. A host drives this from its pointer
/// input; each update is independent, so handlers need no synchronization.
#[derive(Debug, Default)]
pub struct HoverState {
    hovered: Option<String>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently hovered element ID.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Report which element the pointer is over now (`None` for nothing).
    /// Returns the leave/enter events the change produces, oldest first.
    pub fn update(&mut self, target: Option<&str>) -> Vec<Event> {
        if self.hovered.as_deref() == target {
            return Vec::new();
        }

        let mut events = Vec::new();
        if let Some(old) = self.hovered.take() {
            events.push(Event::HoverLeave { target: old });
        }
        if let Some(new) = target {
            self.hovered = Some(new.to_string());
            events.push(Event::HoverEnter {
                target: new.to_string(),
            });
        }
        events
    }
}
