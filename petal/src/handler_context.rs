//! Event handlers and their registry.
//!
//! This module provides:
//! - `Handler`: closure type for handlers
//! - `EventData` / `HandlerContext`: what a handler learns about the event
//! - `HandlerRegistry`: stores widget event handlers keyed by (element_id, event_type)
//!
//! Widgets register handlers while building their element tree. The host
//! dispatches user interaction by element id and rebuilds the tree afterwards.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Event name for clicks, Enter and Space on an element.
pub const ON_ACTIVATE: &str = "on_activate";

/// Event name for value edits (text typed, slider moved).
pub const ON_CHANGE: &str = "on_change";

// =============================================================================
// Handler Type
// =============================================================================

/// A handler closure that receives a HandlerContext.
///
/// The closure captures whatever widget state it needs at build time.
pub type Handler = Arc<dyn Fn(&HandlerContext) + Send + Sync>;

// =============================================================================
// Event Data
// =============================================================================

/// Event-specific data passed to handlers via HandlerContext.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EventData {
    /// No event data (plain activation).
    #[default]
    None,
    /// Text input value changed.
    Change {
        /// The new text value.
        text: String,
    },
    /// Numeric value changed (range slider).
    Value {
        /// The requested value, before clamping.
        value: f64,
    },
}

/// Context passed to every handler invocation.
#[derive(Debug, Clone, Default)]
pub struct HandlerContext {
    event: EventData,
}

impl HandlerContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event(event: EventData) -> Self {
        Self { event }
    }

    pub fn event(&self) -> &EventData {
        &self.event
    }

    /// Get the changed text from a Change event.
    pub fn changed_text(&self) -> Option<&str> {
        match &self.event {
            EventData::Change { text } => Some(text),
            _ => None,
        }
    }

    /// Get the requested value from a Value event.
    pub fn changed_value(&self) -> Option<f64> {
        match self.event {
            EventData::Value { value } => Some(value),
            _ => None,
        }
    }
}

// =============================================================================
// HandlerRegistry
// =============================================================================

/// Registry for widget event handlers.
///
/// Maps (element_id, event_type) to handler closures. Call `clear()` before
/// a rebuild so handlers from previous renders don't persist.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event.
    ///
    /// # Arguments
    /// - `element_id`: The element's unique ID (from Element.id)
    /// - `event`: The event type (e.g., "on_activate", "on_change")
    /// - `handler`: The handler closure
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Run the handler for an element event.
    ///
    /// Returns false when nothing is registered. The registry lock is released
    /// before the handler runs, so handlers may register or clear freely.
    pub fn dispatch(&self, element_id: &str, event: &str, hx: &HandlerContext) -> bool {
        match self.get(element_id, event) {
            Some(handler) => {
                log::debug!("dispatch {event} -> {element_id}");
                handler(hx);
                true
            }
            None => {
                log::trace!("no {event} handler for {element_id}");
                false
            }
        }
    }

    /// Dispatch a plain activation (click).
    pub fn activate(&self, element_id: &str) -> bool {
        self.dispatch(element_id, ON_ACTIVATE, &HandlerContext::new())
    }

    /// Dispatch a text change.
    pub fn change_text(&self, element_id: &str, text: impl Into<String>) -> bool {
        let hx = HandlerContext::with_event(EventData::Change { text: text.into() });
        self.dispatch(element_id, ON_CHANGE, &hx)
    }

    /// Dispatch a numeric change.
    pub fn change_value(&self, element_id: &str, value: f64) -> bool {
        let hx = HandlerContext::with_event(EventData::Value { value });
        self.dispatch(element_id, ON_CHANGE, &hx)
    }

    /// Clear all handlers.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers
            .read()
            .map(|h| h.is_empty())
            .unwrap_or(true)
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &count)
            .finish()
    }
}
