//! Event system for configuration changes
//!
//! Provides callbacks for pizzeria configuration modifications.

use std::collections::HashMap;

/// A change applied through the manager.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent {
    /// A pizzeria was created in the directory.
    PizzeriaCreated { pizzeria: String },
    /// A pizzeria's base price was overwritten.
    BasePriceUpdated { pizzeria: String, old: f64, new: f64 },
    /// An option set was renamed.
    OptionSetRenamed {
        pizzeria: String,
        old: String,
        new: String,
    },
    /// A single option's price was overwritten.
    OptionPriceUpdated {
        pizzeria: String,
        option_set: String,
        option: String,
        old: f64,
        new: f64,
    },
}

impl ChangeEvent {
    /// Name of the pizzeria the event belongs to.
    #[must_use]
    pub fn pizzeria(&self) -> &str {
        match self {
            ChangeEvent::PizzeriaCreated { pizzeria }
            | ChangeEvent::BasePriceUpdated { pizzeria, .. }
            | ChangeEvent::OptionSetRenamed { pizzeria, .. }
            | ChangeEvent::OptionPriceUpdated { pizzeria, .. } => pizzeria,
        }
    }
}

/// Type alias for a change callback
pub type ChangeCallback = Box<dyn Fn(&ChangeEvent)>;

/// Manages event listeners for configuration changes.
///
/// Registration takes `&mut self`; the manager is single-threaded, so no
/// lock guards the listener registry. Listeners observe the event value
/// only; they cannot reach back into the manager.
#[derive(Default)]
pub struct EventManager {
    /// Global listeners (called for all changes)
    global_listeners: Vec<ChangeCallback>,

    /// Per-pizzeria listeners (called only for changes to that pizzeria)
    pizzeria_listeners: HashMap<String, Vec<ChangeCallback>>,
}

impl EventManager {
    /// Create a new event manager
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a global change listener (called for all changes)
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: Fn(&ChangeEvent) + 'static,
    {
        self.global_listeners.push(Box::new(callback));
    }

    /// Register a listener for changes to a specific pizzeria
    pub fn watch<F>(&mut self, pizzeria: &str, callback: F)
    where
        F: Fn(&ChangeEvent) + 'static,
    {
        self.pizzeria_listeners
            .entry(pizzeria.to_string())
            .or_default()
            .push(Box::new(callback));
    }

    /// Notify all listeners about a change
    pub fn notify(&self, event: &ChangeEvent) {
        for callback in &self.global_listeners {
            callback(event);
        }

        if let Some(listeners) = self.pizzeria_listeners.get(event.pizzeria()) {
            for callback in listeners {
                callback(event);
            }
        }
    }

    /// Remove all listeners for a specific pizzeria
    pub fn unwatch(&mut self, pizzeria: &str) {
        self.pizzeria_listeners.remove(pizzeria);
    }

    /// Clear all listeners
    pub fn clear(&mut self) {
        self.global_listeners.clear();
        self.pizzeria_listeners.clear();
    }
}

// =============================================================================
// Tests
// =============================================================================
