//! Pizzeria manager facade
//!
//! [`PizzeriaManager`] owns the [`ConfigStore`] and exposes the create,
//! update and reporting operations over it. Each operation validates,
//! consults or mutates the store, and reports its outcome as status text:
//! `Ok` carries the success message (or rendered report), `Err` carries the
//! typed failure. A failed operation never mutates state.

use crate::config::PizzaConfig;
use crate::error::{Error, Result};
use crate::events::{ChangeEvent, EventManager};
use crate::source::ConfigSource;
use crate::store::ConfigStore;

use log::{debug, info};
use std::fmt::Write;

/// Manager for named pizzeria configurations.
///
/// # Example
///
/// ```
/// use pizman::{OptionSet, PizzaConfig, PizzeriaManager};
///
/// let mut manager = PizzeriaManager::new();
///
/// let config = PizzaConfig::new(9.99)
///     .with_option_set(OptionSet::new("Toppings").with_option("Cheese", 1.50));
///
/// manager.create_pizzeria("Mario's", vec![config])?;
/// manager.update_option_price("Mario's", "Toppings", "Cheese", 2.00)?;
///
/// println!("{}", manager.print_pizzeria("Mario's")?);
/// # Ok::<(), pizman::Error>(())
/// ```
#[derive(Default)]
pub struct PizzeriaManager {
    /// Configuration directory, owned exclusively
    store: ConfigStore,

    /// Event manager for change callbacks
    events: EventManager,
}

impl PizzeriaManager {
    /// Create a manager with an empty directory.
    #[must_use]
    pub fn new() -> Self {
        info!("Initialized pizman PizzeriaManager");
        Self {
            store: ConfigStore::new(),
            events: EventManager::new(),
        }
    }

    /// Create a manager over an existing store.
    #[must_use]
    pub fn with_store(store: ConfigStore) -> Self {
        info!(
            "Initialized pizman PizzeriaManager over {} existing pizzeria(s)",
            store.len()
        );
        Self {
            store,
            events: EventManager::new(),
        }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// The event manager, for registering change listeners.
    ///
    /// # Example
    ///
    /// ```
    /// # use pizman::PizzeriaManager;
    /// # let mut manager = PizzeriaManager::new();
    /// manager.events_mut().on_change(|event| {
    ///     println!("changed: {event:?}");
    /// });
    /// ```
    pub fn events_mut(&mut self) -> &mut EventManager {
        &mut self.events
    }

    // =========================================================================
    // Creation
    // =========================================================================

    /// Create a pizzeria from an ordered list of candidate configurations.
    ///
    /// Only the FIRST element of `configs` is stored; the rest are silently
    /// discarded. The one-to-many signature is kept for callers that
    /// assemble candidate lists, but the directory is single-valued per
    /// pizzeria.
    ///
    /// # Errors
    ///
    /// - [`Error::PizzeriaExists`] if `name` is already in the directory
    /// - [`Error::NoConfigs`] if `configs` is empty
    ///
    /// Either way the directory is left unchanged.
    pub fn create_pizzeria(&mut self, name: &str, configs: Vec<PizzaConfig>) -> Result<String> {
        if self.store.exists(name) {
            debug!("Create rejected: pizzeria '{name}' already exists");
            return Err(Error::PizzeriaExists(name.to_string()));
        }

        let mut candidates = configs.into_iter();
        let Some(config) = candidates.next() else {
            debug!("Create rejected: no configurations provided for '{name}'");
            return Err(Error::NoConfigs);
        };
        let discarded = candidates.len();
        if discarded > 0 {
            debug!("Discarding {discarded} extra configuration(s) for '{name}'");
        }

        self.store.put(name, config);
        self.events.notify(&ChangeEvent::PizzeriaCreated {
            pizzeria: name.to_string(),
        });
        info!("Created pizzeria '{name}'");
        Ok(format!("Pizzeria '{name}' created successfully."))
    }

    /// Acknowledge a request to configure a pizzeria from an external source.
    ///
    /// Loading is delegated to [`ConfigSource`] collaborators; this entry
    /// point only acknowledges the request and leaves the store untouched.
    /// Use [`configure_pizzeria_from`](Self::configure_pizzeria_from) to
    /// apply a loaded configuration.
    pub fn configure_pizzeria(&mut self, source_identifier: &str) -> Result<String> {
        info!("Configuration requested from source '{source_identifier}'");
        Ok(format!("Configuring pizzeria using file: {source_identifier}"))
    }

    /// Load a configuration through `source` and store it under `name`.
    ///
    /// Absent names are created; existing names are overwritten, since
    /// reloading from a source is an explicit refresh rather than a
    /// duplicate create.
    ///
    /// # Errors
    ///
    /// Propagates the source's load failure unchanged; the directory is not
    /// touched on failure.
    pub fn configure_pizzeria_from<S: ConfigSource>(
        &mut self,
        source: &S,
        name: &str,
        identifier: &str,
    ) -> Result<String> {
        let config = source.load(identifier)?;
        let existed = self.store.exists(name);
        self.store.put(name, config);

        if existed {
            info!("Reloaded pizzeria '{name}' from '{identifier}'");
            Ok(format!("Pizzeria '{name}' updated from '{identifier}'."))
        } else {
            self.events.notify(&ChangeEvent::PizzeriaCreated {
                pizzeria: name.to_string(),
            });
            info!("Created pizzeria '{name}' from '{identifier}'");
            Ok(format!("Pizzeria '{name}' created successfully."))
        }
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    /// Render a human-readable report of one pizzeria's configuration:
    /// base price, then each option set with its options in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PizzeriaNotFound`] if `name` is unknown.
    pub fn print_pizzeria(&self, name: &str) -> Result<String> {
        let config = self
            .store
            .get(name)
            .ok_or_else(|| Error::PizzeriaNotFound(name.to_string()))?;

        let mut out = String::new();
        writeln!(out, "Pizzeria '{name}'").unwrap();
        write!(out, "{config}").unwrap();
        Ok(out)
    }

    // =========================================================================
    // Updates
    // =========================================================================

    /// Rename an option set within a pizzeria's configuration.
    ///
    /// No check is made that `new_name` collides with a sibling set; after
    /// such a rename, lookups by the shared name resolve to the
    /// earliest-inserted set.
    ///
    /// # Errors
    ///
    /// - [`Error::PizzeriaNotFound`] if `pizzeria` is unknown
    /// - [`Error::OptionSetNotFound`] if no set matches `option_set`
    pub fn update_option_set_name(
        &mut self,
        pizzeria: &str,
        option_set: &str,
        new_name: &str,
    ) -> Result<String> {
        let config = self
            .store
            .get_mut(pizzeria)
            .ok_or_else(|| Error::PizzeriaNotFound(pizzeria.to_string()))?;
        let set = config
            .find_option_set_mut(option_set)
            .ok_or_else(|| Error::OptionSetNotFound(option_set.to_string()))?;
        set.set_name(new_name);

        self.events.notify(&ChangeEvent::OptionSetRenamed {
            pizzeria: pizzeria.to_string(),
            old: option_set.to_string(),
            new: new_name.to_string(),
        });
        debug!("Renamed OptionSet '{option_set}' to '{new_name}' in '{pizzeria}'");
        Ok("OptionSet name updated successfully.".to_string())
    }

    /// Overwrite a pizzeria's base price.
    ///
    /// The new price is stored unconditionally; no sign check is made.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PizzeriaNotFound`] if `pizzeria` is unknown.
    pub fn update_base_price(&mut self, pizzeria: &str, new_price: f64) -> Result<String> {
        let config = self
            .store
            .get_mut(pizzeria)
            .ok_or_else(|| Error::PizzeriaNotFound(pizzeria.to_string()))?;
        let old = config.base_price();
        config.set_base_price(new_price);

        self.events.notify(&ChangeEvent::BasePriceUpdated {
            pizzeria: pizzeria.to_string(),
            old,
            new: new_price,
        });
        debug!("Updated base price of '{pizzeria}' from {old:.2} to {new_price:.2}");
        Ok("Base price updated successfully.".to_string())
    }

    /// Overwrite the price of one option inside one option set.
    ///
    /// Three-level lookup: pizzeria, then option set (first match), then
    /// option. Each level fails with its own error, short-circuiting the
    /// rest.
    ///
    /// # Errors
    ///
    /// - [`Error::PizzeriaNotFound`] if `pizzeria` is unknown
    /// - [`Error::OptionSetNotFound`] if no set matches `option_set`
    /// - [`Error::OptionNotFound`] if the set has no option named `option`
    pub fn update_option_price(
        &mut self,
        pizzeria: &str,
        option_set: &str,
        option: &str,
        new_price: f64,
    ) -> Result<String> {
        let config = self
            .store
            .get_mut(pizzeria)
            .ok_or_else(|| Error::PizzeriaNotFound(pizzeria.to_string()))?;
        let set = config
            .find_option_set_mut(option_set)
            .ok_or_else(|| Error::OptionSetNotFound(option_set.to_string()))?;
        let old = set
            .option(option)
            .map(|item| item.price)
            .ok_or_else(|| Error::OptionNotFound {
                set: option_set.to_string(),
                option: option.to_string(),
            })?;
        set.update_option(option, new_price);

        self.events.notify(&ChangeEvent::OptionPriceUpdated {
            pizzeria: pizzeria.to_string(),
            option_set: option_set.to_string(),
            option: option.to_string(),
            old,
            new: new_price,
        });
        debug!("Updated option '{option}' in '{option_set}' of '{pizzeria}' to {new_price:.2}");
        Ok("Option price updated successfully.".to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OptionSet;

    #[test]
    fn test_configure_stub_leaves_store_untouched() {
        let mut manager = PizzeriaManager::new();

        let message = manager.configure_pizzeria("marios.json").unwrap();
        assert_eq!(message, "Configuring pizzeria using file: marios.json");
        assert!(manager.store().is_empty());
    }

    #[test]
    fn test_print_rendering() {
        let mut manager = PizzeriaManager::new();
        let config = PizzaConfig::new(9.99)
            .with_option_set(OptionSet::new("Toppings").with_option("Cheese", 1.50));
        manager.create_pizzeria("Mario's", vec![config]).unwrap();

        let report = manager.print_pizzeria("Mario's").unwrap();
        assert_eq!(
            report,
            "Pizzeria 'Mario's'\nBase price: $9.99\nOptionSet 'Toppings'\n  Cheese: $1.50"
        );
    }

    #[test]
    fn test_with_store_wraps_existing_directory() {
        let mut store = ConfigStore::new();
        store.put("Luigi's", PizzaConfig::new(11.25));

        let manager = PizzeriaManager::with_store(store);
        assert!(manager.store().exists("Luigi's"));
    }
}
