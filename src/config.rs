//! Configuration data model
//!
//! A [`PizzaConfig`] is one pizzeria's configuration: a base price plus an
//! ordered sequence of [`OptionSet`]s, each holding named, priced options.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, priced line item within an [`OptionSet`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionItem {
    /// Option name, unique within its owning set
    pub name: String,
    /// Price for this option
    pub price: f64,
}

/// A named group of priced options (e.g. "Toppings").
///
/// Options are kept in insertion order, and that order is what reporting
/// renders. Option names are unique within a set; set names are unique
/// within a [`PizzaConfig`] by caller discipline only, and [`set_name`]
/// does not check for collisions with sibling sets.
///
/// [`set_name`]: OptionSet::set_name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OptionSet {
    name: String,
    #[serde(default)]
    options: Vec<OptionItem>,
}

impl OptionSet {
    /// Create an empty option set with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    /// Add an option, builder-style.
    #[must_use]
    pub fn with_option(mut self, name: impl Into<String>, price: f64) -> Self {
        self.add_option(name, price);
        self
    }

    /// The set's current name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the set.
    ///
    /// No uniqueness check is made against sibling sets; after a colliding
    /// rename, lookups by the shared name resolve to the earliest-inserted
    /// set.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The options in insertion order.
    pub fn options(&self) -> &[OptionItem] {
        &self.options
    }

    /// Add an option, overwriting the price if the name is already present.
    pub fn add_option(&mut self, name: impl Into<String>, price: f64) {
        let name = name.into();
        match self.options.iter_mut().find(|item| item.name == name) {
            Some(item) => item.price = price,
            None => self.options.push(OptionItem { name, price }),
        }
    }

    /// Look up an option by exact name match.
    pub fn option(&self, name: &str) -> Option<&OptionItem> {
        self.options.iter().find(|item| item.name == name)
    }

    /// Overwrite the price of the named option.
    ///
    /// Returns `true` if a matching option was found and updated.
    pub fn update_option(&mut self, name: &str, price: f64) -> bool {
        match self.options.iter_mut().find(|item| item.name == name) {
            Some(item) => {
                item.price = price;
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionSet '{}'", self.name)?;
        for item in &self.options {
            write!(f, "\n  {}: ${:.2}", item.name, item.price)?;
        }
        Ok(())
    }
}

/// One pizzeria's configuration: base price plus option sets.
///
/// Option sets keep their insertion order; reporting renders them in that
/// order. Prices are plain `f64` values and are NOT checked for sign; the
/// manager stores whatever the caller supplies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PizzaConfig {
    base_price: f64,
    #[serde(default)]
    option_sets: Vec<OptionSet>,
}

impl PizzaConfig {
    /// Create a configuration with the given base price and no option sets.
    pub fn new(base_price: f64) -> Self {
        Self {
            base_price,
            option_sets: Vec::new(),
        }
    }

    /// Add an option set, builder-style.
    ///
    /// Set-name uniqueness is the caller's responsibility.
    #[must_use]
    pub fn with_option_set(mut self, set: OptionSet) -> Self {
        self.option_sets.push(set);
        self
    }

    /// The stored base price.
    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Overwrite the base price.
    pub fn set_base_price(&mut self, price: f64) {
        self.base_price = price;
    }

    /// The option sets in stored order.
    pub fn option_sets(&self) -> &[OptionSet] {
        &self.option_sets
    }

    /// Append an option set.
    pub fn add_option_set(&mut self, set: OptionSet) {
        self.option_sets.push(set);
    }

    /// Linear search for the first option set with the given name.
    pub fn find_option_set(&self, name: &str) -> Option<&OptionSet> {
        self.option_sets.iter().find(|set| set.name == name)
    }

    /// Mutable variant of [`find_option_set`](Self::find_option_set).
    pub fn find_option_set_mut(&mut self, name: &str) -> Option<&mut OptionSet> {
        self.option_sets.iter_mut().find(|set| set.name == name)
    }
}

impl fmt::Display for PizzaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Base price: ${:.2}", self.base_price)?;
        for set in &self.option_sets {
            write!(f, "\n{set}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn toppings() -> OptionSet {
        OptionSet::new("Toppings")
            .with_option("Cheese", 1.50)
            .with_option("Pepperoni", 2.00)
    }

    #[test]
    fn test_builder_preserves_option_order() {
        let set = toppings();

        let names: Vec<_> = set.options().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Cheese", "Pepperoni"]);
    }

    #[test]
    fn test_add_option_overwrites_existing_name() {
        let mut set = toppings();
        set.add_option("Cheese", 1.75);

        // Still two options, price overwritten in place
        assert_eq!(set.options().len(), 2);
        assert_eq!(set.option("Cheese").unwrap().price, 1.75);
        assert_eq!(set.options()[0].name, "Cheese");
    }

    #[test]
    fn test_update_option_reports_match() {
        let mut set = toppings();

        assert!(set.update_option("Cheese", 1.95));
        assert_eq!(set.option("Cheese").unwrap().price, 1.95);

        assert!(!set.update_option("Anchovies", 0.75));
        assert!(set.option("Anchovies").is_none());
    }

    #[test]
    fn test_find_option_set_first_match_wins() {
        // Two sets sharing a name, as after an unchecked rename
        let config = PizzaConfig::new(9.99)
            .with_option_set(OptionSet::new("Extras").with_option("Dip", 0.50))
            .with_option_set(OptionSet::new("Extras").with_option("Sauce", 0.75));

        let found = config.find_option_set("Extras").unwrap();
        assert!(found.option("Dip").is_some());
    }

    #[test]
    fn test_display_rendering() {
        let config = PizzaConfig::new(9.99).with_option_set(toppings());

        assert_eq!(
            config.to_string(),
            "Base price: $9.99\nOptionSet 'Toppings'\n  Cheese: $1.50\n  Pepperoni: $2.00"
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = PizzaConfig::new(11.25).with_option_set(toppings());

        let json = serde_json::to_string(&config).unwrap();
        let loaded: PizzaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_deserialize_without_option_sets() {
        let loaded: PizzaConfig = serde_json::from_str(r#"{"base_price": 7.5}"#).unwrap();
        assert_eq!(loaded.base_price(), 7.5);
        assert!(loaded.option_sets().is_empty());
    }
}
