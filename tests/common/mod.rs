//! Common test utilities for pizman integration tests
//!
//! Provides shared fixtures and sample configurations.

#![allow(dead_code)]

use pizman::{OptionSet, PizzaConfig, PizzeriaManager};

// =============================================================================
// Sample Configurations
// =============================================================================

/// The configuration used by most scenarios: base price 9.99 with a
/// "Toppings" set holding "Cheese" at 1.50.
pub fn marios_config() -> PizzaConfig {
    PizzaConfig::new(9.99).with_option_set(OptionSet::new("Toppings").with_option("Cheese", 1.50))
}

/// A richer configuration with two option sets.
pub fn luigis_config() -> PizzaConfig {
    PizzaConfig::new(11.25)
        .with_option_set(
            OptionSet::new("Toppings")
                .with_option("Mushroom", 1.25)
                .with_option("Olive", 0.95),
        )
        .with_option_set(
            OptionSet::new("Crust")
                .with_option("Thin", 0.0)
                .with_option("Stuffed", 2.50),
        )
}

// =============================================================================
// Test Fixture
// =============================================================================

/// Test fixture that provides a configured manager.
pub struct TestFixture {
    pub manager: PizzeriaManager,
}

impl TestFixture {
    /// Create a fixture with an empty directory.
    pub fn new() -> Self {
        Self {
            manager: PizzeriaManager::new(),
        }
    }

    /// Create a fixture pre-seeded with "Mario's".
    pub fn with_marios() -> Self {
        let mut fixture = Self::new();
        fixture
            .manager
            .create_pizzeria("Mario's", vec![marios_config()])
            .expect("Failed to seed fixture");
        fixture
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
