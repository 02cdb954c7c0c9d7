//! # pizman - Pizzeria Config Manager
//!
//! A small, framework-agnostic library for managing named pizzeria
//! configurations: a base price plus named option sets of priced options.
//!
//! ## Features
//!
//! - **Configuration directory**: one [`PizzaConfig`] per pizzeria name,
//!   with duplicate-protected creation
//! - **Nested updates**: rename option sets, overwrite base and option
//!   prices in place
//! - **Reporting**: human-readable rendering of a stored configuration
//! - **Config sources**: pluggable [`ConfigSource`] collaborators
//!   ([`JsonFileSource`] with the default `json` feature)
//! - **Change events**: register callbacks for configuration changes
//!
//! ## Quick Start
//!
//! ```
//! use pizman::{OptionSet, PizzaConfig, PizzeriaManager};
//!
//! let mut manager = PizzeriaManager::new();
//!
//! let config = PizzaConfig::new(9.99)
//!     .with_option_set(
//!         OptionSet::new("Toppings")
//!             .with_option("Cheese", 1.50)
//!             .with_option("Pepperoni", 2.00),
//!     );
//!
//! manager.create_pizzeria("Mario's", vec![config])?;
//! manager.update_option_price("Mario's", "Toppings", "Cheese", 1.75)?;
//!
//! println!("{}", manager.print_pizzeria("Mario's")?);
//! # Ok::<(), pizman::Error>(())
//! ```
//!
//! ## Status Reporting
//!
//! Every operation returns `Result<String>`: `Ok` carries the status
//! message (or the rendered report), `Err` carries a typed [`Error`] whose
//! display text is the failure message. All failures are expected and
//! non-fatal; a failed operation never mutates the store.
//!
//! ## Change Events
//!
//! ```
//! use pizman::{PizzaConfig, PizzeriaManager};
//!
//! let mut manager = PizzeriaManager::new();
//! manager.events_mut().watch("Mario's", |event| {
//!     println!("Mario's changed: {event:?}");
//! });
//!
//! manager.create_pizzeria("Mario's", vec![PizzaConfig::new(9.99)])?;
//! # Ok::<(), pizman::Error>(())
//! ```
//!
//! ## Loading From a Source
//!
//! The manager never does file I/O itself. [`configure_pizzeria_from`]
//! takes any [`ConfigSource`] and applies create-or-overwrite semantics to
//! whatever it produces:
//!
//! ```no_run
//! use pizman::{JsonFileSource, PizzeriaManager};
//!
//! let mut manager = PizzeriaManager::new();
//! let source = JsonFileSource::new().base_dir("~/.config/pizman");
//! manager.configure_pizzeria_from(&source, "Mario's", "marios.json")?;
//! # Ok::<(), pizman::Error>(())
//! ```
//!
//! [`configure_pizzeria_from`]: PizzeriaManager::configure_pizzeria_from

// Core modules
mod config;
mod error;
mod events;
mod manager;
mod source;
mod store;

// Re-exports from core
pub use config::{OptionItem, OptionSet, PizzaConfig};
pub use error::{Error, Result};
pub use events::{ChangeCallback, ChangeEvent, EventManager};
pub use manager::PizzeriaManager;
pub use source::ConfigSource;
pub use store::ConfigStore;

#[cfg(feature = "json")]
pub use source::JsonFileSource;
