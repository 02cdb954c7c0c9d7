// Basic usage example for pizman
//
// Run with: cargo run --example basic_usage

use pizman::{OptionSet, PizzaConfig, PizzeriaManager};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut manager = PizzeriaManager::new();

    println!("🍕 pizman Basic Usage Example\n");

    // Watch for changes before doing anything
    manager.events_mut().on_change(|event| {
        println!("   (event) {event:?}");
    });

    // Create a pizzeria with one configuration
    let config = PizzaConfig::new(9.99).with_option_set(
        OptionSet::new("Toppings")
            .with_option("Cheese", 1.50)
            .with_option("Pepperoni", 2.00),
    );

    let status = manager.create_pizzeria("Mario's", vec![config])?;
    println!("✅ {status}\n");

    // Print the stored configuration
    println!("{}\n", manager.print_pizzeria("Mario's")?);

    // Update prices and rename the option set
    println!("🔧 Raising the base price...");
    println!("✅ {}\n", manager.update_base_price("Mario's", 10.49)?);

    println!("🔧 Cheese costs more now...");
    println!(
        "✅ {}\n",
        manager.update_option_price("Mario's", "Toppings", "Cheese", 1.75)?
    );

    println!("🔧 Renaming 'Toppings' to 'Extras'...");
    println!(
        "✅ {}\n",
        manager.update_option_set_name("Mario's", "Toppings", "Extras")?
    );

    // A failed update reports its reason and changes nothing
    if let Err(err) = manager.update_option_price("Mario's", "Extras", "Anchovies", 0.75) {
        println!("❌ {err}\n");
    }

    // Final state
    println!("{}", manager.print_pizzeria("Mario's")?);

    Ok(())
}
