use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing::{error, info};

use crate::{
    catalog::{CatalogRepository, InMemoryCatalog},
    cli::{
        args::{Commands, DiscountKind, ItemSpec, ShellAction},
        demo::run_demo,
    },
    models::{
        cart::AddOutcome,
        discount::{Discount, DiscountStrategy},
    },
    services::{CartService, CartServiceError},
    utils::{
        formatting::{format_cart_table, format_product_table, format_receipt, format_total_line},
        Config,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static CART: Emoji<'_, '_> = Emoji("🛒 ", "");

pub struct CliApp {
    config: Config,
    service: CartService,
}

impl CliApp {
    pub fn new(config: Config) -> Result<Self> {
        let catalog: Arc<dyn CatalogRepository> = match &config.catalog_path {
            Some(path) => Arc::new(
                InMemoryCatalog::from_json_file(path)
                    .with_context(|| format!("Failed to load catalog from {}", path))?,
            ),
            None => Arc::new(
                InMemoryCatalog::with_demo_products().context("Failed to build demo catalog")?,
            ),
        };

        Ok(Self {
            config,
            service: CartService::new(catalog),
        })
    }

    pub fn run(&mut self, command: Option<Commands>) -> Result<()> {
        match command.unwrap_or(Commands::Demo) {
            Commands::Demo => self.handle_demo(),
            Commands::Catalog => self.handle_catalog(),
            Commands::Checkout { items, discount, percent, json } => {
                self.handle_checkout(items, discount, percent, json)
            }
            Commands::Shell => self.handle_shell(),
        }
    }

    fn handle_demo(&self) -> Result<()> {
        info!("Running demo scenario");
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        run_demo(&mut handle, &self.config.currency_symbol)?;
        handle.flush()?;
        Ok(())
    }

    fn handle_catalog(&self) -> Result<()> {
        let products = self.service.catalog().list()?;
        if products.is_empty() {
            println!("{} Catalog is empty", INFO);
        } else {
            println!("{} {}", INFO, style(format!("{} products", products.len())).bold());
            println!("{}", format_product_table(&products, &self.config.currency_symbol));
        }
        Ok(())
    }

    fn handle_checkout(&mut self, items: Vec<ItemSpec>, discount: DiscountKind, percent: f64, json: bool) -> Result<()> {
        for item in &items {
            self.add_item(&item.name, item.quantity)
                .with_context(|| format!("Failed to add {}", item.name))?;
        }

        let discount = discount.to_discount(percent);
        if json {
            let receipt = self.service.receipt(&discount);
            println!("{}", receipt.to_json().context("Failed to serialize receipt")?);
            return Ok(());
        }

        for line in self.service.cart().display_lines() {
            println!("{}", line);
        }
        self.print_total(&discount);
        Ok(())
    }

    fn handle_shell(&mut self) -> Result<()> {
        println!("{} {}", CART, style("Shopping cart session").bold().cyan());
        let theme = ColorfulTheme::default();

        loop {
            let action = Select::with_theme(&theme)
                .with_prompt("What next?")
                .items(&ShellAction::ALL)
                .default(0)
                .interact()?;

            match ShellAction::ALL[action] {
                ShellAction::Add => {
                    let name = self.prompt_product(&theme)?;
                    let quantity: i32 = Input::with_theme(&theme)
                        .with_prompt("Quantity")
                        .default(1)
                        .interact_text()?;
                    if let Err(e) = self.add_item(&name, quantity) {
                        println!("{} {}", CROSS, style(&e).red());
                    }
                }
                ShellAction::Update => {
                    let name = self.prompt_product(&theme)?;
                    let quantity: i32 = Input::with_theme(&theme)
                        .with_prompt("New quantity")
                        .interact_text()?;
                    if self.service.update_quantity(&name, quantity) {
                        println!("{} {} quantity set to {}", CHECKMARK, style(&name).green(), quantity);
                    } else {
                        println!("{} {} is not in your cart", WARNING, style(&name).yellow());
                    }
                }
                ShellAction::Remove => {
                    let name = self.prompt_product(&theme)?;
                    if self.service.remove_product(&name).is_some() {
                        println!("{} Removed {}", CHECKMARK, style(&name).green());
                    } else {
                        println!("{} {} is not in your cart", WARNING, style(&name).yellow());
                    }
                }
                ShellAction::Show => self.print_cart(),
                ShellAction::Total => {
                    let kinds = [DiscountKind::None, DiscountKind::Percentage, DiscountKind::Bogo];
                    let choice = Select::with_theme(&theme)
                        .with_prompt("Discount")
                        .items(&kinds)
                        .default(0)
                        .interact()?;
                    let percent = if matches!(kinds[choice], DiscountKind::Percentage) {
                        Input::with_theme(&theme)
                            .with_prompt("Percentage")
                            .default(10.0)
                            .interact_text()?
                    } else {
                        0.0
                    };
                    let discount = kinds[choice].to_discount(percent);
                    println!("{}", format_receipt(&self.service.receipt(&discount), &self.config.currency_symbol));
                    self.print_total(&discount);
                }
                ShellAction::Quit => break,
            }
        }

        println!("{} Bye", CHECKMARK);
        Ok(())
    }

    fn add_item(&mut self, name: &str, quantity: i32) -> Result<(), CartServiceError> {
        match self.service.add_by_name(name, quantity) {
            Ok(AddOutcome::Unavailable) => {
                println!("{} is not available.", name);
                Ok(())
            }
            Ok(AddOutcome::QuantityOverflow { quantity: kept }) => {
                println!(
                    "{} Cannot add {} more {}, quantity stays at {}",
                    WARNING,
                    quantity,
                    style(name).yellow(),
                    kept
                );
                Ok(())
            }
            Ok(_) => Ok(()),
            Err(e) => {
                error!("Failed to add {}: {}", name, e);
                Err(e)
            }
        }
    }

    fn prompt_product(&self, theme: &ColorfulTheme) -> Result<String> {
        let name: String = Input::with_theme(theme)
            .with_prompt("Product name")
            .interact_text()?;
        Ok(name.trim().to_string())
    }

    fn print_cart(&self) {
        let cart = self.service.cart();
        if cart.is_empty() {
            println!("{} Your cart is empty", INFO);
            return;
        }
        for line in cart.display_lines() {
            println!("{}", line);
        }
        println!("{}", format_cart_table(cart, &self.config.currency_symbol));
    }

    fn print_total(&self, discount: &Discount) {
        let total = self.service.total(discount);
        let strategy: &dyn DiscountStrategy = discount;
        println!("{}", format_total_line(&self.config.currency_symbol, strategy, total));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cart_item::CartItem;

    fn app() -> CliApp {
        CliApp::new(Config::default()).unwrap()
    }

    fn item(name: &str, quantity: i32) -> ItemSpec {
        ItemSpec {
            name: name.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_checkout_repeated_item_accumulates() {
        let mut app = app();
        app.handle_checkout(
            vec![item("Headphones", 2), item("Laptop", 1), item("Headphones", 3)],
            DiscountKind::None,
            0.0,
            false,
        )
        .unwrap();

        let cart = app.service.cart();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get("Headphones").map(CartItem::quantity), Some(5));
        assert_eq!(app.service.total(&Discount::None), 1250.0);
    }

    #[test]
    fn test_checkout_overflowing_item_keeps_quantity() {
        let mut app = app();
        let result = app.handle_checkout(
            vec![item("Laptop", i32::MAX), item("Laptop", 1)],
            DiscountKind::Bogo,
            0.0,
            false,
        );

        assert!(result.is_ok());
        assert_eq!(
            app.service.cart().get("Laptop").map(CartItem::quantity),
            Some(i32::MAX)
        );
    }

    #[test]
    fn test_checkout_unknown_item_fails() {
        let mut app = app();
        let result = app.handle_checkout(vec![item("Phone", 1)], DiscountKind::None, 0.0, false);
        assert!(result.is_err());
        assert!(app.service.cart().is_empty());
    }
}
