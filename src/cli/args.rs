use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::str::FromStr;

use crate::models::discount::Discount;

#[derive(Parser)]
#[command(name = "cart-cli")]
#[command(about = "Shopping cart with pluggable discount strategies")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog file path (JSON array of products)
    #[arg(short, long, global = true)]
    pub catalog: Option<String>,

    /// Defaults to `demo`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the scripted Laptop/Headphones scenario
    Demo,
    /// List the products in the catalog
    Catalog,
    /// Fill a cart from the command line and print the bill
    Checkout {
        /// Item to add, as NAME=QTY (repeatable)
        #[arg(short, long = "item", value_name = "NAME=QTY")]
        items: Vec<ItemSpec>,
        /// Discount strategy
        #[arg(short, long, default_value = "none")]
        discount: DiscountKind,
        /// Percentage used by the percentage strategy
        #[arg(short, long, default_value_t = 10.0, allow_negative_numbers = true)]
        percent: f64,
        /// Print the receipt as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive cart session
    Shell,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DiscountKind {
    None,
    Percentage,
    Bogo,
}

impl DiscountKind {
    pub fn to_discount(self, percent: f64) -> Discount {
        match self {
            DiscountKind::None => Discount::None,
            DiscountKind::Percentage => Discount::Percentage(percent),
            DiscountKind::Bogo => Discount::BuyOneGetOneFree,
        }
    }
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountKind::None => write!(f, "none"),
            DiscountKind::Percentage => write!(f, "percentage"),
            DiscountKind::Bogo => write!(f, "bogo"),
        }
    }
}

/// Menu entries of the interactive shell, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellAction {
    Add,
    Update,
    Remove,
    Show,
    Total,
    Quit,
}

impl ShellAction {
    pub const ALL: [ShellAction; 6] = [
        ShellAction::Add,
        ShellAction::Update,
        ShellAction::Remove,
        ShellAction::Show,
        ShellAction::Total,
        ShellAction::Quit,
    ];
}

impl fmt::Display for ShellAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellAction::Add => write!(f, "Add product"),
            ShellAction::Update => write!(f, "Update quantity"),
            ShellAction::Remove => write!(f, "Remove product"),
            ShellAction::Show => write!(f, "Show cart"),
            ShellAction::Total => write!(f, "Total"),
            ShellAction::Quit => write!(f, "Quit"),
        }
    }
}

/// `NAME=QTY` argument of `checkout --item`.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSpec {
    pub name: String,
    pub quantity: i32,
}

impl FromStr for ItemSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, quantity) = s
            .rsplit_once('=')
            .ok_or_else(|| format!("expected NAME=QTY, got '{}'", s))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(format!("missing product name in '{}'", s));
        }

        let quantity = quantity
            .trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid quantity in '{}': {}", s, e))?;

        Ok(Self {
            name: name.to_string(),
            quantity,
        })
    }
}
