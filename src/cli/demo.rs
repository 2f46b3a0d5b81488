use std::io::Write;

use crate::{
    models::{
        cart::{AddOutcome, Cart},
        discount::{BuyOneGetOneFree, DiscountStrategy, PercentageDiscount},
        product::Product,
    },
    utils::formatting::format_total_line,
};

/// Runs the fixed scenario: Laptop x1 and Headphones x2, Headphones raised
/// to 3, then the bill under a 10% discount and under BOGO.
pub fn run_demo<W: Write>(out: &mut W, currency: &str) -> anyhow::Result<()> {
    let laptop = Product::electronic("Laptop", 1000.0, true);
    let headphones = Product::electronic("Headphones", 50.0, true);

    let mut cart = Cart::new();

    add(out, &mut cart, &laptop, 1)?;
    add(out, &mut cart, &headphones, 2)?;
    write!(out, "{}", cart)?;

    cart.update_quantity("Headphones", 3);
    write!(out, "{}", cart)?;

    let strategies: [&dyn DiscountStrategy; 2] = [&PercentageDiscount::new(10.0), &BuyOneGetOneFree];
    for strategy in strategies {
        let total = cart.calculate_total(strategy);
        writeln!(out, "{}", format_total_line(currency, strategy, total))?;
    }

    Ok(())
}

fn add<W: Write>(out: &mut W, cart: &mut Cart, product: &Product, quantity: i32) -> anyhow::Result<()> {
    if cart.add_product(product, quantity) == AddOutcome::Unavailable {
        writeln!(out, "{} is not available.", product.name())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run_demo(&mut out, "$").unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "You have 1 Laptop(s) in your cart.",
                "You have 2 Headphones(s) in your cart.",
                "You have 1 Laptop(s) in your cart.",
                "You have 3 Headphones(s) in your cart.",
                "Total Bill with Percentage Discount: $1035.0",
                "Total Bill with BOGO Discount: $575.0",
            ]
        );
    }
}
