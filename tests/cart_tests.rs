use ecommerce_cart::models::{
    AddOutcome, BuyOneGetOneFree, Cart, Discount, DiscountStrategy, NoDiscount,
    PercentageDiscount, Product,
};

fn sample_products() -> Vec<(Product, i32)> {
    vec![
        (Product::new("Laptop", 1000.0, true), 1),
        (Product::new("Headphones", 50.0, true), 2),
        (Product::new("Mouse", 25.5, true), 4),
        (Product::new("Cable", 0.0, true), 10),
        (Product::new("Dock", 199.99, true), 0),
    ]
}

#[test]
fn test_identity_total_is_sum_of_lines() {
    let mut cart = Cart::new();
    let mut expected = 0.0;
    for (product, quantity) in sample_products() {
        cart.add_product(&product, quantity);
        expected += product.price() * f64::from(quantity);
    }

    assert_eq!(cart.len(), 5);
    assert!((cart.calculate_total(&NoDiscount) - expected).abs() < 1e-9);
}

#[test]
fn test_same_product_twice_is_one_line() {
    let mut cart = Cart::new();
    let headphones = Product::new("Headphones", 50.0, true);

    assert_eq!(cart.add_product(&headphones, 2), AddOutcome::Added);
    assert_eq!(
        cart.add_product(&headphones, 5),
        AddOutcome::Incremented { quantity: 7 }
    );
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get("Headphones").map(|item| item.quantity()), Some(7));
}

#[test]
fn test_additive_quantity_up_to_i32_max() {
    let mut cart = Cart::new();
    let cable = Product::new("Cable", 0.5, true);

    cart.add_product(&cable, i32::MAX - 10);
    assert_eq!(
        cart.add_product(&cable, 10),
        AddOutcome::Incremented { quantity: i32::MAX }
    );
    assert_eq!(
        cart.add_product(&cable, 1),
        AddOutcome::QuantityOverflow { quantity: i32::MAX }
    );
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get("Cable").map(|item| item.quantity()), Some(i32::MAX));
    assert_eq!(
        cart.display_lines(),
        vec![format!("You have {} Cable(s) in your cart.", i32::MAX)]
    );
}

#[test]
fn test_removed_product_never_displayed() {
    let mut cart = Cart::new();
    for (product, quantity) in sample_products() {
        cart.add_product(&product, quantity);
    }

    cart.remove_product("Mouse");
    let once = cart.display_lines();
    cart.remove_product("Mouse");
    let twice = cart.display_lines();

    assert_eq!(once, twice);
    assert!(once.iter().all(|line| !line.contains("Mouse")));
    assert_eq!(once.len(), 4);
}

#[test]
fn test_update_absent_name_leaves_cart_unchanged() {
    let mut cart = Cart::new();
    cart.add_product(&Product::new("Laptop", 1000.0, true), 1);

    let lines = cart.display_lines();
    let total = cart.calculate_total(&NoDiscount);
    cart.update_quantity("Headphones", 9);

    assert_eq!(cart.display_lines(), lines);
    assert_eq!(cart.calculate_total(&NoDiscount), total);
}

#[test]
fn test_percentage_bounds_on_cart() {
    let mut cart = Cart::new();
    cart.add_product(&Product::new("Laptop", 1000.0, true), 1);
    cart.add_product(&Product::new("Headphones", 50.0, true), 2);

    assert_eq!(cart.calculate_total(&PercentageDiscount::new(0.0)), 1100.0);
    assert_eq!(cart.calculate_total(&PercentageDiscount::new(100.0)), 0.0);
    assert_eq!(
        cart.calculate_total(&BuyOneGetOneFree),
        cart.calculate_total(&NoDiscount) / 2.0
    );
}

#[test]
fn test_laptop_headphones_scenario() {
    let mut cart = Cart::new();
    cart.add_product(&Product::new("Laptop", 1000.0, true), 1);
    cart.add_product(&Product::new("Headphones", 50.0, true), 2);

    assert_eq!(cart.calculate_total(&NoDiscount), 1100.0);
    assert_eq!(cart.calculate_total(&PercentageDiscount::new(10.0)), 990.0);

    cart.update_quantity("Headphones", 3);
    assert_eq!(cart.calculate_total(&NoDiscount), 1150.0);
    assert_eq!(cart.calculate_total(&BuyOneGetOneFree), 575.0);
}

#[test]
fn test_unavailable_product_not_added() {
    let mut cart = Cart::new();
    cart.add_product(&Product::new("Laptop", 1000.0, true), 1);

    let outcome = cart.add_product(&Product::new("Tablet", 300.0, false), 3);

    assert_eq!(outcome, AddOutcome::Unavailable);
    assert_eq!(cart.len(), 1);
    assert!(cart.get("Tablet").is_none());
}

#[test]
fn test_cart_keeps_its_own_copy() {
    let mut cart = Cart::new();
    let mut catalog_entry = Product::new("Laptop", 1000.0, true);
    cart.add_product(&catalog_entry, 1);

    catalog_entry = Product::new("Laptop", 1.0, false);
    assert!(!catalog_entry.is_available());

    let stored = cart.get("Laptop").unwrap().product();
    assert_eq!(stored.price(), 1000.0);
    assert!(stored.is_available());
}

#[test]
fn test_strategies_are_interchangeable() {
    let mut cart = Cart::new();
    cart.add_product(&Product::new("Laptop", 1000.0, true), 1);

    let strategies: Vec<Box<dyn DiscountStrategy>> = vec![
        Box::new(NoDiscount),
        Box::new(PercentageDiscount::new(25.0)),
        Box::new(BuyOneGetOneFree),
        Box::new(Discount::Percentage(50.0)),
    ];
    let totals: Vec<f64> = strategies
        .iter()
        .map(|strategy| cart.calculate_total(&**strategy))
        .collect();

    assert_eq!(totals, vec![1000.0, 750.0, 500.0, 500.0]);
}

#[test]
fn test_receipt_json() {
    let mut cart = Cart::new();
    cart.add_product(&Product::new("Laptop", 1000.0, true), 1);
    cart.add_product(&Product::new("Headphones", 50.0, true), 3);

    let receipt = cart.checkout(&Discount::BuyOneGetOneFree);
    let json = receipt.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["subtotal"], 1150.0);
    assert_eq!(value["total"], 575.0);
    assert_eq!(value["discount"]["kind"], "buy_one_get_one_free");
    assert_eq!(value["lines"][0]["name"], "Laptop");
    assert_eq!(receipt.savings(), 575.0);
}
