pub mod product;
pub mod cart_item;
pub mod cart;
pub mod discount;
pub mod receipt;

pub use product::*;
pub use cart_item::*;
pub use cart::*;
pub use discount::*;
pub use receipt::*;
