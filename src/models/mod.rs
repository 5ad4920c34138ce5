pub mod inventory;
pub mod page;
pub mod product;

pub use inventory::{parse_iso8601, parse_part_inventory, InventoryRecord};
pub use page::{InventoryPage, InventoryQuery, ProductsPage, ProductsQuery};
pub use product::{parse_sellable_products, ProductRecord};
