//! UI Components
//!
//! Shell navigation and the products feature views.

mod nav_bar;
mod product_detail;
mod product_list;

pub use nav_bar::NavBar;
pub use product_detail::ProductDetail;
pub use product_list::ProductList;
