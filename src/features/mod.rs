pub mod lessons;
pub mod orders;
pub mod storefront;
