pub mod dto;
pub mod handler;
pub mod service;

pub use dto::OrderCreatedResponse;
pub use handler::{handle_create_order, handle_list_orders};
pub use service::{OrderService, OrderStore};
