use std::sync::Arc;

use crate::config::SearchMode;
use crate::features::lessons::{LessonService, LessonStore};
use crate::features::orders::{OrderService, OrderStore};

#[derive(Clone)]
pub struct AppState {
    pub lessons: Arc<LessonService>,
    pub orders: Arc<OrderService>,
}

impl AppState {
    pub fn new(lessons: Arc<LessonService>, orders: Arc<OrderService>) -> Self {
        Self { lessons, orders }
    }

    /// Wires both services over already-connected stores.
    pub fn from_stores(
        lesson_store: Arc<dyn LessonStore>,
        order_store: Arc<dyn OrderStore>,
        search_mode: SearchMode,
    ) -> Self {
        Self::new(
            Arc::new(LessonService::new(lesson_store, search_mode)),
            Arc::new(OrderService::new(order_store)),
        )
    }
}
