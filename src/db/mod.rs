pub mod memory;

pub use memory::{
    RecommendationStore, DEFAULT_HISTORY_CAPACITY, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
