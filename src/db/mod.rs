pub mod mood_entries;
mod pool;

pub use pool::create_pool;
