//! Helpers shared across the crate: the crate-wide thread pool and the
//! builder macro used by the data structures and readers.

use once_cell::sync::Lazy;
use rayon::{
    ThreadPool,
    ThreadPoolBuilder,
};

pub const NUM_THREADS_ENV: &str = "READXPLORER_NUM_THREADS";

pub static THREAD_POOL: Lazy<ThreadPool> = Lazy::new(|| {
    let num_threads: Option<usize> = std::env::var(NUM_THREADS_ENV)
        .ok()
        .and_then(|str| str.parse::<usize>().ok());
    ThreadPoolBuilder::new()
        .num_threads(num_threads.unwrap_or(0))
        .build()
        .expect("Failed to create thread pool")
});

pub fn n_threads() -> usize {
    THREAD_POOL.current_num_threads()
}

#[macro_export]
macro_rules! with_field_fn {
    ($field_name: ident, $field_type: ty) => {
        paste::paste! {
            pub fn [<with_$field_name>](mut self, value: $field_type) -> Self {
                self.$field_name = value;
                self
            }
        }
    };
}
pub use with_field_fn;
