//! Product field cleaning (pure, stateless).
//!
//! Freeform catalog fields (title, price, rating) go in; canonical values and
//! derived fields (slug, tags) come out. Nothing here does IO or holds state,
//! so every function is safe to call from any number of threads.

pub mod numeric;
pub mod pipeline;
pub mod price;
pub mod rating;
pub mod slug;
pub mod tags;
pub mod text;
pub mod title;

pub use pipeline::{clean, clean_bulk, CleanedProduct, RawProduct};
pub use price::parse_price;
pub use rating::parse_rating;
pub use slug::slugify;
pub use tags::{extract_tags, is_stopword, STOPWORDS};
pub use text::{normalize, title_case};
pub use title::clean_title;
