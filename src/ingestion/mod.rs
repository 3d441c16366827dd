// Ingestion: reads the delay CSV into a DataFrame and prints a first look at it.
// Everything is read as text; type coercion belongs to the cleaning stage.

pub mod loader;
pub mod preview;

pub use loader::load_dataset;
pub use preview::{describe, print_preview};
