pub mod messages;
mod state;

pub use state::{CatalogEvent, CatalogState, RenderState};
