pub mod bars;
pub mod layout;

pub use bars::Renderer;
pub use layout::{Layout, RowLayout, bar_budget, reference_width, scaled_len};
