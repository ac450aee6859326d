pub mod options;
pub mod state;
pub mod styles;

pub use options::*;
pub use state::*;
pub use styles::*;
