pub mod accounts;
pub mod entries;
pub mod settings;
pub mod stats;

pub use accounts::*;
pub use entries::*;
pub use settings::*;
pub use stats::*;
