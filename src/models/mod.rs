pub mod account;
pub mod entry;
pub mod settings;

pub use account::*;
pub use entry::*;
pub use settings::*;
