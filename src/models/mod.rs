mod entry;
mod page;

pub use entry::*;
pub use page::*;
