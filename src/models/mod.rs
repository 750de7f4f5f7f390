mod category;
mod site;

pub use category::*;
pub use site::*;
