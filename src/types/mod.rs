pub mod record;
pub mod table;
pub mod value;

pub use record::*;
pub use table::*;
pub use value::*;
