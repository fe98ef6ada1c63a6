pub mod table;

pub use table::{element, element_count, Element, ElementIdentity};
