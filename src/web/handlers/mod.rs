// HTTP handlers, one module per resource.

pub mod articles;
pub mod keywords;
