pub mod model;
pub mod scope;
pub mod source;
pub mod wire;
