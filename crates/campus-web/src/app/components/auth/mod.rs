pub mod protected;

pub use protected::Protected;
