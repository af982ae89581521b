pub mod argmax;
pub mod logger;
