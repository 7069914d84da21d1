pub mod address;
pub mod error;
pub mod vector_builder;

pub use address::Address;
pub use error::{Result, VectorError};
pub use vector_builder::{
    build_test_vector, check_test_vector, export_test_vector, load_test_vector,
    registration_message, TestVector,
};
