//! Forward projection and sample-data generation.

pub mod forward;
pub mod sample_data;
