pub mod curve2;
pub mod resample;
