pub mod spa;
