pub mod draft;
pub mod plant;
