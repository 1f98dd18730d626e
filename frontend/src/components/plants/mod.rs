pub mod card;
pub mod error_page;
pub mod list;
pub mod new_plant_form;
pub mod page;
pub mod search;
