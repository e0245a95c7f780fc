pub mod images;
pub mod items;
pub mod models;
pub mod offers;
pub mod root;
pub mod weights;
