pub mod html;
pub mod row;
pub mod terminal;
