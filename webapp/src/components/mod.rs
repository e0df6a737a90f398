pub mod media_card;
pub mod navigation;
pub mod search_bar;
