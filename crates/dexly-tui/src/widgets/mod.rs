pub mod category_badge;
pub mod stat_bar;
