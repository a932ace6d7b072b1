pub mod match_category;
