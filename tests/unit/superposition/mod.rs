pub mod bitset;
pub mod cache;
pub mod element;
pub mod one_way;
