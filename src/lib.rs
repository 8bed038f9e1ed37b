pub mod colors;
pub mod markup;
