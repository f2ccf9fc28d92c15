pub mod split;
pub mod top;
