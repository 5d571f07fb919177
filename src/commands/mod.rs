pub mod scaffold;
pub mod seed;
