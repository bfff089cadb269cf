// mod.rs - File loaders

pub mod csv;
