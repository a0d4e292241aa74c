pub mod bench;
pub mod run;
pub mod testing;
