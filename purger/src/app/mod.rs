pub mod actions;
pub mod console;
pub mod options;
pub mod run;
