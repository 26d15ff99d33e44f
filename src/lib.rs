pub mod gui;
pub mod util;
pub mod wallet;
