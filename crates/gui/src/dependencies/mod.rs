pub mod gui_depends;
#[cfg(test)]
pub mod mock_depends;
