pub mod clickable;
pub mod combo_box;
pub mod editor;
pub mod password_strength;
pub mod radio_group;
pub mod sub_page;
pub mod switch;
pub mod switch_button_text;
