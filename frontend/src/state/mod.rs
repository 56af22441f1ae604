pub mod cursor;
pub mod dialog;
pub mod dual_state;
pub mod listbox;
pub mod locale;
pub mod noise;
pub mod presence;
pub mod reveal;
pub mod selection;
pub mod toast;
