pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod dialog;
pub mod input;
pub mod label;
pub mod select;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use alert::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use input::*;
pub use label::*;
pub use select::*;
