pub mod card_list;
pub mod detail_modal;
pub mod toast_region;
pub mod ui;

pub use card_list::CardList;
pub use detail_modal::DetailModal;
pub use toast_region::ToastRegion;
