pub mod chart;
pub mod indicator_card;
pub mod notes_modal;
pub mod region_cards;

pub use indicator_card::IndicatorCard;
pub use notes_modal::NotesModal;
pub use region_cards::RegionCards;
