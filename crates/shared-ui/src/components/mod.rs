pub mod button;
pub mod data_table;
pub mod empty_state;
pub mod page_header;
pub mod skeleton;
pub mod text_field;

pub use button::*;
pub use data_table::*;
pub use empty_state::*;
pub use page_header::*;
pub use skeleton::*;
pub use text_field::*;
