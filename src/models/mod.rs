pub use block::*;
pub use block_type::*;
pub use button_style::*;
pub use media::*;
pub use page::*;
pub use publish_state::*;
pub use section::*;
pub use section_type::*;
pub use site::*;
pub use theme::*;

mod block;
mod block_type;
mod button_style;
mod media;
mod page;
mod publish_state;
mod section;
mod section_type;
mod site;
mod theme;
