//! Tagger core: pure session state machine and view-model helpers.
mod effect;
mod msg;
mod notice;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use notice::{Notice, NoticeKind};
pub use state::{AppState, SelectionSnapshot};
pub use update::update;
pub use view_model::{AppViewModel, NO_FILE_LABEL};
