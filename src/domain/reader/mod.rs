//! Reader Context - 阅读上下文
//!
//! 职责:
//! - 视图状态机（选择 / 加载 / 显示）
//! - 列表展示器（计数、取项、滚动、随机跳转）

mod errors;
mod presenter;
mod view_state;

pub use errors::{PresenterError, ViewStateError};
pub use presenter::{jump_message, ListPresenter};
pub use view_state::ViewState;
