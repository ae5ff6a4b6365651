//! splash-domain - 报表领域类型与纯逻辑
//!
//! 登录记录、时间转换、表格组装与报表命名，不涉及任何 IO

mod builder;
mod login_attempt;
mod table;
mod time;

pub use builder::*;
pub use login_attempt::*;
pub use table::*;
pub use time::*;
