//! splash-bootstrap - 统一任务启动骨架
//!
//! 加载配置、初始化日志、执行一次任务并映射退出码

mod runtime;
mod starter;

pub use runtime::*;
pub use starter::*;
