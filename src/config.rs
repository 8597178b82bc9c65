//! 配置常量模块
//!
//! 所有可配置的语言相关常量都在这里定义，便于后期修改

/// 语言名称
pub const LANG_NAME: &str = "Pebble";

/// 源码文件扩展名
pub const SOURCE_EXTENSION: &str = "peb";

/// 日志过滤环境变量
pub const LOG_ENV: &str = "PEBBLE_LOG";

/// 默认日志级别
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// 批量扫描任务队列容量
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
