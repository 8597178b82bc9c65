//! 消息键定义
//!
//! 所有本地化消息的键，各语言表以此为索引

// 诊断消息
pub const DIAG_UNRECOGNIZED_CHARACTER: &str = "diag.unrecognized_character";
pub const DIAG_UNKNOWN_IDENTIFIER: &str = "diag.unknown_identifier";
pub const DIAG_SUMMARY: &str = "diag.summary";

// 源文件错误
pub const ERR_SOURCE_NOT_FOUND: &str = "err.source.not_found";
pub const ERR_SOURCE_INVALID_EXTENSION: &str = "err.source.invalid_extension";
pub const ERR_SOURCE_IO: &str = "err.source.io";

// CLI 消息
pub const MSG_CLI_USAGE: &str = "cli.usage";
pub const MSG_CLI_VERSION: &str = "cli.version";
pub const MSG_CLI_COMMANDS: &str = "cli.commands";
pub const MSG_CLI_OPTIONS: &str = "cli.options";
pub const MSG_CLI_REPL_BANNER: &str = "cli.repl_banner";
pub const MSG_CLI_BATCH_RESULT: &str = "cli.batch_result";
pub const MSG_CLI_NO_FILES: &str = "cli.no_files";
