//! 中文消息

use super::messages::*;

/// 获取中文消息
pub fn get(key: &str) -> &'static str {
    match key {
        // 诊断
        DIAG_UNRECOGNIZED_CHARACTER => "第 {} 个标记: 跳过无法识别的字符 '{}'",
        DIAG_UNKNOWN_IDENTIFIER => "第 {} 个标记: '{}' 不是关键字，已跳过",
        DIAG_SUMMARY => "共跳过 {} 项",

        // 源文件错误
        ERR_SOURCE_NOT_FOUND => "文件未找到: {}",
        ERR_SOURCE_INVALID_EXTENSION => "无效的文件扩展名: '{}'。请使用 '.{}' 文件",
        ERR_SOURCE_IO => "无法读取文件 {}: {}",

        // CLI 消息
        MSG_CLI_USAGE => "用法: {} <命令> [选项] <文件>",
        MSG_CLI_VERSION => "{} 版本 {}",
        MSG_CLI_COMMANDS => "命令:\n  tokens [--report] <文件>  打印源文件的标记\n  batch <文件>...           并行扫描多个文件\n  keywords                  列出保留字\n  repl                      交互式扫描\n  help                      显示帮助\n  version                   显示版本",
        MSG_CLI_OPTIONS => "选项:\n  --lang <en|zh|ja>  设置语言（默认: en）",
        MSG_CLI_REPL_BANNER => "输入 'exit' 退出。",
        MSG_CLI_BATCH_RESULT => "{}: {} 个标记",
        MSG_CLI_NO_FILES => "没有输入文件",

        // 未知消息键
        _ => "未知的消息键",
    }
}
