//! English messages

use super::messages::*;

/// Get English message
pub fn get(key: &str) -> &'static str {
    match key {
        // Diagnostics
        DIAG_UNRECOGNIZED_CHARACTER => "token {}: unrecognized character '{}' skipped",
        DIAG_UNKNOWN_IDENTIFIER => "token {}: '{}' is not a keyword, skipped",
        DIAG_SUMMARY => "{} item(s) skipped",

        // Source errors
        ERR_SOURCE_NOT_FOUND => "File not found: {}",
        ERR_SOURCE_INVALID_EXTENSION => "Invalid file extension: '{}'. Use '.{}' files",
        ERR_SOURCE_IO => "Cannot read {}: {}",

        // CLI messages
        MSG_CLI_USAGE => "Usage: {} <command> [options] <file>",
        MSG_CLI_VERSION => "{} version {}",
        MSG_CLI_COMMANDS => "Commands:\n  tokens [--report] <file>  Print the tokens of a source file\n  batch <file>...           Tokenize files in parallel\n  keywords                  List reserved words\n  repl                      Tokenize lines interactively\n  help                      Show this help message\n  version                   Show version information",
        MSG_CLI_OPTIONS => "Options:\n  --lang <en|zh|ja>  Set language (default: en)",
        MSG_CLI_REPL_BANNER => "Type 'exit' to quit.",
        MSG_CLI_BATCH_RESULT => "{}: {} tokens",
        MSG_CLI_NO_FILES => "No input files",

        // Unknown message key
        _ => "Unknown message key",
    }
}
