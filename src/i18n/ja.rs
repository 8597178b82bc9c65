//! 日本語メッセージ

use super::messages::*;

/// 日本語メッセージを取得
pub fn get(key: &str) -> &'static str {
    match key {
        // 診断
        DIAG_UNRECOGNIZED_CHARACTER => "トークン {}: 認識できない文字 '{}' をスキップしました",
        DIAG_UNKNOWN_IDENTIFIER => "トークン {}: '{}' はキーワードではないためスキップしました",
        DIAG_SUMMARY => "{} 件スキップしました",

        // ソースエラー
        ERR_SOURCE_NOT_FOUND => "ファイルが見つかりません: {}",
        ERR_SOURCE_INVALID_EXTENSION => "無効なファイル拡張子: '{}'。'.{}' ファイルを使用してください",
        ERR_SOURCE_IO => "{} を読み込めません: {}",

        // CLI メッセージ
        MSG_CLI_USAGE => "使い方: {} <コマンド> [オプション] <ファイル>",
        MSG_CLI_VERSION => "{} バージョン {}",
        MSG_CLI_COMMANDS => "コマンド:\n  tokens [--report] <ファイル>  ソースファイルのトークンを表示\n  batch <ファイル>...           複数ファイルを並列にスキャン\n  keywords                      予約語を一覧表示\n  repl                          対話モード\n  help                          ヘルプを表示\n  version                       バージョンを表示",
        MSG_CLI_OPTIONS => "オプション:\n  --lang <en|zh|ja>  言語を設定（デフォルト: en）",
        MSG_CLI_REPL_BANNER => "'exit' で終了します。",
        MSG_CLI_BATCH_RESULT => "{}: {} トークン",
        MSG_CLI_NO_FILES => "入力ファイルがありません",

        // 不明なメッセージキー
        _ => "不明なメッセージキー",
    }
}
