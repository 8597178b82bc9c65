//! 国际化模块
//!
//! 提供多语言消息支持，目前支持英文、中文和日文

pub mod messages;
pub mod en;
pub mod zh;
pub mod ja;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// 英文（默认）
    #[default]
    En,
    /// 中文
    Zh,
    /// 日文
    Ja,
}

impl Locale {
    /// 从命令行参数解析语言，无法识别时回退到英文
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "zh" | "cn" | "chinese" => Locale::Zh,
            "ja" | "jp" | "japanese" => Locale::Ja,
            _ => Locale::En,
        }
    }
}

/// 获取指定语言的消息
pub fn get_message(key: &str, locale: Locale) -> &'static str {
    match locale {
        Locale::En => en::get(key),
        Locale::Zh => zh::get(key),
        Locale::Ja => ja::get(key),
    }
}

/// 获取带参数的消息（使用 {} 占位符）
pub fn format_message(key: &str, locale: Locale, args: &[&str]) -> String {
    let mut msg = get_message(key, locale).to_string();
    let mut from = 0;
    for arg in args {
        match msg[from..].find("{}") {
            Some(offset) => {
                let pos = from + offset;
                msg.replace_range(pos..pos + 2, arg);
                from = pos + arg.len();
            }
            None => break,
        }
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::messages::*;

    #[test]
    fn test_format_in_order() {
        let msg = format_message(MSG_CLI_VERSION, Locale::En, &["Pebble", "0.1.0"]);
        assert_eq!(msg, "Pebble version 0.1.0");
    }

    #[test]
    fn test_placeholder_in_argument_not_reused() {
        let msg = format_message(MSG_CLI_BATCH_RESULT, Locale::En, &["{}.peb", "3"]);
        assert_eq!(msg, "{}.peb: 3 tokens");
    }

    #[test]
    fn test_locale_from_arg() {
        assert_eq!(Locale::from_arg("zh"), Locale::Zh);
        assert_eq!(Locale::from_arg("ja"), Locale::Ja);
        assert_eq!(Locale::from_arg("fr"), Locale::En);
    }

    #[test]
    fn test_all_locales_cover_keys() {
        let keys = [
            DIAG_UNRECOGNIZED_CHARACTER,
            DIAG_UNKNOWN_IDENTIFIER,
            DIAG_SUMMARY,
            ERR_SOURCE_NOT_FOUND,
            ERR_SOURCE_INVALID_EXTENSION,
            ERR_SOURCE_IO,
            MSG_CLI_USAGE,
            MSG_CLI_VERSION,
            MSG_CLI_COMMANDS,
            MSG_CLI_OPTIONS,
            MSG_CLI_REPL_BANNER,
            MSG_CLI_BATCH_RESULT,
            MSG_CLI_NO_FILES,
        ];
        for locale in [Locale::En, Locale::Zh, Locale::Ja] {
            let unknown = get_message("no.such.key", locale);
            for key in keys {
                assert_ne!(get_message(key, locale), unknown, "{key} missing for {locale:?}");
            }
        }
    }
}
