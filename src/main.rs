//! Pebble 词法分析器命令行
//!
//! 主入口点

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use log::debug;

use pebble::batch::BatchScanner;
use pebble::config::{DEFAULT_LOG_LEVEL, LANG_NAME, LOG_ENV, VERSION};
use pebble::i18n::{format_message, get_message, messages, Locale};
use pebble::lexer::{diagnostic, tokenize, tokenize_with, ScanMode, Token, KEYWORDS};
use pebble::source::read_source;

/// 打印 token 列表
fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{}", token);
    }
}

/// 扫描单个文件
fn tokens_file(path: &str, mode: ScanMode, locale: Locale) {
    let source = match read_source(Path::new(path)) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{}", e.localized(locale));
            process::exit(1);
        }
    };

    let tokens = tokenize_with(&source, mode);
    print_tokens(&tokens);

    if mode == ScanMode::Report {
        let diagnostics = diagnostic::collect(&tokens);
        for d in &diagnostics {
            eprintln!("{}", d.message(locale));
        }
        if !diagnostics.is_empty() {
            let count = diagnostics.len().to_string();
            eprintln!("{}", format_message(messages::DIAG_SUMMARY, locale, &[&count]));
        }
    }
}

/// 并行扫描多个文件
fn batch_files(paths: &[&str], locale: Locale) -> Result<(), String> {
    if paths.is_empty() {
        return Err(get_message(messages::MSG_CLI_NO_FILES, locale).to_string());
    }

    let scanner = BatchScanner::with_defaults().map_err(|e| e.to_string())?;
    let paths: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
    let results = scanner.tokenize_files(paths.clone());

    let mut failed = false;
    for (path, result) in paths.iter().zip(results) {
        match result {
            Ok(tokens) => {
                let path = path.display().to_string();
                let count = tokens.len().to_string();
                println!(
                    "{}",
                    format_message(messages::MSG_CLI_BATCH_RESULT, locale, &[&path, &count])
                );
            }
            Err(e) => {
                eprintln!("{}", e.localized(locale));
                failed = true;
            }
        }
    }
    debug!("batch stats: {:?}", scanner.stats());

    if failed {
        process::exit(1);
    }
    Ok(())
}

/// 列出关键字
fn print_keywords() {
    for (lexeme, kind) in KEYWORDS {
        println!("{:<10} {:?}", lexeme, kind);
    }
}

/// REPL 交互模式
fn repl(locale: Locale) {
    use std::io::{self, Write};

    println!("{} {} REPL", LANG_NAME, VERSION);
    println!("{}\n", get_message(messages::MSG_CLI_REPL_BANNER, locale));

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        print_tokens(&tokenize(line));
    }
}

/// 打印帮助信息
fn print_help(locale: Locale) {
    let usage = format_message(messages::MSG_CLI_USAGE, locale, &[LANG_NAME]);
    println!("{}", usage);
    println!();
    println!("{}", get_message(messages::MSG_CLI_COMMANDS, locale));
    println!();
    println!("{}", get_message(messages::MSG_CLI_OPTIONS, locale));
}

/// 打印版本信息
fn print_version(locale: Locale) {
    let msg = format_message(messages::MSG_CLI_VERSION, locale, &[LANG_NAME, VERSION]);
    println!("{}", msg);
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(LOG_ENV, DEFAULT_LOG_LEVEL),
    )
    .init();

    let args: Vec<String> = env::args().collect();

    // 默认语言
    let mut locale = Locale::En;

    // 解析语言选项
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--lang" && i + 1 < args.len() {
            locale = Locale::from_arg(&args[i + 1]);
            i += 2;
        } else {
            break;
        }
    }

    // 剩余参数
    let remaining: Vec<&str> = args[i..].iter().map(|s| s.as_str()).collect();

    match remaining.as_slice() {
        [] | ["repl"] => repl(locale),
        ["help"] | ["--help"] | ["-h"] => print_help(locale),
        ["version"] | ["--version"] | ["-v"] => print_version(locale),
        ["keywords"] => print_keywords(),
        ["tokens", path] => tokens_file(path, ScanMode::Drop, locale),
        ["tokens", "--report", path] => tokens_file(path, ScanMode::Report, locale),
        ["batch", paths @ ..] => {
            if let Err(e) = batch_files(paths, locale) {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
        _ => {
            print_help(locale);
            process::exit(1);
        }
    }
}
