//! 源文件读取
//!
//! 检查扩展名并读取源文件内容

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::SOURCE_EXTENSION;
use crate::i18n::{format_message, messages, Locale};

/// 源文件错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// 文件不存在
    NotFound { path: PathBuf },
    /// 扩展名不是源码扩展名
    InvalidExtension { path: PathBuf },
    /// 其他读取错误
    Io { path: PathBuf, message: String },
}

impl SourceError {
    /// 出错的文件路径
    pub fn path(&self) -> &Path {
        match self {
            SourceError::NotFound { path }
            | SourceError::InvalidExtension { path }
            | SourceError::Io { path, .. } => path,
        }
    }

    /// 本地化消息
    pub fn localized(&self, locale: Locale) -> String {
        let path = self.path().display().to_string();
        match self {
            SourceError::NotFound { .. } => {
                format_message(messages::ERR_SOURCE_NOT_FOUND, locale, &[&path])
            }
            SourceError::InvalidExtension { .. } => format_message(
                messages::ERR_SOURCE_INVALID_EXTENSION,
                locale,
                &[&path, SOURCE_EXTENSION],
            ),
            SourceError::Io { message, .. } => {
                format_message(messages::ERR_SOURCE_IO, locale, &[&path, message])
            }
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.localized(Locale::En))
    }
}

impl std::error::Error for SourceError {}

/// 判断路径是否带源码扩展名
pub fn has_source_extension(path: &Path) -> bool {
    path.extension().map(|e| e == SOURCE_EXTENSION).unwrap_or(false)
}

/// 读取源文件
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    if !has_source_extension(path) {
        return Err(SourceError::InvalidExtension { path: path.to_path_buf() });
    }

    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SourceError::NotFound { path: path.to_path_buf() },
        _ => SourceError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pebble-source-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_source() {
        let path = temp_file("ok.peb", "if { }");
        assert_eq!(read_source(&path).unwrap(), "if { }");
    }

    #[test]
    fn test_rejects_extension() {
        let path = temp_file("wrong.txt", "if");
        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, SourceError::InvalidExtension { .. }));
        assert!(err.to_string().contains("Use '.peb' files"));
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("definitely/not/here.peb");
        let err = read_source(path).unwrap_err();
        assert_eq!(err, SourceError::NotFound { path: path.to_path_buf() });
        assert_eq!(err.localized(Locale::Zh), "文件未找到: definitely/not/here.peb");
    }
}
