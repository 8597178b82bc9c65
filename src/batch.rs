//! 批量扫描
//!
//! 用固定大小的工作线程池并行扫描多段源码。每段源码的扫描彼此独立，
//! 结果按输入顺序返回，与顺序调用 `tokenize_with` 的结果一致。

use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{bounded, Receiver, SendError, Sender};
use dashmap::DashMap;
use log::{debug, warn};
use parking_lot::Mutex;

use crate::config::DEFAULT_QUEUE_CAPACITY;
use crate::lexer::{tokenize_with, ScanMode, Token};
use crate::source::{read_source, SourceError};

type Task = Box<dyn FnOnce() + Send + 'static>;

/// 批量扫描配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// 工作线程数（0 表示使用 CPU 核心数）
    pub num_workers: usize,
    /// 任务队列容量
    pub queue_capacity: usize,
    /// 扫描模式
    pub mode: ScanMode,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            num_workers: 0,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            mode: ScanMode::Drop,
        }
    }
}

impl BatchConfig {
    /// 实际使用的线程数
    pub fn worker_count(&self) -> usize {
        if self.num_workers == 0 {
            num_cpus::get()
        } else {
            self.num_workers
        }
    }
}

/// 累计统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// 已完成的源码段数
    pub sources: usize,
    /// 产生的 token 总数
    pub tokens: usize,
}

/// 并行扫描器
pub struct BatchScanner {
    config: BatchConfig,
    workers: Vec<Worker>,
    sender: Option<Sender<Task>>,
    stats: Arc<Mutex<BatchStats>>,
}

impl BatchScanner {
    /// 创建线程池
    pub fn new(config: BatchConfig) -> std::io::Result<Self> {
        let size = config.worker_count();
        let (sender, receiver) = bounded(config.queue_capacity.max(1));

        let mut workers = Vec::with_capacity(size);
        for id in 0..size {
            workers.push(Worker::new(id, receiver.clone())?);
        }
        debug!("batch scanner started with {} workers", size);

        Ok(Self {
            config,
            workers,
            sender: Some(sender),
            stats: Arc::new(Mutex::new(BatchStats::default())),
        })
    }

    /// 使用默认配置创建线程池
    pub fn with_defaults() -> std::io::Result<Self> {
        Self::new(BatchConfig::default())
    }

    /// 当前配置
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// 累计统计快照
    pub fn stats(&self) -> BatchStats {
        *self.stats.lock()
    }

    /// 并行扫描多段源码，结果按输入顺序返回
    pub fn tokenize_all(&self, sources: Vec<String>) -> Vec<Vec<Token>> {
        let sources: Arc<[String]> = sources.into();
        let mode = self.config.mode;
        let stats = Arc::clone(&self.stats);

        self.run_jobs(sources.len(), move |index| {
            let tokens = tokenize_with(&sources[index], mode);
            record(&stats, &tokens);
            tokens
        })
    }

    /// 并行读取并扫描多个源文件，每个文件单独报告错误
    pub fn tokenize_files(&self, paths: Vec<PathBuf>) -> Vec<Result<Vec<Token>, SourceError>> {
        let paths: Arc<[PathBuf]> = paths.into();
        let mode = self.config.mode;
        let stats = Arc::clone(&self.stats);

        self.run_jobs(paths.len(), move |index| -> Result<Vec<Token>, SourceError> {
            let source = read_source(&paths[index])?;
            let tokens = tokenize_with(&source, mode);
            record(&stats, &tokens);
            Ok(tokens)
        })
    }

    /// 把 `0..count` 分发给工作线程，按下标收集结果
    fn run_jobs<T, F>(&self, count: usize, job: F) -> Vec<T>
    where
        T: Send + Sync + 'static,
        F: Fn(usize) -> T + Send + Sync + 'static,
    {
        if count == 0 {
            return Vec::new();
        }

        let job = Arc::new(job);
        let results: Arc<DashMap<usize, T>> = Arc::new(DashMap::with_capacity(count));
        let (done_tx, done_rx) = bounded(count);

        for index in 0..count {
            let job = Arc::clone(&job);
            let results = Arc::clone(&results);
            let done = done_tx.clone();
            let task: Task = Box::new(move || {
                results.insert(index, job(index));
                let _ = done.send(index);
            });
            self.execute(task);
        }
        drop(done_tx);

        // 所有任务闭包被释放后 recv 返回错误
        for _ in 0..count {
            match done_rx.recv() {
                Ok(index) => debug!("batch job {} finished", index),
                Err(_) => break,
            }
        }

        (0..count)
            .map(|index| match results.remove(&index) {
                Some((_, value)) => value,
                None => {
                    warn!("batch job {} was lost, scanning inline", index);
                    job(index)
                }
            })
            .collect()
    }

    /// 提交任务，线程池不可用时在当前线程执行
    fn execute(&self, task: Task) {
        match &self.sender {
            Some(sender) => {
                if let Err(SendError(task)) = sender.send(task) {
                    warn!("batch workers unavailable, running job inline");
                    task();
                }
            }
            None => task(),
        }
    }
}

impl Drop for BatchScanner {
    fn drop(&mut self) {
        // 关闭队列，工作线程在 recv 出错后退出
        self.sender.take();
        for worker in &mut self.workers {
            if let Some(thread) = worker.thread.take() {
                let _ = thread.join();
            }
        }
        debug!("batch scanner stopped");
    }
}

fn record(stats: &Mutex<BatchStats>, tokens: &[Token]) {
    let mut stats = stats.lock();
    stats.sources += 1;
    stats.tokens += tokens.len();
}

struct Worker {
    thread: Option<JoinHandle<()>>,
}

impl Worker {
    fn new(id: usize, receiver: Receiver<Task>) -> std::io::Result<Self> {
        let thread = std::thread::Builder::new()
            .name(format!("scan-worker-{}", id))
            .spawn(move || {
                while let Ok(task) = receiver.recv() {
                    task();
                }
            })?;
        Ok(Self { thread: Some(thread) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{tokenize, TokenKind};

    fn config(num_workers: usize, mode: ScanMode) -> BatchConfig {
        BatchConfig {
            num_workers,
            queue_capacity: 2,
            mode,
        }
    }

    #[test]
    fn test_matches_sequential_order() {
        let sources: Vec<String> = (0..50)
            .map(|i| match i % 4 {
                0 => "if x <= 3 { print x }".to_string(),
                1 => "!==<=>=<>!=".to_string(),
                2 => format!("def f{}() {{ return }}", i),
                _ => " ".repeat(i),
            })
            .collect();

        let scanner = BatchScanner::new(config(4, ScanMode::Drop)).unwrap();
        let batched = scanner.tokenize_all(sources.clone());

        assert_eq!(batched.len(), sources.len());
        for (source, tokens) in sources.iter().zip(&batched) {
            assert_eq!(tokens, &tokenize(source));
        }

        let stats = scanner.stats();
        assert_eq!(stats.sources, 50);
        assert_eq!(stats.tokens, batched.iter().map(Vec::len).sum::<usize>());
    }

    #[test]
    fn test_report_mode_is_forwarded() {
        let scanner = BatchScanner::new(config(2, ScanMode::Report)).unwrap();
        let batched = scanner.tokenize_all(vec!["orand".to_string()]);
        assert_eq!(batched, vec![vec![Token::new(TokenKind::UnknownIdentifier, "orand")]]);
    }

    #[test]
    fn test_empty_batch() {
        let scanner = BatchScanner::new(config(1, ScanMode::Drop)).unwrap();
        assert!(scanner.tokenize_all(Vec::new()).is_empty());
        assert_eq!(scanner.stats(), BatchStats::default());
    }

    #[test]
    fn test_tokenize_files_reports_per_file() {
        let dir = std::env::temp_dir().join(format!("pebble-batch-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let good = dir.join("good.peb");
        std::fs::write(&good, "while { break }").unwrap();
        let missing = dir.join("missing.peb");
        let wrong = dir.join("notes.txt");

        let scanner = BatchScanner::new(config(3, ScanMode::Drop)).unwrap();
        let results = scanner.tokenize_files(vec![good, missing.clone(), wrong.clone()]);

        assert_eq!(results[0].as_ref().map(Vec::len), Ok(4));
        assert_eq!(results[1], Err(SourceError::NotFound { path: missing }));
        assert_eq!(results[2], Err(SourceError::InvalidExtension { path: wrong }));
    }

    #[test]
    fn test_default_worker_count() {
        assert!(BatchConfig::default().worker_count() >= 1);
        assert_eq!(config(3, ScanMode::Drop).worker_count(), 3);
    }
}
