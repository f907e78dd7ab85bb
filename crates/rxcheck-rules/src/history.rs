use crate::{HistoryEntry, Result};
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// 查询历史日志
///
/// 以 JSON Lines 格式追加写入，每行一条记录，已有内容从不改写。
pub struct HistoryLog {
    /// 日志文件路径
    path: PathBuf,

    /// 进程内串行化写入
    write_lock: Mutex<()>,
}

impl HistoryLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 确保日志文件存在（含父目录）
    pub async fn ensure(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        Ok(())
    }

    /// 追加一条记录
    pub async fn append(&self, entry: &HistoryEntry) -> Result<()> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().await;
        self.ensure().await?;

        let mut file = OpenOptions::new().append(true).open(&self.path).await?;
        file.write_all(&line).await?;
        file.flush().await?;

        debug!(
            drug_a = %entry.drug_a,
            drug_b = %entry.drug_b,
            found = entry.found,
            "History entry appended"
        );
        Ok(())
    }

    /// 读取最近的 `limit` 条记录（按时间顺序）
    ///
    /// `limit <= 0` 时返回全部记录；文件不存在时返回空列表。
    pub async fn recent(&self, limit: i64) -> Result<Vec<HistoryEntry>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<HistoryEntry>(line) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    warn!(line = index + 1, error = %e, "Skipping unreadable history line");
                }
            }
        }

        if limit > 0 {
            let keep = usize::try_from(limit).unwrap_or(usize::MAX);
            let skip = entries.len().saturating_sub(keep);
            entries.drain(..skip);
        }
        Ok(entries)
    }
}
