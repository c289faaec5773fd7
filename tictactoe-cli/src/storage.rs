//! 本地存储
//!
//! 保存胜负统计和未完成的对局，跨进程恢复

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tictactoe_core::{Board, Difficulty, Snapshot};

use crate::scores::Scoreboard;

const SCORES_FILE: &str = "scores.json";
const SESSION_FILE: &str = "session.json";

/// 暂停时保存的对局
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSession {
    /// 棋盘快照（反序列化时校验）
    pub board: Board,
    /// AI 难度
    pub difficulty: Difficulty,
    /// 保存时间
    pub saved_at: DateTime<Utc>,
}

/// 存储管理器
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    /// 使用系统数据目录创建
    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .context("无法获取应用数据目录")?
            .join("tictactoe");
        Self::with_dir(data_dir)
    }

    /// 使用指定目录创建
    pub fn with_dir(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();

        // 确保目录存在
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir)
                .with_context(|| format!("无法创建存储目录: {:?}", data_dir))?;
        }

        Ok(Self { data_dir })
    }

    /// 获取存储目录路径
    pub fn data_directory(&self) -> &Path {
        &self.data_dir
    }

    /// 加载胜负统计，文件缺失或损坏时从零开始
    pub fn load_scores(&self) -> Scoreboard {
        let path = self.data_dir.join(SCORES_FILE);
        if !path.exists() {
            return Scoreboard::default();
        }

        let parsed = fs::read_to_string(&path)
            .with_context(|| format!("读取文件失败: {:?}", path))
            .and_then(|content| serde_json::from_str(&content).context("解析统计文件失败"));

        match parsed {
            Ok(scores) => scores,
            Err(e) => {
                tracing::warn!("统计文件无效，重新计数: {:#}", e);
                Scoreboard::default()
            }
        }
    }

    /// 保存胜负统计
    pub fn save_scores(&self, scores: &Scoreboard) -> Result<()> {
        let path = self.data_dir.join(SCORES_FILE);
        let content = serde_json::to_string_pretty(scores).context("序列化统计失败")?;
        fs::write(&path, content).with_context(|| format!("写入文件失败: {:?}", path))?;
        tracing::debug!("统计已保存: {}", scores);
        Ok(())
    }

    /// 保存未完成的对局
    pub fn save_session(&self, session: &SavedSession) -> Result<()> {
        let path = self.data_dir.join(SESSION_FILE);
        let content = serde_json::to_string_pretty(session).context("序列化对局失败")?;
        fs::write(&path, content).with_context(|| format!("写入文件失败: {:?}", path))?;
        tracing::info!("对局已保存: {}", Snapshot::encode(&session.board));
        Ok(())
    }

    /// 加载未完成的对局，没有保存时返回 None
    pub fn load_session(&self) -> Result<Option<SavedSession>> {
        let path = self.data_dir.join(SESSION_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&path).with_context(|| format!("读取文件失败: {:?}", path))?;
        let session = serde_json::from_str(&content).context("解析对局文件失败")?;
        Ok(Some(session))
    }

    /// 删除保存的对局
    pub fn clear_session(&self) -> Result<()> {
        let path = self.data_dir.join(SESSION_FILE);

        if path.exists() {
            fs::remove_file(&path).with_context(|| format!("删除文件失败: {:?}", path))?;
            tracing::debug!("已删除保存的对局");
        }

        Ok(())
    }
}
