//! 查看器设置模块
//!
//! 提供设置数据结构、持久化和 Bevy Resource 集成

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bevy::log::Level;
use bevy::prelude::*;
use chess_core::{BOARD_SIZE, DEFAULT_ASSET_DIR, DEFAULT_FEN_PATH, WINDOW_SIZE};
use serde::{Deserialize, Serialize};

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level(self) -> Level {
        match self {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// 查看器设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
#[serde(default)]
pub struct ViewerSettings {
    /// FEN 文件路径
    pub fen_path: PathBuf,
    /// 棋子图片目录
    pub asset_dir: PathBuf,
    /// 窗口边长（像素）
    pub window_size: u32,
    /// 浅色格 RGB
    pub light_color: [u8; 3],
    /// 深色格 RGB
    pub dark_color: [u8; 3],
    /// 启动时严格校验棋子布局（8 行 x 8 列）
    pub strict_placement: bool,
    /// 日志级别
    pub log_level: LogLevel,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            fen_path: PathBuf::from(DEFAULT_FEN_PATH),
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            window_size: WINDOW_SIZE,
            light_color: [255, 255, 255],
            dark_color: [118, 150, 86],
            strict_placement: true,
            log_level: LogLevel::default(),
        }
    }
}

impl ViewerSettings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("chess-viewer");
            path.push("settings.json");
            path
        })
    }

    /// 从默认位置加载设置
    ///
    /// 第二个返回值是回退到默认设置的原因。加载发生在日志系统初始化之前，
    /// 由调用方在日志就绪后输出。
    pub fn load() -> (Self, Option<String>) {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => (Self::default(), Some("无法获取配置目录，使用默认设置".to_string())),
        }
    }

    /// 从指定文件加载设置
    ///
    /// 文件不存在时写入一份默认设置；读取或解析失败时回退到默认值。
    pub fn load_from(path: &Path) -> (Self, Option<String>) {
        if !path.exists() {
            let settings = Self::default();
            let notice = settings
                .save_to(path)
                .err()
                .map(|e| format!("无法写入默认设置: {:#}", e));
            return (settings, notice);
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => (settings, None),
                Err(e) => (
                    Self::default(),
                    Some(format!("设置文件格式无效: {}，使用默认设置", e)),
                ),
            },
            Err(e) => (
                Self::default(),
                Some(format!("无法读取设置文件: {}，使用默认设置", e)),
            ),
        }
    }

    /// 保存设置到指定文件
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        std::fs::write(path, content).with_context(|| format!("写入设置文件失败: {:?}", path))?;
        Ok(())
    }

    /// 格子边长（像素）
    pub fn square_size(&self) -> u32 {
        self.window_size / BOARD_SIZE as u32
    }
}
