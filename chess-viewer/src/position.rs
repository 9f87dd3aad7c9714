//! 启动时读取的局面

use anyhow::{Context, Result};
use bevy::prelude::*;
use chess_core::{place_pieces, read_fen_file, Fen, FenRecord};

use crate::settings::ViewerSettings;

/// 当前显示的局面
#[derive(Resource, Clone, Debug)]
pub struct LoadedPosition {
    /// 棋子布局字段
    pub placement: String,
    /// 完整解析结果；非严格模式下解析失败时为 `None`
    pub record: Option<FenRecord>,
}

impl LoadedPosition {
    /// 按设置读取并校验 FEN 文件
    pub fn load(settings: &ViewerSettings) -> Result<Self> {
        let raw = read_fen_file(&settings.fen_path)
            .with_context(|| format!("读取 FEN 文件失败: {:?}", settings.fen_path))?;
        let position = Self::from_fen(&raw, settings.strict_placement)?;
        tracing::info!("已加载局面: {}", position.placement);
        Ok(position)
    }

    /// 从 FEN 字符串构建
    ///
    /// 只有棋子布局字段决定能否启动：严格模式下要求 8 行 x 8 列，
    /// 非严格模式只要求棋子字符都能识别。其余字段解析失败时只记录警告。
    pub fn from_fen(raw: &str, strict: bool) -> Result<Self> {
        let placement = Fen::placement_field(raw)?.to_string();

        // 提前暴露无法识别的棋子字符，避免在绘制时才失败
        place_pieces(&placement, 1).with_context(|| format!("无法绘制棋子布局: {}", placement))?;

        if strict {
            Fen::parse_placement(&placement)
                .with_context(|| format!("棋子布局校验失败: {}", placement))?;
        }

        let record = match Fen::parse(raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("FEN 其余字段无效，只绘制棋子布局: {}", e);
                None
            }
        };

        if let Some(record) = &record {
            tracing::info!(
                "走子方: {:?}, 易位权: {}, 回合: {}",
                record.side_to_move,
                record.castling,
                record.fullmove_number
            );
            tracing::debug!("\n{}", record.board);
        }

        Ok(Self { placement, record })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Side, STARTING_FEN};

    #[test]
    fn test_from_full_fen() {
        let position = LoadedPosition::from_fen(STARTING_FEN, true).unwrap();
        assert_eq!(position.placement, "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
        let record = position.record.unwrap();
        assert_eq!(record.side_to_move, Side::White);
        assert_eq!(record.board.count(), 32);
    }

    #[test]
    fn test_strict_rejects_short_rank() {
        assert!(LoadedPosition::from_fen("7/8/8/8/8/8/8/8", true).is_err());
    }

    #[test]
    fn test_strict_ignores_bad_trailing_fields() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1";
        let position = LoadedPosition::from_fen(fen, true).unwrap();
        assert_eq!(position.placement, "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
        assert!(position.record.is_none());

        let extra = format!("{} trailing junk", STARTING_FEN);
        assert!(LoadedPosition::from_fen(&extra, true).is_ok());
    }

    #[test]
    fn test_lenient_accepts_short_rank() {
        let position = LoadedPosition::from_fen("7/8/8/8/8/8/8/8", false).unwrap();
        assert!(position.record.is_none());
        assert_eq!(position.placement, "7/8/8/8/8/8/8/8");
    }

    #[test]
    fn test_unknown_symbol_is_rejected_in_both_modes() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNZ";
        assert!(LoadedPosition::from_fen(fen, true).is_err());
        assert!(LoadedPosition::from_fen(fen, false).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let fen_path = dir.path().join("fen.txt");
        std::fs::write(&fen_path, format!("{}\n\n", STARTING_FEN)).unwrap();

        let settings = ViewerSettings {
            fen_path,
            ..Default::default()
        };
        let position = LoadedPosition::load(&settings).unwrap();
        assert!(position.record.is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let settings = ViewerSettings {
            fen_path: "definitely/not/here.txt".into(),
            ..Default::default()
        };
        assert!(LoadedPosition::load(&settings).is_err());
    }
}
