//! FEN 格式解析和生成
//!
//! 国际象棋 FEN 格式：
//! `<棋盘> <走子方> <易位权> <吃过路兵格> <半回合计数> <回合数>`
//!
//! 示例：
//! `rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::error::{ChessError, LoadError};
use crate::piece::{Piece, Side, Square};

/// 初始局面 FEN
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// 易位权
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            white_king_side: true,
            white_queen_side: true,
            black_king_side: true,
            black_queen_side: true,
        }
    }

    /// 解析 `KQkq` 子集或 `-`
    pub fn parse(field: &str) -> Result<Self, ChessError> {
        let mut rights = Self::default();
        if field == "-" {
            return Ok(rights);
        }
        if field.is_empty() {
            return Err(ChessError::invalid_fen("Empty castling field"));
        }
        for c in field.chars() {
            let flag = match c {
                'K' => &mut rights.white_king_side,
                'Q' => &mut rights.white_queen_side,
                'k' => &mut rights.black_king_side,
                'q' => &mut rights.black_queen_side,
                _ => {
                    return Err(ChessError::invalid_fen(format!(
                        "Invalid castling character: {}",
                        c
                    )))
                }
            };
            if *flag {
                return Err(ChessError::invalid_fen(format!(
                    "Duplicate castling character: {}",
                    c
                )));
            }
            *flag = true;
        }
        Ok(rights)
    }
}

impl std::fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let flags = [
            (self.white_king_side, 'K'),
            (self.white_queen_side, 'Q'),
            (self.black_king_side, 'k'),
            (self.black_queen_side, 'q'),
        ];
        let s: String = flags.iter().filter(|(on, _)| *on).map(|(_, c)| *c).collect();
        if s.is_empty() {
            write!(f, "-")
        } else {
            write!(f, "{}", s)
        }
    }
}

/// 完整 FEN 记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FenRecord {
    pub board: Board,
    pub side_to_move: Side,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// FEN 格式处理
pub struct Fen;

impl Fen {
    /// 取出棋子布局字段（第一个空白分隔的片段）
    pub fn placement_field(raw: &str) -> Result<&str, ChessError> {
        raw.split_whitespace()
            .next()
            .ok_or_else(|| ChessError::invalid_fen("Empty FEN string"))
    }

    /// 解析完整 FEN，缺省字段使用默认值
    pub fn parse(fen: &str) -> Result<FenRecord, ChessError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() {
            return Err(ChessError::invalid_fen("Empty FEN string"));
        }
        if parts.len() > 6 {
            return Err(ChessError::invalid_fen(format!(
                "Expected at most 6 fields, got {}",
                parts.len()
            )));
        }

        let board = Self::parse_placement(parts[0])?;

        let side_to_move = match parts.get(1) {
            Some(field) => {
                let mut chars = field.chars();
                match (chars.next().and_then(Side::from_fen_char), chars.next()) {
                    (Some(side), None) => side,
                    _ => {
                        return Err(ChessError::invalid_fen(format!(
                            "Invalid side to move: {}",
                            field
                        )))
                    }
                }
            }
            None => Side::White,
        };

        let castling = match parts.get(2) {
            Some(field) => CastlingRights::parse(field)?,
            None => CastlingRights::default(),
        };

        let en_passant = match parts.get(3) {
            Some(&"-") | None => None,
            Some(field) => Some(Square::from_algebraic(field)?),
        };

        let halfmove_clock = Self::parse_counter(parts.get(4), 0, "halfmove clock")?;
        let fullmove_number = Self::parse_counter(parts.get(5), 1, "fullmove number")?;

        Ok(FenRecord {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    fn parse_counter(field: Option<&&str>, default: u32, name: &str) -> Result<u32, ChessError> {
        match field {
            Some(s) => s
                .parse()
                .map_err(|_| ChessError::invalid_fen(format!("Invalid {}: {}", name, s))),
            None => Ok(default),
        }
    }

    /// 严格解析棋子布局：8 行，每行恰好 8 列
    pub fn parse_placement(placement: &str) -> Result<Board, ChessError> {
        let mut board = Board::empty();
        let mut rank = 0usize;
        let mut file = 0usize;

        for (offset, c) in placement.char_indices() {
            if c == '/' {
                if file != BOARD_SIZE {
                    return Err(ChessError::invalid_fen(format!(
                        "Rank {} has {} files, expected {}",
                        rank, file, BOARD_SIZE
                    )));
                }
                rank += 1;
                file = 0;
                if rank >= BOARD_SIZE {
                    return Err(ChessError::invalid_fen(format!(
                        "Too many ranks, expected {}",
                        BOARD_SIZE
                    )));
                }
            } else if let Some(skip) = c.to_digit(10) {
                if !(1..=BOARD_SIZE as u32).contains(&skip) {
                    return Err(ChessError::invalid_fen(format!(
                        "Invalid empty-square count: {}",
                        c
                    )));
                }
                file += skip as usize;
                if file > BOARD_SIZE {
                    return Err(ChessError::invalid_fen(format!(
                        "Rank {} has too many files",
                        rank
                    )));
                }
            } else {
                let piece = Piece::from_fen_char(c)
                    .ok_or(ChessError::UnknownPiece { symbol: c, offset })?;
                if file >= BOARD_SIZE {
                    return Err(ChessError::invalid_fen(format!(
                        "Rank {} has too many files",
                        rank
                    )));
                }
                board.set(Square::new_unchecked(rank as u8, file as u8), Some(piece));
                file += 1;
            }
        }

        if rank != BOARD_SIZE - 1 || file != BOARD_SIZE {
            return Err(ChessError::invalid_fen(format!(
                "Expected {} complete ranks, got {} ranks ending at file {}",
                BOARD_SIZE,
                rank + 1,
                file
            )));
        }

        Ok(board)
    }

    /// 将 FEN 记录转换为字符串
    pub fn to_string(record: &FenRecord) -> String {
        let en_passant = record
            .en_passant
            .map(|sq| sq.to_string())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "{} {} {} {} {} {}",
            Self::board_to_string(&record.board),
            record.side_to_move.to_fen_char(),
            record.castling,
            en_passant,
            record.halfmove_clock,
            record.fullmove_number
        )
    }

    /// 将棋盘转换为 FEN 棋子布局字段
    pub fn board_to_string(board: &Board) -> String {
        let mut rows = Vec::with_capacity(BOARD_SIZE);

        for rank in 0..BOARD_SIZE as u8 {
            let mut row = String::new();
            let mut empty_count = 0;

            for file in 0..BOARD_SIZE as u8 {
                if let Some(piece) = board.get(Square::new_unchecked(rank, file)) {
                    if empty_count > 0 {
                        row.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    row.push(piece.to_fen_char());
                } else {
                    empty_count += 1;
                }
            }

            if empty_count > 0 {
                row.push_str(&empty_count.to_string());
            }

            rows.push(row);
        }

        rows.join("/")
    }

    /// 初始局面
    pub fn initial() -> FenRecord {
        FenRecord {
            board: Board::initial(),
            side_to_move: Side::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

/// 读取 FEN 文件，去掉首尾空白
pub fn read_fen_file(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let fen = content.trim();
    if fen.is_empty() {
        return Err(LoadError::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!("已读取 FEN 文件 {:?}: {}", path, fen);
    Ok(fen.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceType;
    use std::io::Write;

    #[test]
    fn test_initial_matches_starting_fen() {
        let state = Fen::parse(STARTING_FEN).unwrap();
        assert_eq!(state, Fen::initial());
        assert_eq!(Fen::to_string(&state), STARTING_FEN);
    }

    #[test]
    fn test_parse_custom_fen() {
        let fen = "rnbqk1nr/pppppppp/8/8/8/4P3/PPPP1PPP/RNBQKBNR b KQkq e3 1 5";
        let state = Fen::parse(fen).unwrap();

        assert_eq!(state.side_to_move, Side::Black);
        assert_eq!(state.castling, CastlingRights::all());
        assert_eq!(state.en_passant, Square::from_algebraic("e3").ok());
        assert_eq!(state.halfmove_clock, 1);
        assert_eq!(state.fullmove_number, 5);
        assert_eq!(state.board.count(), 31);
        assert_eq!(
            state.board.get(Square::from_algebraic("e3").unwrap()),
            Some(Piece::new(PieceType::Pawn, Side::White))
        );
        assert_eq!(Fen::to_string(&state), fen);
    }

    #[test]
    fn test_placement_only_uses_defaults() {
        let state = Fen::parse("8/8/8/4k3/8/8/8/4K3").unwrap();
        assert_eq!(state.side_to_move, Side::White);
        assert_eq!(state.castling, CastlingRights::default());
        assert_eq!(state.en_passant, None);
        assert_eq!(state.halfmove_clock, 0);
        assert_eq!(state.fullmove_number, 1);
        assert_eq!(state.board.count(), 2);
    }

    #[test]
    fn test_placement_field() {
        assert_eq!(
            Fen::placement_field("  8/8/8/8/8/8/8/8 w - - 0 1\n").unwrap(),
            "8/8/8/8/8/8/8/8"
        );
        assert!(Fen::placement_field("   ").is_err());
    }

    #[test]
    fn test_invalid_placement() {
        // 行数不对
        assert!(Fen::parse_placement("8/8/8").is_err());
        assert!(Fen::parse_placement("8/8/8/8/8/8/8/8/8").is_err());

        // 列数不对
        assert!(Fen::parse_placement("9/8/8/8/8/8/8/8").is_err());
        assert!(Fen::parse_placement("7/8/8/8/8/8/8/8").is_err());
        assert!(Fen::parse_placement("ppppppppp/8/8/8/8/8/8/8").is_err());
        assert!(Fen::parse_placement("0p7/8/8/8/8/8/8/8").is_err());

        // 无效字符
        assert_eq!(
            Fen::parse_placement("4x3/8/8/8/8/8/8/8"),
            Err(ChessError::UnknownPiece {
                symbol: 'x',
                offset: 1
            })
        );
    }

    #[test]
    fn test_invalid_fields() {
        let board = "8/8/8/8/8/8/8/8";
        assert!(Fen::parse(&format!("{} x", board)).is_err());
        assert!(Fen::parse(&format!("{} w KQxq", board)).is_err());
        assert!(Fen::parse(&format!("{} w KK", board)).is_err());
        assert!(Fen::parse(&format!("{} w - z9", board)).is_err());
        assert!(Fen::parse(&format!("{} w - - -1", board)).is_err());
        assert!(Fen::parse(&format!("{} w - - 0 1 extra", board)).is_err());
    }

    #[test]
    fn test_board_to_string_roundtrip() {
        let placement = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
        let board = Fen::parse_placement(placement).unwrap();
        assert_eq!(Fen::board_to_string(&board), placement);
    }

    #[test]
    fn test_read_fen_file_trims() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}   ", STARTING_FEN).unwrap();
        assert_eq!(read_fen_file(file.path()).unwrap(), STARTING_FEN);
    }

    #[test]
    fn test_read_fen_file_errors() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            read_fen_file(file.path()),
            Err(LoadError::EmptyInput { .. })
        ));

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_fen_file(dir.path().join("missing.txt")),
            Err(LoadError::Io(_))
        ));
    }
}
