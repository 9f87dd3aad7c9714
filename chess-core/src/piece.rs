//! 棋子定义

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;
use crate::error::ChessError;

/// 棋子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// 所有棋子类型，按 FEN 字符顺序 `PNBRQK`
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// 大写字母
    pub fn letter(&self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    /// 获取 FEN 字符（白方大写，黑方小写）
    pub fn to_fen_char(&self, side: Side) -> char {
        let c = self.letter();
        match side {
            Side::White => c,
            Side::Black => c.to_ascii_lowercase(),
        }
    }

    /// 从 FEN 字符解析
    pub fn from_fen_char(c: char) -> Option<(PieceType, Side)> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        let piece_type = match c.to_ascii_uppercase() {
            'P' => PieceType::Pawn,
            'N' => PieceType::Knight,
            'B' => PieceType::Bishop,
            'R' => PieceType::Rook,
            'Q' => PieceType::Queen,
            'K' => PieceType::King,
            _ => return None,
        };
        Some((piece_type, side))
    }
}

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 白方（大写字母）
    White,
    /// 黑方（小写字母）
    Black,
}

impl Side {
    /// 走子方字段字符
    pub fn to_fen_char(&self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }

    pub fn from_fen_char(c: char) -> Option<Side> {
        match c {
            'w' => Some(Side::White),
            'b' => Some(Side::Black),
            _ => None,
        }
    }

    /// 图片文件名前缀
    pub fn asset_prefix(&self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }
}

/// 棋子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub side: Side,
}

impl Piece {
    pub fn new(piece_type: PieceType, side: Side) -> Self {
        Self { piece_type, side }
    }

    /// 全部 12 种棋子，白方在前
    pub fn all() -> impl Iterator<Item = Piece> {
        [Side::White, Side::Black].into_iter().flat_map(|side| {
            PieceType::ALL
                .into_iter()
                .map(move |piece_type| Piece::new(piece_type, side))
        })
    }

    pub fn to_fen_char(&self) -> char {
        self.piece_type.to_fen_char(self.side)
    }

    pub fn from_fen_char(c: char) -> Option<Piece> {
        PieceType::from_fen_char(c).map(|(piece_type, side)| Piece { piece_type, side })
    }

    /// 棋子图片文件名，例如 `wP.png`、`bN.png`
    pub fn asset_file_name(&self) -> String {
        format!("{}{}.png", self.side.asset_prefix(), self.piece_type.letter())
    }
}

/// 棋盘格子
///
/// `rank` 为屏幕行号，0 是最上面一行（FEN 中的第 8 横线）；
/// `file` 为列号，0 是最左边一列（a 线）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub rank: u8,
    pub file: u8,
}

impl Square {
    /// 创建新格子
    pub fn new(rank: u8, file: u8) -> Option<Self> {
        if (rank as usize) < BOARD_SIZE && (file as usize) < BOARD_SIZE {
            Some(Self { rank, file })
        } else {
            None
        }
    }

    /// 创建新格子（不检查边界，内部使用）
    pub const fn new_unchecked(rank: u8, file: u8) -> Self {
        Self { rank, file }
    }

    pub fn is_valid(&self) -> bool {
        (self.rank as usize) < BOARD_SIZE && (self.file as usize) < BOARD_SIZE
    }

    /// 是否为浅色格，(0, 0) 为浅色
    pub fn is_light(&self) -> bool {
        (self.rank ^ self.file) & 1 == 0
    }

    /// 转换为数组索引（行优先）
    pub fn to_index(&self) -> usize {
        self.rank as usize * BOARD_SIZE + self.file as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Self {
                rank: (index / BOARD_SIZE) as u8,
                file: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }

    /// 位棋盘下标，a1 = 0，h8 = 63
    pub fn bit_index(&self) -> u32 {
        (BOARD_SIZE as u32 - 1 - self.rank as u32) * BOARD_SIZE as u32 + self.file as u32
    }

    /// 从代数记法解析，例如 `e3`
    pub fn from_algebraic(name: &str) -> Result<Self, ChessError> {
        let invalid = || ChessError::InvalidSquare {
            name: name.to_string(),
        };
        let mut chars = name.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(invalid());
        }
        let file = file as u8 - b'a';
        let rank = 7 - (rank as u8 - b'1');
        Ok(Self::new_unchecked(rank, file))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file) as char,
            (b'8' - self.rank) as char
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_piece_fen_char() {
        let white_king = Piece::new(PieceType::King, Side::White);
        assert_eq!(white_king.to_fen_char(), 'K');

        let black_knight = Piece::new(PieceType::Knight, Side::Black);
        assert_eq!(black_knight.to_fen_char(), 'n');

        assert_eq!(
            Piece::from_fen_char('R'),
            Some(Piece::new(PieceType::Rook, Side::White))
        );
        assert_eq!(
            Piece::from_fen_char('q'),
            Some(Piece::new(PieceType::Queen, Side::Black))
        );
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('3'), None);
        assert_eq!(Piece::from_fen_char('/'), None);
    }

    #[test]
    fn test_all_pieces_have_distinct_assets() {
        let names: HashSet<String> = Piece::all().map(|p| p.asset_file_name()).collect();
        assert_eq!(names.len(), 12);
        assert!(names.contains("wP.png"));
        assert!(names.contains("bN.png"));
        assert!(names.contains("bK.png"));
    }

    #[test]
    fn test_square_valid() {
        assert!(Square::new(0, 0).is_some());
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn test_square_shade() {
        assert!(Square::new_unchecked(0, 0).is_light());
        assert!(!Square::new_unchecked(0, 1).is_light());
        assert!(!Square::new_unchecked(1, 0).is_light());
        assert!(Square::new_unchecked(7, 7).is_light());
    }

    #[test]
    fn test_square_shade_out_of_range() {
        assert!(!Square::new_unchecked(200, 100).is_light());
        assert!(Square::new_unchecked(255, 255).is_light());
        assert!(!Square::new_unchecked(255, 0).is_light());
    }

    #[test]
    fn test_square_algebraic() {
        let e3 = Square::from_algebraic("e3").unwrap();
        assert_eq!(e3, Square::new_unchecked(5, 4));
        assert_eq!(e3.to_string(), "e3");
        assert_eq!(Square::new_unchecked(0, 0).to_string(), "a8");
        assert_eq!(Square::new_unchecked(7, 7).to_string(), "h1");

        assert!(Square::from_algebraic("i1").is_err());
        assert!(Square::from_algebraic("a9").is_err());
        assert!(Square::from_algebraic("e").is_err());
        assert!(Square::from_algebraic("e33").is_err());
    }

    #[test]
    fn test_square_bit_index() {
        assert_eq!(Square::from_algebraic("a1").unwrap().bit_index(), 0);
        assert_eq!(Square::from_algebraic("h8").unwrap().bit_index(), 63);
        assert_eq!(Square::from_algebraic("e2").unwrap().bit_index(), 12);
    }
}
