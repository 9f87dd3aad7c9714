//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::bitboard::set_bit;
use crate::constants::{BOARD_SIZE, SQUARE_COUNT};
use crate::piece::{Piece, PieceType, Side, Square};

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 8x8 棋盘，索引为 rank * 8 + file，使用 Vec 以支持 serde
    squares: Vec<Option<Piece>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: vec![None; SQUARE_COUNT],
        }
    }

    /// 创建初始棋盘
    pub fn initial() -> Self {
        let mut board = Self::empty();
        let back_rank = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        for (file, piece_type) in back_rank.into_iter().enumerate() {
            let file = file as u8;
            board.set(
                Square::new_unchecked(0, file),
                Some(Piece::new(piece_type, Side::Black)),
            );
            board.set(
                Square::new_unchecked(1, file),
                Some(Piece::new(PieceType::Pawn, Side::Black)),
            );
            board.set(
                Square::new_unchecked(6, file),
                Some(Piece::new(PieceType::Pawn, Side::White)),
            );
            board.set(
                Square::new_unchecked(7, file),
                Some(Piece::new(piece_type, Side::White)),
            );
        }

        board
    }

    /// 获取指定格子的棋子
    pub fn get(&self, square: Square) -> Option<Piece> {
        if square.is_valid() {
            self.squares[square.to_index()]
        } else {
            None
        }
    }

    /// 设置指定格子的棋子，越界时忽略
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        if square.is_valid() {
            self.squares[square.to_index()] = piece;
        }
    }

    /// 获取所有棋子（行优先，从上到下）
    pub fn all_pieces(&self) -> Vec<(Square, Piece)> {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(index, piece)| {
                let piece = (*piece)?;
                Square::from_index(index).map(|square| (square, piece))
            })
            .collect()
    }

    /// 获取指定阵营的所有棋子
    pub fn pieces(&self, side: Side) -> Vec<(Square, Piece)> {
        self.all_pieces()
            .into_iter()
            .filter(|(_, piece)| piece.side == side)
            .collect()
    }

    /// 棋子总数
    pub fn count(&self) -> usize {
        self.squares.iter().filter(|p| p.is_some()).count()
    }

    /// 某一种棋子的位棋盘
    pub fn bitboard(&self, piece: Piece) -> u64 {
        self.all_pieces()
            .into_iter()
            .filter(|(_, p)| *p == piece)
            .fold(0u64, |bb, (square, _)| set_bit(bb, square.bit_index()))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in 0..BOARD_SIZE as u8 {
            write!(f, "{} ", BOARD_SIZE as u8 - rank)?;
            for file in 0..BOARD_SIZE as u8 {
                let c = self
                    .get(Square::new_unchecked(rank, file))
                    .map(|p| p.to_fen_char())
                    .unwrap_or('.');
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")
    }
}
