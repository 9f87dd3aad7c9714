//! 国际象棋局面核心库
//!
//! 包含:
//! - 棋子、阵营、格子等核心数据结构
//! - 8x8 棋盘模型与位棋盘工具
//! - FEN 解析和生成
//! - 绘制指令生成（棋盘格、棋子贴图）

mod bitboard;
mod board;
mod constants;
mod error;
mod fen;
mod piece;
mod render;

pub use bitboard::{
    anti_diagonal_mask, clear_bit, count_bits, diagonal_mask, file_mask, format_bitboard, lsb,
    msb, rank_mask, set_bit,
};
pub use board::Board;
pub use constants::*;
pub use error::{ChessError, LoadError};
pub use fen::{read_fen_file, CastlingRights, Fen, FenRecord, STARTING_FEN};
pub use piece::{Piece, PieceType, Side, Square};
pub use render::{frame, paint_board, place_pieces, DrawCommand, Shade};
