//! 绘制指令生成
//!
//! 把棋盘格和棋子布局转换为与图形库无关的绘制指令列表。
//! 坐标以像素为单位，原点在左上角。

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;
use crate::error::ChessError;
use crate::fen::Fen;
use crate::piece::{Piece, Square};

/// 格子颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    pub fn of(square: Square) -> Self {
        if square.is_light() {
            Shade::Light
        } else {
            Shade::Dark
        }
    }
}

/// 单条绘制指令
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// 填充一个格子
    FillSquare {
        square: Square,
        shade: Shade,
        x: u32,
        y: u32,
        size: u32,
    },
    /// 在 (x, y) 处贴一张棋子图片
    ///
    /// `rank` / `file` 不保证落在棋盘内。
    BlitPiece {
        piece: Piece,
        rank: u32,
        file: u32,
        x: u32,
        y: u32,
        size: u32,
    },
}

impl DrawCommand {
    /// 左上角像素坐标
    pub fn origin(&self) -> (u32, u32) {
        match *self {
            DrawCommand::FillSquare { x, y, .. } | DrawCommand::BlitPiece { x, y, .. } => (x, y),
        }
    }

    pub fn size(&self) -> u32 {
        match *self {
            DrawCommand::FillSquare { size, .. } | DrawCommand::BlitPiece { size, .. } => size,
        }
    }
}

/// 绘制 64 个棋盘格，行优先
pub fn paint_board(square_size: u32) -> Vec<DrawCommand> {
    let n = BOARD_SIZE as u32;
    (0..n)
        .flat_map(|rank| (0..n).map(move |file| (rank, file)))
        .map(|(rank, file)| {
            let square = Square::new_unchecked(rank as u8, file as u8);
            DrawCommand::FillSquare {
                square,
                shade: Shade::of(square),
                x: file * square_size,
                y: rank * square_size,
                size: square_size,
            }
        })
        .collect()
}

/// 按棋子布局生成贴图指令
///
/// 只使用第一个空白分隔的片段。`/` 换到下一行并把列号归零，数字跳过相应列数，
/// 其他字符按棋子查表。不检查行列是否越界。
pub fn place_pieces(placement: &str, square_size: u32) -> Result<Vec<DrawCommand>, ChessError> {
    let placement = Fen::placement_field(placement)?;
    let mut commands = Vec::with_capacity(32);
    let mut rank = 0u32;
    let mut file = 0u32;

    for (offset, c) in placement.char_indices() {
        if c == '/' {
            rank += 1;
            file = 0;
        } else if let Some(skip) = c.to_digit(10) {
            file += skip;
        } else {
            let piece =
                Piece::from_fen_char(c).ok_or(ChessError::UnknownPiece { symbol: c, offset })?;
            commands.push(DrawCommand::BlitPiece {
                piece,
                rank,
                file,
                x: file.saturating_mul(square_size),
                y: rank.saturating_mul(square_size),
                size: square_size,
            });
            file += 1;
        }
    }

    Ok(commands)
}

/// 一帧的完整绘制指令：先画棋盘，再画棋子
pub fn frame(placement: &str, square_size: u32) -> Result<Vec<DrawCommand>, ChessError> {
    let mut commands = paint_board(square_size);
    commands.extend(place_pieces(placement, square_size)?);
    Ok(commands)
}
