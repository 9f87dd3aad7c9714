//! 位棋盘工具
//!
//! 下标约定：a1 = 0，h1 = 7，a8 = 56，h8 = 63。

use crate::constants::BOARD_SIZE;

/// a1-h8 对角线
const MAIN_DIAGONAL: u64 = 0x8040_2010_0804_0201;

/// a8-h1 反对角线
const MAIN_ANTI_DIAGONAL: u64 = 0x0102_0408_1020_4080;

/// 置位，`bit` 必须小于 64
pub fn set_bit(bitboard: u64, bit: u32) -> u64 {
    debug_assert!(bit < 64, "bit index out of range: {}", bit);
    bitboard | (1u64 << bit)
}

/// 清位，`bit` 必须小于 64
pub fn clear_bit(bitboard: u64, bit: u32) -> u64 {
    debug_assert!(bit < 64, "bit index out of range: {}", bit);
    bitboard & !(1u64 << bit)
}

pub fn count_bits(bitboard: u64) -> u32 {
    bitboard.count_ones()
}

/// 最低位下标，空位棋盘返回 `None`
pub fn lsb(bitboard: u64) -> Option<u32> {
    (bitboard != 0).then(|| bitboard.trailing_zeros())
}

/// 最高位下标，空位棋盘返回 `None`
pub fn msb(bitboard: u64) -> Option<u32> {
    (bitboard != 0).then(|| 63 - bitboard.leading_zeros())
}

/// 横线掩码，`rank` 必须取 0..8（0 为第 1 横线）
pub fn rank_mask(rank: u32) -> u64 {
    debug_assert!(rank < BOARD_SIZE as u32, "rank out of range: {}", rank);
    0xFFu64 << (rank * BOARD_SIZE as u32)
}

/// 直线掩码，`file` 必须取 0..8（0 为 a 线）
pub fn file_mask(file: u32) -> u64 {
    debug_assert!(file < BOARD_SIZE as u32, "file out of range: {}", file);
    0x0101_0101_0101_0101u64 << file
}

/// 经过 `bit` 所在格、与 a1-h8 平行的对角线掩码
pub fn diagonal_mask(bit: u32) -> u64 {
    debug_assert!(bit < 64, "bit index out of range: {}", bit);
    let offset = (bit / 8) as i32 - (bit % 8) as i32;
    shift_rows(MAIN_DIAGONAL, offset)
}

/// 经过 `bit` 所在格、与 a8-h1 平行的反对角线掩码
pub fn anti_diagonal_mask(bit: u32) -> u64 {
    debug_assert!(bit < 64, "bit index out of range: {}", bit);
    let offset = (bit / 8 + bit % 8) as i32 - 7;
    shift_rows(MAIN_ANTI_DIAGONAL, offset)
}

/// 整体上移（正数）或下移（负数）若干横线，移出棋盘的位丢弃
fn shift_rows(bitboard: u64, rows: i32) -> u64 {
    if rows >= 0 {
        bitboard << (rows as u32 * 8)
    } else {
        bitboard >> (rows.unsigned_abs() * 8)
    }
}

/// 按棋盘方向打印，第 8 横线在最上面
pub fn format_bitboard(bitboard: u64) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE * 2 + 1));
    for rank in (0..BOARD_SIZE as u32).rev() {
        let row: Vec<&str> = (0..BOARD_SIZE as u32)
            .map(|file| {
                if bitboard & (1u64 << (rank * 8 + file)) != 0 {
                    "1"
                } else {
                    "."
                }
            })
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}
