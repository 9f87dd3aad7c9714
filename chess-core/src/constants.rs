//! 常量定义

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 8;

/// 格子总数
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 窗口边长（像素）
pub const WINDOW_SIZE: u32 = 800;

/// 默认格子边长（像素）
pub const SQUARE_SIZE: u32 = WINDOW_SIZE / BOARD_SIZE as u32;

/// 窗口标题
pub const WINDOW_TITLE: &str = "Chess Visualization";

/// 默认 FEN 文件路径
pub const DEFAULT_FEN_PATH: &str = "fen.txt";

/// 默认棋子图片目录
pub const DEFAULT_ASSET_DIR: &str = "assets/pieces";
