//! 国际象棋局面查看器
//!
//! 使用 Bevy 引擎把 FEN 局面绘制到 8x8 棋盘上

pub mod board;
pub mod input;
pub mod position;
pub mod settings;
pub mod theme;

use bevy::prelude::*;

/// 查看器插件
///
/// 需要先插入 [`settings::ViewerSettings`] 和 [`position::LoadedPosition`]。
pub struct ViewerPlugin;

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((theme::ThemePlugin, board::BoardPlugin, input::InputPlugin));
    }
}
