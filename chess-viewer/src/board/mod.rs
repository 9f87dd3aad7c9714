//! 棋盘渲染模块
//!
//! 负责棋盘格和棋子的渲染

pub mod pieces;
mod render;

pub use pieces::*;
pub use render::*;

use bevy::prelude::*;
use chess_core::{frame, BOARD_SIZE, SQUARE_SIZE, WINDOW_SIZE};

use crate::position::LoadedPosition;
use crate::settings::ViewerSettings;
use crate::theme::ColorTheme;

/// 棋盘插件
pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        let layout = app
            .world()
            .get_resource::<ViewerSettings>()
            .map(BoardLayout::from_settings)
            .unwrap_or_default();

        app.insert_resource(layout)
            .add_systems(Startup, (setup_camera, load_piece_images))
            .add_systems(Update, update_board);
    }
}

/// 棋盘布局配置
///
/// 绘制指令使用左上角为原点、y 向下的像素坐标；
/// Bevy 2D 相机以窗口中心为原点、y 向上。
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct BoardLayout {
    /// 窗口边长
    pub window_size: f32,
    /// 格子边长
    pub square_size: u32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE as f32,
            square_size: SQUARE_SIZE,
        }
    }
}

impl BoardLayout {
    pub fn from_settings(settings: &ViewerSettings) -> Self {
        Self {
            window_size: settings.window_size as f32,
            square_size: settings.square_size(),
        }
    }

    /// 棋盘边长
    pub fn board_size(&self) -> f32 {
        (self.square_size * BOARD_SIZE as u32) as f32
    }

    /// 将像素矩形（左上角 + 边长）转换为世界坐标中的矩形中心
    pub fn pixel_to_world(&self, x: u32, y: u32, size: u32) -> Vec2 {
        let half_window = self.window_size / 2.0;
        let half_size = size as f32 / 2.0;
        Vec2::new(
            -half_window + x as f32 + half_size,
            half_window - y as f32 - half_size,
        )
    }
}

/// 棋盘标记组件
#[derive(Component)]
pub struct BoardMarker;

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// 局面、布局或主题变化时重新生成整个棋盘
fn update_board(
    mut commands: Commands,
    position: Res<LoadedPosition>,
    layout: Res<BoardLayout>,
    theme: Res<ColorTheme>,
    images: Res<PieceImages>,
    board_query: Query<Entity, With<BoardMarker>>,
) {
    if !position.is_changed() && !layout.is_changed() && !theme.is_changed() {
        return;
    }

    for entity in board_query.iter() {
        commands.entity(entity).despawn();
    }

    let draw_list = match frame(&position.placement, layout.square_size) {
        Ok(draw_list) => draw_list,
        Err(e) => {
            tracing::error!("无法绘制局面: {}", e);
            return;
        }
    };

    let plans = render::plan_sprites(&draw_list, &layout, &theme);
    tracing::debug!("生成 {} 个精灵", plans.len());

    for plan in &plans {
        match plan.kind {
            SpriteKind::Square(color) => render::spawn_square(&mut commands, plan, color),
            SpriteKind::Piece(piece) => pieces::spawn_piece(&mut commands, &images, piece, plan),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_world_corners() {
        let layout = BoardLayout::default();
        assert_eq!(layout.board_size(), 800.0);

        // 左上角格子
        assert_eq!(layout.pixel_to_world(0, 0, 100), Vec2::new(-350.0, 350.0));
        // 右下角格子
        assert_eq!(layout.pixel_to_world(700, 700, 100), Vec2::new(350.0, -350.0));
    }

    #[test]
    fn test_layout_from_settings() {
        let settings = ViewerSettings {
            window_size: 400,
            ..Default::default()
        };
        let layout = BoardLayout::from_settings(&settings);
        assert_eq!(layout.square_size, 50);
        assert_eq!(layout.pixel_to_world(0, 0, 50), Vec2::new(-175.0, 175.0));
    }
}
