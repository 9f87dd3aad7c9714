//! 棋盘格渲染

use bevy::prelude::*;
use chess_core::{DrawCommand, Piece};

use super::{BoardLayout, BoardMarker};
use crate::theme::ColorTheme;

/// 棋盘格所在层
pub const SQUARE_Z: f32 = 0.0;

/// 棋子所在层
pub const PIECE_Z: f32 = 1.0;

/// 精灵内容
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpriteKind {
    Square(Color),
    Piece(Piece),
}

/// 一个待生成的精灵
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpritePlan {
    pub kind: SpriteKind,
    pub center: Vec2,
    pub size: f32,
    pub z: f32,
}

/// 棋盘格标记组件
#[derive(Component)]
pub struct SquareMarker;

/// 把绘制指令转换为世界坐标下的精灵，顺序不变
pub fn plan_sprites(
    draw_list: &[DrawCommand],
    layout: &BoardLayout,
    theme: &ColorTheme,
) -> Vec<SpritePlan> {
    draw_list
        .iter()
        .map(|command| {
            let (x, y) = command.origin();
            let (kind, z) = match *command {
                DrawCommand::FillSquare { shade, .. } => {
                    (SpriteKind::Square(theme.shade_color(shade)), SQUARE_Z)
                }
                DrawCommand::BlitPiece { piece, .. } => (SpriteKind::Piece(piece), PIECE_Z),
            };
            SpritePlan {
                kind,
                center: layout.pixel_to_world(x, y, command.size()),
                size: command.size() as f32,
                z,
            }
        })
        .collect()
}

/// 生成一个棋盘格
pub fn spawn_square(commands: &mut Commands, plan: &SpritePlan, color: Color) {
    commands.spawn((
        Sprite {
            color,
            custom_size: Some(Vec2::splat(plan.size)),
            ..default()
        },
        Transform::from_xyz(plan.center.x, plan.center.y, plan.z),
        SquareMarker,
        BoardMarker,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{frame, PieceType, Side};

    #[test]
    fn test_plan_starting_position() {
        let layout = BoardLayout::default();
        let theme = ColorTheme::classic();
        let draw_list = frame("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", 100).unwrap();
        let plans = plan_sprites(&draw_list, &layout, &theme);

        assert_eq!(plans.len(), 96);

        // a8 浅色，b8 深色
        assert_eq!(plans[0].kind, SpriteKind::Square(theme.light_square));
        assert_eq!(plans[1].kind, SpriteKind::Square(theme.dark_square));
        assert_eq!(plans[0].center, Vec2::new(-350.0, 350.0));

        // 黑车在 a8，位于棋盘格之上
        let first_piece = plans[64];
        assert_eq!(
            first_piece.kind,
            SpriteKind::Piece(Piece::new(PieceType::Rook, Side::Black))
        );
        assert_eq!(first_piece.center, Vec2::new(-350.0, 350.0));
        assert!(first_piece.z > plans[0].z);
        assert_eq!(first_piece.size, 100.0);
    }
}
