//! 棋子渲染
//!
//! 12 张棋子图片在启动时加载一次，之后只读。

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use chess_core::Piece;
use thiserror::Error;

use super::render::SpritePlan;
use super::BoardMarker;

/// 棋子图片错误
#[derive(Error, Debug)]
pub enum AssetError {
    /// 图片文件不存在
    #[error("Missing piece image for '{symbol}': {path:?}")]
    Missing { symbol: char, path: PathBuf },
}

/// 检查图片目录中 12 张棋子图片是否齐全
pub fn verify_assets(asset_dir: &Path) -> Result<(), AssetError> {
    for piece in Piece::all() {
        let path = asset_dir.join(piece.asset_file_name());
        if !path.is_file() {
            return Err(AssetError::Missing {
                symbol: piece.to_fen_char(),
                path,
            });
        }
    }
    Ok(())
}

/// 棋子图片表
#[derive(Resource, Default, Debug)]
pub struct PieceImages {
    handles: HashMap<Piece, Handle<Image>>,
}

impl PieceImages {
    pub fn get(&self, piece: Piece) -> Option<&Handle<Image>> {
        self.handles.get(&piece)
    }

    /// 为 12 种棋子各取一个图片句柄
    pub fn load_with(mut load: impl FnMut(String) -> Handle<Image>) -> Self {
        let handles = Piece::all()
            .map(|piece| (piece, load(piece.asset_file_name())))
            .collect();
        Self { handles }
    }
}

/// 棋子标记组件
#[derive(Component)]
pub struct PieceMarker(pub Piece);

/// 加载全部棋子图片
pub fn load_piece_images(mut commands: Commands, asset_server: Res<AssetServer>) {
    let images = PieceImages::load_with(|name| asset_server.load(name));
    tracing::info!("已加载 {} 张棋子图片", images.handles.len());
    commands.insert_resource(images);
}

/// 生成单个棋子，图片缩放到格子大小
pub fn spawn_piece(commands: &mut Commands, images: &PieceImages, piece: Piece, plan: &SpritePlan) {
    let Some(image) = images.get(piece) else {
        tracing::warn!("棋子 {} 没有对应图片", piece.to_fen_char());
        return;
    };

    commands.spawn((
        Sprite {
            image: image.clone(),
            custom_size: Some(Vec2::splat(plan.size)),
            ..default()
        },
        Transform::from_xyz(plan.center.x, plan.center.y, plan.z),
        PieceMarker(piece),
        BoardMarker,
    ));
}
