use anyhow::{Context, Result};
use bevy::asset::AssetPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy::winit::WinitSettings;
use chess_core::WINDOW_TITLE;
use chess_viewer::board::verify_assets;
use chess_viewer::position::LoadedPosition;
use chess_viewer::settings::ViewerSettings;
use chess_viewer::ViewerPlugin;

fn main() -> Result<()> {
    let (settings, settings_fallback) = ViewerSettings::load();

    verify_assets(&settings.asset_dir).context("棋子图片不完整")?;
    let asset_root = std::fs::canonicalize(&settings.asset_dir)
        .with_context(|| format!("无法定位图片目录: {:?}", settings.asset_dir))?;

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: WINDOW_TITLE.into(),
                    resolution: WindowResolution::new(settings.window_size, settings.window_size)
                        .with_scale_factor_override(1.0),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(AssetPlugin {
                file_path: asset_root.to_string_lossy().into_owned(),
                ..default()
            })
            .set(LogPlugin {
                level: settings.log_level.to_level(),
                filter: "wgpu=error,naga=warn".to_string(),
                ..default()
            }),
    );

    // 日志系统由 LogPlugin 安装，之前的设置回退信息在这里补记
    if let Some(reason) = settings_fallback {
        tracing::warn!("{}", reason);
    }

    let position = LoadedPosition::load(&settings)?;

    app.insert_resource(WinitSettings::game())
        .insert_resource(settings)
        .insert_resource(position)
        .add_plugins(ViewerPlugin);

    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("查看器异常退出: {}", code),
    }
}
