//! 输入处理
//!
//! 只处理退出：关闭窗口或按 Esc。

use bevy::prelude::*;
use bevy::window::WindowCloseRequested;

/// 输入插件
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (exit_on_escape, log_close_requests));
    }
}

/// 按 Esc 退出
fn exit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        tracing::info!("收到退出按键");
        exit.write(AppExit::Success);
    }
}

/// 窗口关闭由 Bevy 的 WindowPlugin 处理，这里只记录日志
fn log_close_requests(mut requests: MessageReader<WindowCloseRequested>) {
    for request in requests.read() {
        tracing::info!("窗口关闭请求: {:?}", request.window);
    }
}
