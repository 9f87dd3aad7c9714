//! 主题和配色方案
//!
//! 定义棋盘格的颜色配置

use bevy::prelude::*;
use chess_core::Shade;

use crate::settings::ViewerSettings;

/// 主题插件
pub struct ThemePlugin;

impl Plugin for ThemePlugin {
    fn build(&self, app: &mut App) {
        let theme = app
            .world()
            .get_resource::<ViewerSettings>()
            .map(ColorTheme::from_settings)
            .unwrap_or_else(ColorTheme::classic);

        app.insert_resource(ClearColor(theme.background))
            .insert_resource(theme);
    }
}

/// 颜色主题配置
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ColorTheme {
    pub light_square: Color,
    pub dark_square: Color,
    /// 窗口背景（棋盘外区域）
    pub background: Color,
}

impl ColorTheme {
    /// 白色和绿色
    pub fn classic() -> Self {
        Self {
            light_square: Color::srgb_u8(255, 255, 255),
            dark_square: Color::srgb_u8(118, 150, 86),
            background: Color::srgb_u8(0, 0, 0),
        }
    }

    pub fn from_settings(settings: &ViewerSettings) -> Self {
        let [lr, lg, lb] = settings.light_color;
        let [dr, dg, db] = settings.dark_color;
        Self {
            light_square: Color::srgb_u8(lr, lg, lb),
            dark_square: Color::srgb_u8(dr, dg, db),
            ..Self::classic()
        }
    }

    pub fn shade_color(&self, shade: Shade) -> Color {
        match shade {
            Shade::Light => self.light_square,
            Shade::Dark => self.dark_square,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_classic() {
        assert_eq!(
            ColorTheme::from_settings(&ViewerSettings::default()),
            ColorTheme::classic()
        );
    }

    #[test]
    fn test_shade_color() {
        let settings = ViewerSettings {
            light_color: [200, 200, 200],
            dark_color: [50, 60, 70],
            ..Default::default()
        };
        let theme = ColorTheme::from_settings(&settings);
        assert_eq!(theme.shade_color(Shade::Light), Color::srgb_u8(200, 200, 200));
        assert_eq!(theme.shade_color(Shade::Dark), Color::srgb_u8(50, 60, 70));
    }
}
