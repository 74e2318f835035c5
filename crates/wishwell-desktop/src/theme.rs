//! Theme styling for the desktop app

use wishwell_core::models::ThemeDefinition;

/// Inline CSS custom properties for a theme definition.
pub fn theme_variables(theme: &ThemeDefinition) -> String {
    format!(
        "--ww-primary: {}; --ww-secondary: {}; --ww-accent: {}; --ww-background: {};",
        theme.colors.primary, theme.colors.secondary, theme.colors.accent, theme.colors.background
    )
}

pub const APP_STYLES: &str = r"
* { box-sizing: border-box; }
body { margin: 0; }

.app-container {
    min-height: 100vh;
    position: relative;
    overflow: hidden;
    background: var(--ww-background);
    color: #1f2937;
    font-family: system-ui, -apple-system, sans-serif;
}

.screen {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 24px;
}

.gradient-text {
    background: var(--ww-primary);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.greeting-title { font-size: 72px; font-weight: 800; margin: 0 0 16px 0; animation: pulse 2s ease-in-out infinite; }
.greeting-subtitle { font-size: 26px; opacity: 0; animation: rise 0.8s ease-out 1.2s forwards; }
.balloons { position: absolute; inset: auto 0 10% 0; display: flex; justify-content: space-evenly; pointer-events: none; }
.balloon { width: 48px; height: 64px; border-radius: 50%; background: var(--ww-secondary); animation: bob 3s ease-in-out infinite; }

.well { width: 192px; height: 128px; border-radius: 8px; margin-bottom: 48px; background: linear-gradient(#4b5563, #1f2937); position: relative; }
.well-water { position: absolute; inset: 8px; border-radius: 8px; background: linear-gradient(#1e3a8a, #172554); }
.ripple { position: absolute; top: 50%; left: 50%; width: 16px; height: 16px; margin: -8px; border: 2px solid var(--ww-accent); border-radius: 50%; animation: ripple 1s ease-out 1.2s both; }
.coin { width: 88px; height: 88px; border-radius: 50%; border: none; cursor: pointer; font-size: 36px; background: radial-gradient(circle at 30% 30%, #fde68a, #d97706); box-shadow: 0 6px 18px rgba(0, 0, 0, 0.25); animation: bob 2s ease-in-out infinite; }
.coin.dropping { cursor: default; animation: drop 1.5s ease-in forwards; }
.hint { margin-top: 24px; font-size: 18px; opacity: 0.8; }

.idea-card { width: min(560px, 100%); background: rgba(255, 255, 255, 0.9); border-radius: 16px; padding: 32px; box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12); text-align: left; }
.idea-card h2 { margin: 0 0 8px 0; font-size: 30px; }
.idea-card p { margin: 0 0 20px 0; opacity: 0.75; }
.idea-card label { display: block; font-weight: 600; margin-bottom: 8px; }
.idea-card textarea { width: 100%; min-height: 140px; padding: 12px; border-radius: 10px; border: 1px solid #d1d5db; font: inherit; resize: vertical; }
.char-count { text-align: right; font-size: 12px; opacity: 0.6; margin-top: 4px; }
.char-count.over { color: #dc2626; opacity: 1; }
.submit-button { width: 100%; margin-top: 16px; padding: 14px; border: none; border-radius: 10px; font-size: 17px; font-weight: 700; color: white; background: var(--ww-primary); cursor: pointer; }
.submit-button:disabled { opacity: 0.6; cursor: progress; }

.success-glyph { font-size: 96px; animation: wiggle 2s ease-in-out infinite; }
.success-title { font-size: 40px; font-weight: 800; margin: 16px 0; }
.success-message { max-width: 440px; font-size: 19px; opacity: 0.8; }

.corner { position: fixed; top: 16px; z-index: 50; }
.corner.left { left: 16px; }
.corner.right { right: 16px; }
.chip { border: 1px solid rgba(0, 0, 0, 0.1); background: rgba(255, 255, 255, 0.9); border-radius: 10px; padding: 8px 12px; cursor: pointer; font-size: 16px; }
.theme-panel { margin-top: 8px; background: rgba(255, 255, 255, 0.95); border-radius: 12px; padding: 12px; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15); display: grid; gap: 6px; min-width: 220px; }
.theme-panel h3 { margin: 0 0 6px 0; font-size: 13px; }
.theme-option { display: flex; gap: 10px; align-items: center; border: 2px solid transparent; background: transparent; border-radius: 8px; padding: 6px 8px; cursor: pointer; text-align: left; font: inherit; }
.theme-option.selected { border-color: var(--ww-accent); }
.swatch { width: 28px; height: 16px; border-radius: 4px; }

.toast-container { position: fixed; bottom: 16px; right: 16px; z-index: 100; }
.toast-list { display: flex; flex-direction: column; gap: 8px; margin: 0; padding: 0; list-style: none; }
.toast { display: flex; gap: 8px; min-width: 260px; max-width: 360px; padding: 10px 12px; border-radius: 10px; background: white; border: 1px solid #e5e7eb; box-shadow: 0 8px 20px rgba(0, 0, 0, 0.12); }
.toast[data-type='success'] { border-color: #10b981; }
.toast[data-type='error'] { border-color: #ef4444; }
.toast[data-type='info'] { border-color: #3b82f6; }
.toast-content { flex: 1; }
.toast-title { font-size: 13px; font-weight: 700; }
.toast-description { font-size: 12px; color: #4b5563; margin-top: 2px; }
.toast-close { border: none; background: transparent; cursor: pointer; }

@keyframes pulse { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.05); } }
@keyframes rise { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }
@keyframes bob { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-12px); } }
@keyframes drop { to { transform: translateY(200px) rotate(720deg); opacity: 0; } }
@keyframes ripple { from { transform: scale(1); opacity: 1; } to { transform: scale(5); opacity: 0; } }
@keyframes wiggle { 0%, 100% { transform: rotate(0); } 25% { transform: rotate(10deg) scale(1.1); } 75% { transform: rotate(-10deg); } }
";
