use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;

/// Translate a key press into driver actions.
///
/// Every message dispatched from here comes out of the projected view
/// tree's own bindings; this layer only decides which binding a key
/// refers to. Keys without a matching binding on the visible screen
/// fall through as no-ops.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.press_bar_button();
        return;
    }

    match key.code {
        KeyCode::Esc => app.navigate_back(),
        // Left doubles as back navigation, but never while a text field
        // would swallow horizontal movement.
        KeyCode::Left if !app.is_editing() => app.navigate_back(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Enter => app.activate_selection(),
        KeyCode::Backspace => app.delete_backwards(),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.insert_char(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
