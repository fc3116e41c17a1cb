//! Smoke tests drawing each screen into a test backend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tally::TallyController;
use tally_core::MemoryStore;

fn screen_text(controller: &TallyController<MemoryStore>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).expect("Terminal failed");
    terminal
        .draw(|f| controller.render(f))
        .expect("Draw failed");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn press(controller: &mut TallyController<MemoryStore>, code: KeyCode) {
    let _ = controller.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_setup_screen_renders() {
    let controller = TallyController::new(MemoryStore::new());
    let text = screen_text(&controller);
    assert!(text.contains("Game Setup"));
    assert!(text.contains("Select game type"));
    assert!(text.contains("Ctrl+T: Dark"));
}

#[test]
fn test_game_screen_renders_scores() {
    let mut controller = TallyController::new(MemoryStore::new());
    press(&mut controller, KeyCode::Tab);
    press(&mut controller, KeyCode::Down);
    press(&mut controller, KeyCode::Down);
    press(&mut controller, KeyCode::Enter);
    for c in "Ann".chars() {
        press(&mut controller, KeyCode::Char(c));
    }
    press(&mut controller, KeyCode::Down);
    for c in "Bo".chars() {
        press(&mut controller, KeyCode::Char(c));
    }
    press(&mut controller, KeyCode::Enter);
    for c in "8".chars() {
        press(&mut controller, KeyCode::Char(c));
    }
    press(&mut controller, KeyCode::Enter);

    let text = screen_text(&controller);
    assert!(text.contains("Bridge Score Tracker"));
    assert!(text.contains("Current Player: Bo"));
    assert!(text.contains("Ann: 8"));
    assert!(text.contains("Bo: 0"));
}
