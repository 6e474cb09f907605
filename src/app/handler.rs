use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::page::controller::PageEvent;
use crate::page::counter::FrameClock;
use crate::ui::navbar::{self, NavHit};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Rows moved by one mouse wheel notch.
const WHEEL_ROWS: isize = 3;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::ProjectsLoaded(projects) => {
            state.dispatch(PageEvent::DataLoaded(projects));
            vec![]
        }
        AppEvent::ProjectsFailed(reason) => {
            state.dispatch(PageEvent::DataFailed(reason));
            vec![]
        }
        AppEvent::Frame => {
            handle_frame(state);
            vec![]
        }
    }
}

fn handle_frame(state: &mut AppState) {
    if !state.animating {
        return;
    }
    let now = state.clock.now_ms();
    state.animating = state.page.on_frame(now);
    state.dirty = true;
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            if state.status_message.take().is_some() {
                state.dirty = true;
            }
            handle_key(state, key)
        }
        CEvent::Mouse(mouse) => {
            handle_mouse(state, mouse);
            vec![]
        }
        CEvent::Resize(width, height) => {
            state.resize(width, height);
            state.animating = true;
            vec![]
        }
        _ => vec![],
    }
}

/// Something scrolled or jumped; reveal may have started new fades.
fn moved(state: &mut AppState, changed: bool) {
    if changed {
        state.animating = true;
        state.dirty = true;
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    let page_rows = state.page.viewport_rows().saturating_sub(1).max(1) as isize;
    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Esc => {
            if state.page.nav().is_menu_open() {
                state.page.toggle_menu();
                state.dirty = true;
            }
        }
        KeyCode::Char('m') => {
            if state.is_compact() {
                state.page.toggle_menu();
                state.dirty = true;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            let changed = state.page.scroll_by(-1);
            moved(state, changed);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let changed = state.page.scroll_by(1);
            moved(state, changed);
        }
        KeyCode::PageUp => {
            let changed = state.page.scroll_by(-page_rows);
            moved(state, changed);
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            let changed = state.page.scroll_by(page_rows);
            moved(state, changed);
        }
        KeyCode::Home | KeyCode::Char('g') => {
            let changed = state.page.scroll_to_top();
            moved(state, changed);
        }
        KeyCode::End | KeyCode::Char('G') => {
            let changed = state.page.scroll_to_bottom();
            moved(state, changed);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            let changed = state.page.follow_link(index);
            moved(state, changed);
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            let step = if key.code == KeyCode::Char('F') { -1 } else { 1 };
            if let Some(filter) = state.adjacent_filter(step) {
                state.dispatch(PageEvent::FilterChanged(filter));
            }
        }
        KeyCode::Char('s') => {
            let key = state.page.store().current_sort().toggled();
            state.dispatch(PageEvent::SortChanged(key));
        }
        KeyCode::Tab => state.select_card(1),
        KeyCode::BackTab => state.select_card(-1),
        KeyCode::Enter | KeyCode::Char('o') => {
            if let Some(url) = state.selected_link() {
                return vec![Action::OpenLink { url }];
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            let changed = state.page.scroll_by(-WHEEL_ROWS);
            moved(state, changed);
        }
        MouseEventKind::ScrollDown => {
            let changed = state.page.scroll_by(WHEEL_ROWS);
            moved(state, changed);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            match navbar::hit_test(state, mouse.column, mouse.row) {
                Some(NavHit::Link(index)) => {
                    let changed = state.page.follow_link(index);
                    moved(state, changed);
                }
                Some(NavHit::Toggle) | Some(NavHit::Overlay) => {
                    state.page.toggle_menu();
                    state.dirty = true;
                }
                None => {}
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::projects::project::Project;
    use crate::projects::store::{Filter, SortKey};
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent {
            code,
            modifiers: if matches!(code, KeyCode::BackTab | KeyCode::Char('F')) {
                KeyModifiers::SHIFT
            } else {
                KeyModifiers::NONE
            },
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    fn click(column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn projects() -> Vec<Project> {
        vec![
            Project {
                title: "A".into(),
                category: "Web".into(),
                stars: 3,
                repo_url: "https://example.com/a".into(),
                updated_at: Some("2024-01-01".into()),
                ..Default::default()
            },
            Project {
                title: "B".into(),
                category: "Back-end".into(),
                stars: 9,
                repo_url: "https://example.com/b".into(),
                updated_at: Some("2023-01-01".into()),
                ..Default::default()
            },
        ]
    }

    fn loaded(size: (u16, u16)) -> AppState {
        let mut state = AppState::new(AppConfig::default(), size);
        handle_event(&mut state, AppEvent::ProjectsLoaded(projects()));
        state
    }

    #[test]
    fn test_quit_keys() {
        let mut state = loaded((100, 40));
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), vec![Action::Quit]);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);
    }

    #[test]
    fn test_filter_and_sort_keys() {
        let mut state = loaded((100, 40));
        handle_event(&mut state, key(KeyCode::Char('f')));
        assert_eq!(
            state.page.store().current_filter(),
            &Filter::from_selector("Back-end")
        );
        assert_eq!(state.page.grid().cards().len(), 1);

        handle_event(&mut state, key(KeyCode::Char('F')));
        assert_eq!(state.page.store().current_filter(), &Filter::All);

        handle_event(&mut state, key(KeyCode::Char('s')));
        assert_eq!(state.page.store().current_sort(), SortKey::Stars);
        assert_eq!(state.page.grid().cards()[0].title, "B");
    }

    #[test]
    fn test_controls_inert_until_loaded() {
        let mut state = AppState::new(AppConfig::default(), (100, 40));
        handle_event(&mut state, key(KeyCode::Char('s')));
        assert_eq!(state.page.store().current_sort(), SortKey::Recent);
    }

    #[test]
    fn test_select_and_open_card() {
        let mut state = loaded((100, 40));
        assert!(handle_event(&mut state, key(KeyCode::Enter)).is_empty());

        handle_event(&mut state, key(KeyCode::Tab));
        assert_eq!(
            handle_event(&mut state, key(KeyCode::Enter)),
            vec![Action::OpenLink {
                url: "https://example.com/a".into()
            }]
        );
        handle_event(&mut state, key(KeyCode::BackTab));
        handle_event(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.selected_card, Some(1));
    }

    #[test]
    fn test_scroll_keys_and_wheel() {
        let mut state = loaded((100, 20));
        handle_event(&mut state, key(KeyCode::Char('j')));
        assert_eq!(state.page.scroll_rows(), 1);
        handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 10,
                row: 10,
                modifiers: KeyModifiers::NONE,
            })),
        );
        assert_eq!(state.page.scroll_rows(), 4);
        handle_event(&mut state, key(KeyCode::End));
        assert_eq!(
            state.page.scroll_rows(),
            state.page.layout().max_scroll(state.page.viewport_rows())
        );
        handle_event(&mut state, key(KeyCode::Home));
        assert_eq!(state.page.scroll_rows(), 0);
    }

    #[test]
    fn test_number_keys_follow_links() {
        let mut state = loaded((100, 20));
        handle_event(&mut state, key(KeyCode::Char('2')));
        assert_eq!(state.page.scroll_rows(), state.page.layout().sections[1].span.top);
        assert!(state.animating);
    }

    #[test]
    fn test_compact_menu_by_key_and_click() {
        let mut state = loaded((60, 30));
        handle_event(&mut state, key(KeyCode::Char('m')));
        assert!(state.page.nav().is_menu_open());
        handle_event(&mut state, key(KeyCode::Char('j')));
        assert_eq!(state.page.scroll_rows(), 0);

        // Click on the dimmed body closes the menu.
        handle_event(&mut state, click(5, 10));
        assert!(!state.page.nav().is_menu_open());

        // Toggle opens it; a panel link jumps and closes it.
        handle_event(&mut state, click(57, 1));
        assert!(state.page.nav().is_menu_open());
        handle_event(&mut state, click(40, 5));
        assert!(!state.page.nav().is_menu_open());
        assert!(state.page.scroll_rows() > 0);

        handle_event(&mut state, key(KeyCode::Char('m')));
        handle_event(&mut state, key(KeyCode::Esc));
        assert!(!state.page.nav().is_menu_open());
    }

    #[test]
    fn test_menu_key_ignored_when_wide() {
        let mut state = loaded((120, 30));
        handle_event(&mut state, key(KeyCode::Char('m')));
        assert!(!state.page.nav().is_menu_open());
    }

    #[test]
    fn test_failure_event_installs_fallback() {
        let mut state = AppState::new(AppConfig::default(), (100, 40));
        handle_event(&mut state, AppEvent::ProjectsFailed("404".into()));
        assert_eq!(state.page.grid().cards().len(), 1);
        assert_eq!(state.status_line(), "Dados dos projetos indisponíveis");
    }

    #[test]
    fn test_frames_stop_when_idle() {
        let mut state = loaded((100, 40));
        let mut frames = 0;
        while state.animating && frames < 10_000 {
            handle_event(&mut state, AppEvent::Frame);
            frames += 1;
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        assert!(!state.animating);
        assert_eq!(state.page.counter_text(), "2");
    }
}
