mod common;

use common::{FlakyStore, ScriptedDialogs};
use homeshell_core::{
    ActiveScreen, AppShell, ConfirmPrompt, MemoryRecordStore, Screen, StoredTodoRepository,
    TodoRepository, TODOS_KEY,
};

type Shell<S> = AppShell<StoredTodoRepository<S>, ScriptedDialogs>;

fn shell() -> Shell<MemoryRecordStore> {
    AppShell::new(
        StoredTodoRepository::new(MemoryRecordStore::new()),
        ScriptedDialogs::default(),
    )
}

fn open_todo_list<S: homeshell_core::RecordStore>(shell: &mut Shell<S>) {
    assert!(shell.open_feature("2"));
    assert_eq!(shell.active_screen(), &Screen::Todo);
}

#[test]
fn home_routes_to_weather_and_back() {
    let mut shell = shell();
    assert!(shell.open_feature("1"));
    assert!(matches!(shell.active(), ActiveScreen::Weather));

    shell.back();
    assert_eq!(shell.active_screen(), &Screen::Home);
}

#[test]
fn placeholder_features_render_home_menu() {
    let mut shell = shell();
    assert!(shell.open_feature("4"));
    assert_eq!(shell.active_screen(), &Screen::parse("News"));
    assert!(matches!(shell.active(), ActiveScreen::Home(_)));

    shell.hardware_back();
    assert_eq!(shell.active_screen(), &Screen::Home);
}

#[test]
fn add_save_returns_to_reloaded_list() {
    let mut shell = shell();
    open_todo_list(&mut shell);
    assert!(shell.list().unwrap().items().is_empty());

    assert!(shell.list_add());
    assert_eq!(shell.active_screen(), &Screen::TodoEdit);
    assert!(shell.edit_session().unwrap().is_new());
    assert!(shell.navigator().is_back_intercepted());

    shell.edit_set_draft("Buy milk");
    let saved = shell.edit_save().unwrap();

    assert_eq!(shell.active_screen(), &Screen::Todo);
    assert!(!shell.navigator().is_back_intercepted());
    let list = shell.list().unwrap();
    assert!(!list.is_loading());
    assert_eq!(list.items(), [saved]);
}

#[test]
fn select_edit_and_save_updates_in_place() {
    let mut shell = shell();
    let first = shell.repo().create("first").unwrap();
    let second = shell.repo().create("second").unwrap();
    open_todo_list(&mut shell);

    assert!(shell.list_select(1));
    assert_eq!(shell.edit_session().unwrap().target_id(), Some(&first.id));
    shell.edit_set_draft("first, edited");
    shell.edit_save().unwrap();

    let contents: Vec<_> = shell
        .list()
        .unwrap()
        .items()
        .iter()
        .map(|todo| (todo.id.clone(), todo.content.clone()))
        .collect();
    assert_eq!(
        contents,
        [
            (second.id, "second".to_string()),
            (first.id, "first, edited".to_string())
        ]
    );
}

#[test]
fn unchanged_edit_save_is_disabled_and_back_skips_prompt() {
    let mut shell = shell();
    shell.repo().create("keep").unwrap();
    open_todo_list(&mut shell);
    shell.list_select(0);

    assert!(shell.edit_save().is_none());
    assert!(shell.dialogs().alerts.is_empty());

    shell.hardware_back();
    assert_eq!(shell.active_screen(), &Screen::Todo);
    assert!(shell.dialogs().prompts.is_empty());
}

#[test]
fn dirty_back_prompts_then_discard_leaves_storage_untouched() {
    let mut shell = shell();
    let item = shell.repo().create("original").unwrap();
    open_todo_list(&mut shell);
    shell.list_select(0);
    shell.edit_set_draft("changed");

    // Cancel keeps the draft and the screen.
    shell.dialogs_mut().push_answer(false);
    shell.back();
    assert_eq!(shell.active_screen(), &Screen::TodoEdit);
    assert_eq!(shell.edit_session().unwrap().draft(), "changed");

    // Hardware back goes through the same prompt; confirm discards.
    shell.dialogs_mut().push_answer(true);
    shell.hardware_back();
    assert_eq!(shell.active_screen(), &Screen::Todo);
    assert_eq!(
        shell.dialogs().prompts,
        [ConfirmPrompt::DiscardChanges, ConfirmPrompt::DiscardChanges]
    );
    assert_eq!(shell.repo().get(&item.id).unwrap().unwrap(), item);
    assert!(!shell.navigator().is_back_intercepted());
}

#[test]
fn blank_save_alerts_and_stays_on_edit() {
    let mut shell = shell();
    open_todo_list(&mut shell);
    shell.list_add();
    shell.edit_set_draft("  ");

    assert!(shell.edit_save().is_none());
    assert_eq!(shell.active_screen(), &Screen::TodoEdit);
    assert_eq!(shell.dialogs().alerts.len(), 1);
    assert!(shell.repo().load_all().unwrap().is_empty());
}

#[test]
fn delete_requires_confirmation() {
    let mut shell = shell();
    let item = shell.repo().create("remove me").unwrap();
    open_todo_list(&mut shell);

    shell.dialogs_mut().push_answer(false);
    assert!(!shell.list_delete(&item.id));
    assert_eq!(shell.list().unwrap().items().len(), 1);

    shell.dialogs_mut().push_answer(true);
    assert!(shell.list_delete(&item.id));
    assert!(shell.list().unwrap().items().is_empty());
    assert!(shell.repo().load_all().unwrap().is_empty());
    assert_eq!(
        shell.dialogs().prompts,
        [ConfirmPrompt::DeleteItem, ConfirmPrompt::DeleteItem]
    );
}

#[test]
fn failed_delete_alerts_and_keeps_cached_item() {
    let mut shell = AppShell::new(
        StoredTodoRepository::new(FlakyStore::new()),
        ScriptedDialogs::default(),
    );
    let item = shell.repo().create("stubborn").unwrap();
    open_todo_list(&mut shell);

    shell.repo().store().fail_writes.set(true);
    shell.dialogs_mut().push_answer(true);
    assert!(!shell.list_delete(&item.id));

    assert_eq!(shell.list().unwrap().items(), [item.clone()]);
    let alerts = &shell.dialogs().alerts;
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].title, "Error");

    shell.repo().store().fail_writes.set(false);
    assert_eq!(shell.repo().load_all().unwrap(), vec![item]);
}

#[test]
fn corrupt_storage_shows_empty_list_with_notice() {
    let store = MemoryRecordStore::new().with_record(TODOS_KEY, "{broken");
    let mut shell = AppShell::new(
        StoredTodoRepository::new(store),
        ScriptedDialogs::default(),
    );
    open_todo_list(&mut shell);

    let list = shell.list().unwrap();
    assert!(list.items().is_empty());
    assert!(list.notice().is_some());
    assert_eq!(shell.dialogs().alerts.len(), 1);
}

#[test]
fn failed_save_alerts_and_keeps_draft() {
    let mut shell = AppShell::new(
        StoredTodoRepository::new(FlakyStore::new()),
        ScriptedDialogs::default(),
    );
    open_todo_list(&mut shell);
    shell.list_add();
    shell.edit_set_draft("Call mom");

    shell.repo().store().fail_writes.set(true);
    assert!(shell.edit_save().is_none());
    assert_eq!(shell.active_screen(), &Screen::TodoEdit);
    assert_eq!(shell.edit_session().unwrap().draft(), "Call mom");
    assert_eq!(shell.dialogs().alerts[0].title, "Error");

    shell.repo().store().fail_writes.set(false);
    assert!(shell.edit_save().is_some());
    assert_eq!(shell.active_screen(), &Screen::Todo);
}

#[test]
fn list_back_returns_home() {
    let mut shell = shell();
    open_todo_list(&mut shell);
    shell.back();
    assert_eq!(shell.active_screen(), &Screen::Home);
    assert!(shell.list().is_none());
}
