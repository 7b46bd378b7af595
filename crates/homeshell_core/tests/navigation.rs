use homeshell_core::{
    BackPress, NavigationEvent, Navigator, Screen, ScreenParams, ScreenState,
};
use serde_json::json;

#[test]
fn starts_on_home_with_empty_params() {
    let nav = Navigator::new();
    assert_eq!(nav.state(), &ScreenState::default());
    assert_eq!(nav.active(), &Screen::Home);
    assert!(nav.params().is_empty());
}

#[test]
fn navigate_replaces_params_instead_of_merging() {
    let mut nav = Navigator::new();
    nav.navigate(Screen::Weather, ScreenParams::new().insert("city", json!("CH010100")));
    nav.navigate(Screen::Todo, ScreenParams::new().insert("filter", json!("all")));

    assert_eq!(nav.active(), &Screen::Todo);
    assert!(nav.params().get("city").is_none());
    assert_eq!(nav.params().get("filter"), Some(&json!("all")));
}

#[test]
fn go_back_from_edit_always_lands_on_list() {
    let mut nav = Navigator::new();
    // Reach the edit screen straight from home.
    nav.navigate(Screen::TodoEdit, ScreenParams::with_todo(None));
    nav.go_back();
    assert_eq!(nav.active(), &Screen::Todo);
    assert!(nav.params().is_empty());
}

#[test]
fn go_back_from_anything_else_lands_on_home() {
    for screen in [
        Screen::Home,
        Screen::Weather,
        Screen::Todo,
        Screen::parse("Settings"),
    ] {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Todo, ScreenParams::new());
        nav.navigate(screen, ScreenParams::new().insert("k", json!(1)));
        nav.go_back();
        assert_eq!(nav.active(), &Screen::Home);
        assert!(nav.params().is_empty());
    }
}

#[test]
fn hardware_back_defers_to_intercept_holder() {
    let mut nav = Navigator::new();
    nav.navigate(Screen::TodoEdit, ScreenParams::new());

    let guard = nav.intercept_back();
    assert_eq!(nav.hardware_back(), BackPress::Intercepted);
    assert_eq!(nav.active(), &Screen::TodoEdit);

    drop(guard);
    assert_eq!(nav.hardware_back(), BackPress::Navigated(Screen::Todo));
}

#[test]
fn focus_listener_runs_synchronously_on_registration() {
    let mut nav = Navigator::new();
    let mut fired_on = Vec::new();
    let _subscription = nav.add_listener(NavigationEvent::Focus, || {
        fired_on.push("registration");
    });
    nav.navigate(Screen::Todo, ScreenParams::new());
    assert_eq!(fired_on, ["registration"]);
}
