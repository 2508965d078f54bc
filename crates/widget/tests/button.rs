//! Button behavior driven through the simulator.
use petal_ui_test::core::event::Status;
use petal_ui_test::core::{Role, Size};
use petal_ui_test::{Error, Simulator, selector};
use petal_ui_widget::button::{Button, Shape, Variant};
use petal_ui_widget::{button, text};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Message {
    Save,
}

#[test]
fn pressing_the_label_publishes() -> Result<(), Error> {
    let mut ui = Simulator::new(button("Save").on_press(Message::Save));

    assert_eq!(ui.press(selector::text("Save"))?, Status::Captured);
    assert_eq!(ui.press(Role::Button)?, Status::Captured);

    assert_eq!(
        ui.into_messages().collect::<Vec<_>>(),
        [Message::Save, Message::Save]
    );

    Ok(())
}

#[test]
fn disabled_button_suppresses_presses() -> Result<(), Error> {
    let mut ui = Simulator::new(button("Save").disabled(true).on_press(Message::Save));

    assert_eq!(ui.press(selector::text("Save"))?, Status::Ignored);

    let node = ui.find(Role::Button)?;
    assert!(node.disabled);
    assert!(node.classes.contains("btn-disabled"));
    assert!(ui.messages().is_empty());

    Ok(())
}

#[test]
fn loading_button_shows_an_indicator() -> Result<(), Error> {
    let mut ui = Simulator::new(
        Button::new("Save")
            .id("save")
            .loading(true)
            .start_icon(text("<"))
            .end_icon(text(">"))
            .on_press(Message::Save),
    );

    let node = ui.find(selector::id("save"))?;
    let roles: Vec<Role> = node.children.iter().map(|child| child.role).collect();

    assert_eq!(roles, [Role::Text, Role::Indicator, Role::Text]);
    assert_eq!(node.label.as_deref(), Some("Save"));
    assert!(ui.query(selector::text("Save")).is_none());

    assert_eq!(ui.press(selector::id("save"))?, Status::Ignored);
    assert!(ui.messages().is_empty());

    Ok(())
}

#[test]
fn props_become_class_tokens() -> Result<(), Error> {
    let ui = Simulator::new(
        Button::new("Go")
            .variant(Variant::Primary)
            .size(Size::Sm)
            .shape(Shape::Circle)
            .wide(true)
            .style("shadow")
            .text_style("uppercase")
            .on_press(Message::Save),
    );

    assert_eq!(
        ui.find(Role::Button)?.classes.to_string(),
        "btn btn-primary btn-sm btn-circle btn-wide shadow"
    );
    assert_eq!(
        ui.find(selector::text("Go"))?.classes.to_string(),
        "uppercase"
    );

    Ok(())
}

#[test]
fn explicit_label_replaces_the_content_text() -> Result<(), Error> {
    let ui = Simulator::new(
        button(text("x").style("icon"))
            .accessibility_label("Close")
            .on_press(Message::Save),
    );

    assert_eq!(ui.find(selector::label("Close"))?.role, Role::Button);

    Ok(())
}

#[test]
fn unknown_names_fall_back_to_defaults() {
    assert_eq!(Variant::from_name("magenta"), None);
    assert_eq!(Size::from_name("huge"), Size::Md);
    assert_eq!(Shape::from_name("hexagon"), None);
    assert_eq!(Shape::from_name("circle"), Some(Shape::Circle));
    assert_eq!("ghost".parse(), Ok(Variant::Ghost));
}

#[test]
fn optional_message_only_publishes_when_present() -> Result<(), Error> {
    let mut ui = Simulator::new(button("Save").on_press_maybe(None::<Message>));
    let _ = ui.press(selector::text("Save"))?;
    assert!(ui.messages().is_empty());

    let mut ui = Simulator::new(button("Save").on_press_maybe(Some(Message::Save)));
    assert_eq!(ui.press(selector::text("Save"))?, Status::Captured);
    assert_eq!(ui.messages(), [Message::Save]);

    Ok(())
}
