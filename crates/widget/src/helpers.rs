//! Helper functions to create widgets.
use crate::button::Button;
use crate::column::Column;
use crate::core::Element;
use crate::drawer::Drawer;
use crate::menu::{Menu, MenuChild};
use crate::text::Text;

/// Creates a [`Column`] with the given children.
#[macro_export]
macro_rules! column {
    () => (
        $crate::Column::new()
    );
    ($($x:expr),+ $(,)?) => (
        $crate::Column::with_children(vec![$($crate::core::Element::from($x)),+])
    );
}

/// Creates a new [`Text`] widget with the provided content.
pub fn text(content: impl AsRef<str>) -> Text {
    Text::new(content)
}

/// Creates a new [`Button`] with the provided content.
pub fn button<'a, Message>(content: impl Into<Element<'a, Message>>) -> Button<'a, Message> {
    Button::new(content)
}

/// Creates a new [`Column`] with the given children.
pub fn column<'a, Message>(
    children: impl IntoIterator<Item = Element<'a, Message>>,
) -> Column<'a, Message> {
    Column::with_children(children)
}

/// Creates a new [`Menu`] with the given children.
pub fn menu<'a, Message>(
    children: impl IntoIterator<Item = MenuChild<'a, Message>>,
) -> Menu<'a, Message> {
    Menu::with_children(children.into_iter().collect())
}

/// Creates a new [`Drawer`] with the given side and main content.
pub fn drawer<'a, Message>(
    side: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
) -> Drawer<'a, Message> {
    Drawer::new(side).content(content)
}
