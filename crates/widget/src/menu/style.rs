//! Class tokens of the menu parts.
use crate::core::{ClassList, Role, Size};

use super::{Flags, Layout};

/// Tokens of the [`Menu`](super::Menu) root.
pub(super) fn root(layout: Layout, extra: &ClassList) -> ClassList {
    let mut classes = ClassList::new().with("menu");

    for (flag, token) in [
        (Flags::VERTICAL, "menu-vertical"),
        (Flags::HORIZONTAL, "menu-horizontal"),
        (Flags::RESPONSIVE, "lg:menu-horizontal"),
    ] {
        if layout.flags.contains(flag) {
            classes.push(token);
        }
    }

    if layout.size != Size::Md {
        classes.push(&format!("menu-{}", layout.size));
    }

    classes.append(extra);
    classes
}

/// Tokens of an [`Item`](super::Item).
pub(super) fn item(layout: Layout, disabled: bool, extra: &ClassList) -> ClassList {
    let mut classes = ClassList::new().with("menu-item");

    if disabled {
        classes.push("disabled");
    }

    if layout.size != Size::Md {
        classes.push(&format!("menu-item-{}", layout.size));
    }

    classes.append(extra);
    classes
}

/// Tokens of a [`Title`](super::Title).
pub(super) fn title(extra: &ClassList) -> ClassList {
    let mut classes = ClassList::new().with("menu-title");
    classes.append(extra);
    classes
}

/// Tokens of a dropdown or disclosure [`Group`](super::Group).
pub(super) fn group(role: Role, extra: &ClassList) -> ClassList {
    let mut classes = ClassList::new().with(if role == Role::Details {
        "menu-details"
    } else {
        "menu-dropdown"
    });

    classes.append(extra);
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_emits_every_flag() {
        let layout = Layout {
            flags: Flags::all(),
            size: Size::Xs,
        };

        assert_eq!(
            root(layout, &ClassList::from("shadow")).to_string(),
            "menu menu-vertical menu-horizontal lg:menu-horizontal menu-xs shadow"
        );
    }

    #[test]
    fn medium_size_emits_no_token() {
        assert_eq!(
            item(Layout::detached(), true, &ClassList::new()).to_string(),
            "menu-item disabled"
        );
    }
}
