//! Drawers slide a side panel over the main content, dismissed through an
//! overlay.
//!
//! # Example
//! ```no_run
//! use petal_ui_widget::core::Element;
//! use petal_ui_widget::drawer::Drawer;
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     CloseSidebar,
//! }
//!
//! fn view<'a>(sidebar_open: bool) -> Element<'a, Message> {
//!     Drawer::new("Sidebar")
//!         .content("Main content")
//!         .open(sidebar_open)
//!         .on_click_overlay(Message::CloseSidebar)
//!         .into()
//! }
//! ```
mod state;

pub use state::{Phase, State, Transition};

use crate::button::OnPress;
use crate::core::widget::{Id, Tree, tree};
use crate::core::{ClassList, Element, Event, Frame, Node, Role, Shell, SmolStr, Widget};

/// The [`Id`] given to the overlay of a [`Drawer`] by default.
pub const OVERLAY_ID: &str = "drawer-overlay";

/// A side panel attached to its main content while open.
///
/// The [`Drawer`] keeps its [`Phase`] across frames. The `open` input is
/// edge-triggered: pressing the overlay or navigating back closes the drawer
/// even if `open` stays `true`, and it only opens again once `open` goes
/// `false` and then `true`.
///
/// While the side panel is attached, presses never reach the main content.
pub struct Drawer<'a, Message> {
    id: Option<Id>,
    side: Element<'a, Message>,
    content: Option<Element<'a, Message>>,
    open: bool,
    end: bool,
    on_click_overlay: Option<OnPress<'a, Message>>,
    overlay_id: Id,
    overlay_label: SmolStr,
    transition: Transition,
    class: ClassList,
    content_class: ClassList,
    side_class: ClassList,
    overlay_class: ClassList,
}

impl<'a, Message> Drawer<'a, Message> {
    /// Creates a closed [`Drawer`] with the given side content.
    pub fn new(side: impl Into<Element<'a, Message>>) -> Self {
        Self {
            id: None,
            side: side.into(),
            content: None,
            open: false,
            end: false,
            on_click_overlay: None,
            overlay_id: Id::new(OVERLAY_ID),
            overlay_label: SmolStr::new("close sidebar"),
            transition: Transition::default(),
            class: ClassList::new(),
            content_class: ClassList::new(),
            side_class: ClassList::new(),
            overlay_class: ClassList::new(),
        }
    }

    /// Sets the [`Id`] of the [`Drawer`].
    #[must_use]
    pub fn id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the main content of the [`Drawer`].
    #[must_use]
    pub fn content(mut self, content: impl Into<Element<'a, Message>>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the main content of the [`Drawer`], if `Some`.
    #[must_use]
    pub fn content_maybe(mut self, content: Option<impl Into<Element<'a, Message>>>) -> Self {
        self.content = content.map(Into::into);
        self
    }

    /// Sets whether the [`Drawer`] should be open.
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Anchors the side panel to the end edge instead of the start edge.
    #[must_use]
    pub fn end(mut self, end: bool) -> Self {
        self.end = end;
        self
    }

    /// Sets the message produced when the drawer is dismissed through its
    /// overlay or a back navigation.
    #[must_use]
    pub fn on_click_overlay(mut self, message: Message) -> Self {
        self.on_click_overlay = Some(OnPress::Direct(message));
        self
    }

    /// Sets the closure producing a message when the drawer is dismissed.
    #[must_use]
    pub fn on_click_overlay_with(mut self, f: impl Fn() -> Message + 'a) -> Self {
        self.on_click_overlay = Some(OnPress::Closure(Box::new(f)));
        self
    }

    /// Sets the [`Id`] of the overlay.
    ///
    /// Drawers living in the same view need distinct overlay ids.
    #[must_use]
    pub fn overlay_id(mut self, id: impl Into<Id>) -> Self {
        self.overlay_id = id.into();
        self
    }

    /// Sets the accessible label of the overlay.
    #[must_use]
    pub fn overlay_label(mut self, label: impl AsRef<str>) -> Self {
        self.overlay_label = SmolStr::new(label);
        self
    }

    /// Sets the [`Transition`] of the [`Drawer`].
    #[must_use]
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Adds style classes to the [`Drawer`].
    #[must_use]
    pub fn style(mut self, classes: &str) -> Self {
        self.class.extend_from(classes);
        self
    }

    /// Adds style classes to the main content.
    #[must_use]
    pub fn content_style(mut self, classes: &str) -> Self {
        self.content_class.extend_from(classes);
        self
    }

    /// Adds style classes to the side panel.
    #[must_use]
    pub fn side_style(mut self, classes: &str) -> Self {
        self.side_class.extend_from(classes);
        self
    }

    /// Adds style classes to the overlay.
    #[must_use]
    pub fn overlay_style(mut self, classes: &str) -> Self {
        self.overlay_class.extend_from(classes);
        self
    }

    fn elements(&self) -> Vec<&Element<'a, Message>> {
        std::iter::once(&self.side)
            .chain(self.content.as_ref())
            .collect()
    }

    fn reconcile(&self, tree: &mut Tree) {
        if tree.children.len() != self.elements().len() {
            log::warn!("Drawer: state tree out of sync, reinitializing");
            tree.children = self.elements().into_iter().map(Tree::new).collect();
        }
    }

    fn classes(&self) -> ClassList {
        let mut classes = ClassList::new().with("drawer");

        if self.end {
            classes.push("drawer-end");
        }

        classes.append(&self.class);
        classes
    }

    fn with_classes(base: &str, extra: &ClassList) -> ClassList {
        let mut classes = ClassList::new().with(base);
        classes.append(extra);
        classes
    }
}

fn with_state<R>(state: &mut tree::State, f: impl FnOnce(&mut State) -> R) -> R {
    if let Some(state) = state.downcast_mut::<State>() {
        return f(state);
    }

    log::warn!("Drawer: missing state, starting closed");

    let mut fresh = State::new();
    let result = f(&mut fresh);
    *state = tree::State::new(fresh);

    result
}

impl<'a, Message> Widget<Message> for Drawer<'a, Message>
where
    Message: Clone,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::new())
    }

    fn children(&self) -> Vec<Tree> {
        self.elements().into_iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.elements());
    }

    fn render(&mut self, tree: &mut Tree, frame: &Frame) -> Node {
        self.reconcile(tree);

        let Tree {
            state, children, ..
        } = tree;

        let visible = with_state(state, |state| {
            if state.sync(self.open, self.transition, frame.now) {
                log::debug!("Drawer phase changed to {:?}", state.phase());
            }

            state.is_visible()
        });

        let mut trees = children.iter_mut();
        let side_tree = trees.next();

        let content = Node::new(Role::Content)
            .classes(Self::with_classes("drawer-content", &self.content_class))
            .extend(
                self.content
                    .as_mut()
                    .zip(trees.next())
                    .map(|(content, tree)| content.as_widget_mut().render(tree, frame)),
            );

        let root = Node::new(Role::Drawer)
            .id_maybe(self.id.clone())
            .classes(self.classes())
            .push(content);

        if !visible {
            return root;
        }

        let overlay = Node::new(Role::Overlay)
            .id(self.overlay_id.clone())
            .label(Some(self.overlay_label.clone()))
            .classes(Self::with_classes("drawer-overlay", &self.overlay_class))
            .pressable();

        let panel = Node::new(Role::Panel)
            .classes(self.side_class.clone())
            .extend(side_tree.map(|tree| self.side.as_widget_mut().render(tree, frame)));

        root.push(
            Node::new(Role::Side)
                .classes(ClassList::from("drawer-side"))
                .push(overlay)
                .push(panel),
        )
    }

    fn update(&mut self, tree: &mut Tree, event: &Event, shell: &mut Shell<'_, Message>) {
        self.reconcile(tree);

        let Tree {
            state, children, ..
        } = tree;

        if let Event::Tick(now) = event {
            if with_state(state, |state| state.advance(self.transition, *now)) {
                shell.request_redraw();
            }
        }

        let visible = with_state(state, |state| state.phase().is_visible());

        let mut trees = children.iter_mut();
        let side_tree = trees.next();
        let content_tree = trees.next();

        if visible {
            if let Some(tree) = side_tree {
                self.side.as_widget_mut().update(tree, event, shell);
            }

            if shell.is_event_captured() {
                return;
            }

            let dismissing = match event {
                Event::Press(target) => *target == self.overlay_id,
                Event::BackRequested => true,
                Event::Tick(_) => false,
            };

            if dismissing {
                if with_state(state, |state| state.dismiss(self.transition)) {
                    if let Some(on_click_overlay) = &self.on_click_overlay {
                        shell.publish(on_click_overlay.get());
                    }

                    shell.request_redraw();
                }

                shell.capture_event();
                return;
            }

            if matches!(event, Event::Press(_)) {
                return;
            }
        }

        if let Some((content, tree)) = self.content.as_mut().zip(content_tree) {
            content.as_widget_mut().update(tree, event, shell);
        }
    }
}

impl<'a, Message> From<Drawer<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'a,
{
    fn from(drawer: Drawer<'a, Message>) -> Self {
        Element::new(drawer)
    }
}
