//! Controllers of the demo window, as a view loader would populate them.

use std::{cell::RefCell, rc::Rc};

use controller_bridge::{
    Bridge, BridgeError, Controller, HandlerError, HandlerName, MemberDescriptor, MemberMarkers,
    ViewControl,
};

#[derive(Debug)]
pub struct Button {
    pub id: &'static str,
    pub text: String,
}

#[derive(Debug)]
pub struct TextField {
    pub id: &'static str,
    pub text: RefCell<String>,
}

#[derive(Debug, Default)]
pub struct Label {
    pub text: RefCell<String>,
}

/// Parent controller. Its trampolines are what the framework calls on events.
pub struct MainWindow {
    bridge: Rc<Bridge>,
    save_button: Option<Rc<Button>>,
    cancel_button: Option<Rc<Button>>,
    title_field: Option<Rc<TextField>>,
}

impl MainWindow {
    pub fn load(bridge: &Rc<Bridge>, title: &str) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            bridge: Rc::clone(bridge),
            save_button: Some(Rc::new(Button {
                id: "saveButton",
                text: "Save".into(),
            })),
            cancel_button: Some(Rc::new(Button {
                id: "cancelButton",
                text: "Cancel".into(),
            })),
            title_field: Some(Rc::new(TextField {
                id: "titleField",
                text: RefCell::new(title.to_string()),
            })),
        }))
    }

    pub fn on_save(&self) -> Result<usize, BridgeError> {
        self.bridge.relay("on_save")
    }

    pub fn on_cancel(&self) -> Result<usize, BridgeError> {
        self.bridge.relay("on_cancel")
    }

    pub fn on_close(&self) -> Result<usize, BridgeError> {
        self.bridge.relay("on_close")
    }

    /// Plays the framework's part: routes an event id to its trampoline.
    pub fn fire(&self, event: &str) -> Option<Result<usize, BridgeError>> {
        match event {
            "on_save" => Some(self.on_save()),
            "on_cancel" => Some(self.on_cancel()),
            "on_close" => Some(self.on_close()),
            _ => None,
        }
    }
}

impl Controller for MainWindow {
    fn members(&self) -> Vec<MemberDescriptor> {
        vec![
            MemberDescriptor::view_bound("save_button"),
            MemberDescriptor::view_bound("cancel_button"),
            MemberDescriptor::view_bound("title_field"),
        ]
    }

    fn get(&self, member: &str) -> Result<Option<ViewControl>, BridgeError> {
        match member {
            "save_button" => Ok(self.save_button.clone().map(ViewControl::from)),
            "cancel_button" => Ok(self.cancel_button.clone().map(ViewControl::from)),
            "title_field" => Ok(self.title_field.clone().map(ViewControl::from)),
            _ => Err(BridgeError::unknown_member(self.controller_name(), member)),
        }
    }

    fn set(&mut self, member: &str, _value: ViewControl) -> Result<(), BridgeError> {
        Err(BridgeError::unknown_member(self.controller_name(), member))
    }
}

/// Sub-controller of an embedded editor panel.
pub struct EditorPanel {
    pub name: String,
    save_button: Option<Rc<Button>>,
    title_field: Option<Rc<TextField>>,
    status_label: Option<Rc<Label>>,
    pub saved: Vec<String>,
    pub cancelled: usize,
}

impl EditorPanel {
    pub fn load(name: String) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            name,
            save_button: None,
            title_field: None,
            status_label: Some(Rc::new(Label::default())),
            saved: Vec::new(),
            cancelled: 0,
        }))
    }

    pub fn save_button(&self) -> Option<&Rc<Button>> {
        self.save_button.as_ref()
    }

    pub fn title_field(&self) -> Option<&Rc<TextField>> {
        self.title_field.as_ref()
    }

    pub fn status(&self) -> String {
        self.status_label
            .as_ref()
            .map(|label| label.text.borrow().clone())
            .unwrap_or_default()
    }
}

impl Controller for EditorPanel {
    fn members(&self) -> Vec<MemberDescriptor> {
        vec![
            MemberDescriptor::bridged("save_button"),
            MemberDescriptor::bridged("title_field"),
            MemberDescriptor::view_bound("status_label"),
        ]
    }

    fn get(&self, member: &str) -> Result<Option<ViewControl>, BridgeError> {
        match member {
            "save_button" => Ok(self.save_button.clone().map(ViewControl::from)),
            "title_field" => Ok(self.title_field.clone().map(ViewControl::from)),
            "status_label" => Ok(self.status_label.clone().map(ViewControl::from)),
            _ => Err(BridgeError::unknown_member(self.controller_name(), member)),
        }
    }

    fn set(&mut self, member: &str, value: ViewControl) -> Result<(), BridgeError> {
        let controller = self.controller_name().to_string();
        match member {
            "save_button" => self.save_button = Some(value.expect_type(&controller, member)?),
            "title_field" => self.title_field = Some(value.expect_type(&controller, member)?),
            _ => return Err(BridgeError::unknown_member(controller, member)),
        }
        Ok(())
    }

    fn handlers(&self) -> Vec<HandlerName> {
        vec!["on_save".into(), "on_cancel".into()]
    }

    fn invoke(&mut self, handler: &str) -> Result<(), HandlerError> {
        match handler {
            "on_save" => {
                let field = self
                    .title_field
                    .as_ref()
                    .ok_or_else(|| format!("{}: title field was never injected", self.name))?;
                let title = field.text.borrow().clone();
                if let Some(label) = &self.status_label {
                    *label.text.borrow_mut() = format!("saved '{title}'");
                }
                self.saved.push(title);
            }
            "on_cancel" => {
                self.cancelled += 1;
                if let Some(label) = &self.status_label {
                    *label.text.borrow_mut() = "cancelled".into();
                }
            }
            _ => return Err(BridgeError::unknown_handler(self.controller_name(), handler).into()),
        }
        Ok(())
    }
}

/// Sub-controller that forgot to mark its `cancel_button` as bridged.
pub struct StatusBar {
    cancel_button: Option<Rc<Button>>,
    pub closed: bool,
}

impl StatusBar {
    pub fn load() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            cancel_button: None,
            closed: false,
        }))
    }

    pub fn has_cancel_button(&self) -> bool {
        self.cancel_button.is_some()
    }
}

impl Controller for StatusBar {
    fn members(&self) -> Vec<MemberDescriptor> {
        vec![MemberDescriptor::new("cancel_button", MemberMarkers::UNMARKED)]
    }

    fn get(&self, member: &str) -> Result<Option<ViewControl>, BridgeError> {
        match member {
            "cancel_button" => Ok(self.cancel_button.clone().map(ViewControl::from)),
            _ => Err(BridgeError::unknown_member(self.controller_name(), member)),
        }
    }

    fn set(&mut self, member: &str, value: ViewControl) -> Result<(), BridgeError> {
        match member {
            "cancel_button" => {
                self.cancel_button = Some(value.expect_type(self.controller_name(), member)?);
                Ok(())
            }
            _ => Err(BridgeError::unknown_member(self.controller_name(), member)),
        }
    }

    fn handlers(&self) -> Vec<HandlerName> {
        vec!["on_close".into()]
    }

    fn invoke(&mut self, handler: &str) -> Result<(), HandlerError> {
        match handler {
            "on_close" => {
                self.closed = true;
                Ok(())
            }
            _ => Err(BridgeError::unknown_handler(self.controller_name(), handler).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use controller_bridge::BridgeConfig;

    use super::*;

    fn wired(panels: usize) -> (Rc<Bridge>, Rc<RefCell<MainWindow>>, Vec<Rc<RefCell<EditorPanel>>>) {
        let bridge = Rc::new(Bridge::new(BridgeConfig::quiet()));
        let window = MainWindow::load(&bridge, "Quarterly report");
        bridge.register(&window).expect("register window");
        let panels: Vec<_> = (0..panels)
            .map(|index| EditorPanel::load(format!("panel-{index}")))
            .collect();
        for panel in &panels {
            bridge.register(panel).expect("register panel");
        }
        (bridge, window, panels)
    }

    #[test]
    fn panels_share_window_controls() {
        let (_bridge, window, panels) = wired(2);
        let window = window.borrow();
        let window_button = window.save_button.as_ref().expect("window button");

        for panel in &panels {
            let panel = panel.borrow();
            assert!(Rc::ptr_eq(
                panel.save_button().expect("panel button"),
                window_button
            ));
            assert_eq!(panel.title_field().expect("title").id, "titleField");
        }
    }

    #[test]
    fn save_reaches_every_panel() {
        let (_bridge, window, panels) = wired(3);

        let invoked = window.borrow().fire("on_save").expect("known event").expect("relay");

        assert_eq!(invoked, 3);
        for panel in &panels {
            let panel = panel.borrow();
            assert_eq!(panel.saved, vec!["Quarterly report".to_string()]);
            assert_eq!(panel.status(), "saved 'Quarterly report'");
        }
    }

    #[test]
    fn panel_labels_are_not_shared() {
        let (bridge, _window, panels) = wired(2);
        let mapped = bridge.member("status_label").expect("first panel label");
        let first = panels[0].borrow();
        let second = panels[1].borrow();
        assert!(mapped.is(first.status_label.as_ref().expect("label")));
        assert!(!mapped.is(second.status_label.as_ref().expect("label")));
    }

    #[test]
    fn unmarked_status_bar_field_stays_empty() {
        let (bridge, window, _panels) = wired(1);
        let status_bar = StatusBar::load();
        bridge.register(&status_bar).expect("register status bar");

        assert!(!status_bar.borrow().has_cancel_button());
        assert_eq!(window.borrow().fire("on_close").expect("known").expect("relay"), 1);
        assert!(status_bar.borrow().closed);
    }

    #[test]
    fn unknown_event_has_no_trampoline() {
        let (_bridge, window, _panels) = wired(1);
        assert!(window.borrow().fire("on_print").is_none());
    }
}
