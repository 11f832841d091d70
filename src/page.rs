use crate::models::TabSpec;

pub const ACTIVE: &str = "active";
pub const TAB_CONTENT: &str = "tab-content";
pub const TAB_BUTTON: &str = "tab-btn";
pub const LAST_UPDATE_ID: &str = "lastUpdate";
pub const OPP_COUNT_ID: &str = "oppCount";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementHandle(usize);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub text: String,
    /// Tab name passed to the tab controller when this element is clicked.
    pub on_click_tab: Option<String>,
    classes: Vec<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn wired_to(mut self, tab: impl Into<String>) -> Self {
        self.on_click_tab = Some(tab.into());
        self
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

/// In-memory page: a flat, ordered list of elements addressed by handle, id
/// or class.
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: Vec<Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default dashboard layout: the two display targets, one button and one
    /// panel per tab, with the first tab marked active.
    pub fn dashboard(tabs: &[TabSpec]) -> Self {
        let mut page = Self::new();
        page.append(Element::new("span").with_id(LAST_UPDATE_ID));
        page.append(Element::new("span").with_id(OPP_COUNT_ID));

        for (index, tab) in tabs.iter().enumerate() {
            let mut button = Element::new("button")
                .with_class(TAB_BUTTON)
                .with_text(tab.label.clone())
                .wired_to(tab.id.clone());
            if index == 0 {
                button.add_class(ACTIVE);
            }
            page.append(button);
        }

        for (index, tab) in tabs.iter().enumerate() {
            let mut panel = Element::new("section")
                .with_id(tab.id.clone())
                .with_class(TAB_CONTENT)
                .with_text(tab.label.clone());
            if index == 0 {
                panel.add_class(ACTIVE);
            }
            page.append(panel);
        }

        page
    }

    pub fn append(&mut self, element: Element) -> ElementHandle {
        self.elements.push(element);
        ElementHandle(self.elements.len() - 1)
    }

    pub fn get(&self, handle: ElementHandle) -> Option<&Element> {
        self.elements.get(handle.0)
    }

    pub fn get_mut(&mut self, handle: ElementHandle) -> Option<&mut Element> {
        self.elements.get_mut(handle.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementHandle, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, element)| (ElementHandle(index), element))
    }

    /// First element in document order with the given id.
    pub fn handle_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.iter()
            .find(|(_, element)| element.id.as_deref() == Some(id))
            .map(|(handle, _)| handle)
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.handle_by_id(id).and_then(|handle| self.get(handle))
    }

    pub fn handles_by_class(&self, class: &str) -> Vec<ElementHandle> {
        self.iter()
            .filter(|(_, element)| element.has_class(class))
            .map(|(handle, _)| handle)
            .collect()
    }

    pub fn text_of(&self, id: &str) -> Option<&str> {
        self.element_by_id(id).map(|element| element.text.as_str())
    }

    /// Returns false when no element carries `id`.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.handle_by_id(id).and_then(|handle| self.get_mut(handle)) {
            Some(element) => {
                element.text = text.into();
                true
            }
            None => false,
        }
    }
}
