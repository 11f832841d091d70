use crate::page::{ACTIVE, ElementHandle, Page, TAB_BUTTON, TAB_CONTENT};

/// Makes the panel whose id is `tab` the only active panel and `trigger` the
/// only active button.
///
/// When no panel matches `tab` every panel ends up inactive while `trigger`
/// is still marked active.
pub fn show_tab(page: &mut Page, tab: &str, trigger: ElementHandle) {
    for class in [TAB_CONTENT, TAB_BUTTON] {
        for handle in page.handles_by_class(class) {
            if let Some(element) = page.get_mut(handle) {
                element.remove_class(ACTIVE);
            }
        }
    }

    if let Some(panel) = page.handle_by_id(tab).and_then(|handle| page.get_mut(handle)) {
        panel.add_class(ACTIVE);
    }

    if let Some(button) = page.get_mut(trigger) {
        button.add_class(ACTIVE);
    }
}

/// User activation of `target`. Runs the tab controller when the element is
/// a tab button wired to a tab; returns whether it ran.
pub fn click(page: &mut Page, target: ElementHandle) -> bool {
    let tab = match page.get(target) {
        Some(element) if element.has_class(TAB_BUTTON) => element.on_click_tab.clone(),
        _ => None,
    };

    match tab {
        Some(tab) => {
            show_tab(page, &tab, target);
            true
        }
        None => false,
    }
}

/// Id of the first active panel.
pub fn active_tab(page: &Page) -> Option<&str> {
    page.iter()
        .find(|(_, element)| element.has_class(TAB_CONTENT) && element.has_class(ACTIVE))
        .and_then(|(_, element)| element.id.as_deref())
}

pub fn active_button(page: &Page) -> Option<ElementHandle> {
    page.iter()
        .find(|(_, element)| element.has_class(TAB_BUTTON) && element.has_class(ACTIVE))
        .map(|(handle, _)| handle)
}

/// The tab button wired to `tab`, for selecting a tab without a pointer.
pub fn tab_button(page: &Page, tab: &str) -> Option<ElementHandle> {
    page.iter()
        .find(|(_, element)| {
            element.has_class(TAB_BUTTON) && element.on_click_tab.as_deref() == Some(tab)
        })
        .map(|(handle, _)| handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_tabs;
    use crate::page::Element;

    fn active_panels(page: &Page) -> Vec<String> {
        page.handles_by_class(TAB_CONTENT)
            .into_iter()
            .filter_map(|handle| page.get(handle))
            .filter(|element| element.has_class(ACTIVE))
            .filter_map(|element| element.id.clone())
            .collect()
    }

    fn active_buttons(page: &Page) -> Vec<ElementHandle> {
        page.handles_by_class(TAB_BUTTON)
            .into_iter()
            .filter(|handle| page.get(*handle).is_some_and(|e| e.has_class(ACTIVE)))
            .collect()
    }

    #[test]
    fn show_tab_activates_only_the_requested_panel() {
        let mut page = Page::dashboard(&default_tabs());
        let button = tab_button(&page, "signals").expect("signals button");
        show_tab(&mut page, "signals", button);
        let market = tab_button(&page, "market").expect("market button");
        show_tab(&mut page, "market", market);

        assert_eq!(active_panels(&page), vec!["market".to_string()]);
        assert_eq!(active_tab(&page), Some("market"));
    }

    #[test]
    fn second_selection_replaces_the_first() {
        let mut page = Page::dashboard(&default_tabs());
        let opportunities = tab_button(&page, "opportunities").expect("button");
        let signals = tab_button(&page, "signals").expect("button");

        show_tab(&mut page, "opportunities", opportunities);
        assert_eq!(active_panels(&page), vec!["opportunities".to_string()]);

        show_tab(&mut page, "signals", signals);
        assert_eq!(active_panels(&page), vec!["signals".to_string()]);
        assert_eq!(active_buttons(&page), vec![signals]);
    }

    #[test]
    fn unknown_tab_clears_panels_but_marks_trigger() {
        let mut page = Page::dashboard(&default_tabs());
        let trigger = tab_button(&page, "opportunities").expect("button");

        show_tab(&mut page, "missing", trigger);

        assert!(active_panels(&page).is_empty());
        assert_eq!(active_tab(&page), None);
        assert_eq!(active_buttons(&page), vec![trigger]);
        assert_eq!(active_button(&page), Some(trigger));
    }

    #[test]
    fn trigger_is_marked_even_if_not_wired_to_the_tab() {
        let mut page = Page::dashboard(&default_tabs());
        let market_button = tab_button(&page, "market").expect("button");

        show_tab(&mut page, "signals", market_button);

        assert_eq!(active_tab(&page), Some("signals"));
        assert_eq!(active_button(&page), Some(market_button));
    }

    #[test]
    fn click_dispatches_wired_tab_buttons() {
        let mut page = Page::dashboard(&default_tabs());
        let button = tab_button(&page, "signals").expect("button");

        assert!(click(&mut page, button));
        assert_eq!(active_tab(&page), Some("signals"));
        assert_eq!(active_button(&page), Some(button));
    }

    #[test]
    fn click_ignores_other_elements() {
        let mut page = Page::dashboard(&default_tabs());
        let unwired = page.append(Element::new("button").with_class(TAB_BUTTON));
        let stray = page.append(Element::new("div").wired_to("signals"));

        assert!(!click(&mut page, unwired));
        assert!(!click(&mut page, stray));
        assert_eq!(active_tab(&page), Some("market"));
    }
}
