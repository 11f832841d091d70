use crate::page::{Element, LAST_UPDATE_ID, OPP_COUNT_ID, Page, TAB_BUTTON, TAB_CONTENT};

/// Renders the page model as a standalone HTML document.
pub fn render_page(page: &Page) -> String {
    let buttons = render_class(page, TAB_BUTTON);
    let panels = render_class(page, TAB_CONTENT);

    INDEX_HTML
        .replace("{{LAST_UPDATE_ID}}", LAST_UPDATE_ID)
        .replace("{{OPP_COUNT_ID}}", OPP_COUNT_ID)
        .replace("{{LAST_UPDATE}}", &escape(page.text_of(LAST_UPDATE_ID).unwrap_or_default()))
        .replace("{{OPP_COUNT}}", &escape(page.text_of(OPP_COUNT_ID).unwrap_or_default()))
        .replace("{{TAB_BUTTONS}}", &buttons)
        .replace("{{TAB_PANELS}}", &panels)
}

fn render_class(page: &Page, class: &str) -> String {
    page.handles_by_class(class)
        .into_iter()
        .filter_map(|handle| page.get(handle))
        .map(render_element)
        .collect::<Vec<_>>()
        .join("\n      ")
}

fn render_element(element: &Element) -> String {
    let mut attrs = String::new();
    if let Some(id) = &element.id {
        attrs.push_str(&format!(r#" id="{}""#, escape(id)));
    }
    if !element.classes().is_empty() {
        attrs.push_str(&format!(r#" class="{}""#, escape(&element.classes().join(" "))));
    }
    if let Some(tab) = &element.on_click_tab {
        attrs.push_str(&format!(r#" data-tab="{}""#, escape(tab)));
    }

    format!(
        "<{tag}{attrs}>{text}</{tag}>",
        tag = element.tag,
        text = escape(&element.text)
    )
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Opportunity Dashboard</title>
  <style>
    :root {
      --bg: #f4f1ea;
      --ink: #22262b;
      --muted: #636a73;
      --accent: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 18px 48px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg), #e7eef2 70%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      margin: 0 auto;
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 3vw, 2.2rem);
    }

    .meta {
      color: var(--muted);
      display: grid;
      gap: 4px;
      text-align: right;
    }

    .tabs {
      display: flex;
      gap: 8px;
    }

    .tab-btn {
      border: 1px solid var(--accent);
      background: transparent;
      color: var(--accent);
      border-radius: 999px;
      padding: 8px 18px;
      cursor: pointer;
      font: inherit;
    }

    .tab-btn.active {
      background: var(--accent);
      color: #fff;
    }

    .tab-content {
      display: none;
    }

    .tab-content.active {
      display: block;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Opportunity Dashboard</h1>
      <div class="meta">
        <span>Last update: <span id="{{LAST_UPDATE_ID}}">{{LAST_UPDATE}}</span></span>
        <span>Opportunities: <span id="{{OPP_COUNT_ID}}">{{OPP_COUNT}}</span></span>
      </div>
    </header>
    <nav class="tabs">
      {{TAB_BUTTONS}}
    </nav>
    <div class="panels">
      {{TAB_PANELS}}
    </div>
  </main>
  <script>
    const showTab = (tab, button) => {
      document.querySelectorAll('.tab-content').forEach((el) => el.classList.remove('active'));
      document.querySelectorAll('.tab-btn').forEach((el) => el.classList.remove('active'));
      const panel = document.getElementById(tab);
      if (panel) {
        panel.classList.add('active');
      }
      button.classList.add('active');
    };
    document.querySelectorAll('.tab-btn[data-tab]').forEach((button) => {
      button.addEventListener('click', () => showTab(button.dataset.tab, button));
    });
  </script>
</body>
</html>
"#;
