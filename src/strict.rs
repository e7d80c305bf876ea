use kuchiki::traits::TendrilSink as _;

use crate::content::SECTIONS;
use crate::theme::{ColorMode, THEME};

/// Parses a rendered page and checks that it actually is the page for `mode`.
pub fn assert_page_consistent(html: &str, mode: ColorMode) -> anyhow::Result<()> {
    let doc = kuchiki::parse_html().one(html);
    assert_mode_switch(&doc, mode)?;
    assert_style(&doc, mode)?;
    assert_sections(&doc)?;
    Ok(())
}

fn assert_mode_switch(doc: &kuchiki::NodeRef, mode: ColorMode) -> anyhow::Result<()> {
    let Ok(link) = doc.select_first("header #mode-switch") else {
        anyhow::bail!("page check failed: header has no mode switch link");
    };
    let href = link
        .attributes
        .borrow()
        .get("href")
        .map(|s| s.to_string())
        .unwrap_or_default();
    if href != mode.toggle_href() {
        anyhow::bail!(
            "page check failed: mode switch points at \"{}\", expected \"{}\"",
            href,
            mode.toggle_href()
        );
    }
    let label = link.text_contents();
    if label.trim() != mode.toggle_label() {
        anyhow::bail!(
            "page check failed: mode switch reads \"{}\", expected \"{}\"",
            label.trim(),
            mode.toggle_label()
        );
    }
    Ok(())
}

fn assert_style(doc: &kuchiki::NodeRef, mode: ColorMode) -> anyhow::Result<()> {
    let css: String = match doc.select("style") {
        Ok(nodes) => nodes.map(|n| n.text_contents()).collect(),
        Err(()) => String::new(),
    };
    let background = format!("body {{\n  background-color: {};", THEME.background(mode));
    let text = format!("details {{\n  color: {};", THEME.text(mode));
    let link = format!("a {{\n  color: {};", THEME.text(mode));
    for rule in [&background, &text, &link] {
        if !css.contains(rule.as_str()) {
            anyhow::bail!("page check failed: <style> lacks \"{rule}\"");
        }
    }
    Ok(())
}

fn assert_sections(doc: &kuchiki::NodeRef) -> anyhow::Result<()> {
    let titles: Vec<String> = match doc.select("main section h3") {
        Ok(nodes) => nodes.map(|n| n.text_contents()).collect(),
        Err(()) => Vec::new(),
    };
    let expected: Vec<&str> = SECTIONS.iter().map(|s| s.title).collect();
    if titles != expected {
        anyhow::bail!(
            "page check failed: sections {:?} do not match {:?}",
            titles,
            expected
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::{PageOptions, render_page};

    #[test]
    fn rendered_pages_pass() {
        let opts = PageOptions::default();
        for mode in [ColorMode::Light, ColorMode::Dark] {
            assert_page_consistent(&render_page(mode, &opts), mode).unwrap();
        }
    }

    #[test]
    fn page_for_other_mode_fails() {
        let opts = PageOptions::default();
        let light = render_page(ColorMode::Light, &opts);
        let err = assert_page_consistent(&light, ColorMode::Dark).unwrap_err();
        assert!(err.to_string().contains("mode switch"));
    }

    #[test]
    fn missing_section_fails() {
        let opts = PageOptions { stylesheet: None };
        let page = render_page(ColorMode::Light, &opts).replace("In Conclusion", "Fin");
        let err = assert_page_consistent(&page, ColorMode::Light).unwrap_err();
        assert!(err.to_string().contains("sections"));
    }

    #[test]
    fn stripped_style_fails() {
        let page = r#"<html><body><header><a id="mode-switch" href="/?dark=1">Dark mode</a></header></body></html>"#;
        let err = assert_page_consistent(page, ColorMode::Light).unwrap_err();
        assert!(err.to_string().contains("<style>"));
    }

    #[test]
    fn wrong_heading_color_fails() {
        let opts = PageOptions { stylesheet: None };
        let page = render_page(ColorMode::Dark, &opts)
            .replace("details {\n  color: #f4f4f4;", "details {\n  color: #111;");
        let err = assert_page_consistent(&page, ColorMode::Dark).unwrap_err();
        assert!(err.to_string().contains("details"));
    }

    #[test]
    fn unlabelled_header_link_is_not_the_switch() {
        let page = r#"<html><body><header><a href="/?dark=1">Dark mode</a></header></body></html>"#;
        let err = assert_page_consistent(page, ColorMode::Light).unwrap_err();
        assert!(err.to_string().contains("no mode switch"));
    }
}
