use maud::{DOCTYPE, Markup, PreEscaped, html};
use url::Url;

use crate::builtin;
use crate::content::{SECTIONS, Section};
use crate::theme::{ColorMode, THEME};

/// Per-deployment knobs for the page head. Nothing here depends on the request.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// External utility stylesheet; `None` leaves it out of the head.
    pub stylesheet: Option<Url>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            stylesheet: Url::parse(builtin::DEFAULT_STYLESHEET_URL).ok(),
        }
    }
}

/// Renders the whole page for `mode`. Pure and total.
pub fn render_page(mode: ColorMode, options: &PageOptions) -> String {
    let css = THEME.global_css(mode);

    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (builtin::PAGE_TITLE) }
                link rel="icon" href=(builtin::FAVICON_HREF);
                @if let Some(href) = &options.stylesheet {
                    link rel="stylesheet" href=(href.as_str());
                }
                style { (PreEscaped(css)) }
            }
            body {
                div class="sans-serif" {
                    (render_header(mode))
                    main class="pa4 measure center" {
                        article {
                            @for section in SECTIONS {
                                (render_section(section))
                            }
                        }
                    }
                    (render_footer())
                }
            }
        }
    };
    markup.into_string()
}

fn render_header(mode: ColorMode) -> Markup {
    html! {
        header class="pt5 tc" {
            h1 class="ma0" { (builtin::PAGE_TITLE) }
            p {
                a id="mode-switch" href=(mode.toggle_href()) { (mode.toggle_label()) }
            }
        }
    }
}

fn render_section(section: &Section) -> Markup {
    html! {
        section {
            h3 class="mt4" { (section.title) }
            (PreEscaped(section.body))
            @if let Some(details) = section.details {
                details class="ba" {
                    summary class="tc ma2 pointer dim" { (builtin::DETAILS_SUMMARY) }
                    p class="ma3" { (PreEscaped(details)) }
                }
            }
        }
    }
}

fn render_footer() -> Markup {
    html! {
        footer class="pa3 tc f7" {
            p {
                "Made by "
                a href=(builtin::AUTHOR_HREF) { (builtin::AUTHOR_NAME) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare() -> PageOptions {
        PageOptions { stylesheet: None }
    }

    #[test]
    fn light_page_links_to_dark() {
        let page = render_page(ColorMode::Light, &bare());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<a id="mode-switch" href="/?dark=1">Dark mode</a>"#));
        assert!(page.contains("background-color: #f4f4f4;"));
    }

    #[test]
    fn dark_page_links_back_to_root() {
        let page = render_page(ColorMode::Dark, &bare());
        assert!(page.contains(r#"<a id="mode-switch" href="/">Light mode</a>"#));
        assert!(page.contains("body {\n  background-color: #111;"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let opts = PageOptions::default();
        for mode in [ColorMode::Light, ColorMode::Dark] {
            assert_eq!(render_page(mode, &opts), render_page(mode, &opts));
        }
    }

    #[test]
    fn details_are_closed() {
        let page = render_page(ColorMode::Light, &bare());
        assert_eq!(page.matches("<details").count(), 3);
        assert!(!page.contains("<details class=\"ba\" open"));
        assert_eq!(page.matches("More Information").count(), 3);
    }

    #[test]
    fn stylesheet_link_is_optional() {
        let page = render_page(ColorMode::Light, &bare());
        assert!(!page.contains("rel=\"stylesheet\""));

        let page = render_page(ColorMode::Light, &PageOptions::default());
        assert!(page.contains(
            r#"<link rel="stylesheet" href="https://unpkg.com/tachyons@4.12.0/css/tachyons.min.css">"#
        ));
        assert!(page.contains(r#"<link rel="icon" href="/favicon.ico">"#));
    }
}
