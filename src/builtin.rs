pub const PAGE_TITLE: &str = "Dark Mode Science!";

pub const FAVICON_HREF: &str = "/favicon.ico";

/// Utility-class stylesheet the markup's class names come from.
pub const DEFAULT_STYLESHEET_URL: &str = "https://unpkg.com/tachyons@4.12.0/css/tachyons.min.css";

pub const AUTHOR_NAME: &str = "Southclaws";

pub const AUTHOR_HREF: &str = "https://www.southcla.ws";

pub const DETAILS_SUMMARY: &str = "More Information";
