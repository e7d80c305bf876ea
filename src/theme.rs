/// Light or dark rendering of the page.
///
/// Derived from the `dark` query parameter on every request and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Only the exact value `"1"` selects dark mode. Anything else, including a
    /// missing parameter, falls back to light without an error.
    pub fn from_query(dark: Option<&str>) -> Self {
        match dark {
            Some("1") => ColorMode::Dark,
            _ => ColorMode::Light,
        }
    }

    /// Picks the mode out of a raw query string such as `a=b&dark=1`.
    ///
    /// The first `dark` pair wins; repeated or undecodable pairs never error.
    pub fn from_query_string(query: Option<&str>) -> Self {
        let Some(query) = query else {
            return ColorMode::Light;
        };
        let dark = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "dark")
            .map(|(_, value)| value.into_owned());
        Self::from_query(dark.as_deref())
    }

    pub fn opposite(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// Link target that renders the page in [`Self::opposite`].
    pub fn toggle_href(self) -> &'static str {
        match self.opposite() {
            ColorMode::Dark => "/?dark=1",
            ColorMode::Light => "/",
        }
    }

    /// Label of the mode switch, naming the mode it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self.opposite() {
            ColorMode::Dark => "Dark mode",
            ColorMode::Light => "Light mode",
        }
    }
}

/// One value per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<T> {
    pub light: T,
    pub dark: T,
}

impl<T: Copy> Palette<T> {
    pub fn get(&self, mode: ColorMode) -> T {
        match mode {
            ColorMode::Light => self.light,
            ColorMode::Dark => self.dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Palette<&'static str>,
    pub text: Palette<&'static str>,
}

pub const THEME: Theme = Theme {
    background: Palette {
        light: "#f4f4f4",
        dark: "#111",
    },
    text: Palette {
        light: "#111",
        dark: "#f4f4f4",
    },
};

impl Theme {
    pub fn background(&self, mode: ColorMode) -> &'static str {
        self.background.get(mode)
    }

    pub fn text(&self, mode: ColorMode) -> &'static str {
        self.text.get(mode)
    }

    /// Global stylesheet inlined into the page head.
    ///
    /// Hovered links swap to the other mode's colors.
    pub fn global_css(&self, mode: ColorMode) -> String {
        let hover = mode.opposite();
        format!(
            r#"body {{
  background-color: {bg};
}}
p,
h1,
h2,
h3,
details {{
  color: {text};
}}
a {{
  color: {text};
}}
a:hover {{
  color: {hover_text};
  background-color: {hover_bg};
}}
"#,
            bg = self.background(mode),
            text = self.text(mode),
            hover_text = self.text(hover),
            hover_bg = self.background(hover),
        )
    }
}
