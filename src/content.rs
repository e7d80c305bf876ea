/// One article section. `body` and `details` are trusted HTML fragments.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    pub body: &'static str,
    pub details: Option<&'static str>,
}

pub const SECTIONS: &[Section] = &[
    Section {
        title: "Dark Mode Is Better! ...Right?",
        body: r#"<p>It's not quite that simple!</p>
<p>This info page aims to break down some of the myths around <em>dark modes</em> and help you look after your eyes!</p>"#,
        details: None,
    },
    Section {
        title: "It's Healthier!",
        body: r#"<p>Not necessarily. Much of the research out there claims otherwise. Using dark mode in a dark room is likely better than light mode <em>however</em> using it in a light environment is actually more likely to put more strain on your eyes. In general, you're best to just turn a light on and work in a light environment.</p>"#,
        details: Some(
            r#"Your iris sphincter muscle must work harder to allow more light in when you're focusing on a dark screen. However if your environment is bright then too much light from the surroundings will bleed in. This results in both your cillary muscle working extra hard to allow more light from the screen and then your retina suffering from overexposure from ambient light."#,
        ),
    },
    Section {
        title: "It's Better for reading and productivity",
        body: r#"<p>Generally it is more productive for working, concentration and reading speed to use <cite><a href="https://www.ncbi.nlm.nih.gov/pubmed/23654206">dark text on a lighter background.</a></cite></p>"#,
        details: Some(
            r#"This is known as "Positive Polarity" as in, dark text on a light background. It also has implications for font size too. It can <cite><a href="https://www.ncbi.nlm.nih.gov/pubmed/25141597">improve perception of detail</a></cite> resulting in an increased information density for constrained interface sizes."#,
        ),
    },
    Section {
        title: "It's Better for Battery Life",
        body: r#"<p>This myth is easy. If your screen is OLED, darker pixels will use less energy. If your screen is not OLED, then it makes no difference.</p>"#,
        details: Some(
            r#"OLED and AMOLED displays contain an individual light source for each pixel. Other common display types such as LCD use a single (or a few, large) light sources for the entire screen. This is important because (AM)OLED displays will use more or less energy depending on the sum total of energy output by the pixels. This means lots of dark pixels means lower energy usage!"#,
        ),
    },
    Section {
        title: "In Conclusion",
        body: r#"<ul>
<li>Dark mode isn't a magical solution to eye strain.</li>
<li>Match the ambient light of the surroundings.</li>
</ul>"#,
        details: None,
    },
];
