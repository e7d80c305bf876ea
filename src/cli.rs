use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use url::Url;

use crate::builtin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Serve the page over HTTP.
    Serve,
    /// Render one page to `--out` (or stdout) and exit.
    Render,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// What to do: `serve` or `render`.
    #[arg(long, value_enum, default_value = "serve")]
    pub mode: Mode,

    /// Host address to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 3000)]
    pub port: u16,

    /// Directory with static files such as `favicon.ico`.
    #[arg(long, default_value = "public")]
    pub public_dir: PathBuf,

    /// Render the dark variant (`render` mode only).
    #[arg(long)]
    pub dark: bool,

    /// Output HTML file for `render` mode. Defaults to stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Utility stylesheet linked from the page head.
    #[arg(long, default_value = builtin::DEFAULT_STYLESHEET_URL)]
    pub stylesheet_url: Url,

    /// Leave the utility stylesheet out of the page head.
    #[arg(long, conflicts_with = "stylesheet_url")]
    pub no_stylesheet: bool,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "info")]
    pub log: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_serve_on_localhost() {
        let args = Args::try_parse_from(["dark-mode-science"]).unwrap();
        assert_eq!(args.mode, Mode::Serve);
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 3000);
        assert!(!args.dark);
        assert_eq!(args.stylesheet_url.as_str(), builtin::DEFAULT_STYLESHEET_URL);
    }

    #[test]
    fn render_flags_parse() {
        let args = Args::try_parse_from([
            "dark-mode-science",
            "--mode",
            "render",
            "--dark",
            "--out",
            "page.html",
            "--no-stylesheet",
        ])
        .unwrap();
        assert_eq!(args.mode, Mode::Render);
        assert!(args.dark);
        assert!(args.no_stylesheet);
        assert_eq!(args.out, Some(PathBuf::from("page.html")));
    }

    #[test]
    fn rejects_bad_stylesheet_url() {
        assert!(Args::try_parse_from(["dark-mode-science", "--stylesheet-url", "not a url"]).is_err());
    }
}
