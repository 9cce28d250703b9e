//! HTML output for [`Page`]s

use crate::view::{Page, Section, Sidebar};
use smsdash_common::{DashError, Result};
use smsdash_i18n::Locale;
use std::fmt::{self, Write};

const STYLE: &str = "\
body{margin:0;font-family:sans-serif;display:flex;min-height:100vh;color:#262730}\
aside{width:18rem;padding:1.5rem;background:#f0f2f6;box-sizing:border-box}\
main{flex:1;padding:2rem 3rem}\
.languages{display:flex;gap:.5rem;margin-bottom:1.5rem}\
.languages button{flex:1;padding:.4rem;border:1px solid #ccc;border-radius:.4rem;background:#fff;cursor:pointer}\
.languages button.active{border-color:#ff4b4b;color:#ff4b4b}\
select{width:100%;padding:.4rem;margin:.4rem 0 1.5rem}\
figure{margin:0 0 2rem}\
.notice{padding:1rem;background:#fff3cd;border-radius:.4rem}";

/// Escape text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn document(language: Locale, title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        language.short_code(),
        escape(title),
    )
}

fn write_sidebar(out: &mut String, sidebar: &Sidebar) -> fmt::Result {
    writeln!(out, "<aside>")?;
    writeln!(out, "<h2>{}</h2>", escape(&sidebar.language_header))?;

    writeln!(out, "<form class=\"languages\" method=\"post\" action=\"/language\">")?;
    for button in &sidebar.languages {
        writeln!(
            out,
            "<button type=\"submit\" name=\"lang\" value=\"{}\"{}>{}</button>",
            button.locale.short_code(),
            if button.active { " class=\"active\"" } else { "" },
            escape(button.label),
        )?;
    }
    writeln!(out, "</form>")?;

    writeln!(out, "<form method=\"post\" action=\"/sector\">")?;
    writeln!(
        out,
        "<label for=\"sector\">{}</label>",
        escape(&sidebar.sector_label)
    )?;
    writeln!(
        out,
        "<select id=\"sector\" name=\"sector\" onchange=\"this.form.submit()\">"
    )?;
    for option in &sidebar.sectors {
        let name = escape(&option.name);
        writeln!(
            out,
            "<option value=\"{name}\"{}>{name}</option>",
            if option.selected { " selected" } else { "" },
        )?;
    }
    writeln!(out, "</select>")?;
    writeln!(out, "<noscript><button type=\"submit\">OK</button></noscript>")?;
    writeln!(out, "</form>")?;

    writeln!(
        out,
        "<p><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></p>",
        escape(&sidebar.criteria_link.url),
        escape(&sidebar.criteria_link.label),
    )?;
    writeln!(out, "</aside>")
}

fn write_section(out: &mut String, section: &Section) -> fmt::Result {
    writeln!(out, "<section>")?;
    writeln!(out, "<h3>{}</h3>", escape(&section.heading))?;
    if let Some(heading) = &section.metrics_heading {
        writeln!(out, "<h3>{}</h3>", escape(heading))?;
    }
    for chart in &section.charts {
        // plotters escapes its own text nodes
        writeln!(out, "<figure>{}</figure>", chart.svg)?;
    }
    writeln!(out, "</section>")
}

fn write_main(body: &mut String, page: &Page) -> fmt::Result {
    write_sidebar(body, &page.sidebar)?;

    writeln!(body, "<main>")?;
    writeln!(body, "<h1>{}</h1>", escape(&page.title))?;
    if let Some(notice) = &page.notice {
        writeln!(body, "<p class=\"notice\">{}</p>", escape(notice))?;
    }
    writeln!(body, "<h2>{}</h2>", escape(&page.sector_header))?;
    for section in &page.sections {
        write_section(body, section)?;
    }
    writeln!(body, "</main>")
}

/// Render the full dashboard document
pub fn render_page(page: &Page) -> Result<String> {
    let mut body = String::new();
    write_main(&mut body, page)
        .map_err(|e| DashError::with_source("Failed to write dashboard HTML", e))?;
    Ok(document(page.language, &page.title, &body))
}

/// Render the page shown in place of the dashboard when a request fails
pub fn render_error(language: Locale, title: &str, message: &str) -> String {
    let body = format!(
        "<main>\n<h1>{}</h1>\n<pre class=\"notice\">{}</pre>\n</main>\n",
        escape(title),
        escape(message)
    );
    document(language, title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{LanguageButton, Link, SectorOption};

    fn page() -> Page {
        Page {
            language: Locale::French,
            title: "Tableau de Bord des Campagnes SMS".to_string(),
            sidebar: Sidebar {
                language_header: "Language / Langue".to_string(),
                languages: vec![
                    LanguageButton {
                        locale: Locale::English,
                        label: "English",
                        active: false,
                    },
                    LanguageButton {
                        locale: Locale::French,
                        label: "Français",
                        active: true,
                    },
                ],
                sector_label: "Sélectionner un Secteur".to_string(),
                sectors: vec![
                    SectorOption {
                        name: "Food & Drink".to_string(),
                        selected: false,
                    },
                    SectorOption {
                        name: "Retail".to_string(),
                        selected: true,
                    },
                ],
                criteria_link: Link {
                    label: "Visite la Table de Critères".to_string(),
                    url: "https://example.com/?a=1&b=2".to_string(),
                },
            },
            sector_header: "Secteur: Retail".to_string(),
            notice: None,
            sections: vec![Section {
                heading: "Analyse Humaine".to_string(),
                metrics_heading: None,
                charts: Vec::new(),
            }],
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a href=\"x\">&'</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;");
        assert_eq!(escape("Secteur"), "Secteur");
    }

    #[test]
    fn test_render_page_controls() {
        let html = render_page(&page()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"fr\">"));
        assert!(html.contains("name=\"lang\" value=\"en\">English</button>"));
        assert!(html.contains("value=\"fr\" class=\"active\">Français</button>"));
        assert!(html.contains("<option value=\"Retail\" selected>Retail</option>"));
        assert!(html.contains("<option value=\"Food &amp; Drink\">Food &amp; Drink</option>"));
        assert!(html.contains("href=\"https://example.com/?a=1&amp;b=2\""));
        assert!(html.contains("<h2>Secteur: Retail</h2>"));
        assert!(html.contains("<h3>Analyse Humaine</h3>"));
    }

    #[test]
    fn test_render_page_sections() {
        let mut page = page();
        page.notice = Some("No data <yet>".to_string());
        page.sections[0].metrics_heading = Some("Indicateurs".to_string());

        let html = render_page(&page).unwrap();
        assert!(html.contains("<p class=\"notice\">No data &lt;yet&gt;</p>"));
        assert!(html.contains("<section>\n<h3>Analyse Humaine</h3>\n<h3>Indicateurs</h3>\n</section>"));
        assert!(html.ends_with("</main>\n</body>\n</html>\n"));
    }

    #[test]
    fn test_render_error() {
        let html = render_error(Locale::English, "Dashboard unavailable", "missing <file>");
        assert!(html.contains("<h1>Dashboard unavailable</h1>"));
        assert!(html.contains("missing &lt;file&gt;"));
    }
}
