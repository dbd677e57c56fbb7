// HTML rendering for the dashboard page
use crate::domain::page::{Page, StatusNode, LOADING_TEXT};
use crate::domain::table::{MetricTable, ResultsContainer};
use crate::domain::timeframe::{SubmitState, MAX_TIMEFRAME_LENGTH, MIN_TIMEFRAME_LENGTH};
use std::fmt::Write;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css";

/// Materialize the page document into a full HTML response body.
pub fn render_page(page: &Page) -> String {
    let mut html = String::with_capacity(4096);
    let title = html_escape(&page.title);

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<link rel=\"stylesheet\" href=\"{BOOTSTRAP_CSS}\">\n</head>\n\
         <body>\n<main class=\"container\">\n<h1>{title}</h1>\n"
    );

    render_timeframe_form(&mut html, page);
    render_status(&mut html, page.status());

    html.push_str("<div class=\"row\" id=\"sectionResults\">\n");
    render_results(&mut html, page.results());
    html.push_str("</div>\n</main>\n");
    html.push_str(&page_script());
    html.push_str("</body>\n</html>\n");
    html
}

fn render_timeframe_form(html: &mut String, page: &Page) {
    let submit = page.submit_state();
    let disabled = if submit.is_enabled() { "" } else { " disabled" };
    let token_input = page
        .access_token()
        .map(|token| {
            format!(
                "<input type=\"hidden\" name=\"access_token\" value=\"{}\">\n",
                html_escape(token.as_str())
            )
        })
        .unwrap_or_default();

    let _ = write!(
        html,
        "<form method=\"get\" action=\"/\" class=\"row g-2 align-items-end\">\n\
         <div class=\"col-auto\"><label for=\"timeframeLength\" class=\"form-label\">Length</label>\
         <input type=\"number\" min=\"1\" max=\"100\" class=\"form-control\" id=\"timeframeLength\" \
         name=\"timeframeLength\" value=\"{}\"></div>\n\
         <div class=\"col-auto\"><label for=\"timeframeUnit\" class=\"form-label\">Unit</label>\
         <input type=\"text\" class=\"form-control\" id=\"timeframeUnit\" name=\"timeframeUnit\" value=\"{}\"></div>\n\
         <div class=\"col-auto\"><button type=\"submit\" id=\"customTimeButton\" class=\"btn {}\"{}>Submit</button></div>\n\
         {}</form>\n",
        html_escape(page.timeframe_length()),
        html_escape(page.timeframe_unit()),
        submit.css_class(),
        disabled,
        token_input
    );
}

fn render_status(html: &mut String, status: &[StatusNode]) {
    html.push_str("<section class=\"loading\">\n");
    for node in status {
        match node {
            StatusNode::Loading => {
                let _ = writeln!(html, "<p>{}</p>", LOADING_TEXT);
            }
            StatusNode::Error(lines) => {
                let escaped: Vec<String> = lines.iter().map(|l| html_escape(l)).collect();
                let _ = writeln!(html, "<p>{}</p>", escaped.join(" <br> "));
            }
        }
    }
    html.push_str("</section>\n");
}

fn render_results(html: &mut String, results: &ResultsContainer) {
    html.push_str("<section class=\"col\" id=\"results\">\n");
    for table in results.tables() {
        html.push_str(&render_table(table));
    }
    html.push_str("</section>\n");
}

/// Render one metric table inside its responsive wrapper.
pub fn render_table(table: &MetricTable) -> String {
    let mut html = String::from("<div class=\"table-responsive\"><table class=\"table\">");

    html.push_str("<thead><tr>");
    let mut header = table.header_cells().into_iter();
    if let Some(first) = header.next() {
        let _ = write!(
            html,
            "<th scope=\"col\" style=\"text-decoration: underline;\">{}</th>",
            html_escape(first)
        );
    }
    for cell in header {
        let _ = write!(html, "<th scope=\"col\">{}</th>", html_escape(cell));
    }
    html.push_str("</tr></thead>");

    html.push_str("<tbody><tr>");
    let mut body = table.body_cells().into_iter();
    if let Some(label) = body.next() {
        let _ = write!(html, "<th scope=\"row\">{}</th>", html_escape(label));
    }
    for cell in body {
        let _ = write!(html, "<td>{}</td>", html_escape(cell));
    }
    html.push_str("</tr></tbody></table></div>\n");
    html
}

/// Inline script for the two browser-side duties: hand a login redirect's
/// `#access_token=` fragment to the server, and re-run the submit gate on input.
fn page_script() -> String {
    format!(
        r#"<script>
(function () {{
  var hash = window.location.hash;
  if (hash.indexOf("access_token=") !== -1) {{
    var params = new URLSearchParams(window.location.search);
    params.set("access_token", hash.split("access_token=")[1].split("&")[0]);
    window.location.replace(window.location.pathname + "?" + params.toString());
    return;
  }}
  var input = document.getElementById("timeframeLength");
  var button = document.getElementById("customTimeButton");
  input.addEventListener("input", function () {{
    var raw = input.value.trim();
    var length = Number(raw);
    var enabled = raw !== "" && length >= {min} && length <= {max};
    button.disabled = !enabled;
    button.classList.toggle("{enabled_class}", enabled);
    button.classList.toggle("{disabled_class}", !enabled);
  }});
}})();
</script>
"#,
        min = MIN_TIMEFRAME_LENGTH,
        max = MAX_TIMEFRAME_LENGTH,
        enabled_class = SubmitState::Enabled.css_class(),
        disabled_class = SubmitState::Disabled.css_class(),
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::AuthToken;
    use crate::domain::metrics::MetricSeries;
    use serde_json::json;

    fn page(length: &str) -> Page {
        Page::new("Metrics".to_string(), length.to_string(), "hours".to_string())
    }

    #[test]
    fn test_render_table_cells() {
        let series = MetricSeries::new(
            "cpu_usage",
            vec![json!("t1"), json!("t2")],
            vec![json!(10), json!(20)],
        );
        let html = render_table(&MetricTable::from_series(&series));

        assert!(html.starts_with("<div class=\"table-responsive\"><table class=\"table\">"));
        assert!(html.contains(
            "<thead><tr><th scope=\"col\" style=\"text-decoration: underline;\">Metric Name</th>\
             <th scope=\"col\">t1</th><th scope=\"col\">t2</th></tr></thead>"
        ));
        assert!(html.contains(
            "<tbody><tr><th scope=\"row\">Cpu Usage</th><td>10</td><td>20</td></tr></tbody>"
        ));
        assert_eq!(html.matches("<th scope=\"col\"").count(), 3);
        assert_eq!(html.matches("<td>").count() + html.matches("<th scope=\"row\">").count(), 3);
    }

    #[test]
    fn test_render_table_escapes_cells() {
        let series = MetricSeries::new("x", vec![json!("<b>t</b>")], vec![json!("1 & 2")]);
        let html = render_table(&MetricTable::from_series(&series));

        assert!(html.contains("&lt;b&gt;t&lt;/b&gt;"));
        assert!(html.contains("<td>1 &amp; 2</td>"));
    }

    #[test]
    fn test_render_page_contract_ids() {
        let html = render_page(&page("1"));

        assert!(html.contains("class=\"loading\""));
        assert!(html.contains("id=\"sectionResults\""));
        assert!(html.contains("<section class=\"col\" id=\"results\">"));
        assert!(html.contains("id=\"timeframeLength\""));
        assert!(html.contains("id=\"timeframeUnit\""));
        assert!(html.contains("id=\"customTimeButton\" class=\"btn btn-primary\">"));
    }

    #[test]
    fn test_render_page_disabled_button() {
        let html = render_page(&page("250"));

        assert!(html.contains("id=\"customTimeButton\" class=\"btn btn-secondary\" disabled>"));
        assert!(html.contains("value=\"250\""));
    }

    #[test]
    fn test_render_status_nodes() {
        let mut page = page("1");
        page.show_loading();
        assert!(render_page(&page).contains("<p>loading . . .</p>"));

        page.clear_loading();
        page.show_error(vec!["Error: 403 Status".to_string(), "AccessDenied".to_string()]);
        let html = render_page(&page);
        assert!(!html.contains("loading . . ."));
        assert!(html.contains("<p>Error: 403 Status <br> AccessDenied</p>"));
    }

    #[test]
    fn test_form_carries_access_token() {
        let mut page = page("5");
        page.set_access_token(Some(AuthToken::new("tok\"x")));
        let html = render_page(&page);

        assert!(html.contains("<input type=\"hidden\" name=\"access_token\" value=\"tok&quot;x\">"));

        let html = render_page(&self::page("5"));
        assert!(!html.contains("name=\"access_token\""));
    }

    #[test]
    fn test_page_script_reruns_gate_on_input() {
        let html = render_page(&page("250"));

        assert!(html.contains("input.addEventListener(\"input\""));
        assert!(html.contains("length >= 1 && length <= 100"));
        assert!(html.contains("button.classList.toggle(\"btn-primary\", enabled)"));
        assert!(html.contains("button.classList.toggle(\"btn-secondary\", !enabled)"));
    }

    #[test]
    fn test_page_script_moves_fragment_token_into_query() {
        let html = render_page(&page("1"));

        assert!(html.contains("hash.indexOf(\"access_token=\")"));
        assert!(html.contains("params.set(\"access_token\""));
        assert!(html.contains("window.location.replace("));
    }
}
